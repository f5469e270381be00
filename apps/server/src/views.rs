//! HTML rendering for the forum pages.
//!
//! Every page is a complete document built from [`layout`]. Post content is
//! user input and always goes through [`escape_html`].

use axum::http::StatusCode;
use forum_core::posts::Post;

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
    <nav><a href="/">All posts</a> | <a href="/create">New post</a></nav>
    <h1>{title}</h1>
{body}
</body>
</html>"#,
        title = escape_html(title),
        body = body,
    )
}

fn post_actions(post: &Post) -> String {
    format!(
        r#"        <a href="/{id}">Read</a>
        <a href="/{id}/edit">Update</a>
        <form action="/{id}/delete" method="post" style="display:inline">
            <input type="submit" value="Delete">
        </form>"#,
        id = post.id,
    )
}

pub fn index_page(posts: &[Post]) -> String {
    if posts.is_empty() {
        return layout("index", "    <p>No posts yet.</p>");
    }

    let items: String = posts
        .iter()
        .map(|post| {
            format!(
                "    <p id=\"post-{id}\">\n        {content}\n{actions}\n    </p>\n",
                id = post.id,
                content = escape_html(&post.content),
                actions = post_actions(post),
            )
        })
        .collect();
    layout("index", &items)
}

pub fn create_page() -> String {
    layout(
        "create",
        r#"    <form action="/" method="post">
        <textarea name="content" rows="6" cols="60"></textarea>
        <input type="submit" value="Create">
    </form>"#,
    )
}

pub fn show_page(post: &Post) -> String {
    let body = format!(
        "    <p>{content}</p>\n    <p><small>Posted {created}, last updated {updated}</small></p>\n    <p>\n{actions}\n    </p>",
        content = escape_html(&post.content),
        created = post.created_at.format("%Y-%m-%d %H:%M:%S"),
        updated = post.updated_at.format("%Y-%m-%d %H:%M:%S"),
        actions = post_actions(post),
    );
    layout("Read a single item", &body)
}

pub fn edit_page(post: &Post) -> String {
    let body = format!(
        r#"    <form action="/{id}/update" method="post">
        <textarea name="content" rows="6" cols="60">{content}</textarea>
        <input type="submit" value="Update">
    </form>"#,
        id = post.id,
        content = escape_html(&post.content),
    );
    layout("edit a single item", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    layout(&title, &format!("    <p>{}</p>", escape_html(message)))
}
