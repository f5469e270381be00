use thiserror::Error;

/// Errors specific to post operations.
#[derive(Error, Debug)]
pub enum PostError {
    #[error("Post {0} not found")]
    NotFound(i32),
}
