//! SQLite storage implementation for posts.

mod model;
mod repository;

pub use model::{NewPostDB, PostChangesDB, PostDB};
pub use repository::PostRepository;
