//! Posts module - domain models, services, and traits.

mod posts_errors;
mod posts_model;
mod posts_service;
mod posts_traits;

pub use posts_errors::PostError;
pub use posts_model::{NewPost, Post, PostUpdate};
pub use posts_service::PostService;
pub use posts_traits::{PostRepositoryTrait, PostServiceTrait};
