pub mod post_repository;
pub mod seed;
pub mod user_repository;

pub use post_repository::{InMemoryPostRepository, PostRepository};
pub use seed::SeedData;
pub use user_repository::{InMemoryUserRepository, RepositoryError, UserRepository};
