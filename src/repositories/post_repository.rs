// src/repositories/post_repository.rs
use std::sync::{PoisonError, RwLock};

use crate::models::Post;

/// Storage port for posts. Every listing keeps insertion order.
pub trait PostRepository: Send + Sync {
    fn find_by_id(&self, post_id: &str) -> Option<Post>;
    fn insert(&self, post: Post) -> Post;
    /// Replaces the content of `post_id`, returning the updated post.
    fn update_content(&self, post_id: &str, content: String) -> Option<Post>;
    /// Removes `post_id`, returning what was removed.
    fn remove(&self, post_id: &str) -> Option<Post>;
    fn filter(&self, predicate: &dyn Fn(&Post) -> bool) -> Vec<Post>;
}

#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

impl PostRepository for InMemoryPostRepository {
    fn find_by_id(&self, post_id: &str) -> Option<Post> {
        let posts = self.posts.read().unwrap_or_else(PoisonError::into_inner);
        posts.iter().find(|p| p.post_id == post_id).cloned()
    }

    fn insert(&self, post: Post) -> Post {
        let mut posts = self.posts.write().unwrap_or_else(PoisonError::into_inner);
        posts.push(post.clone());
        post
    }

    fn update_content(&self, post_id: &str, content: String) -> Option<Post> {
        let mut posts = self.posts.write().unwrap_or_else(PoisonError::into_inner);
        let post = posts.iter_mut().find(|p| p.post_id == post_id)?;
        post.content = content;
        Some(post.clone())
    }

    fn remove(&self, post_id: &str) -> Option<Post> {
        let mut posts = self.posts.write().unwrap_or_else(PoisonError::into_inner);
        let index = posts.iter().position(|p| p.post_id == post_id)?;
        Some(posts.remove(index))
    }

    fn filter(&self, predicate: &dyn Fn(&Post) -> bool) -> Vec<Post> {
        let posts = self.posts.read().unwrap_or_else(PoisonError::into_inner);
        posts.iter().filter(|p| predicate(p)).cloned().collect()
    }
}
