// src/services/board_services.rs
use std::fmt;
use std::sync::Arc;

use log::{debug, info};
use thiserror::Error;

use crate::models::{Post, User};
use crate::repositories::{PostRepository, RepositoryError, UserRepository};
use crate::services::{Clock, IdGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostAction {
    Update,
    Delete,
}

impl fmt::Display for PostAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostAction::Update => f.write_str("update"),
            PostAction::Delete => f.write_str("delete"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("Post not found")]
    NotFound,
    #[error("You are not authorized to {action} this post")]
    Unauthorized { action: PostAction },
    #[error("Email already exists")]
    DuplicateEmail,
}

impl From<RepositoryError> for BoardError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateEmail(_) => BoardError::DuplicateEmail,
        }
    }
}

/// Domain operations over users and posts.
#[derive(Clone)]
pub struct BoardService {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl BoardService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            posts,
            ids,
            clock,
        }
    }

    pub fn get_user_by_id(&self, user_id: &str) -> Option<User> {
        self.users.find_by_id(user_id)
    }

    pub fn is_email_exists(&self, email: &str) -> bool {
        self.users.email_exists(email)
    }

    pub fn create_user(
        &self,
        user_name: String,
        email: String,
        age: Option<u32>,
        avatar: Option<String>,
    ) -> Result<User, BoardError> {
        if self.is_email_exists(&email) {
            debug!("rejecting user, email {} already registered", email);
            return Err(BoardError::DuplicateEmail);
        }

        let user = User {
            id: self.ids.next_id(),
            user_name,
            email,
            age,
            avatar,
        };
        let user = self.users.insert(user)?;
        info!("created user {}", user.id);
        Ok(user)
    }

    pub fn get_user_posts(&self, user_id: &str) -> Vec<Post> {
        self.posts.filter(&|p| p.is_owned_by(user_id))
    }

    /// The owner is not checked against the user collection.
    pub fn create_post(&self, user_id: String, content: String, is_public: bool) -> Post {
        let post = Post {
            user_id,
            post_id: self.ids.next_id(),
            content,
            created_at: self.clock.now(),
            is_public,
        };
        let post = self.posts.insert(post);
        info!("created post {} for user {}", post.post_id, post.user_id);
        post
    }

    pub fn update_post(
        &self,
        post_id: &str,
        user_id: &str,
        content: String,
    ) -> Result<Post, BoardError> {
        self.check_owner(post_id, user_id, PostAction::Update)?;
        self.posts
            .update_content(post_id, content)
            .ok_or(BoardError::NotFound)
    }

    pub fn delete_post(&self, post_id: &str, user_id: &str) -> Result<(), BoardError> {
        self.check_owner(post_id, user_id, PostAction::Delete)?;
        self.posts
            .remove(post_id)
            .map(|_| ())
            .ok_or(BoardError::NotFound)
    }

    /// Case-sensitive substring match; an empty needle matches every post.
    pub fn search_posts_by_content(&self, needle: &str) -> Vec<Post> {
        self.posts.filter(&|p| p.content.contains(needle))
    }

    pub fn get_public_posts(&self) -> Vec<Post> {
        self.posts.filter(&|p| p.is_public)
    }

    fn check_owner(&self, post_id: &str, user_id: &str, action: PostAction) -> Result<(), BoardError> {
        let post = self.posts.find_by_id(post_id).ok_or(BoardError::NotFound)?;
        if !post.is_owned_by(user_id) {
            return Err(BoardError::Unauthorized { action });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{InMemoryPostRepository, InMemoryUserRepository};
    use crate::services::ids::testing::{FixedClock, SequentialIds};

    fn service() -> BoardService {
        BoardService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(SequentialIds::new("id")),
            Arc::new(FixedClock::new()),
        )
    }

    fn ann(svc: &BoardService) -> User {
        svc.create_user("Ann".into(), "a@x.com".into(), None, None).unwrap()
    }

    #[test]
    fn create_user_assigns_id_and_keeps_email() {
        let svc = service();
        let user = svc
            .create_user("Ann".into(), "a@x.com".into(), Some(30), Some("ann.png".into()))
            .unwrap();

        assert_eq!(user.id, "id-1");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(svc.get_user_by_id("id-1"), Some(user));
        assert!(svc.get_user_by_id("id-2").is_none());
    }

    #[test]
    fn duplicate_email_is_rejected_and_nothing_is_stored() {
        let svc = service();
        ann(&svc);

        let err = svc
            .create_user("Other".into(), "a@x.com".into(), Some(40), None)
            .unwrap_err();
        assert_eq!(err, BoardError::DuplicateEmail);
        assert_eq!(err.to_string(), "Email already exists");
        assert!(svc.get_user_by_id("id-2").is_none());
    }

    #[test]
    fn user_posts_only_include_the_owner() {
        let svc = service();
        let first = svc.create_post("u1".into(), "one".into(), true);
        svc.create_post("u2".into(), "other".into(), true);
        let second = svc.create_post("u1".into(), "two".into(), false);

        assert_eq!(svc.get_user_posts("u1"), vec![first, second]);
        assert_eq!(svc.get_user_posts("u2").len(), 1);
        assert!(svc.get_user_posts("u3").is_empty());
    }

    #[test]
    fn create_post_uses_clock_and_id_generator() {
        let svc = service();
        let post = svc.create_post("nobody".into(), "hello".into(), false);

        assert_eq!(post.post_id, "id-1");
        assert_eq!(post.created_at, FixedClock::new().0);
        assert_eq!(post.user_id, "nobody");
    }

    #[test]
    fn update_by_owner_replaces_content() {
        let svc = service();
        let post = svc.create_post("u1".into(), "old".into(), false);

        let updated = svc.update_post(&post.post_id, "u1", "new".into()).unwrap();
        assert_eq!(updated.content, "new");
        assert_eq!(updated.created_at, post.created_at);
        assert_eq!(svc.get_user_posts("u1")[0].content, "new");
    }

    #[test]
    fn update_by_stranger_is_unauthorized_and_leaves_post() {
        let svc = service();
        let post = svc.create_post("u1".into(), "old".into(), false);

        let err = svc.update_post(&post.post_id, "u2", "new".into()).unwrap_err();
        assert_eq!(err, BoardError::Unauthorized { action: PostAction::Update });
        assert_eq!(err.to_string(), "You are not authorized to update this post");
        assert_eq!(svc.get_user_posts("u1"), vec![post]);
    }

    #[test]
    fn delete_by_stranger_is_unauthorized_and_leaves_post() {
        let svc = service();
        let post = svc.create_post("u1".into(), "old".into(), false);

        let err = svc.delete_post(&post.post_id, "u2").unwrap_err();
        assert_eq!(err.to_string(), "You are not authorized to delete this post");
        assert_eq!(svc.get_user_posts("u1"), vec![post]);
    }

    #[test]
    fn missing_post_is_not_found() {
        let svc = service();
        assert_eq!(
            svc.update_post("nope", "u1", "x".into()).unwrap_err(),
            BoardError::NotFound
        );
        assert_eq!(svc.delete_post("nope", "u1").unwrap_err(), BoardError::NotFound);
    }

    #[test]
    fn delete_by_owner_removes_post() {
        let svc = service();
        let user = ann(&svc);
        let post = svc.create_post(user.id.clone(), "hello".into(), true);

        svc.delete_post(&post.post_id, &user.id).unwrap();
        assert!(svc.get_user_posts(&user.id).is_empty());
        assert_eq!(svc.delete_post(&post.post_id, &user.id), Err(BoardError::NotFound));
    }

    #[test]
    fn search_is_case_sensitive_substring() {
        let svc = service();
        let hello = svc.create_post("u1".into(), "hello world".into(), false);
        svc.create_post("u1".into(), "Hello there".into(), false);

        assert_eq!(svc.search_posts_by_content("hello"), vec![hello]);
        assert_eq!(svc.search_posts_by_content("").len(), 2);
        assert!(svc.search_posts_by_content("bye").is_empty());
    }

    #[test]
    fn public_posts_are_the_public_subset_in_order() {
        let svc = service();
        let a = svc.create_post("u1".into(), "a".into(), true);
        svc.create_post("u2".into(), "b".into(), false);
        let c = svc.create_post("u3".into(), "c".into(), true);

        assert_eq!(svc.get_public_posts(), vec![a, c]);
    }
}
