// src/repositories/user_repository.rs
use std::sync::{PoisonError, RwLock};

use thiserror::Error;

use crate::models::User;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("email already registered: {0}")]
    DuplicateEmail(String),
}

/// Storage port for users. Swap the in-memory version for a real backend
/// without touching the service layer.
pub trait UserRepository: Send + Sync {
    fn find_by_id(&self, id: &str) -> Option<User>;
    fn email_exists(&self, email: &str) -> bool;
    /// Appends `user`, rejecting it if the email is already taken.
    fn insert(&self, user: User) -> Result<User, RepositoryError>;
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_id(&self, id: &str) -> Option<User> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users.iter().find(|u| u.id == id).cloned()
    }

    fn email_exists(&self, email: &str) -> bool {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users.iter().any(|u| u.email == email)
    }

    fn insert(&self, user: User) -> Result<User, RepositoryError> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        // re-checked under the write lock, the caller's pre-check can race
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::DuplicateEmail(user.email));
        }
        users.push(user.clone());
        Ok(user)
    }
}
