//! In-memory user repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::directory::{
    domain::{EmailAddress, User, UserId},
    ports::{DirectoryRepositoryError, DirectoryRepositoryResult, UserRepository},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(message: String) -> DirectoryRepositoryError {
    DirectoryRepositoryError::persistence(std::io::Error::other(message))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> DirectoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(err.to_string()))?;
        if state.contains_key(user.id()) {
            return Err(DirectoryRepositoryError::DuplicateUser(user.id().clone()));
        }
        state.insert(user.id().clone(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> DirectoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(err.to_string()))?;
        let entry = state
            .get_mut(user.id())
            .ok_or_else(|| DirectoryRepositoryError::UserNotFound(user.id().clone()))?;
        *entry = user.clone();
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> DirectoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(err.to_string()))?;
        state
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DirectoryRepositoryError::UserNotFound(id.clone()))
    }

    async fn find_by_id(&self, id: &UserId) -> DirectoryRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(|err| lock_error(err.to_string()))?;
        Ok(state.get(id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DirectoryRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(|err| lock_error(err.to_string()))?;
        Ok(state.values().find(|user| user.email() == email).cloned())
    }
}
