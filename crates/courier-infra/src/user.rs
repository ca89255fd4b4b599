//! In-memory user directory.
//!
//! Lives for the process lifetime; nothing is persisted.

use std::sync::RwLock;

use courier_core::repository::user::UserRepository;
use courier_types::error::UserError;
use courier_types::user::User;

/// `UserRepository` backed by a vector in registration order.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> UserError {
    UserError::Io("user directory lock poisoned".to_string())
}

impl UserRepository for MemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<bool, UserError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        if users.iter().any(|u| u.name == user.name) {
            return Ok(false);
        }
        users.push(user.clone());
        Ok(true)
    }

    async fn list(&self) -> Result<Vec<User>, UserError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_list() {
        let repo = MemoryUserRepository::new();
        assert!(repo.insert(&user("Alice")).await.unwrap());
        assert!(repo.insert(&user("Bob")).await.unwrap());
        assert_eq!(repo.list().await.unwrap(), vec![user("Alice"), user("Bob")]);
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_refused() {
        let repo = MemoryUserRepository::new();
        assert!(repo.insert(&user("Alice")).await.unwrap());
        assert!(!repo.insert(&user("Alice")).await.unwrap());
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }
}
