//! User directory service.

use courier_types::error::UserError;
use courier_types::user::{CreateUserRequest, User};
use tracing::info;

use crate::repository::user::UserRepository;

/// Registers and lists users. Independent of `MessagingService`.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a user under the trimmed name.
    pub async fn add_user(&self, request: CreateUserRequest) -> Result<User, UserError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(UserError::Validation("name cannot be empty".to_string()));
        }

        let user = User {
            name: name.to_string(),
        };
        if !self.repo.insert(&user).await? {
            return Err(UserError::Conflict(user.name));
        }

        info!(name = %user.name, "user registered");
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repo.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::VecUserRepository;

    fn request(name: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_and_list_in_order() {
        let service = UserService::new(VecUserRepository::default());
        service.add_user(request("Bob")).await.unwrap();
        service.add_user(request("  Alice ")).await.unwrap();

        let names: Vec<String> = service
            .list_users()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["Bob", "Alice"]);
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let service = UserService::new(VecUserRepository::default());
        let err = service.add_user(request("   ")).await.unwrap_err();
        assert!(matches!(err, UserError::Validation(_)));
        assert!(service.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_name_conflicts() {
        let service = UserService::new(VecUserRepository::default());
        service.add_user(request("Alice")).await.unwrap();
        let err = service.add_user(request("Alice")).await.unwrap_err();
        assert_eq!(err, UserError::Conflict("Alice".to_string()));
        assert_eq!(service.list_users().await.unwrap().len(), 1);
    }
}
