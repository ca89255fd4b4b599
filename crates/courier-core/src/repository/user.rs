//! UserRepository trait definition.

use courier_types::error::UserError;
use courier_types::user::User;

/// Registry of user names, kept in registration order.
pub trait UserRepository: Send + Sync {
    /// Register `user`. Returns `false` without changing anything when the
    /// name is already present.
    fn insert(&self, user: &User)
    -> impl std::future::Future<Output = Result<bool, UserError>> + Send;

    /// Every registered user, oldest first.
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<User>, UserError>> + Send;
}
