//! User directory types.
//!
//! Users are display names. The directory is a plain registry: message
//! participants are never checked against it.

use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
}

/// Request body for registering a user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_request_defaults() {
        let req: CreateUserRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.name, "");
    }
}
