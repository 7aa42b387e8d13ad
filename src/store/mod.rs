// ==================== USER STORE ====================
// Contrato entre os handlers HTTP e a persistência de usuários

pub mod memory;
pub mod mongo;

pub use memory::InMemoryUserStore;
pub use mongo::MongoUserStore;

use crate::models::User;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The id string is not a 24-char hex ObjectId.
    InvalidIdentifier(String),
    /// Any driver failure, message kept verbatim.
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidIdentifier(id) => write!(f, "invalid user id: {}", id),
            StoreError::Backend(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}

/// Persistence port for users.
///
/// Lookups that find nothing are not errors: `get_by_id` returns `Ok(None)`
/// and `update`/`delete` return the number of documents they touched, so the
/// caller decides what a miss means. Dropping a returned future cancels the
/// operation.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a new user and returns its id as hex. `user.id` is ignored.
    async fn create(&self, user: &User) -> Result<String, StoreError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// Replaces every field but the id. Returns the matched count.
    async fn update(&self, id: &str, user: &User) -> Result<u64, StoreError>;

    /// Returns the deleted count.
    async fn delete(&self, id: &str) -> Result<u64, StoreError>;

    /// Full scan, no ordering guarantee.
    async fn list(&self) -> Result<Vec<User>, StoreError>;
}

/// Converte o id externo (hex) para ObjectId
pub fn parse_user_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidIdentifier(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_id() {
        let oid = ObjectId::new();
        assert_eq!(parse_user_id(&oid.to_hex()).unwrap(), oid);
    }

    #[test]
    fn test_parse_rejects_malformed_ids() {
        let malformed = [
            "",
            "not-a-valid-id",
            "65f1c2a0b1d2e3f4a5b6c7",
            "65f1c2a0b1d2e3f4a5b6c7d8e9",
            "zzf1c2a0b1d2e3f4a5b6c7d8",
        ];

        for bad in malformed {
            assert_eq!(
                parse_user_id(bad),
                Err(StoreError::InvalidIdentifier(bad.to_string())),
                "{} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_invalid_identifier_message() {
        let err = StoreError::InvalidIdentifier("abc".to_string());
        assert_eq!(err.to_string(), "invalid user id: abc");
    }
}
