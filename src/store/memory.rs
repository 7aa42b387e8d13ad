use super::{parse_user_id, StoreError, UserStore};
use crate::models::{User, UserDocument};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// UserStore em memória
///
/// Mesmo contrato do MongoUserStore (ids ObjectId, replace preservando id),
/// usado nos testes e com `USER_STORE=memory` para rodar sem MongoDB.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<BTreeMap<ObjectId, UserDocument>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, user: &User) -> Result<String, StoreError> {
        let id = ObjectId::new();
        let mut doc = UserDocument::from_request(user);
        doc.id = Some(id);

        self.users.write().await.insert(id, doc);

        Ok(id.to_hex())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let object_id = parse_user_id(id)?;

        let users = self.users.read().await;
        Ok(users.get(&object_id).cloned().map(User::from))
    }

    async fn update(&self, id: &str, user: &User) -> Result<u64, StoreError> {
        let object_id = parse_user_id(id)?;

        let mut users = self.users.write().await;
        match users.get_mut(&object_id) {
            Some(existing) => {
                existing.name = user.name.clone();
                existing.email = user.email.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        let object_id = parse_user_id(id)?;

        let removed = self.users.write().await.remove(&object_id);
        Ok(u64::from(removed.is_some()))
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let users = self.users.read().await;

        log::debug!("📋 Found {} users", users.len());

        Ok(users.values().cloned().map(User::from).collect())
    }
}
