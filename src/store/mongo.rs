use super::{parse_user_id, StoreError, UserStore};
use crate::database::MongoDB;
use crate::models::{User, UserDocument};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Collection;

/// UserStore sobre uma collection do MongoDB
#[derive(Clone)]
pub struct MongoUserStore {
    users: Collection<UserDocument>,
}

impl MongoUserStore {
    pub fn new(db: &MongoDB, collection: &str) -> Self {
        Self {
            users: db.collection::<UserDocument>(collection),
        }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn create(&self, user: &User) -> Result<String, StoreError> {
        let result = self.users.insert_one(UserDocument::from_request(user)).await?;

        result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .ok_or_else(|| {
                StoreError::Backend(format!("unexpected inserted id: {}", result.inserted_id))
            })
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let object_id = parse_user_id(id)?;

        let found = self.users.find_one(doc! { "_id": object_id }).await?;

        Ok(found.map(User::from))
    }

    async fn update(&self, id: &str, user: &User) -> Result<u64, StoreError> {
        let object_id = parse_user_id(id)?;

        // replace_one mantém o _id do documento original
        let result = self
            .users
            .replace_one(doc! { "_id": object_id }, UserDocument::from_request(user))
            .await?;

        Ok(result.matched_count)
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        let object_id = parse_user_id(id)?;

        let result = self.users.delete_one(doc! { "_id": object_id }).await?;

        Ok(result.deleted_count)
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let cursor = self.users.find(doc! {}).await?;
        let docs: Vec<UserDocument> = cursor.try_collect().await?;

        log::debug!("📋 Found {} users", docs.len());

        Ok(docs.into_iter().map(User::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    async fn connect() -> MongoUserStore {
        dotenv::dotenv().ok();
        let config = crate::config::AppConfig::from_env().unwrap();
        let db = MongoDB::new(&config.database_url, &config.database_name)
            .await
            .unwrap();
        let collection = format!("users_test_{}", ObjectId::new().to_hex());
        db.ensure_collection(&collection).await.unwrap();
        MongoUserStore::new(&db, &collection)
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_crud_against_mongodb() {
        let store = connect().await;

        assert!(store.list().await.unwrap().is_empty());

        let input = User {
            id: String::new(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        };
        let id = store.create(&input).await.unwrap();

        let found = store.get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.name, "Ana");

        let changed = User {
            name: "Ana Maria".to_string(),
            ..input.clone()
        };
        assert_eq!(store.update(&id, &changed).await.unwrap(), 1);
        assert_eq!(store.get_by_id(&id).await.unwrap().unwrap().name, "Ana Maria");

        assert_eq!(store.delete(&id).await.unwrap(), 1);
        assert!(store.get_by_id(&id).await.unwrap().is_none());
        assert_eq!(store.delete(&id).await.unwrap(), 0);
        assert_eq!(store.update(&id, &changed).await.unwrap(), 0);
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_malformed_id_never_reaches_mongodb() {
        let store = connect().await;

        let err = store.get_by_id("not-a-valid-id").await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidIdentifier(_)));
    }
}
