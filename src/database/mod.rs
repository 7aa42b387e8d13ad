use mongodb::bson::doc;
use mongodb::error::ErrorKind;
use mongodb::{Client, Collection, Database};
use std::error::Error;

/// Código do servidor para "collection já existe"
const NAMESPACE_EXISTS: i32 = 48;

fn is_namespace_exists(e: &mongodb::error::Error) -> bool {
    matches!(*e.kind, ErrorKind::Command(ref c) if c.code == NAMESPACE_EXISTS)
}

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        // Timeouts
        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        // Test connection
        db.run_command(doc! { "ping": 1 }).await?;

        Ok(Self { db })
    }

    /// Creates the collection if it is missing. Safe to call repeatedly.
    pub async fn ensure_collection(&self, name: &str) -> Result<(), Box<dyn Error>> {
        let existing = self.db.list_collection_names().await?;
        if existing.iter().any(|c| c == name) {
            log::debug!("   ℹ️  Collection already exists: {}", name);
            return Ok(());
        }

        match self.db.create_collection(name).await {
            Ok(()) => {
                log::info!("   ✅ Collection created: {}", name);
                Ok(())
            }
            // Outra instância criou entre o list e o create
            Err(e) if is_namespace_exists(&e) => {
                log::debug!("   ℹ️  Collection already exists: {}", name);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_ensure_collection_is_idempotent() {
        dotenv::dotenv().ok();
        let config = crate::config::AppConfig::from_env().unwrap();

        let db = MongoDB::new(&config.database_url, &config.database_name)
            .await
            .unwrap();

        let name = format!("ensure_test_{}", mongodb::bson::oid::ObjectId::new().to_hex());
        db.ensure_collection(&name).await.unwrap();
        db.ensure_collection(&name).await.unwrap();

        let names = db.db.list_collection_names().await.unwrap();
        assert!(names.contains(&name));

        db.collection::<mongodb::bson::Document>(&name).drop().await.unwrap();
    }
}
