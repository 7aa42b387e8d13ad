use std::env;
use std::fmt;

/// Backend do UserStore
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_name: String,
    pub users_collection: String,
    pub store_backend: StoreBackend,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug)]
pub struct ConfigError(String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid configuration: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup (env, map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = var("PORT", "8080");
        let port = port
            .parse::<u16>()
            .map_err(|_| ConfigError(format!("PORT must be a port number, got '{}'", port)))?;

        // DATABASE_URL tem prioridade; senão monta a partir das partes
        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => format!(
                "mongodb://{}:{}@{}:{}",
                var("MONGO_USER", "root"),
                var("MONGO_PASSWORD", "example"),
                var("MONGO_HOST", "localhost"),
                var("MONGO_PORT", "27017"),
            ),
        };

        let store_backend = match var("USER_STORE", "mongo").to_lowercase().as_str() {
            "mongo" | "mongodb" => StoreBackend::Mongo,
            "memory" => StoreBackend::Memory,
            other => {
                return Err(ConfigError(format!(
                    "USER_STORE must be 'mongo' or 'memory', got '{}'",
                    other
                )))
            }
        };

        let cors_allowed_origins = var("CORS_ALLOWED_ORIGINS", "")
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port,
            database_url,
            database_name: var("MONGODB_DATABASE", "mydatabase"),
            users_collection: var("USERS_COLLECTION", "users"),
            store_backend,
            cors_allowed_origins,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
