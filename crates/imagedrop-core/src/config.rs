//! Configuration module
//!
//! Environment-driven configuration for the service. Everything is read once
//! at startup into an explicit `Config` that setup passes into the
//! application state; nothing consults the environment after that.

use std::env;

use crate::storage_types::StorageBackend;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DB_PORT: u16 = 3306;

/// Connection settings for the metadata database.
#[derive(Clone, Debug)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    // Storage configuration
    pub storage_backend: StorageBackend,
    pub blob_connection_string: Option<String>,
    pub blob_container_name: Option<String>,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    // Metadata database configuration
    pub db: DbConfig,
    /// Raw PEM text for the database CA certificate, as delivered through the
    /// environment (escaped newlines are undone at materialization time).
    pub ssl_ca_cert: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let storage_backend = match env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "azure".to_string())
            .to_lowercase()
            .as_str()
        {
            "azure" => StorageBackend::Azure,
            "local" => StorageBackend::Local,
            other => {
                return Err(anyhow::anyhow!(
                    "STORAGE_BACKEND must be 'azure' or 'local', got '{}'",
                    other
                ))
            }
        };

        let cors_origins: Vec<String> = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let db = DbConfig {
            host: require("DB_HOST")?,
            port: env::var("DB_PORT")
                .unwrap_or_else(|_| DEFAULT_DB_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("DB_PORT must be a valid port number"))?,
            user: require("DB_USER")?,
            password: require("DB_PASSWORD")?,
            database: require("DB_NAME")?,
        };

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number"))?,
            cors_origins,
            storage_backend,
            blob_connection_string: env::var("BLOB_CONNECTION_STRING").ok(),
            blob_container_name: env::var("BLOB_CONTAINER_NAME").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            local_storage_base_url: env::var("LOCAL_STORAGE_BASE_URL").ok(),
            db,
            // The process must not serve requests without CA material.
            ssl_ca_cert: require("SSL_CA_CERT")?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        match self.storage_backend {
            StorageBackend::Azure => {
                if self.blob_connection_string.is_none() {
                    return Err(anyhow::anyhow!(
                        "BLOB_CONNECTION_STRING must be set when using the azure storage backend"
                    ));
                }
                if self.blob_container_name.is_none() {
                    return Err(anyhow::anyhow!(
                        "BLOB_CONTAINER_NAME must be set when using the azure storage backend"
                    ));
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_PATH must be set when using the local storage backend"
                    ));
                }
                if self.local_storage_base_url.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_BASE_URL must be set when using the local storage backend"
                    ));
                }
            }
        }

        Ok(())
    }
}

fn require(name: &str) -> Result<String, anyhow::Error> {
    env::var(name).map_err(|_| anyhow::anyhow!("{} must be set", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config(backend: StorageBackend) -> Config {
        Config {
            server_port: 8000,
            cors_origins: vec!["*".to_string()],
            storage_backend: backend,
            blob_connection_string: Some(
                "AccountName=acct;AccountKey=a2V5".to_string(),
            ),
            blob_container_name: Some("uploads".to_string()),
            local_storage_path: Some("/tmp/imagedrop".to_string()),
            local_storage_base_url: Some("http://localhost:8000/media".to_string()),
            db: DbConfig {
                host: "localhost".to_string(),
                port: 3306,
                user: "imagedrop".to_string(),
                password: "secret".to_string(),
                database: "imagedrop".to_string(),
            },
            ssl_ca_cert: "-----BEGIN CERTIFICATE-----".to_string(),
        }
    }

    #[test]
    fn azure_backend_requires_blob_settings() {
        let mut config = base_config(StorageBackend::Azure);
        assert!(config.validate().is_ok());

        config.blob_connection_string = None;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("BLOB_CONNECTION_STRING"));
    }

    #[test]
    fn local_backend_requires_path_and_base_url() {
        let mut config = base_config(StorageBackend::Local);
        assert!(config.validate().is_ok());

        config.local_storage_base_url = None;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("LOCAL_STORAGE_BASE_URL"));
    }
}
