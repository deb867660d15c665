use crate::traits::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use bytes::Bytes;
use imagedrop_core::StorageBackend;
use object_store::azure::{MicrosoftAzure, MicrosoftAzureBuilder};
use object_store::path::Path;
use object_store::{ObjectStoreExt, PutPayload, Result as ObjectResult};
use std::sync::Arc;

/// DNS suffix for public-cloud blob endpoints when the connection string
/// carries none.
const DEFAULT_ENDPOINT_SUFFIX: &str = "core.windows.net";

/// Azure Blob Storage implementation
#[derive(Clone)]
pub struct AzureBlobStorage {
    store: Arc<MicrosoftAzure>,
    container: String,
    credentials: ConnectionString,
}

/// Credential and endpoint fields parsed from an Azure storage connection
/// string (`Key=Value` pairs separated by `;`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionString {
    pub account: String,
    pub access_key: String,
    pub blob_endpoint: Option<String>,
    pub endpoint_suffix: Option<String>,
}

impl ConnectionString {
    /// Parse a connection string of the portal-issued form:
    /// `DefaultEndpointsProtocol=https;AccountName=...;AccountKey=...;EndpointSuffix=core.windows.net`.
    ///
    /// `AccountName` and `AccountKey` are required. `BlobEndpoint` overrides
    /// the derived endpoint (Azurite, sovereign clouds); unknown keys are
    /// ignored. Account keys are base64 and may themselves contain `=`
    /// padding, so values split at the first `=` only.
    pub fn parse(raw: &str) -> StorageResult<Self> {
        let mut account = None;
        let mut access_key = None;
        let mut blob_endpoint = None;
        let mut endpoint_suffix = None;

        for segment in raw.split(';') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            let Some((key, value)) = segment.split_once('=') else {
                return Err(StorageError::ConfigError(format!(
                    "Malformed connection string segment: {}",
                    segment
                )));
            };
            match key {
                "AccountName" => account = Some(value.to_string()),
                "AccountKey" => access_key = Some(value.to_string()),
                "BlobEndpoint" => blob_endpoint = Some(value.trim_end_matches('/').to_string()),
                "EndpointSuffix" => endpoint_suffix = Some(value.to_string()),
                _ => {}
            }
        }

        Ok(ConnectionString {
            account: account.ok_or_else(|| {
                StorageError::ConfigError("Connection string is missing AccountName".to_string())
            })?,
            access_key: access_key.ok_or_else(|| {
                StorageError::ConfigError("Connection string is missing AccountKey".to_string())
            })?,
            blob_endpoint,
            endpoint_suffix,
        })
    }
}

impl AzureBlobStorage {
    /// Create a new AzureBlobStorage instance
    ///
    /// # Arguments
    /// * `connection_string` - Azure storage connection string carrying the
    ///   account credentials and, optionally, a custom blob endpoint
    /// * `container` - Blob container that receives every upload
    pub fn new(connection_string: &str, container: String) -> StorageResult<Self> {
        let credentials = ConnectionString::parse(connection_string)?;

        let mut builder = MicrosoftAzureBuilder::new()
            .with_account(credentials.account.clone())
            .with_access_key(credentials.access_key.clone())
            .with_container_name(container.clone());

        if let Some(ref endpoint) = credentials.blob_endpoint {
            let allow_http = endpoint.starts_with("http://");
            builder = builder
                .with_endpoint(endpoint.clone())
                .with_allow_http(allow_http);
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(AzureBlobStorage {
            store: Arc::new(store),
            container,
            credentials,
        })
    }
}

/// Public URL for a blob.
///
/// Custom endpoints use path-style addressing (`{endpoint}/{container}/{key}`);
/// otherwise the standard form `https://{account}.blob.{suffix}/{container}/{key}`.
fn blob_url(credentials: &ConnectionString, container: &str, blob_name: &str) -> String {
    if let Some(ref endpoint) = credentials.blob_endpoint {
        format!(
            "{}/{}/{}",
            endpoint.trim_end_matches('/'),
            container,
            blob_name
        )
    } else {
        let suffix = credentials
            .endpoint_suffix
            .as_deref()
            .unwrap_or(DEFAULT_ENDPOINT_SUFFIX);
        format!(
            "https://{}.blob.{}/{}/{}",
            credentials.account, suffix, container, blob_name
        )
    }
}

#[async_trait]
impl Storage for AzureBlobStorage {
    async fn upload(&self, blob_name: &str, data: Vec<u8>) -> StorageResult<String> {
        let size = data.len() as u64;
        let bytes = Bytes::from(data);
        let location = Path::from(blob_name.to_string());

        let start = std::time::Instant::now();

        let result: ObjectResult<_> = self.store.put(&location, PutPayload::from(bytes)).await;

        result.map_err(|e| {
            tracing::error!(
                error = %e,
                container = %self.container,
                key = %blob_name,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Blob upload failed"
            );
            StorageError::UploadFailed(e.to_string())
        })?;

        let url = blob_url(&self.credentials, &self.container, blob_name);

        tracing::info!(
            container = %self.container,
            key = %blob_name,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Blob upload successful"
        );

        Ok(url)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Azure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_portal_connection_string() {
        let cs = ConnectionString::parse(
            "DefaultEndpointsProtocol=https;AccountName=acct;AccountKey=a2V5cGFk==;EndpointSuffix=core.windows.net",
        )
        .expect("parse");
        assert_eq!(cs.account, "acct");
        // Base64 padding stays attached to the value.
        assert_eq!(cs.access_key, "a2V5cGFk==");
        assert_eq!(cs.endpoint_suffix.as_deref(), Some("core.windows.net"));
        assert_eq!(cs.blob_endpoint, None);
    }

    #[test]
    fn parses_custom_blob_endpoint() {
        let cs = ConnectionString::parse(
            "AccountName=devstoreaccount1;AccountKey=a2V5;BlobEndpoint=http://127.0.0.1:10000/devstoreaccount1/",
        )
        .expect("parse");
        assert_eq!(
            cs.blob_endpoint.as_deref(),
            Some("http://127.0.0.1:10000/devstoreaccount1")
        );
    }

    #[test]
    fn rejects_missing_account_name() {
        let err = ConnectionString::parse("AccountKey=a2V5").unwrap_err();
        assert!(err.to_string().contains("AccountName"));
    }

    #[test]
    fn rejects_missing_account_key() {
        let err = ConnectionString::parse("AccountName=acct").unwrap_err();
        assert!(err.to_string().contains("AccountKey"));
    }

    #[test]
    fn rejects_malformed_segment() {
        let err = ConnectionString::parse("AccountName=acct;garbage").unwrap_err();
        assert!(err.to_string().contains("garbage"));
    }

    #[test]
    fn standard_url_uses_account_and_suffix() {
        let cs = ConnectionString::parse("AccountName=acct;AccountKey=a2V5").expect("parse");
        assert_eq!(
            blob_url(&cs, "uploads", "abc.png"),
            "https://acct.blob.core.windows.net/uploads/abc.png"
        );
    }

    #[test]
    fn custom_endpoint_url_is_path_style() {
        let cs = ConnectionString::parse(
            "AccountName=devstoreaccount1;AccountKey=a2V5;BlobEndpoint=http://127.0.0.1:10000/devstoreaccount1",
        )
        .expect("parse");
        assert_eq!(
            blob_url(&cs, "uploads", "abc.png"),
            "http://127.0.0.1:10000/devstoreaccount1/uploads/abc.png"
        );
    }

    #[test]
    fn sovereign_suffix_overrides_default() {
        let cs = ConnectionString::parse(
            "AccountName=acct;AccountKey=a2V5;EndpointSuffix=core.chinacloudapi.cn",
        )
        .expect("parse");
        assert_eq!(
            blob_url(&cs, "uploads", "abc.png"),
            "https://acct.blob.core.chinacloudapi.cn/uploads/abc.png"
        );
    }
}
