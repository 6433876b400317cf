use async_trait::async_trait;
use bytes::Bytes;
use shared::error::AppResult;

/// Object storage for uploaded listing images.
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Stores `content` under `key`. Fails if the key already exists.
    async fn upload(&self, key: &str, content: Bytes, content_type: &str) -> AppResult<()>;

    /// Publicly resolvable URL for a stored object. Computed locally, no
    /// round-trip to the service.
    fn public_url(&self, key: &str) -> String;

    /// Removes a stored object. Used to compensate when a request fails
    /// after its upload succeeded.
    async fn delete(&self, key: &str) -> AppResult<()>;
}
