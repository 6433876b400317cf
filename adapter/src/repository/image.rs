use async_trait::async_trait;
use bytes::Bytes;
use derive_new::new;
use kernel::repository::image::ImageStorage;
use reqwest::{header::CONTENT_TYPE, Method};
use shared::error::AppResult;

use crate::supabase::SupabaseClient;

#[derive(new)]
pub struct ImageStorageImpl {
    client: SupabaseClient,
    bucket: String,
}

#[async_trait]
impl ImageStorage for ImageStorageImpl {
    async fn upload(&self, key: &str, content: Bytes, content_type: &str) -> AppResult<()> {
        let response = self
            .client
            .request(Method::POST, self.client.object_url(&self.bucket, key))
            .header(CONTENT_TYPE, content_type)
            // the storage API overwrites unless told otherwise
            .header("x-upsert", "false")
            .body(content)
            .send()
            .await?;
        SupabaseClient::check(response).await?;
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        self.client.public_object_url(&self.bucket, key)
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let response = self
            .client
            .request(Method::DELETE, self.client.object_url(&self.bucket, key))
            .send()
            .await?;
        SupabaseClient::check(response).await?;
        Ok(())
    }
}
