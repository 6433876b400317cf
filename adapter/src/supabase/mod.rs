pub mod model;

use anyhow::{Context, Result};
use reqwest::{Method, RequestBuilder, Response};
use shared::{
    config::SupabaseConfig,
    error::{AppError, AppResult},
};

/// Process-wide handle to the hosted database-and-storage service. Cheap to
/// clone; every outbound request carries the project API key.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(cfg: &SupabaseConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("failed to build the Supabase HTTP client")?;
        Ok(Self {
            http,
            base_url: cfg.url.trim_end_matches('/').to_string(),
            api_key: cfg.api_key.clone(),
        })
    }

    pub fn request(&self, method: Method, url: String) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    pub fn object_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/storage/v1/object/{bucket}/{key}", self.base_url)
    }

    pub fn public_object_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/storage/v1/object/public/{bucket}/{key}", self.base_url)
    }

    /// Passes success responses through; turns anything else into an
    /// `ExternalService` error carrying the service's own message.
    pub async fn check(response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("error"))
                    .and_then(|m| m.as_str())
                    .map(str::to_owned)
            })
            .unwrap_or(body);
        let message = if message.is_empty() {
            status.to_string()
        } else {
            message
        };
        Err(AppError::ExternalService(message))
    }
}

pub fn connect_supabase_with(cfg: &SupabaseConfig) -> Result<SupabaseClient> {
    SupabaseClient::new(cfg)
}
