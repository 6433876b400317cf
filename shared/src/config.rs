use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub supabase: SupabaseConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

/// Connection settings for the hosted database-and-storage service.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub api_key: String,
    pub image_bucket: String,
}

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";
const DEFAULT_IMAGE_BUCKET: &str = "playspace-images";

impl AppConfig {
    pub fn new() -> Result<Self> {
        let server = ServerConfig {
            port: match env::var("PORT") {
                Ok(v) => v.parse().context("PORT must be a valid port number")?,
                Err(_) => DEFAULT_PORT,
            },
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.into())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        };
        let supabase = SupabaseConfig {
            url: env::var("SUPABASE_URL").context("SUPABASE_URL must be set")?,
            api_key: env::var("SUPABASE_ANON_KEY").context("SUPABASE_ANON_KEY must be set")?,
            image_bucket: env::var("SUPABASE_IMAGE_BUCKET")
                .unwrap_or_else(|_| DEFAULT_IMAGE_BUCKET.into()),
        };
        Ok(Self { server, supabase })
    }
}
