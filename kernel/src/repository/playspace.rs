use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::playspace::{event::CreatePlayspace, Playspace};

#[async_trait]
pub trait PlayspaceRepository: Send + Sync {
    /// Inserts one record and returns the stored row.
    async fn create(&self, event: CreatePlayspace) -> AppResult<Playspace>;
    async fn find_all(&self) -> AppResult<Vec<Playspace>>;
}
