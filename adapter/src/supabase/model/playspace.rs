use chrono::{DateTime, Utc};
use kernel::model::playspace::{event::CreatePlayspace, Location, Playspace};
use serde::{Deserialize, Serialize};

/// Row shape returned by the `playspaces` table. `price` and `amenities`
/// tolerate nulls from rows not written through this API.
#[derive(Debug, Deserialize)]
pub struct PlayspaceRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    pub location: Location,
    #[serde(default)]
    pub amenities: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<PlayspaceRow> for Playspace {
    fn from(value: PlayspaceRow) -> Self {
        let PlayspaceRow {
            id,
            name,
            description,
            price,
            image,
            location,
            amenities,
            created_at,
        } = value;
        Playspace {
            id,
            name,
            description,
            price: price.unwrap_or(0.0),
            image,
            location,
            amenities: amenities.unwrap_or_default(),
            created_at,
        }
    }
}

/// Insert payload for one new row. `image` serializes as an explicit null
/// when no attachment was uploaded.
#[derive(Debug, Serialize)]
pub struct NewPlayspaceRow {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: Option<String>,
    pub location: Location,
    pub amenities: Vec<String>,
}

impl From<CreatePlayspace> for NewPlayspaceRow {
    fn from(value: CreatePlayspace) -> Self {
        let CreatePlayspace {
            name,
            description,
            price,
            image,
            location,
            amenities,
        } = value;
        Self {
            name,
            description,
            price,
            image,
            location,
            amenities,
        }
    }
}
