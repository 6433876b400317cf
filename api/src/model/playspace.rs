use bytes::Bytes;
use chrono::{DateTime, Utc};
use kernel::model::playspace::{event::CreatePlayspace, Location, Playspace};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

pub const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/jpg"];
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

pub const NAME_REQUIRED: &str = "Name is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const LOCATION_REQUIRED: &str = "Location is required";

/// Create-request fields as they arrive, before validation and decoding.
/// Deserializes from a JSON body; the multipart extractor fills the same
/// shape field by field.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePlayspaceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<PriceField>,
    pub location: Option<LocationField>,
    pub amenities: Option<AmenitiesField>,
    #[serde(skip)]
    pub image: Option<UploadedImage>,
}

/// Forms may send `price` as text; JSON bodies send a number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PriceField {
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LocationField {
    Structured(Location),
    Encoded(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AmenitiesField {
    List(Vec<String>),
    Encoded(String),
}

/// A decoded multipart attachment, already within the type and size limits.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub content_type: String,
    pub content: Bytes,
}

impl CreatePlayspaceRequest {
    /// Required-field checks, first failure wins. Runs before any side
    /// effect; deeper checks on the location structure are intentionally not
    /// enforced.
    pub fn validate(&self) -> AppResult<()> {
        if !present(&self.name) {
            return Err(AppError::Validation(NAME_REQUIRED.into()));
        }
        if !present(&self.description) {
            return Err(AppError::Validation(DESCRIPTION_REQUIRED.into()));
        }
        let location_present = match &self.location {
            None => false,
            Some(LocationField::Encoded(text)) => !text.is_empty(),
            Some(LocationField::Structured(_)) => true,
        };
        if !location_present {
            return Err(AppError::Validation(LOCATION_REQUIRED.into()));
        }
        Ok(())
    }

    /// Decodes encoded fields and assembles the insert event. Expects
    /// `validate` to have passed; missing required fields still surface as
    /// errors rather than panics.
    pub fn into_event(self, image: Option<String>) -> AppResult<CreatePlayspace> {
        let CreatePlayspaceRequest {
            name,
            description,
            price,
            location,
            amenities,
            image: _,
        } = self;

        let name = name.ok_or_else(|| AppError::Validation(NAME_REQUIRED.into()))?;
        let description =
            description.ok_or_else(|| AppError::Validation(DESCRIPTION_REQUIRED.into()))?;
        let location = match location {
            Some(LocationField::Structured(location)) => location,
            Some(LocationField::Encoded(text)) => serde_json::from_str(&text)
                .map_err(|e| AppError::Decode(format!("location is not valid JSON: {e}")))?,
            None => return Err(AppError::Validation(LOCATION_REQUIRED.into())),
        };
        let amenities = match amenities {
            Some(AmenitiesField::List(values)) => values,
            Some(AmenitiesField::Encoded(text)) => serde_json::from_str(&text)
                .map_err(|e| AppError::Decode(format!("amenities is not valid JSON: {e}")))?,
            None => Vec::new(),
        };
        let price = match price {
            Some(PriceField::Number(value)) => value,
            Some(PriceField::Text(text)) if text.is_empty() => 0.0,
            Some(PriceField::Text(text)) => text
                .parse()
                .map_err(|_| AppError::Decode(format!("price must be numeric, got {text:?}")))?,
            None => 0.0,
        };

        Ok(CreatePlayspace {
            name,
            description,
            price,
            image,
            location,
            amenities,
        })
    }
}

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.is_empty())
}

#[derive(Debug, Serialize)]
pub struct PlayspaceResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: Option<String>,
    pub location: Location,
    pub amenities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Playspace> for PlayspaceResponse {
    fn from(value: Playspace) -> Self {
        let Playspace {
            id,
            name,
            description,
            price,
            image,
            location,
            amenities,
            created_at,
        } = value;
        Self {
            id,
            name,
            description,
            price,
            image,
            location,
            amenities,
            created_at,
        }
    }
}
