use super::Location;

/// Normalized record for a single insert, assembled by the create handler
/// after validation and field decoding.
#[derive(Debug)]
pub struct CreatePlayspace {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: Option<String>,
    pub location: Location,
    pub amenities: Vec<String>,
}
