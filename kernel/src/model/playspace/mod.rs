pub mod event;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A playspace listing as stored by the hosted service. `id` and
/// `created_at` are assigned by the service on insert.
#[derive(Debug, Clone)]
pub struct Playspace {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: Option<String>,
    pub location: Location,
    pub amenities: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Structured location. Clients may omit `coordinates` entirely, or either
/// axis of it; missing parts default to zero and a missing address to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_decodes_with_full_coordinates() {
        let location: Location =
            serde_json::from_str(r#"{"address":"123 Main St","coordinates":{"lat":1,"lng":2}}"#)
                .unwrap();
        assert_eq!(location.address, "123 Main St");
        assert_eq!(location.coordinates, Coordinates { lat: 1.0, lng: 2.0 });
    }

    #[test]
    fn omitted_coordinates_default_to_zero() {
        let location: Location = serde_json::from_str(r#"{"address":"A"}"#).unwrap();
        assert_eq!(location.coordinates, Coordinates { lat: 0.0, lng: 0.0 });

        let location: Location =
            serde_json::from_str(r#"{"address":"A","coordinates":{"lat":10}}"#).unwrap();
        assert_eq!(location.coordinates, Coordinates { lat: 10.0, lng: 0.0 });
    }

    #[test]
    fn omitted_address_defaults_to_empty() {
        let location: Location = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(location.address, "");
    }
}
