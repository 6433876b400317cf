use async_trait::async_trait;
use derive_new::new;
use kernel::model::playspace::{event::CreatePlayspace, Playspace};
use kernel::repository::playspace::PlayspaceRepository;
use reqwest::Method;
use shared::error::{AppError, AppResult};

use crate::supabase::{
    model::playspace::{NewPlayspaceRow, PlayspaceRow},
    SupabaseClient,
};

const PLAYSPACES_TABLE: &str = "playspaces";

#[derive(new)]
pub struct PlayspaceRepositoryImpl {
    client: SupabaseClient,
}

#[async_trait]
impl PlayspaceRepository for PlayspaceRepositoryImpl {
    async fn create(&self, event: CreatePlayspace) -> AppResult<Playspace> {
        let response = self
            .client
            .request(Method::POST, self.client.table_url(PLAYSPACES_TABLE))
            .header("Prefer", "return=representation")
            .json(&[NewPlayspaceRow::from(event)])
            .send()
            .await?;
        let rows: Vec<PlayspaceRow> = SupabaseClient::check(response).await?.json().await?;
        rows.into_iter()
            .next()
            .map(Playspace::from)
            .ok_or_else(|| AppError::ExternalService("insert returned no rows".into()))
    }

    async fn find_all(&self) -> AppResult<Vec<Playspace>> {
        let response = self
            .client
            .request(Method::GET, self.client.table_url(PLAYSPACES_TABLE))
            .query(&[("select", "*")])
            .send()
            .await?;
        let rows: Vec<PlayspaceRow> = SupabaseClient::check(response).await?.json().await?;
        Ok(rows.into_iter().map(Playspace::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{client_for, spawn_stub};
    use axum::{
        http::{HeaderMap, StatusCode},
        routing::{get, post},
        Json, Router,
    };
    use kernel::model::playspace::{Coordinates, Location};
    use std::sync::{Arc, Mutex};

    fn backyard_event() -> CreatePlayspace {
        CreatePlayspace {
            name: "Backyard".into(),
            description: "Quiet yard".into(),
            price: 0.0,
            image: None,
            location: Location {
                address: "A".into(),
                coordinates: Coordinates {
                    lat: 10.0,
                    lng: 20.0,
                },
            },
            amenities: vec![],
        }
    }

    #[tokio::test]
    async fn find_all_returns_rows_and_authenticates() {
        let seen_apikey = Arc::new(Mutex::new(None::<String>));
        let seen = seen_apikey.clone();
        let router = Router::new().route(
            "/rest/v1/playspaces",
            get(move |headers: HeaderMap| {
                let seen = seen.clone();
                async move {
                    *seen.lock().unwrap() = headers
                        .get("apikey")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_owned);
                    Json(serde_json::json!([{
                        "id": 1,
                        "name": "Backyard",
                        "description": "Quiet yard",
                        "price": 0.0,
                        "image": null,
                        "location": {"address": "A", "coordinates": {"lat": 10.0, "lng": 20.0}},
                        "amenities": [],
                        "created_at": null
                    }]))
                }
            }),
        );
        let base = spawn_stub(router).await;
        let repo = PlayspaceRepositoryImpl::new(client_for(&base));

        let rows = repo.find_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Backyard");
        assert_eq!(
            rows[0].location.coordinates,
            Coordinates {
                lat: 10.0,
                lng: 20.0
            }
        );
        assert_eq!(seen_apikey.lock().unwrap().as_deref(), Some("test-key"));
    }

    #[tokio::test]
    async fn create_unwraps_the_returned_row_and_asks_for_representation() {
        let captured = Arc::new(Mutex::new(None::<(Option<String>, serde_json::Value)>));
        let cap = captured.clone();
        let router = Router::new().route(
            "/rest/v1/playspaces",
            post(
                move |headers: HeaderMap, Json(body): Json<serde_json::Value>| {
                    let cap = cap.clone();
                    async move {
                        let prefer = headers
                            .get("Prefer")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_owned);
                        *cap.lock().unwrap() = Some((prefer, body.clone()));
                        let mut row = body[0].clone();
                        row["id"] = 7.into();
                        (StatusCode::CREATED, Json(serde_json::json!([row])))
                    }
                },
            ),
        );
        let base = spawn_stub(router).await;
        let repo = PlayspaceRepositoryImpl::new(client_for(&base));

        let created = repo.create(backyard_event()).await.unwrap();
        assert_eq!(created.id, 7);
        assert_eq!(created.price, 0.0);
        assert!(created.image.is_none());

        let (prefer, body) = captured.lock().unwrap().take().unwrap();
        assert_eq!(prefer.as_deref(), Some("return=representation"));
        assert!(body.is_array());
        assert_eq!(body[0]["image"], serde_json::Value::Null);
        assert_eq!(body[0]["location"]["coordinates"]["lat"], 10.0);
    }

    #[tokio::test]
    async fn create_surfaces_the_service_error_message() {
        let router = Router::new().route(
            "/rest/v1/playspaces",
            post(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(serde_json::json!({"message": "duplicate key value"})),
                )
            }),
        );
        let base = spawn_stub(router).await;
        let repo = PlayspaceRepositoryImpl::new(client_for(&base));

        let err = repo.create(backyard_event()).await.unwrap_err();
        assert!(matches!(err, AppError::ExternalService(ref m) if m == "duplicate key value"));
    }
}
