use std::ffi::OsStr;
use std::path::Path;

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::playspace::{CreatePlayspaceRequest, PlayspaceResponse, UploadedImage};

pub async fn register_playspace(
    State(registry): State<AppRegistry>,
    request: CreatePlayspaceRequest,
) -> AppResult<(StatusCode, Json<PlayspaceResponse>)> {
    request.validate()?;

    let uploaded = match &request.image {
        Some(image) => Some(store_image(&registry, image).await?),
        None => None,
    };
    let (image_key, image_url) = match uploaded {
        Some((key, url)) => (Some(key), Some(url)),
        None => (None, None),
    };

    let inserted = match request.into_event(image_url) {
        Ok(event) => registry.playspace_repository().create(event).await,
        Err(err) => Err(err),
    };
    match inserted {
        Ok(playspace) => Ok((StatusCode::CREATED, Json(playspace.into()))),
        Err(err) => {
            // the upload succeeded but the record didn't land; don't leave
            // the object behind
            if let Some(key) = image_key {
                discard_uploaded_image(&registry, &key).await;
            }
            Err(err)
        }
    }
}

pub async fn show_playspace_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<PlayspaceResponse>>> {
    registry.playspace_repository().find_all().await.map(|all| {
        Json(
            all.into_iter()
                .map(PlayspaceResponse::from)
                .collect::<Vec<_>>(),
        )
    })
}

async fn store_image(
    registry: &AppRegistry,
    image: &UploadedImage,
) -> AppResult<(String, String)> {
    let key = image_object_key(&image.file_name, Utc::now().timestamp_millis());
    registry
        .image_storage()
        .upload(&key, image.content.clone(), &image.content_type)
        .await?;
    let url = registry.image_storage().public_url(&key);
    Ok((key, url))
}

async fn discard_uploaded_image(registry: &AppRegistry, key: &str) {
    if let Err(err) = registry.image_storage().delete(key).await {
        tracing::warn!(%key, error.message = %err, "failed to clean up uploaded image");
    }
}

/// Storage key for an attachment: millisecond timestamp plus the original
/// file extension, dot included.
pub fn image_object_key(file_name: &str, timestamp_millis: i64) -> String {
    let extension = Path::new(file_name)
        .extension()
        .and_then(OsStr::to_str)
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();
    format!("playspace-{timestamp_millis}{extension}")
}
