use axum::{
    async_trait,
    extract::{
        multipart::{Field, Multipart},
        FromRequest, Request,
    },
    http::header::CONTENT_TYPE,
    Json,
};
use shared::error::AppError;

use crate::model::playspace::{
    AmenitiesField, CreatePlayspaceRequest, LocationField, PriceField, UploadedImage,
    ALLOWED_IMAGE_TYPES, MAX_IMAGE_BYTES,
};

const IMAGE_FIELD: &str = "image";

/// Accepts `multipart/form-data` (with the optional image attachment) or a
/// plain JSON body. Any other content type yields an empty payload, which the
/// handler's required-field validation then reports.
#[async_trait]
impl<S> FromRequest<S> for CreatePlayspaceRequest
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::Multipart(e.to_string()))?;
            from_multipart(multipart).await
        } else if content_type.starts_with("application/json") {
            let Json(request) = Json::<CreatePlayspaceRequest>::from_request(req, state)
                .await
                .map_err(|e| AppError::Decode(e.to_string()))?;
            Ok(request)
        } else {
            Ok(Self::default())
        }
    }
}

async fn from_multipart(mut multipart: Multipart) -> Result<CreatePlayspaceRequest, AppError> {
    let mut request = CreatePlayspaceRequest::default();
    let mut amenities: Vec<String> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Multipart(e.to_string()))?
    {
        let Some(field_name) = field.name().map(str::to_owned) else {
            continue;
        };
        match field_name.as_str() {
            IMAGE_FIELD => request.image = Some(image(field).await?),
            "name" => request.name = Some(text(field).await?),
            "description" => request.description = Some(text(field).await?),
            "price" => request.price = Some(PriceField::Text(text(field).await?)),
            "location" => request.location = Some(LocationField::Encoded(text(field).await?)),
            "amenities" => amenities.push(text(field).await?),
            _ => {}
        }
    }

    // a lone amenities value is the JSON-encoded form, repeats are the
    // already-parsed form
    request.amenities = match amenities.len() {
        0 => None,
        1 => Some(AmenitiesField::Encoded(amenities.remove(0))),
        _ => Some(AmenitiesField::List(amenities)),
    };
    Ok(request)
}

/// Decodes the attachment, rejecting disallowed content types before any
/// bytes are read and oversized files before handler validation runs.
async fn image(field: Field<'_>) -> Result<UploadedImage, AppError> {
    let content_type = field
        .content_type()
        .map(str::to_owned)
        .ok_or(AppError::UnsupportedImageType)?;
    if !ALLOWED_IMAGE_TYPES.contains(&content_type.as_str()) {
        return Err(AppError::UnsupportedImageType);
    }
    let file_name = field.file_name().unwrap_or_default().to_owned();
    let content = field
        .bytes()
        .await
        .map_err(|e| AppError::Multipart(e.to_string()))?;
    if content.len() > MAX_IMAGE_BYTES {
        return Err(AppError::FileTooLarge);
    }
    Ok(UploadedImage {
        file_name,
        content_type,
        content,
    })
}

async fn text(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Multipart(e.to_string()))
}
