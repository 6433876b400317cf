use axum::Json;

use crate::model::welcome::WelcomeResponse;

pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Playspace API!".into(),
    })
}
