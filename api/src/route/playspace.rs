use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::playspace::{register_playspace, show_playspace_list};
use crate::model::playspace::MAX_IMAGE_BYTES;

// headroom for multipart framing around a maximum-size image
const MAX_REQUEST_BYTES: usize = MAX_IMAGE_BYTES + 64 * 1024;

pub fn build_playspace_routers() -> Router<AppRegistry> {
    let playspaces_routers = Router::new()
        .route("/", post(register_playspace))
        .route("/", get(show_playspace_list))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES));

    Router::new().nest("/playspaces", playspaces_routers)
}
