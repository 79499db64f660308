use axum::{
    routing::{get, post},
    Router,
};
use crate::handlers::image::{list_images, upload_image};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/images-list", get(list_images))
        .route("/uploadimage", post(upload_image))
}
