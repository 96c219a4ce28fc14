use axum::Json;
use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::infrastructure::assets::BundleAsset;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Serves the offline-processing bundle (script, requirements, readme)
/// verbatim as downloads.
#[tracing::instrument]
pub async fn asset_handler(Path(name): Path<String>) -> impl IntoResponse {
    let asset = match BundleAsset::from_name(&name) {
        Some(a) => a,
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Unknown asset: {}", name),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, asset.mime_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", asset.file_name()),
            ),
        ],
        asset.body(),
    )
        .into_response()
}
