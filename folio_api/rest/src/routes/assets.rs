use axum::{
    extract::Path,
    http::{
        header::{CACHE_CONTROL, CONTENT_TYPE},
        StatusCode,
    },
    response::{IntoResponse, Response},
    routing, Router,
};

pub const CACHE_CONTROL_VALUE: &str = "public, max-age=3600";

pub fn router() -> Router<()> {
    Router::new().route("/assets/:name", routing::get(asset))
}

async fn asset(Path(name): Path<String>) -> Response {
    match folio_assets::get(&name) {
        Some(asset) => (
            [
                (CONTENT_TYPE, asset.content_type),
                (CACHE_CONTROL, CACHE_CONTROL_VALUE),
            ],
            asset.content,
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
