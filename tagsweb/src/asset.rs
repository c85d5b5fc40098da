use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
};
use rust_embed::Embed;
use tracing::debug;

use crate::error::ApiError;

#[derive(Embed)]
#[folder = "assets"]
#[include = "*.css"]
pub struct Asset;

/// Serves a file from the embedded assets directory. The route is a wildcard
/// ("/assets/*file"), so `file` is the path relative to the 'assets' folder.
pub async fn static_handler(Path(file): Path<String>) -> Response {
    match Asset::get(&file) {
        Some(content) => {
            let mime = mime_guess::from_path(&file).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => {
            debug!("No embedded asset named {file}");
            ApiError::not_found().into_response()
        }
    }
}
