//! Static photo file server
//!
//! Resolves a filename under the configured photo root and streams its
//! bytes with a guessed content type. Any path component that could step
//! outside the root is rejected before touching the filesystem.

use std::path::{Component, Path as FsPath, PathBuf};

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use http::header;

use crate::error::ApiError;
use crate::state::AppState;

/// Reduce a request filename to a relative path of plain components.
/// Parent/root components mean the request is trying to escape the photo
/// root; those resolve to `None` and surface as 404.
fn sanitize(filename: &str) -> Option<PathBuf> {
    let mut clean = PathBuf::new();
    for comp in FsPath::new(filename).components() {
        match comp {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if clean.as_os_str().is_empty() {
        None
    } else {
        Some(clean)
    }
}

pub async fn serve_photo(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let rel = sanitize(&filename).ok_or(ApiError::PhotoNotFound)?;
    let path = state.photo_dir.join(rel);

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| ApiError::PhotoNotFound)?;

    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    Ok(([(header::CONTENT_TYPE, mime.to_string())], bytes).into_response())
}
