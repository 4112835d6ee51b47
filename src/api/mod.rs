//! API routes for baedal-api

pub mod menus;
pub mod photo;
pub mod stores;

use axum::Router;
use axum::routing::get;
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Soft not-found wrapper: a valid-but-unknown id responds 200 with `{}`
/// instead of a 404. This is the established API convention and must not
/// be "corrected".
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SoftFound<T> {
    Found(T),
    Empty {},
}

impl<T> From<Option<T>> for SoftFound<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Found(v),
            None => Self::Empty {},
        }
    }
}

/// Require a numeric id query parameter. Absent and empty both mean
/// missing; a present but non-numeric value is invalid. Both surface as a
/// structured 400 body naming the parameter.
pub(crate) fn require_id(
    raw: Option<&str>,
    name: &'static str,
) -> Result<i64, crate::error::ApiError> {
    let raw = raw
        .filter(|s| !s.is_empty())
        .ok_or(crate::error::ApiError::MissingParam(name))?;
    raw.parse()
        .map_err(|_| crate::error::ApiError::InvalidParam(name))
}

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(greeting))
        .route("/photo/{*filename}", get(photo::serve_photo))
        .route("/samecategory", get(stores::same_category))
        .route("/mindeliverytime", get(stores::min_delivery_time))
        .route("/mindeliverytip", get(stores::min_delivery_tip))
        .route("/highestrating", get(stores::highest_rating))
        .route("/couponstores", get(stores::coupon_stores))
        .route("/storeinfo", get(stores::store_info))
        .route("/storedetails", get(stores::store_details))
        .route("/storemenus", get(menus::store_menus))
        .route("/menuinfo", get(menus::menu_info))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn greeting() -> &'static str {
    "Hello, World"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soft_found_serializes_missing_entities_as_empty_object() {
        let missing: SoftFound<crate::db::stores::StoreDetails> = None.into();
        assert_eq!(
            serde_json::to_string(&missing).unwrap(),
            "{}"
        );
    }
}
