//! Store listing and store detail endpoints

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::assemble::{self, StoreListing};
use crate::db::{self, StoreSort};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

use super::SoftFound;

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    category: Option<String>,
}

impl CategoryQuery {
    /// An empty `category=` counts as missing, same as no parameter at all.
    fn require(&self) -> Result<&str, ApiError> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty())
            .ok_or(ApiError::MissingParam("category"))
    }
}

#[derive(Debug, Deserialize)]
pub struct StoreIdQuery {
    #[serde(rename = "storeId")]
    store_id: Option<String>,
}

impl StoreIdQuery {
    fn require(&self) -> Result<i64, ApiError> {
        super::require_id(self.store_id.as_deref(), "storeId")
    }
}

/// Shared body of the five listing endpoints: fetch the category's stores,
/// fetch all active menus, and hash-join them with status attached.
async fn listing(
    state: &AppState,
    category: &str,
    sort: StoreSort,
    coupon_only: bool,
) -> Result<Vec<StoreListing>, ApiError> {
    let stores = db::stores::list_by_category(&state.pool, category, sort, coupon_only).await?;
    let menus = db::menus::list_all_active(&state.pool).await?;
    Ok(assemble::merge_stores_and_menus(
        stores,
        menus,
        state.local_now(),
    ))
}

pub async fn same_category(
    State(state): State<AppState>,
    Query(q): Query<CategoryQuery>,
) -> ApiResult<Vec<StoreListing>> {
    let category = q.require()?;
    Ok(Json(listing(&state, category, StoreSort::Unsorted, false).await?))
}

pub async fn min_delivery_time(
    State(state): State<AppState>,
    Query(q): Query<CategoryQuery>,
) -> ApiResult<Vec<StoreListing>> {
    let category = q.require()?;
    Ok(Json(
        listing(&state, category, StoreSort::MinDeliveryTime, false).await?,
    ))
}

pub async fn min_delivery_tip(
    State(state): State<AppState>,
    Query(q): Query<CategoryQuery>,
) -> ApiResult<Vec<StoreListing>> {
    let category = q.require()?;
    Ok(Json(
        listing(&state, category, StoreSort::MinDeliveryTip, false).await?,
    ))
}

pub async fn highest_rating(
    State(state): State<AppState>,
    Query(q): Query<CategoryQuery>,
) -> ApiResult<Vec<StoreListing>> {
    let category = q.require()?;
    Ok(Json(
        listing(&state, category, StoreSort::HighestRating, false).await?,
    ))
}

pub async fn coupon_stores(
    State(state): State<AppState>,
    Query(q): Query<CategoryQuery>,
) -> ApiResult<Vec<StoreListing>> {
    let category = q.require()?;
    Ok(Json(listing(&state, category, StoreSort::Unsorted, true).await?))
}

pub async fn store_info(
    State(state): State<AppState>,
    Query(q): Query<StoreIdQuery>,
) -> ApiResult<SoftFound<db::stores::StoreSummary>> {
    let store_id = q.require()?;
    let summary = db::stores::fetch_summary(&state.pool, store_id).await?;
    Ok(Json(summary.into()))
}

pub async fn store_details(
    State(state): State<AppState>,
    Query(q): Query<StoreIdQuery>,
) -> ApiResult<SoftFound<db::stores::StoreDetails>> {
    let store_id = q.require()?;
    let details = db::stores::fetch_details(&state.pool, store_id).await?;
    Ok(Json(details.into()))
}
