//! Menu listing and menu detail endpoints
//!
//! Each endpoint applies its own popularity policy; see [`crate::popularity`].

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use crate::db::menus::{self, MenuOptionRow};
use crate::error::ApiResult;
use crate::popularity;
use crate::state::AppState;

use super::SoftFound;

#[derive(Debug, Deserialize)]
pub struct StoreIdQuery {
    #[serde(rename = "storeId")]
    store_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MenuIdQuery {
    #[serde(rename = "menuId")]
    menu_id: Option<String>,
}

/// One entry of the ranked `/storemenus` listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedMenu {
    pub menu_category: String,
    pub menu_name: String,
    pub menu_price: i32,
    pub menu_picture: String,
    pub review_count: i64,
    pub popularity: &'static str,
}

pub async fn store_menus(
    State(state): State<AppState>,
    Query(q): Query<StoreIdQuery>,
) -> ApiResult<Vec<RankedMenu>> {
    let store_id = super::require_id(q.store_id.as_deref(), "storeId")?;
    let rows = menus::list_ranked_for_store(&state.pool, store_id).await?;

    let ranked = rows
        .into_iter()
        .map(|r| RankedMenu {
            popularity: popularity::rank_based(r.ranking),
            menu_category: r.menu_category,
            menu_name: r.menu_name,
            menu_price: r.menu_price,
            menu_picture: r.menu_picture,
            review_count: r.review_count,
        })
        .collect();
    Ok(Json(ranked))
}

/// The `/menuinfo` response: menu core fields plus its active options.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuInfo {
    pub menu_name: String,
    pub menu_picture: String,
    pub menu_price: i32,
    pub popularity: &'static str,
    /// `null` when the menu has no counted reviews
    pub review_count: Option<i64>,
    pub options: Vec<MenuOptionRow>,
}

pub async fn menu_info(
    State(state): State<AppState>,
    Query(q): Query<MenuIdQuery>,
) -> ApiResult<SoftFound<MenuInfo>> {
    let menu_id = super::require_id(q.menu_id.as_deref(), "menuId")?;

    // Unknown menu: respond {} and skip the options query entirely
    let Some(row) = menus::fetch_menu(&state.pool, menu_id).await? else {
        return Ok(Json(None.into()));
    };

    let options = menus::list_options(&state.pool, menu_id).await?;

    Ok(Json(
        Some(MenuInfo {
            popularity: popularity::review_threshold(row.review_count.unwrap_or(0)),
            menu_name: row.menu_name,
            menu_picture: row.menu_picture,
            menu_price: row.menu_price,
            review_count: row.review_count,
            options,
        })
        .into(),
    ))
}
