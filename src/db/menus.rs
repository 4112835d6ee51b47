//! Menu database operations

use serde::Serialize;
use sqlx::PgPool;

/// Active menu row for the bulk listing endpoints. Serialized verbatim
/// inside each store's `menus` array.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MenuRow {
    pub store_id: i64,
    pub menu_name: String,
    pub menu_price: i32,
    pub menu_picture_url: String,
}

/// List every active menu across all stores. The assembler groups them
/// by store id afterwards.
pub async fn list_all_active(pool: &PgPool) -> Result<Vec<MenuRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT m.store_id, m.name AS menu_name, m.price AS menu_price, m.menu_picture_url
        FROM menu m
        WHERE m.status = 'normal'
        "#,
    )
    .fetch_all(pool)
    .await
}

/// A store's menu with its review-count rank ordinal (1-based, ties broken
/// by the window's internal ordering).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RankedMenuRow {
    pub menu_category: String,
    pub menu_name: String,
    pub menu_price: i32,
    pub menu_picture: String,
    pub review_count: i64,
    pub ranking: i64,
}

/// Fetch a store's active menus ranked by descending active review count.
pub async fn list_ranked_for_store(
    pool: &PgPool,
    store_id: i64,
) -> Result<Vec<RankedMenuRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        WITH ranked_menus AS (
            SELECT m.menu_id,
                   m.category AS menu_category,
                   m.name AS menu_name,
                   m.price AS menu_price,
                   m.menu_picture_url AS menu_picture,
                   COUNT(r.review_id) AS review_count,
                   ROW_NUMBER() OVER (ORDER BY COUNT(r.review_id) DESC) AS ranking
            FROM menu m
            LEFT JOIN reviews r ON r.menu_id = m.menu_id AND r.status = 'normal'
            WHERE m.status = 'normal' AND m.store_id = $1
            GROUP BY m.menu_id
        )
        SELECT menu_category, menu_name, menu_price, menu_picture, review_count, ranking
        FROM ranked_menus
        ORDER BY ranking
        "#,
    )
    .bind(store_id)
    .fetch_all(pool)
    .await
}

/// Core fields of a single menu. `review_count` is `None` when no active
/// review exists, and stays `null` on the wire.
#[derive(Debug, sqlx::FromRow)]
pub struct MenuInfoRow {
    pub menu_name: String,
    pub menu_picture: String,
    pub menu_price: i32,
    pub review_count: Option<i64>,
}

/// Fetch one active menu with its active review count.
/// An unknown id yields `Ok(None)`, not an error.
pub async fn fetch_menu(pool: &PgPool, menu_id: i64) -> Result<Option<MenuInfoRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT m.name AS menu_name,
               m.menu_picture_url AS menu_picture,
               m.price AS menu_price,
               r.total_reviews AS review_count
        FROM menu m
        LEFT JOIN (
            SELECT menu_id, COUNT(review_id) AS total_reviews
            FROM reviews
            WHERE status = 'normal'
            GROUP BY menu_id
        ) r ON r.menu_id = m.menu_id
        WHERE m.status = 'normal' AND m.menu_id = $1
        "#,
    )
    .bind(menu_id)
    .fetch_optional(pool)
    .await
}

/// Active option of a menu
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MenuOptionRow {
    #[serde(rename = "option")]
    pub option_name: String,
    pub content: String,
    pub price: i32,
}

/// List a menu's active options. Only called once the menu itself was found.
pub async fn list_options(
    pool: &PgPool,
    menu_id: i64,
) -> Result<Vec<MenuOptionRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT mo.option_name, mo.content, mo.price
        FROM menu_option mo
        WHERE mo.status = 'normal' AND mo.menu_id = $1
        "#,
    )
    .bind(menu_id)
    .fetch_all(pool)
    .await
}
