//! Store database operations

use chrono::NaiveTime;
use serde::Serialize;
use sqlx::PgPool;

use super::StoreSort;

/// Format a time-of-day as HH:MM for the details payload.
fn fmt_hm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// One active store in a category listing, before menus and order status
/// are attached by the assembler.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StoreRow {
    pub store_id: i64,
    pub store_name: String,
    pub category: String,
    pub address: String,
    pub store_picture_url: String,
    pub phone: String,
    pub rating: f64,
    pub review_count: i32,
    pub min_delivery_time: i32,
    pub max_delivery_time: i32,
    pub min_delivery_tip: i32,
    pub max_delivery_tip: i32,
    pub min_delivery_price: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// `"coupon"` when the store has an active coupon, else empty
    pub coupon: String,
}

/// List active stores in a category, annotated with the coupon marker.
///
/// `coupon_only` restricts the listing to stores with an active coupon.
/// The ORDER BY comes from [`StoreSort`], never from caller input.
pub async fn list_by_category(
    pool: &PgPool,
    category: &str,
    sort: StoreSort,
    coupon_only: bool,
) -> Result<Vec<StoreRow>, sqlx::Error> {
    let mut sql = String::from(
        r#"
        SELECT s.store_id, s.name AS store_name, s.category, s.address,
               s.store_picture_url, s.phone, s.rating, s.review_count,
               s.min_delivery_time, s.max_delivery_time,
               s.min_delivery_tip, s.max_delivery_tip, s.min_delivery_price,
               s.start_time, s.end_time,
               CASE WHEN MAX(c.name) IS NOT NULL THEN 'coupon' ELSE '' END AS coupon
        FROM stores s
        LEFT JOIN coupons c ON c.store_id = s.store_id AND c.status = 'normal'
        WHERE s.status = 'normal' AND s.category = $1
        "#,
    );
    if coupon_only {
        sql.push_str(" AND c.store_id IS NOT NULL ");
    }
    sql.push_str(" GROUP BY s.store_id ");
    if let Some(clause) = sort.order_clause() {
        sql.push_str(clause);
    }

    sqlx::query_as(&sql).bind(category).fetch_all(pool).await
}

#[derive(Debug, sqlx::FromRow)]
struct StoreSummaryRow {
    store_picture: String,
    store_name: String,
    rating: f64,
    review_count: i32,
    min_delivery_tip: i32,
    max_delivery_tip: i32,
    min_order_price: i32,
    min_delivery_time: i32,
    max_delivery_time: i32,
    description: Option<String>,
    coupon_name: Option<String>,
    coupon_content: Option<String>,
}

/// Store summary for the `/storeinfo` view. Delivery time bounds are
/// stringified on the wire, matching the established contract.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSummary {
    pub store_picture: String,
    pub store_name: String,
    pub rating: f64,
    pub review_count: i32,
    pub min_delivery_tip: i32,
    pub max_delivery_tip: i32,
    pub min_order_price: i32,
    pub min_delivery_time: String,
    pub max_delivery_time: String,
    pub description: Option<String>,
    pub coupon_name: Option<String>,
    pub coupon_content: Option<String>,
}

/// Fetch a single store summary with at most one active coupon.
/// An unknown id yields `Ok(None)`, not an error.
pub async fn fetch_summary(
    pool: &PgPool,
    store_id: i64,
) -> Result<Option<StoreSummary>, sqlx::Error> {
    let row: Option<StoreSummaryRow> = sqlx::query_as(
        r#"
        SELECT s.store_picture_url AS store_picture,
               s.name AS store_name,
               s.rating,
               s.review_count,
               s.min_delivery_tip,
               s.max_delivery_tip,
               s.min_delivery_price AS min_order_price,
               s.min_delivery_time,
               s.max_delivery_time,
               s.content AS description,
               c.name AS coupon_name,
               c.content AS coupon_content
        FROM stores s
        LEFT JOIN coupons c ON c.store_id = s.store_id AND c.status = 'normal'
        WHERE s.status = 'normal' AND s.store_id = $1
        "#,
    )
    .bind(store_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| StoreSummary {
        store_picture: r.store_picture,
        store_name: r.store_name,
        rating: r.rating,
        review_count: r.review_count,
        min_delivery_tip: r.min_delivery_tip,
        max_delivery_tip: r.max_delivery_tip,
        min_order_price: r.min_order_price,
        min_delivery_time: r.min_delivery_time.to_string(),
        max_delivery_time: r.max_delivery_time.to_string(),
        description: r.description,
        coupon_name: r.coupon_name,
        coupon_content: r.coupon_content,
    }))
}

#[derive(Debug, sqlx::FromRow)]
struct StoreDetailsRow {
    store_name: String,
    address: String,
    phone_number: String,
    start_time: NaiveTime,
    end_time: NaiveTime,
    closed_days: Option<String>,
}

/// Store details for the `/storedetails` view, times formatted as HH:MM.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDetails {
    pub store_name: String,
    pub address: String,
    pub phone_number: String,
    pub start_time: String,
    pub end_time: String,
    pub closed_days: Option<String>,
}

/// Fetch name/address/phone/opening hours for a single store.
/// An unknown id yields `Ok(None)`, not an error.
pub async fn fetch_details(
    pool: &PgPool,
    store_id: i64,
) -> Result<Option<StoreDetails>, sqlx::Error> {
    let row: Option<StoreDetailsRow> = sqlx::query_as(
        r#"
        SELECT s.name AS store_name,
               s.address,
               s.phone AS phone_number,
               s.start_time,
               s.end_time,
               s.closed_days
        FROM stores s
        WHERE s.status = 'normal' AND s.store_id = $1
        "#,
    )
    .bind(store_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| StoreDetails {
        store_name: r.store_name,
        address: r.address,
        phone_number: r.phone_number,
        start_time: fmt_hm(r.start_time),
        end_time: fmt_hm(r.end_time),
        closed_days: r.closed_days,
    }))
}
