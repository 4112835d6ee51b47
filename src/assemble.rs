//! Response assembly for the store listing endpoints
//!
//! In-memory hash-join of store rows with the bulk menu rows, keyed by
//! store id, O(stores + menus). Also owns the time-of-day string
//! normalization used across the responses.

use std::collections::HashMap;

use chrono::{NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::db::menus::MenuRow;
use crate::db::stores::StoreRow;
use crate::hours;

/// A fully assembled store entry for the listing endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreListing {
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
    pub start_time: String,
    pub end_time: String,
    pub coupon: String,
    /// `null` while the store accepts orders
    pub order_status: Option<String>,
    pub menus: Vec<MenuRow>,
}

/// Format a time-of-day as HH:MM:SS for listing payloads.
fn fmt_hms(t: NaiveTime) -> String {
    t.format("%H:%M:%S").to_string()
}

/// Attach each store's menus (empty when it has none) and its computed
/// order status. Store order and per-store menu order follow the queries.
pub fn merge_stores_and_menus(
    stores: Vec<StoreRow>,
    menus: Vec<MenuRow>,
    now: NaiveDateTime,
) -> Vec<StoreListing> {
    let mut menus_by_store: HashMap<i64, Vec<MenuRow>> = HashMap::new();
    for menu in menus {
        menus_by_store.entry(menu.store_id).or_default().push(menu);
    }

    stores
        .into_iter()
        .map(|s| StoreListing {
            order_status: hours::order_status(s.start_time, s.end_time, now),
            menus: menus_by_store.remove(&s.store_id).unwrap_or_default(),
            store_id: s.store_id,
            store_name: s.store_name,
            category: s.category,
            address: s.address,
            store_picture_url: s.store_picture_url,
            phone: s.phone,
            rating: s.rating,
            review_count: s.review_count,
            min_delivery_time: s.min_delivery_time,
            max_delivery_time: s.max_delivery_time,
            min_delivery_tip: s.min_delivery_tip,
            max_delivery_tip: s.max_delivery_tip,
            min_delivery_price: s.min_delivery_price,
            start_time: fmt_hms(s.start_time),
            end_time: fmt_hms(s.end_time),
            coupon: s.coupon,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn store(id: i64) -> StoreRow {
        StoreRow {
            store_id: id,
            store_name: format!("store-{id}"),
            category: "chicken".into(),
            address: "1 Test St".into(),
            store_picture_url: "store.jpg".into(),
            phone: "02-000-0000".into(),
            rating: 4.5,
            review_count: 10,
            min_delivery_time: 20,
            max_delivery_time: 40,
            min_delivery_tip: 1000,
            max_delivery_tip: 3000,
            min_delivery_price: 12000,
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            coupon: String::new(),
        }
    }

    fn menu(store_id: i64, name: &str) -> MenuRow {
        MenuRow {
            store_id,
            menu_name: name.into(),
            menu_price: 15000,
            menu_picture_url: "menu.jpg".into(),
        }
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn store_without_menus_gets_empty_sequence() {
        let merged = merge_stores_and_menus(vec![store(1)], vec![], noon());
        assert_eq!(merged.len(), 1);
        assert!(merged[0].menus.is_empty());
    }

    #[test]
    fn menus_group_by_store_preserving_order() {
        let menus = vec![menu(2, "a"), menu(1, "b"), menu(2, "c")];
        let merged = merge_stores_and_menus(vec![store(1), store(2)], menus, noon());
        assert_eq!(merged[0].menus.len(), 1);
        assert_eq!(merged[0].menus[0].menu_name, "b");
        let names: Vec<_> = merged[1].menus.iter().map(|m| m.menu_name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn open_store_serializes_null_order_status() {
        let merged = merge_stores_and_menus(vec![store(1)], vec![], noon());
        let json = serde_json::to_value(&merged[0]).unwrap();
        assert_eq!(json["orderStatus"], serde_json::Value::Null);
        assert_eq!(json["startTime"], "10:00:00");
        assert_eq!(json["endTime"], "22:00:00");
    }

    #[test]
    fn closed_store_carries_a_status_message() {
        let late = NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();
        let merged = merge_stores_and_menus(vec![store(1)], vec![], late);
        assert_eq!(
            merged[0].order_status.as_deref(),
            Some("Not orderable - opens tomorrow at 10:00")
        );
    }
}
