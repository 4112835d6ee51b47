//! baedal-api — read-only marketplace API
//!
//! Stateless request → SQL query → JSON response service for a
//! food-delivery style marketplace:
//!
//! - **Store listings** (`api::stores`): category listings with sort/filter
//!   modes, menus hash-joined onto each store (`assemble`)
//! - **Order availability** (`hours`): timezone-aware, possibly midnight-
//!   crossing open/closed window check
//! - **Menu ranking** (`api::menus`, `popularity`): review-count ranking
//!   with two distinct popularity policies
//! - **Photo serving** (`api::photo`): static files from a local directory
//!
//! All catalog data lives in an external PostgreSQL database that this
//! service only reads.

pub mod api;
pub mod assemble;
pub mod config;
pub mod db;
pub mod error;
pub mod hours;
pub mod popularity;
pub mod state;

pub use config::Config;
pub use state::AppState;
