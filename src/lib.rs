//! Data-access backend for the CivicDash municipal MIS dashboard.
//!
//! The crate exposes a small query façade over the municipal corporation
//! database: each dashboard widget calls one operation, gets back a typed
//! table, and renders a placeholder when the operation reports an error.
//! The shared connection pool lives in [`DashboardState`], which is built
//! once at process start and passed into every call.

mod error;

pub mod dashboard;
pub mod db;
pub mod export;
pub mod models;
pub mod state;

pub use error::DashboardError;
pub use state::DashboardState;
