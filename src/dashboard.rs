//! Widget-facing query façade.
//!
//! Each operation acquires the shared pool, runs one fixed parameterized
//! statement and maps the rows into a typed table. Failures are logged and
//! returned as structured errors, so a caller can render a placeholder for
//! one widget without tearing down the rest of the page.

use chrono::NaiveDate;

use crate::db::mysql;
use crate::error::{sanitize_error, DashboardError};
use crate::models::{
    AdministrativeOverview, DbConfig, DepartmentPerformance, KpiMetric, PriorityTask,
    ServiceTrendPoint, TestConnectionResult,
};
use crate::state::DashboardState;

fn query_error(widget: &str, e: sqlx::Error) -> DashboardError {
    log::error!("Error fetching {}: {}", widget, e);
    DashboardError::Query(e)
}

/// Zone, ward and staff totals for the administration overview cards.
pub async fn fetch_administrative_overview(
    state: &DashboardState,
) -> Result<AdministrativeOverview, DashboardError> {
    let pool = state.pool().await?;
    mysql::administrative_overview(pool)
        .await
        .map_err(|e| query_error("administrative data", e))
}

/// Monthly service delivery and grievance resolution counts between
/// `start_date` and `end_date` inclusive.
pub async fn fetch_service_trends(
    state: &DashboardState,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<ServiceTrendPoint>, DashboardError> {
    let pool = state.pool().await?;
    mysql::service_trends(pool, start_date, end_date)
        .await
        .map_err(|e| query_error("service trends", e))
}

/// Average performance score per department over the trailing 30 days.
pub async fn fetch_department_performance(
    state: &DashboardState,
) -> Result<Vec<DepartmentPerformance>, DashboardError> {
    let pool = state.pool().await?;
    mysql::department_performance(pool)
        .await
        .map_err(|e| query_error("department performance", e))
}

/// Up to three active tasks, highest priority first, each annotated with
/// its dashboard color.
pub async fn fetch_priority_tasks(
    state: &DashboardState,
) -> Result<Vec<PriorityTask>, DashboardError> {
    let pool = state.pool().await?;
    mysql::priority_tasks(pool)
        .await
        .map_err(|e| query_error("priority tasks", e))
}

/// Named KPI metrics at the latest recorded snapshot.
pub async fn fetch_kpi_metrics(state: &DashboardState) -> Result<Vec<KpiMetric>, DashboardError> {
    let pool = state.pool().await?;
    mysql::kpi_metrics(pool)
        .await
        .map_err(|e| query_error("KPI metrics", e))
}

/// Probe the backend with a one-off connection, without touching the
/// shared pool.
pub async fn test_connection(config: &DbConfig) -> TestConnectionResult {
    match mysql::test_connection(config).await {
        Ok(latency) => TestConnectionResult {
            success: true,
            latency_ms: Some(latency),
            error: None,
        },
        Err(e) => TestConnectionResult {
            success: false,
            latency_ms: None,
            error: Some(sanitize_error(&e.to_string())),
        },
    }
}
