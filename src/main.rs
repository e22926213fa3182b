use chrono::{Duration, Local};
use serde::Serialize;

use civicdash_core::{dashboard, DashboardError, DashboardState};

/// Print one widget's table as pretty JSON, or `null` when its data source
/// failed. The failure itself is already logged at the point of occurrence,
/// and the remaining widgets still render.
fn render<T: Serialize>(title: &str, result: Result<T, DashboardError>) {
    println!("== {} ==", title);
    match result.ok().and_then(|table| serde_json::to_string_pretty(&table).ok()) {
        Some(json) => println!("{}", json),
        None => println!("null"),
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let state = match DashboardState::from_env() {
        Ok(state) => state,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let today = Local::now().date_naive();
    let start_date = today - Duration::days(30);

    render(
        "Administrative Overview",
        dashboard::fetch_administrative_overview(&state).await,
    );
    render(
        "Service Trends",
        dashboard::fetch_service_trends(&state, start_date, today).await,
    );
    render(
        "Department Performance",
        dashboard::fetch_department_performance(&state).await,
    );
    render(
        "Priority Tasks",
        dashboard::fetch_priority_tasks(&state).await,
    );
    render(
        "KPI Metrics",
        dashboard::fetch_kpi_metrics(&state).await,
    );
}
