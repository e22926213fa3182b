use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Single aggregate row behind the administration overview cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdministrativeOverview {
    pub total_zones: i64,
    pub total_wards: i64,
    pub total_staff: i64,
}

/// One month of citizen service activity for the trends chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceTrendPoint {
    /// Abbreviated month name, e.g. "Jan".
    pub month: String,
    pub services_delivered: i64,
    pub grievances_resolved: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentPerformance {
    pub dept_name: String,
    /// Average score over the trailing 30 days, rounded to 2 decimals.
    pub performance_score: Option<Decimal>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityTask {
    pub task_description: String,
    pub priority_level: String,
    /// Hex color derived from the priority level.
    pub color_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiMetric {
    pub metric_name: String,
    pub current_value: Decimal,
    pub target_value: Decimal,
    /// current / target × 100, rounded to 2 decimals. `None` when the
    /// target is zero, since no meaningful percentage exists.
    pub achievement_percentage: Option<Decimal>,
}
