use serde::{Deserialize, Serialize};

/// Request for the budget forecast dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetForecastRequest {
    /// Market to forecast (UUID as String)
    pub market_ref: String,
    /// Budget year the forecast is built for
    pub target_year: i32,
    /// Anchor of the trailing-12 base window, "YYYY-MM-DD"; today when absent
    #[serde(default)]
    pub reference_date: Option<String>,
}

/// One brand line of the forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRow {
    pub brand: String,
    /// Trailing-12 depletion volume the forecast grows from
    pub base_volume: f64,
    /// Growth multiplier applied (1.0 when no rate is configured)
    pub growth_rate: f64,
    pub forecast_volume: f64,
}

/// Response for the budget forecast dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetForecastResponse {
    pub market_ref: String,
    pub target_year: i32,
    pub rows: Vec<ForecastRow>,
}
