use crate::shared::periods::PeriodPolicy;
use serde::{Deserialize, Serialize};

/// Scope of a volume drill-down: one chain or one single account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VolumeScope {
    Chain { chain_code: String },
    Account { account_ref: String },
}

impl VolumeScope {
    /// Scope label for screen titles
    pub fn label(&self) -> &str {
        match self {
            VolumeScope::Chain { chain_code } => chain_code,
            VolumeScope::Account { account_ref } => account_ref,
        }
    }
}

/// Request for the volume drill-down dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeDrilldownRequest {
    pub scope: VolumeScope,
    pub policy: PeriodPolicy,
    /// Anchor for the rolling window, "YYYY-MM-DD"; today when absent
    #[serde(default)]
    pub reference_date: Option<String>,
}

/// One row of the drill-down: a brand subtotal or a product detail line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeRow {
    pub brand: String,
    /// Product ref for detail lines, None on brand rows
    pub product_ref: Option<String>,
    /// Display label: brand name on brand rows, size/pack on detail lines
    pub label: String,
    pub is_brand_row: bool,
    /// Brand the detail line rolls up under, None on brand rows
    pub parent_brand: Option<String>,
    /// Bucketed nine-liter case volume, one slot per period label
    pub values: Vec<f64>,
    pub total: f64,
}

/// Response for the volume drill-down dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeDrilldownResponse {
    pub scope: VolumeScope,
    /// 12 period labels, left to right (e.g. "JUL 23" .. "JUN 24")
    pub period_labels: Vec<String>,
    /// Brand rows each followed by their product detail rows
    pub rows: Vec<VolumeRow>,
    /// Column totals across every brand
    pub grand_total: Vec<f64>,
    pub grand_total_sum: f64,
}
