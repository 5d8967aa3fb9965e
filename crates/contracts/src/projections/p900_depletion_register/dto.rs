use serde::{Deserialize, Serialize};

/// One depletion line from the sync feed: distributor sales out to one
/// retail account, one product, one calendar month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepletionRecord {
    // References to aggregates (UUID as String)
    pub market_ref: String,
    pub account_ref: String,
    pub product_ref: String,

    // Denormalized attributes as the feed reports them
    pub chain_code: Option<String>,
    pub brand: String,
    pub size_pack: String,

    // Period
    pub year: i32,
    pub month: u32,

    /// Nine-liter case equivalents; absent or non-finite values count as zero
    pub quantity: Option<f64>,

    // Technical fields
    pub loaded_at_utc: String,
}

/// Request for a filtered slice of the depletion register
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepletionListRequest {
    #[serde(default)]
    pub market_ref: Option<String>,
    #[serde(default)]
    pub chain_code: Option<String>,
    #[serde(default)]
    pub account_ref: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    /// Page cap for list screens; non-positive means no cap (aggregations
    /// read the full register)
    #[serde(default = "default_limit")]
    pub limit: i32,
    #[serde(default)]
    pub offset: i32,
}

fn default_limit() -> i32 {
    500
}

impl Default for DepletionListRequest {
    fn default() -> Self {
        Self {
            market_ref: None,
            chain_code: None,
            account_ref: None,
            brand: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

/// Response for the depletion register list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepletionListResponse {
    pub items: Vec<DepletionRecord>,
    pub total_count: usize,
}
