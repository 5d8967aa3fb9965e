use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Origin};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateTableId(pub Uuid);

impl RateTableId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for RateTableId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(RateTableId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Planning rate table: per-brand growth multipliers for one budget year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    #[serde(flatten)]
    pub base: BaseAggregate<RateTableId>,

    /// Budget year the rates apply to
    #[serde(rename = "effectiveYear")]
    pub effective_year: i32,
    /// Growth multiplier by brand (1.0 = flat)
    pub rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn new_for_insert(code: String, description: String, effective_year: i32) -> Self {
        Self {
            base: BaseAggregate::new(RateTableId::new_v4(), code, description),
            effective_year,
            rates: HashMap::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Growth multiplier for a brand, if one is configured
    pub fn rate_for(&self, brand: &str) -> Option<f64> {
        self.rates.get(brand).copied()
    }

    pub fn set_rate(&mut self, brand: String, rate: f64) {
        self.rates.insert(brand, rate);
    }

    pub fn update(&mut self, dto: &RateTableDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.effective_year = dto.effective_year;
        self.rates = dto.rates.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Name must not be empty".into());
        }
        if self.effective_year < 2000 {
            return Err("Effective year is not plausible".into());
        }
        for (brand, rate) in &self.rates {
            if !rate.is_finite() || *rate < 0.0 {
                return Err(format!("Rate for brand '{}' must be a non-negative number", brand));
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for RateTable {
    type Id = RateTableId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "rate_table"
    }

    fn element_name() -> &'static str {
        "Rate table"
    }

    fn list_name() -> &'static str {
        "Rate tables"
    }

    fn origin() -> Origin {
        Origin::Manual
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RateTableDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    #[serde(rename = "effectiveYear")]
    pub effective_year: i32,
    #[serde(default)]
    pub rates: HashMap<String, f64>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}
