use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Origin};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarketId(pub Uuid);

impl MarketId {
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

impl AggregateId for MarketId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(MarketId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// A sales market, usually a US state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Market {
    #[serde(flatten)]
    pub base: BaseAggregate<MarketId>,

    /// Two-letter state code (e.g. "VT")
    #[serde(rename = "stateCode")]
    pub state_code: String,
    /// Sales region the market reports under
    pub region: String,
    /// Control states route volume through the state liquor authority
    #[serde(rename = "isControlState", default)]
    pub is_control_state: bool,
}

impl Market {
    pub fn new_for_insert(
        code: String,
        description: String,
        state_code: String,
        region: String,
        is_control_state: bool,
    ) -> Self {
        Self {
            base: BaseAggregate::new(MarketId::new_v4(), code, description),
            state_code,
            region,
            is_control_state,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &MarketDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.state_code = dto.state_code.clone();
        self.region = dto.region.clone().unwrap_or_default();
        self.is_control_state = dto.is_control_state;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Name must not be empty".into());
        }
        if self.state_code.trim().len() != 2 {
            return Err("State code must be two letters".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Market {
    type Id = MarketId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "market"
    }

    fn element_name() -> &'static str {
        "Market"
    }

    fn list_name() -> &'static str {
        "Markets"
    }

    fn origin() -> Origin {
        Origin::Manual
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MarketDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    #[serde(rename = "stateCode")]
    pub state_code: String,
    pub region: Option<String>,
    #[serde(rename = "isControlState", default)]
    pub is_control_state: bool,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}
