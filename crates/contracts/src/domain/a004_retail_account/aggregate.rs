use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Origin};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RetailAccountId(pub Uuid);

impl RetailAccountId {
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

impl AggregateId for RetailAccountId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(RetailAccountId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// A retail account (store). Accounts belonging to the same chain share a
/// chain code; independent stores carry an empty one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetailAccount {
    #[serde(flatten)]
    pub base: BaseAggregate<RetailAccountId>,

    /// Chain code shared by sibling stores (e.g. "KRG"), empty for independents
    #[serde(rename = "chainCode", default)]
    pub chain_code: String,
    /// Consumer-facing banner (e.g. "Kroger")
    #[serde(default)]
    pub banner: String,
    /// Market the account sells in (UUID as String)
    #[serde(rename = "marketRef")]
    pub market_ref: String,
    /// On-premise accounts pour, off-premise accounts sell packaged goods
    #[serde(rename = "isOnPremise", default)]
    pub is_on_premise: bool,
}

impl RetailAccount {
    pub fn new_for_insert(
        code: String,
        description: String,
        chain_code: String,
        banner: String,
        market_ref: String,
    ) -> Self {
        Self {
            base: BaseAggregate::new(RetailAccountId::new_v4(), code, description),
            chain_code,
            banner,
            market_ref,
            is_on_premise: false,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &RetailAccountDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.chain_code = dto.chain_code.clone().unwrap_or_default();
        self.banner = dto.banner.clone().unwrap_or_default();
        self.market_ref = dto.market_ref.clone();
        self.is_on_premise = dto.is_on_premise;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Name must not be empty".into());
        }
        if self.market_ref.trim().is_empty() {
            return Err("Market reference must not be empty".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for RetailAccount {
    type Id = RetailAccountId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "retail_account"
    }

    fn element_name() -> &'static str {
        "Retail account"
    }

    fn list_name() -> &'static str {
        "Retail accounts"
    }

    fn origin() -> Origin {
        Origin::Vip
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RetailAccountDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    #[serde(rename = "chainCode")]
    pub chain_code: Option<String>,
    pub banner: Option<String>,
    #[serde(rename = "marketRef")]
    pub market_ref: String,
    #[serde(rename = "isOnPremise", default)]
    pub is_on_premise: bool,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}
