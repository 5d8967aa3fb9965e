use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Origin};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyncConnectionId(pub Uuid);

impl SyncConnectionId {
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

impl AggregateId for SyncConnectionId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SyncConnectionId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Configuration of a third-party depletion feed connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConnection {
    #[serde(flatten)]
    pub base: BaseAggregate<SyncConnectionId>,

    /// Provider code of the feed (e.g. "vip")
    #[serde(rename = "providerCode")]
    pub provider_code: String,
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    #[serde(rename = "isEnabled", default)]
    pub is_enabled: bool,
    /// Completion timestamp of the last successful pull
    #[serde(rename = "lastSyncAt")]
    pub last_sync_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl SyncConnection {
    pub fn new_for_insert(
        code: String,
        description: String,
        provider_code: String,
        base_url: String,
    ) -> Self {
        Self {
            base: BaseAggregate::new(SyncConnectionId::new_v4(), code, description),
            provider_code,
            base_url,
            is_enabled: false,
            last_sync_at: None,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn mark_synced(&mut self) {
        self.last_sync_at = Some(chrono::Utc::now());
    }

    pub fn update(&mut self, dto: &SyncConnectionDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.provider_code = dto.provider_code.clone();
        self.base_url = dto.base_url.clone();
        self.is_enabled = dto.is_enabled;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Name must not be empty".into());
        }
        if self.provider_code.trim().is_empty() {
            return Err("Provider code must not be empty".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for SyncConnection {
    type Id = SyncConnectionId;

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
        "a006"
    }

    fn collection_name() -> &'static str {
        "sync_connection"
    }

    fn element_name() -> &'static str {
        "Sync connection"
    }

    fn list_name() -> &'static str {
        "Sync connections"
    }

    fn origin() -> Origin {
        Origin::Manual
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SyncConnectionDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    #[serde(rename = "providerCode")]
    pub provider_code: String,
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    #[serde(rename = "isEnabled", default)]
    pub is_enabled: bool,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}
