use super::{EntityMetadata, Origin};

/// Trait for aggregate roots
///
/// Defines the required instance accessors and static metadata for every
/// aggregate in the system.
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id;

    // ============================================================================
    // Instance accessors
    // ============================================================================

    /// Record id
    fn id(&self) -> Self::Id;

    /// Business code (e.g. "PLAN-2026-001")
    fn code(&self) -> &str;

    /// Display name
    fn description(&self) -> &str;

    /// Lifecycle metadata
    fn metadata(&self) -> &EntityMetadata;

    /// Mutable lifecycle metadata
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    // ============================================================================
    // Static aggregate-class metadata
    // ============================================================================

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name for storage (e.g. "market")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Market")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Markets")
    fn list_name() -> &'static str;

    /// Data source of the aggregate
    fn origin() -> Origin;

    // ============================================================================
    // Default implementations
    // ============================================================================

    /// Full system name (e.g. "a002_market")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Storage table prefix (e.g. "a002_market_")
    fn table_prefix() -> String {
        format!("{}_", Self::full_name())
    }
}
