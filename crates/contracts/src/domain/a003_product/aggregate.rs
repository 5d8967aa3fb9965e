use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Origin};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
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

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// A sellable item: one brand in one size/pack configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    pub brand: String,
    /// Size/pack label as the feed reports it (e.g. "750ml 12pk")
    #[serde(rename = "sizePack")]
    pub size_pack: String,
    /// Nine-liter case equivalents per shipped unit
    #[serde(rename = "casesPerUnit")]
    pub cases_per_unit: f64,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
}

impl Product {
    pub fn new_for_insert(
        code: String,
        description: String,
        brand: String,
        size_pack: String,
        cases_per_unit: f64,
    ) -> Self {
        Self {
            base: BaseAggregate::new(ProductId::new_v4(), code, description),
            brand,
            size_pack,
            cases_per_unit,
            is_active: true,
        }
    }

    pub fn new_with_id(
        id: ProductId,
        code: String,
        description: String,
        brand: String,
        size_pack: String,
        cases_per_unit: f64,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(id, code, description);
        base.comment = comment;

        Self {
            base,
            brand,
            size_pack,
            cases_per_unit,
            is_active: true,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &ProductDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.brand = dto.brand.clone();
        self.size_pack = dto.size_pack.clone();
        self.cases_per_unit = dto.cases_per_unit;
        self.is_active = dto.is_active;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Name must not be empty".into());
        }
        if self.brand.trim().is_empty() {
            return Err("Brand must not be empty".into());
        }
        if !self.cases_per_unit.is_finite() || self.cases_per_unit <= 0.0 {
            return Err("Cases per unit must be a positive number".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }

    fn origin() -> Origin {
        Origin::Vip
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    pub brand: String,
    #[serde(rename = "sizePack")]
    pub size_pack: String,
    #[serde(rename = "casesPerUnit")]
    pub cases_per_unit: f64,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}
