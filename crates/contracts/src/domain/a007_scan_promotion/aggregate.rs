use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Origin};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScanPromotionId(pub Uuid);

impl ScanPromotionId {
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

impl AggregateId for ScanPromotionId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ScanPromotionId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Status
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanStatus {
    Draft,
    Submitted,
    Approved,
}

impl ScanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStatus::Draft => "draft",
            ScanStatus::Submitted => "submitted",
            ScanStatus::Approved => "approved",
        }
    }
}

impl std::fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// A scan promotion: a per-unit register discount the supplier funds for a
/// chain over a window of months
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanPromotion {
    #[serde(flatten)]
    pub base: BaseAggregate<ScanPromotionId>,

    /// Market the promotion runs in (UUID as String)
    #[serde(rename = "marketRef")]
    pub market_ref: String,
    /// Chain code the promotion is negotiated with
    #[serde(rename = "chainCode")]
    pub chain_code: String,
    /// Promoted product (UUID as String)
    #[serde(rename = "productRef")]
    pub product_ref: String,
    /// First month of the window, "YYYY-MM"
    #[serde(rename = "startPeriod")]
    pub start_period: String,
    /// Last month of the window, "YYYY-MM"
    #[serde(rename = "endPeriod")]
    pub end_period: String,
    /// Discount per unit scanned at the register
    #[serde(rename = "scanAmount")]
    pub scan_amount: f64,
    /// Supplier share of the funding, 0.0..=1.0 (remainder is distributor)
    #[serde(rename = "fundingSplit")]
    pub funding_split: f64,
    pub status: ScanStatus,
}

impl ScanPromotion {
    pub fn new_for_insert(
        code: String,
        description: String,
        market_ref: String,
        chain_code: String,
        product_ref: String,
        start_period: String,
        end_period: String,
        scan_amount: f64,
        funding_split: f64,
    ) -> Self {
        Self {
            base: BaseAggregate::new(ScanPromotionId::new_v4(), code, description),
            market_ref,
            chain_code,
            product_ref,
            start_period,
            end_period,
            scan_amount,
            funding_split,
            status: ScanStatus::Draft,
        }
    }

    pub fn new_with_id(
        id: ScanPromotionId,
        code: String,
        description: String,
        market_ref: String,
        chain_code: String,
        product_ref: String,
        start_period: String,
        end_period: String,
        scan_amount: f64,
        funding_split: f64,
        status: ScanStatus,
    ) -> Self {
        Self {
            base: BaseAggregate::new(id, code, description),
            market_ref,
            chain_code,
            product_ref,
            start_period,
            end_period,
            scan_amount,
            funding_split,
            status,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &ScanPromotionDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.market_ref = dto.market_ref.clone();
        self.chain_code = dto.chain_code.clone();
        self.product_ref = dto.product_ref.clone();
        self.start_period = dto.start_period.clone();
        self.end_period = dto.end_period.clone();
        self.scan_amount = dto.scan_amount;
        self.funding_split = dto.funding_split;
        self.status = dto.status;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Name must not be empty".into());
        }
        if !is_period(&self.start_period) || !is_period(&self.end_period) {
            return Err("Periods must be in YYYY-MM format".into());
        }
        if self.end_period < self.start_period {
            return Err("End period must not precede start period".into());
        }
        if !self.scan_amount.is_finite() || self.scan_amount < 0.0 {
            return Err("Scan amount must be a non-negative number".into());
        }
        if !(0.0..=1.0).contains(&self.funding_split) {
            return Err("Funding split must be between 0 and 1".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

/// "YYYY-MM" shape check; lexicographic order then matches period order
fn is_period(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return false;
    }
    let digits_ok = s[..4].chars().all(|c| c.is_ascii_digit())
        && s[5..].chars().all(|c| c.is_ascii_digit());
    let month_ok = matches!(s[5..].parse::<u32>(), Ok(m) if (1..=12).contains(&m));
    digits_ok && month_ok
}

impl AggregateRoot for ScanPromotion {
    type Id = ScanPromotionId;

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
        "a007"
    }

    fn collection_name() -> &'static str {
        "scan_promotion"
    }

    fn element_name() -> &'static str {
        "Scan promotion"
    }

    fn list_name() -> &'static str {
        "Scan promotions"
    }

    fn origin() -> Origin {
        Origin::Manual
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanPromotionDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    #[serde(rename = "marketRef")]
    pub market_ref: String,
    #[serde(rename = "chainCode")]
    pub chain_code: String,
    #[serde(rename = "productRef")]
    pub product_ref: String,
    #[serde(rename = "startPeriod")]
    pub start_period: String,
    #[serde(rename = "endPeriod")]
    pub end_period: String,
    #[serde(rename = "scanAmount")]
    pub scan_amount: f64,
    #[serde(rename = "fundingSplit")]
    pub funding_split: f64,
    pub status: ScanStatus,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ScanPromotion {
        ScanPromotion::new_for_insert(
            "SCAN-001".to_string(),
            "Kroger summer scan".to_string(),
            Uuid::new_v4().to_string(),
            "KRG".to_string(),
            Uuid::new_v4().to_string(),
            "2026-06".to_string(),
            "2026-08".to_string(),
            2.0,
            0.5,
        )
    }

    #[test]
    fn test_valid_promotion() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_period() {
        let mut p = draft();
        p.start_period = "2026-13".to_string();
        assert!(p.validate().is_err());

        p.start_period = "202606".to_string();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_window() {
        let mut p = draft();
        p.end_period = "2026-05".to_string();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_rejects_split_out_of_range() {
        let mut p = draft();
        p.funding_split = 1.5;
        assert!(p.validate().is_err());
    }
}
