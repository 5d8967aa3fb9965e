use crate::error::ReportError;
use async_trait::async_trait;
use contracts::domain::a007_scan_promotion::{ScanPromotion, ScanStatus};
use contracts::projections::p900_depletion_register::{DepletionListRequest, DepletionRecord};
use once_cell::sync::Lazy;
use uuid::Uuid;

/// Read side of the depletion register
#[async_trait]
pub trait DepletionRepository: Send + Sync {
    /// Records matching the request filters, in feed order
    async fn depletions(
        &self,
        request: &DepletionListRequest,
    ) -> Result<Vec<DepletionRecord>, ReportError>;
}

/// Read side of the scan-plan store
#[async_trait]
pub trait ScanPromotionStore: Send + Sync {
    /// Plans for one market, or every market when None
    async fn scan_promotions(
        &self,
        market_ref: Option<&str>,
    ) -> Result<Vec<ScanPromotion>, ReportError>;
}

// ============================================================================
// In-memory implementations
// ============================================================================

/// Depletion repository over an in-memory record set. Screens inject it
/// until a real feed-backed implementation exists; tests construct it with
/// their own records.
pub struct InMemoryDepletionRepository {
    records: Vec<DepletionRecord>,
}

impl InMemoryDepletionRepository {
    pub fn new(records: Vec<DepletionRecord>) -> Self {
        Self { records }
    }

    /// Repository over the built-in demo data set
    pub fn with_seed_data() -> Self {
        tracing::info!(records = SEED_DEPLETIONS.len(), "loading seed depletion register");
        Self::new(SEED_DEPLETIONS.clone())
    }
}

#[async_trait]
impl DepletionRepository for InMemoryDepletionRepository {
    async fn depletions(
        &self,
        request: &DepletionListRequest,
    ) -> Result<Vec<DepletionRecord>, ReportError> {
        let matches = |r: &DepletionRecord| {
            request
                .market_ref
                .as_deref()
                .map_or(true, |m| r.market_ref == m)
                && request
                    .chain_code
                    .as_deref()
                    .map_or(true, |c| r.chain_code.as_deref() == Some(c))
                && request
                    .account_ref
                    .as_deref()
                    .map_or(true, |a| r.account_ref == a)
                && request.brand.as_deref().map_or(true, |b| r.brand == b)
        };

        let filtered = self.records.iter().filter(|r| matches(r)).cloned();
        let skipped = filtered.skip(request.offset.max(0) as usize);

        Ok(if request.limit > 0 {
            skipped.take(request.limit as usize).collect()
        } else {
            skipped.collect()
        })
    }
}

/// Scan-plan store over an in-memory plan list
pub struct InMemoryScanPromotionStore {
    plans: Vec<ScanPromotion>,
}

impl InMemoryScanPromotionStore {
    pub fn new(plans: Vec<ScanPromotion>) -> Self {
        Self { plans }
    }
}

#[async_trait]
impl ScanPromotionStore for InMemoryScanPromotionStore {
    async fn scan_promotions(
        &self,
        market_ref: Option<&str>,
    ) -> Result<Vec<ScanPromotion>, ReportError> {
        Ok(self
            .plans
            .iter()
            .filter(|p| market_ref.map_or(true, |m| p.market_ref == m))
            .cloned()
            .collect())
    }
}

// ============================================================================
// Seed data
// ============================================================================

/// Stable refs for the seed data set, so screens and tests can address it
pub static SEED_MARKET_VT: Lazy<String> = Lazy::new(|| Uuid::new_v4().to_string());
pub static SEED_MARKET_NH: Lazy<String> = Lazy::new(|| Uuid::new_v4().to_string());

static SEED_DEPLETIONS: Lazy<Vec<DepletionRecord>> = Lazy::new(|| {
    let mut records = Vec::new();
    let account_vt = Uuid::new_v4().to_string();
    let account_nh = Uuid::new_v4().to_string();

    // Two brands in two markets across the 2025/2026 seasons; quantities are
    // nine-liter cases.
    let lines: [(&str, &str, &str, &Lazy<String>, &String, Option<&str>); 4] = [
        ("Eagle Rare", "750ml 12pk", "KRG", &SEED_MARKET_VT, &account_vt, Some("KRG")),
        ("Eagle Rare", "1L 6pk", "KRG", &SEED_MARKET_VT, &account_vt, Some("KRG")),
        ("Weller", "750ml 12pk", "HAN", &SEED_MARKET_NH, &account_nh, Some("HAN")),
        ("Buffalo Trace", "750ml 12pk", "HAN", &SEED_MARKET_NH, &account_nh, Some("HAN")),
    ];

    for (brand, size_pack, _, market, account, chain) in lines {
        let product_ref = Uuid::new_v4().to_string();
        for (year, month, quantity) in [
            (2025, 9, 40.0),
            (2025, 10, 35.5),
            (2025, 12, 62.0),
            (2026, 2, 28.0),
            (2026, 5, 33.5),
        ] {
            records.push(DepletionRecord {
                market_ref: market.to_string(),
                account_ref: account.clone(),
                product_ref: product_ref.clone(),
                chain_code: chain.map(str::to_string),
                brand: brand.to_string(),
                size_pack: size_pack.to_string(),
                year,
                month,
                quantity: Some(quantity),
                loaded_at_utc: "2026-06-01T00:00:00Z".to_string(),
            });
        }
    }

    records
});

/// A demo scan-plan set aligned with the seed depletions
pub fn seed_scan_promotions() -> Vec<ScanPromotion> {
    let product_ref = Uuid::new_v4().to_string();
    vec![
        ScanPromotion::new_for_insert(
            "SCAN-2026-001".to_string(),
            "Kroger spring scan".to_string(),
            SEED_MARKET_VT.clone(),
            "KRG".to_string(),
            product_ref.clone(),
            "2026-03".to_string(),
            "2026-05".to_string(),
            2.0,
            0.5,
        ),
        {
            let mut plan = ScanPromotion::new_for_insert(
                "SCAN-2026-002".to_string(),
                "Hannaford summer scan".to_string(),
                SEED_MARKET_NH.clone(),
                "HAN".to_string(),
                product_ref,
                "2026-06".to_string(),
                "2026-08".to_string(),
                3.0,
                0.6,
            );
            plan.status = ScanStatus::Approved;
            plan
        },
    ]
}
