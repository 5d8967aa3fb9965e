use crate::aggregation::bucket_by_brand;
use crate::periods::{resolve_reference_date, PeriodWindow};
use crate::repository::DepletionRepository;
use anyhow::Result;
use contracts::dashboards::d401_budget_forecast::{
    BudgetForecastRequest, BudgetForecastResponse, ForecastRow,
};
use contracts::domain::a005_rate_table::RateTable;
use contracts::projections::p900_depletion_register::DepletionListRequest;
use contracts::shared::periods::PeriodPolicy;

/// Build the budget forecast for one market: trailing-12 depletion volume
/// per brand, grown by the rate table's multiplier. Brands without a
/// configured rate carry forward flat.
pub async fn get_budget_forecast(
    repository: &dyn DepletionRepository,
    rate_table: &RateTable,
    request: BudgetForecastRequest,
) -> Result<BudgetForecastResponse> {
    if rate_table.effective_year != request.target_year {
        tracing::warn!(
            rate_table_year = rate_table.effective_year,
            target_year = request.target_year,
            "rate table year does not match the forecast target"
        );
    }

    let reference = resolve_reference_date(request.reference_date.as_deref())?;
    let window = PeriodWindow::build(PeriodPolicy::RollingTwelve, reference);

    let records = repository
        .depletions(&DepletionListRequest {
            market_ref: Some(request.market_ref.clone()),
            limit: 0,
            ..Default::default()
        })
        .await?;

    let buckets = bucket_by_brand(&records, &window);
    let mut brands: Vec<String> = buckets.keys().cloned().collect();
    brands.sort();

    let rows = brands
        .into_iter()
        .map(|brand| {
            let base_volume: f64 = buckets[&brand].iter().sum();
            let growth_rate = match rate_table.rate_for(&brand) {
                Some(rate) => rate,
                None => {
                    tracing::warn!(brand = brand.as_str(), "no growth rate configured, carrying flat");
                    1.0
                }
            };
            ForecastRow {
                forecast_volume: base_volume * growth_rate,
                base_volume,
                growth_rate,
                brand,
            }
        })
        .collect();

    Ok(BudgetForecastResponse {
        market_ref: request.market_ref,
        target_year: request.target_year,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryDepletionRepository;
    use contracts::projections::p900_depletion_register::DepletionRecord;

    fn record(brand: &str, year: i32, month: u32, quantity: f64) -> DepletionRecord {
        DepletionRecord {
            market_ref: "market-1".to_string(),
            account_ref: "account-1".to_string(),
            product_ref: "p1".to_string(),
            chain_code: None,
            brand: brand.to_string(),
            size_pack: "750ml 12pk".to_string(),
            year,
            month,
            quantity: Some(quantity),
            loaded_at_utc: "2026-06-01T00:00:00Z".to_string(),
        }
    }

    fn rate_table() -> RateTable {
        let mut table = RateTable::new_for_insert(
            "RT-2025".to_string(),
            "2025 plan rates".to_string(),
            2025,
        );
        table.set_rate("Eagle Rare".to_string(), 1.1);
        table
    }

    #[tokio::test]
    async fn test_forecast_applies_rates_over_trailing_twelve() {
        let repo = InMemoryDepletionRepository::new(vec![
            record("Eagle Rare", 2024, 3, 100.0),
            record("Eagle Rare", 2023, 8, 50.0),
            // Outside the JUL23..JUN24 window.
            record("Eagle Rare", 2023, 3, 999.0),
            record("Weller", 2024, 1, 40.0),
        ]);

        let response = get_budget_forecast(
            &repo,
            &rate_table(),
            BudgetForecastRequest {
                market_ref: "market-1".to_string(),
                target_year: 2025,
                reference_date: Some("2024-06-15".to_string()),
            },
        )
        .await
        .unwrap();

        assert_eq!(response.rows.len(), 2);

        let eagle = &response.rows[0];
        assert_eq!(eagle.brand, "Eagle Rare");
        assert_eq!(eagle.base_volume, 150.0);
        assert_eq!(eagle.growth_rate, 1.1);
        assert!((eagle.forecast_volume - 165.0).abs() < 1e-9);

        // No configured rate: flat carry-forward.
        let weller = &response.rows[1];
        assert_eq!(weller.growth_rate, 1.0);
        assert_eq!(weller.forecast_volume, 40.0);
    }

    #[tokio::test]
    async fn test_forecast_scopes_to_the_market() {
        let mut other = record("Eagle Rare", 2024, 3, 100.0);
        other.market_ref = "market-2".to_string();

        let repo = InMemoryDepletionRepository::new(vec![
            record("Eagle Rare", 2024, 3, 10.0),
            other,
        ]);

        let response = get_budget_forecast(
            &repo,
            &rate_table(),
            BudgetForecastRequest {
                market_ref: "market-1".to_string(),
                target_year: 2025,
                reference_date: Some("2024-06-15".to_string()),
            },
        )
        .await
        .unwrap();

        assert_eq!(response.rows.len(), 1);
        assert_eq!(response.rows[0].base_volume, 10.0);
    }
}
