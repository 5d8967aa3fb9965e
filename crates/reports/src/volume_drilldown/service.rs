use crate::aggregation::{bucket, bucket_by_brand};
use crate::periods::{resolve_reference_date, PeriodWindow};
use crate::repository::DepletionRepository;
use anyhow::Result;
use contracts::dashboards::d400_volume_drilldown::{
    VolumeDrilldownRequest, VolumeDrilldownResponse, VolumeRow, VolumeScope,
};
use contracts::projections::p900_depletion_register::{DepletionListRequest, DepletionRecord};
use std::collections::HashMap;

/// Build the chain/account volume drill-down: per-brand subtotal rows, each
/// followed by the brand's product detail lines, bucketed into the 12
/// period slots of the requested policy.
pub async fn get_volume_drilldown(
    repository: &dyn DepletionRepository,
    request: VolumeDrilldownRequest,
) -> Result<VolumeDrilldownResponse> {
    let reference = resolve_reference_date(request.reference_date.as_deref())?;
    let window = PeriodWindow::build(request.policy, reference);

    let list_request = match &request.scope {
        VolumeScope::Chain { chain_code } => DepletionListRequest {
            chain_code: Some(chain_code.clone()),
            limit: 0,
            ..Default::default()
        },
        VolumeScope::Account { account_ref } => DepletionListRequest {
            account_ref: Some(account_ref.clone()),
            limit: 0,
            ..Default::default()
        },
    };
    let records = repository.depletions(&list_request).await?;
    if records.is_empty() {
        tracing::warn!(scope = request.scope.label(), "volume drill-down found no depletions");
    }

    let brand_buckets = bucket_by_brand(&records, &window);
    let mut brands: Vec<String> = brand_buckets.keys().cloned().collect();
    brands.sort();

    let mut rows = Vec::new();
    let mut grand_total = vec![0.0; 12];

    for brand in &brands {
        let slots = brand_buckets[brand];
        for (i, value) in slots.iter().enumerate() {
            grand_total[i] += value;
        }
        rows.push(VolumeRow {
            brand: brand.clone(),
            product_ref: None,
            label: brand.clone(),
            is_brand_row: true,
            parent_brand: None,
            values: slots.to_vec(),
            total: slots.iter().sum(),
        });

        let brand_records: Vec<DepletionRecord> = records
            .iter()
            .filter(|r| &r.brand == brand)
            .cloned()
            .collect();
        let size_packs: HashMap<&str, &str> = brand_records
            .iter()
            .map(|r| (r.product_ref.as_str(), r.size_pack.as_str()))
            .collect();

        let product_buckets = bucket(&brand_records, &window, |r| r.product_ref.as_str());
        let mut detail: Vec<VolumeRow> = product_buckets
            .into_iter()
            .map(|(product_ref, slots)| VolumeRow {
                brand: brand.clone(),
                label: size_packs
                    .get(product_ref.as_str())
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| product_ref.clone()),
                product_ref: Some(product_ref),
                is_brand_row: false,
                parent_brand: Some(brand.clone()),
                total: slots.iter().sum(),
                values: slots.to_vec(),
            })
            .collect();
        detail.sort_by(|a, b| a.label.cmp(&b.label));
        rows.extend(detail);
    }

    let grand_total_sum = grand_total.iter().sum();

    Ok(VolumeDrilldownResponse {
        scope: request.scope,
        period_labels: window.labels().to_vec(),
        rows,
        grand_total,
        grand_total_sum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryDepletionRepository;
    use contracts::shared::periods::PeriodPolicy;

    fn record(
        brand: &str,
        product_ref: &str,
        size_pack: &str,
        chain: &str,
        year: i32,
        month: u32,
        quantity: Option<f64>,
    ) -> DepletionRecord {
        DepletionRecord {
            market_ref: "market-1".to_string(),
            account_ref: "account-1".to_string(),
            product_ref: product_ref.to_string(),
            chain_code: Some(chain.to_string()),
            brand: brand.to_string(),
            size_pack: size_pack.to_string(),
            year,
            month,
            quantity,
            loaded_at_utc: "2026-06-01T00:00:00Z".to_string(),
        }
    }

    fn request(policy: PeriodPolicy) -> VolumeDrilldownRequest {
        VolumeDrilldownRequest {
            scope: VolumeScope::Chain {
                chain_code: "KRG".to_string(),
            },
            policy,
            reference_date: Some("2024-06-15".to_string()),
        }
    }

    #[tokio::test]
    async fn test_chain_drilldown_buckets_by_brand_and_product() {
        let repo = InMemoryDepletionRepository::new(vec![
            record("Eagle Rare", "p1", "750ml 12pk", "KRG", 2024, 3, Some(10.0)),
            record("Eagle Rare", "p2", "1L 6pk", "KRG", 2024, 3, Some(4.0)),
            record("Weller", "p3", "750ml 12pk", "KRG", 2023, 7, Some(2.0)),
            // Other chain; must not leak into the KRG view.
            record("Weller", "p3", "750ml 12pk", "HAN", 2024, 3, Some(99.0)),
        ]);

        let response = get_volume_drilldown(&repo, request(PeriodPolicy::RollingTwelve))
            .await
            .unwrap();

        assert_eq!(response.period_labels.first().map(String::as_str), Some("JUL 23"));
        assert_eq!(response.period_labels.last().map(String::as_str), Some("JUN 24"));

        // Brands alphabetical, each followed by its detail lines.
        let labels: Vec<(&str, bool)> = response
            .rows
            .iter()
            .map(|r| (r.label.as_str(), r.is_brand_row))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("Eagle Rare", true),
                ("1L 6pk", false),
                ("750ml 12pk", false),
                ("Weller", true),
                ("750ml 12pk", false),
            ]
        );

        // 2024-03 lands in slot 8 of the JUL23..JUN24 window.
        let eagle = &response.rows[0];
        assert_eq!(eagle.values[8], 14.0);
        assert_eq!(eagle.total, 14.0);

        let weller = &response.rows[3];
        assert_eq!(weller.values[0], 2.0);

        assert_eq!(response.grand_total[8], 14.0);
        assert_eq!(response.grand_total_sum, 16.0);
    }

    #[tokio::test]
    async fn test_calendar_policy_excludes_other_years() {
        let repo = InMemoryDepletionRepository::new(vec![
            record("Eagle Rare", "p1", "750ml 12pk", "KRG", 2024, 3, Some(10.0)),
            record("Eagle Rare", "p1", "750ml 12pk", "KRG", 2023, 3, Some(7.0)),
        ]);

        let response = get_volume_drilldown(&repo, request(PeriodPolicy::Calendar { year: 2024 }))
            .await
            .unwrap();

        let eagle = &response.rows[0];
        assert_eq!(eagle.values[2], 10.0);
        assert_eq!(eagle.total, 10.0);
    }

    #[tokio::test]
    async fn test_non_numeric_quantity_contributes_zero() {
        let repo = InMemoryDepletionRepository::new(vec![
            record("Eagle Rare", "p1", "750ml 12pk", "KRG", 2024, 3, Some(f64::NAN)),
            record("Eagle Rare", "p1", "750ml 12pk", "KRG", 2024, 3, None),
        ]);

        let response = get_volume_drilldown(&repo, request(PeriodPolicy::Calendar { year: 2024 }))
            .await
            .unwrap();

        assert!(response.rows[0].values.iter().all(|v| v.is_finite()));
        assert_eq!(response.rows[0].total, 0.0);
        assert_eq!(response.grand_total_sum, 0.0);
    }

    #[tokio::test]
    async fn test_bad_reference_date_is_an_error() {
        let repo = InMemoryDepletionRepository::new(vec![]);
        let mut request = request(PeriodPolicy::RollingTwelve);
        request.reference_date = Some("June 2024".to_string());

        assert!(get_volume_drilldown(&repo, request).await.is_err());
    }
}
