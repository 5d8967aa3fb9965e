use crate::periods::PeriodWindow;
use contracts::projections::p900_depletion_register::DepletionRecord;
use std::collections::HashMap;

/// Sum record quantities into the window's 12 slots, grouped by a
/// categorical key.
///
/// Every record establishes its group even when it falls outside the window;
/// absent and non-finite quantities contribute zero, never NaN. Shared by
/// the chain and account drill-downs so the bucketing exists exactly once.
pub fn bucket<'a, K>(records: &'a [DepletionRecord], window: &PeriodWindow, key: K) -> HashMap<String, [f64; 12]>
where
    K: Fn(&'a DepletionRecord) -> &'a str,
{
    let mut groups: HashMap<String, [f64; 12]> = HashMap::new();

    for record in records {
        let slots = groups.entry(key(record).to_string()).or_insert([0.0; 12]);
        if let Some(slot) = window.slot(record.year, record.month) {
            let quantity = record.quantity.filter(|q| q.is_finite()).unwrap_or(0.0);
            slots[slot] += quantity;
        }
    }

    groups
}

/// Brand bucketing used by the drill-down screens
pub fn bucket_by_brand(
    records: &[DepletionRecord],
    window: &PeriodWindow,
) -> HashMap<String, [f64; 12]> {
    bucket(records, window, |r| r.brand.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::periods::PeriodPolicy;
    use chrono::NaiveDate;

    fn record(brand: &str, year: i32, month: u32, quantity: Option<f64>) -> DepletionRecord {
        DepletionRecord {
            market_ref: "m".to_string(),
            account_ref: "a".to_string(),
            product_ref: "p".to_string(),
            chain_code: None,
            brand: brand.to_string(),
            size_pack: "750ml 12pk".to_string(),
            year,
            month,
            quantity,
            loaded_at_utc: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    fn window() -> PeriodWindow {
        PeriodWindow::build(
            PeriodPolicy::Calendar { year: 2024 },
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        )
    }

    #[test]
    fn test_sums_into_slots_by_brand() {
        let records = vec![
            record("Eagle Rare", 2024, 3, Some(10.0)),
            record("Eagle Rare", 2024, 3, Some(5.0)),
            record("Eagle Rare", 2024, 7, Some(2.0)),
            record("Weller", 2024, 1, Some(1.0)),
        ];

        let out = bucket_by_brand(&records, &window());
        assert_eq!(out.len(), 2);
        assert_eq!(out["Eagle Rare"][2], 15.0);
        assert_eq!(out["Eagle Rare"][6], 2.0);
        assert_eq!(out["Weller"][0], 1.0);
    }

    #[test]
    fn test_out_of_window_record_keeps_group_but_adds_nothing() {
        let records = vec![record("Eagle Rare", 2023, 3, Some(10.0))];
        let out = bucket_by_brand(&records, &window());
        assert_eq!(out["Eagle Rare"], [0.0; 12]);
    }

    #[test]
    fn test_missing_and_non_finite_quantities_count_as_zero() {
        let records = vec![
            record("Eagle Rare", 2024, 3, None),
            record("Eagle Rare", 2024, 3, Some(f64::NAN)),
            record("Eagle Rare", 2024, 3, Some(4.0)),
        ];

        let out = bucket_by_brand(&records, &window());
        assert_eq!(out["Eagle Rare"][2], 4.0);
        assert!(out["Eagle Rare"].iter().all(|v| v.is_finite()));
    }
}
