use crate::repository::ScanPromotionStore;
use anyhow::Result;
use contracts::domain::a007_scan_promotion::{ScanPromotion, ScanStatus};
use datagrid::format::format_money;
use datagrid::{CellValue, Column, ColumnNode, Row, TableSpec};

/// Engine spec for the scan-plan list: plain identity columns, the program
/// terms under one group, the month window under another
pub fn scan_plan_table_spec() -> TableSpec {
    let columns = vec![
        ColumnNode::single(Column::new("code", "Code")),
        ColumnNode::single(Column::new("description", "Description").wide()),
        ColumnNode::single(Column::new("chain", "Chain")),
        ColumnNode::group(
            "Scan program",
            vec![
                Column::new("scan_amount", "Scan / unit")
                    .align_right()
                    .render(|value, _| match value.as_number() {
                        Some(n) => CellValue::Text(format_money(n)),
                        None => CellValue::Null,
                    }),
                Column::new("funding_split", "Supplier share")
                    .align_right()
                    .render(|value, _| match value.as_number() {
                        Some(n) => CellValue::Text(format!("{:.0} %", n * 100.0)),
                        None => CellValue::Null,
                    }),
                // Orders by workflow stage, not by the status word.
                Column::new("status", "Status").sort_by_field("status_rank"),
            ],
        ),
        ColumnNode::group(
            "Window",
            vec![
                Column::new("start_period", "From"),
                Column::new("end_period", "To"),
            ],
        ),
    ];

    TableSpec::new(columns, |row: &Row| row.get("id").display())
}

/// Load the scan plans for a market (or every market) as engine rows
pub async fn scan_plan_rows(
    store: &dyn ScanPromotionStore,
    market_ref: Option<&str>,
) -> Result<Vec<Row>> {
    let plans = store.scan_promotions(market_ref).await?;
    if plans.is_empty() {
        tracing::warn!(?market_ref, "no scan plans found");
    }
    Ok(plans.iter().map(plan_row).collect())
}

fn plan_row(plan: &ScanPromotion) -> Row {
    Row::new()
        .with("id", plan.to_string_id())
        .with("code", plan.base.code.clone())
        .with("description", plan.base.description.clone())
        .with("chain", plan.chain_code.clone())
        .with("scan_amount", plan.scan_amount)
        .with("funding_split", plan.funding_split)
        .with("status", plan.status.as_str())
        .with("status_rank", status_rank(plan.status))
        .with("start_period", plan.start_period.clone())
        .with("end_period", plan.end_period.clone())
}

fn status_rank(status: ScanStatus) -> i64 {
    match status {
        ScanStatus::Draft => 0,
        ScanStatus::Submitted => 1,
        ScanStatus::Approved => 2,
    }
}
