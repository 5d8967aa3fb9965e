use contracts::dashboards::d400_volume_drilldown::VolumeDrilldownResponse;
use datagrid::format::format_cases;
use datagrid::{CellValue, Column, ColumnNode, Row, TableSpec, TOTAL_ROW_ID};

/// Engine spec for the drill-down table: a label column, the 12 period
/// columns under one group, and the row total. Nested mode keeps product
/// lines under their brand row; the screen shows the whole set at once.
pub fn volume_table_spec(period_labels: &[String]) -> TableSpec {
    TableSpec::new(volume_columns(period_labels), |row: &Row| {
        row.get("id").display()
    })
    .nested()
    .without_pagination()
}

fn volume_columns(period_labels: &[String]) -> Vec<ColumnNode> {
    let months = period_labels
        .iter()
        .enumerate()
        .map(|(i, label)| cases_column(format!("m{}", i), label.clone()))
        .collect();

    vec![
        ColumnNode::single(Column::new("label", "Brand / Product").wide()),
        ColumnNode::group("Nine-liter cases", months),
        ColumnNode::single(cases_column("total".to_string(), "Total".to_string())),
    ]
}

fn cases_column(key: String, title: String) -> Column {
    Column::new(key, title)
        .align_right()
        .not_filterable()
        .render(|value, _| match value.as_number() {
            Some(n) => CellValue::Text(format_cases(n)),
            None => CellValue::Null,
        })
}

/// Lower a drill-down response into engine rows: brand group rows, product
/// children keyed by product ref, and the pinned grand-total row.
pub fn volume_table_rows(response: &VolumeDrilldownResponse) -> Vec<Row> {
    let mut rows = Vec::new();

    for volume_row in &response.rows {
        let mut row = if volume_row.is_brand_row {
            Row::group_row().with("id", volume_row.brand.clone())
        } else {
            let parent = volume_row.parent_brand.clone().unwrap_or_default();
            let id = volume_row
                .product_ref
                .clone()
                .unwrap_or_else(|| format!("{}:{}", parent, volume_row.label));
            Row::child_of(parent).with("id", id)
        };

        row.set("label", volume_row.label.clone());
        for (i, value) in volume_row.values.iter().enumerate() {
            row.set(format!("m{}", i), *value);
        }
        row.set("total", volume_row.total);
        rows.push(row);
    }

    let mut total_row = Row::new()
        .with("id", TOTAL_ROW_ID)
        .with("label", "Total");
    for (i, value) in response.grand_total.iter().enumerate() {
        total_row.set(format!("m{}", i), *value);
    }
    total_row.set("total", response.grand_total_sum);
    rows.push(total_row);

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryDepletionRepository;
    use crate::volume_drilldown::get_volume_drilldown;
    use contracts::dashboards::d400_volume_drilldown::{VolumeDrilldownRequest, VolumeScope};
    use contracts::projections::p900_depletion_register::DepletionRecord;
    use contracts::shared::periods::PeriodPolicy;
    use datagrid::DataTable;

    fn record(
        brand: &str,
        product_ref: &str,
        size_pack: &str,
        year: i32,
        month: u32,
        quantity: f64,
    ) -> DepletionRecord {
        DepletionRecord {
            market_ref: "market-1".to_string(),
            account_ref: "account-1".to_string(),
            product_ref: product_ref.to_string(),
            chain_code: Some("KRG".to_string()),
            brand: brand.to_string(),
            size_pack: size_pack.to_string(),
            year,
            month,
            quantity: Some(quantity),
            loaded_at_utc: "2026-06-01T00:00:00Z".to_string(),
        }
    }

    async fn response() -> VolumeDrilldownResponse {
        let repo = InMemoryDepletionRepository::new(vec![
            record("Eagle Rare", "p1", "750ml 12pk", 2024, 3, 10.0),
            record("Eagle Rare", "p2", "1L 6pk", 2024, 4, 4.0),
            record("Weller", "p3", "750ml 12pk", 2024, 3, 25.0),
        ]);
        get_volume_drilldown(
            &repo,
            VolumeDrilldownRequest {
                scope: VolumeScope::Chain {
                    chain_code: "KRG".to_string(),
                },
                policy: PeriodPolicy::Calendar { year: 2024 },
                reference_date: Some("2024-06-15".to_string()),
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_nested_sort_keeps_families_and_pins_total() {
        let response = response().await;
        let rows = volume_table_rows(&response);

        let mut table = DataTable::new(volume_table_spec(&response.period_labels));
        // Sort by March volume, biggest first.
        table.toggle_sort("m2");
        table.toggle_sort("m2");

        let view = table.view(&rows);
        let ids: Vec<&str> = view.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["Weller", "p3", "Eagle Rare", "p1", "p2", TOTAL_ROW_ID]);

        // Group header spans the 12 period columns.
        let group_header = view.group_header.expect("group header row");
        assert_eq!(group_header[1].span, 12);
        assert_eq!(group_header[1].title.as_deref(), Some("Nine-liter cases"));
    }

    #[tokio::test]
    async fn test_cases_render_in_cells() {
        let response = response().await;
        let rows = volume_table_rows(&response);
        let table = DataTable::new(volume_table_spec(&response.period_labels));

        let view = table.view(&rows);
        // First row is the Eagle Rare brand row; March (m2) renders one
        // decimal, empty slots render as zero.
        assert_eq!(view.rows[0].cells[0].display, "Eagle Rare");
        assert_eq!(view.rows[0].cells[3].display, "10.0");

        let total = view.rows.last().unwrap();
        assert_eq!(total.id, TOTAL_ROW_ID);
        assert_eq!(total.cells.last().unwrap().display, "39.0");
    }
}
