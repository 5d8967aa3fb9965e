use crate::column::Column;
use crate::layout::find_column;
use crate::row::Row;
use crate::value::CellValue;
use std::collections::HashMap;

/// Per-column free-text filters, keyed by column key. Blank and
/// whitespace-only entries are inactive.
pub type FilterValues = HashMap<String, String>;

/// Whether a filter entry actually filters anything
pub fn is_active(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Resolve the value a row is matched against for one column.
///
/// Order: the column's filter accessor, then its render projection when the
/// projection yields a primitive (non-null) value, then the raw field. An
/// unknown key falls back to the raw field and never fails.
fn filter_target(flat: &[&Column], row: &Row, key: &str) -> CellValue {
    let raw = row.get(key);
    match find_column(flat, key) {
        Some(column) => {
            if let Some(filter_value) = &column.filter_value {
                return filter_value(row);
            }
            if let Some(render) = &column.render {
                let rendered = render(&raw, row);
                if !rendered.is_null() {
                    return rendered;
                }
            }
            raw
        }
        None => raw,
    }
}

/// Keep the rows matching every active filter (case-insensitive substring).
///
/// Always runs over the full unpaged data set; the caller exposes the
/// resulting count for pagination labels before any slicing happens.
pub fn apply_filters(rows: &[Row], flat: &[&Column], filters: &FilterValues) -> Vec<Row> {
    let active: Vec<(&String, String)> = filters
        .iter()
        .filter(|(_, v)| is_active(v))
        .map(|(k, v)| (k, v.trim().to_lowercase()))
        .collect();

    if active.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .filter(|row| {
            active.iter().all(|(key, needle)| {
                filter_target(flat, row, key)
                    .display()
                    .to_lowercase()
                    .contains(needle.as_str())
            })
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnNode;
    use crate::layout::flat_columns;

    fn rows() -> Vec<Row> {
        vec![
            Row::new().with("brand", "Eagle Rare").with("cases", 120.0),
            Row::new().with("brand", "Buffalo Trace").with("cases", 80.0),
            Row::new().with("brand", "Weller").with("cases", 45.0),
        ]
    }

    fn columns() -> Vec<ColumnNode> {
        vec![
            ColumnNode::single(Column::new("brand", "Brand")),
            ColumnNode::single(Column::new("cases", "Cases")),
        ]
    }

    #[test]
    fn test_filter_is_subset_and_matches() {
        let rows = rows();
        let nodes = columns();
        let flat = flat_columns(&nodes);
        let filters = FilterValues::from([("brand".to_string(), "ra".to_string())]);

        let out = apply_filters(&rows, &flat, &filters);
        assert!(out.len() <= rows.len());
        // "Eagle Rare" and "Buffalo Trace" both contain "ra" case-insensitively
        assert_eq!(out.len(), 2);
        for row in &out {
            assert!(row.get("brand").display().to_lowercase().contains("ra"));
        }
    }

    #[test]
    fn test_filters_and_combine() {
        let rows = rows();
        let nodes = columns();
        let flat = flat_columns(&nodes);
        let filters = FilterValues::from([
            ("brand".to_string(), "ra".to_string()),
            ("cases".to_string(), "12".to_string()),
        ]);

        let out = apply_filters(&rows, &flat, &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].get("brand").display(), "Eagle Rare");
    }

    #[test]
    fn test_blank_filter_is_inactive() {
        let rows = rows();
        let nodes = columns();
        let flat = flat_columns(&nodes);
        let filters = FilterValues::from([("brand".to_string(), "   ".to_string())]);

        assert_eq!(apply_filters(&rows, &flat, &filters).len(), rows.len());
    }

    #[test]
    fn test_filter_accessor_beats_render() {
        let rows = vec![Row::new().with("status", 1).with("status_label", "Approved")];
        let nodes = vec![ColumnNode::single(
            Column::new("status", "Status")
                .render(|_, _| CellValue::Text("shown elsewhere".into()))
                .filter_with(|row| row.get("status_label")),
        )];
        let flat = flat_columns(&nodes);

        let filters = FilterValues::from([("status".to_string(), "appro".to_string())]);
        assert_eq!(apply_filters(&rows, &flat, &filters).len(), 1);
    }

    #[test]
    fn test_render_used_when_primitive() {
        let rows = vec![Row::new().with("qty", 1234.0)];
        let nodes = vec![ColumnNode::single(
            Column::new("qty", "Qty").render(|v, _| match v.as_number() {
                Some(n) => CellValue::Text(format!("{n:.1} cs")),
                None => CellValue::Null,
            }),
        )];
        let flat = flat_columns(&nodes);

        let filters = FilterValues::from([("qty".to_string(), "cs".to_string())]);
        assert_eq!(apply_filters(&rows, &flat, &filters).len(), 1);
    }

    #[test]
    fn test_null_render_falls_back_to_raw() {
        let rows = vec![Row::new().with("qty", 1234.0)];
        let nodes = vec![ColumnNode::single(
            Column::new("qty", "Qty").render(|_, _| CellValue::Null),
        )];
        let flat = flat_columns(&nodes);

        let filters = FilterValues::from([("qty".to_string(), "1234".to_string())]);
        assert_eq!(apply_filters(&rows, &flat, &filters).len(), 1);
    }

    #[test]
    fn test_unknown_key_falls_back_to_raw_field() {
        let rows = vec![Row::new().with("hidden", "x")];
        let nodes = columns();
        let flat = flat_columns(&nodes);

        let filters = FilterValues::from([("hidden".to_string(), "x".to_string())]);
        assert_eq!(apply_filters(&rows, &flat, &filters).len(), 1);

        let filters = FilterValues::from([("hidden".to_string(), "y".to_string())]);
        assert_eq!(apply_filters(&rows, &flat, &filters).len(), 0);
    }
}
