use crate::column::Column;
use crate::row::{Row, RowIdFn, TOTAL_ROW_ID};
use crate::sort::{apply_direction, compare_values, sort_value, SortConfig};

/// Sort a two-level row list while keeping children under their parents.
///
/// The pinned total row is removed first and re-appended last. Group rows
/// seed groups keyed by their own identity; every other row attaches to the
/// group named by its `parent_id`. Children sort within their group, then
/// the groups sort by their parent row, both under the flat-sort value
/// resolution and null rules. A child whose `parent_id` matches no group is
/// dropped from the output.
pub fn sort_nested(
    rows: Vec<Row>,
    flat: &[&Column],
    sort: &SortConfig,
    row_id: &RowIdFn,
) -> Vec<Row> {
    let mut totals: Vec<Row> = Vec::new();
    let mut groups: Vec<(Row, Vec<Row>)> = Vec::new();
    let mut group_index: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    let mut children: Vec<Row> = Vec::new();

    for row in rows {
        let id = row_id(&row);
        if id == TOTAL_ROW_ID {
            totals.push(row);
        } else if row.is_group_row {
            group_index.insert(id, groups.len());
            groups.push((row, Vec::new()));
        } else {
            // Parents may appear after their children in the input, so
            // attachment happens in a second pass.
            children.push(row);
        }
    }

    for child in children {
        match child
            .parent_id
            .as_deref()
            .and_then(|pid| group_index.get(pid))
        {
            Some(&slot) => groups[slot].1.push(child),
            None => {
                log::warn!(
                    "nested sort: dropping row '{}' with unknown parent {:?}",
                    row_id(&child),
                    child.parent_id
                );
            }
        }
    }

    for (_, members) in groups.iter_mut() {
        members.sort_by(|a, b| {
            let va = sort_value(flat, a, &sort.key);
            let vb = sort_value(flat, b, &sort.key);
            apply_direction(compare_values(&va, &vb), sort.direction)
        });
    }

    groups.sort_by(|(a, _), (b, _)| {
        let va = sort_value(flat, a, &sort.key);
        let vb = sort_value(flat, b, &sort.key);
        apply_direction(compare_values(&va, &vb), sort.direction)
    });

    let mut out = Vec::new();
    for (parent, members) in groups {
        out.push(parent);
        out.extend(members);
    }
    out.extend(totals);
    out
}
