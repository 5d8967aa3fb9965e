use crate::value::CellValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Identity of the pinned grand-total row. The engine never sorts or groups
/// a row carrying this identity; it is re-appended after everything else.
pub const TOTAL_ROW_ID: &str = "total-row";

/// Caller-supplied row identity. Must be unique within one data set and
/// stable across derivations for the same logical row.
pub type RowIdFn = Arc<dyn Fn(&Row) -> String + Send + Sync>;

/// One table row: an open-ended field map plus the two markers used by
/// nested-mode sorting
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Row {
    /// Field values by column key
    pub values: HashMap<String, CellValue>,
    /// Identity of the group row this row rolls up under (weak reference)
    #[serde(rename = "parentId", default)]
    pub parent_id: Option<String>,
    /// Marks a group header row (a brand row in the drill-down screens)
    #[serde(rename = "isGroupRow", default)]
    pub is_group_row: bool,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// A group header row (parent of nested detail rows)
    pub fn group_row() -> Self {
        Self {
            is_group_row: true,
            ..Self::default()
        }
    }

    /// A detail row attached to the group row with the given identity
    pub fn child_of(parent_id: impl Into<String>) -> Self {
        Self {
            parent_id: Some(parent_id.into()),
            ..Self::default()
        }
    }

    /// Set a field, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Field value by key; missing fields read as null
    pub fn get(&self, key: &str) -> CellValue {
        self.values.get(key).cloned().unwrap_or(CellValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_reads_null() {
        let row = Row::new().with("brand", "Eagle Rare");
        assert_eq!(row.get("brand"), CellValue::Text("Eagle Rare".into()));
        assert_eq!(row.get("no_such_field"), CellValue::Null);
    }

    #[test]
    fn test_child_attachment_markers() {
        let parent = Row::group_row().with("brand", "Eagle Rare");
        let child = Row::child_of("Eagle Rare").with("size_pack", "750ml 12pk");
        assert!(parent.is_group_row);
        assert_eq!(child.parent_id.as_deref(), Some("Eagle Rare"));
    }
}
