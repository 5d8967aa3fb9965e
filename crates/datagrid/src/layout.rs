use crate::column::{Align, Column, ColumnNode, ColumnWidth};

/// Cell of the group-header row. Plain top-level columns render as a
/// one-wide untitled placeholder so the two header rows stay aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupHeaderCell {
    pub title: Option<String>,
    pub span: usize,
    pub is_group: bool,
}

/// Static part of one leaf header cell, including the section it belongs to
#[derive(Debug, Clone)]
pub struct LeafHeaderCell {
    pub key: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub sortable: bool,
    pub filterable: bool,
    pub align: Align,
    pub width: ColumnWidth,
    /// Title of the enclosing group; None for an ungrouped column, which is
    /// its own one-column section
    pub section_title: Option<String>,
    /// True on the first leaf of each section; hosts draw the section
    /// boundary before these cells
    pub section_start: bool,
}

/// Two-row header model: an optional group row above the leaf row
#[derive(Debug, Clone)]
pub struct HeaderLayout {
    /// Present only when at least one top-level node is a group
    pub group_row: Option<Vec<GroupHeaderCell>>,
    pub leaf_row: Vec<LeafHeaderCell>,
}

/// Flatten the (possibly two-level) column list into leaf columns in
/// left-to-right order
pub fn flat_columns(nodes: &[ColumnNode]) -> Vec<&Column> {
    let mut flat = Vec::new();
    for node in nodes {
        match node {
            ColumnNode::Single(column) => flat.push(column),
            ColumnNode::Group(group) => flat.extend(group.columns.iter()),
        }
    }
    flat
}

/// Find a leaf column by key in the flattened list
pub fn find_column<'a>(flat: &'a [&'a Column], key: &str) -> Option<&'a Column> {
    flat.iter().find(|c| c.key == key).copied()
}

/// Ensure every key is unique across the flattened list; section detection
/// and cell addressing both assume it
pub fn validate_columns(nodes: &[ColumnNode]) -> Result<(), String> {
    let flat = flat_columns(nodes);
    for (i, column) in flat.iter().enumerate() {
        if flat[..i].iter().any(|c| c.key == column.key) {
            return Err(format!("Duplicate column key '{}'", column.key));
        }
    }
    Ok(())
}

/// Build the two-row header model for the column list
pub fn header_layout(nodes: &[ColumnNode]) -> HeaderLayout {
    let has_groups = nodes.iter().any(|n| matches!(n, ColumnNode::Group(_)));

    let group_row = has_groups.then(|| {
        nodes
            .iter()
            .map(|node| match node {
                ColumnNode::Single(_) => GroupHeaderCell {
                    title: None,
                    span: 1,
                    is_group: false,
                },
                ColumnNode::Group(group) => GroupHeaderCell {
                    title: Some(group.title.clone()),
                    span: group.columns.len(),
                    is_group: true,
                },
            })
            .collect()
    });

    let mut leaf_row = Vec::new();
    for node in nodes {
        match node {
            ColumnNode::Single(column) => leaf_row.push(leaf_cell(column, None, true)),
            ColumnNode::Group(group) => {
                for (i, column) in group.columns.iter().enumerate() {
                    leaf_row.push(leaf_cell(column, Some(group.title.clone()), i == 0));
                }
            }
        }
    }

    HeaderLayout { group_row, leaf_row }
}

fn leaf_cell(column: &Column, section_title: Option<String>, section_start: bool) -> LeafHeaderCell {
    LeafHeaderCell {
        key: column.key.clone(),
        title: column.title.clone(),
        subtitle: column.subtitle.clone(),
        sortable: column.sortable,
        filterable: column.filterable,
        align: column.align,
        width: column.width,
        section_title,
        section_start,
    }
}
