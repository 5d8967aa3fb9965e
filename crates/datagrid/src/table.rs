use crate::column::{Align, Column, ColumnNode};
use crate::filter::apply_filters;
use crate::layout::{flat_columns, header_layout, validate_columns, GroupHeaderCell, LeafHeaderCell};
use crate::nested::sort_nested;
use crate::paginate::{page_count, paginate, range_label, PageSize, DEFAULT_PAGE_SIZE_OPTIONS};
use crate::row::{Row, RowIdFn};
use crate::sort::{sort_indicator, sort_rows};
use crate::state::TableState;
use crate::value::CellValue;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Renderer for the expanded detail panel under a row
pub type DetailRenderer = Arc<dyn Fn(&Row, &[&Column]) -> String + Send + Sync>;

/// Producer of an optional row-level tooltip
pub type TooltipFn = Arc<dyn Fn(&Row) -> Option<String> + Send + Sync>;

/// Static configuration of one table
#[derive(Clone)]
pub struct TableSpec {
    pub columns: Vec<ColumnNode>,
    pub get_row_id: RowIdFn,
    /// Two-level parent/child sorting (brand drill-downs)
    pub nested: bool,
    pub enable_column_filtering: bool,
    pub show_pagination: bool,
    pub page_size_options: Vec<PageSize>,
    pub detail_renderer: Option<DetailRenderer>,
    pub tooltip: Option<TooltipFn>,
}

impl TableSpec {
    pub fn new(
        columns: Vec<ColumnNode>,
        get_row_id: impl Fn(&Row) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            columns,
            get_row_id: Arc::new(get_row_id),
            nested: false,
            enable_column_filtering: true,
            show_pagination: true,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            detail_renderer: None,
            tooltip: None,
        }
    }

    pub fn nested(mut self) -> Self {
        self.nested = true;
        self
    }

    pub fn without_column_filtering(mut self) -> Self {
        self.enable_column_filtering = false;
        self
    }

    pub fn without_pagination(mut self) -> Self {
        self.show_pagination = false;
        self
    }

    pub fn page_size_options(mut self, options: Vec<PageSize>) -> Self {
        self.page_size_options = options;
        self
    }

    pub fn detail_renderer(
        mut self,
        f: impl Fn(&Row, &[&Column]) -> String + Send + Sync + 'static,
    ) -> Self {
        self.detail_renderer = Some(Arc::new(f));
        self
    }

    pub fn tooltip(mut self, f: impl Fn(&Row) -> Option<String> + Send + Sync + 'static) -> Self {
        self.tooltip = Some(Arc::new(f));
        self
    }

    /// Column keys must be unique across the flattened list
    pub fn validate(&self) -> Result<(), String> {
        validate_columns(&self.columns)
    }
}

impl fmt::Debug for TableSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableSpec")
            .field("columns", &self.columns)
            .field("nested", &self.nested)
            .field("enable_column_filtering", &self.enable_column_filtering)
            .field("show_pagination", &self.show_pagination)
            .field("page_size_options", &self.page_size_options)
            .finish_non_exhaustive()
    }
}

/// One rendered cell of the body
#[derive(Debug, Clone)]
pub struct RenderedCell {
    pub key: String,
    /// Projected value (the raw field when the column has no renderer)
    pub value: CellValue,
    pub display: String,
    pub align: Align,
}

/// One rendered body row
#[derive(Debug, Clone)]
pub struct RenderedRow {
    pub id: String,
    pub cells: Vec<RenderedCell>,
    pub is_group_row: bool,
    /// Detail panel content, present when the row is expanded and the spec
    /// carries a detail renderer
    pub detail: Option<String>,
    pub tooltip: Option<String>,
}

/// Leaf header cell with the state-dependent sort indicator applied
#[derive(Debug, Clone)]
pub struct HeaderCellView {
    pub cell: LeafHeaderCell,
    /// "▲" / "▼" / "⇅" suffix for sortable columns, empty otherwise
    pub sort_indicator: &'static str,
    /// Whether the host should mount a filter control on this column.
    /// Kept apart from the sort target so the control does not toggle the
    /// sort when used.
    pub show_filter: bool,
}

/// Complete derived view: a pure function of (rows, columns, state)
#[derive(Debug, Clone)]
pub struct TableView {
    pub group_header: Option<Vec<GroupHeaderCell>>,
    pub header: Vec<HeaderCellView>,
    pub rows: Vec<RenderedRow>,
    /// Post-filter, pre-pagination row count
    pub filtered_count: usize,
    /// Unfiltered row count
    pub total_count: usize,
    pub page: usize,
    pub page_size: PageSize,
    pub page_count: usize,
    /// Present when pagination is shown
    pub range_label: Option<String>,
}

/// The tabular data engine: configuration plus view state.
///
/// Rows are not owned: every [`DataTable::view`] call takes the current
/// snapshot and derives the visible page from scratch (filter, then sort,
/// then slice). Hosts memoize the call on their side.
#[derive(Debug)]
pub struct DataTable {
    pub spec: TableSpec,
    pub state: TableState,
}

impl DataTable {
    pub fn new(spec: TableSpec) -> Self {
        let initial_size = spec
            .page_size_options
            .first()
            .copied()
            .unwrap_or(PageSize::All);
        Self {
            spec,
            state: TableState::owned(initial_size),
        }
    }

    pub fn with_state(spec: TableSpec, state: TableState) -> Self {
        Self { spec, state }
    }

    // State pass-throughs, so hosts talk to one object.

    pub fn set_filter(&mut self, key: &str, value: &str) {
        self.state.set_filter(key, value);
    }

    pub fn clear_filters(&mut self) {
        self.state.clear_filters();
    }

    pub fn notify_filters_changed(&mut self) {
        self.state.notify_filters_changed();
    }

    pub fn toggle_sort(&mut self, key: &str) {
        self.state.toggle_sort(key);
    }

    pub fn set_page(&mut self, page: usize) {
        self.state.set_page(page);
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.state.set_page_size(size);
    }

    /// Derive the view with no expanded rows
    pub fn view(&self, rows: &[Row]) -> TableView {
        self.view_with_expanded(rows, &HashSet::new())
    }

    /// Derive the view. `expanded` holds the identities whose detail panel
    /// is open.
    pub fn view_with_expanded(&self, rows: &[Row], expanded: &HashSet<String>) -> TableView {
        let flat = flat_columns(&self.spec.columns);
        let total_count = rows.len();

        // 1. Filter the full set; the count feeds the pagination label even
        //    though the page below is sliced independently.
        let filtered = if self.spec.enable_column_filtering {
            apply_filters(rows, &flat, self.state.filters.get())
        } else {
            rows.to_vec()
        };
        let filtered_count = filtered.len();

        // 2. Sort.
        let sorted = match self.state.sort.get() {
            Some(sort) if self.spec.nested => {
                sort_nested(filtered, &flat, sort, &self.spec.get_row_id)
            }
            Some(sort) => sort_rows(filtered, &flat, sort, &self.spec.get_row_id),
            None => filtered,
        };

        // 3. Slice the page.
        let page = *self.state.page.get();
        let page_size = *self.state.page_size.get();
        let visible: &[Row] = if self.spec.show_pagination {
            paginate(&sorted, page, page_size)
        } else {
            &sorted
        };

        let body = visible
            .iter()
            .map(|row| self.render_row(row, &flat, expanded))
            .collect();

        let layout = header_layout(&self.spec.columns);
        let sort = self.state.sort.get();
        let header = layout
            .leaf_row
            .into_iter()
            .map(|cell| HeaderCellView {
                sort_indicator: if cell.sortable {
                    sort_indicator(sort.as_ref(), &cell.key)
                } else {
                    ""
                },
                show_filter: self.spec.enable_column_filtering && cell.filterable,
                cell,
            })
            .collect();

        TableView {
            group_header: layout.group_row,
            header,
            rows: body,
            filtered_count,
            total_count,
            page,
            page_size,
            page_count: page_count(filtered_count, page_size),
            range_label: self
                .spec
                .show_pagination
                .then(|| range_label(filtered_count, total_count, page, page_size)),
        }
    }

    fn render_row(&self, row: &Row, flat: &[&Column], expanded: &HashSet<String>) -> RenderedRow {
        let id = (self.spec.get_row_id)(row);

        let cells = flat
            .iter()
            .map(|column| {
                let raw = row.get(&column.key);
                let value = match &column.render {
                    Some(render) => render(&raw, row),
                    None => raw,
                };
                RenderedCell {
                    key: column.key.clone(),
                    display: value.display(),
                    value,
                    align: column.align,
                }
            })
            .collect();

        let detail = match (&self.spec.detail_renderer, expanded.contains(&id)) {
            (Some(render), true) => Some(render(row, flat)),
            _ => None,
        };

        let tooltip = self.spec.tooltip.as_ref().and_then(|f| f(row));

        RenderedRow {
            id,
            cells,
            is_group_row: row.is_group_row,
            detail,
            tooltip,
        }
    }
}
