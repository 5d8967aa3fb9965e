use crate::row::Row;
use crate::value::CellValue;
use std::fmt;
use std::sync::Arc;

/// Accessor computing a cell-shaped value from a row
pub type ValueFn = Arc<dyn Fn(&Row) -> CellValue + Send + Sync>;

/// Display projection: receives the raw field value and the whole row
pub type RenderFn = Arc<dyn Fn(&CellValue, &Row) -> CellValue + Send + Sync>;

/// Horizontal alignment of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Sizing hint for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    Auto,
    Wide,
    ExtraWide,
}

/// Ordering override for a column: either another field of the row or a
/// computed key
#[derive(Clone)]
pub enum SortAccessor {
    Field(String),
    Computed(ValueFn),
}

impl fmt::Debug for SortAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortAccessor::Field(name) => f.debug_tuple("Field").field(name).finish(),
            SortAccessor::Computed(_) => f.debug_tuple("Computed").field(&"<fn>").finish(),
        }
    }
}

/// Descriptor of one leaf column
#[derive(Clone)]
pub struct Column {
    /// Field key into the row map; unique across the flattened column list
    pub key: String,
    /// Header text
    pub title: String,
    /// Second header line, when the screen uses one
    pub subtitle: Option<String>,
    /// Display projection; raw field value is shown when absent
    pub render: Option<RenderFn>,
    /// Filter-side accessor; overrides `render` and the raw value for matching
    pub filter_value: Option<ValueFn>,
    /// Ordering override; the raw field value orders the column when absent
    pub sort_accessor: Option<SortAccessor>,
    pub sortable: bool,
    pub filterable: bool,
    pub align: Align,
    pub width: ColumnWidth,
}

impl Column {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            subtitle: None,
            render: None,
            filter_value: None,
            sort_accessor: None,
            sortable: true,
            filterable: true,
            align: Align::Left,
            width: ColumnWidth::Auto,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn align_right(mut self) -> Self {
        self.align = Align::Right;
        self
    }

    pub fn wide(mut self) -> Self {
        self.width = ColumnWidth::Wide;
        self
    }

    pub fn extra_wide(mut self) -> Self {
        self.width = ColumnWidth::ExtraWide;
        self
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn not_filterable(mut self) -> Self {
        self.filterable = false;
        self
    }

    pub fn render(mut self, f: impl Fn(&CellValue, &Row) -> CellValue + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(f));
        self
    }

    pub fn filter_with(mut self, f: impl Fn(&Row) -> CellValue + Send + Sync + 'static) -> Self {
        self.filter_value = Some(Arc::new(f));
        self
    }

    /// Order this column by another field of the row
    pub fn sort_by_field(mut self, field: impl Into<String>) -> Self {
        self.sort_accessor = Some(SortAccessor::Field(field.into()));
        self
    }

    /// Order this column by a computed key
    pub fn sort_with(mut self, f: impl Fn(&Row) -> CellValue + Send + Sync + 'static) -> Self {
        self.sort_accessor = Some(SortAccessor::Computed(Arc::new(f)));
        self
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("align", &self.align)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

/// Header spanning a run of leaf columns
#[derive(Debug, Clone)]
pub struct ColumnGroup {
    pub title: String,
    pub columns: Vec<Column>,
}

/// Top-level column list entry: a plain column or a titled group of columns.
/// Groups carry no data of their own and nest only one level deep.
#[derive(Debug, Clone)]
pub enum ColumnNode {
    Single(Column),
    Group(ColumnGroup),
}

impl ColumnNode {
    pub fn single(column: Column) -> Self {
        ColumnNode::Single(column)
    }

    pub fn group(title: impl Into<String>, columns: Vec<Column>) -> Self {
        ColumnNode::Group(ColumnGroup {
            title: title.into(),
            columns,
        })
    }
}
