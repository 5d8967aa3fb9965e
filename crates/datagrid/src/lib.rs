//! Generic tabular view engine for the planning dashboard.
//!
//! Every list screen feeds its rows and column descriptors through the same
//! pipeline: filter -> sort -> paginate, with two-level grouped rows
//! (brand/product drill-downs) and grouped header columns. The engine is
//! pure: one [`DataTable::view`] call derives a complete [`TableView`] from
//! an in-memory row snapshot and the current view state, and owns no data.

pub mod column;
pub mod filter;
pub mod format;
pub mod layout;
pub mod nested;
pub mod paginate;
pub mod row;
pub mod sort;
pub mod state;
pub mod table;
pub mod value;

pub use column::{Align, Column, ColumnGroup, ColumnNode, ColumnWidth, SortAccessor};
pub use filter::FilterValues;
pub use layout::{GroupHeaderCell, HeaderLayout, LeafHeaderCell};
pub use paginate::PageSize;
pub use row::{Row, RowIdFn, TOTAL_ROW_ID};
pub use sort::{SortConfig, SortDirection};
pub use state::{StateBinding, TableState};
pub use table::{DataTable, HeaderCellView, RenderedCell, RenderedRow, TableSpec, TableView};
pub use value::CellValue;
