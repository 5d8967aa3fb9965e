pub mod service;
pub mod table;

pub use service::get_volume_drilldown;
pub use table::{volume_table_rows, volume_table_spec};
