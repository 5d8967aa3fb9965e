pub mod service;

pub use service::{scan_plan_rows, scan_plan_table_spec};
