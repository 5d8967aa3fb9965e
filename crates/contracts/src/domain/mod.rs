pub mod common;

pub mod a001_user;
pub mod a002_market;
pub mod a003_product;
pub mod a004_retail_account;
pub mod a005_rate_table;
pub mod a006_sync_connection;
pub mod a007_scan_promotion;
