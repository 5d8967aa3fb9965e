pub mod service;

pub use service::get_budget_forecast;
