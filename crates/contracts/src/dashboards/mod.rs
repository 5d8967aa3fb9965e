pub mod d400_volume_drilldown;
pub mod d401_budget_forecast;
