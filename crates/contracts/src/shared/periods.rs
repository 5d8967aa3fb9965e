use serde::{Deserialize, Serialize};

/// Time-bucketing policy for drill-down screens.
///
/// `Calendar` pins the 12 slots to Jan..Dec of one year; `RollingTwelve`
/// slides them to the 12 months ending at the reference month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PeriodPolicy {
    Calendar { year: i32 },
    RollingTwelve,
}

impl PeriodPolicy {
    /// Short label shown in the period selector ("2024" / "R12")
    pub fn label(&self) -> String {
        match self {
            PeriodPolicy::Calendar { year } => year.to_string(),
            PeriodPolicy::RollingTwelve => "R12".to_string(),
        }
    }
}

impl std::fmt::Display for PeriodPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(PeriodPolicy::Calendar { year: 2024 }.label(), "2024");
        assert_eq!(PeriodPolicy::RollingTwelve.label(), "R12");
    }

    #[test]
    fn test_serde_round_trip() {
        let raw = serde_json::to_string(&PeriodPolicy::Calendar { year: 2024 }).unwrap();
        assert_eq!(raw, r#"{"mode":"calendar","year":2024}"#);

        let back: PeriodPolicy = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, PeriodPolicy::Calendar { year: 2024 });

        let rolling: PeriodPolicy = serde_json::from_str(r#"{"mode":"rolling_twelve"}"#).unwrap();
        assert_eq!(rolling, PeriodPolicy::RollingTwelve);
    }
}
