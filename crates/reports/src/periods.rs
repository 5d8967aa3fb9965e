use crate::error::ReportError;
use chrono::{Datelike, NaiveDate, Utc};
use contracts::shared::periods::PeriodPolicy;

/// Upper-case month labels, January first
pub const MONTH_LABELS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Twelve consecutive month slots a record's (year, month) maps into.
///
/// Calendar policy pins the window to Jan..Dec of one year. Rolling policy
/// ends the window at the reference month, so the reference month itself is
/// the rightmost slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodWindow {
    start_year: i32,
    /// 1-based month the window starts at
    start_month: u32,
    labels: Vec<String>,
}

impl PeriodWindow {
    pub fn build(policy: PeriodPolicy, reference: NaiveDate) -> Self {
        let (start_year, start_month) = match policy {
            PeriodPolicy::Calendar { year } => (year, 1),
            PeriodPolicy::RollingTwelve => {
                // 11 months before the reference month
                let months = reference.year() * 12 + reference.month0() as i32 - 11;
                (months.div_euclid(12), months.rem_euclid(12) as u32 + 1)
            }
        };

        let labels = (0..12)
            .map(|offset| {
                let months = start_year * 12 + (start_month as i32 - 1) + offset;
                month_label(months.div_euclid(12), months.rem_euclid(12) as u32 + 1)
            })
            .collect();

        Self {
            start_year,
            start_month,
            labels,
        }
    }

    /// The 12 slot labels, left to right
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Slot index for a record period, None when the record falls outside
    /// the window
    pub fn slot(&self, year: i32, month: u32) -> Option<usize> {
        if !(1..=12).contains(&month) {
            return None;
        }
        let diff = (year - self.start_year) * 12 + month as i32 - self.start_month as i32;
        (0..12).contains(&diff).then_some(diff as usize)
    }
}

/// "MMM YY" slot label (e.g. "JUL 23")
fn month_label(year: i32, month: u32) -> String {
    format!(
        "{} {:02}",
        MONTH_LABELS[(month - 1) as usize],
        year.rem_euclid(100)
    )
}

/// Parse a request's optional "YYYY-MM-DD" anchor; today when absent
pub fn resolve_reference_date(raw: Option<&str>) -> Result<NaiveDate, ReportError> {
    match raw {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| ReportError::InvalidReferenceDate(s.to_string())),
        None => Ok(Utc::now().date_naive()),
    }
}
