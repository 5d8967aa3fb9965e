use serde::{Deserialize, Serialize};

/// Value in a table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Text value
    Text(String),
    /// Numeric value
    Number(f64),
    /// Integer value
    Integer(i64),
    /// Null value
    Null,
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Numeric form, when the value is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// String form used for display, filtering and non-numeric comparison
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Integer(i) => i.to_string(),
            CellValue::Null => String::new(),
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Integer(value as i64)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Text("Ale".into()).display(), "Ale");
        assert_eq!(CellValue::Integer(42).display(), "42");
        assert_eq!(CellValue::Number(1.5).display(), "1.5");
        assert_eq!(CellValue::Null.display(), "");
    }

    #[test]
    fn test_as_number() {
        assert_eq!(CellValue::Number(1.5).as_number(), Some(1.5));
        assert_eq!(CellValue::Integer(3).as_number(), Some(3.0));
        assert_eq!(CellValue::Text("3".into()).as_number(), None);
        assert_eq!(CellValue::Null.as_number(), None);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(CellValue::from(Some(2.0)), CellValue::Number(2.0));
        assert_eq!(CellValue::from(None::<f64>), CellValue::Null);
    }

    #[test]
    fn test_untagged_serde() {
        let raw = serde_json::to_string(&CellValue::Number(1.5)).unwrap();
        assert_eq!(raw, "1.5");
        let back: CellValue = serde_json::from_str("\"Ale\"").unwrap();
        assert_eq!(back, CellValue::Text("Ale".into()));
    }
}
