//! Cargo priority levels and the priority-to-value policy.

use serde::{Deserialize, Serialize};

/// Cargo priority as it arrives from the dashboard.
///
/// Parsing is case-insensitive; unrecognised labels become
/// [`Priority::Unspecified`] instead of failing.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Priority;
///
/// assert_eq!(Priority::from("URGENT"), Priority::Urgent);
/// assert_eq!(Priority::from("whenever"), Priority::Unspecified);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    /// Must go out first.
    Urgent,
    /// Next-day or sooner.
    High,
    /// Standard delivery.
    Medium,
    /// Can wait for a later run.
    Low,
    /// Missing or unrecognised label.
    Unspecified,
}

impl Priority {
    /// Canonical lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::Unspecified => "unspecified",
        }
    }
}

impl From<&str> for Priority {
    fn from(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "urgent" => Priority::Urgent,
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            _ => Priority::Unspecified,
        }
    }
}

impl From<String> for Priority {
    fn from(label: String) -> Self {
        Priority::from(label.as_str())
    }
}

impl From<Priority> for String {
    fn from(p: Priority) -> Self {
        p.as_str().to_string()
    }
}

/// Value assigned to each priority level when packing cargo.
///
/// The default table is `urgent=100, high=75, medium=50, low=25`, with 10
/// for anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityValues {
    /// Value of [`Priority::Urgent`] cargo.
    pub urgent: u64,
    /// Value of [`Priority::High`] cargo.
    pub high: u64,
    /// Value of [`Priority::Medium`] cargo.
    pub medium: u64,
    /// Value of [`Priority::Low`] cargo.
    pub low: u64,
    /// Value of cargo without a recognised priority.
    pub unspecified: u64,
}

impl Default for PriorityValues {
    fn default() -> Self {
        Self {
            urgent: 100,
            high: 75,
            medium: 50,
            low: 25,
            unspecified: 10,
        }
    }
}

impl PriorityValues {
    /// Value for the given priority.
    pub fn value_of(&self, priority: Priority) -> u64 {
        match priority {
            Priority::Urgent => self.urgent,
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
            Priority::Unspecified => self.unspecified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let v = PriorityValues::default();
        assert_eq!(v.value_of(Priority::Urgent), 100);
        assert_eq!(v.value_of(Priority::High), 75);
        assert_eq!(v.value_of(Priority::Medium), 50);
        assert_eq!(v.value_of(Priority::Low), 25);
        assert_eq!(v.value_of(Priority::Unspecified), 10);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Priority::from("High"), Priority::High);
        assert_eq!(Priority::from(" medium "), Priority::Medium);
        assert_eq!(Priority::from("LoW"), Priority::Low);
        assert_eq!(Priority::from(""), Priority::Unspecified);
    }

    #[test]
    fn test_serde_round_labels() {
        let p: Priority = serde_json::from_str("\"Urgent\"").expect("valid");
        assert_eq!(p, Priority::Urgent);
        assert_eq!(serde_json::to_string(&Priority::Low).expect("encode"), "\"low\"");
        let unknown: Priority = serde_json::from_str("\"critical\"").expect("valid");
        assert_eq!(unknown, Priority::Unspecified);
    }

    #[test]
    fn test_custom_table_partial_json() {
        let v: PriorityValues = serde_json::from_str(r#"{"urgent":500}"#).expect("valid");
        assert_eq!(v.urgent, 500);
        assert_eq!(v.low, 25);
    }
}
