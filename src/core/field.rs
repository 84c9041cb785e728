//! Field value types and format validation

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::OnceLock;

/// A polymorphic field value used for dynamic field access on entities
///
/// List views sort and search on column keys chosen at runtime, so entities
/// expose their fields through this enum rather than through static types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a float, widening integers
    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(*f),
            FieldValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Render the value as searchable text
    ///
    /// Used by the query engine for substring matching. Null renders as the
    /// empty string so it never matches a non-empty search term.
    pub fn to_search_text(&self) -> String {
        match self {
            FieldValue::String(s) => s.clone(),
            FieldValue::Integer(i) => i.to_string(),
            FieldValue::Float(f) => f.to_string(),
            FieldValue::Boolean(b) => b.to_string(),
            FieldValue::DateTime(dt) => dt.to_rfc3339(),
            FieldValue::Null => String::new(),
        }
    }

    /// Compare two field values by their natural ordering
    ///
    /// Strings compare lexicographically, numbers numerically (integers and
    /// floats compare as floats), dates chronologically. Null sorts before
    /// everything. Values of incomparable kinds are treated as equal so a
    /// stable sort leaves their relative order untouched.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        use FieldValue::{Boolean, DateTime, Null, String as Str};
        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Null, _) => Ordering::Less,
            (_, Null) => Ordering::Greater,
            (Str(a), Str(b)) => a.cmp(b),
            (Boolean(a), Boolean(b)) => a.cmp(b),
            (DateTime(a), DateTime(b)) => a.cmp(b),
            _ => match (self.as_float(), other.as_float()) {
                (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            },
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

/// Field format validators for payload validation
#[derive(Debug, Clone)]
pub enum FieldFormat {
    Email,
    Url,
}

impl FieldFormat {
    /// Validate a string value against this format
    pub fn validate(&self, value: &str) -> bool {
        match self {
            FieldFormat::Email => Self::is_valid_email(value),
            FieldFormat::Url => Self::is_valid_url(value),
        }
    }

    fn is_valid_email(email: &str) -> bool {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
        });
        regex.is_match(email)
    }

    fn is_valid_url(url: &str) -> bool {
        static URL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = URL_REGEX.get_or_init(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());
        regex.is_match(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_string() {
        let value = FieldValue::String("test".to_string());
        assert_eq!(value.as_string(), Some("test"));
        assert_eq!(value.as_integer(), None);
        assert!(!value.is_null());
    }

    #[test]
    fn test_numeric_comparison_widens_integers() {
        let a = FieldValue::Integer(25);
        let b = FieldValue::Float(25.99);
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);
    }

    #[test]
    fn test_null_sorts_first() {
        let null = FieldValue::Null;
        let s = FieldValue::String("a".to_string());
        assert_eq!(null.compare(&s), Ordering::Less);
        assert_eq!(s.compare(&null), Ordering::Greater);
    }

    #[test]
    fn test_incomparable_kinds_are_equal() {
        let a = FieldValue::String("10".to_string());
        let b = FieldValue::Integer(10);
        assert_eq!(a.compare(&b), Ordering::Equal);
    }

    #[test]
    fn test_null_search_text_is_empty() {
        assert_eq!(FieldValue::Null.to_search_text(), "");
    }

    #[test]
    fn test_email_format() {
        assert!(FieldFormat::Email.validate("liam.j@example.com"));
        assert!(!FieldFormat::Email.validate("not-an-email"));
    }

    #[test]
    fn test_url_format() {
        assert!(FieldFormat::Url.validate("https://picsum.photos/id/0/200/200"));
        assert!(!FieldFormat::Url.validate("picsum.photos"));
    }
}
