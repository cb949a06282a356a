//! Uptime extraction from monitoring snapshots and raw `/proc/uptime` text.
//!
//! Both entry points are total: anything that cannot be read as a number
//! comes back as `None`, which callers must treat as "unavailable" rather
//! than as zero.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

/// Key the system monitor publishes uptime under.
pub const UPTIME_KEY: &str = "system/uptime";

/// Substring used for the case-insensitive fallback search.
const UPTIME_NEEDLE: &str = "uptime";

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").expect("valid leading number pattern")
});

/// A loosely typed leaf value from a monitoring snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Number(f64),
    Text(String),
    /// Booleans, nulls, lists and records without a usable `value`.
    Other,
}

impl Scalar {
    /// Numeric coercion. Text must be a complete number once trimmed;
    /// blank text counts as zero.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) if n.is_finite() => Some(*n),
            Scalar::Text(text) if text.trim().is_empty() => Some(0.0),
            Scalar::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite()),
            _ => None,
        }
    }
}

impl From<&Value> for Scalar {
    fn from(value: &Value) -> Self {
        match value {
            Value::Number(n) => n.as_f64().map(Scalar::Number).unwrap_or(Scalar::Other),
            Value::String(s) => Scalar::Text(s.clone()),
            _ => Scalar::Other,
        }
    }
}

/// A snapshot entry: either the value itself or a record carrying it in
/// a `value` field.
#[derive(Debug, Clone, PartialEq)]
pub enum UptimeValue {
    Direct(Scalar),
    Wrapped { value: Scalar },
}

impl UptimeValue {
    pub fn as_seconds(&self) -> Option<f64> {
        match self {
            UptimeValue::Direct(scalar) => scalar.to_number(),
            UptimeValue::Wrapped { value } => value.to_number(),
        }
    }
}

impl From<f64> for UptimeValue {
    fn from(n: f64) -> Self {
        UptimeValue::Direct(Scalar::Number(n))
    }
}

impl From<&str> for UptimeValue {
    fn from(text: &str) -> Self {
        UptimeValue::Direct(Scalar::Text(text.to_string()))
    }
}

impl From<&Value> for UptimeValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Object(fields) => match fields.get("value") {
                Some(inner) => UptimeValue::Wrapped { value: Scalar::from(inner) },
                None => UptimeValue::Direct(Scalar::Other),
            },
            other => UptimeValue::Direct(Scalar::from(other)),
        }
    }
}

/// Ordered key/value pairs from a system monitor.
///
/// Order is insertion order and decides which key wins the fallback
/// search, so callers control it explicitly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    entries: Vec<(String, UptimeValue)>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<UptimeValue>) {
        self.entries.push((key.into(), value.into()));
    }

    /// First entry stored under `key`.
    pub fn get(&self, key: &str) -> Option<&UptimeValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &UptimeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parses a JSON object, keeping member order as written.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let members: Map<String, Value> = serde_json::from_str(json)?;
        Ok(members.iter().map(|(k, v)| (k.clone(), UptimeValue::from(v))).collect())
    }
}

impl<K: Into<String>> FromIterator<(K, UptimeValue)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (K, UptimeValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Finds the uptime in seconds in a monitoring snapshot.
///
/// `system/uptime` is tried first. If it is missing or not numeric, the
/// first key containing "uptime" (any case) with a numeric value wins.
pub fn extract_uptime(snapshot: Option<&Snapshot>) -> Option<f64> {
    let snapshot = snapshot?;

    if let Some(secs) = snapshot.get(UPTIME_KEY).and_then(UptimeValue::as_seconds) {
        return Some(secs);
    }

    snapshot
        .iter()
        .filter(|(key, _)| key.to_lowercase().contains(UPTIME_NEEDLE))
        .find_map(|(_, value)| value.as_seconds())
}

/// Reads the first field of `/proc/uptime` style text.
///
/// Only the leading numeric part of the first token is used, so
/// `"123.4abc 99"` gives `123.4`.
pub fn parse_proc_uptime(text: Option<&str>) -> Option<f64> {
    let first = text?.split_whitespace().next()?;
    let matched = LEADING_NUMBER.find(first)?;
    matched.as_str().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapped(n: f64) -> UptimeValue {
        UptimeValue::Wrapped { value: Scalar::Number(n) }
    }

    #[test]
    fn test_extract_primary_key() {
        let mut snapshot = Snapshot::new();
        snapshot.insert("system/uptime", 12345.6);
        assert_eq!(extract_uptime(Some(&snapshot)), Some(12345.6));
    }

    #[test]
    fn test_extract_wrapped_value() {
        let mut snapshot = Snapshot::new();
        snapshot.insert("system/uptime", wrapped(42.0));
        assert_eq!(extract_uptime(Some(&snapshot)), Some(42.0));
    }

    #[test]
    fn test_extract_case_insensitive_fallback() {
        let mut snapshot = Snapshot::new();
        snapshot.insert("cpu/load", 0.5);
        snapshot.insert("SYSTEM_UPTIME_X", 99.0);
        assert_eq!(extract_uptime(Some(&snapshot)), Some(99.0));
    }

    #[test]
    fn test_extract_numeric_text() {
        let mut snapshot = Snapshot::new();
        snapshot.insert("system/uptime", " 3600.5 ");
        assert_eq!(extract_uptime(Some(&snapshot)), Some(3600.5));
    }

    #[test]
    fn test_extract_primary_not_numeric_falls_through() {
        let mut snapshot = Snapshot::new();
        snapshot.insert("system/uptime", "unknown");
        snapshot.insert("host/Uptime", wrapped(7.0));
        assert_eq!(extract_uptime(Some(&snapshot)), Some(7.0));
    }

    #[test]
    fn test_extract_primary_beats_earlier_fallback() {
        let mut snapshot = Snapshot::new();
        snapshot.insert("other/uptime", 1.0);
        snapshot.insert("system/uptime", 2.0);
        assert_eq!(extract_uptime(Some(&snapshot)), Some(2.0));
    }

    #[test]
    fn test_extract_fallback_follows_insertion_order() {
        let snapshot: Snapshot = vec![
            ("b/uptime", UptimeValue::from("n/a")),
            ("c/uptime", UptimeValue::from(20.0)),
            ("a/uptime", UptimeValue::from(10.0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(extract_uptime(Some(&snapshot)), Some(20.0));
    }

    #[test]
    fn test_extract_absent() {
        assert_eq!(extract_uptime(None), None);
        assert_eq!(extract_uptime(Some(&Snapshot::new())), None);

        let mut snapshot = Snapshot::new();
        snapshot.insert("cpu/load", 1.0);
        snapshot.insert("system/uptime", UptimeValue::Direct(Scalar::Other));
        snapshot.insert("uptime_text", "n/a");
        assert_eq!(extract_uptime(Some(&snapshot)), None);
    }

    #[test]
    fn test_extract_blank_text_is_zero() {
        let mut snapshot = Snapshot::new();
        snapshot.insert("system/uptime", "");
        assert_eq!(extract_uptime(Some(&snapshot)), Some(0.0));

        let mut snapshot = Snapshot::new();
        snapshot.insert("system/uptime", UptimeValue::Direct(Scalar::Other));
        snapshot.insert("boot/Uptime", UptimeValue::Wrapped { value: Scalar::Text("  ".to_string()) });
        assert_eq!(extract_uptime(Some(&snapshot)), Some(0.0));
    }

    #[test]
    fn test_snapshot_from_json_keeps_order_and_shapes() {
        let snapshot = Snapshot::from_json(
            r#"{"z/uptime": {"value": "15"}, "a/uptime": 30, "flag/uptime": true}"#,
        )
        .unwrap();
        assert_eq!(snapshot.len(), 3);
        assert!(!snapshot.is_empty());
        assert!(Snapshot::new().is_empty());
        let keys: Vec<&str> = snapshot.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z/uptime", "a/uptime", "flag/uptime"]);
        assert_eq!(snapshot.get("z/uptime"), Some(&UptimeValue::Wrapped { value: Scalar::Text("15".to_string()) }));
        assert_eq!(snapshot.get("flag/uptime"), Some(&UptimeValue::Direct(Scalar::Other)));
        assert_eq!(extract_uptime(Some(&snapshot)), Some(15.0));
    }

    #[test]
    fn test_snapshot_from_json_record_without_value() {
        let snapshot = Snapshot::from_json(r#"{"system/uptime": {"unit": "s"}}"#).unwrap();
        assert_eq!(extract_uptime(Some(&snapshot)), None);
    }

    #[test]
    fn test_snapshot_from_json_rejects_non_object() {
        assert!(Snapshot::from_json("[1, 2]").is_err());
        assert!(Snapshot::from_json("not json").is_err());
    }

    #[test]
    fn test_parse_proc_uptime() {
        assert_eq!(parse_proc_uptime(Some("12345.67 6789.01\n")), Some(12345.67));
        assert_eq!(parse_proc_uptime(Some("  42 7")), Some(42.0));
    }

    #[test]
    fn test_parse_proc_uptime_trailing_garbage() {
        assert_eq!(parse_proc_uptime(Some("123.4abc 99")), Some(123.4));
        assert_eq!(parse_proc_uptime(Some("15s")), Some(15.0));
        assert_eq!(parse_proc_uptime(Some("1e3x")), Some(1000.0));
        assert_eq!(parse_proc_uptime(Some("7e")), Some(7.0));
    }

    #[test]
    fn test_parse_proc_uptime_stops_at_non_ascii_digits() {
        assert_eq!(parse_proc_uptime(Some("12\u{0663} 5")), Some(12.0));
        assert_eq!(parse_proc_uptime(Some("\u{0663}12 5")), None);
    }

    #[test]
    fn test_parse_proc_uptime_absent() {
        assert_eq!(parse_proc_uptime(None), None);
        assert_eq!(parse_proc_uptime(Some("")), None);
        assert_eq!(parse_proc_uptime(Some("   \n")), None);
        assert_eq!(parse_proc_uptime(Some("abc 123")), None);
    }

    #[test]
    fn test_parse_proc_uptime_is_repeatable() {
        let text = Some("512.25 100.00\n");
        assert_eq!(parse_proc_uptime(text), parse_proc_uptime(text));
    }
}
