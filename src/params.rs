//! Parameter table and placeholder formatting
//!
//! Bound values render as `#{parameters.pN}` placeholders. Keys are assigned
//! sequentially at render time only, so the table's insertion order always
//! matches the textual left-to-right order of placeholders in the rendered
//! statement.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Prefix for generated parameter map keys
pub const PARAMETER_PREFIX: &str = "p";

/// Format the map key for a 1-based parameter index
pub fn format_parameter_key(index: usize) -> String {
    format!("{}{}", PARAMETER_PREFIX, index)
}

/// Format the placeholder text for a parameter map key
pub fn format_placeholder(key: &str) -> String {
    format!("#{{parameters.{}}}", key)
}

/// Ordered table of bound parameter values
///
/// Serializes as a JSON map in binding order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    entries: Vec<(String, Value)>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value under the given key
    pub(crate) fn insert(&mut self, key: String, value: Value) {
        self.entries.push((key, value));
    }

    /// Look up a bound value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in binding order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Keys in binding order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

impl Serialize for Parameters {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_and_placeholder_format() {
        assert_eq!(format_parameter_key(1), "p1");
        assert_eq!(format_parameter_key(12), "p12");
        assert_eq!(format_placeholder("p3"), "#{parameters.p3}");
    }

    #[test]
    fn test_binding_order_is_preserved() {
        let mut parameters = Parameters::new();
        parameters.insert("p1".to_string(), json!(6));
        parameters.insert("p2".to_string(), json!("Fred"));

        let keys: Vec<&str> = parameters.keys().collect();
        assert_eq!(keys, vec!["p1", "p2"]);
        assert_eq!(parameters.get("p1"), Some(&json!(6)));
        assert_eq!(parameters.get("p2"), Some(&json!("Fred")));
        assert_eq!(parameters.get("p3"), None);
        assert_eq!(parameters.len(), 2);
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let mut parameters = Parameters::new();
        parameters.insert("p1".to_string(), json!(4));
        parameters.insert("p2".to_string(), json!(8));
        parameters.insert("p3".to_string(), json!("Fred%"));

        let serialized = serde_json::to_string(&parameters).unwrap();
        assert_eq!(serialized, r#"{"p1":4,"p2":8,"p3":"Fred%"}"#);
    }
}
