//! Per-request evaluation context.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The attribute bag a rule is evaluated against.
///
/// Created per request and discarded after the decision. Opaque to the
/// engine except for the conventional `field` attribute (the name of the
/// field being accessed, if any); everything else lives in `properties`
/// and is consulted only by caller-supplied conditions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Context {
    /// The field being accessed, if the request targets one.
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,

    /// Free-form domain attributes for condition predicates.
    #[serde(default)]
    properties: HashMap<String, Value>,
}

impl Context {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field being accessed.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add a single domain attribute.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Set all domain attributes at once (replaces any previously set).
    #[must_use]
    pub fn with_properties(mut self, properties: HashMap<String, Value>) -> Self {
        self.properties = properties;
        self
    }

    /// The field being accessed, if any.
    #[inline]
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Look up a domain attribute by name.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_context_is_empty() {
        let ctx = Context::new();
        assert!(ctx.field().is_none());
        assert!(ctx.property("user").is_none());
    }

    #[test]
    fn with_field_and_property_chain() {
        let ctx = Context::new()
            .with_field("email")
            .with_property("user", json!({"id": "u-1"}));

        assert_eq!(ctx.field(), Some("email"));
        assert_eq!(ctx.property("user"), Some(&json!({"id": "u-1"})));
    }

    #[test]
    fn with_properties_replaces_previous_attributes() {
        let mut fresh = HashMap::new();
        fresh.insert("role".to_owned(), json!("author"));

        let ctx = Context::new()
            .with_property("stale", json!(true))
            .with_properties(fresh);

        assert!(ctx.property("stale").is_none());
        assert_eq!(ctx.property("role"), Some(&json!("author")));
    }

    #[test]
    fn context_deserializes_with_missing_properties() {
        let ctx: Context = serde_json::from_str(r#"{"field": "title"}"#).expect("deserialize");
        assert_eq!(ctx.field(), Some("title"));
        assert!(ctx.property("user").is_none());
    }
}
