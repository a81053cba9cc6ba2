// Workflow Attributes - Self-describing step parameters and their configured values

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::{AutomationError, AutomationErrorKind, AutomationResult};

/// Ordered option key -> display label mapping
pub type OptionMap = IndexMap<String, String>;

/// How an attribute is edited and validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Select,
    Text,
}

impl AttributeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Text => "text",
        }
    }
}

/// One configurable parameter of a step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeDefinition {
    key: String,
    label: String,
    description: String,
    kind: AttributeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<OptionMap>,
}

impl AttributeDefinition {
    /// Create a definition, enforcing that options are present iff the kind is `Select`
    pub fn new(
        key: &str,
        label: &str,
        description: &str,
        kind: AttributeKind,
        options: Option<OptionMap>,
    ) -> AutomationResult<Self> {
        match (kind, &options) {
            (AttributeKind::Select, Some(opts)) if !opts.is_empty() => {}
            (AttributeKind::Text, None) => {}
            _ => {
                return Err(AutomationError::new(
                    AutomationErrorKind::InvalidAttributeDefinition,
                    format!(
                        "Attribute '{}' of kind {} has invalid options",
                        key,
                        kind.as_str()
                    ),
                ));
            }
        }

        Ok(Self {
            key: key.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            kind,
            options,
        })
    }

    pub fn select(key: &str, label: &str, description: &str, options: OptionMap) -> AutomationResult<Self> {
        Self::new(key, label, description, AttributeKind::Select, Some(options))
    }

    pub fn text(key: &str, label: &str, description: &str) -> AutomationResult<Self> {
        Self::new(key, label, description, AttributeKind::Text, None)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    pub fn options(&self) -> Option<&OptionMap> {
        self.options.as_ref()
    }

    /// Check a configured value against the declared options. Text accepts anything.
    pub fn validate_value(&self, value: &str) -> AutomationResult<()> {
        match &self.options {
            Some(options) if !options.contains_key(value) => {
                Err(AutomationError::invalid_attribute_value(&self.key, value))
            }
            _ => Ok(()),
        }
    }
}

impl PartialEq for AttributeDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for AttributeDefinition {}

/// Reject a definition set with repeated keys
pub fn ensure_unique_keys(definitions: &[AttributeDefinition]) -> AutomationResult<()> {
    let mut seen = HashSet::new();
    for definition in definitions {
        if !seen.insert(definition.key()) {
            return Err(AutomationError::new(
                AutomationErrorKind::DuplicateAttributeKey,
                format!("Attribute '{}' is declared more than once", definition.key()),
            ));
        }
    }
    Ok(())
}

/// Configured attribute values of one step, as persisted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepAttributes(HashMap<String, String>);

impl StepAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Resolve a value that must be present before execution
    pub fn require(&self, key: &str) -> AutomationResult<&str> {
        self.get(key)
            .ok_or_else(|| AutomationError::missing_attribute(key))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for StepAttributes {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_options() -> OptionMap {
        OptionMap::from([
            ("paid".to_string(), "Paid".to_string()),
            ("unpaid".to_string(), "Unpaid".to_string()),
        ])
    }

    #[test]
    fn test_select_requires_options() {
        let err = AttributeDefinition::select("field", "Field", "", OptionMap::new()).unwrap_err();
        assert_eq!(err.kind(), AutomationErrorKind::InvalidAttributeDefinition);

        let err = AttributeDefinition::new("value", "Value", "", AttributeKind::Text, Some(status_options()))
            .unwrap_err();
        assert_eq!(err.kind(), AutomationErrorKind::InvalidAttributeDefinition);
    }

    #[test]
    fn test_validate_select_value() {
        let def = AttributeDefinition::select("status", "Status", "", status_options()).unwrap();
        assert!(def.validate_value("paid").is_ok());

        let err = def.validate_value("refunded").unwrap_err();
        assert_eq!(err.kind(), AutomationErrorKind::InvalidAttributeValue);
    }

    #[test]
    fn test_text_accepts_anything() {
        let def = AttributeDefinition::text("value", "Value", "").unwrap();
        assert!(def.options().is_none());
        assert!(def.validate_value("").is_ok());
        assert!(def.validate_value("anything at all").is_ok());
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let defs = vec![
            AttributeDefinition::text("value", "Value", "").unwrap(),
            AttributeDefinition::text("value", "Other value", "").unwrap(),
        ];
        let err = ensure_unique_keys(&defs).unwrap_err();
        assert_eq!(err.kind(), AutomationErrorKind::DuplicateAttributeKey);
    }

    #[test]
    fn test_step_attributes_require() {
        let attrs = StepAttributes::new().with("field", "status");
        assert_eq!(attrs.require("field").unwrap(), "status");
        assert_eq!(
            attrs.require("operator").unwrap_err().kind(),
            AutomationErrorKind::MissingAttribute
        );
    }

    #[test]
    fn test_step_attributes_deserialize_flat_map() {
        let attrs: StepAttributes =
            serde_json::from_str(r#"{"field":"status","operator":"is","value":"paid"}"#).unwrap();
        assert_eq!(attrs.len(), 3);
        assert_eq!(attrs.get("value"), Some("paid"));
    }
}
