// Workflow Operators - Comparison operators available to field conditions

use serde::{Deserialize, Serialize};

use super::attributes::OptionMap;

/// Declared operator key -> display label
pub type OperatorMap = OptionMap;

/// Comparison applied between an entity field and the configured value.
///
/// All comparisons are case-sensitive and operate on string representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    // Equality
    Is,
    IsNot,

    // String operations
    Contains,
    DoesNotContain,
    StartsWith,
    EndsWith,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Self::Is,
        Self::IsNot,
        Self::Contains,
        Self::DoesNotContain,
        Self::StartsWith,
        Self::EndsWith,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Is => "is",
            Self::IsNot => "is_not",
            Self::Contains => "contains",
            Self::DoesNotContain => "does_not_contain",
            Self::StartsWith => "starts_with",
            Self::EndsWith => "ends_with",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Is => "Is",
            Self::IsNot => "Is not",
            Self::Contains => "Contains",
            Self::DoesNotContain => "Does not contain",
            Self::StartsWith => "Starts with",
            Self::EndsWith => "Ends with",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == key)
    }

    /// Apply the operator to the entity's field value and the configured value
    pub fn compare(&self, actual: &str, expected: &str) -> bool {
        match self {
            Self::Is => actual == expected,
            Self::IsNot => actual != expected,
            Self::Contains => actual.contains(expected),
            Self::DoesNotContain => !actual.contains(expected),
            Self::StartsWith => actual.starts_with(expected),
            Self::EndsWith => actual.ends_with(expected),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the declaration map for a set of operators, in the given order
pub fn declare(operators: &[Operator]) -> OperatorMap {
    operators
        .iter()
        .map(|op| (op.as_str().to_string(), op.label().to_string()))
        .collect()
}
