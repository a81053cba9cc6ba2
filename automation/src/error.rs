//! Error taxonomy for condition authoring and evaluation
//!
//! Every failure carries a machine-readable kind so the orchestrator can tell
//! "condition evaluated to false" apart from "condition failed to evaluate".

use serde::Serialize;

/// Machine-readable error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AutomationErrorKind {
    // Operator errors
    ConditionInvalidOperator,
    ConditionOperatorNotImplemented,
    ConditionNotEvaluated,

    // Caller contract
    DataTypeMismatch,

    // Attribute errors
    MissingAttribute,
    InvalidAttributeValue,
    InvalidAttributeDefinition,
    DuplicateAttributeKey,
    AttributeDefinitionsAlreadySet,

    // Registry errors
    DuplicateSlug,
    UnknownSlug,
    InvalidStepDefinition,
}

impl AutomationErrorKind {
    /// Get the error code string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConditionInvalidOperator => "CONDITION_INVALID_OPERATOR",
            Self::ConditionOperatorNotImplemented => "CONDITION_OPERATOR_NOT_IMPLEMENTED",
            Self::ConditionNotEvaluated => "CONDITION_NOT_EVALUATED",
            Self::DataTypeMismatch => "DATA_TYPE_MISMATCH",
            Self::MissingAttribute => "MISSING_ATTRIBUTE",
            Self::InvalidAttributeValue => "INVALID_ATTRIBUTE_VALUE",
            Self::InvalidAttributeDefinition => "INVALID_ATTRIBUTE_DEFINITION",
            Self::DuplicateAttributeKey => "DUPLICATE_ATTRIBUTE_KEY",
            Self::AttributeDefinitionsAlreadySet => "ATTRIBUTE_DEFINITIONS_ALREADY_SET",
            Self::DuplicateSlug => "DUPLICATE_SLUG",
            Self::UnknownSlug => "UNKNOWN_SLUG",
            Self::InvalidStepDefinition => "INVALID_STEP_DEFINITION",
        }
    }

    /// Errors caused by how a step was authored rather than by the caller
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::ConditionInvalidOperator
                | Self::ConditionOperatorNotImplemented
                | Self::MissingAttribute
                | Self::InvalidAttributeValue
        )
    }
}

impl std::fmt::Display for AutomationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when a condition cannot be built or executed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} ({kind})")]
pub struct AutomationError {
    kind: AutomationErrorKind,
    message: String,
}

pub type AutomationResult<T> = Result<T, AutomationError>;

impl AutomationError {
    pub fn new(kind: AutomationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> AutomationErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    // Convenience constructors for common error kinds

    pub fn invalid_operator(operator: &str) -> Self {
        Self::new(
            AutomationErrorKind::ConditionInvalidOperator,
            format!("Invalid condition operator: {}", operator),
        )
    }

    pub fn operator_not_implemented(operator: &str) -> Self {
        Self::new(
            AutomationErrorKind::ConditionOperatorNotImplemented,
            format!("Valid but unimplemented operator: {}", operator),
        )
    }

    pub fn missing_attribute(key: &str) -> Self {
        Self::new(
            AutomationErrorKind::MissingAttribute,
            format!("Missing required attribute: {}", key),
        )
    }

    pub fn invalid_attribute_value(key: &str, value: &str) -> Self {
        Self::new(
            AutomationErrorKind::InvalidAttributeValue,
            format!("Invalid value '{}' for attribute '{}'", value, key),
        )
    }

    pub fn data_type_mismatch(expected: impl std::fmt::Display, found: impl std::fmt::Display) -> Self {
        Self::new(
            AutomationErrorKind::DataTypeMismatch,
            format!("Expected {} data, got {}", expected, found),
        )
    }
}

impl From<serde_json::Error> for AutomationError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(AutomationErrorKind::InvalidStepDefinition, err.to_string())
    }
}
