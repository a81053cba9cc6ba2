// Workflow Conditions - Steps that inspect trigger data and decide whether a workflow branches
//
// A condition evaluates exactly one field/operator/value triple. Shared state and
// checks live in `BaseCondition`; each variant implements `Condition::execute`
// and the static `ConditionType` metadata used by the registry.

mod contact_field;
mod field;
mod invoice_field;
mod transaction_field;

use serde::Serialize;
use std::sync::Arc;

use super::attributes::{ensure_unique_keys, AttributeDefinition, StepAttributes};
use super::data_types::{DataType, DataTypeKind};
use super::operators::OperatorMap;
use crate::error::{AutomationError, AutomationErrorKind, AutomationResult};
use crate::logging::AutomationLogger;

pub use contact_field::{ContactField, CONTACT_OPERATORS};
pub use field::{FieldCondition, FIELD, OPERATOR, VALUE};
pub use invoice_field::{InvoiceField, INVOICE_OPERATORS};
pub use transaction_field::{TransactionField, TRANSACTION_OPERATORS};

/// Static description of a condition variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConditionMetadata {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub data_type: DataTypeKind,
}

/// Evaluatable condition instance, held by the orchestrator as a trait object
pub trait Condition: Send + Sync {
    /// Evaluate against one envelope. On success the outcome is set; a raised
    /// error leaves the instance unevaluated.
    fn execute(&mut self, data: &DataType) -> AutomationResult<()>;

    fn base(&self) -> &BaseCondition;

    fn describe(&self) -> ConditionMetadata;

    fn get_attributes(&self) -> &StepAttributes {
        self.base().get_attributes()
    }

    fn attribute_definitions(&self) -> &[AttributeDefinition] {
        self.base().attribute_definitions()
    }

    fn valid_operators(&self) -> &OperatorMap {
        self.base().valid_operators()
    }

    /// `None` until the condition has been evaluated
    fn condition_met(&self) -> Option<bool> {
        self.base().condition_met()
    }
}

/// Per-variant metadata available without an instance
pub trait ConditionType: Condition + Sized + 'static {
    fn title() -> &'static str;

    /// Globally unique `<namespace>/condition/<name>` identifier
    fn slug() -> &'static str;

    fn description() -> &'static str;

    fn data_type() -> DataTypeKind;

    fn category() -> &'static str;

    fn from_step(attributes: StepAttributes, logger: Arc<dyn AutomationLogger>) -> AutomationResult<Self>;

    fn metadata() -> ConditionMetadata {
        ConditionMetadata {
            slug: Self::slug(),
            title: Self::title(),
            description: Self::description(),
            category: Self::category(),
            data_type: Self::data_type(),
        }
    }
}

/// State and checks shared by every condition variant
pub struct BaseCondition {
    attributes: StepAttributes,
    attribute_definitions: Option<Vec<AttributeDefinition>>,
    valid_operators: OperatorMap,
    condition_met: Option<bool>,
    logger: Arc<dyn AutomationLogger>,
}

impl BaseCondition {
    pub fn new(attributes: StepAttributes, logger: Arc<dyn AutomationLogger>) -> Self {
        Self {
            attributes,
            attribute_definitions: None,
            valid_operators: OperatorMap::new(),
            condition_met: None,
            logger,
        }
    }

    pub fn with_valid_operators(mut self, valid_operators: OperatorMap) -> Self {
        self.valid_operators = valid_operators;
        self
    }

    /// Register the step's attribute definitions. Allowed once per instance.
    pub fn set_attribute_definitions(&mut self, definitions: Vec<AttributeDefinition>) -> AutomationResult<()> {
        if self.attribute_definitions.is_some() {
            return Err(AutomationError::new(
                AutomationErrorKind::AttributeDefinitionsAlreadySet,
                "Attribute definitions can only be set once",
            ));
        }

        ensure_unique_keys(&definitions)?;
        self.attribute_definitions = Some(definitions);
        Ok(())
    }

    /// Declaration-level check: the operator must be one this variant lists
    pub fn check_for_valid_operator(&self, operator: &str) -> AutomationResult<()> {
        if self.valid_operators.contains_key(operator) {
            Ok(())
        } else {
            Err(AutomationError::invalid_operator(operator))
        }
    }

    pub fn get_attributes(&self) -> &StepAttributes {
        &self.attributes
    }

    pub fn attribute_definitions(&self) -> &[AttributeDefinition] {
        self.attribute_definitions.as_deref().unwrap_or(&[])
    }

    pub fn attribute_definition(&self, key: &str) -> Option<&AttributeDefinition> {
        self.attribute_definitions().iter().find(|d| d.key() == key)
    }

    /// Read a configured value, checking it against the declared options
    pub fn resolve(&self, key: &str) -> AutomationResult<&str> {
        let value = self.attributes.require(key)?;
        if let Some(definition) = self.attribute_definition(key) {
            definition.validate_value(value)?;
        }
        Ok(value)
    }

    pub fn valid_operators(&self) -> &OperatorMap {
        &self.valid_operators
    }

    pub fn condition_met(&self) -> Option<bool> {
        self.condition_met
    }

    pub fn set_condition_met(&mut self, met: bool) {
        self.condition_met = Some(met);
    }

    /// Back to unevaluated; called at the start of every execution
    pub fn reset_outcome(&mut self) {
        self.condition_met = None;
    }

    pub fn log(&self, message: &str) {
        self.logger.log(message);
    }
}

impl std::fmt::Debug for BaseCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseCondition")
            .field("attributes", &self.attributes)
            .field("attribute_definitions", &self.attribute_definitions)
            .field("valid_operators", &self.valid_operators)
            .field("condition_met", &self.condition_met)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemoryLogger;
    use crate::workflows::operators::{self, Operator};

    fn base() -> BaseCondition {
        BaseCondition::new(StepAttributes::new(), Arc::new(MemoryLogger::new()))
            .with_valid_operators(operators::declare(&[Operator::Is, Operator::IsNot]))
    }

    #[test]
    fn test_check_for_valid_operator() {
        let base = base();
        assert!(base.check_for_valid_operator("is").is_ok());
        assert!(base.check_for_valid_operator("is_not").is_ok());

        let err = base.check_for_valid_operator("contains").unwrap_err();
        assert_eq!(err.kind(), AutomationErrorKind::ConditionInvalidOperator);
    }

    #[test]
    fn test_attribute_definitions_set_once() {
        let mut base = base();
        assert!(base.attribute_definitions().is_empty());

        base.set_attribute_definitions(vec![AttributeDefinition::text("value", "Value", "").unwrap()])
            .unwrap();
        assert_eq!(base.attribute_definitions().len(), 1);

        let err = base.set_attribute_definitions(Vec::new()).unwrap_err();
        assert_eq!(err.kind(), AutomationErrorKind::AttributeDefinitionsAlreadySet);
        assert_eq!(base.attribute_definitions().len(), 1);
    }

    #[test]
    fn test_outcome_starts_unevaluated() {
        let mut base = base();
        assert_eq!(base.condition_met(), None);
        base.set_condition_met(false);
        assert_eq!(base.condition_met(), Some(false));

        base.reset_outcome();
        assert_eq!(base.condition_met(), None);
    }
}
