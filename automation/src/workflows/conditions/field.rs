// Field condition - compares one entity field against a configured value

use std::marker::PhantomData;
use std::sync::Arc;

use super::{BaseCondition, Condition, ConditionMetadata};
use crate::error::{AutomationError, AutomationResult};
use crate::logging::AutomationLogger;
use crate::workflows::attributes::{AttributeDefinition, StepAttributes};
use crate::workflows::data_types::DataType;
use crate::workflows::fields::CheckableEntity;
use crate::workflows::operators::{Operator, OperatorMap};

/// Attribute keys every field condition declares
pub const FIELD: &str = "field";
pub const OPERATOR: &str = "operator";
pub const VALUE: &str = "value";

/// Condition checking a field of entity `E` with one of the declared operators
#[derive(Debug)]
pub struct FieldCondition<E: CheckableEntity> {
    base: BaseCondition,
    metadata: ConditionMetadata,
    _entity: PhantomData<fn() -> E>,
}

impl<E: CheckableEntity> FieldCondition<E> {
    /// Build a field condition declaring `valid_operators`.
    ///
    /// Keys in `valid_operators` that do not name an [`Operator`] are accepted
    /// here and rejected at execution as unimplemented.
    pub fn with_operators(
        attributes: StepAttributes,
        logger: Arc<dyn AutomationLogger>,
        metadata: ConditionMetadata,
        valid_operators: OperatorMap,
    ) -> AutomationResult<Self> {
        let mut base = BaseCondition::new(attributes, logger).with_valid_operators(valid_operators.clone());

        base.set_attribute_definitions(vec![
            AttributeDefinition::select(
                FIELD,
                "Field",
                "Check this field against a specified value.",
                E::field_options(),
            )?,
            AttributeDefinition::select(
                OPERATOR,
                "Operator",
                "Determines how the field is compared to the specified value.",
                valid_operators,
            )?,
            AttributeDefinition::text(
                VALUE,
                "Value",
                &format!("Value to compare with the {} field.", E::DATA_TYPE),
            )?,
        ])?;

        Ok(Self {
            base,
            metadata,
            _entity: PhantomData,
        })
    }
}

impl<E: CheckableEntity> Condition for FieldCondition<E> {
    fn execute(&mut self, data: &DataType) -> AutomationResult<()> {
        self.base.reset_outcome();

        let entity = E::extract(data)
            .ok_or_else(|| AutomationError::data_type_mismatch(E::DATA_TYPE, data.kind()))?;

        let attributes = self.base.get_attributes();
        let field = attributes.require(FIELD)?;
        let operator = attributes.require(OPERATOR)?;
        let value = attributes.require(VALUE)?;

        self.base.check_for_valid_operator(operator)?;

        // Select values are validated at evaluation time, not at load time
        self.base.resolve(FIELD)?;
        let field_spec = E::field(field).ok_or_else(|| AutomationError::invalid_attribute_value(FIELD, field))?;
        let actual = field_spec.read(entity);

        self.base.log(&format!(
            "Condition: {} {} {} => {}",
            field, operator, value, actual
        ));

        let met = match Operator::from_key(operator) {
            Some(op) => op.compare(&actual, value),
            None => {
                tracing::warn!(
                    slug = self.metadata.slug,
                    operator,
                    "operator declared without an implementation"
                );
                return Err(AutomationError::operator_not_implemented(operator));
            }
        };

        self.base.log(&format!("Condition met?: {}", met));
        self.base.set_condition_met(met);

        Ok(())
    }

    fn base(&self) -> &BaseCondition {
        &self.base
    }

    fn describe(&self) -> ConditionMetadata {
        self.metadata
    }
}
