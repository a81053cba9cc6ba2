// Condition Registry - Slug -> condition variant lookup, built once at start-up

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::attributes::StepAttributes;
use super::conditions::{
    Condition, ConditionMetadata, ConditionType, ContactField, InvoiceField, TransactionField,
};
use super::data_types::{DataType, DataTypeKind};
use crate::error::{AutomationError, AutomationErrorKind, AutomationResult};
use crate::logging::AutomationLogger;

/// A condition step as stored in a workflow definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStep {
    /// Slug of the implementing condition variant
    pub slug: String,
    #[serde(default)]
    pub attributes: StepAttributes,
}

impl WorkflowStep {
    pub fn new(slug: &str, attributes: StepAttributes) -> Self {
        Self {
            slug: slug.to_string(),
            attributes,
        }
    }

    pub fn from_json(json: &str) -> AutomationResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

type ConditionFactory =
    fn(StepAttributes, Arc<dyn AutomationLogger>) -> AutomationResult<Box<dyn Condition>>;

fn build_condition<C: ConditionType>(
    attributes: StepAttributes,
    logger: Arc<dyn AutomationLogger>,
) -> AutomationResult<Box<dyn Condition>> {
    Ok(Box::new(C::from_step(attributes, logger)?))
}

struct RegisteredCondition {
    metadata: ConditionMetadata,
    factory: ConditionFactory,
}

/// Immutable set of condition variants keyed by slug
pub struct ConditionRegistry {
    conditions: IndexMap<&'static str, RegisteredCondition>,
}

#[derive(Default)]
pub struct ConditionRegistryBuilder {
    conditions: IndexMap<&'static str, RegisteredCondition>,
}

impl ConditionRegistryBuilder {
    /// Add a variant; a slug already taken is rejected
    pub fn register<C: ConditionType>(mut self) -> AutomationResult<Self> {
        let metadata = C::metadata();

        if self.conditions.contains_key(metadata.slug) {
            return Err(AutomationError::new(
                AutomationErrorKind::DuplicateSlug,
                format!("Condition slug '{}' is already registered", metadata.slug),
            ));
        }

        debug!(slug = metadata.slug, data_type = %metadata.data_type, "registered condition");
        self.conditions.insert(
            metadata.slug,
            RegisteredCondition {
                metadata,
                factory: build_condition::<C>,
            },
        );
        Ok(self)
    }

    pub fn build(self) -> ConditionRegistry {
        info!("Loaded {} condition types", self.conditions.len());
        ConditionRegistry {
            conditions: self.conditions,
        }
    }
}

impl ConditionRegistry {
    pub fn builder() -> ConditionRegistryBuilder {
        ConditionRegistryBuilder::default()
    }

    /// Registry with every built-in condition
    pub fn with_defaults() -> AutomationResult<Self> {
        Ok(Self::builder()
            .register::<TransactionField>()?
            .register::<ContactField>()?
            .register::<InvoiceField>()?
            .build())
    }

    pub fn get(&self, slug: &str) -> Option<&ConditionMetadata> {
        self.conditions.get(slug).map(|c| &c.metadata)
    }

    pub fn slugs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.conditions.keys().copied()
    }

    /// Conditions that accept the given envelope
    pub fn by_data_type(&self, data_type: DataTypeKind) -> Vec<ConditionMetadata> {
        self.conditions
            .values()
            .map(|c| c.metadata)
            .filter(|m| m.data_type == data_type)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    fn lookup(&self, slug: &str) -> AutomationResult<&RegisteredCondition> {
        self.conditions.get(slug).ok_or_else(|| {
            AutomationError::new(
                AutomationErrorKind::UnknownSlug,
                format!("No condition registered for slug '{}'", slug),
            )
        })
    }

    /// Instantiate the condition a persisted step refers to
    pub fn create(
        &self,
        step: &WorkflowStep,
        logger: Arc<dyn AutomationLogger>,
    ) -> AutomationResult<Box<dyn Condition>> {
        let registered = self.lookup(&step.slug)?;
        (registered.factory)(step.attributes.clone(), logger)
    }

    /// Build and execute a step against `data`, returning the outcome.
    ///
    /// The envelope kind is checked against the variant before execution.
    pub fn evaluate(
        &self,
        step: &WorkflowStep,
        data: &DataType,
        logger: Arc<dyn AutomationLogger>,
    ) -> AutomationResult<bool> {
        let registered = self.lookup(&step.slug)?;
        if registered.metadata.data_type != data.kind() {
            return Err(AutomationError::data_type_mismatch(
                registered.metadata.data_type,
                data.kind(),
            ));
        }

        let mut condition = (registered.factory)(step.attributes.clone(), logger)?;

        if let Err(e) = condition.execute(data) {
            if e.kind().is_configuration_error() {
                warn!(slug = %step.slug, code = e.kind().as_str(), "condition misconfigured: {}", e.message());
            } else {
                error!(slug = %step.slug, code = e.kind().as_str(), "condition failed: {}", e.message());
            }
            return Err(e);
        }

        let met = condition.condition_met().ok_or_else(|| {
            AutomationError::new(
                AutomationErrorKind::ConditionNotEvaluated,
                format!("Condition '{}' returned without an outcome", step.slug),
            )
        })?;

        debug!(slug = %step.slug, met, "condition evaluated");
        Ok(met)
    }
}
