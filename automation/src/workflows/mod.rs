// Workflow Automation Conditions
//
// Condition steps for CRM automations: typed attribute definitions, data-type
// envelopes, closed field and operator tables, and the slug registry the
// orchestrator uses to bind persisted steps to their implementation.

pub mod attributes;
pub mod conditions;
pub mod data_types;
pub mod fields;
pub mod operators;
pub mod registry;

pub use attributes::{AttributeDefinition, AttributeKind, OptionMap, StepAttributes};
pub use conditions::{
    BaseCondition, Condition, ConditionMetadata, ConditionType, ContactField, FieldCondition,
    InvoiceField, TransactionField,
};
pub use data_types::{DataType, DataTypeKind, EntityRef};
pub use fields::{CheckableEntity, FieldSpec};
pub use operators::{Operator, OperatorMap};
pub use registry::{ConditionRegistry, ConditionRegistryBuilder, WorkflowStep};
