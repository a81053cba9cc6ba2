//! CRM automation conditions
//!
//! A condition step inspects the entity carried by a trigger (a transaction,
//! contact or invoice) and decides, from a configured field/operator/value
//! triple, whether a workflow branches.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use crm_automation::logging::TracingLogger;
//! use crm_automation::workflows::{ConditionRegistry, DataType, StepAttributes, WorkflowStep};
//! use crm_shared::Transaction;
//!
//! let registry = ConditionRegistry::with_defaults().unwrap();
//! let step = WorkflowStep::new(
//!     "jpcrm/condition/transaction_field",
//!     StepAttributes::new()
//!         .with("field", "status")
//!         .with("operator", "is")
//!         .with("value", "paid"),
//! );
//! let data = DataType::from(Transaction { status: "paid".into(), ..Default::default() });
//! let met = registry.evaluate(&step, &data, Arc::new(TracingLogger)).unwrap();
//! assert!(met);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod workflows;

pub use error::{AutomationError, AutomationErrorKind, AutomationResult};
