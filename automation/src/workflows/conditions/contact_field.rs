use std::sync::Arc;

use crm_shared::Contact;

use super::{ConditionType, FieldCondition};
use crate::error::AutomationResult;
use crate::logging::AutomationLogger;
use crate::workflows::attributes::StepAttributes;
use crate::workflows::data_types::DataTypeKind;
use crate::workflows::operators::{self, Operator};

pub type ContactField = FieldCondition<Contact>;

pub const CONTACT_OPERATORS: [Operator; 6] = Operator::ALL;

impl ConditionType for ContactField {
    fn title() -> &'static str {
        "Contact Field"
    }

    fn slug() -> &'static str {
        "jpcrm/condition/contact_field"
    }

    fn description() -> &'static str {
        "Checks if a contact field matches an expected value"
    }

    fn data_type() -> DataTypeKind {
        DataTypeKind::Contact
    }

    fn category() -> &'static str {
        "Contact"
    }

    fn from_step(attributes: StepAttributes, logger: Arc<dyn AutomationLogger>) -> AutomationResult<Self> {
        Self::with_operators(
            attributes,
            logger,
            Self::metadata(),
            operators::declare(&CONTACT_OPERATORS),
        )
    }
}
