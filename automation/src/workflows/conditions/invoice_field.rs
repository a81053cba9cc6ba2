use std::sync::Arc;

use crm_shared::Invoice;

use super::{ConditionType, FieldCondition};
use crate::error::AutomationResult;
use crate::logging::AutomationLogger;
use crate::workflows::attributes::StepAttributes;
use crate::workflows::data_types::DataTypeKind;
use crate::workflows::operators::{self, Operator};

pub type InvoiceField = FieldCondition<Invoice>;

pub const INVOICE_OPERATORS: [Operator; 6] = Operator::ALL;

impl ConditionType for InvoiceField {
    fn title() -> &'static str {
        "Invoice Field"
    }

    fn slug() -> &'static str {
        "jpcrm/condition/invoice_field"
    }

    fn description() -> &'static str {
        "Checks if an invoice field matches an expected value"
    }

    fn data_type() -> DataTypeKind {
        DataTypeKind::Invoice
    }

    fn category() -> &'static str {
        "Invoice"
    }

    fn from_step(attributes: StepAttributes, logger: Arc<dyn AutomationLogger>) -> AutomationResult<Self> {
        Self::with_operators(
            attributes,
            logger,
            Self::metadata(),
            operators::declare(&INVOICE_OPERATORS),
        )
    }
}
