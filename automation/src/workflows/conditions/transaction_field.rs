use std::sync::Arc;

use crm_shared::Transaction;

use super::{ConditionType, FieldCondition};
use crate::error::AutomationResult;
use crate::logging::AutomationLogger;
use crate::workflows::attributes::StepAttributes;
use crate::workflows::data_types::DataTypeKind;
use crate::workflows::operators::{self, Operator};

/// Checks if a transaction field matches an expected value
pub type TransactionField = FieldCondition<Transaction>;

pub const TRANSACTION_OPERATORS: [Operator; 4] = [
    Operator::Is,
    Operator::IsNot,
    Operator::Contains,
    Operator::DoesNotContain,
];

impl ConditionType for TransactionField {
    fn title() -> &'static str {
        "Transaction Field"
    }

    fn slug() -> &'static str {
        "jpcrm/condition/transaction_field"
    }

    fn description() -> &'static str {
        "Checks if a transaction field matches an expected value"
    }

    fn data_type() -> DataTypeKind {
        DataTypeKind::Transaction
    }

    fn category() -> &'static str {
        "Transaction"
    }

    fn from_step(attributes: StepAttributes, logger: Arc<dyn AutomationLogger>) -> AutomationResult<Self> {
        Self::with_operators(
            attributes,
            logger,
            Self::metadata(),
            operators::declare(&TRANSACTION_OPERATORS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AutomationErrorKind;
    use crate::logging::MemoryLogger;
    use crate::workflows::attributes::AttributeKind;
    use crate::workflows::conditions::Condition;
    use crate::workflows::data_types::DataType;
    use mockall::{mock, predicate};

    mock! {
        Logger {}
        impl AutomationLogger for Logger {
            fn log(&self, message: &str);
        }
    }

    fn transaction() -> DataType {
        DataType::from(Transaction {
            status: "paid".to_string(),
            transaction_type: "sale".to_string(),
            reference: "TX-1001".to_string(),
            title: "Annual plan".to_string(),
            description: "partial refund issued".to_string(),
            ..Default::default()
        })
    }

    fn condition(field: &str, operator: &str, value: &str) -> TransactionField {
        let attributes = StepAttributes::new()
            .with("field", field)
            .with("operator", operator)
            .with("value", value);
        TransactionField::from_step(attributes, Arc::new(MemoryLogger::new())).unwrap()
    }

    fn evaluate(field: &str, operator: &str, value: &str) -> Option<bool> {
        let mut condition = condition(field, operator, value);
        condition.execute(&transaction()).unwrap();
        condition.condition_met()
    }

    #[test]
    fn test_declares_field_operator_value() {
        let condition = condition("status", "is", "paid");
        let defs = condition.attribute_definitions();

        let keys: Vec<_> = defs.iter().map(|d| d.key()).collect();
        assert_eq!(keys, vec!["field", "operator", "value"]);
        assert_eq!(defs[0].kind(), AttributeKind::Select);
        assert_eq!(defs[0].options().unwrap().len(), 5);
        assert_eq!(defs[1].options().unwrap(), condition.valid_operators());
        assert_eq!(defs[2].kind(), AttributeKind::Text);
    }

    #[test]
    fn test_status_is() {
        assert_eq!(evaluate("status", "is", "paid"), Some(true));
        assert_eq!(evaluate("status", "is", "unpaid"), Some(false));
    }

    #[test]
    fn test_status_is_not() {
        assert_eq!(evaluate("status", "is_not", "paid"), Some(false));
        assert_eq!(evaluate("status", "is_not", "unpaid"), Some(true));
    }

    #[test]
    fn test_desc_contains() {
        assert_eq!(evaluate("desc", "contains", "refund"), Some(true));
        assert_eq!(evaluate("desc", "does_not_contain", "refund"), Some(false));
        assert_eq!(evaluate("title", "contains", "plan"), Some(true));
    }

    #[test]
    fn test_starts_with_not_declared_for_transactions() {
        let mut condition = condition("ref", "starts_with", "TX-");
        let err = condition.execute(&transaction()).unwrap_err();
        assert_eq!(err.kind(), AutomationErrorKind::ConditionInvalidOperator);
        assert_eq!(condition.condition_met(), None);
    }

    #[test]
    fn test_unknown_field_rejected_at_evaluation() {
        let mut condition = condition("total", "is", "10");
        let err = condition.execute(&transaction()).unwrap_err();
        assert_eq!(err.kind(), AutomationErrorKind::InvalidAttributeValue);
        assert_eq!(condition.condition_met(), None);
    }

    #[test]
    fn test_missing_value_rejected() {
        let attributes = StepAttributes::new().with("field", "status").with("operator", "is");
        let mut condition =
            TransactionField::from_step(attributes, Arc::new(MemoryLogger::new())).unwrap();

        let err = condition.execute(&transaction()).unwrap_err();
        assert_eq!(err.kind(), AutomationErrorKind::MissingAttribute);
    }

    #[test]
    fn test_wrong_envelope_rejected() {
        let mut condition = condition("status", "is", "paid");
        let err = condition
            .execute(&DataType::from(crm_shared::Invoice::default()))
            .unwrap_err();
        assert_eq!(err.kind(), AutomationErrorKind::DataTypeMismatch);
        assert_eq!(condition.condition_met(), None);
    }

    #[test]
    fn test_logs_before_and_after() {
        let mut logger = MockLogger::new();
        logger
            .expect_log()
            .with(predicate::eq("Condition: status is paid => paid"))
            .times(1)
            .return_const(());
        logger
            .expect_log()
            .with(predicate::eq("Condition met?: true"))
            .times(1)
            .return_const(());

        let attributes = StepAttributes::new()
            .with("field", "status")
            .with("operator", "is")
            .with("value", "paid");
        let mut condition = TransactionField::from_step(attributes, Arc::new(logger)).unwrap();
        condition.execute(&transaction()).unwrap();
    }

    #[test]
    fn test_static_metadata() {
        let metadata = TransactionField::metadata();
        assert_eq!(metadata.slug, "jpcrm/condition/transaction_field");
        assert_eq!(metadata.data_type, DataTypeKind::Transaction);
        assert_eq!(condition("status", "is", "paid").describe(), metadata);
    }
}
