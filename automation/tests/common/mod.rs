// Common test utilities that are shared across integration tests
use std::sync::{Arc, Once};

use crm_automation::logging::MemoryLogger;
use crm_automation::workflows::{DataType, StepAttributes};
use crm_shared::Transaction;

static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("debug")
            .try_init()
            .ok();
    });
}

pub fn triple(field: &str, operator: &str, value: &str) -> StepAttributes {
    StepAttributes::new()
        .with("field", field)
        .with("operator", operator)
        .with("value", value)
}

pub fn transaction(status: &str, desc: &str) -> DataType {
    DataType::from(Transaction {
        status: status.to_string(),
        transaction_type: "sale".to_string(),
        reference: "TX-1001".to_string(),
        title: "Annual plan".to_string(),
        description: desc.to_string(),
        ..Default::default()
    })
}

pub fn memory_logger() -> Arc<MemoryLogger> {
    Arc::new(MemoryLogger::new())
}
