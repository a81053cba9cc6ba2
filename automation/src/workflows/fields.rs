// Workflow Fields - Closed field accessor tables per entity kind
//
// Conditions never look fields up by name on the entity itself. Each entity
// kind declares the fields a condition may check and how to read them as
// strings; anything outside the table is rejected.

use crm_shared::{Contact, Invoice, Transaction};

use super::attributes::OptionMap;
use super::data_types::{DataType, DataTypeKind};

/// One checkable field of an entity
pub struct FieldSpec<E> {
    pub key: &'static str,
    pub label: &'static str,
    read: fn(&E) -> String,
}

impl<E> FieldSpec<E> {
    pub const fn new(key: &'static str, label: &'static str, read: fn(&E) -> String) -> Self {
        Self { key, label, read }
    }

    pub fn read(&self, entity: &E) -> String {
        (self.read)(entity)
    }
}

/// Entity kinds a field condition can inspect
pub trait CheckableEntity: Sized + Send + Sync + 'static {
    const DATA_TYPE: DataTypeKind;

    fn fields() -> &'static [FieldSpec<Self>];

    /// Borrow the entity out of a matching envelope
    fn extract(data: &DataType) -> Option<&Self>;

    fn field(key: &str) -> Option<&'static FieldSpec<Self>> {
        Self::fields().iter().find(|f| f.key == key)
    }

    fn field_options() -> OptionMap {
        Self::fields()
            .iter()
            .map(|f| (f.key.to_string(), f.label.to_string()))
            .collect()
    }
}

static TRANSACTION_FIELDS: [FieldSpec<Transaction>; 5] = [
    FieldSpec::new("status", "Status", |t: &Transaction| t.status.clone()),
    FieldSpec::new("type", "Type", |t: &Transaction| t.transaction_type.clone()),
    FieldSpec::new("ref", "Reference", |t: &Transaction| t.reference.clone()),
    FieldSpec::new("title", "Title", |t: &Transaction| t.title.clone()),
    FieldSpec::new("desc", "Description", |t: &Transaction| t.description.clone()),
];

static CONTACT_FIELDS: [FieldSpec<Contact>; 5] = [
    FieldSpec::new("status", "Status", |c: &Contact| c.status.clone()),
    FieldSpec::new("name", "Name", |c: &Contact| c.name.clone()),
    FieldSpec::new("email", "Email", |c: &Contact| c.email.clone().unwrap_or_default()),
    FieldSpec::new("title", "Title", |c: &Contact| c.title.clone().unwrap_or_default()),
    FieldSpec::new("department", "Department", |c: &Contact| c.department.clone().unwrap_or_default()),
];

static INVOICE_FIELDS: [FieldSpec<Invoice>; 5] = [
    FieldSpec::new("status", "Status", |i: &Invoice| i.status.clone()),
    FieldSpec::new("number", "Number", |i: &Invoice| i.number.clone()),
    FieldSpec::new("payment_terms", "Payment terms", |i: &Invoice| i.payment_terms.clone()),
    FieldSpec::new("total", "Total", |i: &Invoice| i.total.to_string()),
    FieldSpec::new("notes", "Notes", |i: &Invoice| i.notes.clone().unwrap_or_default()),
];

impl CheckableEntity for Transaction {
    const DATA_TYPE: DataTypeKind = DataTypeKind::Transaction;

    fn fields() -> &'static [FieldSpec<Self>] {
        &TRANSACTION_FIELDS
    }

    fn extract(data: &DataType) -> Option<&Self> {
        match data {
            DataType::Transaction(t) => Some(t),
            _ => None,
        }
    }
}

impl CheckableEntity for Contact {
    const DATA_TYPE: DataTypeKind = DataTypeKind::Contact;

    fn fields() -> &'static [FieldSpec<Self>] {
        &CONTACT_FIELDS
    }

    fn extract(data: &DataType) -> Option<&Self> {
        match data {
            DataType::Contact(c) => Some(c),
            _ => None,
        }
    }
}

impl CheckableEntity for Invoice {
    const DATA_TYPE: DataTypeKind = DataTypeKind::Invoice;

    fn fields() -> &'static [FieldSpec<Self>] {
        &INVOICE_FIELDS
    }

    fn extract(data: &DataType) -> Option<&Self> {
        match data {
            DataType::Invoice(i) => Some(i),
            _ => None,
        }
    }
}
