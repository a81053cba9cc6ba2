// Workflow Data Types - Typed envelopes carrying one entity from a trigger into a step

use crm_shared::{Contact, Invoice, Transaction};
use serde::{Deserialize, Serialize};

/// Classifier naming which envelope a condition accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataTypeKind {
    Transaction,
    Contact,
    Invoice,
}

impl DataTypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transaction => "transaction",
            Self::Contact => "contact",
            Self::Invoice => "invoice",
        }
    }
}

impl std::fmt::Display for DataTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity snapshot handed to a condition for one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum DataType {
    Transaction(Transaction),
    Contact(Contact),
    Invoice(Invoice),
}

/// Borrowed view of the wrapped entity
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Transaction(&'a Transaction),
    Contact(&'a Contact),
    Invoice(&'a Invoice),
}

impl DataType {
    pub fn kind(&self) -> DataTypeKind {
        match self {
            Self::Transaction(_) => DataTypeKind::Transaction,
            Self::Contact(_) => DataTypeKind::Contact,
            Self::Invoice(_) => DataTypeKind::Invoice,
        }
    }

    pub fn get_data(&self) -> EntityRef<'_> {
        match self {
            Self::Transaction(t) => EntityRef::Transaction(t),
            Self::Contact(c) => EntityRef::Contact(c),
            Self::Invoice(i) => EntityRef::Invoice(i),
        }
    }
}

impl From<Transaction> for DataType {
    fn from(transaction: Transaction) -> Self {
        Self::Transaction(transaction)
    }
}

impl From<Contact> for DataType {
    fn from(contact: Contact) -> Self {
        Self::Contact(contact)
    }
}

impl From<Invoice> for DataType {
    fn from(invoice: Invoice) -> Self {
        Self::Invoice(invoice)
    }
}
