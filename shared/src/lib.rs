use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub contact_id: Option<Uuid>,
    pub invoice_id: Option<Uuid>,
    pub status: String, // succeeded, failed, refunded, ...
    #[serde(rename = "type")]
    pub transaction_type: String, // sale, refund, credit
    #[serde(rename = "ref")]
    pub reference: String,
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub total: Decimal,
    pub currency: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub client_id: Option<Uuid>,
    pub status: String, // lead, customer, blacklisted
    pub name: String,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub department: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub archived_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub contact_id: Option<Uuid>,
    pub number: String,
    pub date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
    pub balance: Decimal,
    pub status: String, // draft, unpaid, paid, overdue, deleted
    pub payment_terms: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
