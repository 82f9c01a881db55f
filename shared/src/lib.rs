use serde::{Deserialize, Serialize};

pub mod summary;
pub mod validation;

/// Spending categories offered by the entry forms. Stored lowercase; the
/// backend does not restrict categories to this list, so anything else it
/// returns is rendered as-is.
pub const SUGGESTED_CATEGORIES: [&str; 7] = [
    "food",
    "rent",
    "transportation",
    "utilities",
    "entertainment",
    "shopping",
    "other",
];

/// Whether a transaction adds to or draws from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Parse a form select value ("income" / "expense").
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

/// A single income or expense record, as returned by `GET /api/transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Backend-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Non-negative amount in currency units.
    pub amount: f64,
    /// Spending category (lowercase as stored by the entry form).
    pub category: String,
    pub description: String,
    /// ISO calendar date (`yyyy-mm-dd`); the backend may append a time
    /// component, month membership is a prefix test either way.
    pub date: String,
}

/// A per-category spending limit for one month. Nothing enforces one budget
/// per (category, month) pair; duplicates all flow into the aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub category: String,
    /// The spending limit for this category and month.
    pub amount: f64,
    /// `yyyy-mm`.
    pub month: String,
}

/// User profile persisted alongside the session token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// An authenticated session: opaque bearer token plus the profile shown in
/// the dashboard header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Request body for `POST /api/auth/signup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Request body for `POST /api/transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String,
    pub description: String,
    pub amount: f64,
}

/// Request body for `POST /api/budgets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBudgetRequest {
    pub category: String,
    pub amount: f64,
    pub month: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_wire_format() {
        let json = r#"{
            "_id": "64f1c09a",
            "type": "expense",
            "amount": 12.5,
            "category": "food",
            "description": "groceries",
            "date": "2024-05-31"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.id, "64f1c09a");
        assert_eq!(tx.transaction_type, TransactionType::Expense);
        assert_eq!(tx.amount, 12.5);

        let round_trip = serde_json::to_value(&tx).unwrap();
        assert_eq!(round_trip["_id"], "64f1c09a");
        assert_eq!(round_trip["type"], "expense");
    }

    #[test]
    fn create_transaction_request_uses_wire_names() {
        let request = CreateTransactionRequest {
            transaction_type: TransactionType::Income,
            category: "other".to_string(),
            description: "paycheck".to_string(),
            amount: 1200.0,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "income");
        assert!(value.get("transaction_type").is_none());
    }

    #[test]
    fn user_email_is_optional_on_read() {
        let user: User = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(user.name, "Ada");
        assert!(user.email.is_empty());
    }

    #[test]
    fn transaction_type_parses_form_values() {
        assert_eq!(TransactionType::parse("income"), Some(TransactionType::Income));
        assert_eq!(TransactionType::parse("expense"), Some(TransactionType::Expense));
        assert_eq!(TransactionType::parse("transfer"), None);
    }
}
