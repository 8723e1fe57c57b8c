//! Transport-layer types of the HTTP API.
//!
//! Request bodies carry their validation rules; response bodies are plain
//! snapshots of the stored models so the wire shape does not follow schema
//! changes by accident.

pub mod money;
mod statistics;
pub mod validation;

pub use statistics::{
    BudgetComparison, CategoryTotal, IncomeSourceTotal, MonthlySummary, MonthlyTotal,
};

use chrono::NaiveDate;
use model::Category;
use model::entities::{budget, income, transaction};
use model::repository::{NewIncome, NewTransaction};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use validation::{validate_budget_category, validate_non_negative_amount, validate_positive_amount};

/// Generic API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
            success: true,
        }
    }
}

/// One rejected request field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FieldViolation {
    /// Name of the offending field
    pub field: String,
    /// Human readable reason
    pub message: String,
}

/// Either a single message or the list of rejected fields.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Violations(Vec<FieldViolation>),
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    /// Error message or field violations
    pub error: ErrorDetail,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

// ===================== Transactions =====================

/// Request body for creating or replacing a transaction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct TransactionRequest {
    #[validate(custom(function = "validate_positive_amount"))]
    #[schema(value_type = String, example = "42.50")]
    pub amount: Decimal,
    pub date: NaiveDate,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Defaults to `Other`
    #[serde(default)]
    pub category: Category,
}

impl From<TransactionRequest> for NewTransaction {
    fn from(request: TransactionRequest) -> Self {
        Self {
            amount: request.amount,
            date: request.date,
            description: request.description,
            category: request.category,
        }
    }
}

/// Transaction response model.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TransactionDto {
    pub id: i32,
    #[schema(value_type = String)]
    #[serde(serialize_with = "crate::money::serialize")]
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
    pub category: Category,
}

impl From<transaction::Model> for TransactionDto {
    fn from(model: transaction::Model) -> Self {
        Self {
            id: model.id,
            amount: model.amount,
            date: model.date,
            description: model.description,
            category: model.category,
        }
    }
}

// ===================== Budgets =====================

/// Request body for setting the budget of a category in a month.
///
/// Posting a (category, month, year) that already has a budget replaces its amount.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct CreateBudgetRequest {
    #[validate(custom(function = "validate_budget_category"))]
    pub category: Category,
    #[validate(custom(function = "validate_positive_amount"))]
    #[schema(value_type = String, example = "400.00")]
    pub amount: Decimal,
    /// Zero-based month (0 = January)
    #[validate(range(max = 11, message = "Month must be between 0 and 11"))]
    pub month: u32,
    #[validate(range(min = 2000, max = 9999, message = "Year must be between 2000 and 9999"))]
    pub year: i32,
}

/// Request body for changing the amount of an existing budget.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct UpdateBudgetRequest {
    #[validate(custom(function = "validate_positive_amount"))]
    #[schema(value_type = String, example = "450.00")]
    pub amount: Decimal,
}

/// Budget response model.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BudgetDto {
    pub id: i32,
    pub category: Category,
    #[schema(value_type = String)]
    #[serde(serialize_with = "crate::money::serialize")]
    pub amount: Decimal,
    pub month: u32,
    pub year: i32,
}

impl From<budget::Model> for BudgetDto {
    fn from(model: budget::Model) -> Self {
        Self {
            id: model.id,
            category: model.category,
            amount: model.amount,
            month: model.month,
            year: model.year,
        }
    }
}

// ===================== Incomes =====================

/// Request body for creating or replacing an income record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct IncomeRequest {
    #[validate(custom(function = "validate_non_negative_amount"))]
    #[schema(value_type = String, example = "2500.00")]
    pub amount: Decimal,
    #[validate(length(min = 1, message = "Source is required"))]
    pub source: String,
    /// Zero-based month (0 = January)
    #[validate(range(max = 11, message = "Month must be between 0 and 11"))]
    pub month: u32,
    #[validate(range(min = 2000, max = 9999, message = "Year must be between 2000 and 9999"))]
    pub year: i32,
    pub date: NaiveDate,
    #[serde(default)]
    pub recurring: bool,
    pub notes: Option<String>,
}

impl From<IncomeRequest> for NewIncome {
    fn from(request: IncomeRequest) -> Self {
        Self {
            amount: request.amount,
            source: request.source,
            month: request.month,
            year: request.year,
            date: request.date,
            recurring: request.recurring,
            notes: request.notes,
        }
    }
}

/// Income response model.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct IncomeDto {
    pub id: i32,
    #[schema(value_type = String)]
    #[serde(serialize_with = "crate::money::serialize")]
    pub amount: Decimal,
    pub source: String,
    pub month: u32,
    pub year: i32,
    pub date: NaiveDate,
    pub recurring: bool,
    pub notes: Option<String>,
}

impl From<income::Model> for IncomeDto {
    fn from(model: income::Model) -> Self {
        Self {
            id: model.id,
            amount: model.amount,
            source: model.source,
            month: model.month,
            year: model.year,
            date: model.date,
            recurring: model.recurring,
            notes: model.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transaction_request_defaults_category() {
        let request: TransactionRequest = serde_json::from_value(json!({
            "amount": 12.5,
            "date": "2024-01-05",
            "description": "Lunch",
        }))
        .unwrap();

        assert_eq!(request.category, Category::Other);
        assert_eq!(request.amount, Decimal::new(125, 1));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_transaction_request_accepts_string_amount() {
        let request: TransactionRequest = serde_json::from_value(json!({
            "amount": "19.99",
            "date": "2024-01-05",
            "description": "Book",
            "category": "Education",
        }))
        .unwrap();
        assert_eq!(request.amount, Decimal::new(1999, 2));
    }

    #[test]
    fn test_unknown_category_fails_to_parse() {
        let result = serde_json::from_value::<TransactionRequest>(json!({
            "amount": 10,
            "date": "2024-01-05",
            "description": "Lunch",
            "category": "Groceries",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_transaction_request_rejects_empty_description_and_zero_amount() {
        let request = TransactionRequest {
            amount: Decimal::ZERO,
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            description: String::new(),
            category: Category::Food,
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("amount"));
        assert!(fields.contains_key("description"));
    }

    #[test]
    fn test_budget_request_rules() {
        let valid = CreateBudgetRequest {
            category: Category::Food,
            amount: Decimal::from(100),
            month: 11,
            year: 2000,
        };
        assert!(valid.validate().is_ok());

        let invalid = CreateBudgetRequest {
            category: Category::Income,
            amount: Decimal::new(1001, 3),
            month: 12,
            year: 1999,
        };
        let errors = invalid.validate().unwrap_err();
        let fields = errors.field_errors();
        for field in ["category", "amount", "month", "year"] {
            assert!(fields.contains_key(field), "missing violation for {}", field);
        }
    }

    #[test]
    fn test_year_is_bounded_on_both_sides() {
        let budget = |year| CreateBudgetRequest {
            category: Category::Food,
            amount: Decimal::from(100),
            month: 0,
            year,
        };
        assert!(budget(9999).validate().is_ok());
        assert!(budget(10000).validate().is_err());
        assert!(budget(300000).validate().is_err());

        let income: IncomeRequest = serde_json::from_value(json!({
            "amount": 10,
            "source": "Salary",
            "month": 0,
            "year": 300000,
            "date": "2024-01-01",
        }))
        .unwrap();
        let errors = income.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("year"));
    }

    #[test]
    fn test_income_request_allows_zero_amount() {
        let request: IncomeRequest = serde_json::from_value(json!({
            "amount": 0,
            "source": "Gift",
            "month": 0,
            "year": 2024,
            "date": "2024-01-01",
        }))
        .unwrap();

        assert!(!request.recurring);
        assert_eq!(request.notes, None);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_error_detail_shapes() {
        let message = ErrorResponse {
            error: ErrorDetail::Message("Transaction not found".to_string()),
            code: "NOT_FOUND".to_string(),
            success: false,
        };
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({"error": "Transaction not found", "code": "NOT_FOUND", "success": false})
        );

        let violations = ErrorDetail::Violations(vec![FieldViolation {
            field: "amount".to_string(),
            message: "Amount must be positive".to_string(),
        }]);
        assert_eq!(
            serde_json::to_value(&violations).unwrap(),
            json!([{"field": "amount", "message": "Amount must be positive"}])
        );
    }

    #[test]
    fn test_amounts_serialize_as_strings() {
        let dto = BudgetDto {
            id: 1,
            category: Category::Food,
            amount: Decimal::new(15000, 2),
            month: 0,
            year: 2024,
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["amount"], json!("150.00"));
        assert_eq!(value["category"], json!("Food"));
    }

    #[test]
    fn test_response_amounts_keep_two_decimal_places() {
        let dto = TransactionDto {
            id: 1,
            amount: Decimal::new(1, 1),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            description: "Gum".to_string(),
            category: Category::Food,
        };
        assert_eq!(serde_json::to_value(&dto).unwrap()["amount"], json!("0.10"));

        let comparison = BudgetComparison {
            category: Category::Food,
            budgeted: Decimal::ZERO,
            actual: Decimal::from(80),
            difference: Decimal::from(-80),
        };
        let value = serde_json::to_value(&comparison).unwrap();
        assert_eq!(value["budgeted"], json!("0.00"));
        assert_eq!(value["difference"], json!("-80.00"));

        let parsed: TransactionDto =
            serde_json::from_value(serde_json::to_value(&dto).unwrap()).unwrap();
        assert_eq!(parsed.amount, Decimal::new(1, 1));
    }
}
