//! Field rules shared by the request bodies.

use std::borrow::Cow;

use model::Category;
use rust_decimal::Decimal;
use validator::ValidationError;

/// Amounts are cents-precise.
pub const MAX_AMOUNT_SCALE: u32 = 2;

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn check_scale(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.normalize().scale() > MAX_AMOUNT_SCALE {
        return Err(violation(
            "scale",
            "Amount must have at most two decimal places",
        ));
    }
    Ok(())
}

/// Transaction and budget amounts: strictly positive, at most two decimals.
pub fn validate_positive_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount <= &Decimal::ZERO {
        return Err(violation("positive", "Amount must be positive"));
    }
    check_scale(amount)
}

/// Income amounts: zero is allowed.
pub fn validate_non_negative_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount < &Decimal::ZERO {
        return Err(violation(
            "non_negative",
            "Amount must be zero or positive",
        ));
    }
    check_scale(amount)
}

/// Budgets only cover spending categories.
pub fn validate_budget_category(category: &Category) -> Result<(), ValidationError> {
    if !category.is_expense() {
        return Err(violation(
            "budget_category",
            "Budgets cannot be set for the Income category",
        ));
    }
    Ok(())
}
