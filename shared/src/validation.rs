//! Declarative validation for the entry forms. Checks run before any network
//! request; a failed field is flagged inline and nothing is submitted.

use serde::{Deserialize, Serialize};

use crate::summary::round_cents;
use crate::TransactionType;

/// Minimum description length for a transaction.
pub const MIN_DESCRIPTION_LEN: usize = 3;

enum AmountCheck {
    Valid,
    NotPositive,
    Invalid,
}

fn check_amount(input: &str) -> AmountCheck {
    match input.trim().parse::<f64>() {
        Ok(value) if !value.is_finite() => AmountCheck::Invalid,
        Ok(value) if value > 0.0 => AmountCheck::Valid,
        Ok(_) => AmountCheck::NotPositive,
        Err(_) => AmountCheck::Invalid,
    }
}

/// Mirror of the entry form's submission cleanup: drop anything that isn't a
/// digit or decimal point, then round to cents.
pub fn clean_amount(input: &str) -> Option<f64> {
    let raw: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    raw.parse::<f64>().ok().map(round_cents)
}

/// `yyyy-mm` with a month in 01..=12.
pub fn is_valid_month(month: &str) -> bool {
    let bytes = month.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return false;
    }
    if !month[..4].chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    if !month[5..].chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    matches!(month[5..].parse::<u32>(), Ok(m) if (1..=12).contains(&m))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransactionFormError {
    MissingType,
    InvalidAmount(String),
    AmountNotPositive,
    MissingCategory,
    DescriptionTooShort(usize),
}

impl TransactionFormError {
    /// User-facing message shown next to the flagged field.
    pub fn message(&self) -> String {
        match self {
            Self::MissingType => "Please select a transaction type".to_string(),
            Self::InvalidAmount(_) | Self::AmountNotPositive => {
                "Amount must be a positive number".to_string()
            }
            Self::MissingCategory => "Please select a category".to_string(),
            Self::DescriptionTooShort(_) => format!(
                "Description must be at least {} characters",
                MIN_DESCRIPTION_LEN
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionFormValidation {
    pub is_valid: bool,
    pub errors: Vec<TransactionFormError>,
    /// Amount stripped of currency punctuation and rounded to cents; only
    /// set when the form is valid.
    pub cleaned_amount: Option<f64>,
}

pub fn validate_transaction_form(
    type_input: &str,
    amount_input: &str,
    category: &str,
    description: &str,
) -> TransactionFormValidation {
    let mut errors = Vec::new();

    if TransactionType::parse(type_input).is_none() {
        errors.push(TransactionFormError::MissingType);
    }
    match check_amount(amount_input) {
        AmountCheck::Invalid => {
            errors.push(TransactionFormError::InvalidAmount(amount_input.to_string()))
        }
        AmountCheck::NotPositive => errors.push(TransactionFormError::AmountNotPositive),
        AmountCheck::Valid => {}
    }
    if category.trim().is_empty() {
        errors.push(TransactionFormError::MissingCategory);
    }
    let description_len = description.trim().chars().count();
    if description_len < MIN_DESCRIPTION_LEN {
        errors.push(TransactionFormError::DescriptionTooShort(description_len));
    }

    let is_valid = errors.is_empty();
    TransactionFormValidation {
        is_valid,
        cleaned_amount: if is_valid {
            clean_amount(amount_input)
        } else {
            None
        },
        errors,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BudgetFormError {
    MissingCategory,
    InvalidAmount(String),
    AmountNotPositive,
    InvalidMonth(String),
}

impl BudgetFormError {
    /// User-facing message shown next to the flagged field.
    pub fn message(&self) -> String {
        match self {
            Self::MissingCategory => "Please select a category".to_string(),
            Self::InvalidAmount(_) | Self::AmountNotPositive => {
                "Amount must be a positive number".to_string()
            }
            Self::InvalidMonth(_) => "Please select a month".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetFormValidation {
    pub is_valid: bool,
    pub errors: Vec<BudgetFormError>,
    pub cleaned_amount: Option<f64>,
}

pub fn validate_budget_form(
    category: &str,
    amount_input: &str,
    month: &str,
) -> BudgetFormValidation {
    let mut errors = Vec::new();

    if category.trim().is_empty() {
        errors.push(BudgetFormError::MissingCategory);
    }
    match check_amount(amount_input) {
        AmountCheck::Invalid => {
            errors.push(BudgetFormError::InvalidAmount(amount_input.to_string()))
        }
        AmountCheck::NotPositive => errors.push(BudgetFormError::AmountNotPositive),
        AmountCheck::Valid => {}
    }
    if !is_valid_month(month) {
        errors.push(BudgetFormError::InvalidMonth(month.to_string()));
    }

    let is_valid = errors.is_empty();
    BudgetFormValidation {
        is_valid,
        cleaned_amount: if is_valid {
            clean_amount(amount_input)
        } else {
            None
        },
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_amount_is_rejected() {
        let result = validate_transaction_form("expense", "-5", "food", "groceries");
        assert!(!result.is_valid);
        assert!(result.errors.contains(&TransactionFormError::AmountNotPositive));
        assert_eq!(result.cleaned_amount, None);
    }

    #[test]
    fn two_character_description_is_rejected() {
        let result = validate_transaction_form("expense", "12.5", "food", "ab");
        assert!(!result.is_valid);
        assert!(result
            .errors
            .contains(&TransactionFormError::DescriptionTooShort(2)));
    }

    #[test]
    fn three_character_description_passes() {
        let result = validate_transaction_form("expense", "12.5", "food", "abc");
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert_eq!(result.cleaned_amount, Some(12.5));
    }

    #[test]
    fn unknown_type_is_rejected() {
        let result = validate_transaction_form("transfer", "12.5", "food", "abc");
        assert!(!result.is_valid);
        assert!(result.errors.contains(&TransactionFormError::MissingType));
    }

    #[test]
    fn missing_category_is_rejected() {
        let result = validate_transaction_form("expense", "12.5", "", "abc");
        assert!(result.errors.contains(&TransactionFormError::MissingCategory));
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        let result = validate_transaction_form("expense", "12x", "food", "abc");
        assert!(!result.is_valid);
        assert!(matches!(
            result.errors[0],
            TransactionFormError::InvalidAmount(_)
        ));
    }

    #[test]
    fn amount_cleaning_strips_currency_punctuation() {
        assert_eq!(clean_amount("$1,234.56"), Some(1234.56));
        assert_eq!(clean_amount("12.346"), Some(12.35));
        assert_eq!(clean_amount("abc"), None);
    }

    #[test]
    fn month_format() {
        assert!(is_valid_month("2024-05"));
        assert!(is_valid_month("2024-12"));
        assert!(!is_valid_month("2024-13"));
        assert!(!is_valid_month("2024-00"));
        assert!(!is_valid_month("2024-5"));
        assert!(!is_valid_month("202405"));
        assert!(!is_valid_month("2024-0a"));
    }

    #[test]
    fn budget_form_requires_positive_amount_and_month() {
        let result = validate_budget_form("food", "0", "2024-05");
        assert!(result.errors.contains(&BudgetFormError::AmountNotPositive));

        let result = validate_budget_form("food", "250", "may");
        assert!(!result.is_valid);
        assert!(matches!(result.errors[0], BudgetFormError::InvalidMonth(_)));

        let result = validate_budget_form("food", "250", "2024-05");
        assert!(result.is_valid);
        assert_eq!(result.cleaned_amount, Some(250.0));
    }
}
