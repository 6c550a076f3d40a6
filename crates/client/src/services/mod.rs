//! Resource service adapters.
//!
//! One adapter per collection. Every operation resolves to
//! `Result<T, ServiceError>`; gateway failures are converted at this
//! boundary and never propagate as panics. Validation of user input is
//! centralized here: positive amounts, non-blank descriptions, and the
//! revenue source fallback happen before any request is issued.

use thiserror::Error;

use crate::gateway::GatewayError;

pub mod categories;
pub mod expenses;
pub mod revenues;

pub use categories::{CategoryDraft, CategoryService};
pub use expenses::{ExpenseDraft, ExpenseService};
pub use revenues::{RevenueDraft, RevenueService};

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("cannot delete a category that is still used by expenses")]
    CategoryInUse,
    #[error("{0}")]
    Gateway(String),
}

impl From<GatewayError> for ServiceError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Validation(message) => Self::Validation(message),
            other => Self::Gateway(other.to_string()),
        }
    }
}

/// Rejects zero, negative, and non-finite amounts.
fn require_positive_amount(amount: f64) -> ServiceResult<()> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(ServiceError::Validation(
            "amount must be greater than zero".to_string(),
        ))
    }
}

fn require_text(value: &str, field: &str) -> ServiceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ServiceError::Validation(format!("{field} must not be empty")))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_amount_accepts_cents() {
        assert!(require_positive_amount(0.01).is_ok());
    }

    #[test]
    fn positive_amount_rejects_zero_negative_and_nan() {
        assert!(require_positive_amount(0.0).is_err());
        assert!(require_positive_amount(-5.0).is_err());
        assert!(require_positive_amount(f64::NAN).is_err());
    }

    #[test]
    fn require_text_trims() {
        assert_eq!(require_text("  Lunch ", "description").unwrap(), "Lunch");
        assert!(require_text("   ", "description").is_err());
    }
}
