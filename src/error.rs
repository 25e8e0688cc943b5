//! The closed error taxonomy every fallible operation in this crate returns.
//!
//! Nothing in this crate panics on bad input and nothing swallows a failure
//! internally: every variant here corresponds to one of the failure modes in
//! the arithmetic/context/exchange design, surfaced to the caller untouched.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type MoneyResult<T> = Result<T, MoneyError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// A currency/country code that isn't in the catalogue, or a country
    /// with zero or more than one active currency.
    #[error("unknown currency or country code: {0}")]
    UnknownCurrency(String),

    /// Bad constructor/operation arguments: negative fraction digits, a
    /// non-2/5 cash step, `Unnecessary`-only Auto context violated, empty or
    /// degenerate allocation ratios, invalid table-provider configuration.
    #[error("{0}")]
    InvalidArgument(String),

    /// `RoundingMode::Unnecessary` was requested but rounding would lose
    /// information, or an integer coercion (`quotient`, `quotientAndRemainder`)
    /// was asked of a non-integral value.
    #[error("rounding is necessary but RoundingMode::Unnecessary was specified")]
    RoundingNecessary,

    /// A string amount didn't parse as a decimal number.
    #[error("could not parse {0:?} as a decimal amount")]
    NumberFormat(String),

    /// Division (or an allocation/quotient derived from one) by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Two `FixedMoney`/`RationalMoney` values in an operation share
    /// neither alpha code.
    #[error("currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch { expected: String, actual: String },

    /// Two `FixedMoney` values in `plus`/`minus`/`total` have matching
    /// currencies but different contexts.
    #[error(
        "context mismatch in {operation}: contexts differ; try {operation}(value.to_rational())"
    )]
    ContextMismatch { operation: String },

    /// No exchange rate could be produced for the requested pair, by any
    /// provider consulted.
    #[error("no exchange rate from {from} to {to}{}", detail.as_ref().map(|d| format!(": {d}")).unwrap_or_default())]
    CurrencyConversion {
        from: String,
        to: String,
        detail: Option<String>,
    },
}

impl MoneyError {
    pub fn currency_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::CurrencyMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn context_mismatch(operation: impl Into<String>) -> Self {
        Self::ContextMismatch {
            operation: operation.into(),
        }
    }

    pub fn conversion(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::CurrencyConversion {
            from: from.into(),
            to: to.into(),
            detail: None,
        }
    }

    pub fn conversion_with_detail(
        from: impl Into<String>,
        to: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::CurrencyConversion {
            from: from.into(),
            to: to.into(),
            detail: Some(detail.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_mismatch_message() {
        let err = MoneyError::currency_mismatch("USD", "EUR");
        assert_eq!(err.to_string(), "currency mismatch: expected USD, got EUR");
    }

    #[test]
    fn context_mismatch_hints_rational() {
        let err = MoneyError::context_mismatch("plus");
        assert!(err.to_string().contains("value.to_rational()"));
    }

    #[test]
    fn conversion_without_detail() {
        let err = MoneyError::conversion("USD", "EUR");
        assert_eq!(err.to_string(), "no exchange rate from USD to EUR");
    }

    #[test]
    fn conversion_with_detail() {
        let err = MoneyError::conversion_with_detail("USD", "EUR", "no providers configured");
        assert_eq!(
            err.to_string(),
            "no exchange rate from USD to EUR: no providers configured"
        );
    }
}
