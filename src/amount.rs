//! Accepting "a number" from several input shapes.
//!
//! Rust has no default/overloaded parameters, so `FixedMoney::of(amount,
//! currency)` needs a trait at the `amount` position instead of the
//! single dynamically-typed parameter the original design allows.

use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::error::{MoneyError, MoneyResult};

/// Anything that can become a `BigDecimal` amount at construction time.
pub trait AmountLike {
    fn into_decimal(self) -> MoneyResult<BigDecimal>;
}

impl AmountLike for BigDecimal {
    fn into_decimal(self) -> MoneyResult<BigDecimal> {
        Ok(self)
    }
}

impl AmountLike for &BigDecimal {
    fn into_decimal(self) -> MoneyResult<BigDecimal> {
        Ok(self.clone())
    }
}

impl AmountLike for i64 {
    fn into_decimal(self) -> MoneyResult<BigDecimal> {
        Ok(BigDecimal::from(self))
    }
}

impl AmountLike for i32 {
    fn into_decimal(self) -> MoneyResult<BigDecimal> {
        Ok(BigDecimal::from(self))
    }
}

impl AmountLike for u32 {
    fn into_decimal(self) -> MoneyResult<BigDecimal> {
        Ok(BigDecimal::from(self))
    }
}

impl AmountLike for u64 {
    fn into_decimal(self) -> MoneyResult<BigDecimal> {
        Ok(BigDecimal::from(self))
    }
}

impl AmountLike for f64 {
    fn into_decimal(self) -> MoneyResult<BigDecimal> {
        BigDecimal::try_from(self)
            .map_err(|_| MoneyError::NumberFormat(format!("non-finite float {self}")))
    }
}

impl AmountLike for &str {
    fn into_decimal(self) -> MoneyResult<BigDecimal> {
        BigDecimal::from_str(self).map_err(|_| MoneyError::NumberFormat(self.to_string()))
    }
}

impl AmountLike for String {
    fn into_decimal(self) -> MoneyResult<BigDecimal> {
        BigDecimal::from_str(&self).map_err(|_| MoneyError::NumberFormat(self))
    }
}

impl AmountLike for &String {
    fn into_decimal(self) -> MoneyResult<BigDecimal> {
        BigDecimal::from_str(self).map_err(|_| MoneyError::NumberFormat(self.clone()))
    }
}
