//! The `Context` family: how an amount is fitted to a currency's scale and
//! cash-rounding step.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::Zero;

use crate::currency::Currency;
use crate::error::{MoneyError, MoneyResult};
use crate::fraction::{round_div, Fraction};
use crate::rounding::RoundingMode;

/// How an amount is fitted to a currency: the scale it's stored at and the
/// smallest representable increment (the "step", in minor units).
///
/// Two contexts are equal iff their variant and parameters match exactly —
/// this is a structural comparison, never identity, because `plus`/`minus`
/// between `FixedMoney` values require the *same* context, not merely an
/// equivalent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// Scale = currency's default fraction digits; step = 1.
    Default,
    /// Scale = currency's default fraction digits; step = the given cash
    /// step in minor units (its prime factorization must be only 2s and 5s).
    Cash(u32),
    /// Explicit scale and step.
    Custom { scale: u32, step: u32 },
    /// No fixed scale: strips trailing zeros, refuses any rounding but
    /// `Unnecessary`.
    Auto,
}

impl Context {
    pub fn cash(step: u32) -> MoneyResult<Self> {
        validate_cash_step(step)?;
        Ok(Self::Cash(step))
    }

    /// An explicit scale and step. Unlike [`Context::cash`], the step
    /// isn't restricted to a 2s/5s factorization — any positive increment
    /// is a legal custom step.
    pub fn custom(scale: u32, step: u32) -> MoneyResult<Self> {
        validate_custom_step(step)?;
        Ok(Self::Custom { scale, step })
    }

    /// The step, in minor units. Always >= 1.
    pub fn step(&self) -> u32 {
        match self {
            Context::Default => 1,
            Context::Cash(step) => *step,
            Context::Custom { step, .. } => *step,
            Context::Auto => 1,
        }
    }

    /// Whether this context produces a fixed number of fraction digits.
    pub fn has_fixed_scale(&self) -> bool {
        !matches!(self, Context::Auto)
    }

    fn target_scale(&self, currency: &Currency) -> u32 {
        match self {
            Context::Default | Context::Cash(_) => currency.default_fraction_digits(),
            Context::Custom { scale, .. } => *scale,
            Context::Auto => 0,
        }
    }

    /// Apply this context to an amount under a rounding mode, producing the
    /// stored `BigDecimal` for a `FixedMoney`.
    pub fn apply_to(
        &self,
        amount: &BigDecimal,
        currency: &Currency,
        rounding: RoundingMode,
    ) -> MoneyResult<BigDecimal> {
        self.apply_to_fraction(&Fraction::from_bigdecimal(amount), currency, rounding)
    }

    /// Same as [`Context::apply_to`] but starting from an exact fraction —
    /// used by `RationalMoney::to` and anywhere a value hasn't been
    /// rounded to a `BigDecimal` yet.
    pub fn apply_to_fraction(
        &self,
        amount: &Fraction,
        currency: &Currency,
        rounding: RoundingMode,
    ) -> MoneyResult<BigDecimal> {
        match self {
            Context::Auto => {
                if rounding != RoundingMode::Unnecessary {
                    return Err(MoneyError::InvalidArgument(
                        "Auto context only accepts RoundingMode::Unnecessary".into(),
                    ));
                }
                let exact = amount.to_bigdecimal_exact()?;
                Ok(strip_trailing_zeros(&exact))
            }
            Context::Default => amount.to_bigdecimal_scaled(currency.default_fraction_digits() as i64, rounding),
            Context::Cash(step) | Context::Custom { step, .. } if *step == 1 => {
                amount.to_bigdecimal_scaled(self.target_scale(currency) as i64, rounding)
            }
            Context::Cash(step) => rescale_with_step(amount, self.target_scale(currency), *step, rounding),
            Context::Custom { scale, step } => rescale_with_step(amount, *scale, *step, rounding),
        }
    }
}

fn rescale_with_step(
    amount: &Fraction,
    scale: u32,
    step: u32,
    rounding: RoundingMode,
) -> MoneyResult<BigDecimal> {
    // (amount / step).toScale(scale, rounding) * step
    let step_fraction = Fraction::from_integer(BigInt::from(step));
    let divided = amount.div(&step_fraction)?;
    let rounded = divided.to_bigdecimal_scaled(scale as i64, rounding)?;
    let (unscaled, _) = rounded.as_bigint_and_exponent();
    Ok(BigDecimal::new(unscaled * BigInt::from(step), scale as i64))
}

fn strip_trailing_zeros(value: &BigDecimal) -> BigDecimal {
    if value.is_zero() {
        return BigDecimal::new(BigInt::zero(), 0);
    }
    let (mut unscaled, mut scale) = value.as_bigint_and_exponent();
    let ten = BigInt::from(10);
    while scale > 0 && (&unscaled % &ten).is_zero() {
        unscaled /= &ten;
        scale -= 1;
    }
    BigDecimal::new(unscaled, scale)
}

/// A cash-rounding step must be representable as a terminating decimal
/// fraction of a minor unit, so its prime factorization may only contain
/// 2s and 5s (5 cents, 25 cents, and so on, but never e.g. 3 or 7 cents).
fn validate_cash_step(step: u32) -> MoneyResult<()> {
    if step == 0 {
        return Err(MoneyError::InvalidArgument(
            "context step must be positive".into(),
        ));
    }
    let mut remaining = step;
    for factor in [2u32, 5u32] {
        while remaining % factor == 0 {
            remaining /= factor;
        }
    }
    if remaining != 1 {
        return Err(MoneyError::InvalidArgument(format!(
            "cash step {step} must factor only into 2s and 5s"
        )));
    }
    Ok(())
}

/// A custom step has no factorization restriction, only positivity.
fn validate_custom_step(step: u32) -> MoneyResult<()> {
    if step == 0 {
        return Err(MoneyError::InvalidArgument(
            "context step must be positive".into(),
        ));
    }
    Ok(())
}

/// Divide an unscaled minor-unit integer by `step`, honoring `rounding`.
/// Used by `FixedMoney::quotient`/`quotientAndRemainder` to strip the step
/// before integer division.
pub(crate) fn exact_unscale_by_step(
    unscaled: &BigInt,
    step: u32,
    rounding: RoundingMode,
) -> MoneyResult<BigInt> {
    round_div(unscaled, &BigInt::from(step), rounding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn default_context_rounds_to_currency_scale() {
        let usd = currency::of("USD").unwrap();
        let result = Context::Default
            .apply_to(&dec("1.005"), usd, RoundingMode::HalfEven)
            .unwrap();
        assert_eq!(result, dec("1.00"));
    }

    #[test]
    fn cash_step_rounds_to_nearest_five_cents() {
        let chf = currency::of("CHF").unwrap();
        let ctx = Context::cash(5).unwrap();
        let result = ctx.apply_to(&dec("10.02"), chf, RoundingMode::HalfUp).unwrap();
        assert_eq!(result, dec("10.00"));
        let result2 = ctx.apply_to(&dec("10.03"), chf, RoundingMode::HalfUp).unwrap();
        assert_eq!(result2, dec("10.05"));
    }

    #[test]
    fn cash_step_rejects_non_2_5_factorization() {
        assert!(Context::cash(3).is_err());
        assert!(Context::cash(0).is_err());
        assert!(Context::cash(5).is_ok());
        assert!(Context::cash(25).is_ok());
        assert!(Context::cash(100).is_ok());
    }

    #[test]
    fn auto_context_strips_trailing_zeros_and_rejects_rounding() {
        let usd = currency::of("USD").unwrap();
        let result = Context::Auto
            .apply_to(&dec("1.200"), usd, RoundingMode::Unnecessary)
            .unwrap();
        assert_eq!(result, dec("1.2"));

        let err = Context::Auto.apply_to(&dec("1.005"), usd, RoundingMode::HalfUp);
        assert!(matches!(err, Err(MoneyError::InvalidArgument(_))));
    }

    #[test]
    fn auto_context_zero_has_scale_zero() {
        let usd = currency::of("USD").unwrap();
        let result = Context::Auto
            .apply_to(&dec("0.00"), usd, RoundingMode::Unnecessary)
            .unwrap();
        assert_eq!(result.as_bigint_and_exponent().1, 0);
    }

    #[test]
    fn custom_context_with_step_one_is_plain_scale_rounding() {
        let gbp = currency::of("GBP").unwrap();
        let ctx = Context::custom(8, 1).unwrap();
        let result = ctx
            .apply_to(&dec("3.888923"), gbp, RoundingMode::Unnecessary)
            .unwrap();
        assert_eq!(result, dec("3.88892300"));
    }

    #[test]
    fn custom_context_accepts_steps_cash_would_reject() {
        assert!(Context::custom(2, 3).is_ok());
        assert!(Context::custom(2, 7).is_ok());
        assert!(Context::cash(3).is_err());
    }

    #[test]
    fn custom_context_still_rejects_zero_step() {
        assert!(Context::custom(2, 0).is_err());
    }
}
