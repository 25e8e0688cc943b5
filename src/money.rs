//! `FixedMoney`: an immutable amount pinned to a currency and a [`Context`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::algebra::MoneySign;
use crate::amount::AmountLike;
use crate::context::Context;
use crate::currency::{Currency, CurrencyLike};
use crate::error::{MoneyError, MoneyResult};
use crate::fraction::{gcd_i64, round_div, Fraction};
use crate::rational::RationalMoney;
use crate::rounding::RoundingMode;

/// A monetary amount fixed to a currency's (or a custom context's) scale
/// and cash-rounding step.
///
/// Every value is produced through [`FixedMoney::create`], which is the
/// single gate that applies the context to whatever amount was supplied —
/// there is no other way to build one with an amount that hasn't been
/// validated against its context.
#[derive(Debug, Clone)]
pub struct FixedMoney {
    amount: BigDecimal,
    currency: &'static Currency,
    context: Context,
}

impl FixedMoney {
    /// The single construction gate: apply `context` to `amount` under
    /// `rounding`, then store the result.
    pub fn create(
        amount: impl AmountLike,
        currency: impl CurrencyLike,
        context: Context,
        rounding: RoundingMode,
    ) -> MoneyResult<Self> {
        let currency = currency.resolve()?;
        let decimal = amount.into_decimal()?;
        let applied = context.apply_to(&decimal, currency, rounding)?;
        Ok(Self {
            amount: applied,
            currency,
            context,
        })
    }

    /// `of(amount, currency)` with `Context::Default` and
    /// `RoundingMode::Unnecessary`.
    pub fn of(amount: impl AmountLike, currency: impl CurrencyLike) -> MoneyResult<Self> {
        Self::create(amount, currency, Context::Default, RoundingMode::Unnecessary)
    }

    /// `of` with an explicit context and rounding mode.
    pub fn of_with(
        amount: impl AmountLike,
        currency: impl CurrencyLike,
        context: Context,
        rounding: RoundingMode,
    ) -> MoneyResult<Self> {
        Self::create(amount, currency, context, rounding)
    }

    /// Interpret `minor_amount` as minor units: `amount = minor_amount /
    /// 10^currency.defaultFractionDigits`.
    pub fn of_minor(
        minor_amount: i64,
        currency: impl CurrencyLike,
        context: Context,
        rounding: RoundingMode,
    ) -> MoneyResult<Self> {
        let currency = currency.resolve()?;
        let scale = currency.default_fraction_digits() as i64;
        let decimal = BigDecimal::new(BigInt::from(minor_amount), scale);
        Self::create(decimal, currency, context, rounding)
    }

    pub fn zero(currency: impl CurrencyLike, context: Context) -> MoneyResult<Self> {
        Self::create(BigDecimal::zero(), currency, context, RoundingMode::Unnecessary)
    }

    /// Construct directly from an already-validated decimal, bypassing
    /// `context.apply_to`. Only used internally by algorithms (allocation,
    /// quotient) that derive a result known by construction to already
    /// satisfy the context's scale/step invariant.
    fn from_validated(amount: BigDecimal, currency: &'static Currency, context: Context) -> Self {
        Self {
            amount,
            currency,
            context,
        }
    }

    /// Project an exact fraction through `context` under `rounding`. Used
    /// by `RationalMoney::to` — the mirror image of `to_rational`.
    pub(crate) fn from_fraction(
        amount: &Fraction,
        currency: &'static Currency,
        context: Context,
        rounding: RoundingMode,
    ) -> MoneyResult<Self> {
        let applied = context.apply_to_fraction(amount, currency, rounding)?;
        Ok(Self::from_validated(applied, currency, context))
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.amount
    }

    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    pub fn context(&self) -> Context {
        self.context
    }

    fn scale(&self) -> i64 {
        self.amount.as_bigint_and_exponent().1
    }

    fn unscaled(&self) -> BigInt {
        self.amount.as_bigint_and_exponent().0
    }

    pub(crate) fn as_fraction(&self) -> Fraction {
        Fraction::from_bigdecimal(&self.amount)
    }

    fn require_same_currency(&self, other: &FixedMoney) -> MoneyResult<()> {
        if self.currency.is(other.currency) {
            Ok(())
        } else {
            Err(MoneyError::currency_mismatch(
                self.currency.alpha(),
                other.currency.alpha(),
            ))
        }
    }

    fn require_same_context(&self, other: &FixedMoney, operation: &str) -> MoneyResult<()> {
        if self.context == other.context {
            Ok(())
        } else {
            Err(MoneyError::context_mismatch(operation))
        }
    }

    fn combine(&self, other: &FixedMoney, operation: &str, rounding: RoundingMode, negate_other: bool) -> MoneyResult<Self> {
        self.require_same_currency(other)?;
        self.require_same_context(other, operation)?;

        if self.context.has_fixed_scale() {
            let other_amount = if negate_other { -other.amount.clone() } else { other.amount.clone() };
            let sum = &self.amount + other_amount;
            Ok(Self::from_validated(sum, self.currency, self.context))
        } else {
            let other_fraction = if negate_other { other.as_fraction().negated() } else { other.as_fraction() };
            let sum = self.as_fraction().add(&other_fraction);
            let applied = self.context.apply_to_fraction(&sum, self.currency, rounding)?;
            Ok(Self::from_validated(applied, self.currency, self.context))
        }
    }

    pub fn plus(&self, that: &FixedMoney, rounding: RoundingMode) -> MoneyResult<Self> {
        self.combine(that, "plus", rounding, false)
    }

    pub fn minus(&self, that: &FixedMoney, rounding: RoundingMode) -> MoneyResult<Self> {
        self.combine(that, "minus", rounding, true)
    }

    /// Add a bare numeric amount (no currency/context attached).
    pub fn plus_amount(&self, amount: impl AmountLike, rounding: RoundingMode) -> MoneyResult<Self> {
        let addend = Fraction::from_bigdecimal(&amount.into_decimal()?);
        let sum = self.as_fraction().add(&addend);
        let applied = self.context.apply_to_fraction(&sum, self.currency, rounding)?;
        Ok(Self::from_validated(applied, self.currency, self.context))
    }

    pub fn minus_amount(&self, amount: impl AmountLike, rounding: RoundingMode) -> MoneyResult<Self> {
        let subtrahend = Fraction::from_bigdecimal(&amount.into_decimal()?).negated();
        let sum = self.as_fraction().add(&subtrahend);
        let applied = self.context.apply_to_fraction(&sum, self.currency, rounding)?;
        Ok(Self::from_validated(applied, self.currency, self.context))
    }

    pub fn multiplied_by(&self, n: impl AmountLike, rounding: RoundingMode) -> MoneyResult<Self> {
        let factor = Fraction::from_bigdecimal(&n.into_decimal()?);
        let product = self.as_fraction().mul(&factor);
        let applied = self.context.apply_to_fraction(&product, self.currency, rounding)?;
        Ok(Self::from_validated(applied, self.currency, self.context))
    }

    pub fn divided_by(&self, n: impl AmountLike, rounding: RoundingMode) -> MoneyResult<Self> {
        let divisor = Fraction::from_bigdecimal(&n.into_decimal()?);
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let quotient = self.as_fraction().div(&divisor)?;
        let applied = self.context.apply_to_fraction(&quotient, self.currency, rounding)?;
        Ok(Self::from_validated(applied, self.currency, self.context))
    }

    /// Integer-divide by `n`, discarding the remainder. `n` must be nonzero.
    pub fn quotient(&self, n: i64) -> MoneyResult<Self> {
        Ok(self.quotient_and_remainder(n)?.0)
    }

    /// Integer-divide by `n`, returning `(quotient, remainder)`. The
    /// remainder's magnitude is always less than `n * step` in minor units.
    pub fn quotient_and_remainder(&self, n: i64) -> MoneyResult<(Self, Self)> {
        if n == 0 {
            return Err(MoneyError::DivisionByZero);
        }
        let step = BigInt::from(self.context.step());
        let n_big = BigInt::from(n);
        let steps = round_div(&self.unscaled(), &step, RoundingMode::Unnecessary)?;
        let quotient_steps = &steps / &n_big;
        let remainder_steps = &steps - &quotient_steps * &n_big;

        let scale = self.scale();
        let quotient_unscaled = &quotient_steps * &step;
        let remainder_unscaled = &remainder_steps * &step;
        Ok((
            Self::from_validated(BigDecimal::new(quotient_unscaled, scale), self.currency, self.context),
            Self::from_validated(BigDecimal::new(remainder_unscaled, scale), self.currency, self.context),
        ))
    }

    pub fn abs(&self) -> Self {
        Self::from_validated(self.amount.abs(), self.currency, self.context)
    }

    pub fn negated(&self) -> Self {
        Self::from_validated(-self.amount.clone(), self.currency, self.context)
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.amount.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.amount.is_positive()
    }

    /// Convert to another currency by multiplying by `rate` in rational
    /// space, then re-applying through `create` under the target context.
    pub fn converted_to(
        &self,
        currency: impl CurrencyLike,
        rate: &Fraction,
        context: Context,
        rounding: RoundingMode,
    ) -> MoneyResult<Self> {
        let target = currency.resolve()?;
        let converted = self.as_fraction().mul(rate);
        let applied = context.apply_to_fraction(&converted, target, rounding)?;
        Ok(Self::from_validated(applied, target, context))
    }

    pub fn compare_to(&self, other: &FixedMoney) -> MoneyResult<Ordering> {
        self.require_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    pub fn is_equal_to(&self, other: &FixedMoney) -> MoneyResult<bool> {
        Ok(self.compare_to(other)? == Ordering::Equal)
    }

    pub fn is_less_than(&self, other: &FixedMoney) -> MoneyResult<bool> {
        Ok(self.compare_to(other)? == Ordering::Less)
    }

    pub fn is_less_than_or_equal_to(&self, other: &FixedMoney) -> MoneyResult<bool> {
        Ok(self.compare_to(other)? != Ordering::Greater)
    }

    pub fn is_greater_than(&self, other: &FixedMoney) -> MoneyResult<bool> {
        Ok(self.compare_to(other)? == Ordering::Greater)
    }

    pub fn is_greater_than_or_equal_to(&self, other: &FixedMoney) -> MoneyResult<bool> {
        Ok(self.compare_to(other)? != Ordering::Less)
    }

    /// Compares amount and currency, never failing: currency mismatch is
    /// simply `false`, not an error.
    pub fn is_amount_and_currency_equal_to(&self, other: &FixedMoney) -> bool {
        self.currency.is(other.currency) && self.amount == other.amount
    }

    /// `amount * 10^defaultFractionDigits`, keeping any extra scale the
    /// context leaves in place.
    pub fn minor_amount(&self) -> BigDecimal {
        &self.amount * BigDecimal::new(BigInt::from(1), -(self.currency.default_fraction_digits() as i64))
    }

    /// The amount's unscaled integer value (at the context's stored scale).
    pub fn unscaled_amount(&self) -> BigInt {
        self.unscaled()
    }

    pub fn to_rational(&self) -> RationalMoney {
        RationalMoney::from_fraction(self.as_fraction(), self.currency)
    }

    /// Delegate formatting to an external, currency-aware formatter (the
    /// amount as `f64`, the currency's alpha code). The core never
    /// formats for a locale itself — see [`CurrencyFormatter`].
    pub fn format_with(&self, formatter: &dyn CurrencyFormatter) -> String {
        let amount: f64 = self.amount.to_string().parse().unwrap_or(0.0);
        formatter.format(amount, self.currency.alpha())
    }

    /// The min/max fraction-digit configuration a locale formatter should
    /// be set up with: equal to this amount's scale, or `0` when
    /// `allow_whole_number` is set and nothing follows the decimal point.
    pub fn format_options(&self, allow_whole_number: bool) -> FormatOptions {
        let scale = self.scale().max(0) as u32;
        let digits = if allow_whole_number && self.has_zero_fraction() {
            0
        } else {
            scale
        };
        FormatOptions {
            min_fraction_digits: digits,
            max_fraction_digits: digits,
        }
    }

    fn has_zero_fraction(&self) -> bool {
        let (unscaled, scale) = self.amount.as_bigint_and_exponent();
        if scale <= 0 {
            return true;
        }
        (&unscaled % BigInt::from(10).pow(scale as u32)).is_zero()
    }

    fn validate_ratios(ratios: &[i64], allocate_fn: &str) -> MoneyResult<()> {
        if ratios.is_empty() {
            return Err(MoneyError::InvalidArgument(format!(
                "Cannot {allocate_fn}() an empty list of ratios."
            )));
        }
        if ratios.iter().any(|&r| r < 0) {
            return Err(MoneyError::InvalidArgument(format!(
                "Cannot {allocate_fn}() negative ratios."
            )));
        }
        if ratios.iter().all(|&r| r == 0) {
            return Err(MoneyError::InvalidArgument(format!(
                "Cannot {allocate_fn}() to zero ratios only."
            )));
        }
        Ok(())
    }

    /// Split `self` into one part per ratio, such that the parts sum
    /// exactly to `self`. Remainder steps are distributed front-to-back.
    pub fn allocate(&self, ratios: &[i64]) -> MoneyResult<Vec<Self>> {
        Self::validate_ratios(ratios, "allocate")?;
        let total: i64 = ratios.iter().sum();
        let total_big = BigInt::from(total);
        let step = BigInt::from(self.context.step());
        let self_steps = round_div(&self.unscaled(), &step, RoundingMode::Unnecessary)?;
        let scale = self.scale();

        let mut part_steps: Vec<BigInt> = ratios
            .iter()
            .map(|&ratio| &self_steps * BigInt::from(ratio) / &total_big)
            .collect();

        let sum_steps: BigInt = part_steps.iter().sum();
        let mut remainder_steps = &self_steps - &sum_steps;
        let unit_step = if self.is_negative() { BigInt::from(-1) } else { BigInt::from(1) };

        let mut i = 0;
        while !remainder_steps.is_zero() {
            part_steps[i % part_steps.len()] += &unit_step;
            remainder_steps -= &unit_step;
            i += 1;
        }

        Ok(part_steps
            .into_iter()
            .map(|steps| {
                Self::from_validated(BigDecimal::new(steps * &step, scale), self.currency, self.context)
            })
            .collect())
    }

    /// Like [`FixedMoney::allocate`], but returns `parts + [remainder]`
    /// where each part divides evenly and nothing needs redistributing.
    pub fn allocate_with_remainder(&self, ratios: &[i64]) -> MoneyResult<Vec<Self>> {
        Self::validate_ratios(ratios, "allocateWithRemainder")?;
        let gcd = gcd_i64(ratios);
        let simplified: Vec<i64> = if gcd > 1 {
            ratios.iter().map(|&r| r / gcd).collect()
        } else {
            ratios.to_vec()
        };
        let total: i64 = simplified.iter().sum();

        let (_quotient, remainder) = self.quotient_and_remainder(total)?;
        let to_allocate = self.minus(&remainder, RoundingMode::Unnecessary)?;

        let step = BigInt::from(self.context.step());
        let to_allocate_steps = round_div(&to_allocate.unscaled(), &step, RoundingMode::Unnecessary)?;
        let scale = self.scale();
        let total_big = BigInt::from(total);

        let mut parts: Vec<Self> = simplified
            .iter()
            .map(|&ratio| {
                let part_steps = &to_allocate_steps * BigInt::from(ratio) / &total_big;
                Self::from_validated(BigDecimal::new(part_steps * &step, scale), self.currency, self.context)
            })
            .collect();
        parts.push(remainder);
        Ok(parts)
    }

    pub fn split(&self, n: u32) -> MoneyResult<Vec<Self>> {
        if n < 1 {
            return Err(MoneyError::InvalidArgument(
                "Cannot split() into less than 1 part.".into(),
            ));
        }
        self.allocate(&vec![1i64; n as usize])
    }

    pub fn split_with_remainder(&self, n: u32) -> MoneyResult<Vec<Self>> {
        if n < 1 {
            return Err(MoneyError::InvalidArgument(
                "Cannot splitWithRemainder() into less than 1 part.".into(),
            ));
        }
        self.allocate_with_remainder(&vec![1i64; n as usize])
    }

    pub fn min<'a>(monies: &'a [Self]) -> MoneyResult<&'a Self> {
        fold_extreme(monies, Ordering::Less)
    }

    pub fn max<'a>(monies: &'a [Self]) -> MoneyResult<&'a Self> {
        fold_extreme(monies, Ordering::Greater)
    }

    pub fn total(monies: &[Self], rounding: RoundingMode) -> MoneyResult<Self> {
        let mut iter = monies.iter();
        let first = iter
            .next()
            .ok_or_else(|| MoneyError::InvalidArgument("total() requires at least one money".into()))?;
        let mut acc = first.clone();
        for money in iter {
            acc = acc.plus(money, rounding)?;
        }
        Ok(acc)
    }
}

fn fold_extreme(monies: &[FixedMoney], want: Ordering) -> MoneyResult<&FixedMoney> {
    let mut iter = monies.iter();
    let mut best = iter
        .next()
        .ok_or_else(|| MoneyError::InvalidArgument("min/max() requires at least one money".into()))?;
    for candidate in iter {
        if candidate.compare_to(best)? == want {
            best = candidate;
        }
    }
    Ok(best)
}

/// An external, locale-aware formatter this crate delegates to. Never
/// implemented by the crate itself: the spec treats locale formatting as
/// an outside collaborator, not part of the arithmetic core.
pub trait CurrencyFormatter {
    fn format(&self, amount: f64, currency_alpha: &str) -> String;
}

/// The digit-count configuration [`FixedMoney::format_options`] derives
/// from an amount's scale, for a caller to hand to its own locale
/// formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub min_fraction_digits: u32,
    pub max_fraction_digits: u32,
}

impl MoneySign for FixedMoney {
    fn sign(&self) -> Ordering {
        if self.amount.is_zero() {
            Ordering::Equal
        } else if self.amount.is_negative() {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl PartialEq for FixedMoney {
    fn eq(&self, other: &Self) -> bool {
        self.is_amount_and_currency_equal_to(other) && self.context == other.context
    }
}

impl fmt::Display for FixedMoney {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency.alpha(), self.amount)
    }
}

impl FromStr for FixedMoney {
    type Err = MoneyError;

    /// Parses the `"<ALPHA> <decimal>"` string form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (alpha, amount) = s
            .split_once(' ')
            .ok_or_else(|| MoneyError::NumberFormat(s.to_string()))?;
        Self::of(amount, alpha)
    }
}

impl Serialize for FixedMoney {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FixedMoney", 2)?;
        state.serialize_field("amount", &self.amount.to_string())?;
        state.serialize_field("currency", self.currency.alpha())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for FixedMoney {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FixedMoneyVisitor;

        impl<'de> Visitor<'de> for FixedMoneyVisitor {
            type Value = FixedMoney;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(r#"an object {"amount": "...", "currency": "..."}"#)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut amount: Option<String> = None;
                let mut currency: Option<String> = None;
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "amount" => amount = Some(map.next_value()?),
                        "currency" => currency = Some(map.next_value()?),
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }
                let amount = amount.ok_or_else(|| de::Error::missing_field("amount"))?;
                let currency = currency.ok_or_else(|| de::Error::missing_field("currency"))?;
                let scale = amount.split_once('.').map(|(_, frac)| frac.len() as u32).unwrap_or(0);
                let decimal = BigDecimal::from_str(&amount).map_err(de::Error::custom)?;
                let resolved = currency.as_str().resolve().map_err(de::Error::custom)?;
                let context = Context::custom(scale, 1).map_err(de::Error::custom)?;
                FixedMoney::create(decimal, resolved, context, RoundingMode::Unnecessary)
                    .map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(FixedMoneyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_two_equal_parts_with_odd_remainder() {
        let m = FixedMoney::of("99.99", "USD").unwrap();
        let parts = m.allocate(&[100, 100]).unwrap();
        let strings: Vec<String> = parts.iter().map(|p| p.to_string()).collect();
        assert_eq!(strings, vec!["USD 50.00", "USD 49.99"]);
    }

    #[test]
    fn allocate_four_uneven_ratios() {
        let m = FixedMoney::of(100, "USD").unwrap();
        let parts = m.allocate(&[30, 20, 40, 40]).unwrap();
        let strings: Vec<String> = parts.iter().map(|p| p.to_string()).collect();
        assert_eq!(
            strings,
            vec!["USD 23.08", "USD 15.39", "USD 30.77", "USD 30.76"]
        );
    }

    #[test]
    fn allocate_with_remainder_matches_spec_example() {
        let m = FixedMoney::of("99.99", "USD").unwrap();
        let parts = m.allocate_with_remainder(&[100, 100]).unwrap();
        let strings: Vec<String> = parts.iter().map(|p| p.to_string()).collect();
        assert_eq!(strings, vec!["USD 49.99", "USD 49.99", "USD 0.01"]);
    }

    #[test]
    fn split_cash_context_three_ways() {
        let m = FixedMoney::of_with(100, "CHF", Context::cash(5).unwrap(), RoundingMode::Unnecessary).unwrap();
        let parts = m.split(3).unwrap();
        let strings: Vec<String> = parts.iter().map(|p| p.to_string()).collect();
        assert_eq!(strings, vec!["CHF 33.35", "CHF 33.35", "CHF 33.30"]);
    }

    #[test]
    fn quotient_and_remainder_matches_spec_example() {
        let m = FixedMoney::of(100, "USD").unwrap();
        let (q, r) = m.quotient_and_remainder(9).unwrap();
        assert_eq!(q.to_string(), "USD 11.11");
        assert_eq!(r.to_string(), "USD 0.01");
    }

    #[test]
    fn plus_rejects_currency_mismatch() {
        let usd = FixedMoney::of(1, "USD").unwrap();
        let eur = FixedMoney::of(1, "EUR").unwrap();
        assert!(matches!(
            usd.plus(&eur, RoundingMode::Unnecessary),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn plus_rejects_context_mismatch() {
        let a = FixedMoney::of(1, "USD").unwrap();
        let b = FixedMoney::of_with(1, "USD", Context::custom(4, 1).unwrap(), RoundingMode::Unnecessary).unwrap();
        let err = a.plus(&b, RoundingMode::Unnecessary).unwrap_err();
        assert!(matches!(err, MoneyError::ContextMismatch { .. }));
        assert!(err.to_string().contains("to_rational()"));
    }

    #[test]
    fn plus_adds_fixed_scale_directly() {
        let a = FixedMoney::of("1.50", "USD").unwrap();
        let b = FixedMoney::of("2.25", "USD").unwrap();
        let sum = a.plus(&b, RoundingMode::Unnecessary).unwrap();
        assert_eq!(sum.to_string(), "USD 3.75");
    }

    #[test]
    fn is_amount_and_currency_equal_never_errors_on_mismatch() {
        let usd = FixedMoney::of(1, "USD").unwrap();
        let eur = FixedMoney::of(1, "EUR").unwrap();
        assert!(!usd.is_amount_and_currency_equal_to(&eur));
    }

    #[test]
    fn negated_and_abs() {
        let m = FixedMoney::of("5.00", "USD").unwrap();
        let n = m.negated();
        assert_eq!(n.to_string(), "USD -5.00");
        assert_eq!(n.abs().to_string(), "USD 5.00");
        assert_eq!(n.negated(), m);
    }

    #[test]
    fn empty_ratios_is_invalid_argument() {
        let m = FixedMoney::of(1, "USD").unwrap();
        let err = m.allocate(&[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot allocate() an empty list of ratios."
        );
    }

    #[test]
    fn negative_ratios_is_invalid_argument() {
        let m = FixedMoney::of(1, "USD").unwrap();
        let err = m.allocate(&[1, -1]).unwrap_err();
        assert_eq!(err.to_string(), "Cannot allocate() negative ratios.");
    }

    #[test]
    fn all_zero_ratios_is_invalid_argument() {
        let m = FixedMoney::of(1, "USD").unwrap();
        let err = m.allocate(&[0, 0]).unwrap_err();
        assert_eq!(err.to_string(), "Cannot allocate() to zero ratios only.");
    }

    #[test]
    fn split_rejects_zero_parts() {
        let m = FixedMoney::of(1, "USD").unwrap();
        assert!(m.split(0).is_err());
    }

    #[test]
    fn json_round_trip_preserves_scale() {
        let m = FixedMoney::of_with(
            "3.888923",
            "GBP",
            Context::custom(8, 1).unwrap(),
            RoundingMode::Unnecessary,
        )
        .unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"amount":"3.88892300","currency":"GBP"}"#);
    }
}
