//! `RationalMoney`: an exact fraction of arbitrary-precision integers,
//! bound to a currency but no context. Nothing here ever rounds — the
//! only way to lose precision is to call [`RationalMoney::to`] and hand
//! over a [`Context`] explicitly.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::algebra::MoneySign;
use crate::amount::AmountLike;
use crate::context::Context;
use crate::currency::{Currency, CurrencyLike};
use crate::error::{MoneyError, MoneyResult};
use crate::fraction::Fraction;
use crate::money::FixedMoney;
use crate::rounding::RoundingMode;

/// An immutable exact-fraction monetary value: `amount` never reduces or
/// rounds on its own.
#[derive(Debug, Clone)]
pub struct RationalMoney {
    amount: Fraction,
    currency: &'static Currency,
}

impl RationalMoney {
    pub fn of(amount: impl AmountLike, currency: impl CurrencyLike) -> MoneyResult<Self> {
        let currency = currency.resolve()?;
        let decimal = amount.into_decimal()?;
        Ok(Self {
            amount: Fraction::from_bigdecimal(&decimal),
            currency,
        })
    }

    /// Build directly from a numerator/denominator pair.
    pub fn from_ratio(
        numer: BigInt,
        denom: BigInt,
        currency: impl CurrencyLike,
    ) -> MoneyResult<Self> {
        let currency = currency.resolve()?;
        Ok(Self {
            amount: Fraction::new(numer, denom)?,
            currency,
        })
    }

    pub(crate) fn from_fraction(amount: Fraction, currency: &'static Currency) -> Self {
        Self { amount, currency }
    }

    pub fn zero(currency: impl CurrencyLike) -> MoneyResult<Self> {
        Ok(Self {
            amount: Fraction::zero(),
            currency: currency.resolve()?,
        })
    }

    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    pub fn numerator(&self) -> &BigInt {
        &self.amount.numer
    }

    pub fn denominator(&self) -> &BigInt {
        &self.amount.denom
    }

    pub(crate) fn fraction(&self) -> &Fraction {
        &self.amount
    }

    fn require_same_currency(&self, other: &RationalMoney) -> MoneyResult<()> {
        if self.currency.is(other.currency) {
            Ok(())
        } else {
            Err(MoneyError::currency_mismatch(
                self.currency.alpha(),
                other.currency.alpha(),
            ))
        }
    }

    pub fn plus(&self, that: &RationalMoney) -> MoneyResult<Self> {
        self.require_same_currency(that)?;
        Ok(Self {
            amount: self.amount.add(&that.amount),
            currency: self.currency,
        })
    }

    pub fn minus(&self, that: &RationalMoney) -> MoneyResult<Self> {
        self.require_same_currency(that)?;
        Ok(Self {
            amount: self.amount.sub(&that.amount),
            currency: self.currency,
        })
    }

    /// Add a bare numeric amount (no currency attached).
    pub fn plus_amount(&self, amount: impl AmountLike) -> MoneyResult<Self> {
        let addend = Fraction::from_bigdecimal(&amount.into_decimal()?);
        Ok(Self {
            amount: self.amount.add(&addend),
            currency: self.currency,
        })
    }

    pub fn minus_amount(&self, amount: impl AmountLike) -> MoneyResult<Self> {
        let subtrahend = Fraction::from_bigdecimal(&amount.into_decimal()?).negated();
        Ok(Self {
            amount: self.amount.add(&subtrahend),
            currency: self.currency,
        })
    }

    pub fn multiplied_by(&self, n: impl AmountLike) -> MoneyResult<Self> {
        let factor = Fraction::from_bigdecimal(&n.into_decimal()?);
        Ok(Self {
            amount: self.amount.mul(&factor),
            currency: self.currency,
        })
    }

    pub fn divided_by(&self, n: impl AmountLike) -> MoneyResult<Self> {
        let divisor = Fraction::from_bigdecimal(&n.into_decimal()?);
        Ok(Self {
            amount: self.amount.div(&divisor)?,
            currency: self.currency,
        })
    }

    pub fn negated(&self) -> Self {
        Self {
            amount: self.amount.negated(),
            currency: self.currency,
        }
    }

    pub fn abs(&self) -> Self {
        Self {
            amount: self.amount.abs(),
            currency: self.currency,
        }
    }

    /// Reduce the fraction to lowest terms. `plus`/`minus`/etc never do
    /// this on their own — see spec example 8 (`988773400/1000000` vs
    /// `9887734/10000`).
    pub fn simplified(&self) -> Self {
        Self {
            amount: self.amount.simplified(),
            currency: self.currency,
        }
    }

    /// Project to a `FixedMoney` by applying `context` under `rounding`.
    pub fn to(&self, context: Context, rounding: RoundingMode) -> MoneyResult<FixedMoney> {
        FixedMoney::from_fraction(&self.amount, self.currency, context, rounding)
    }

    pub fn compare_to(&self, other: &RationalMoney) -> MoneyResult<Ordering> {
        self.require_same_currency(other)?;
        let lhs = &self.amount.numer * &other.amount.denom;
        let rhs = &other.amount.numer * &self.amount.denom;
        Ok(lhs.cmp(&rhs))
    }

    pub fn is_equal_to(&self, other: &RationalMoney) -> MoneyResult<bool> {
        Ok(self.compare_to(other)? == Ordering::Equal)
    }

    pub fn is_less_than(&self, other: &RationalMoney) -> MoneyResult<bool> {
        Ok(self.compare_to(other)? == Ordering::Less)
    }

    pub fn is_greater_than(&self, other: &RationalMoney) -> MoneyResult<bool> {
        Ok(self.compare_to(other)? == Ordering::Greater)
    }
}

impl MoneySign for RationalMoney {
    fn sign(&self) -> Ordering {
        self.amount.numer.cmp(&BigInt::from(0))
    }
}

impl PartialEq for RationalMoney {
    fn eq(&self, other: &Self) -> bool {
        self.currency.is(other.currency) && self.compare_to(other) == Ok(Ordering::Equal)
    }
}

impl fmt::Display for RationalMoney {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}/{}",
            self.currency.alpha(),
            self.amount.numer,
            self.amount.denom
        )
    }
}

impl FromStr for RationalMoney {
    type Err = MoneyError;

    /// Parses the `"<ALPHA> <numerator>/<denominator>"` string form
    /// produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (alpha, ratio) = s
            .split_once(' ')
            .ok_or_else(|| MoneyError::NumberFormat(s.to_string()))?;
        let (numer, denom) = ratio
            .split_once('/')
            .ok_or_else(|| MoneyError::NumberFormat(s.to_string()))?;
        let numer =
            BigInt::from_str(numer).map_err(|_| MoneyError::NumberFormat(s.to_string()))?;
        let denom =
            BigInt::from_str(denom).map_err(|_| MoneyError::NumberFormat(s.to_string()))?;
        Self::from_ratio(numer, denom, alpha)
    }
}

impl Serialize for RationalMoney {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RationalMoney", 2)?;
        state.serialize_field(
            "amount",
            &format!("{}/{}", self.amount.numer, self.amount.denom),
        )?;
        state.serialize_field("currency", self.currency.alpha())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for RationalMoney {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RationalMoneyVisitor;

        impl<'de> Visitor<'de> for RationalMoneyVisitor {
            type Value = RationalMoney;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(r#"an object {"amount": "n/d", "currency": "..."}"#)
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
                let (numer, denom) = amount
                    .split_once('/')
                    .ok_or_else(|| de::Error::custom("expected \"numerator/denominator\""))?;
                let numer = BigInt::from_str(numer).map_err(de::Error::custom)?;
                let denom = BigInt::from_str(denom).map_err(de::Error::custom)?;
                let resolved = currency.as_str().resolve().map_err(de::Error::custom)?;
                RationalMoney::from_ratio(numer, denom, resolved).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(RationalMoneyVisitor)
    }
}
