//! An exact, never-auto-reduced fraction of arbitrary-precision integers.
//!
//! `RationalMoney` needs a fraction that stays exactly as wide as its
//! construction leaves it (`1.1234 + 987.65` keeps denominator `1000000`
//! until the caller asks to [`Fraction::simplified`]). A normalizing
//! rational type (one that auto-reduces on every operation, the way
//! `num_rational::Ratio` does) can't express that distinction, so this
//! module carries the numerator/denominator pair itself.
//!
//! The rounding-mode dispatch in [`round_div`] is a direct generalization of
//! the hand-rolled scale-rounding arithmetic this crate's ancestor used to
//! do over `i128`: the same eight-way match, just over `BigInt` so it never
//! overflows.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::error::{MoneyError, MoneyResult};
use crate::rounding::RoundingMode;

/// An exact fraction `numer / denom`, with `denom` always strictly positive.
/// Not normalized: arithmetic grows the denominator the way schoolbook
/// fraction addition does. Call [`Fraction::simplified`] to reduce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fraction {
    pub numer: BigInt,
    pub denom: BigInt,
}

impl Fraction {
    pub fn new(numer: BigInt, denom: BigInt) -> MoneyResult<Self> {
        if denom.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        if denom.is_negative() {
            Ok(Self {
                numer: -numer,
                denom: -denom,
            })
        } else {
            Ok(Self { numer, denom })
        }
    }

    pub fn zero() -> Self {
        Self {
            numer: BigInt::zero(),
            denom: BigInt::from(1),
        }
    }

    pub fn from_integer(value: BigInt) -> Self {
        Self {
            numer: value,
            denom: BigInt::from(1),
        }
    }

    /// Exact conversion from a `BigDecimal`: `unscaled / 10^scale`.
    pub fn from_bigdecimal(value: &BigDecimal) -> Self {
        let (unscaled, scale) = value.as_bigint_and_exponent();
        if scale >= 0 {
            Self {
                numer: unscaled,
                denom: BigInt::from(10).pow(scale as u32),
            }
        } else {
            Self {
                numer: unscaled * BigInt::from(10).pow((-scale) as u32),
                denom: BigInt::from(1),
            }
        }
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    pub fn negated(&self) -> Self {
        Self {
            numer: -self.numer.clone(),
            denom: self.denom.clone(),
        }
    }

    pub fn abs(&self) -> Self {
        Self {
            numer: self.numer.abs(),
            denom: self.denom.clone(),
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        Self {
            numer: &self.numer * &other.denom + &other.numer * &self.denom,
            denom: &self.denom * &other.denom,
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.negated())
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self {
            numer: &self.numer * &other.numer,
            denom: &self.denom * &other.denom,
        }
    }

    pub fn div(&self, other: &Self) -> MoneyResult<Self> {
        if other.numer.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let (numer, denom) = if other.numer.is_negative() {
            (&self.numer * -&other.denom, &self.denom * -&other.numer)
        } else {
            (&self.numer * &other.denom, &self.denom * &other.numer)
        };
        Ok(Self { numer, denom })
    }

    /// Reduce to lowest terms. A no-op on an already-reduced fraction.
    pub fn simplified(&self) -> Self {
        if self.numer.is_zero() {
            return Self::zero();
        }
        let g = gcd(&self.numer.abs(), &self.denom);
        if g.is_zero() || g == BigInt::from(1) {
            self.clone()
        } else {
            Self {
                numer: &self.numer / &g,
                denom: &self.denom / &g,
            }
        }
    }

    /// Round this fraction to a `BigDecimal` at the given scale.
    pub fn to_bigdecimal_scaled(&self, scale: i64, mode: RoundingMode) -> MoneyResult<BigDecimal> {
        let scale_factor = pow10(scale.max(0) as u32);
        let scaled_numer = &self.numer * scale_factor;
        let unscaled = round_div(&scaled_numer, &self.denom, mode)?;
        Ok(BigDecimal::new(unscaled, scale))
    }

    /// Convert exactly to a `BigDecimal`, failing with
    /// [`MoneyError::RoundingNecessary`] if the fraction isn't a
    /// terminating decimal (denominator not of the form `2^a * 5^b`).
    pub fn to_bigdecimal_exact(&self) -> MoneyResult<BigDecimal> {
        let s = self.simplified();
        if s.numer.is_zero() {
            return Ok(BigDecimal::new(BigInt::zero(), 0));
        }
        let mut denom = s.denom.clone();
        let two = BigInt::from(2);
        let five = BigInt::from(5);
        let mut twos = 0u32;
        let mut fives = 0u32;
        while (&denom % &two).is_zero() {
            denom /= &two;
            twos += 1;
        }
        while (&denom % &five).is_zero() {
            denom /= &five;
            fives += 1;
        }
        if denom != BigInt::from(1) {
            return Err(MoneyError::RoundingNecessary);
        }
        let scale = twos.max(fives);
        let numer = &s.numer * two.pow(scale - twos) * five.pow(scale - fives);
        Ok(BigDecimal::new(numer, scale as i64))
    }
}

fn pow10(exp: u32) -> BigInt {
    BigInt::from(10).pow(exp)
}

/// `gcd(a, b)` for non-negative `BigInt`s.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let (mut a, mut b) = (a.abs(), b.abs());
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// `gcd` over a slice of signed ratios (used to simplify allocation ratios).
pub fn gcd_i64(values: &[i64]) -> i64 {
    values
        .iter()
        .fold(0i64, |acc, &v| gcd_i64_pair(acc, v.abs()))
}

fn gcd_i64_pair(a: i64, b: i64) -> i64 {
    if b == 0 {
        a
    } else {
        gcd_i64_pair(b, a % b)
    }
}

/// Divide `unscaled` by the strictly-positive `factor`, applying `mode` to
/// the remainder. This is the single rounding primitive every context and
/// fraction projection in the crate is built on.
pub fn round_div(unscaled: &BigInt, factor: &BigInt, mode: RoundingMode) -> MoneyResult<BigInt> {
    debug_assert!(factor.is_positive());
    let quotient = unscaled / factor;
    let remainder = unscaled - &quotient * factor;
    if remainder.is_zero() {
        return Ok(quotient);
    }

    let is_negative = unscaled.is_negative();
    let step = |q: BigInt| -> BigInt {
        if is_negative {
            q - 1
        } else {
            q + 1
        }
    };
    let rem_abs = remainder.abs();
    let twice = &rem_abs * 2;

    let rounded = match mode {
        RoundingMode::Down => quotient,
        RoundingMode::Up => step(quotient),
        RoundingMode::Ceiling => {
            if is_negative {
                quotient
            } else {
                step(quotient)
            }
        }
        RoundingMode::Floor => {
            if is_negative {
                step(quotient)
            } else {
                quotient
            }
        }
        RoundingMode::HalfUp => {
            if twice >= *factor {
                step(quotient)
            } else {
                quotient
            }
        }
        RoundingMode::HalfDown => {
            if twice > *factor {
                step(quotient)
            } else {
                quotient
            }
        }
        RoundingMode::HalfEven => {
            if twice > *factor || (twice == *factor && &quotient % 2 != BigInt::zero()) {
                step(quotient)
            } else {
                quotient
            }
        }
        RoundingMode::Unnecessary => return Err(MoneyError::RoundingNecessary),
    };
    Ok(rounded)
}
