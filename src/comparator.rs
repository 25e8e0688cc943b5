//! `MoneyComparator`: cross-currency ordering without pre-rounding either
//! side. Same-currency pairs defer to `FixedMoney`'s own comparison.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::error::MoneyResult;
use crate::exchange::ExchangeRateProvider;
use crate::money::FixedMoney;

pub struct MoneyComparator {
    provider: Arc<dyn ExchangeRateProvider>,
}

impl MoneyComparator {
    pub fn new(provider: Arc<dyn ExchangeRateProvider>) -> Self {
        Self { provider }
    }

    /// Converts `a`'s amount into `b`'s currency (in rational space, never
    /// rounding) before comparing — the direction matters whenever the
    /// provider's rates aren't exact reciprocals.
    pub fn compare(&self, a: &FixedMoney, b: &FixedMoney) -> MoneyResult<Ordering> {
        if a.currency().is(b.currency()) {
            return a.compare_to(b);
        }
        let rate = self
            .provider
            .get_exchange_rate(a.currency().alpha(), b.currency().alpha())?;
        let a_converted = a.as_fraction().mul(&rate);
        let b_fraction = b.as_fraction();
        let lhs = &a_converted.numer * &b_fraction.denom;
        let rhs = &b_fraction.numer * &a_converted.denom;
        Ok(lhs.cmp(&rhs))
    }

    pub fn is_equal(&self, a: &FixedMoney, b: &FixedMoney) -> MoneyResult<bool> {
        Ok(self.compare(a, b)? == Ordering::Equal)
    }

    pub fn is_less(&self, a: &FixedMoney, b: &FixedMoney) -> MoneyResult<bool> {
        Ok(self.compare(a, b)? == Ordering::Less)
    }

    pub fn is_less_or_equal(&self, a: &FixedMoney, b: &FixedMoney) -> MoneyResult<bool> {
        Ok(self.compare(a, b)? != Ordering::Greater)
    }

    pub fn is_greater(&self, a: &FixedMoney, b: &FixedMoney) -> MoneyResult<bool> {
        Ok(self.compare(a, b)? == Ordering::Greater)
    }

    pub fn is_greater_or_equal(&self, a: &FixedMoney, b: &FixedMoney) -> MoneyResult<bool> {
        Ok(self.compare(a, b)? != Ordering::Less)
    }

    /// Fold-left minimum: `self` converts into each successive candidate.
    pub fn min<'a>(
        &self,
        first: &'a FixedMoney,
        others: &'a [FixedMoney],
    ) -> MoneyResult<&'a FixedMoney> {
        self.fold_extreme(first, others, Ordering::Greater)
    }

    pub fn max<'a>(
        &self,
        first: &'a FixedMoney,
        others: &'a [FixedMoney],
    ) -> MoneyResult<&'a FixedMoney> {
        self.fold_extreme(first, others, Ordering::Less)
    }

    fn fold_extreme<'a>(
        &self,
        first: &'a FixedMoney,
        others: &'a [FixedMoney],
        replace_when: Ordering,
    ) -> MoneyResult<&'a FixedMoney> {
        let mut best = first;
        for candidate in others {
            if self.compare(best, candidate)? == replace_when {
                best = candidate;
            }
        }
        Ok(best)
    }
}
