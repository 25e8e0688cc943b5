//! Wraps an underlying provider that only quotes rates relative to a
//! designated base currency, and derives every other pair from it.

use std::sync::Arc;

use crate::error::MoneyResult;
use crate::fraction::Fraction;

use super::ExchangeRateProvider;

pub struct BaseCurrencyProvider {
    base: String,
    inner: Arc<dyn ExchangeRateProvider>,
}

impl BaseCurrencyProvider {
    pub fn new(base: impl Into<String>, inner: Arc<dyn ExchangeRateProvider>) -> Self {
        Self {
            base: base.into().to_ascii_uppercase(),
            inner,
        }
    }
}

impl ExchangeRateProvider for BaseCurrencyProvider {
    fn get_exchange_rate(&self, source: &str, target: &str) -> MoneyResult<Fraction> {
        let source_u = source.to_ascii_uppercase();
        let target_u = target.to_ascii_uppercase();

        if source_u == self.base {
            return self.inner.get_exchange_rate(source, target);
        }
        if target_u == self.base {
            let rate = self.inner.get_exchange_rate(target, source)?;
            return reciprocal(&rate);
        }
        let to_target = self.inner.get_exchange_rate(&self.base, target)?;
        let to_source = self.inner.get_exchange_rate(&self.base, source)?;
        to_target.div(&to_source)
    }
}

fn reciprocal(rate: &Fraction) -> MoneyResult<Fraction> {
    Fraction::new(rate.denom.clone(), rate.numer.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::ConfigurableProvider;
    use num_bigint::BigInt;
    use num_traits::One;

    fn rate(n: i64, d: i64) -> Fraction {
        Fraction::new(BigInt::from(n), BigInt::from(d)).unwrap()
    }

    #[test]
    fn pass_through_when_source_is_base() {
        let underlying = ConfigurableProvider::new();
        underlying.set_rate("USD", "EUR", rate(85, 100));
        let provider = BaseCurrencyProvider::new("USD", Arc::new(underlying));
        let got = provider.get_exchange_rate("USD", "EUR").unwrap();
        assert_eq!(got, rate(85, 100));
    }

    #[test]
    fn reciprocal_when_target_is_base() {
        let underlying = ConfigurableProvider::new();
        underlying.set_rate("USD", "EUR", rate(85, 100));
        let provider = BaseCurrencyProvider::new("USD", Arc::new(underlying));
        let got = provider.get_exchange_rate("EUR", "USD").unwrap();
        assert_eq!(got.simplified(), rate(100, 85).simplified());
    }

    #[test]
    fn cross_rate_divides_through_base() {
        let underlying = ConfigurableProvider::new();
        underlying.set_rate("USD", "EUR", rate(85, 100));
        underlying.set_rate("USD", "GBP", rate(75, 100));
        let provider = BaseCurrencyProvider::new("USD", Arc::new(underlying));
        let got = provider.get_exchange_rate("EUR", "GBP").unwrap();
        // (USD->GBP) / (USD->EUR) = 0.75 / 0.85
        assert_eq!(got.simplified(), rate(75, 85).simplified());
    }

    #[test]
    fn reciprocity_is_exact() {
        let underlying = ConfigurableProvider::new();
        underlying.set_rate("USD", "EUR", rate(85, 100));
        let provider = BaseCurrencyProvider::new("USD", Arc::new(underlying));
        let fwd = provider.get_exchange_rate("USD", "EUR").unwrap();
        let back = provider.get_exchange_rate("EUR", "USD").unwrap();
        let product = fwd.mul(&back).simplified();
        assert_eq!(product.numer, BigInt::one());
        assert_eq!(product.denom, BigInt::one());
    }
}
