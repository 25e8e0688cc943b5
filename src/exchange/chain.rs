//! An ordered fallback list: tries each provider in turn, returns the
//! first success, and propagates only the last failure if all of them
//! miss. Non-terminal failures are swallowed, not surfaced.

use std::sync::{Arc, RwLock};

use crate::error::{MoneyError, MoneyResult};
use crate::fraction::Fraction;

use super::ExchangeRateProvider;

#[derive(Default)]
pub struct ChainProvider {
    providers: RwLock<Vec<Arc<dyn ExchangeRateProvider>>>,
}

impl ChainProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, provider: Arc<dyn ExchangeRateProvider>) {
        self.providers.write().unwrap().push(provider);
    }

    /// Removes the provider at `index`, if any. Returns it so the caller
    /// can decide whether the removal mattered.
    pub fn remove_at(&self, index: usize) -> Option<Arc<dyn ExchangeRateProvider>> {
        let mut providers = self.providers.write().unwrap();
        if index < providers.len() {
            Some(providers.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.providers.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ExchangeRateProvider for ChainProvider {
    fn get_exchange_rate(&self, source: &str, target: &str) -> MoneyResult<Fraction> {
        let providers = self.providers.read().unwrap();
        let mut last_err = None;
        for provider in providers.iter() {
            match provider.get_exchange_rate(source, target) {
                Ok(rate) => return Ok(rate),
                Err(err) => {
                    tracing::debug!(%source, %target, %err, "chain provider fell through");
                    last_err = Some(err);
                }
            }
        }
        Err(last_err.unwrap_or_else(|| MoneyError::conversion(source, target)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    struct FailingProvider;
    impl ExchangeRateProvider for FailingProvider {
        fn get_exchange_rate(&self, source: &str, target: &str) -> MoneyResult<Fraction> {
            Err(MoneyError::conversion(source, target))
        }
    }

    struct FixedRateProvider(Fraction);
    impl ExchangeRateProvider for FixedRateProvider {
        fn get_exchange_rate(&self, _source: &str, _target: &str) -> MoneyResult<Fraction> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn returns_first_success() {
        let chain = ChainProvider::new();
        chain.add(Arc::new(FailingProvider));
        chain.add(Arc::new(FixedRateProvider(
            Fraction::new(BigInt::from(11), BigInt::from(10)).unwrap(),
        )));
        let rate = chain.get_exchange_rate("EUR", "USD").unwrap();
        assert_eq!(rate.numer, BigInt::from(11));
    }

    #[test]
    fn all_failing_propagates_last_error() {
        let chain = ChainProvider::new();
        chain.add(Arc::new(FailingProvider));
        chain.add(Arc::new(FailingProvider));
        assert!(matches!(
            chain.get_exchange_rate("EUR", "USD"),
            Err(MoneyError::CurrencyConversion { .. })
        ));
    }

    #[test]
    fn empty_chain_fails() {
        let chain = ChainProvider::new();
        assert!(chain.get_exchange_rate("EUR", "USD").is_err());
    }
}
