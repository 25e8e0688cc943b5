//! Memoizes another provider per `(source, target)` pair until
//! [`CachedProvider::invalidate`] is called. A lookup failure from the
//! wrapped provider is never cached — only successes are.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::MoneyResult;
use crate::fraction::Fraction;

use super::ExchangeRateProvider;

pub struct CachedProvider {
    inner: Arc<dyn ExchangeRateProvider>,
    cache: RwLock<HashMap<(String, String), Fraction>>,
}

impl CachedProvider {
    pub fn new(inner: Arc<dyn ExchangeRateProvider>) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn invalidate(&self) {
        self.cache.write().unwrap().clear();
    }
}

impl ExchangeRateProvider for CachedProvider {
    fn get_exchange_rate(&self, source: &str, target: &str) -> MoneyResult<Fraction> {
        let key = (source.to_ascii_uppercase(), target.to_ascii_uppercase());
        if let Some(rate) = self.cache.read().unwrap().get(&key) {
            tracing::trace!(?key, "exchange rate cache hit");
            return Ok(rate.clone());
        }
        let rate = self.inner.get_exchange_rate(source, target)?;
        tracing::debug!(?key, "exchange rate cache miss, fetched from upstream");
        self.cache.write().unwrap().insert(key, rate.clone());
        Ok(rate)
    }
}
