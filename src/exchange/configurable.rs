//! An in-memory, caller-populated rate table — the simplest provider in
//! the hierarchy and the one the others typically wrap or fall back to.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{MoneyError, MoneyResult};
use crate::fraction::Fraction;

use super::ExchangeRateProvider;

#[derive(Default)]
pub struct ConfigurableProvider {
    rates: RwLock<HashMap<(String, String), Fraction>>,
}

impl ConfigurableProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_rate(&self, source: &str, target: &str, rate: Fraction) {
        self.rates.write().unwrap().insert(
            (source.to_ascii_uppercase(), target.to_ascii_uppercase()),
            rate,
        );
    }
}

impl ExchangeRateProvider for ConfigurableProvider {
    fn get_exchange_rate(&self, source: &str, target: &str) -> MoneyResult<Fraction> {
        let key = (source.to_ascii_uppercase(), target.to_ascii_uppercase());
        self.rates
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| MoneyError::conversion(source, target))
    }
}
