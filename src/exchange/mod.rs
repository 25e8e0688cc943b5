//! `ExchangeRateProvider` and its variants: a configurable in-memory
//! table, a memoizing cache, an ordered fallback chain, a base-currency
//! derivation, and a table-backed ("PDO-style") query provider.

mod base_currency;
mod cached;
mod chain;
mod configurable;
mod table;

pub use base_currency::BaseCurrencyProvider;
pub use cached::CachedProvider;
pub use chain::ChainProvider;
pub use configurable::ConfigurableProvider;
pub use table::{RateQuery, TableBackedProvider, TableConfig, TableConfigBuilder};

use crate::error::MoneyResult;
use crate::fraction::Fraction;

/// Anything that can answer "what's the exchange rate from `source` to
/// `target`?" with an exact rational, or fail with
/// [`crate::error::MoneyError::CurrencyConversion`].
pub trait ExchangeRateProvider: Send + Sync {
    fn get_exchange_rate(&self, source: &str, target: &str) -> MoneyResult<Fraction>;
}
