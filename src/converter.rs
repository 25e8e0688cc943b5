//! `CurrencyConverter`: bridges a container of amounts (`FixedMoney`,
//! `RationalMoney`, or `MoneyBag`) to a target currency via an
//! [`ExchangeRateProvider`].

use std::sync::Arc;

use crate::bag::AmountsSource;
use crate::context::Context;
use crate::currency::CurrencyLike;
use crate::error::MoneyResult;
use crate::exchange::ExchangeRateProvider;
use crate::fraction::Fraction;
use crate::money::FixedMoney;
use crate::rational::RationalMoney;
use crate::rounding::RoundingMode;

pub struct CurrencyConverter {
    provider: Arc<dyn ExchangeRateProvider>,
}

impl CurrencyConverter {
    pub fn new(provider: Arc<dyn ExchangeRateProvider>) -> Self {
        Self { provider }
    }

    /// Iterate `container`'s per-currency amounts; multiply each by the
    /// source→target rate (left untouched if already in the target
    /// currency) and accumulate, exactly, into a `RationalMoney`.
    pub fn convert_to_rational(
        &self,
        container: &dyn AmountsSource,
        currency: impl CurrencyLike,
    ) -> MoneyResult<RationalMoney> {
        let target = currency.resolve()?;
        let mut total = Fraction::zero();
        for (source_alpha, amount) in container.amounts() {
            if source_alpha.eq_ignore_ascii_case(target.alpha()) {
                total = total.add(&amount);
            } else {
                let rate = self
                    .provider
                    .get_exchange_rate(&source_alpha, target.alpha())?;
                total = total.add(&amount.mul(&rate));
            }
        }
        Ok(RationalMoney::from_fraction(total, target))
    }

    pub fn convert(
        &self,
        container: &dyn AmountsSource,
        currency: impl CurrencyLike,
        context: Context,
        rounding: RoundingMode,
    ) -> MoneyResult<FixedMoney> {
        self.convert_to_rational(container, currency)?
            .to(context, rounding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bag::MoneyBag;
    use crate::exchange::ConfigurableProvider;
    use num_bigint::BigInt;

    fn rate(n: i64, d: i64) -> Fraction {
        Fraction::new(BigInt::from(n), BigInt::from(d)).unwrap()
    }

    #[test]
    fn converts_single_money_matching_spec_example() {
        let provider = ConfigurableProvider::new();
        provider.set_rate("EUR", "USD", rate(11, 10));
        let converter = CurrencyConverter::new(Arc::new(provider));

        let eur = FixedMoney::of("1.23", "EUR").unwrap();
        let usd = converter
            .convert(&eur, "USD", Context::Default, RoundingMode::Up)
            .unwrap();
        assert_eq!(usd.to_string(), "USD 1.36");
    }

    #[test]
    fn same_currency_skips_the_provider() {
        let provider = ConfigurableProvider::new();
        let converter = CurrencyConverter::new(Arc::new(provider));
        let usd = FixedMoney::of("10.00", "USD").unwrap();
        let converted = converter
            .convert(&usd, "USD", Context::Default, RoundingMode::Unnecessary)
            .unwrap();
        assert_eq!(converted, usd);
    }

    #[test]
    fn converts_a_bag_summing_all_currencies() {
        let provider = ConfigurableProvider::new();
        provider.set_rate("EUR", "USD", rate(11, 10));
        let converter = CurrencyConverter::new(Arc::new(provider));

        let mut bag = MoneyBag::new();
        bag.add(&FixedMoney::of("10.00", "USD").unwrap());
        bag.add(&FixedMoney::of("10.00", "EUR").unwrap());

        let total = converter
            .convert(&bag, "USD", Context::Default, RoundingMode::Unnecessary)
            .unwrap();
        assert_eq!(total.to_string(), "USD 21.00");
    }

    #[test]
    fn missing_rate_propagates_provider_failure() {
        let provider = ConfigurableProvider::new();
        let converter = CurrencyConverter::new(Arc::new(provider));
        let eur = FixedMoney::of("1.00", "EUR").unwrap();
        assert!(converter
            .convert(&eur, "USD", Context::Default, RoundingMode::Unnecessary)
            .is_err());
    }
}
