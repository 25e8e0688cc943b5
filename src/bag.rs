//! `MoneyBag`: a mutable, per-currency accumulator. Unlike `FixedMoney`
//! and `RationalMoney` it never fails on currency mismatch — by design it
//! holds many currencies at once.

use std::collections::hash_map::Iter;
use std::collections::HashMap;

use crate::fraction::Fraction;
use crate::money::FixedMoney;
use crate::rational::RationalMoney;

/// Anything that can hand `MoneyBag` a per-currency amounts map: a single
/// `FixedMoney`/`RationalMoney` (one entry, keyed by its own alpha code
/// verbatim) or another `MoneyBag` (its whole map).
pub trait AmountsSource {
    fn amounts(&self) -> Vec<(String, Fraction)>;
}

impl AmountsSource for FixedMoney {
    fn amounts(&self) -> Vec<(String, Fraction)> {
        vec![(self.currency().alpha().to_string(), self.as_fraction())]
    }
}

impl AmountsSource for RationalMoney {
    fn amounts(&self) -> Vec<(String, Fraction)> {
        vec![(self.currency().alpha().to_string(), self.fraction().clone())]
    }
}

impl AmountsSource for MoneyBag {
    fn amounts(&self) -> Vec<(String, Fraction)> {
        self.amounts
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// A mapping from currency alpha code to an exact rational amount. Keys
/// are whatever alpha code the caller supplied (ISO or custom); a missing
/// key reads as zero rather than an error.
#[derive(Debug, Clone, Default)]
pub struct MoneyBag {
    amounts: HashMap<String, Fraction>,
}

impl MoneyBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored amount for `currency`, or zero if nothing's accumulated
    /// under that key yet. Looked up verbatim — `add`/`subtract` key by
    /// whatever alpha code the source currency reports, unnormalized.
    pub fn get_amount_alpha(&self, alpha: &str) -> Fraction {
        self.amounts.get(alpha).cloned().unwrap_or_else(Fraction::zero)
    }

    /// Like [`MoneyBag::get_amount_alpha`], but accepts a numeric currency
    /// code too (resolved to its alpha form via the catalogue first).
    pub fn get_amount_numeric(&self, numeric: i32) -> Fraction {
        let alpha = crate::currency::of(numeric)
            .map(|c| c.alpha().to_string())
            .unwrap_or_else(|| numeric.to_string());
        self.get_amount_alpha(&alpha)
    }

    pub fn get_amounts(&self) -> &HashMap<String, Fraction> {
        &self.amounts
    }

    pub fn iter(&self) -> Iter<'_, String, Fraction> {
        self.amounts.iter()
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Accumulate every currency in `source` into this bag.
    pub fn add(&mut self, source: &dyn AmountsSource) {
        for (key, amount) in source.amounts() {
            let entry = self.amounts.entry(key).or_insert_with(Fraction::zero);
            *entry = entry.add(&amount);
        }
    }

    /// Subtract every currency in `source` from this bag.
    pub fn subtract(&mut self, source: &dyn AmountsSource) {
        for (key, amount) in source.amounts() {
            let entry = self.amounts.entry(key).or_insert_with(Fraction::zero);
            *entry = entry.sub(&amount);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_currency_reads_as_zero() {
        let bag = MoneyBag::new();
        assert!(bag.get_amount_alpha("USD").is_zero());
    }

    #[test]
    fn add_accumulates_per_currency() {
        let mut bag = MoneyBag::new();
        let usd = FixedMoney::of(10, "USD").unwrap();
        let eur = FixedMoney::of("5.50", "EUR").unwrap();
        bag.add(&usd);
        bag.add(&eur);
        bag.add(&usd);

        assert_eq!(bag.get_amount_alpha("USD"), Fraction::from_bigdecimal(
            &"20".parse().unwrap()
        ));
        assert_eq!(
            bag.get_amount_alpha("EUR"),
            Fraction::from_bigdecimal(&"5.50".parse().unwrap())
        );
    }

    #[test]
    fn subtract_accumulates_negative() {
        let mut bag = MoneyBag::new();
        let usd = FixedMoney::of(10, "USD").unwrap();
        bag.subtract(&usd);
        assert!(bag.get_amount_alpha("USD").is_negative());
    }

    #[test]
    fn numeric_code_resolves_through_catalogue() {
        let mut bag = MoneyBag::new();
        bag.add(&FixedMoney::of(10, "USD").unwrap());
        assert_eq!(bag.get_amount_numeric(840), bag.get_amount_alpha("USD"));
    }

    #[test]
    fn accumulates_from_another_bag() {
        let mut a = MoneyBag::new();
        a.add(&FixedMoney::of(10, "USD").unwrap());
        let mut b = MoneyBag::new();
        b.add(&a);
        b.add(&a);
        assert_eq!(
            b.get_amount_alpha("USD"),
            Fraction::from_bigdecimal(&"20".parse().unwrap())
        );
    }

    #[test]
    fn custom_currency_key_is_not_catalogued() {
        let mut bag = MoneyBag::new();
        let xcd = crate::currency::Currency::new("XBT", -1, "bitcoin", 8);
        let custom = FixedMoney::of_with(
            "1.5",
            &xcd,
            crate::context::Context::Default,
            crate::rounding::RoundingMode::Unnecessary,
        )
        .unwrap();
        bag.add(&custom);
        assert!(!bag.get_amount_alpha("XBT").is_zero());
    }
}
