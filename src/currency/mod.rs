//! Currency metadata and the ISO-4217 catalogue.

mod catalogue;

pub use catalogue::{available_currencies, is_supported, of, of_country};

use std::collections::HashMap;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use crate::error::{MoneyError, MoneyResult};

/// First-touch registry for currencies built via [`Currency::new`] that
/// aren't in the ISO catalogue, mirroring `catalogue::registry`'s
/// `OnceLock` singleton — keyed by alpha code so resolving the same custom
/// currency repeatedly reuses one leaked `'static` instance instead of
/// growing without bound.
fn custom_registry() -> &'static RwLock<HashMap<String, &'static Currency>> {
    static REGISTRY: OnceLock<RwLock<HashMap<String, &'static Currency>>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

fn resolve_custom(currency: &Currency) -> &'static Currency {
    if let Some(existing) = custom_registry().read().unwrap().get(&currency.alpha) {
        return existing;
    }
    let mut registry = custom_registry().write().unwrap();
    *registry
        .entry(currency.alpha.clone())
        .or_insert_with(|| Box::leak(Box::new(currency.clone())))
}

/// An immutable currency record.
///
/// Catalogued currencies are canonical singletons: [`of`] always hands back
/// a reference into the same static table, so pointer equality happens to
/// hold for them too, but equality itself is defined structurally on the
/// alpha code (see [`Currency::is`]) because custom currencies are never
/// registered and still need to compare sanely.
#[derive(Debug, Clone)]
pub struct Currency {
    alpha: String,
    numeric: i32,
    name: String,
    default_fraction_digits: u32,
}

impl Currency {
    /// Build a currency directly, bypassing the catalogue. Used for custom
    /// and cryptocurrency units that the ISO table doesn't carry.
    pub fn new(
        alpha: impl Into<String>,
        numeric: i32,
        name: impl Into<String>,
        default_fraction_digits: u32,
    ) -> Self {
        Self {
            alpha: alpha.into(),
            numeric,
            name: name.into(),
            default_fraction_digits,
        }
    }

    pub(crate) fn try_new(
        alpha: impl Into<String>,
        numeric: i32,
        name: impl Into<String>,
        default_fraction_digits: i64,
    ) -> MoneyResult<Self> {
        if default_fraction_digits < 0 {
            return Err(MoneyError::InvalidArgument(
                "currency fraction digits must be non-negative".into(),
            ));
        }
        Ok(Self::new(alpha, numeric, name, default_fraction_digits as u32))
    }

    pub fn alpha(&self) -> &str {
        &self.alpha
    }

    pub fn numeric(&self) -> i32 {
        self.numeric
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_fraction_digits(&self) -> u32 {
        self.default_fraction_digits
    }

    /// Matches this currency against an alpha code, a numeric code, or
    /// another currency, by alpha-code equality.
    pub fn is(&self, other: impl CurrencyLike) -> bool {
        other.matches(self)
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.alpha == other.alpha
    }
}

impl Eq for Currency {}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.alpha)
    }
}

/// Anything that can be resolved or compared against a [`Currency`]: an
/// alpha code, a numeric code, or another currency value. Lets
/// `FixedMoney::of`/`Currency::is`/etc. accept whichever is most convenient
/// at the call site without three overloaded methods.
pub trait CurrencyLike {
    fn resolve(&self) -> MoneyResult<&'static Currency>;
    fn matches(&self, currency: &Currency) -> bool;
}

impl CurrencyLike for Currency {
    /// Catalogued currencies resolve to their canonical static entry; a
    /// currency built directly via [`Currency::new`] and absent from the
    /// ISO table resolves through [`resolve_custom`], which leaks and
    /// memoizes one `'static` instance per alpha code rather than a fresh
    /// one on every call.
    fn resolve(&self) -> MoneyResult<&'static Currency> {
        match catalogue::of_alpha(&self.alpha) {
            Ok(found) => Ok(found),
            Err(_) => Ok(resolve_custom(self)),
        }
    }

    fn matches(&self, currency: &Currency) -> bool {
        self.alpha == currency.alpha
    }
}

impl CurrencyLike for &Currency {
    fn resolve(&self) -> MoneyResult<&'static Currency> {
        (*self).clone().resolve()
    }

    fn matches(&self, currency: &Currency) -> bool {
        self.alpha == currency.alpha
    }
}

impl CurrencyLike for &'static Currency {
    fn resolve(&self) -> MoneyResult<&'static Currency> {
        Ok(self)
    }

    fn matches(&self, currency: &Currency) -> bool {
        self.alpha == currency.alpha
    }
}

impl CurrencyLike for str {
    fn resolve(&self) -> MoneyResult<&'static Currency> {
        catalogue::of_alpha(self)
    }

    fn matches(&self, currency: &Currency) -> bool {
        self.eq_ignore_ascii_case(&currency.alpha)
    }
}

impl CurrencyLike for &str {
    fn resolve(&self) -> MoneyResult<&'static Currency> {
        catalogue::of_alpha(self)
    }

    fn matches(&self, currency: &Currency) -> bool {
        self.eq_ignore_ascii_case(&currency.alpha)
    }
}

impl CurrencyLike for String {
    fn resolve(&self) -> MoneyResult<&'static Currency> {
        catalogue::of_alpha(self)
    }

    fn matches(&self, currency: &Currency) -> bool {
        self.eq_ignore_ascii_case(&currency.alpha)
    }
}

impl CurrencyLike for i32 {
    fn resolve(&self) -> MoneyResult<&'static Currency> {
        catalogue::of_numeric(*self)
    }

    fn matches(&self, currency: &Currency) -> bool {
        *self == currency.numeric
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_matches_alpha_numeric_and_currency() {
        let usd = of("USD").unwrap();
        assert!(usd.is("USD"));
        assert!(usd.is("usd"));
        assert!(usd.is(840));
        assert!(usd.is(usd));
        assert!(!usd.is("EUR"));
    }

    #[test]
    fn custom_currency_compares_by_alpha() {
        let a = Currency::new("XCD2", -1, "custom", 2);
        let b = Currency::new("XCD2", -2, "custom, again", 2);
        assert_eq!(a, b);
    }

    #[test]
    fn negative_fraction_digits_rejected() {
        assert!(Currency::try_new("ZZZ", 999, "Invalid", -1).is_err());
    }

    #[test]
    fn custom_currency_resolution_is_memoized() {
        let a = Currency::new("XBT2", -3, "bitcoin", 8).resolve().unwrap();
        let b = Currency::new("XBT2", -3, "bitcoin", 8).resolve().unwrap();
        assert!(std::ptr::eq(a, b));
    }
}
