//! The embedded ISO-4217 dataset and the country-code index, built once and
//! shared for the life of the process.
//!
//! Grounded in the teacher's `CURRENCY_REGISTRY: OnceLock<HashMap<...>>`
//! first-touch pattern, generalized with a second table for
//! `ofCountry` lookups and numeric-code lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::currency::{Currency, CurrencyLike};
use crate::error::{MoneyError, MoneyResult};

struct Entry {
    alpha: &'static str,
    numeric: i32,
    name: &'static str,
    fraction_digits: u32,
    countries: &'static [&'static str],
}

// (alpha, numeric, name, fraction digits, ISO-3166-1 alpha-2 countries using it)
const ENTRIES: &[Entry] = &[
    Entry { alpha: "USD", numeric: 840, name: "US Dollar", fraction_digits: 2, countries: &["US"] },
    Entry { alpha: "EUR", numeric: 978, name: "Euro", fraction_digits: 2, countries: &["DE", "FR", "IT", "ES", "NL", "IE", "PT", "FI", "AT", "BE", "GR", "LU", "SI", "SK", "EE", "LV", "LT", "CY", "MT", "HR"] },
    Entry { alpha: "GBP", numeric: 826, name: "Pound Sterling", fraction_digits: 2, countries: &["GB"] },
    Entry { alpha: "JPY", numeric: 392, name: "Yen", fraction_digits: 0, countries: &["JP"] },
    Entry { alpha: "CHF", numeric: 756, name: "Swiss Franc", fraction_digits: 2, countries: &["CH", "LI"] },
    Entry { alpha: "CAD", numeric: 124, name: "Canadian Dollar", fraction_digits: 2, countries: &["CA"] },
    Entry { alpha: "AUD", numeric: 36, name: "Australian Dollar", fraction_digits: 2, countries: &["AU"] },
    Entry { alpha: "CNY", numeric: 156, name: "Yuan Renminbi", fraction_digits: 2, countries: &["CN"] },
    Entry { alpha: "INR", numeric: 356, name: "Indian Rupee", fraction_digits: 2, countries: &["IN"] },
    Entry { alpha: "KRW", numeric: 410, name: "Won", fraction_digits: 0, countries: &["KR"] },
    Entry { alpha: "BRL", numeric: 986, name: "Brazilian Real", fraction_digits: 2, countries: &["BR"] },
    Entry { alpha: "RUB", numeric: 643, name: "Russian Ruble", fraction_digits: 2, countries: &["RU"] },
    Entry { alpha: "ZAR", numeric: 710, name: "Rand", fraction_digits: 2, countries: &["ZA"] },
    Entry { alpha: "MXN", numeric: 484, name: "Mexican Peso", fraction_digits: 2, countries: &["MX"] },
    Entry { alpha: "SGD", numeric: 702, name: "Singapore Dollar", fraction_digits: 2, countries: &["SG"] },
    Entry { alpha: "NOK", numeric: 578, name: "Norwegian Krone", fraction_digits: 2, countries: &["NO"] },
    Entry { alpha: "SEK", numeric: 752, name: "Swedish Krona", fraction_digits: 2, countries: &["SE"] },
    Entry { alpha: "DKK", numeric: 208, name: "Danish Krone", fraction_digits: 2, countries: &["DK"] },
    Entry { alpha: "PLN", numeric: 985, name: "Zloty", fraction_digits: 2, countries: &["PL"] },
    Entry { alpha: "CZK", numeric: 203, name: "Czech Koruna", fraction_digits: 2, countries: &["CZ"] },
    Entry { alpha: "HUF", numeric: 348, name: "Forint", fraction_digits: 2, countries: &["HU"] },
    Entry { alpha: "ILS", numeric: 376, name: "New Israeli Sheqel", fraction_digits: 2, countries: &["IL"] },
    Entry { alpha: "AED", numeric: 784, name: "UAE Dirham", fraction_digits: 2, countries: &["AE"] },
    Entry { alpha: "SAR", numeric: 682, name: "Saudi Riyal", fraction_digits: 2, countries: &["SA"] },
    Entry { alpha: "TRY", numeric: 949, name: "Turkish Lira", fraction_digits: 2, countries: &["TR"] },
    Entry { alpha: "NZD", numeric: 554, name: "New Zealand Dollar", fraction_digits: 2, countries: &["NZ"] },
    Entry { alpha: "THB", numeric: 764, name: "Baht", fraction_digits: 2, countries: &["TH"] },
    Entry { alpha: "KWD", numeric: 414, name: "Kuwaiti Dinar", fraction_digits: 3, countries: &["KW"] },
];

fn registry() -> &'static HashMap<&'static str, Currency> {
    static REGISTRY: OnceLock<HashMap<&'static str, Currency>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        tracing::debug!(entries = ENTRIES.len(), "initializing currency catalogue");
        ENTRIES
            .iter()
            .map(|e| {
                (
                    e.alpha,
                    Currency::new(e.alpha, e.numeric, e.name, e.fraction_digits),
                )
            })
            .collect()
    })
}

fn numeric_index() -> &'static HashMap<i32, &'static str> {
    static INDEX: OnceLock<HashMap<i32, &'static str>> = OnceLock::new();
    INDEX.get_or_init(|| ENTRIES.iter().map(|e| (e.numeric, e.alpha)).collect())
}

fn country_index() -> &'static HashMap<&'static str, &'static str> {
    static INDEX: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut map: HashMap<&'static str, &'static str> = HashMap::new();
        let mut ambiguous: HashMap<&'static str, u32> = HashMap::new();
        for entry in ENTRIES {
            for &country in entry.countries {
                *ambiguous.entry(country).or_insert(0) += 1;
                map.insert(country, entry.alpha);
            }
        }
        map.retain(|country, _| ambiguous.get(country) == Some(&1));
        map
    })
}

/// Resolve an alpha code, numeric code, or `Currency` to the canonical
/// catalogued entry. Fails with [`MoneyError::UnknownCurrency`] if the code
/// isn't catalogued.
pub fn of(code: impl CurrencyLike) -> MoneyResult<&'static Currency> {
    code.resolve()
}

pub(crate) fn of_alpha(alpha: &str) -> MoneyResult<&'static Currency> {
    registry()
        .get(alpha.to_ascii_uppercase().as_str())
        .ok_or_else(|| MoneyError::UnknownCurrency(alpha.to_string()))
}

pub(crate) fn of_numeric(numeric: i32) -> MoneyResult<&'static Currency> {
    numeric_index()
        .get(&numeric)
        .and_then(|alpha| registry().get(alpha))
        .ok_or_else(|| MoneyError::UnknownCurrency(numeric.to_string()))
}

/// Resolve an ISO-3166-1 alpha-2 country code to its currency. Fails if the
/// country has no active currency in the catalogue, or more than one.
pub fn of_country(iso2: &str) -> MoneyResult<&'static Currency> {
    country_index()
        .get(iso2.to_ascii_uppercase().as_str())
        .and_then(|alpha| registry().get(alpha))
        .ok_or_else(|| MoneyError::UnknownCurrency(format!("country:{iso2}")))
}

/// All catalogued currencies, alpha code to `Currency`.
pub fn available_currencies() -> &'static HashMap<&'static str, Currency> {
    registry()
}

/// Whether `alpha` names a catalogued currency.
pub fn is_supported(alpha: &str) -> bool {
    registry().contains_key(alpha.to_ascii_uppercase().as_str())
}
