//! The table-backed ("PDO-style") provider: a query-based rate lookup
//! against an external table. This crate issues no SQL of its own — a
//! [`RateQuery`] implementation owns the actual store and just answers a
//! positional-parameter query.

use crate::error::{MoneyError, MoneyResult};
use crate::fraction::Fraction;

use super::ExchangeRateProvider;

/// A positional-parameter query contract: `query` returns the first
/// matching row's rate, or `None` if nothing matched.
pub trait RateQuery: Send + Sync {
    fn query(&self, sql: &str, params: &[String]) -> MoneyResult<Option<Fraction>>;
}

enum ColumnOrFixed {
    Column(String),
    Fixed(String),
}

/// Validated configuration for a [`TableBackedProvider`]: table name,
/// rate column, and exactly one of column/fixed-code for each side.
pub struct TableConfig {
    table: String,
    rate_column: String,
    source: ColumnOrFixed,
    target: ColumnOrFixed,
    extra_params: Vec<(String, String)>,
}

impl TableConfig {
    pub fn build(table: impl Into<String>, rate_column: impl Into<String>) -> TableConfigBuilder {
        TableConfigBuilder {
            table: table.into(),
            rate_column: rate_column.into(),
            source_column: None,
            source_code: None,
            target_column: None,
            target_code: None,
            extra_params: Vec::new(),
        }
    }
}

pub struct TableConfigBuilder {
    table: String,
    rate_column: String,
    source_column: Option<String>,
    source_code: Option<String>,
    target_column: Option<String>,
    target_code: Option<String>,
    extra_params: Vec<(String, String)>,
}

impl TableConfigBuilder {
    pub fn source_column(mut self, column: impl Into<String>) -> Self {
        self.source_column = Some(column.into());
        self
    }

    pub fn source_code(mut self, code: impl Into<String>) -> Self {
        self.source_code = Some(code.into());
        self
    }

    pub fn target_column(mut self, column: impl Into<String>) -> Self {
        self.target_column = Some(column.into());
        self
    }

    pub fn target_code(mut self, code: impl Into<String>) -> Self {
        self.target_code = Some(code.into());
        self
    }

    pub fn extra_param(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_params.push((column.into(), value.into()));
        self
    }

    /// Validate and produce the immutable config: exactly one of
    /// column/code per side, and not both sides fixed.
    pub fn finish(self) -> MoneyResult<TableConfig> {
        let source = one_of("source", self.source_column, self.source_code)?;
        let target = one_of("target", self.target_column, self.target_code)?;
        if let (ColumnOrFixed::Fixed(_), ColumnOrFixed::Fixed(_)) = (&source, &target) {
            return Err(MoneyError::InvalidArgument(
                "table-backed provider: source and target cannot both be fixed codes".into(),
            ));
        }
        Ok(TableConfig {
            table: self.table,
            rate_column: self.rate_column,
            source,
            target,
            extra_params: self.extra_params,
        })
    }
}

fn one_of(
    label: &str,
    column: Option<String>,
    code: Option<String>,
) -> MoneyResult<ColumnOrFixed> {
    match (column, code) {
        (Some(c), None) => Ok(ColumnOrFixed::Column(c)),
        (None, Some(c)) => Ok(ColumnOrFixed::Fixed(c)),
        (Some(_), Some(_)) => Err(MoneyError::InvalidArgument(format!(
            "table-backed provider: exactly one of {label}-column/{label}-code is required, got both"
        ))),
        (None, None) => Err(MoneyError::InvalidArgument(format!(
            "table-backed provider: exactly one of {label}-column/{label}-code is required, got neither"
        ))),
    }
}

/// A rate provider backed by an external table, queried through
/// whatever [`RateQuery`] the caller supplies.
pub struct TableBackedProvider<Q: RateQuery> {
    config: TableConfig,
    query: Q,
}

impl<Q: RateQuery> TableBackedProvider<Q> {
    pub fn new(config: TableConfig, query: Q) -> Self {
        Self { config, query }
    }
}

impl<Q: RateQuery> ExchangeRateProvider for TableBackedProvider<Q> {
    fn get_exchange_rate(&self, source: &str, target: &str) -> MoneyResult<Fraction> {
        let mut clauses = Vec::new();
        let mut params = Vec::new();

        match &self.config.source {
            ColumnOrFixed::Column(col) => {
                clauses.push(format!("{col} = ?"));
                params.push(source.to_string());
            }
            ColumnOrFixed::Fixed(code) => {
                if !code.eq_ignore_ascii_case(source) {
                    return Err(MoneyError::conversion(source, target));
                }
            }
        }
        match &self.config.target {
            ColumnOrFixed::Column(col) => {
                clauses.push(format!("{col} = ?"));
                params.push(target.to_string());
            }
            ColumnOrFixed::Fixed(code) => {
                if !code.eq_ignore_ascii_case(target) {
                    return Err(MoneyError::conversion(source, target));
                }
            }
        }
        for (column, value) in &self.config.extra_params {
            clauses.push(format!("{column} = ?"));
            params.push(value.clone());
        }

        let sql = format!(
            "SELECT {} FROM {} WHERE {}",
            self.config.rate_column,
            self.config.table,
            clauses.join(" AND ")
        );

        self.query
            .query(&sql, &params)?
            .ok_or_else(|| MoneyError::conversion(source, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use std::sync::Mutex;

    struct RecordingQuery {
        rate: Option<Fraction>,
        seen: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl RateQuery for RecordingQuery {
        fn query(&self, sql: &str, params: &[String]) -> MoneyResult<Option<Fraction>> {
            self.seen
                .lock()
                .unwrap()
                .push((sql.to_string(), params.to_vec()));
            Ok(self.rate.clone())
        }
    }

    #[test]
    fn requires_exactly_one_of_column_or_code_per_side() {
        let err = TableConfig::build("rates", "rate")
            .source_column("src")
            .source_code("EUR")
            .target_column("dst")
            .finish()
            .unwrap_err();
        assert!(matches!(err, MoneyError::InvalidArgument(_)));

        let err = TableConfig::build("rates", "rate")
            .target_column("dst")
            .finish()
            .unwrap_err();
        assert!(matches!(err, MoneyError::InvalidArgument(_)));
    }

    #[test]
    fn rejects_both_sides_fixed() {
        let err = TableConfig::build("rates", "rate")
            .source_code("EUR")
            .target_code("USD")
            .finish()
            .unwrap_err();
        assert!(matches!(err, MoneyError::InvalidArgument(_)));
    }

    #[test]
    fn queries_with_positional_params_for_both_columns() {
        let config = TableConfig::build("rates", "rate")
            .source_column("source_code")
            .target_column("target_code")
            .finish()
            .unwrap();
        let query = RecordingQuery {
            rate: Some(Fraction::new(BigInt::from(11), BigInt::from(10)).unwrap()),
            seen: Mutex::new(Vec::new()),
        };
        let provider = TableBackedProvider::new(config, query);
        let rate = provider.get_exchange_rate("EUR", "USD").unwrap();
        assert_eq!(rate.numer, BigInt::from(11));

        let seen = provider.query.seen.lock().unwrap();
        assert_eq!(seen[0].1, vec!["EUR".to_string(), "USD".to_string()]);
    }

    #[test]
    fn fixed_source_code_short_circuits_mismatch() {
        let config = TableConfig::build("rates", "rate")
            .source_code("EUR")
            .target_column("target_code")
            .finish()
            .unwrap();
        let query = RecordingQuery {
            rate: Some(Fraction::new(BigInt::from(11), BigInt::from(10)).unwrap()),
            seen: Mutex::new(Vec::new()),
        };
        let provider = TableBackedProvider::new(config, query);
        assert!(provider.get_exchange_rate("GBP", "USD").is_err());
    }

    #[test]
    fn no_match_is_currency_conversion_error() {
        let config = TableConfig::build("rates", "rate")
            .source_column("source_code")
            .target_column("target_code")
            .finish()
            .unwrap();
        let query = RecordingQuery {
            rate: None,
            seen: Mutex::new(Vec::new()),
        };
        let provider = TableBackedProvider::new(config, query);
        assert!(matches!(
            provider.get_exchange_rate("EUR", "USD"),
            Err(MoneyError::CurrencyConversion { .. })
        ));
    }
}
