//! Filter validation and value quoting.

use crate::builder::reject;
use querysample_core::{CanonicalColumnType, FilterOperator, FilterSpec};
use querysample_error::{SampleBuildErrorKind, SampleBuildResult};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::debug;

/// Quotes a caller-supplied value as a single-quoted SQL string literal.
///
/// The value is escaped with JSON string rules (backslashes, double quotes and
/// control characters) and embedded single quotes are then doubled. Every
/// backslash in the output is already paired, so the literal cannot be closed
/// early whether or not the engine treats backslash as an escape character.
///
/// # Examples
///
/// ```
/// use querysample::quote_string_literal;
///
/// assert_eq!(quote_string_literal("O'Brien"), "'O''Brien'");
/// assert_eq!(quote_string_literal("a\\b\n"), r"'a\\b\n'");
/// ```
pub fn quote_string_literal(value: &str) -> String {
    let encoded = serde_json::Value::String(value.to_owned()).to_string();
    let inner = encoded
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(&encoded);
    format!("'{}'", inner.replace('\'', "''"))
}

// ASCII digits only; Unicode numerals would otherwise be emitted unquoted.
fn is_unsigned_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Formats a comparison value according to the column's canonical type.
fn format_value(column_type: CanonicalColumnType, value: &str) -> SampleBuildResult<String> {
    match column_type {
        CanonicalColumnType::Number => {
            if is_unsigned_digits(value) {
                Ok(value.to_string())
            } else {
                Err(reject(SampleBuildErrorKind::InvalidNumericValue(
                    value.to_string(),
                )))
            }
        }
        CanonicalColumnType::Boolean => match value {
            "true" | "false" => Ok(value.to_string()),
            _ => Err(reject(SampleBuildErrorKind::InvalidBooleanValue(
                value.to_string(),
            ))),
        },
        CanonicalColumnType::String
        | CanonicalColumnType::Composite
        | CanonicalColumnType::Unknown => Ok(quote_string_literal(value)),
    }
}

/// Validates a filter against the table's columns and renders it.
///
/// The column must exist and the operator must be one of
/// [`FilterOperator`]. For value-taking operators the value is checked and
/// quoted by column type; null checks drop the value entirely.
pub fn filter_predicate(
    filter: &FilterSpec,
    column_types: &HashMap<String, CanonicalColumnType>,
) -> SampleBuildResult<String> {
    let column = filter.column_name();
    let Some(&column_type) = column_types.get(column) else {
        return Err(reject(SampleBuildErrorKind::InvalidFilterColumn(
            column.clone(),
        )));
    };

    let operator = FilterOperator::from_str(filter.operator()).map_err(|_| {
        reject(SampleBuildErrorKind::InvalidFilterOperator(
            filter.operator().clone(),
        ))
    })?;

    let predicate = if operator.takes_value() {
        let value = format_value(column_type, filter.value())?;
        format!("{column} {operator} {value}")
    } else {
        format!("{column} {operator}")
    };
    debug!(%column_type, %operator, "Resolved filter predicate");
    Ok(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types() -> HashMap<String, CanonicalColumnType> {
        HashMap::from([
            ("name".to_string(), CanonicalColumnType::String),
            ("age".to_string(), CanonicalColumnType::Number),
            ("active".to_string(), CanonicalColumnType::Boolean),
            ("payload".to_string(), CanonicalColumnType::Composite),
            ("mystery".to_string(), CanonicalColumnType::Unknown),
        ])
    }

    fn kind_of(filter: FilterSpec) -> SampleBuildErrorKind {
        filter_predicate(&filter, &types())
            .unwrap_err()
            .kind()
            .clone()
    }

    /// Byte index of the quote that closes the literal opened at byte 0.
    ///
    /// A doubled quote is an escaped quote under both rule sets; with
    /// `backslash_escapes` a backslash also escapes the next byte.
    fn closing_quote(sql: &str, backslash_escapes: bool) -> Option<usize> {
        let bytes = sql.as_bytes();
        let mut i = 1;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' if backslash_escapes => i += 2,
                b'\'' if bytes.get(i + 1) == Some(&b'\'') => i += 2,
                b'\'' => return Some(i),
                _ => i += 1,
            }
        }
        None
    }

    #[test]
    fn test_quote_doubles_single_quote() {
        assert_eq!(quote_string_literal("O'Brien"), "'O''Brien'");
        assert_eq!(quote_string_literal("' OR 1=1 --"), "''' OR 1=1 --'");
    }

    #[test]
    fn test_quote_escapes_backslash_before_quote() {
        assert_eq!(quote_string_literal(r"\'"), r"'\\'''");
    }

    #[test]
    fn test_literal_closes_only_at_end_under_both_quote_rules() {
        for value in [
            "O'Brien",
            "' OR 1=1 --",
            r"\' OR 1=1 --",
            r"x\'; DROP TABLE t; --",
            r"\",
            r"\\'",
            "''",
            "é'\u{7f}'",
        ] {
            let quoted = quote_string_literal(value);
            let end = quoted.len() - 1;
            assert_eq!(closing_quote(&quoted, false), Some(end), "standard: {quoted}");
            assert_eq!(closing_quote(&quoted, true), Some(end), "backslash: {quoted}");
        }
    }

    #[test]
    fn test_quote_leaves_non_ascii_and_delete_unescaped() {
        assert_eq!(quote_string_literal("café\u{7f}"), "'café\u{7f}'");
    }

    #[test]
    fn test_quote_json_escapes() {
        assert_eq!(quote_string_literal("say \"hi\""), r#"'say \"hi\"'"#);
        assert_eq!(quote_string_literal("tab\there"), r"'tab\there'");
        assert_eq!(quote_string_literal("\u{1}"), r"'\u0001'");
        assert_eq!(quote_string_literal(""), "''");
    }

    #[test]
    fn test_number_filter() {
        assert_eq!(
            filter_predicate(&FilterSpec::new("age", "=", "42"), &types()).unwrap(),
            "age = 42"
        );
        assert_eq!(
            kind_of(FilterSpec::new("age", "=", "abc")),
            SampleBuildErrorKind::InvalidNumericValue("abc".to_string())
        );
    }

    #[test]
    fn test_number_filter_rejects_sign_decimal_and_empty() {
        for value in ["-1", "1.5", "", " 1", "1e3", "٣", "½", "１２"] {
            assert!(matches!(
                kind_of(FilterSpec::new("age", "!=", value)),
                SampleBuildErrorKind::InvalidNumericValue(_)
            ));
        }
    }

    #[test]
    fn test_boolean_filter() {
        assert_eq!(
            filter_predicate(&FilterSpec::new("active", "!=", "false"), &types()).unwrap(),
            "active != false"
        );
        assert_eq!(
            kind_of(FilterSpec::new("active", "=", "TRUE")),
            SampleBuildErrorKind::InvalidBooleanValue("TRUE".to_string())
        );
    }

    #[test]
    fn test_string_like_filter() {
        assert_eq!(
            filter_predicate(&FilterSpec::new("name", "LIKE", "%bob%"), &types()).unwrap(),
            "name LIKE '%bob%'"
        );
    }

    #[test]
    fn test_composite_and_unknown_are_quoted() {
        assert_eq!(
            filter_predicate(&FilterSpec::new("payload", "=", "x"), &types()).unwrap(),
            "payload = 'x'"
        );
        assert_eq!(
            filter_predicate(&FilterSpec::new("mystery", "=", "1"), &types()).unwrap(),
            "mystery = '1'"
        );
    }

    #[test]
    fn test_null_checks_drop_value() {
        assert_eq!(
            filter_predicate(&FilterSpec::new("age", "IS NULL", "abc"), &types()).unwrap(),
            "age IS NULL"
        );
        assert_eq!(
            filter_predicate(&FilterSpec::new("active", "IS NOT NULL", ""), &types()).unwrap(),
            "active IS NOT NULL"
        );
    }

    #[test]
    fn test_unknown_column_checked_before_operator() {
        assert_eq!(
            kind_of(FilterSpec::new("nope", ">", "1")),
            SampleBuildErrorKind::InvalidFilterColumn("nope".to_string())
        );
    }

    #[test]
    fn test_unknown_operator() {
        assert_eq!(
            kind_of(FilterSpec::new("age", ">", "1")),
            SampleBuildErrorKind::InvalidFilterOperator(">".to_string())
        );
        assert!(matches!(
            kind_of(FilterSpec::new("name", "like", "a")),
            SampleBuildErrorKind::InvalidFilterOperator(_)
        ));
    }
}
