//! Normalisation of dialect-specific column types.
//!
//! Types are matched on their leading alphabetic word only, so parameters and
//! modifiers (`varchar(255)`, `decimal(10,2)`, `array<int>`,
//! `timestamp with time zone`) never affect the result.

use querysample_core::{CanonicalColumnType, TableMetadata};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, trace};

use CanonicalColumnType::{Boolean, Composite, Number, String as Text};

/// Built-in type names covering MySQL, PostgreSQL, Presto/Trino, Hive/Spark,
/// BigQuery and Snowflake.
const BUILTIN_TYPES: &[(&str, CanonicalColumnType)] = &[
    // Boolean
    ("boolean", Boolean),
    ("bool", Boolean),
    // Integers
    ("int", Number),
    ("integer", Number),
    ("tinyint", Number),
    ("smallint", Number),
    ("mediumint", Number),
    ("bigint", Number),
    ("byteint", Number),
    ("long", Number),
    ("short", Number),
    ("serial", Number),
    ("smallserial", Number),
    ("bigserial", Number),
    // Floats
    ("real", Number),
    ("numeric", Number),
    ("decimal", Number),
    ("double", Number),
    ("float", Number),
    ("number", Number),
    ("bignumeric", Number),
    ("money", Number),
    // Time
    ("date", Text),
    ("datetime", Text),
    ("time", Text),
    ("timestamp", Text),
    ("timestamptz", Text),
    ("timetz", Text),
    ("interval", Text),
    ("year", Text),
    // String
    ("string", Text),
    ("char", Text),
    ("character", Text),
    ("nchar", Text),
    ("varchar", Text),
    ("nvarchar", Text),
    ("text", Text),
    ("tinytext", Text),
    ("mediumtext", Text),
    ("longtext", Text),
    ("uuid", Text),
    ("enum", Text),
    ("set", Text),
    // Binary
    ("blob", Text),
    ("tinyblob", Text),
    ("mediumblob", Text),
    ("longblob", Text),
    ("binary", Text),
    ("varbinary", Text),
    ("bytea", Text),
    ("bytes", Text),
    // Composite
    ("json", Composite),
    ("jsonb", Composite),
    ("array", Composite),
    ("map", Composite),
    ("row", Composite),
    ("uniontype", Composite),
    ("struct", Composite),
    ("record", Composite),
    ("object", Composite),
    ("variant", Composite),
];

static BUILTIN_LOOKUP: LazyLock<HashMap<&'static str, CanonicalColumnType>> =
    LazyLock::new(|| BUILTIN_TYPES.iter().copied().collect());

/// Lower-cased leading alphabetic run of a raw type string.
///
/// Returns an empty string when the type does not start with a letter.
///
/// # Examples
///
/// ```
/// use querysample::leading_type_name;
///
/// assert_eq!(leading_type_name("VARCHAR(255)"), "varchar");
/// assert_eq!(leading_type_name("array<string>"), "array");
/// assert_eq!(leading_type_name(" int"), "");
/// ```
pub fn leading_type_name(raw_type: &str) -> String {
    raw_type
        .chars()
        .take_while(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Looks up a type name in the built-in dictionary.
///
/// `name` must already be a lower-cased leading type name.
pub fn builtin_type(name: &str) -> Option<CanonicalColumnType> {
    BUILTIN_LOOKUP.get(name).copied()
}

/// Classifies a raw column type using the built-in dictionary only.
///
/// Never fails; unrecognised types map to [`CanonicalColumnType::Unknown`].
pub fn classify(raw_type: &str) -> CanonicalColumnType {
    builtin_type(&leading_type_name(raw_type)).unwrap_or(CanonicalColumnType::Unknown)
}

/// Column type classifier with optional site-specific aliases.
///
/// Aliases are consulted before the built-in dictionary, which lets a
/// deployment teach the classifier about engine types it does not ship with
/// (or reinterpret one it does).
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_getters::Getters)]
pub struct TypeClassifier {
    aliases: HashMap<String, CanonicalColumnType>,
}

impl TypeClassifier {
    /// Classifier backed by the built-in dictionary alone.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an alias. The name is normalised the same way raw types are.
    pub fn with_alias(mut self, name: &str, column_type: CanonicalColumnType) -> Self {
        self.aliases.insert(leading_type_name(name), column_type);
        self
    }

    /// Adds every alias in `aliases`.
    pub fn with_aliases<'a, I>(self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a CanonicalColumnType)>,
    {
        aliases
            .into_iter()
            .fold(self, |classifier, (name, ty)| classifier.with_alias(name, *ty))
    }

    /// Classifies a raw, dialect-specific column type.
    pub fn classify(&self, raw_type: &str) -> CanonicalColumnType {
        let name = leading_type_name(raw_type);
        let column_type = self
            .aliases
            .get(&name)
            .copied()
            .or_else(|| builtin_type(&name))
            .unwrap_or(CanonicalColumnType::Unknown);
        trace!(raw_type, %column_type, "Classified column type");
        column_type
    }

    /// Canonical type of every column in `table`, keyed by column name.
    pub fn column_types(&self, table: &TableMetadata) -> HashMap<String, CanonicalColumnType> {
        let types: HashMap<_, _> = table
            .columns()
            .iter()
            .map(|column| (column.name().clone(), self.classify(column.raw_type())))
            .collect();
        debug!(column_count = types.len(), "Built column type map");
        types
    }
}
