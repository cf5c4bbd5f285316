use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::MetaError;

/// One field definition of a dataset.
///
/// A `Column` is treated as an immutable value: the metadata screen never
/// patches a single field in place, it builds a complete replacement and swaps
/// it into the edit state (see `editing::ColumnEditState::apply_edit`).
///
/// `column_name` is the name in the source data and identifies the column
/// within its metadata. It is shown read-only; every other field is editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Name of the column in the original data source.
    pub column_name: String,
    /// Name exposed to API consumers.
    #[serde(default)]
    pub provided_name: String,
    #[serde(default)]
    pub column_type: ColumnType,
    /// Maximum length as typed in the form: `"10"` or `"10,2"`.
    /// Empty when not set. Use [`Column::length`] for the parsed value.
    #[serde(default)]
    pub max_length: String,
    /// Date pattern such as `yyyy-MM-dd HH:mm:ss`, only meaningful for
    /// date-like column types.
    #[serde(default)]
    pub date_format: String,
    /// Missing on the wire means nullable, as for [`Column::new`].
    #[serde(default = "nullable_by_default")]
    pub nullable: bool,
    #[serde(default)]
    pub search: SearchSetting,
}

fn nullable_by_default() -> bool {
    true
}

impl Column {
    /// Creates a text column whose provided name equals its source name.
    pub fn new(column_name: impl Into<String>) -> Self {
        let column_name = column_name.into();
        Self {
            provided_name: column_name.clone(),
            column_name,
            column_type: ColumnType::default(),
            max_length: String::new(),
            date_format: String::new(),
            nullable: true,
            search: SearchSetting::default(),
        }
    }

    /// Parses `max_length`. `Ok(None)` means the field is blank.
    pub fn length(&self) -> Result<Option<ColumnLength>, MetaError> {
        let raw = self.max_length.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        ColumnLength::parse(raw).map(Some)
    }

    /// Whether the date format field applies to this column.
    pub fn uses_date_format(&self) -> bool {
        self.column_type.is_date_like()
    }
}

/// Declared type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    Text,
    Integer,
    Decimal,
    Date,
    Timestamp,
    Boolean,
}

impl ColumnType {
    pub const ALL: [ColumnType; 6] = [
        ColumnType::Text,
        ColumnType::Integer,
        ColumnType::Decimal,
        ColumnType::Date,
        ColumnType::Timestamp,
        ColumnType::Boolean,
    ];

    pub fn is_date_like(self) -> bool {
        matches!(self, ColumnType::Date | ColumnType::Timestamp)
    }

    /// Stable identifier used as `<option value>` and on the wire.
    pub fn key(self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Integer => "integer",
            ColumnType::Decimal => "decimal",
            ColumnType::Date => "date",
            ColumnType::Timestamp => "timestamp",
            ColumnType::Boolean => "boolean",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColumnType::Text => "Texto",
            ColumnType::Integer => "Entero",
            ColumnType::Decimal => "Decimal",
            ColumnType::Date => "Fecha",
            ColumnType::Timestamp => "Fecha y hora",
            ColumnType::Boolean => "Booleano",
        }
    }

    pub fn from_key(key: &str) -> Option<ColumnType> {
        ColumnType::ALL.into_iter().find(|t| t.key() == key)
    }
}

/// How API consumers may filter on a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSetting {
    #[default]
    None,
    Exact,
    Partial,
    Range,
}

impl SearchSetting {
    pub const ALL: [SearchSetting; 4] = [
        SearchSetting::None,
        SearchSetting::Exact,
        SearchSetting::Partial,
        SearchSetting::Range,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SearchSetting::None => "none",
            SearchSetting::Exact => "exact",
            SearchSetting::Partial => "partial",
            SearchSetting::Range => "range",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchSetting::None => "Sin búsqueda",
            SearchSetting::Exact => "Coincidencia exacta",
            SearchSetting::Partial => "Coincidencia parcial",
            SearchSetting::Range => "Rango",
        }
    }

    pub fn from_key(key: &str) -> Option<SearchSetting> {
        SearchSetting::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Parsed maximum length: total digits (or characters) and, for decimals,
/// the digits after the decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLength {
    pub precision: u32,
    pub scale: Option<u32>,
}

impl ColumnLength {
    /// Accepts `"N"` or `"N,M"`, ignoring spaces around the numbers.
    pub fn parse(raw: &str) -> Result<Self, MetaError> {
        let invalid = || MetaError::InvalidLength(raw.to_string());
        let mut parts = raw.split(',').map(str::trim);

        let precision = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(invalid)?;
        let scale = match parts.next() {
            Some(s) => Some(s.parse::<u32>().map_err(|_| invalid())?),
            None => None,
        };
        if parts.next().is_some() {
            return Err(invalid());
        }
        if scale.is_some_and(|s| s > precision) {
            return Err(invalid());
        }

        Ok(Self { precision, scale })
    }
}

impl fmt::Display for ColumnLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scale {
            Some(scale) => write!(f, "{},{}", self.precision, scale),
            None => write!(f, "{}", self.precision),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_and_decimal_lengths() {
        assert_eq!(
            ColumnLength::parse("10").unwrap(),
            ColumnLength { precision: 10, scale: None }
        );
        assert_eq!(
            ColumnLength::parse(" 12 , 3 ").unwrap(),
            ColumnLength { precision: 12, scale: Some(3) }
        );
    }

    #[test]
    fn rejects_malformed_lengths() {
        for raw in ["", "abc", "10,", "10,2,1", "2,5", "-1"] {
            assert!(ColumnLength::parse(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn blank_length_is_unset() {
        let mut col = Column::new("amount");
        assert_eq!(col.length(), Ok(None));
        col.max_length = "8,2".to_string();
        assert_eq!(col.length().unwrap().unwrap().to_string(), "8,2");
    }

    #[test]
    fn only_date_like_types_use_a_date_format() {
        let mut col = Column::new("created");
        assert!(!col.uses_date_format());
        col.column_type = ColumnType::Timestamp;
        assert!(col.uses_date_format());
    }

    #[test]
    fn column_uses_camel_case_on_the_wire() {
        let json = r#"{"columnName":"col_a","providedName":"a","columnType":"integer","search":"exact"}"#;
        let col: Column = serde_json::from_str(json).unwrap();
        assert_eq!(col.column_name, "col_a");
        assert_eq!(col.column_type, ColumnType::Integer);
        assert_eq!(col.search, SearchSetting::Exact);
        assert!(col.nullable);

        let back = serde_json::to_value(&col).unwrap();
        assert_eq!(back["providedName"], "a");
        assert_eq!(back["dateFormat"], "");
    }

    #[test]
    fn decoded_column_defaults_match_a_new_one() {
        let col: Column = serde_json::from_str(r#"{"columnName":"col_a"}"#).unwrap();
        assert_eq!(col.nullable, Column::new("col_a").nullable);

        let strict: Column = serde_json::from_str(r#"{"columnName":"col_a","nullable":false}"#).unwrap();
        assert!(!strict.nullable);
    }

    #[test]
    fn option_keys_round_trip() {
        for t in ColumnType::ALL {
            assert_eq!(ColumnType::from_key(t.key()), Some(t));
        }
        for s in SearchSetting::ALL {
            assert_eq!(SearchSetting::from_key(s.key()), Some(s));
        }
        assert_eq!(ColumnType::from_key("blob"), None);
    }
}
