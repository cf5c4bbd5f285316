//! Sample records shown above the column editors.
//!
//! The backend stores the samples as a serialized JSON document; it is decoded
//! once when the metadata arrives instead of on every render.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::MetaError;

/// Number of records the sample table shows.
pub const MAX_SAMPLE_ROWS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    #[serde(default)]
    pub items: Vec<Map<String, Value>>,
}

impl SampleSet {
    pub fn parse(raw: &str) -> Result<Self, MetaError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Every record must have exactly one field per header, keyed by header.
    pub fn check_shape(&self, headers: &[&str]) -> Result<(), MetaError> {
        for (row, item) in self.items.iter().enumerate() {
            if item.len() != headers.len() {
                return Err(MetaError::SampleShape {
                    row,
                    expected: headers.len(),
                    found: item.len(),
                });
            }
            if let Some(missing) = headers.iter().find(|h| !item.contains_key(**h)) {
                return Err(MetaError::SampleMissingColumn {
                    row,
                    column: missing.to_string(),
                });
            }
        }
        Ok(())
    }

    /// The first `MAX_SAMPLE_ROWS` records laid out in `headers` order.
    /// Missing fields come back as `None`.
    pub fn rows<'a>(&'a self, headers: &[&str]) -> Vec<Vec<Option<&'a Value>>> {
        self.items
            .iter()
            .take(MAX_SAMPLE_ROWS)
            .map(|item| headers.iter().map(|h| item.get(*h)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_text_is_an_empty_set() {
        assert!(SampleSet::parse("").unwrap().is_empty());
        assert!(SampleSet::parse("  ").unwrap().is_empty());
    }

    #[test]
    fn malformed_text_is_a_decode_error() {
        assert!(matches!(
            SampleSet::parse("{\"items\": [1"),
            Err(MetaError::SampleDecode(_))
        ));
    }

    #[test]
    fn rows_follow_header_order_and_are_capped() {
        let items: Vec<Value> = (0..8).map(|i| json!({"b": i, "a": format!("r{i}")})).collect();
        let raw = json!({ "items": items }).to_string();
        let set = SampleSet::parse(&raw).unwrap();

        let rows = set.rows(&["a", "b", "c"]);
        assert_eq!(rows.len(), MAX_SAMPLE_ROWS);
        assert_eq!(rows[0][0], Some(&json!("r0")));
        assert_eq!(rows[4][1], Some(&json!(4)));
        assert_eq!(rows[0][2], None);
    }
}
