use serde::{Deserialize, Serialize};

use crate::error::MetaError;
use crate::model::column::Column;
use crate::model::samples::SampleSet;

/// Structural description of a dataset.
///
/// Fetched by id from `GET /api/metas/{id}` and kept in the frontend
/// `MetaStore`. The order of `columns` is significant: it defines both the
/// order of the row editors and the column order of the sample table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub id: String,
    /// Back-reference to the API resource this dataset is published through.
    pub api_id: String,
    pub columns: Vec<Column>,
    /// Serialized `{"items": [{column_name: value, ...}, ...]}` document.
    #[serde(default)]
    pub samples: String,
}

impl Metadata {
    /// Source column names in column order.
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.column_name.as_str()).collect()
    }

    /// Decodes `samples`. An empty string is an empty sample set.
    pub fn sample_set(&self) -> Result<SampleSet, MetaError> {
        SampleSet::parse(&self.samples)
    }

    /// Decodes `samples` and checks that every record has one field per column.
    pub fn check_samples(&self) -> Result<SampleSet, MetaError> {
        let samples = self.sample_set()?;
        samples.check_shape(&self.headers())?;
        Ok(samples)
    }

    /// Copy of this metadata carrying `columns` instead of the current ones.
    pub fn with_columns(&self, columns: Vec<Column>) -> Metadata {
        Metadata {
            columns,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(samples: &str) -> Metadata {
        Metadata {
            id: "7".to_string(),
            api_id: "9".to_string(),
            columns: vec![Column::new("col_a"), Column::new("col_b")],
            samples: samples.to_string(),
        }
    }

    #[test]
    fn decodes_wire_format() {
        let json = r#"{
            "id": "7",
            "apiId": "9",
            "columns": [{"columnName": "col_a"}],
            "samples": "{\"items\":[{\"col_a\":1}]}"
        }"#;
        let meta: Metadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.api_id, "9");
        assert_eq!(meta.headers(), vec!["col_a"]);
        assert_eq!(meta.check_samples().unwrap().len(), 1);
    }

    #[test]
    fn sample_shape_is_checked_against_columns() {
        let ok = meta(r#"{"items":[{"col_a":1,"col_b":"x"}]}"#);
        assert!(ok.check_samples().is_ok());

        let short = meta(r#"{"items":[{"col_a":1,"col_b":"x"},{"col_a":2}]}"#);
        assert_eq!(
            short.check_samples(),
            Err(MetaError::SampleShape { row: 1, expected: 2, found: 1 })
        );

        let renamed = meta(r#"{"items":[{"col_a":1,"col_c":"x"}]}"#);
        assert_eq!(
            renamed.check_samples(),
            Err(MetaError::SampleMissingColumn { row: 0, column: "col_b".to_string() })
        );
    }

    #[test]
    fn with_columns_leaves_original_untouched() {
        let original = meta("");
        let updated = original.with_columns(vec![Column::new("only")]);
        assert_eq!(original.columns.len(), 2);
        assert_eq!(updated.headers(), vec!["only"]);
        assert_eq!(updated.api_id, original.api_id);
    }
}
