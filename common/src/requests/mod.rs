use serde::{Deserialize, Serialize};

use crate::model::column::Column;
use crate::model::operation::Operation;

/// Request payload for `PUT /api/metas/{meta_id}/columns`.
///
/// Carries the full edited column list, in the same order and with the same
/// source column names as the stored metadata, together with the operation
/// defined on the same screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateColumnsRequest {
    pub columns: Vec<Column>,
    pub operation: Operation,
}
