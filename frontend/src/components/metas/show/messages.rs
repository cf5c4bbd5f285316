use common::model::column::Column;
use common::model::operation::Operation;
use common::requests::UpdateColumnsRequest;

pub enum Msg {
    /// A row editor reported the full replacement for its column.
    UpdateColumn(usize, Column),
    /// The operation form changed.
    UpdateOperation(Operation),
    /// The stored operation arrived from the backend.
    SetOperation(Operation),
    Save,
    /// The backend accepted the carried submission.
    SaveSucceeded(UpdateColumnsRequest),
    SaveFailed(String),
}
