//! Dataset metadata screen and its building blocks.

pub mod headers;
pub mod operation_form;
pub mod row_form;
pub mod show;
mod styles;
