//! Shared model and view logic for the dataset metadata screens.
//!
//! Everything in this crate is plain Rust with no browser or server
//! dependency, so both the Yew frontend and the actix backend link it and the
//! editing rules can be tested natively.

pub mod editing;
pub mod error;
pub mod model;
pub mod navigation;
pub mod requests;
pub mod store;
