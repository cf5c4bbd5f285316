pub mod column;
pub mod meta;
pub mod operation;
pub mod samples;
