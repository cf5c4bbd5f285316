pub mod apis;
pub mod metas;
pub mod tables;
pub mod typos;
