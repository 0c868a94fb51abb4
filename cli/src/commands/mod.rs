//! Command implementations

pub mod config;
pub mod inspect;
pub mod save;
pub mod version;
