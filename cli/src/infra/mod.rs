//! Infrastructure layer — concrete implementations of application port traits.
//!
//! All filesystem access lives here.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod config;
pub mod fs;
