//! Application services — use-case orchestration.
//!
//! Each service module implements a single use-case by composing domain logic
//! with port trait calls. Services import only from `crate::domain` and
//! `crate::application::ports` — never from `crate::infra`, `crate::commands`,
//! or `crate::output`.

pub mod artifact_writer;
pub mod config_service;
pub mod environment;
pub mod inspect;
pub mod save;

/// Recover the `std::io::Error` behind a port failure so it can be carried
/// as the `#[source]` of a typed domain error.
pub(crate) fn io_source(e: anyhow::Error) -> std::io::Error {
    match e.downcast::<std::io::Error>() {
        Ok(io) => io,
        Err(other) => std::io::Error::other(format!("{other:#}")),
    }
}
