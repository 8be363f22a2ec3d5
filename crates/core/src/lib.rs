//! Domain layer for the project tracker.
//!
//! Holds the `Project` entity and its validation rules, the
//! [`store::ProjectStore`] persistence gateway trait with an in-memory
//! adapter, and the [`service::ProjectService`] the HTTP boundary calls.

pub mod error;
pub mod project;
pub mod service;
pub mod store;
pub mod types;
