use std::sync::Arc;

use tracker_core::service::ProjectService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Project lifecycle operations over the configured store.
    pub projects: ProjectService,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
