use std::sync::Arc;

use marquee_core::quiz::QuestionPicker;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: marquee_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Random source for quiz question selection.
    pub picker: Arc<dyn QuestionPicker>,
}
