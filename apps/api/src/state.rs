use std::sync::Arc;

use crate::evaluation::orchestrator::Evaluator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// LLM-backed evaluator with heuristic fallback. Provider chosen from config at startup.
    pub evaluator: Arc<Evaluator>,
}
