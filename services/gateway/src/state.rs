use scoring_engine::ChurnEngine;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup, read-only for the process lifetime
    pub engine: Arc<ChurnEngine>,
}

impl AppState {
    pub fn new(engine: ChurnEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
