use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::people_client::PeopleSource;
use crate::roster::Board;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Where candidates come from. `PeopleClient` in production.
    pub source: Arc<dyn PeopleSource>,
    /// Dashboard state; handlers take the write lock one request at a time.
    pub board: Arc<RwLock<Board>>,
}

impl AppState {
    pub fn new(config: &Config, source: Arc<dyn PeopleSource>) -> Self {
        let board = Arc::new(RwLock::new(Board::new(config.recommended_count)));
        Self { source, board }
    }
}
