//! Shared state for the API layer.

use std::path::PathBuf;
use std::sync::Arc;

use rusqlite::Connection;

use crate::db::{self, DatabaseError};
use crate::kb::KnowledgeBase;

/// Shared context for all routes: the database path and the immutable
/// knowledge base. Connections are opened per request; the knowledge
/// base is loaded once and shared read-only.
#[derive(Clone)]
pub struct ApiContext {
    db_path: Arc<PathBuf>,
    pub kb: Arc<KnowledgeBase>,
}

impl ApiContext {
    pub fn new(db_path: PathBuf, kb: Arc<KnowledgeBase>) -> Self {
        Self {
            db_path: Arc::new(db_path),
            kb,
        }
    }

    /// Open a short-lived connection for the current request.
    pub fn open_db(&self) -> Result<Connection, DatabaseError> {
        db::open_database(&self.db_path)
    }

    pub fn db_path(&self) -> &std::path::Path {
        &self.db_path
    }
}
