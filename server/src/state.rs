//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! dashboard owns no mutable state: handlers only need to know where the
//! pipeline drops its JSON documents.

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone, Debug)]
pub struct AppState {
    data_dir: Arc<PathBuf>,
}

impl AppState {
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir: Arc::new(data_dir) }
    }

    /// Directory served at `/data`.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
