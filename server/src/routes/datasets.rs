//! Dataset availability routes.
//!
//! The dashboard itself reads the JSON documents straight from `/data`. This
//! module reports which of them the pipeline has produced, so operators can
//! tell an empty dashboard from a broken one.

use std::path::Path;

use axum::extract::State;
use axum::response::Json;
use datasets::{DatasetKind, DatasetStamp};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetStatus {
    pub name: &'static str,
    pub path: &'static str,
    pub available: bool,
    pub updated_at: Option<String>,
    pub error: Option<String>,
}

/// `GET /api/datasets` — report availability of each dataset document.
pub async fn dataset_status(State(state): State<AppState>) -> Json<Vec<DatasetStatus>> {
    Json(probe_all(state.data_dir()).await)
}

/// Probe every dataset concurrently, in fixed order.
pub async fn probe_all(dir: &Path) -> Vec<DatasetStatus> {
    let (ercot, permits, enforcement) = tokio::join!(
        probe(dir, DatasetKind::ErcotQueue),
        probe(dir, DatasetKind::Permits),
        probe(dir, DatasetKind::Enforcement),
    );
    vec![ercot, permits, enforcement]
}

async fn probe(dir: &Path, kind: DatasetKind) -> DatasetStatus {
    let result = match tokio::fs::read(dir.join(kind.file_name())).await {
        Ok(bytes) => datasets::decode::<DatasetStamp>(kind, &bytes),
        Err(source) => Err(datasets::DatasetError::Io { name: kind.name(), source }),
    };

    match result {
        Ok(stamp) => DatasetStatus {
            name: kind.name(),
            path: kind.path(),
            available: true,
            updated_at: stamp.updated_at,
            error: None,
        },
        Err(e) => DatasetStatus {
            name: kind.name(),
            path: kind.path(),
            available: false,
            updated_at: None,
            error: Some(e.to_string()),
        },
    }
}

/// Log dataset availability once at startup.
pub async fn log_availability(dir: &Path) {
    for status in probe_all(dir).await {
        match status.error {
            None => tracing::info!(
                dataset = status.name,
                updated_at = status.updated_at.as_deref().unwrap_or("unknown"),
                "dataset available"
            ),
            Some(error) => tracing::warn!(dataset = status.name, %error, "dataset unavailable"),
        }
    }
}

#[cfg(test)]
#[path = "datasets_test.rs"]
mod tests;
