//! Dataset fetch helpers.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, joined with
//! `futures::join!` so the three requests are in flight together.
//! Server-side (SSR): no fetch happens; the page renders its loading state
//! and the hydrated client performs the single load attempt.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is flattened to a `String` describing which document
//! failed and how. No retries, no timeouts.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::dashboard::DashboardState;
#[cfg(feature = "hydrate")]
use datasets::DatasetKind;

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(path: &str, detail: &str) -> String {
    format!("request for {path} failed: {detail}")
}

#[cfg(any(test, feature = "hydrate"))]
fn http_status_message(path: &str, status: u16) -> String {
    format!("{path} returned HTTP {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn invalid_json_message(path: &str, detail: &str) -> String {
    format!("{path} is not valid JSON: {detail}")
}

/// GET one dataset and decode it.
#[cfg(feature = "hydrate")]
async fn fetch_dataset<T: serde::de::DeserializeOwned>(kind: DatasetKind) -> Result<T, String> {
    let path = kind.path();
    let resp = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|e| request_failed_message(path, &e.to_string()))?;
    if !resp.ok() {
        return Err(http_status_message(path, resp.status()));
    }
    let body = resp
        .text()
        .await
        .map_err(|e| request_failed_message(path, &e.to_string()))?;
    datasets::decode::<T>(kind, body.as_bytes()).map_err(|e| match e {
        datasets::DatasetError::Decode { source, .. } => invalid_json_message(path, &source.to_string()),
        other @ datasets::DatasetError::Io { .. } => other.to_string(),
    })
}

/// Request all three datasets concurrently and wait for every response.
pub async fn fetch_dashboard() -> DashboardState {
    #[cfg(feature = "hydrate")]
    {
        let (ercot, permits, enforcement) = futures::join!(
            fetch_dataset(DatasetKind::ErcotQueue),
            fetch_dataset(DatasetKind::Permits),
            fetch_dataset(DatasetKind::Enforcement),
        );
        DashboardState::from_results(ercot, permits, enforcement)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        DashboardState::Error("not available on server".to_owned())
    }
}
