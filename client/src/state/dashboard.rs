//! Load state for the dashboard page.
//!
//! DESIGN
//! ======
//! The page fans out three independent requests and waits for all of them.
//! Rather than three loading flags and an error slot, the outcome is a single
//! tagged value that the view renders as a pure function. Each dataset is
//! replaced wholesale on every load; nothing here is mutated in place.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use datasets::{EnforcementSummary, ErcotQueueSummary, PermitsSummary};

/// The three documents backing a fully loaded dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    pub ercot: ErcotQueueSummary,
    pub permits: PermitsSummary,
    pub enforcement: EnforcementSummary,
}

/// Outcome of the dashboard's single load attempt.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DashboardState {
    /// Requests are in flight (also the server-rendered state).
    #[default]
    Loading,
    /// At least one request failed; the message describes the first failure.
    Error(String),
    /// All three documents arrived and decoded.
    Ready(DashboardData),
}

impl DashboardState {
    /// Combine the three fetch outcomes. Failures are reported in the fixed
    /// order ERCOT, permits, enforcement, regardless of arrival order.
    pub fn from_results(
        ercot: Result<ErcotQueueSummary, String>,
        permits: Result<PermitsSummary, String>,
        enforcement: Result<EnforcementSummary, String>,
    ) -> Self {
        match (ercot, permits, enforcement) {
            (Ok(ercot), Ok(permits), Ok(enforcement)) => Self::Ready(DashboardData { ercot, permits, enforcement }),
            (Err(message), _, _) | (_, Err(message), _) | (_, _, Err(message)) => Self::Error(message),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&DashboardData> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }
}
