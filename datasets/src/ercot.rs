//! ERCOT generation interconnection queue summary.

use serde::Deserialize;

use crate::lenient;
use crate::{FuelBreakdown, Tally};

/// `ercot_queue.json`: queue totals and per-fuel capacity.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErcotQueueSummary {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_capacity_gw: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_projects: f64,
    #[serde(default, deserialize_with = "lenient::fuel_breakdown")]
    pub by_fuel_type: Option<FuelBreakdown>,
    #[serde(default, deserialize_with = "lenient::tally")]
    pub by_status: Option<Tally>,
}

/// Capacity info for one fuel category. Any field may be missing.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FuelInfo {
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub capacity_gw: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub capacity_mw: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub count: Option<f64>,
}
