//! RRC drilling permit summary.

use serde::Deserialize;

use crate::Tally;
use crate::lenient;

/// `rrc_permits.json`: 30-day permit totals by basin and county.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PermitsSummary {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_permits_30d: f64,
    #[serde(default, deserialize_with = "lenient::tally")]
    pub by_basin: Option<Tally>,
    #[serde(default, deserialize_with = "lenient::tally")]
    pub by_county: Option<Tally>,
}
