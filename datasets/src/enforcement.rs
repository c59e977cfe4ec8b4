//! RRC enforcement and violation summary.

use serde::Deserialize;

use crate::lenient;

/// `rrc_enforcement.json`: recent violation count plus headline items,
/// most recent first.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct EnforcementSummary {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_recent: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub major_violations: f64,
    #[serde(default, deserialize_with = "lenient::items")]
    pub items: Option<Vec<EnforcementItem>>,
}

/// A single enforcement headline.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct EnforcementItem {
    #[serde(default, deserialize_with = "lenient::text")]
    pub headline: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub docket_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub operator: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub county: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub major: bool,
}
