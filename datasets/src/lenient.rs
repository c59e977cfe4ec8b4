//! Field deserializers that coerce instead of failing.
//!
//! Each helper first captures the raw `serde_json::Value` and then maps it,
//! so no input can make a field error out.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::{EnforcementItem, FuelBreakdown, FuelInfo, Tally};

/// Numeric value, or zero for anything that is not a finite JSON number.
pub(crate) fn coerce_number(value: &Value) -> f64 {
    value.as_f64().filter(|n| n.is_finite()).unwrap_or(0.0)
}

fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value))
}

pub(crate) fn optional_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|n| n.is_finite()))
}

pub(crate) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_text(&value).unwrap_or_default())
}

pub(crate) fn optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_text(&value))
}

pub(crate) fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(false))
}

pub(crate) fn tally<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Tally>, D::Error> {
    let Value::Object(map) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(Some(map.iter().map(|(label, count)| (label.clone(), coerce_number(count))).collect()))
}

pub(crate) fn fuel_breakdown<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<FuelBreakdown>, D::Error> {
    let Value::Object(map) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(Some(
        map.into_iter()
            .map(|(label, info)| {
                let info = if info.is_object() {
                    serde_json::from_value::<FuelInfo>(info).unwrap_or_default()
                } else {
                    FuelInfo::default()
                };
                (label, info)
            })
            .collect(),
    ))
}

pub(crate) fn items<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<EnforcementItem>>, D::Error> {
    let Value::Array(raw) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(Some(
        raw.into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value::<EnforcementItem>(item).ok())
            .collect(),
    ))
}
