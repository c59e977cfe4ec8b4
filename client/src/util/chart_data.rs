//! Pure reshaping of dataset documents into chart rows.
//!
//! DESIGN
//! ======
//! Every helper takes the nullable mapping straight off the document and
//! returns an owned, already-ordered list. Components render these lists
//! as-is and show their placeholder when a list comes back empty.

#[cfg(test)]
#[path = "chart_data_test.rs"]
mod chart_data_test;

use datasets::{EnforcementItem, FuelBreakdown, FuelInfo, Tally};

use super::chart_geometry::{bar_extent, bar_opacity};
use super::format::short_date;
use super::palette::{basin_color, fuel_color, status_badge};

pub const TOP_BASINS: usize = 8;
pub const TOP_COUNTIES: usize = 10;
pub const RECENT_ENFORCEMENT: usize = 5;

/// One ERCOT pie slice.
#[derive(Clone, Debug, PartialEq)]
pub struct FuelSlice {
    pub name: String,
    /// Capacity in GW (or the project count when no capacity is published).
    pub value: f64,
    pub projects: f64,
    pub color: &'static str,
}

/// A label/count pair after ranking.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedCount {
    pub name: String,
    pub count: f64,
}

/// One permit bar, scaled against the largest rendered basin.
#[derive(Clone, Debug, PartialEq)]
pub struct BasinBar {
    pub name: String,
    pub count: f64,
    pub extent: f64,
    pub color: &'static str,
}

/// One county velocity row.
#[derive(Clone, Debug, PartialEq)]
pub struct CountyRow {
    pub name: String,
    pub count: f64,
    pub width_pct: f64,
    pub opacity: f64,
}

/// One enforcement headline ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct EnforcementRow {
    pub headline: String,
    pub docket_number: Option<String>,
    pub status_label: String,
    pub status_class: &'static str,
    pub date: Option<String>,
    pub major: bool,
}

/// Chart value for a fuel category: `capacity_gw`, else `capacity_mw / 1000`,
/// else `count`, else zero. Zero counts as absent at every step.
pub fn fuel_value(info: &FuelInfo) -> f64 {
    let present = |v: Option<f64>| v.filter(|n| *n != 0.0);
    present(info.capacity_gw)
        .or_else(|| present(info.capacity_mw).map(|mw| mw / 1000.0))
        .or_else(|| present(info.count))
        .unwrap_or(0.0)
}

/// Pie slices ordered by descending value. Ties keep document order.
pub fn fuel_slices(by_fuel_type: Option<&FuelBreakdown>) -> Vec<FuelSlice> {
    let Some(fuels) = by_fuel_type else {
        return Vec::new();
    };
    let mut slices: Vec<FuelSlice> = fuels
        .iter()
        .map(|(name, info)| FuelSlice {
            name: name.to_owned(),
            value: fuel_value(info),
            projects: info.count.unwrap_or(0.0),
            color: fuel_color(name),
        })
        .collect();
    slices.sort_by(|a, b| b.value.total_cmp(&a.value));
    slices
}

/// The `limit` largest counts, descending. Ties keep document order.
pub fn top_counts(tally: Option<&Tally>, limit: usize) -> Vec<RankedCount> {
    let Some(tally) = tally else {
        return Vec::new();
    };
    let mut ranked: Vec<RankedCount> = tally
        .iter()
        .map(|(name, count)| RankedCount { name: name.to_owned(), count: *count })
        .collect();
    ranked.sort_by(|a, b| b.count.total_cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

fn max_count(rows: &[RankedCount]) -> f64 {
    rows.iter().map(|r| r.count).fold(0.0, f64::max)
}

/// Top basins for the permit bar chart.
pub fn basin_bars(by_basin: Option<&Tally>) -> Vec<BasinBar> {
    let ranked = top_counts(by_basin, TOP_BASINS);
    let max = max_count(&ranked);
    ranked
        .into_iter()
        .map(|row| BasinBar {
            extent: bar_extent(row.count, max),
            color: basin_color(&row.name),
            name: row.name,
            count: row.count,
        })
        .collect()
}

/// Top counties for the velocity table.
pub fn county_rows(by_county: Option<&Tally>) -> Vec<CountyRow> {
    let ranked = top_counts(by_county, TOP_COUNTIES);
    let max = max_count(&ranked);
    ranked
        .into_iter()
        .map(|row| {
            let extent = bar_extent(row.count, max);
            CountyRow { name: row.name, count: row.count, width_pct: extent * 100.0, opacity: bar_opacity(extent) }
        })
        .collect()
}

/// The first few enforcement items, in input order.
pub fn enforcement_rows(items: Option<&[EnforcementItem]>) -> Vec<EnforcementRow> {
    items
        .unwrap_or_default()
        .iter()
        .take(RECENT_ENFORCEMENT)
        .map(|item| {
            let (status_label, status_class) = status_badge(item.status.as_deref());
            EnforcementRow {
                headline: item.headline.clone(),
                docket_number: item.docket_number.clone(),
                status_label,
                status_class,
                date: item.date.as_deref().map(short_date),
                major: item.major,
            }
        })
        .collect()
}
