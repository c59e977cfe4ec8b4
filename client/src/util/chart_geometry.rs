//! SVG geometry for the pie and bar charts.
//!
//! Angles are measured clockwise from twelve o'clock, in radians.

#[cfg(test)]
#[path = "chart_geometry_test.rs"]
mod chart_geometry_test;

use std::f64::consts::{PI, TAU};

const FULL_TURN_EPS: f64 = 1e-9;

/// Minimum bar opacity so the smallest ranked row stays visible.
pub const MIN_BAR_OPACITY: f64 = 0.3;

/// One pie wedge ready for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct PieArc {
    pub start: f64,
    pub end: f64,
    /// Share of the total, in `[0, 1]`.
    pub fraction: f64,
    /// SVG path data for the wedge.
    pub path: String,
    pub label_x: f64,
    pub label_y: f64,
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.sin(), cy - radius * angle.cos())
}

fn wedge_path(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> String {
    let sweep = end - start;
    if sweep >= TAU - FULL_TURN_EPS {
        // A single arc cannot close on itself; draw two half circles.
        return format!(
            "M {cx:.2} {top:.2} A {radius:.2} {radius:.2} 0 1 1 {cx:.2} {bottom:.2} A {radius:.2} {radius:.2} 0 1 1 {cx:.2} {top:.2} Z",
            top = cy - radius,
            bottom = cy + radius,
        );
    }
    let (x0, y0) = polar(cx, cy, radius, start);
    let (x1, y1) = polar(cx, cy, radius, end);
    let large_arc = u8::from(sweep > PI);
    format!("M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {radius:.2} {radius:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z")
}

/// Lay out wedges for `values` around `(cx, cy)`.
///
/// Returns an empty list when the values do not sum to a positive total.
/// Negative values are treated as zero.
pub fn pie_arcs(values: &[f64], cx: f64, cy: f64, radius: f64) -> Vec<PieArc> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let label_radius = radius * 0.68;
    let mut cursor = 0.0;
    values
        .iter()
        .map(|value| {
            let fraction = value.max(0.0) / total;
            let start = cursor;
            let end = start + fraction * TAU;
            cursor = end;
            let (label_x, label_y) = polar(cx, cy, label_radius, (start + end) / 2.0);
            PieArc { start, end, fraction, path: wedge_path(cx, cy, radius, start, end), label_x, label_y }
        })
        .collect()
}

/// Bar length as a fraction of the largest value, in `[0, 1]`.
pub fn bar_extent(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0)
}

/// Bar opacity scaled with its extent.
pub fn bar_opacity(extent: f64) -> f64 {
    MIN_BAR_OPACITY + (1.0 - MIN_BAR_OPACITY) * extent.clamp(0.0, 1.0)
}
