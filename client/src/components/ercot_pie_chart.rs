//! ERCOT interconnection queue capacity by fuel type.

use datasets::FuelBreakdown;
use leptos::prelude::*;

use crate::util::chart_data::fuel_slices;
use crate::util::chart_geometry::pie_arcs;
use crate::util::format::{format_count, one_decimal};

const SIZE: f64 = 240.0;
const RADIUS: f64 = 100.0;

/// Proportional pie of queued capacity per fuel, largest first.
///
/// Shows a placeholder when the mapping is absent, empty, or sums to zero.
#[component]
pub fn ErcotPieChart(by_fuel_type: Option<FuelBreakdown>) -> impl IntoView {
    let slices = fuel_slices(by_fuel_type.as_ref());
    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let arcs = pie_arcs(&values, SIZE / 2.0, SIZE / 2.0, RADIUS);

    if arcs.is_empty() {
        return view! { <p class="chart-empty">"No fuel type data available"</p> }.into_any();
    }

    let wedges = slices
        .iter()
        .zip(arcs)
        .filter(|(_, arc)| arc.fraction > 0.0)
        .map(|(slice, arc)| {
            let tooltip = format!(
                "{}: {} GW ({} projects)",
                slice.name,
                one_decimal(slice.value),
                format_count(slice.projects)
            );
            let label = format!("{} {}", slice.name, one_decimal(slice.value));
            view! {
                <g class="pie-chart__slice">
                    <path d=arc.path fill=slice.color stroke="#ffffff" stroke-width="1">
                        <title>{tooltip}</title>
                    </path>
                    <text
                        class="pie-chart__label"
                        x=format!("{:.1}", arc.label_x)
                        y=format!("{:.1}", arc.label_y)
                        text-anchor="middle"
                        dominant-baseline="middle"
                    >
                        {label}
                    </text>
                </g>
            }
        })
        .collect_view();

    let legend = slices
        .into_iter()
        .map(|slice| {
            view! {
                <li class="pie-chart__legend-item">
                    <span class="pie-chart__swatch" style=format!("background:{}", slice.color)></span>
                    <span class="pie-chart__legend-name">{slice.name}</span>
                    <span class="pie-chart__legend-value">{format!("{} GW", one_decimal(slice.value))}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="pie-chart">
            <svg class="pie-chart__svg" viewBox=format!("0 0 {SIZE} {SIZE}") role="img" aria-label="Queue capacity by fuel type">
                {wedges}
            </svg>
            <ul class="pie-chart__legend">{legend}</ul>
        </div>
    }
    .into_any()
}
