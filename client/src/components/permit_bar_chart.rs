//! Drilling permits by basin.

use datasets::Tally;
use leptos::prelude::*;

use crate::util::chart_data::basin_bars;
use crate::util::format::format_count;

const WIDTH: f64 = 420.0;
const LABEL_WIDTH: f64 = 110.0;
const VALUE_WIDTH: f64 = 50.0;
const ROW_HEIGHT: f64 = 30.0;
const BAR_HEIGHT: f64 = 18.0;

/// Horizontal bars for the eight busiest basins.
#[component]
pub fn PermitBarChart(by_basin: Option<Tally>) -> impl IntoView {
    let bars = basin_bars(by_basin.as_ref());
    if bars.is_empty() {
        return view! { <p class="chart-empty">"No permit data available"</p> }.into_any();
    }

    #[allow(clippy::cast_precision_loss)]
    let height = bars.len() as f64 * ROW_HEIGHT;
    let track = WIDTH - LABEL_WIDTH - VALUE_WIDTH;

    let rows = bars
        .into_iter()
        .enumerate()
        .map(|(i, bar)| {
            #[allow(clippy::cast_precision_loss)]
            let top = i as f64 * ROW_HEIGHT;
            let mid = top + ROW_HEIGHT / 2.0;
            let length = bar.extent * track;
            let count = format_count(bar.count);
            view! {
                <g class="bar-chart__row">
                    <text
                        class="bar-chart__label"
                        x=format!("{:.1}", LABEL_WIDTH - 8.0)
                        y=format!("{mid:.1}")
                        text-anchor="end"
                        dominant-baseline="middle"
                    >
                        {bar.name.clone()}
                    </text>
                    <rect
                        class="bar-chart__bar"
                        x=format!("{LABEL_WIDTH:.1}")
                        y=format!("{:.1}", mid - BAR_HEIGHT / 2.0)
                        width=format!("{length:.1}")
                        height=format!("{BAR_HEIGHT:.1}")
                        rx="3"
                        fill=bar.color
                    >
                        <title>{format!("{}: {} permits", bar.name, count)}</title>
                    </rect>
                    <text
                        class="bar-chart__value"
                        x=format!("{:.1}", LABEL_WIDTH + length + 6.0)
                        y=format!("{mid:.1}")
                        dominant-baseline="middle"
                    >
                        {count.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg class="bar-chart" viewBox=format!("0 0 {WIDTH} {height}") role="img" aria-label="Permits by basin">
            {rows}
        </svg>
    }
    .into_any()
}
