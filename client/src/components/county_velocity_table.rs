//! Permit velocity by county.

use datasets::Tally;
use leptos::prelude::*;

use crate::util::chart_data::county_rows;
use crate::util::format::format_count;

/// Ten busiest counties as label, scaled bar, and count.
#[component]
pub fn CountyVelocityTable(by_county: Option<Tally>) -> impl IntoView {
    let rows = county_rows(by_county.as_ref());
    if rows.is_empty() {
        return view! { <p class="chart-empty">"No county data available"</p> }.into_any();
    }

    view! {
        <div class="county-table">
            {rows
                .into_iter()
                .map(|row| {
                    let bar_style = format!("width:{:.1}%;opacity:{:.2}", row.width_pct, row.opacity);
                    view! {
                        <div class="county-table__row">
                            <span class="county-table__name">{row.name}</span>
                            <span class="county-table__track">
                                <span class="county-table__bar" style=bar_style></span>
                            </span>
                            <span class="county-table__count">{format_count(row.count)}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
