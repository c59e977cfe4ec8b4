//! Recent RRC enforcement headlines.

use datasets::EnforcementItem;
use leptos::prelude::*;

use crate::util::chart_data::enforcement_rows;

/// The five most recent enforcement items, each with a status badge.
#[component]
pub fn EnforcementList(items: Option<Vec<EnforcementItem>>) -> impl IntoView {
    let rows = enforcement_rows(items.as_deref());
    if rows.is_empty() {
        return view! { <p class="chart-empty">"No recent enforcement actions"</p> }.into_any();
    }

    view! {
        <ul class="enforcement-list">
            {rows
                .into_iter()
                .map(|row| {
                    view! {
                        <li class="enforcement-list__item">
                            <div class="enforcement-list__main">
                                <span class="enforcement-list__headline">{row.headline}</span>
                                {row.docket_number.map(|docket| view! {
                                    <span class="enforcement-list__docket">{format!("Docket {docket}")}</span>
                                })}
                            </div>
                            <div class="enforcement-list__meta">
                                {row.major.then(|| view! {
                                    <span class="enforcement-list__major">"Major"</span>
                                })}
                                <span class=row.status_class>{row.status_label}</span>
                                {row.date.map(|date| view! {
                                    <span class="enforcement-list__date">{date}</span>
                                })}
                            </div>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}
