//! Headline metric tile.

use leptos::prelude::*;

/// A label/value/subtext triple. An empty `subtext` is not rendered.
#[component]
pub fn MetricCard(#[prop(into)] label: String, #[prop(into)] value: String, #[prop(into)] subtext: String) -> impl IntoView {
    let subtext = (!subtext.is_empty()).then(|| {
        view! { <span class="metric-card__subtext">{subtext}</span> }
    });

    view! {
        <div class="metric-card">
            <span class="metric-card__label">{label}</span>
            <span class="metric-card__value">{value}</span>
            {subtext}
        </div>
    }
}
