//! Dashboard page: ERCOT queue, drilling permits, and enforcement panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. On mount in the browser it issues the three
//! dataset requests at once, waits for all of them, and stores the combined
//! outcome in one signal. The server render always shows the loading state.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::county_velocity_table::CountyVelocityTable;
use crate::components::enforcement_list::EnforcementList;
use crate::components::ercot_pie_chart::ErcotPieChart;
use crate::components::metric_card::MetricCard;
use crate::components::permit_bar_chart::PermitBarChart;
use crate::state::dashboard::{DashboardData, DashboardState};
use crate::util::format::{format_count, one_decimal};

/// Label/value/subtext for one metric card.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Metric {
    pub label: &'static str,
    pub value: String,
    pub subtext: String,
}

pub(crate) fn load_failed_message(detail: &str) -> String {
    format!("Failed to load dashboard data: {detail}")
}

pub(crate) fn updated_label(data: &DashboardData) -> String {
    match data.ercot.updated_at.as_deref() {
        Some(stamp) => format!("Updated {stamp}"),
        None => "Update time unknown".to_owned(),
    }
}

pub(crate) fn metrics(data: &DashboardData) -> Vec<Metric> {
    vec![
        Metric {
            label: "ERCOT Queue",
            value: format!("{} GW", one_decimal(data.ercot.total_capacity_gw)),
            subtext: format!("{} projects", format_count(data.ercot.total_projects)),
        },
        Metric {
            label: "Drilling Permits",
            value: format_count(data.permits.total_permits_30d),
            subtext: "Last 30 days".to_owned(),
        },
        Metric {
            label: "Enforcement Actions",
            value: format_count(data.enforcement.total_recent),
            subtext: "Last 90 days".to_owned(),
        },
        Metric {
            label: "Major Violations",
            value: format_count(data.enforcement.major_violations),
            subtext: "Flagged major by RRC".to_owned(),
        },
    ]
}

/// Dashboard page. Renders loading, a single error, or the full body.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = RwSignal::new(DashboardState::Loading);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let next = crate::net::api::fetch_dashboard().await;
            match &next {
                DashboardState::Error(message) => log::warn!("dashboard load failed: {message}"),
                _ => log::debug!("dashboard datasets loaded"),
            }
            state.set(next);
        });
    }

    view! {
        <main class="dashboard">
            {move || match state.get() {
                DashboardState::Loading => {
                    view! { <p class="dashboard__loading">"Loading dashboard data..."</p> }.into_any()
                }
                DashboardState::Error(message) => {
                    view! { <p class="dashboard__error" role="alert">{load_failed_message(&message)}</p> }
                        .into_any()
                }
                DashboardState::Ready(data) => view! { <DashboardBody data=data/> }.into_any(),
            }}
        </main>
    }
}

#[component]
fn DashboardBody(data: DashboardData) -> impl IntoView {
    let updated = updated_label(&data);
    let cards = metrics(&data)
        .into_iter()
        .map(|m| view! { <MetricCard label=m.label value=m.value subtext=m.subtext/> })
        .collect_view();
    let DashboardData { ercot, permits, enforcement } = data;

    view! {
        <header class="dashboard__header">
            <div>
                <h1 class="dashboard__title">"Texas Energy Dashboard"</h1>
                <p class="dashboard__subtitle">"ERCOT interconnection queue and RRC drilling activity"</p>
            </div>
            <span class="dashboard__updated">{updated}</span>
        </header>

        <section class="dashboard__metrics">{cards}</section>

        <div class="dashboard__grid">
            <section class="panel">
                <h2 class="panel__title">"ERCOT Queue by Fuel Type (GW)"</h2>
                <ErcotPieChart by_fuel_type=ercot.by_fuel_type/>
            </section>
            <section class="panel">
                <h2 class="panel__title">"Drilling Permits by Basin (30d)"</h2>
                <PermitBarChart by_basin=permits.by_basin/>
            </section>
            <section class="panel">
                <h2 class="panel__title">"Recent Enforcement Actions"</h2>
                <EnforcementList items=enforcement.items/>
            </section>
            <section class="panel">
                <h2 class="panel__title">"County Permit Velocity"</h2>
                <CountyVelocityTable by_county=permits.by_county/>
            </section>
        </div>
    }
}
