//! Presentational dashboard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component takes one slice of a dataset document as a plain prop,
//! reshapes it with `util::chart_data`, and renders markup. None of them
//! reads context or owns signals; the dashboard page passes fresh props on
//! every load.

pub mod county_velocity_table;
pub mod enforcement_list;
pub mod ercot_pie_chart;
pub mod metric_card;
pub mod permit_bar_chart;
