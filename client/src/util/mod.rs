//! Utility helpers shared across dashboard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is pure and runs natively in unit tests: data reshaping,
//! chart geometry, color tables, and display formatting. Components only
//! turn the results into markup.

pub mod chart_data;
pub mod chart_geometry;
pub mod format;
pub mod palette;
