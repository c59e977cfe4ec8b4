//! Fixed color and badge tables for dashboard charts.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

/// Color for any label missing from a table.
pub const FALLBACK_COLOR: &str = "#94a3b8";

const FUEL_COLORS: &[(&str, &str)] = &[
    ("Solar", "#f59e0b"),
    ("Wind", "#3b82f6"),
    ("Gas", "#ef4444"),
    ("Battery Storage", "#8b5cf6"),
    ("Nuclear", "#10b981"),
    ("Coal", "#57534e"),
    ("Hydro", "#06b6d4"),
    ("Other", "#a3a3a3"),
];

const BASIN_COLORS: &[(&str, &str)] = &[
    ("Permian", "#dc2626"),
    ("Eagle Ford", "#ea580c"),
    ("Haynesville", "#16a34a"),
    ("Anadarko", "#2563eb"),
    ("Barnett", "#9333ea"),
    ("Granite Wash", "#0891b2"),
    ("Other", "#64748b"),
];

fn lookup(table: &[(&str, &'static str)], label: &str) -> &'static str {
    table
        .iter()
        .find(|(name, _)| *name == label)
        .map_or(FALLBACK_COLOR, |(_, color)| *color)
}

/// Slice color for an ERCOT fuel category.
pub fn fuel_color(label: &str) -> &'static str {
    lookup(FUEL_COLORS, label)
}

/// Bar color for a drilling basin.
pub fn basin_color(label: &str) -> &'static str {
    lookup(BASIN_COLORS, label)
}

/// Visual class of an enforcement status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Pending,
    Resolved,
    Other,
}

impl StatusTone {
    pub fn from_status(status: &str) -> Self {
        match status {
            "Pending" => Self::Pending,
            "Resolved" => Self::Resolved,
            _ => Self::Other,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Pending => "status-badge status-badge--pending",
            Self::Resolved => "status-badge status-badge--resolved",
            Self::Other => "status-badge status-badge--other",
        }
    }
}

/// Badge label and class for an optional status; absent reads "Unknown".
pub fn status_badge(status: Option<&str>) -> (String, &'static str) {
    match status {
        Some(status) => (status.to_owned(), StatusTone::from_status(status).class()),
        None => ("Unknown".to_owned(), StatusTone::Other.class()),
    }
}
