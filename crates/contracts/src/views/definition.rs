use serde::{Deserialize, Serialize};
use std::fmt;

/// Documentation grouping of the catalog. Has no effect on execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewPhase {
    /// Product card, reorder alerts, open order pipeline
    Dashboard,
    /// Per-location stock and transfers
    Operational,
    /// Line-level warehouse detail (sublocation, lot, serial)
    Expert,
    /// Customer, vendor, margin and BOM rollups
    BusinessAnalytics,
    /// History, velocity and aging relative to the current date
    TimeSeries,
}

impl ViewPhase {
    pub const ALL: [ViewPhase; 5] = [
        ViewPhase::Dashboard,
        ViewPhase::Operational,
        ViewPhase::Expert,
        ViewPhase::BusinessAnalytics,
        ViewPhase::TimeSeries,
    ];

    pub fn ordinal(&self) -> u8 {
        match self {
            ViewPhase::Dashboard => 1,
            ViewPhase::Operational => 2,
            ViewPhase::Expert => 3,
            ViewPhase::BusinessAnalytics => 4,
            ViewPhase::TimeSeries => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewPhase::Dashboard => "Dashboard",
            ViewPhase::Operational => "Operational",
            ViewPhase::Expert => "Expert",
            ViewPhase::BusinessAnalytics => "Business Analytics",
            ViewPhase::TimeSeries => "Time Series",
        }
    }
}

impl fmt::Display for ViewPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phase {}: {}", self.ordinal(), self.label())
    }
}

/// Static definition of a reporting view (compiled into the backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewDefinition {
    /// Stable snake_case view name, e.g. "reorder_alerts"
    pub name: &'static str,
    /// Documentation group
    pub phase: ViewPhase,
    /// What the view answers
    pub description: &'static str,
    /// Complete `CREATE VIEW IF NOT EXISTS <name> AS ...` statement
    pub sql: &'static str,
}

/// Owned summary of a view for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewInfo {
    pub name: String,
    pub phase: ViewPhase,
    pub description: String,
}

impl From<&ViewDefinition> for ViewInfo {
    fn from(def: &ViewDefinition) -> Self {
        Self {
            name: def.name.to_string(),
            phase: def.phase,
            description: def.description.to_string(),
        }
    }
}
