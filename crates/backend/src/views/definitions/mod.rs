//! SQL text of every reporting view, grouped by phase.
//!
//! Statements target SQLite. Quantities and money are stored as text in the
//! base schema, so every arithmetic use is wrapped in
//! `CAST(COALESCE(x, '0') AS REAL)` and cast back to `TEXT` for output.

pub mod analytics;
pub mod dashboard;
pub mod expert;
pub mod operational;
pub mod time_series;

use contracts::views::ViewDefinition;

/// The standard catalog in documentation order.
pub const STANDARD_VIEWS: &[ViewDefinition] = &[
    // Phase 1: Dashboard
    dashboard::PRODUCT_INVENTORY_STATUS,
    dashboard::REORDER_ALERTS,
    dashboard::OPEN_ORDERS_UNIFIED,
    // Phase 2: Operational
    operational::INVENTORY_BY_LOCATION,
    operational::LOCATION_STOCK_SUMMARY,
    operational::LOCATION_REORDER_ALERTS,
    operational::TRANSFER_PIPELINE,
    // Phase 3: Expert
    expert::INVENTORY_DETAIL,
    expert::STOCK_MOVEMENT_LEDGER,
    expert::LOT_INVENTORY,
    expert::SERIAL_INVENTORY,
    // Phase 4: Business Analytics
    analytics::CUSTOMER_360,
    analytics::VENDOR_SCORECARD,
    analytics::PRODUCT_MARGIN,
    analytics::BOM_COSTED,
    analytics::CATEGORY_INVENTORY_SUMMARY,
    // Phase 5: Time Series
    time_series::ORDER_HISTORY,
    time_series::PRODUCT_VELOCITY,
    time_series::DEAD_STOCK,
];
