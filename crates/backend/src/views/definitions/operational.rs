//! Phase 2: per-location operational views.

use contracts::views::{ViewDefinition, ViewPhase};

pub const INVENTORY_BY_LOCATION: ViewDefinition = ViewDefinition {
    name: "inventory_by_location",
    phase: ViewPhase::Operational,
    description: "Product stock broken out per location instead of company-wide totals.",
    sql: r#"CREATE VIEW IF NOT EXISTS inventory_by_location AS
SELECT
  ps.product_id,
  ps.location_id,

  p.sku,
  p.name AS product_name,
  p.item_type,
  p.is_active,
  p.category_id,
  c.name AS category_name,

  l.name AS location_name,
  l.abbreviation AS location_abbreviation,
  l.is_shippable,
  l.is_receivable,

  ps.quantity_on_hand,
  ps.quantity_available,
  ps.quantity_reserved,
  ps.quantity_reserved_for_sales,
  ps.quantity_reserved_for_manufacturing,
  ps.quantity_reserved_for_transfers,
  ps.quantity_on_purchase_order,
  ps.quantity_on_work_order,
  ps.quantity_on_transfer_order,
  ps.quantity_picked,
  ps.quantity_in_transit,

  ps.image_small_url AS image_url

FROM product_summary ps
INNER JOIN products p ON ps.product_id = p.product_id
INNER JOIN locations l ON ps.location_id = l.location_id
LEFT JOIN categories c ON p.category_id = c.category_id
WHERE ps.location_id IS NOT NULL;
"#,
};

pub const LOCATION_STOCK_SUMMARY: ViewDefinition = ViewDefinition {
    name: "location_stock_summary",
    phase: ViewPhase::Operational,
    description: "SKU counts and summed quantities per active location.",
    sql: r#"CREATE VIEW IF NOT EXISTS location_stock_summary AS
SELECT
  l.location_id,
  l.name AS location_name,
  l.abbreviation AS location_abbreviation,
  l.is_shippable,
  l.is_receivable,
  COUNT(DISTINCT ps.product_id) AS sku_count,
  SUM(CAST(COALESCE(ps.quantity_on_hand, '0') AS REAL)) AS total_quantity_on_hand,
  SUM(CAST(COALESCE(ps.quantity_available, '0') AS REAL)) AS total_quantity_available,
  SUM(CAST(COALESCE(ps.quantity_reserved, '0') AS REAL)) AS total_quantity_reserved,
  SUM(CAST(COALESCE(ps.quantity_in_transit, '0') AS REAL)) AS total_quantity_in_transit
FROM locations l
LEFT JOIN product_summary ps ON l.location_id = ps.location_id
WHERE l.is_active = 1
GROUP BY l.location_id, l.name, l.abbreviation, l.is_shippable, l.is_receivable;
"#,
};

/// Same shape as [`super::dashboard::REORDER_ALERTS`] but keyed by `rs.location_id`.
pub const LOCATION_REORDER_ALERTS: ViewDefinition = ViewDefinition {
    name: "location_reorder_alerts",
    phase: ViewPhase::Operational,
    description: "Products at or below a location-specific reorder point, with vendor and transfer-source hints.",
    sql: r#"CREATE VIEW IF NOT EXISTS location_reorder_alerts AS
SELECT
  p.product_id,
  p.sku,
  p.name AS product_name,
  p.category_id,

  rs.location_id,
  l.name AS location_name,
  l.abbreviation AS location_abbreviation,

  ps.quantity_on_hand,
  ps.quantity_available,
  ps.quantity_on_purchase_order,
  ps.quantity_in_transit,

  rs.reorder_point,
  rs.reorder_quantity,

  CAST(rs.reorder_point AS REAL) - CAST(COALESCE(ps.quantity_available, '0') AS REAL) AS shortfall_quantity,

  COALESCE(rs.reorder_quantity,
    CAST(rs.reorder_point AS REAL) - CAST(COALESCE(ps.quantity_available, '0') AS REAL)
  ) AS suggested_order_quantity,

  rs.vendor_id AS preferred_vendor_id,
  v.name AS vendor_name,
  v.vendor_code,

  vi.vendor_item_code,
  vi.cost AS vendor_cost,
  vi.lead_time_days,

  rs.from_location_id

FROM products p
INNER JOIN reorder_settings rs ON p.product_id = rs.product_id
INNER JOIN locations l ON rs.location_id = l.location_id
LEFT JOIN product_summary ps ON p.product_id = ps.product_id AND rs.location_id = ps.location_id
LEFT JOIN vendors v ON rs.vendor_id = v.vendor_id
LEFT JOIN vendor_items vi ON rs.vendor_id = vi.vendor_id AND p.product_id = vi.product_id
WHERE rs.enable_reordering = 1
  AND rs.reorder_point IS NOT NULL
  AND rs.location_id IS NOT NULL
  AND p.is_active = 1
  AND CAST(COALESCE(ps.quantity_available, '0') AS REAL) <= CAST(rs.reorder_point AS REAL);
"#,
};

pub const TRANSFER_PIPELINE: ViewDefinition = ViewDefinition {
    name: "transfer_pipeline",
    phase: ViewPhase::Operational,
    description: "Open stock transfers between locations with line item detail.",
    sql: r#"CREATE VIEW IF NOT EXISTS transfer_pipeline AS
SELECT
  st.stock_transfer_id,
  st.transfer_number,
  st.status,
  st.transfer_date,
  st.remarks,
  st.last_modified_date_time AS last_modified,

  st.from_location_id,
  from_loc.name AS from_location_name,
  from_loc.abbreviation AS from_location_abbreviation,

  st.to_location_id,
  to_loc.name AS to_location_name,
  to_loc.abbreviation AS to_location_abbreviation,

  stl.stock_transfer_line_id,
  stl.line_num,
  stl.product_id,
  p.sku,
  p.name AS product_name,
  stl.quantity,
  stl.from_sublocation,
  stl.to_sublocation

FROM stock_transfers st
INNER JOIN stock_transfer_lines stl ON st.stock_transfer_id = stl.stock_transfer_id
LEFT JOIN products p ON stl.product_id = p.product_id
LEFT JOIN locations from_loc ON st.from_location_id = from_loc.location_id
LEFT JOIN locations to_loc ON st.to_location_id = to_loc.location_id
WHERE st.status NOT IN ('Completed', 'Cancelled', 'Closed');
"#,
};
