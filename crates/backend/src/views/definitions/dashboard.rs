//! Phase 1: dashboard views.

use contracts::views::{ViewDefinition, ViewPhase};

/// One row per product with the global (location-less) summary and reorder settings.
pub const PRODUCT_INVENTORY_STATUS: ViewDefinition = ViewDefinition {
    name: "product_inventory_status",
    phase: ViewPhase::Dashboard,
    description: "Product card essentials: company-wide stock position, reorder settings and a below-reorder flag in one row per product.",
    sql: r#"CREATE VIEW IF NOT EXISTS product_inventory_status AS
SELECT
  p.product_id,
  p.sku,
  p.name,
  p.description,
  p.item_type,
  p.is_active,

  p.category_id,
  c.name AS category_name,

  ps.quantity_on_hand,
  ps.quantity_available,
  ps.quantity_reserved,
  ps.quantity_on_purchase_order,
  ps.quantity_on_work_order,
  ps.quantity_in_transit,
  ps.quantity_buildable,

  rs.reorder_point,
  rs.reorder_quantity,
  rs.enable_reordering,
  rs.vendor_id AS preferred_vendor_id,

  CASE
    WHEN rs.enable_reordering = 1
      AND rs.reorder_point IS NOT NULL
      AND CAST(COALESCE(ps.quantity_available, '0') AS REAL) <= CAST(rs.reorder_point AS REAL)
    THEN 1
    ELSE 0
  END AS is_below_reorder,

  ps.image_small_url AS image_url

FROM products p
LEFT JOIN categories c ON p.category_id = c.category_id
LEFT JOIN product_summary ps ON p.product_id = ps.product_id AND ps.location_id IS NULL
LEFT JOIN reorder_settings rs ON p.product_id = rs.product_id AND rs.location_id IS NULL;
"#,
};

/// Global reorder alerts.
///
/// `shortfall_quantity` is `reorder_point - quantity_available`; a missing
/// summary row counts as zero available.
pub const REORDER_ALERTS: ViewDefinition = ViewDefinition {
    name: "reorder_alerts",
    phase: ViewPhase::Dashboard,
    description: "Active products at or below their global reorder point with reordering enabled, with preferred vendor, suggested quantity and estimated order value.",
    sql: r#"CREATE VIEW IF NOT EXISTS reorder_alerts AS
SELECT
  p.product_id,
  p.sku,
  p.name AS product_name,
  p.category_id,

  ps.quantity_on_hand,
  ps.quantity_available,
  ps.quantity_on_purchase_order,

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

  CAST(COALESCE(rs.reorder_quantity,
    CAST(rs.reorder_point AS REAL) - CAST(COALESCE(ps.quantity_available, '0') AS REAL)
  ) AS REAL) * CAST(COALESCE(vi.cost, '0') AS REAL) AS estimated_order_value

FROM products p
INNER JOIN reorder_settings rs ON p.product_id = rs.product_id AND rs.location_id IS NULL
LEFT JOIN product_summary ps ON p.product_id = ps.product_id AND ps.location_id IS NULL
LEFT JOIN vendors v ON rs.vendor_id = v.vendor_id
LEFT JOIN vendor_items vi ON rs.vendor_id = vi.vendor_id AND p.product_id = vi.product_id
WHERE rs.enable_reordering = 1
  AND rs.reorder_point IS NOT NULL
  AND CAST(COALESCE(ps.quantity_available, '0') AS REAL) <= CAST(rs.reorder_point AS REAL)
  AND p.is_active = 1;
"#,
};

/// Sales orders in `Shipped` state are treated as closed here.
pub const OPEN_ORDERS_UNIFIED: ViewDefinition = ViewDefinition {
    name: "open_orders_unified",
    phase: ViewPhase::Dashboard,
    description: "Open purchase, sales and manufacturing orders normalized into one pipeline, tagged by order_type.",
    sql: r#"CREATE VIEW IF NOT EXISTS open_orders_unified AS
SELECT
  po.purchase_order_id AS order_id,
  'purchase_order' AS order_type,
  po.order_number,
  po.status,
  po.order_date,
  po.expected_date,
  po.vendor_id AS counterparty_id,
  v.name AS counterparty_name,
  'vendor' AS counterparty_type,
  po.location_id,
  l.name AS location_name,
  po.total,
  po.remarks,
  po.last_modified_date_time AS last_modified
FROM purchase_orders po
LEFT JOIN vendors v ON po.vendor_id = v.vendor_id
LEFT JOIN locations l ON po.location_id = l.location_id
WHERE po.status NOT IN ('Completed', 'Cancelled', 'Closed')

UNION ALL

SELECT
  so.sales_order_id AS order_id,
  'sales_order' AS order_type,
  so.order_number,
  so.status,
  so.order_date,
  so.expected_ship_date AS expected_date,
  so.customer_id AS counterparty_id,
  c.name AS counterparty_name,
  'customer' AS counterparty_type,
  so.location_id,
  l.name AS location_name,
  so.total,
  so.remarks,
  so.last_modified_date_time AS last_modified
FROM sales_orders so
LEFT JOIN customers c ON so.customer_id = c.customer_id
LEFT JOIN locations l ON so.location_id = l.location_id
WHERE so.status NOT IN ('Completed', 'Cancelled', 'Closed', 'Shipped')

UNION ALL

SELECT
  mo.manufacturing_order_id AS order_id,
  'manufacturing_order' AS order_type,
  mo.order_number,
  mo.status,
  mo.order_date,
  mo.expected_date,
  mo.product_id AS counterparty_id,
  p.name AS counterparty_name,
  'product' AS counterparty_type,
  mo.location_id,
  l.name AS location_name,
  CAST(mo.quantity AS TEXT) AS total,
  mo.remarks,
  mo.last_modified_date_time AS last_modified
FROM manufacturing_orders mo
LEFT JOIN products p ON mo.product_id = p.product_id
LEFT JOIN locations l ON mo.location_id = l.location_id
WHERE mo.status NOT IN ('Completed', 'Cancelled', 'Closed');
"#,
};
