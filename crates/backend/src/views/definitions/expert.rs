//! Phase 3: warehouse-level detail views.

use contracts::views::{ViewDefinition, ViewPhase};

/// Physical count and bin lookups.
pub const INVENTORY_DETAIL: ViewDefinition = ViewDefinition {
    name: "inventory_detail",
    phase: ViewPhase::Expert,
    description: "Inventory lines at full granularity: sublocation, serial and lot with product and location names.",
    sql: r#"CREATE VIEW IF NOT EXISTS inventory_detail AS
SELECT
  il.inventory_line_id,

  il.product_id,
  p.sku,
  p.name AS product_name,
  p.item_type,
  p.category_id,
  c.name AS category_name,

  il.location_id,
  l.name AS location_name,
  l.abbreviation AS location_abbreviation,

  il.sublocation,

  il.serial,
  il.lot_id,

  il.quantity_on_hand,

  p.track_serials,
  p.track_lots,
  p.track_expiry,
  p.shelf_life_days

FROM inventory_lines il
INNER JOIN products p ON il.product_id = p.product_id
LEFT JOIN locations l ON il.location_id = l.location_id
LEFT JOIN categories c ON p.category_id = c.category_id;
"#,
};

/// Outbound rows carry a `-` prefixed quantity. A transfer yields two rows,
/// one out of the source location and one into the destination.
pub const STOCK_MOVEMENT_LEDGER: ViewDefinition = ViewDefinition {
    name: "stock_movement_ledger",
    phase: ViewPhase::Expert,
    description: "Every stock movement (PO receipts, SO shipments, transfers out and in, adjustments) as one signed ledger tagged by movement_type.",
    sql: r#"CREATE VIEW IF NOT EXISTS stock_movement_ledger AS

-- PO Receipts (inventory IN)
SELECT
  'PO_RECEIPT' AS movement_type,
  po.order_date AS movement_date,
  pol.product_id,
  p.sku,
  p.name AS product_name,
  po.location_id,
  l.name AS location_name,
  pol.quantity_received AS quantity,
  'PurchaseOrder' AS reference_type,
  po.order_number AS reference_number,
  po.purchase_order_id AS reference_id,
  pol.purchase_order_line_id AS line_id
FROM purchase_order_lines pol
INNER JOIN purchase_orders po ON pol.purchase_order_id = po.purchase_order_id
INNER JOIN products p ON pol.product_id = p.product_id
LEFT JOIN locations l ON po.location_id = l.location_id
WHERE CAST(COALESCE(pol.quantity_received, '0') AS REAL) > 0

UNION ALL

-- SO Shipments (inventory OUT - negative quantity)
SELECT
  'SO_SHIPMENT' AS movement_type,
  so.order_date AS movement_date,
  sol.product_id,
  p.sku,
  p.name AS product_name,
  so.location_id,
  l.name AS location_name,
  '-' || sol.quantity_shipped AS quantity,
  'SalesOrder' AS reference_type,
  so.order_number AS reference_number,
  so.sales_order_id AS reference_id,
  sol.sales_order_line_id AS line_id
FROM sales_order_lines sol
INNER JOIN sales_orders so ON sol.sales_order_id = so.sales_order_id
INNER JOIN products p ON sol.product_id = p.product_id
LEFT JOIN locations l ON so.location_id = l.location_id
WHERE CAST(COALESCE(sol.quantity_shipped, '0') AS REAL) > 0

UNION ALL

-- Transfers OUT (from source location - negative)
SELECT
  'TRANSFER_OUT' AS movement_type,
  st.transfer_date AS movement_date,
  stl.product_id,
  p.sku,
  p.name AS product_name,
  st.from_location_id AS location_id,
  l.name AS location_name,
  '-' || stl.quantity AS quantity,
  'StockTransfer' AS reference_type,
  st.transfer_number AS reference_number,
  st.stock_transfer_id AS reference_id,
  stl.stock_transfer_line_id AS line_id
FROM stock_transfer_lines stl
INNER JOIN stock_transfers st ON stl.stock_transfer_id = st.stock_transfer_id
INNER JOIN products p ON stl.product_id = p.product_id
LEFT JOIN locations l ON st.from_location_id = l.location_id
WHERE st.status IN ('Completed', 'Closed')

UNION ALL

-- Transfers IN (to destination location - positive)
SELECT
  'TRANSFER_IN' AS movement_type,
  st.transfer_date AS movement_date,
  stl.product_id,
  p.sku,
  p.name AS product_name,
  st.to_location_id AS location_id,
  l.name AS location_name,
  stl.quantity AS quantity,
  'StockTransfer' AS reference_type,
  st.transfer_number AS reference_number,
  st.stock_transfer_id AS reference_id,
  stl.stock_transfer_line_id AS line_id
FROM stock_transfer_lines stl
INNER JOIN stock_transfers st ON stl.stock_transfer_id = st.stock_transfer_id
INNER JOIN products p ON stl.product_id = p.product_id
LEFT JOIN locations l ON st.to_location_id = l.location_id
WHERE st.status IN ('Completed', 'Closed')

UNION ALL

-- Adjustments (can be positive or negative)
SELECT
  'ADJUSTMENT' AS movement_type,
  sa.adjustment_date AS movement_date,
  sal.product_id,
  p.sku,
  p.name AS product_name,
  sa.location_id,
  l.name AS location_name,
  sal.quantity AS quantity,
  'StockAdjustment' AS reference_type,
  sa.adjustment_number AS reference_number,
  sa.stock_adjustment_id AS reference_id,
  sal.stock_adjustment_line_id AS line_id
FROM stock_adjustment_lines sal
INNER JOIN stock_adjustments sa ON sal.stock_adjustment_id = sa.stock_adjustment_id
INNER JOIN products p ON sal.product_id = p.product_id
LEFT JOIN locations l ON sa.location_id = l.location_id;
"#,
};

pub const LOT_INVENTORY: ViewDefinition = ViewDefinition {
    name: "lot_inventory",
    phase: ViewPhase::Expert,
    description: "Lot-tracked inventory lines with shelf life data for FEFO picking and expiry estimation.",
    sql: r#"CREATE VIEW IF NOT EXISTS lot_inventory AS
SELECT
  il.inventory_line_id,

  il.product_id,
  p.sku,
  p.name AS product_name,
  p.category_id,
  c.name AS category_name,

  il.location_id,
  l.name AS location_name,
  l.abbreviation AS location_abbreviation,
  il.sublocation,

  il.lot_id,
  il.quantity_on_hand,

  p.shelf_life_days,
  p.track_expiry

FROM inventory_lines il
INNER JOIN products p ON il.product_id = p.product_id
LEFT JOIN locations l ON il.location_id = l.location_id
LEFT JOIN categories c ON p.category_id = c.category_id
WHERE il.lot_id IS NOT NULL AND il.lot_id != '';
"#,
};

pub const SERIAL_INVENTORY: ViewDefinition = ViewDefinition {
    name: "serial_inventory",
    phase: ViewPhase::Expert,
    description: "Serial-tracked inventory lines with their current location.",
    sql: r#"CREATE VIEW IF NOT EXISTS serial_inventory AS
SELECT
  il.inventory_line_id,

  il.product_id,
  p.sku,
  p.name AS product_name,
  p.category_id,
  c.name AS category_name,

  il.location_id,
  l.name AS location_name,
  l.abbreviation AS location_abbreviation,
  il.sublocation,

  il.serial,
  il.quantity_on_hand,

  il.lot_id

FROM inventory_lines il
INNER JOIN products p ON il.product_id = p.product_id
LEFT JOIN locations l ON il.location_id = l.location_id
LEFT JOIN categories c ON p.category_id = c.category_id
WHERE il.serial IS NOT NULL AND il.serial != '';
"#,
};
