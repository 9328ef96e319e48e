//! Phase 5: views measured against the current date.

use contracts::views::{ViewDefinition, ViewPhase};

pub const ORDER_HISTORY: ViewDefinition = ViewDefinition {
    name: "order_history",
    phase: ViewPhase::TimeSeries,
    description: "Completed purchase, sales and manufacturing orders at line level, tagged PO/SO/MO.",
    sql: r#"CREATE VIEW IF NOT EXISTS order_history AS

-- Purchase Orders (completed receipts from vendors)
SELECT
  'PO' AS order_type,
  po.purchase_order_id AS order_id,
  po.order_number,
  po.order_date,
  po.status,
  po.vendor_id AS partner_id,
  v.name AS partner_name,
  po.location_id,
  l.name AS location_name,
  pol.purchase_order_line_id AS line_id,
  pol.product_id,
  p.sku,
  p.name AS product_name,
  pol.quantity AS quantity_ordered,
  pol.quantity_received AS quantity_fulfilled,
  pol.unit_cost AS unit_price,
  CAST(CAST(COALESCE(pol.quantity_received, '0') AS REAL) * CAST(COALESCE(pol.unit_cost, '0') AS REAL) AS TEXT) AS line_total
FROM purchase_orders po
INNER JOIN purchase_order_lines pol ON po.purchase_order_id = pol.purchase_order_id
INNER JOIN products p ON pol.product_id = p.product_id
LEFT JOIN vendors v ON po.vendor_id = v.vendor_id
LEFT JOIN locations l ON po.location_id = l.location_id
WHERE po.status IN ('Completed', 'Closed')

UNION ALL

-- Sales Orders (completed shipments to customers)
SELECT
  'SO' AS order_type,
  so.sales_order_id AS order_id,
  so.order_number,
  so.order_date,
  so.status,
  so.customer_id AS partner_id,
  c.name AS partner_name,
  so.location_id,
  l.name AS location_name,
  sol.sales_order_line_id AS line_id,
  sol.product_id,
  p.sku,
  p.name AS product_name,
  sol.quantity AS quantity_ordered,
  sol.quantity_shipped AS quantity_fulfilled,
  sol.unit_price AS unit_price,
  CAST(CAST(COALESCE(sol.quantity_shipped, '0') AS REAL) * CAST(COALESCE(sol.unit_price, '0') AS REAL) AS TEXT) AS line_total
FROM sales_orders so
INNER JOIN sales_order_lines sol ON so.sales_order_id = sol.sales_order_id
INNER JOIN products p ON sol.product_id = p.product_id
LEFT JOIN customers c ON so.customer_id = c.customer_id
LEFT JOIN locations l ON so.location_id = l.location_id
WHERE so.status IN ('Completed', 'Shipped', 'Closed')

UNION ALL

-- Manufacturing Orders (completed production)
SELECT
  'MO' AS order_type,
  mo.manufacturing_order_id AS order_id,
  mo.order_number,
  mo.order_date,
  mo.status,
  NULL AS partner_id,
  NULL AS partner_name,
  mo.location_id,
  l.name AS location_name,
  mo.manufacturing_order_id AS line_id,
  mo.product_id,
  p.sku,
  p.name AS product_name,
  mo.quantity AS quantity_ordered,
  mo.quantity_completed AS quantity_fulfilled,
  p.cost AS unit_price,
  CAST(CAST(COALESCE(mo.quantity_completed, '0') AS REAL) * CAST(COALESCE(p.cost, '0') AS REAL) AS TEXT) AS line_total
FROM manufacturing_orders mo
INNER JOIN products p ON mo.product_id = p.product_id
LEFT JOIN locations l ON mo.location_id = l.location_id
WHERE mo.status IN ('Completed', 'Closed');
"#,
};

/// Windows are measured from `julianday('now')` at query time.
pub const PRODUCT_VELOCITY: ViewDefinition = ViewDefinition {
    name: "product_velocity",
    phase: ViewPhase::TimeSeries,
    description: "Rolling 7/30/90 day shipped quantities, days of stock and a FAST/MEDIUM/SLOW velocity tier per active product.",
    sql: r#"CREATE VIEW IF NOT EXISTS product_velocity AS
SELECT
  p.product_id,
  p.sku,
  p.name AS product_name,
  p.category_id,
  c.name AS category_name,
  COALESCE(ps.quantity_on_hand, '0') AS quantity_on_hand,
  COALESCE(sales.sold_7d, '0') AS sold_7d,
  COALESCE(sales.sold_30d, '0') AS sold_30d,
  COALESCE(sales.sold_90d, '0') AS sold_90d,
  CASE
    WHEN COALESCE(sales.sold_30d, 0) > 0
    THEN CAST(CAST(sales.sold_30d AS REAL) / 30.0 AS TEXT)
    ELSE '0'
  END AS avg_daily_sales,
  CASE
    WHEN COALESCE(sales.sold_30d, 0) > 0
    THEN CAST(
      CAST(COALESCE(ps.quantity_on_hand, '0') AS REAL) /
      (CAST(sales.sold_30d AS REAL) / 30.0)
      AS TEXT
    )
    ELSE NULL
  END AS days_of_stock,
  sales.last_sale_date,
  CASE
    WHEN COALESCE(sales.sold_30d, 0) / 30.0 > 1 THEN 'FAST'
    WHEN COALESCE(sales.sold_30d, 0) / 30.0 > 0.1 THEN 'MEDIUM'
    ELSE 'SLOW'
  END AS velocity_tier
FROM products p
LEFT JOIN categories c ON p.category_id = c.category_id
LEFT JOIN product_summary ps ON p.product_id = ps.product_id AND ps.location_id IS NULL
LEFT JOIN (
  SELECT
    sol.product_id,
    SUM(CASE
      WHEN julianday('now') - julianday(so.order_date) <= 7
      THEN CAST(COALESCE(sol.quantity_shipped, '0') AS REAL)
      ELSE 0
    END) AS sold_7d,
    SUM(CASE
      WHEN julianday('now') - julianday(so.order_date) <= 30
      THEN CAST(COALESCE(sol.quantity_shipped, '0') AS REAL)
      ELSE 0
    END) AS sold_30d,
    SUM(CASE
      WHEN julianday('now') - julianday(so.order_date) <= 90
      THEN CAST(COALESCE(sol.quantity_shipped, '0') AS REAL)
      ELSE 0
    END) AS sold_90d,
    MAX(so.order_date) AS last_sale_date
  FROM sales_order_lines sol
  INNER JOIN sales_orders so ON sol.sales_order_id = so.sales_order_id
  WHERE so.status IN ('Completed', 'Shipped', 'Closed')
    AND julianday('now') - julianday(so.order_date) <= 90
  GROUP BY sol.product_id
) sales ON p.product_id = sales.product_id
WHERE p.is_active = 1;
"#,
};

/// Unit cost is the flat `products.cost` field. Days are measured from
/// `julianday('now')` at query time, so rows age without re-creating the view.
pub const DEAD_STOCK: ViewDefinition = ViewDefinition {
    name: "dead_stock",
    phase: ViewPhase::TimeSeries,
    description: "Stock per product and location with no movement for 30+ days, tiered 30+/60+/90+.",
    sql: r#"CREATE VIEW IF NOT EXISTS dead_stock AS
SELECT
  inv.product_id,
  inv.sku,
  inv.product_name,
  inv.category_id,
  inv.category_name,
  inv.location_id,
  inv.location_name,
  inv.quantity_on_hand,
  inv.unit_cost,
  CAST(
    CAST(COALESCE(inv.quantity_on_hand, '0') AS REAL) *
    CAST(COALESCE(inv.unit_cost, '0') AS REAL)
    AS TEXT
  ) AS total_value,
  movements.last_movement_date,
  CAST(julianday('now') - julianday(COALESCE(movements.last_movement_date, '1900-01-01')) AS INTEGER) AS days_since_movement,
  CASE
    WHEN julianday('now') - julianday(COALESCE(movements.last_movement_date, '1900-01-01')) >= 90 THEN '90+'
    WHEN julianday('now') - julianday(COALESCE(movements.last_movement_date, '1900-01-01')) >= 60 THEN '60+'
    WHEN julianday('now') - julianday(COALESCE(movements.last_movement_date, '1900-01-01')) >= 30 THEN '30+'
    ELSE NULL
  END AS dead_stock_tier
FROM (
  -- Current inventory by product/location
  SELECT
    ps.product_id,
    p.sku,
    p.name AS product_name,
    p.category_id,
    c.name AS category_name,
    ps.location_id,
    l.name AS location_name,
    ps.quantity_on_hand,
    p.cost AS unit_cost
  FROM product_summary ps
  INNER JOIN products p ON ps.product_id = p.product_id
  LEFT JOIN categories c ON p.category_id = c.category_id
  LEFT JOIN locations l ON ps.location_id = l.location_id
  WHERE ps.location_id IS NOT NULL
    AND CAST(COALESCE(ps.quantity_on_hand, '0') AS REAL) > 0
) inv
LEFT JOIN (
  -- Last movement date per product/location from all movement sources
  SELECT
    product_id,
    location_id,
    MAX(movement_date) AS last_movement_date
  FROM (
    -- PO Receipts
    SELECT
      pol.product_id,
      po.location_id,
      po.order_date AS movement_date
    FROM purchase_order_lines pol
    INNER JOIN purchase_orders po ON pol.purchase_order_id = po.purchase_order_id
    WHERE po.status IN ('Completed', 'Closed')
      AND CAST(COALESCE(pol.quantity_received, '0') AS REAL) > 0

    UNION ALL

    -- SO Shipments
    SELECT
      sol.product_id,
      so.location_id,
      so.order_date AS movement_date
    FROM sales_order_lines sol
    INNER JOIN sales_orders so ON sol.sales_order_id = so.sales_order_id
    WHERE so.status IN ('Completed', 'Shipped', 'Closed')
      AND CAST(COALESCE(sol.quantity_shipped, '0') AS REAL) > 0

    UNION ALL

    -- Transfers OUT
    SELECT
      stl.product_id,
      st.from_location_id AS location_id,
      st.transfer_date AS movement_date
    FROM stock_transfer_lines stl
    INNER JOIN stock_transfers st ON stl.stock_transfer_id = st.stock_transfer_id
    WHERE st.status IN ('Completed', 'Closed')

    UNION ALL

    -- Transfers IN
    SELECT
      stl.product_id,
      st.to_location_id AS location_id,
      st.transfer_date AS movement_date
    FROM stock_transfer_lines stl
    INNER JOIN stock_transfers st ON stl.stock_transfer_id = st.stock_transfer_id
    WHERE st.status IN ('Completed', 'Closed')

    UNION ALL

    -- Adjustments
    SELECT
      sal.product_id,
      sa.location_id,
      sa.adjustment_date AS movement_date
    FROM stock_adjustment_lines sal
    INNER JOIN stock_adjustments sa ON sal.stock_adjustment_id = sa.stock_adjustment_id
  ) all_movements
  GROUP BY product_id, location_id
) movements ON inv.product_id = movements.product_id
           AND inv.location_id = movements.location_id
WHERE julianday('now') - julianday(COALESCE(movements.last_movement_date, '1900-01-01')) >= 30;
"#,
};
