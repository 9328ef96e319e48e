//! Phase 4: business analytics views.

use contracts::views::{ViewDefinition, ViewPhase};

pub const CUSTOMER_360: ViewDefinition = ViewDefinition {
    name: "customer_360",
    phase: ViewPhase::BusinessAnalytics,
    description: "Customer profile with order counts, revenue, average order value and open order exposure.",
    sql: r#"CREATE VIEW IF NOT EXISTS customer_360 AS
SELECT
  c.customer_id,
  c.name AS customer_name,
  c.customer_code,
  c.email,
  c.phone,
  c.is_active,

  c.pricing_scheme_id,
  ps.name AS pricing_scheme_name,
  c.payment_terms_id,
  pt.name AS payment_terms_name,

  COALESCE(order_stats.total_orders, 0) AS total_orders,
  COALESCE(order_stats.completed_orders, 0) AS completed_orders,
  COALESCE(order_stats.cancelled_orders, 0) AS cancelled_orders,

  COALESCE(order_stats.total_revenue, '0') AS total_revenue,
  CASE
    WHEN COALESCE(order_stats.completed_orders, 0) > 0
    THEN CAST(CAST(COALESCE(order_stats.total_revenue, '0') AS REAL) / order_stats.completed_orders AS TEXT)
    ELSE '0'
  END AS average_order_value,

  COALESCE(order_stats.open_orders, 0) AS open_orders,
  COALESCE(order_stats.open_orders_value, '0') AS open_orders_value,

  order_stats.first_order_date,
  order_stats.last_order_date

FROM customers c
LEFT JOIN pricing_schemes ps ON c.pricing_scheme_id = ps.pricing_scheme_id
LEFT JOIN payment_terms pt ON c.payment_terms_id = pt.payment_terms_id
LEFT JOIN (
  SELECT
    customer_id,
    COUNT(*) AS total_orders,
    SUM(CASE WHEN status IN ('Completed', 'Shipped', 'Closed') THEN 1 ELSE 0 END) AS completed_orders,
    SUM(CASE WHEN status = 'Cancelled' THEN 1 ELSE 0 END) AS cancelled_orders,
    SUM(CASE WHEN status NOT IN ('Completed', 'Shipped', 'Closed', 'Cancelled') THEN 1 ELSE 0 END) AS open_orders,
    SUM(CASE WHEN status IN ('Completed', 'Shipped', 'Closed') THEN CAST(COALESCE(total, '0') AS REAL) ELSE 0 END) AS total_revenue,
    SUM(CASE WHEN status NOT IN ('Completed', 'Shipped', 'Closed', 'Cancelled') THEN CAST(COALESCE(total, '0') AS REAL) ELSE 0 END) AS open_orders_value,
    MIN(order_date) AS first_order_date,
    MAX(order_date) AS last_order_date
  FROM sales_orders
  GROUP BY customer_id
) order_stats ON c.customer_id = order_stats.customer_id;
"#,
};

/// Lead time is averaged over `vendor_items`, spend over completed or closed POs.
pub const VENDOR_SCORECARD: ViewDefinition = ViewDefinition {
    name: "vendor_scorecard",
    phase: ViewPhase::BusinessAnalytics,
    description: "Vendor profile with products supplied, lead times, PO counts and spend.",
    sql: r#"CREATE VIEW IF NOT EXISTS vendor_scorecard AS
SELECT
  v.vendor_id,
  v.name AS vendor_name,
  v.vendor_code,
  v.email,
  v.phone,
  v.is_active,

  v.payment_terms_id,
  pt.name AS payment_terms_name,

  COALESCE(product_stats.products_supplied, 0) AS products_supplied,
  product_stats.avg_lead_time_days,

  COALESCE(po_stats.total_pos, 0) AS total_pos,
  COALESCE(po_stats.completed_pos, 0) AS completed_pos,
  COALESCE(po_stats.cancelled_pos, 0) AS cancelled_pos,
  COALESCE(po_stats.open_pos, 0) AS open_pos,

  COALESCE(po_stats.total_spend, '0') AS total_spend,
  CASE
    WHEN COALESCE(po_stats.completed_pos, 0) > 0
    THEN CAST(CAST(COALESCE(po_stats.total_spend, '0') AS REAL) / po_stats.completed_pos AS TEXT)
    ELSE '0'
  END AS average_po_value,
  COALESCE(po_stats.open_pos_value, '0') AS open_pos_value,

  po_stats.first_po_date,
  po_stats.last_po_date

FROM vendors v
LEFT JOIN payment_terms pt ON v.payment_terms_id = pt.payment_terms_id
LEFT JOIN (
  SELECT
    vendor_id,
    COUNT(DISTINCT product_id) AS products_supplied,
    AVG(lead_time_days) AS avg_lead_time_days
  FROM vendor_items
  GROUP BY vendor_id
) product_stats ON v.vendor_id = product_stats.vendor_id
LEFT JOIN (
  SELECT
    vendor_id,
    COUNT(*) AS total_pos,
    SUM(CASE WHEN status IN ('Completed', 'Closed') THEN 1 ELSE 0 END) AS completed_pos,
    SUM(CASE WHEN status = 'Cancelled' THEN 1 ELSE 0 END) AS cancelled_pos,
    SUM(CASE WHEN status NOT IN ('Completed', 'Closed', 'Cancelled') THEN 1 ELSE 0 END) AS open_pos,
    SUM(CASE WHEN status IN ('Completed', 'Closed') THEN CAST(COALESCE(total, '0') AS REAL) ELSE 0 END) AS total_spend,
    SUM(CASE WHEN status NOT IN ('Completed', 'Closed', 'Cancelled') THEN CAST(COALESCE(total, '0') AS REAL) ELSE 0 END) AS open_pos_value,
    MIN(order_date) AS first_po_date,
    MAX(order_date) AS last_po_date
  FROM purchase_orders
  GROUP BY vendor_id
) po_stats ON v.vendor_id = po_stats.vendor_id;
"#,
};

/// Vendor cost is ranked per product: the vendor named in global reorder
/// settings wins, then the lowest numeric cost.
pub const PRODUCT_MARGIN: ViewDefinition = ViewDefinition {
    name: "product_margin",
    phase: ViewPhase::BusinessAnalytics,
    description: "Default selling price against preferred or lowest vendor cost, as margin amount, margin percent and markup percent.",
    sql: r#"CREATE VIEW IF NOT EXISTS product_margin AS
SELECT
  p.product_id,
  p.sku,
  p.name AS product_name,
  p.category_id,
  c.name AS category_name,
  p.item_type,
  p.is_active,

  pp.price AS default_sell_price,
  pp.pricing_scheme_id,
  ps.name AS pricing_scheme_name,

  vendor_cost.cost AS vendor_cost,
  vendor_cost.vendor_id AS preferred_vendor_id,
  v.name AS preferred_vendor_name,

  CAST(COALESCE(CAST(pp.price AS REAL), 0) - COALESCE(CAST(vendor_cost.cost AS REAL), 0) AS TEXT) AS margin_amount,

  CASE
    WHEN COALESCE(CAST(pp.price AS REAL), 0) > 0
    THEN CAST(
      ((COALESCE(CAST(pp.price AS REAL), 0) - COALESCE(CAST(vendor_cost.cost AS REAL), 0)) / CAST(pp.price AS REAL)) * 100
      AS TEXT
    )
    ELSE NULL
  END AS margin_percent,

  CASE
    WHEN COALESCE(CAST(vendor_cost.cost AS REAL), 0) > 0
    THEN CAST(
      ((COALESCE(CAST(pp.price AS REAL), 0) - COALESCE(CAST(vendor_cost.cost AS REAL), 0)) / CAST(vendor_cost.cost AS REAL)) * 100
      AS TEXT
    )
    ELSE NULL
  END AS markup_percent

FROM products p
LEFT JOIN categories c ON p.category_id = c.category_id
LEFT JOIN product_prices pp ON p.product_id = pp.product_id
LEFT JOIN pricing_schemes ps ON pp.pricing_scheme_id = ps.pricing_scheme_id
LEFT JOIN (
  SELECT
    vi.product_id,
    vi.vendor_id,
    vi.cost,
    ROW_NUMBER() OVER (
      PARTITION BY vi.product_id
      ORDER BY
        CASE WHEN rs.vendor_id IS NOT NULL THEN 0 ELSE 1 END,
        CAST(vi.cost AS REAL) ASC
    ) AS rn
  FROM vendor_items vi
  LEFT JOIN reorder_settings rs ON vi.product_id = rs.product_id
    AND vi.vendor_id = rs.vendor_id
    AND rs.location_id IS NULL
) vendor_cost ON p.product_id = vendor_cost.product_id AND vendor_cost.rn = 1
LEFT JOIN vendors v ON vendor_cost.vendor_id = v.vendor_id
WHERE pp.pricing_scheme_id IS NULL OR ps.is_default = 1;
"#,
};

/// Line cost uses the preferred-then-cheapest vendor; `total_bom_cost` uses
/// the cheapest vendor only.
pub const BOM_COSTED: ViewDefinition = ViewDefinition {
    name: "bom_costed",
    phase: ViewPhase::BusinessAnalytics,
    description: "Bill of materials lines costed from the preferred or lowest vendor cost, with per-parent totals.",
    sql: r#"CREATE VIEW IF NOT EXISTS bom_costed AS
SELECT
  bom.item_bom_id,

  bom.parent_product_id,
  parent.sku AS parent_sku,
  parent.name AS parent_product_name,

  bom.component_product_id,
  component.sku AS component_sku,
  component.name AS component_product_name,

  bom.quantity,

  COALESCE(component_cost.cost, '0') AS component_unit_cost,
  component_cost.vendor_id AS component_vendor_id,
  v.name AS component_vendor_name,

  CAST(CAST(bom.quantity AS REAL) * COALESCE(CAST(component_cost.cost AS REAL), 0) AS TEXT) AS line_cost,

  bom_totals.total_bom_cost,
  bom_totals.component_count

FROM item_boms bom
INNER JOIN products parent ON bom.parent_product_id = parent.product_id
INNER JOIN products component ON bom.component_product_id = component.product_id
LEFT JOIN (
  SELECT
    vi.product_id,
    vi.vendor_id,
    vi.cost,
    ROW_NUMBER() OVER (
      PARTITION BY vi.product_id
      ORDER BY
        CASE WHEN rs.vendor_id IS NOT NULL THEN 0 ELSE 1 END,
        CAST(vi.cost AS REAL) ASC
    ) AS rn
  FROM vendor_items vi
  LEFT JOIN reorder_settings rs ON vi.product_id = rs.product_id
    AND vi.vendor_id = rs.vendor_id
    AND rs.location_id IS NULL
) component_cost ON bom.component_product_id = component_cost.product_id AND component_cost.rn = 1
LEFT JOIN vendors v ON component_cost.vendor_id = v.vendor_id
LEFT JOIN (
  SELECT
    b.parent_product_id,
    COUNT(*) AS component_count,
    SUM(CAST(b.quantity AS REAL) * COALESCE(CAST(vc.cost AS REAL), 0)) AS total_bom_cost
  FROM item_boms b
  LEFT JOIN (
    SELECT
      vi.product_id,
      vi.cost,
      ROW_NUMBER() OVER (
        PARTITION BY vi.product_id
        ORDER BY CAST(vi.cost AS REAL) ASC
      ) AS rn
    FROM vendor_items vi
  ) vc ON b.component_product_id = vc.product_id AND vc.rn = 1
  GROUP BY b.parent_product_id
) bom_totals ON bom.parent_product_id = bom_totals.parent_product_id;
"#,
};

/// Leaf-level aggregation; parent categories are not rolled up.
pub const CATEGORY_INVENTORY_SUMMARY: ViewDefinition = ViewDefinition {
    name: "category_inventory_summary",
    phase: ViewPhase::BusinessAnalytics,
    description: "SKU counts, summed quantities and stock value per category.",
    sql: r#"CREATE VIEW IF NOT EXISTS category_inventory_summary AS
SELECT
  c.category_id,
  c.name AS category_name,
  c.parent_category_id,
  pc.name AS parent_category_name,

  COUNT(DISTINCT p.product_id) AS sku_count,
  SUM(CASE WHEN p.is_active = 1 THEN 1 ELSE 0 END) AS active_sku_count,

  SUM(CAST(COALESCE(ps.quantity_on_hand, '0') AS REAL)) AS total_quantity_on_hand,
  SUM(CAST(COALESCE(ps.quantity_available, '0') AS REAL)) AS total_quantity_available,
  SUM(CAST(COALESCE(ps.quantity_reserved, '0') AS REAL)) AS total_quantity_reserved,
  SUM(CAST(COALESCE(ps.quantity_on_purchase_order, '0') AS REAL)) AS total_quantity_on_purchase_order,
  SUM(CAST(COALESCE(ps.quantity_on_sales_order, '0') AS REAL)) AS total_quantity_on_sales_order,

  CAST(SUM(
    CAST(COALESCE(ps.quantity_on_hand, '0') AS REAL) *
    CAST(COALESCE(ps.average_cost, '0') AS REAL)
  ) AS TEXT) AS total_stock_value

FROM categories c
LEFT JOIN categories pc ON c.parent_category_id = pc.category_id
LEFT JOIN products p ON c.category_id = p.category_id
LEFT JOIN product_summary ps ON p.product_id = ps.product_id AND ps.location_id IS NULL
GROUP BY c.category_id, c.name, c.parent_category_id, pc.name;
"#,
};
