//! Test doubles and a reference base schema for exercising the views.

use std::sync::Mutex;

use async_trait::async_trait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use super::executor::SqlExecutor;

/// Records every statement; optionally fails on statements with a prefix
#[derive(Default)]
pub struct RecordingExecutor {
    statements: Mutex<Vec<String>>,
    fail_prefix: Option<String>,
}

impl RecordingExecutor {
    pub fn failing_on(prefix: &str) -> Self {
        Self {
            statements: Mutex::new(Vec::new()),
            fail_prefix: Some(prefix.to_string()),
        }
    }

    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }
}

#[async_trait]
impl SqlExecutor for RecordingExecutor {
    async fn execute_sql(&self, sql: &str) -> Result<(), DbErr> {
        self.statements.lock().unwrap().push(sql.to_string());
        match &self.fail_prefix {
            Some(prefix) if sql.starts_with(prefix.as_str()) => {
                Err(DbErr::Custom(format!("rejected: {}", prefix)))
            }
            _ => Ok(()),
        }
    }
}

/// Minimal copy of the external inventory schema: only the tables and
/// columns the views read. Quantities and money are TEXT, as upstream.
pub const BASE_SCHEMA: &str = r#"
CREATE TABLE categories (
    category_id TEXT PRIMARY KEY,
    name TEXT,
    parent_category_id TEXT
);
CREATE TABLE locations (
    location_id TEXT PRIMARY KEY,
    name TEXT,
    abbreviation TEXT,
    is_active INTEGER,
    is_shippable INTEGER,
    is_receivable INTEGER
);
CREATE TABLE products (
    product_id TEXT PRIMARY KEY,
    sku TEXT,
    name TEXT,
    description TEXT,
    item_type TEXT,
    is_active INTEGER,
    category_id TEXT,
    cost TEXT,
    track_serials INTEGER,
    track_lots INTEGER,
    track_expiry INTEGER,
    shelf_life_days INTEGER
);
CREATE TABLE product_summary (
    product_id TEXT,
    location_id TEXT,
    quantity_on_hand TEXT,
    quantity_available TEXT,
    quantity_reserved TEXT,
    quantity_reserved_for_sales TEXT,
    quantity_reserved_for_manufacturing TEXT,
    quantity_reserved_for_transfers TEXT,
    quantity_on_purchase_order TEXT,
    quantity_on_sales_order TEXT,
    quantity_on_work_order TEXT,
    quantity_on_transfer_order TEXT,
    quantity_picked TEXT,
    quantity_in_transit TEXT,
    quantity_buildable TEXT,
    average_cost TEXT,
    image_small_url TEXT
);
CREATE TABLE payment_terms (
    payment_terms_id TEXT PRIMARY KEY,
    name TEXT
);
CREATE TABLE pricing_schemes (
    pricing_scheme_id TEXT PRIMARY KEY,
    name TEXT,
    is_default INTEGER
);
CREATE TABLE product_prices (
    product_id TEXT,
    pricing_scheme_id TEXT,
    price TEXT
);
CREATE TABLE vendors (
    vendor_id TEXT PRIMARY KEY,
    name TEXT,
    vendor_code TEXT,
    email TEXT,
    phone TEXT,
    is_active INTEGER,
    payment_terms_id TEXT
);
CREATE TABLE vendor_items (
    vendor_id TEXT,
    product_id TEXT,
    vendor_item_code TEXT,
    cost TEXT,
    lead_time_days INTEGER
);
CREATE TABLE customers (
    customer_id TEXT PRIMARY KEY,
    name TEXT,
    customer_code TEXT,
    email TEXT,
    phone TEXT,
    is_active INTEGER,
    pricing_scheme_id TEXT,
    payment_terms_id TEXT
);
CREATE TABLE reorder_settings (
    product_id TEXT,
    location_id TEXT,
    vendor_id TEXT,
    from_location_id TEXT,
    reorder_point TEXT,
    reorder_quantity TEXT,
    enable_reordering INTEGER
);
CREATE TABLE purchase_orders (
    purchase_order_id TEXT PRIMARY KEY,
    order_number TEXT,
    status TEXT,
    order_date TEXT,
    expected_date TEXT,
    vendor_id TEXT,
    location_id TEXT,
    total TEXT,
    remarks TEXT,
    last_modified_date_time TEXT
);
CREATE TABLE purchase_order_lines (
    purchase_order_line_id TEXT PRIMARY KEY,
    purchase_order_id TEXT,
    product_id TEXT,
    quantity TEXT,
    quantity_received TEXT,
    unit_cost TEXT
);
CREATE TABLE sales_orders (
    sales_order_id TEXT PRIMARY KEY,
    order_number TEXT,
    status TEXT,
    order_date TEXT,
    expected_ship_date TEXT,
    customer_id TEXT,
    location_id TEXT,
    total TEXT,
    remarks TEXT,
    last_modified_date_time TEXT
);
CREATE TABLE sales_order_lines (
    sales_order_line_id TEXT PRIMARY KEY,
    sales_order_id TEXT,
    product_id TEXT,
    quantity TEXT,
    quantity_shipped TEXT,
    unit_price TEXT
);
CREATE TABLE manufacturing_orders (
    manufacturing_order_id TEXT PRIMARY KEY,
    order_number TEXT,
    status TEXT,
    order_date TEXT,
    expected_date TEXT,
    product_id TEXT,
    location_id TEXT,
    quantity TEXT,
    quantity_completed TEXT,
    remarks TEXT,
    last_modified_date_time TEXT
);
CREATE TABLE stock_transfers (
    stock_transfer_id TEXT PRIMARY KEY,
    transfer_number TEXT,
    status TEXT,
    transfer_date TEXT,
    from_location_id TEXT,
    to_location_id TEXT,
    remarks TEXT,
    last_modified_date_time TEXT
);
CREATE TABLE stock_transfer_lines (
    stock_transfer_line_id TEXT PRIMARY KEY,
    stock_transfer_id TEXT,
    line_num INTEGER,
    product_id TEXT,
    quantity TEXT,
    from_sublocation TEXT,
    to_sublocation TEXT
);
CREATE TABLE stock_adjustments (
    stock_adjustment_id TEXT PRIMARY KEY,
    adjustment_number TEXT,
    adjustment_date TEXT,
    location_id TEXT
);
CREATE TABLE stock_adjustment_lines (
    stock_adjustment_line_id TEXT PRIMARY KEY,
    stock_adjustment_id TEXT,
    product_id TEXT,
    quantity TEXT
);
CREATE TABLE inventory_lines (
    inventory_line_id TEXT PRIMARY KEY,
    product_id TEXT,
    location_id TEXT,
    sublocation TEXT,
    serial TEXT,
    lot_id TEXT,
    quantity_on_hand TEXT
);
CREATE TABLE item_boms (
    item_bom_id TEXT PRIMARY KEY,
    parent_product_id TEXT,
    component_product_id TEXT,
    quantity TEXT
);
"#;

/// In-memory SQLite with the base schema applied.
///
/// A single pooled connection keeps every query on the same in-memory database.
pub async fn memory_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    execute_script(&db, BASE_SCHEMA).await;
    db
}

/// Execute `;`-separated statements one at a time
pub async fn execute_script(db: &DatabaseConnection, script: &str) {
    for statement in script.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            db.execute_sql(trimmed).await.unwrap();
        }
    }
}
