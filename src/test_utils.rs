//! Shared test utilities for the Huellitas core.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{boleta::NewLineItem, product, supplier},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test supplier with just a name; every contact field is empty.
pub async fn create_test_supplier(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::supplier::Model> {
    supplier::create_supplier(db, name.to_string(), None, None, None, None, None).await
}

/// Creates a test product with the given sale price.
///
/// # Defaults
/// * `cost_price`: half the sale price
/// * `stock`: 10
/// * no category, subcategory, supplier, or barcode
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    sale_price: f64,
) -> Result<entities::product::Model> {
    product::create_product(
        db,
        product::NewProduct {
            name: name.to_string(),
            category_id: None,
            subcategory: None,
            supplier_id: None,
            cost_price: sale_price / 2.0,
            sale_price,
            stock: 10,
            barcode: None,
        },
    )
    .await
}

/// Builds an order line item with no catalog reference.
#[must_use]
pub fn sample_item(name: &str, quantity: i64, unit_price: f64) -> NewLineItem {
    NewLineItem {
        product_id: None,
        product_name: name.to_string(),
        quantity,
        unit_price,
    }
}
