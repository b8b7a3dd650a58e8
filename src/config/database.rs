//! Database configuration module for the Huellitas core.
//!
//! This module handles the `SQLite` connection and table creation using `SeaORM`.
//! Schema is generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the database file always matches the
//! Rust structs without hand-written SQL. Tables are created in dependency
//! order because the driver enforces the declared foreign keys.

use crate::entities::{Boleta, BoletaItem, Category, Movement, Product, Subcategory, Supplier};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from the environment or returns the default local path.
///
/// Looks for `DATABASE_URL` and falls back to the local `SQLite` file used by
/// the desktop installation.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/huellitas.sqlite?mode=rwc".to_string())
}

/// Establishes a connection to the `SQLite` database.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all tables from the entity definitions, if they do not exist yet.
///
/// Referenced tables are created before the tables that point at them:
/// suppliers and taxonomy first, then products, then the ledger tables.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let supplier_table = schema
        .create_table_from_entity(Supplier)
        .if_not_exists()
        .to_owned();
    let category_table = schema
        .create_table_from_entity(Category)
        .if_not_exists()
        .to_owned();
    let subcategory_table = schema
        .create_table_from_entity(Subcategory)
        .if_not_exists()
        .to_owned();
    let product_table = schema
        .create_table_from_entity(Product)
        .if_not_exists()
        .to_owned();
    let movement_table = schema
        .create_table_from_entity(Movement)
        .if_not_exists()
        .to_owned();
    let boleta_table = schema
        .create_table_from_entity(Boleta)
        .if_not_exists()
        .to_owned();
    let boleta_item_table = schema
        .create_table_from_entity(BoletaItem)
        .if_not_exists()
        .to_owned();

    db.execute(builder.build(&supplier_table)).await?;
    db.execute(builder.build(&category_table)).await?;
    db.execute(builder.build(&subcategory_table)).await?;
    db.execute(builder.build(&product_table)).await?;
    db.execute(builder.build(&movement_table)).await?;
    db.execute(builder.build(&boleta_table)).await?;
    db.execute(builder.build(&boleta_item_table)).await?;

    Ok(())
}
