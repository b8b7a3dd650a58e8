//! Supplier entity - Represents the businesses the store buys from.
//!
//! Each supplier carries contact details and a materialized running balance
//! (`saldo`). The balance is owned exclusively by the ledger: general CRUD
//! never writes it, only movement operations do, and always inside the same
//! database transaction as the movement insert.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Supplier database model, backed by the legacy `proveedores` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "proveedores")]
pub struct Model {
    /// Unique identifier for the supplier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Business name (required, non-empty)
    #[sea_orm(column_name = "nombre")]
    pub name: String,
    /// Contact person
    #[sea_orm(column_name = "contacto")]
    pub contact: Option<String>,
    /// Phone number
    #[sea_orm(column_name = "telefono")]
    pub phone: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Street address, printed on receipts
    #[sea_orm(column_name = "direccion")]
    pub address: Option<String>,
    /// City
    #[sea_orm(column_name = "ciudad")]
    pub city: Option<String>,
    /// Net amount the store currently owes this supplier.
    /// Maintained only through ledger operations, never edited directly.
    #[sea_orm(column_name = "saldo")]
    pub balance: f64,
    /// Free-text state, defaults to `"activo"`
    #[sea_orm(column_name = "estado")]
    pub status: String,
    /// When the supplier was registered
    #[sea_orm(column_name = "fecha_registro")]
    pub registered_at: DateTimeUtc,
}

/// Defines relationships between Supplier and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One supplier has many ledger movements
    #[sea_orm(has_many = "super::movement::Entity")]
    Movements,
    /// One supplier has many order receipts
    #[sea_orm(has_many = "super::boleta::Entity")]
    Boletas,
    /// One supplier has many catalog products
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::movement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movements.def()
    }
}

impl Related<super::boleta::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Boletas.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
