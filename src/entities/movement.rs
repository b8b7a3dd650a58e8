//! Movement entity - One append-only ledger entry for a supplier account.
//!
//! A movement is either a payment (`pago`, reduces what the store owes) or an
//! order (`pedido`, increases it). The amount is always the positive magnitude
//! of the transaction; direction is implied by the kind. Movements are
//! terminal facts: once written they are never updated or deleted, and they
//! are the sole source of truth for a supplier's balance.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The two kinds of ledger movement, stored as the legacy `tipo` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum MovementKind {
    /// A payment to the supplier; decreases the balance
    #[sea_orm(string_value = "pago")]
    Payment,
    /// An order placed with the supplier; increases the balance
    #[sea_orm(string_value = "pedido")]
    Order,
}

/// Movement database model, backed by the legacy `movimientos_proveedores` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movimientos_proveedores")]
pub struct Model {
    /// Unique, monotonically assigned identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Supplier this movement belongs to
    #[sea_orm(column_name = "proveedor_id")]
    pub supplier_id: i64,
    /// Payment or order
    #[sea_orm(column_name = "tipo")]
    pub kind: MovementKind,
    /// Positive magnitude of the transaction
    #[sea_orm(column_name = "monto")]
    pub amount: f64,
    /// Optional free-text description
    #[sea_orm(column_name = "descripcion")]
    pub description: Option<String>,
    /// Entry time, or the backdated delivery date for orders
    #[sea_orm(column_name = "fecha")]
    pub timestamp: DateTimeUtc,
}

/// Defines relationships between Movement and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each movement belongs to one supplier
    #[sea_orm(
        belongs_to = "super::supplier::Entity",
        from = "Column::SupplierId",
        to = "super::supplier::Column::Id"
    )]
    Supplier,
    /// An order-kind movement owns exactly one boleta
    #[sea_orm(has_one = "super::boleta::Entity")]
    Boleta,
}

impl Related<super::supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl Related<super::boleta::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Boleta.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
