//! Boleta entity - The order receipt attached to an order-kind movement.
//!
//! A boleta is a 1:1 enrichment of a `pedido` movement: it carries the
//! computed subtotal/total and owns the receipt line items. It lives and dies
//! with its parent movement; no edit operations exist. The `estado` field has
//! a single value today (`"activa"`), with no defined lifecycle.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Boleta database model, backed by the legacy `boletas_proveedores` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "boletas_proveedores")]
pub struct Model {
    /// Unique identifier for the boleta
    #[sea_orm(primary_key)]
    pub id: i64,
    /// The order movement this receipt decorates
    #[sea_orm(column_name = "movimiento_id")]
    pub movement_id: i64,
    /// Supplier the order was placed with
    #[sea_orm(column_name = "proveedor_id")]
    pub supplier_id: i64,
    /// Issue date; matches the movement timestamp (backdated for deliveries)
    #[sea_orm(column_name = "fecha")]
    pub issued_at: DateTimeUtc,
    /// Sum of the line-item subtotals
    pub subtotal: f64,
    /// Grand total; currently equal to the subtotal (no taxes or discounts)
    pub total: f64,
    /// Free-text state, defaults to `"activa"`
    #[sea_orm(column_name = "estado")]
    pub status: String,
}

/// Defines relationships between Boleta and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each boleta decorates one movement
    #[sea_orm(
        belongs_to = "super::movement::Entity",
        from = "Column::MovementId",
        to = "super::movement::Column::Id"
    )]
    Movement,
    /// Each boleta belongs to one supplier
    #[sea_orm(
        belongs_to = "super::supplier::Entity",
        from = "Column::SupplierId",
        to = "super::supplier::Column::Id"
    )]
    Supplier,
    /// One boleta owns one or more line items
    #[sea_orm(has_many = "super::boleta_item::Entity")]
    Items,
}

impl Related<super::movement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movement.def()
    }
}

impl Related<super::supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl Related<super::boleta_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
