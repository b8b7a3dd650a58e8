//! Boleta line-item entity - One product line on an order receipt.
//!
//! The product name is captured at order time, not resolved live: renaming a
//! catalog product later never rewrites historical receipts. The catalog
//! reference is optional so a line can name a product the catalog does not
//! carry.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Line-item database model, backed by the legacy `boletas_items` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "boletas_items")]
pub struct Model {
    /// Unique identifier for the line item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Receipt this line belongs to
    #[sea_orm(column_name = "boleta_id")]
    pub boleta_id: i64,
    /// Optional reference into the product catalog
    #[sea_orm(column_name = "producto_id")]
    pub product_id: Option<i64>,
    /// Product name as captured at order time
    #[sea_orm(column_name = "producto_nombre")]
    pub product_name: String,
    /// Units ordered (positive)
    #[sea_orm(column_name = "cantidad")]
    pub quantity: i64,
    /// Price per unit (positive)
    #[sea_orm(column_name = "precio_unitario")]
    pub unit_price: f64,
    /// quantity x unit price, computed at insert time
    pub subtotal: f64,
}

/// Defines relationships between line items and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each line item belongs to one boleta
    #[sea_orm(
        belongs_to = "super::boleta::Entity",
        from = "Column::BoletaId",
        to = "super::boleta::Column::Id"
    )]
    Boleta,
    /// A line item may reference one catalog product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
}

impl Related<super::boleta::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Boleta.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
