//! Product entity - One article in the store catalog.
//!
//! Products carry both a cost price (what the supplier charges) and a sale
//! price (what the store charges), plus stock on hand and an optional barcode.
//! Sale prices are the target of the bulk price-increase feature.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model, backed by the legacy `articulos` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "articulos")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Product name (required, non-empty)
    #[sea_orm(column_name = "nombre")]
    pub name: String,
    /// Optional category reference
    #[sea_orm(column_name = "id_categoria")]
    pub category_id: Option<i64>,
    /// Free-text subcategory label
    #[sea_orm(column_name = "subcategoria")]
    pub subcategory: Option<String>,
    /// Optional supplier reference
    #[sea_orm(column_name = "id_proveedor")]
    pub supplier_id: Option<i64>,
    /// What the supplier charges per unit
    #[sea_orm(column_name = "precio_costo")]
    pub cost_price: f64,
    /// What the store charges per unit
    #[sea_orm(column_name = "precio_venta")]
    pub sale_price: f64,
    /// Units currently in stock
    #[sea_orm(column_name = "cantidad")]
    pub stock: i64,
    /// Free-text state, defaults to `"activo"`
    #[sea_orm(column_name = "estado")]
    pub status: String,
    /// Optional barcode
    #[sea_orm(column_name = "codigo_barras")]
    pub barcode: Option<String>,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A product may belong to one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    /// A product may come from one supplier
    #[sea_orm(
        belongs_to = "super::supplier::Entity",
        from = "Column::SupplierId",
        to = "super::supplier::Column::Id"
    )]
    Supplier,
    /// One product may appear on many receipt lines
    #[sea_orm(has_many = "super::boleta_item::Entity")]
    BoletaItems,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl Related<super::boleta_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoletaItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
