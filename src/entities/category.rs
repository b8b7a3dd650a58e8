//! Category entity - Top-level product taxonomy.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category database model, backed by the legacy `categorias` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categorias")]
pub struct Model {
    /// Unique identifier for the category
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Category name (required, non-empty)
    #[sea_orm(column_name = "categoria")]
    pub name: String,
    /// Optional subcategory label attached to this category
    #[sea_orm(column_name = "subcategoria")]
    pub subcategory: Option<String>,
    /// Optional description
    #[sea_orm(column_name = "descripcion")]
    pub description: Option<String>,
    /// Free-text state, defaults to `"activo"`
    #[sea_orm(column_name = "estado")]
    pub status: String,
}

/// Defines relationships between Category and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One category has many products
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
