//! Subcategory entity - Flat list of subcategory names.
//!
//! The legacy schema keeps subcategories as a standalone name list; products
//! and categories reference them by label, not by foreign key.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Subcategory database model, backed by the legacy `subcategorias` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subcategorias")]
pub struct Model {
    /// Unique identifier for the subcategory
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Subcategory name (required, non-empty)
    #[sea_orm(column_name = "nombre")]
    pub name: String,
}

/// Subcategories have no modeled relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
