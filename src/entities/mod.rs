//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities mirror the legacy SQLite schema of the store (Spanish table
//! and column names) while exposing English field names to Rust code.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod boleta;
pub mod boleta_item;
pub mod category;
pub mod movement;
pub mod product;
pub mod subcategory;
pub mod supplier;

// Re-export specific types to avoid conflicts
pub use boleta::{Column as BoletaColumn, Entity as Boleta, Model as BoletaModel};
pub use boleta_item::{Column as BoletaItemColumn, Entity as BoletaItem, Model as BoletaItemModel};
pub use category::{Column as CategoryColumn, Entity as Category, Model as CategoryModel};
pub use movement::{
    Column as MovementColumn, Entity as Movement, Model as MovementModel, MovementKind,
};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use subcategory::{
    Column as SubcategoryColumn, Entity as Subcategory, Model as SubcategoryModel,
};
pub use supplier::{Column as SupplierColumn, Entity as Supplier, Model as SupplierModel};
