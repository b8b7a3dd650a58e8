//! Category taxonomy business logic.
//!
//! Plain CRUD over the category table plus the flat subcategory name list.
//! No business rules beyond non-blank names.

use crate::{
    entities::{Category, Subcategory, category, subcategory},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Creates a category, validating the name.
pub async fn create_category(
    db: &DatabaseConnection,
    name: String,
    subcategory: Option<String>,
    description: Option<String>,
) -> Result<category::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Category name cannot be empty".to_string(),
        });
    }

    let category = category::ActiveModel {
        name: Set(name.trim().to_string()),
        subcategory: Set(subcategory),
        description: Set(description),
        status: Set("activo".to_string()),
        ..Default::default()
    };

    category.insert(db).await.map_err(Into::into)
}

/// Finds a category by its unique ID.
pub async fn get_category_by_id(
    db: &DatabaseConnection,
    category_id: i64,
) -> Result<Option<category::Model>> {
    Category::find_by_id(category_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists every category, alphabetically.
pub async fn get_all_categories(db: &DatabaseConnection) -> Result<Vec<category::Model>> {
    Category::find()
        .order_by_asc(category::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Updates a category's name, subcategory label, and description.
pub async fn update_category(
    db: &DatabaseConnection,
    category_id: i64,
    name: String,
    subcategory: Option<String>,
    description: Option<String>,
) -> Result<category::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Category name cannot be empty".to_string(),
        });
    }

    let existing = Category::find_by_id(category_id)
        .one(db)
        .await?
        .ok_or(Error::CategoryNotFound { id: category_id })?;

    let mut active: category::ActiveModel = existing.into();
    active.name = Set(name.trim().to_string());
    active.subcategory = Set(subcategory);
    active.description = Set(description);

    active.update(db).await.map_err(Into::into)
}

/// Adds a subcategory name to the flat list.
pub async fn create_subcategory(
    db: &DatabaseConnection,
    name: String,
) -> Result<subcategory::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Subcategory name cannot be empty".to_string(),
        });
    }

    let subcategory = subcategory::ActiveModel {
        name: Set(name.trim().to_string()),
        ..Default::default()
    };

    subcategory.insert(db).await.map_err(Into::into)
}

/// Lists every subcategory name, alphabetically.
pub async fn get_all_subcategories(db: &DatabaseConnection) -> Result<Vec<subcategory::Model>> {
    Subcategory::find()
        .order_by_asc(subcategory::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}
