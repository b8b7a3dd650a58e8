//! Product catalog business logic.
//!
//! CRUD and search over the article catalog, plus the bulk price-increase
//! feature: given a percentage, every selected product's sale price is raised
//! and then rounded up to a sensible shelf price (`smart_round`). The preview
//! step is pure so the screen can show old/new prices before anything is
//! written.

use crate::{
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, QuerySelect, Set, prelude::*};
use tracing::warn;

/// Input payload for creating a catalog product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Product name (required, non-empty)
    pub name: String,
    /// Optional category reference
    pub category_id: Option<i64>,
    /// Free-text subcategory label
    pub subcategory: Option<String>,
    /// Optional supplier reference
    pub supplier_id: Option<i64>,
    /// What the supplier charges per unit
    pub cost_price: f64,
    /// What the store charges per unit
    pub sale_price: f64,
    /// Units in stock
    pub stock: i64,
    /// Optional barcode
    pub barcode: Option<String>,
}

fn validate_price(price: f64) -> Result<()> {
    if price < 0.0 || !price.is_finite() {
        return Err(Error::InvalidAmount { amount: price });
    }
    Ok(())
}

/// Creates a new catalog product, performing input validation.
///
/// The name must be non-blank; prices must be non-negative and finite; stock
/// cannot be negative. The product starts in the `"activo"` state.
pub async fn create_product(db: &DatabaseConnection, new: NewProduct) -> Result<product::Model> {
    if new.name.trim().is_empty() {
        return Err(Error::Config {
            message: "Product name cannot be empty".to_string(),
        });
    }
    validate_price(new.cost_price)?;
    validate_price(new.sale_price)?;
    if new.stock < 0 {
        return Err(Error::InvalidQuantity {
            quantity: new.stock,
        });
    }

    let product = product::ActiveModel {
        name: Set(new.name.trim().to_string()),
        category_id: Set(new.category_id),
        subcategory: Set(new.subcategory),
        supplier_id: Set(new.supplier_id),
        cost_price: Set(new.cost_price),
        sale_price: Set(new.sale_price),
        stock: Set(new.stock),
        status: Set("activo".to_string()),
        barcode: Set(new.barcode),
        ..Default::default()
    };

    product.insert(db).await.map_err(Into::into)
}

/// Finds a product by its unique ID.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the whole catalog, ordered alphabetically by name.
pub async fn get_all_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Searches products by name with pagination.
///
/// Mirrors [`crate::core::supplier::search_suppliers`]: case-insensitive
/// substring filter, page plus total match count.
pub async fn search_products(
    db: &DatabaseConnection,
    query: Option<&str>,
    limit: u64,
    offset: u64,
) -> Result<(Vec<product::Model>, u64)> {
    let mut select = Product::find();
    if let Some(q) = query.filter(|q| !q.trim().is_empty()) {
        select = select.filter(product::Column::Name.contains(q.trim()));
    }

    let total = select.clone().count(db).await?;
    let page = select
        .order_by_asc(product::Column::Name)
        .limit(limit)
        .offset(offset)
        .all(db)
        .await?;

    Ok((page, total))
}

/// Field-by-field update payload; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    /// New name (validated non-blank)
    pub name: Option<String>,
    /// New cost price
    pub cost_price: Option<f64>,
    /// New sale price
    pub sale_price: Option<f64>,
    /// New stock count
    pub stock: Option<i64>,
    /// New state label
    pub status: Option<String>,
    /// New barcode
    pub barcode: Option<String>,
}

/// Updates an existing product, validating any field that is present.
pub async fn update_product(
    db: &DatabaseConnection,
    product_id: i64,
    update: ProductUpdate,
) -> Result<product::Model> {
    let existing = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?;

    let mut active: product::ActiveModel = existing.into();

    if let Some(name) = update.name {
        if name.trim().is_empty() {
            return Err(Error::Config {
                message: "Product name cannot be empty".to_string(),
            });
        }
        active.name = Set(name.trim().to_string());
    }
    if let Some(cost) = update.cost_price {
        validate_price(cost)?;
        active.cost_price = Set(cost);
    }
    if let Some(sale) = update.sale_price {
        validate_price(sale)?;
        active.sale_price = Set(sale);
    }
    if let Some(stock) = update.stock {
        if stock < 0 {
            return Err(Error::InvalidQuantity { quantity: stock });
        }
        active.stock = Set(stock);
    }
    if let Some(status) = update.status {
        active.status = Set(status);
    }
    if let Some(barcode) = update.barcode {
        active.barcode = Set(Some(barcode));
    }

    active.update(db).await.map_err(Into::into)
}

/// Rounds a price up to the nearest sensible shelf step.
///
/// The step grows with the magnitude of the price: 5 below 100, 10 below
/// 1 000, 100 below 10 000, and 1 000 from there up. 55985 becomes 56000.
#[must_use]
pub fn smart_round(price: f64) -> f64 {
    let step = if price < 100.0 {
        5.0
    } else if price < 1000.0 {
        10.0
    } else if price < 10_000.0 {
        100.0
    } else {
        1000.0
    };
    (price / step).ceil() * step
}

/// One row of a price-increase preview.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceChange {
    /// The product being repriced
    pub product_id: i64,
    /// Name, for display
    pub name: String,
    /// Sale price before the increase
    pub current_price: f64,
    /// Sale price after increase and smart rounding
    pub new_price: f64,
}

/// Computes the new sale prices for a percentage increase, without writing.
///
/// The percentage must be positive and finite. Each new price is
/// `smart_round(current x (1 + percent / 100))`.
pub fn preview_price_increase(
    products: &[product::Model],
    percent: f64,
) -> Result<Vec<PriceChange>> {
    if percent <= 0.0 || !percent.is_finite() {
        return Err(Error::InvalidPercentage { percent });
    }

    Ok(products
        .iter()
        .map(|p| PriceChange {
            product_id: p.id,
            name: p.name.clone(),
            current_price: p.sale_price,
            new_price: smart_round(p.sale_price * (1.0 + percent / 100.0)),
        })
        .collect())
}

/// Applies a percentage increase to the sale price of the given products.
///
/// Catalog maintenance is best-effort batch work, not ledger money movement:
/// a product that fails to update is logged and skipped, and the number of
/// successfully updated products is returned.
pub async fn apply_price_increase(
    db: &DatabaseConnection,
    product_ids: &[i64],
    percent: f64,
) -> Result<u64> {
    if percent <= 0.0 || !percent.is_finite() {
        return Err(Error::InvalidPercentage { percent });
    }

    let mut updated = 0;
    for &product_id in product_ids {
        let Some(product) = Product::find_by_id(product_id).one(db).await? else {
            warn!(product_id, "skipping price increase for missing product");
            continue;
        };

        let new_price = smart_round(product.sale_price * (1.0 + percent / 100.0));
        let mut active: product::ActiveModel = product.into();
        active.sale_price = Set(new_price);

        match active.update(db).await {
            Ok(_) => updated += 1,
            Err(e) => warn!(product_id, error = %e, "price update failed"),
        }
    }

    Ok(updated)
}
