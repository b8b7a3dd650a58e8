//! Order composition - turns a list of line items into one atomic order.
//!
//! `create_order` is the only way an order enters the ledger: movement,
//! boleta, line items, and the supplier balance bump all happen inside a
//! single database transaction. If any step fails the transaction is dropped
//! and rolled back, so no partial receipt is ever visible to readers.

use crate::{
    core::{movement::record_movement, supplier::adjust_balance},
    entities::{Boleta, BoletaItem, Supplier, boleta, boleta_item, movement::MovementKind},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// One line of a new order, as captured from the order-entry screen.
///
/// The name is recorded verbatim on the receipt; `product_id` is an optional
/// pointer back into the catalog for lines that correspond to a known
/// article.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLineItem {
    /// Optional catalog reference
    pub product_id: Option<i64>,
    /// Name captured at order time (required, non-empty)
    pub product_name: String,
    /// Units ordered, must be positive
    pub quantity: i64,
    /// Price per unit, must be positive and finite
    pub unit_price: f64,
}

impl NewLineItem {
    fn validate(&self) -> Result<()> {
        if self.product_name.trim().is_empty() {
            return Err(Error::Config {
                message: "Line item product name cannot be empty".to_string(),
            });
        }
        if self.quantity <= 0 {
            return Err(Error::InvalidQuantity {
                quantity: self.quantity,
            });
        }
        if self.unit_price <= 0.0 || !self.unit_price.is_finite() {
            return Err(Error::InvalidAmount {
                amount: self.unit_price,
            });
        }
        Ok(())
    }

    fn subtotal(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// A boleta together with everything needed to render its receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct BoletaDetails {
    /// The receipt row itself
    pub boleta: boleta::Model,
    /// The supplier the order was placed with
    pub supplier: crate::entities::supplier::Model,
    /// The receipt lines, in insertion order
    pub items: Vec<boleta_item::Model>,
}

/// Creates an order: one movement, its boleta, the line items, and the
/// balance increase, atomically.
///
/// Validation happens before anything touches storage: the item list must be
/// non-empty and every line must carry a non-blank name, a positive quantity,
/// and a positive finite unit price. The order total is the sum of the line
/// subtotals; there is no tax or discount logic.
///
/// `delivery_date`, when given, becomes the movement timestamp and the boleta
/// issue date, so a receipt entered today can carry the date the goods
/// actually arrived.
///
/// Returns the id of the new boleta.
pub async fn create_order(
    db: &DatabaseConnection,
    supplier_id: i64,
    items: &[NewLineItem],
    description: Option<String>,
    delivery_date: Option<DateTimeUtc>,
) -> Result<i64> {
    if items.is_empty() {
        return Err(Error::EmptyOrder);
    }
    for item in items {
        item.validate()?;
    }

    let subtotal: f64 = items.iter().map(NewLineItem::subtotal).sum();
    let total = subtotal;

    // All four steps share one transaction; an error on any `?` below drops
    // the transaction and rolls the earlier inserts back.
    let txn = db.begin().await?;

    Supplier::find_by_id(supplier_id)
        .one(&txn)
        .await?
        .ok_or(Error::SupplierNotFound { id: supplier_id })?;

    let movement = record_movement(
        &txn,
        supplier_id,
        MovementKind::Order,
        total,
        description,
        delivery_date,
    )
    .await?;

    let boleta = boleta::ActiveModel {
        movement_id: Set(movement.id),
        supplier_id: Set(supplier_id),
        issued_at: Set(movement.timestamp),
        subtotal: Set(subtotal),
        total: Set(total),
        status: Set("activa".to_string()),
        ..Default::default()
    };
    let boleta = boleta.insert(&txn).await?;

    for item in items {
        let row = boleta_item::ActiveModel {
            boleta_id: Set(boleta.id),
            product_id: Set(item.product_id),
            product_name: Set(item.product_name.trim().to_string()),
            quantity: Set(item.quantity),
            unit_price: Set(item.unit_price),
            subtotal: Set(item.subtotal()),
            ..Default::default()
        };
        row.insert(&txn).await?;
    }

    adjust_balance(&txn, supplier_id, total).await?;

    txn.commit().await?;

    Ok(boleta.id)
}

/// Retrieves one boleta with its line items and supplier identity.
///
/// Returns `None` when no boleta has that id.
pub async fn get_boleta(db: &DatabaseConnection, boleta_id: i64) -> Result<Option<BoletaDetails>> {
    let Some(boleta) = Boleta::find_by_id(boleta_id).one(db).await? else {
        return Ok(None);
    };

    let supplier = Supplier::find_by_id(boleta.supplier_id)
        .one(db)
        .await?
        .ok_or(Error::SupplierNotFound {
            id: boleta.supplier_id,
        })?;

    let items = BoletaItem::find()
        .filter(boleta_item::Column::BoletaId.eq(boleta.id))
        .order_by_asc(boleta_item::Column::Id)
        .all(db)
        .await?;

    Ok(Some(BoletaDetails {
        boleta,
        supplier,
        items,
    }))
}
