//! In-memory sales cart.
//!
//! The cart is pure state held by the selling screen; nothing is persisted
//! until checkout hands its lines to the ledger. Adding a product that is
//! already in the cart merges quantities rather than duplicating the line.

use crate::{
    core::boleta::NewLineItem,
    entities::product,
    errors::{Error, Result},
};

/// One line in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Catalog product on this line
    pub product_id: i64,
    /// Product name at the time it was added
    pub name: String,
    /// Price per unit at the time it was added
    pub unit_price: f64,
    /// Units in the cart
    pub quantity: i64,
}

impl CartLine {
    /// quantity x unit price for this line
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// A sales cart: an ordered list of product lines with merged quantities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Adds `quantity` units of a catalog product.
    ///
    /// If the product is already in the cart its quantity is increased; the
    /// price captured on first add is kept.
    pub fn add(&mut self, product: &product::Model, quantity: i64) -> Result<()> {
        if quantity <= 0 {
            return Err(Error::InvalidQuantity { quantity });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine {
                product_id: product.id,
                name: product.name.clone(),
                unit_price: product.sale_price,
                quantity,
            });
        }
        Ok(())
    }

    /// Overwrites the quantity of an existing line.
    ///
    /// Returns `true` if the product was in the cart.
    pub fn set_quantity(&mut self, product_id: i64, quantity: i64) -> Result<bool> {
        if quantity <= 0 {
            return Err(Error::InvalidQuantity { quantity });
        }

        match self.lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => {
                line.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes a product's line entirely. Returns `true` if it was present.
    pub fn remove(&mut self, product_id: i64) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        self.lines.len() != before
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The lines currently in the cart, in the order they were added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// True when the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line subtotals.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Converts the cart into order line items for
    /// [`crate::core::ledger::LedgerService::create_order`].
    #[must_use]
    pub fn into_line_items(self) -> Vec<NewLineItem> {
        self.lines
            .into_iter()
            .map(|l| NewLineItem {
                product_id: Some(l.product_id),
                product_name: l.name,
                quantity: l.quantity,
                unit_price: l.unit_price,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    fn sample_product(id: i64, name: &str, sale_price: f64) -> product::Model {
        product::Model {
            id,
            name: name.to_string(),
            category_id: None,
            subcategory: None,
            supplier_id: None,
            cost_price: sale_price / 2.0,
            sale_price,
            stock: 10,
            status: "activo".to_string(),
            barcode: None,
        }
    }

    #[test]
    fn test_add_merges_existing_lines() {
        let mut cart = Cart::new();
        let bolsa = sample_product(1, "Bolsa 5kg", 1500.0);

        cart.add(&bolsa, 2).unwrap();
        cart.add(&bolsa, 3).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.total(), 7500.0);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let bolsa = sample_product(1, "Bolsa", 100.0);

        assert!(matches!(
            cart.add(&bolsa, 0),
            Err(Error::InvalidQuantity { quantity: 0 })
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_and_remove() {
        let mut cart = Cart::new();
        let bolsa = sample_product(1, "Bolsa", 100.0);
        let correa = sample_product(2, "Correa", 800.0);

        cart.add(&bolsa, 1).unwrap();
        cart.add(&correa, 1).unwrap();

        assert!(cart.set_quantity(1, 4).unwrap());
        assert!(!cart.set_quantity(99, 4).unwrap());
        assert_eq!(cart.total(), 1200.0);

        assert!(cart.remove(2));
        assert!(!cart.remove(2));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&sample_product(1, "Bolsa", 100.0), 2).unwrap();

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_into_line_items_carries_catalog_reference() {
        let mut cart = Cart::new();
        cart.add(&sample_product(7, "Bolsa 5kg", 1500.0), 10).unwrap();

        let items = cart.into_line_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_id, Some(7));
        assert_eq!(items[0].product_name, "Bolsa 5kg");
        assert_eq!(items[0].quantity, 10);
        assert_eq!(items[0].unit_price, 1500.0);
    }
}
