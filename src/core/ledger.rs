//! Ledger service - the single entry point for supplier accounting.
//!
//! The service owns an injected database handle and implements the full
//! contract unconditionally: payments, orders, history, balances, receipts.
//! There is no optional-capability probing anywhere; if the storage handle
//! cannot be built the application fails at startup, not at call time.
//!
//! Every balance change the service makes is a relative update executed in
//! the same transaction as its movement insert, so the materialized balance
//! and the movement log cannot drift apart under concurrent callers.

use crate::{
    core::{
        boleta::{self, BoletaDetails, NewLineItem},
        movement::{self, record_movement},
        supplier::{adjust_balance, get_balance},
    },
    entities::{
        Supplier,
        movement::{Model as MovementModel, MovementKind},
    },
    errors::{Error, Result},
};
use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait, prelude::DateTimeUtc};

/// Facade over the supplier ledger: movements, balances, and receipts.
#[derive(Debug, Clone)]
pub struct LedgerService {
    db: DatabaseConnection,
}

impl LedgerService {
    /// Creates the service around an already-established connection.
    ///
    /// The caller owns connection setup (and therefore startup failure); the
    /// service never opens connections of its own.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a payment to a supplier and decreases its balance, atomically.
    ///
    /// The amount must be positive and finite; anything else is rejected
    /// before any write. Returns the id of the new movement.
    pub async fn record_payment(
        &self,
        supplier_id: i64,
        amount: f64,
        description: Option<String>,
    ) -> Result<i64> {
        if amount <= 0.0 || !amount.is_finite() {
            return Err(Error::InvalidAmount { amount });
        }

        let txn = self.db.begin().await?;

        Supplier::find_by_id(supplier_id)
            .one(&txn)
            .await?
            .ok_or(Error::SupplierNotFound { id: supplier_id })?;

        let movement = record_movement(
            &txn,
            supplier_id,
            MovementKind::Payment,
            amount,
            description,
            None,
        )
        .await?;

        adjust_balance(&txn, supplier_id, -amount).await?;

        txn.commit().await?;

        Ok(movement.id)
    }

    /// Creates an order with its boleta and line items; see
    /// [`boleta::create_order`]. Returns the new boleta id.
    pub async fn create_order(
        &self,
        supplier_id: i64,
        items: &[NewLineItem],
        description: Option<String>,
        delivery_date: Option<DateTimeUtc>,
    ) -> Result<i64> {
        boleta::create_order(&self.db, supplier_id, items, description, delivery_date).await
    }

    /// Returns the supplier's full movement history, newest first.
    pub async fn get_history(&self, supplier_id: i64) -> Result<Vec<MovementModel>> {
        movement::get_movements_for_supplier(&self.db, supplier_id).await
    }

    /// Returns the supplier's current materialized balance.
    pub async fn get_balance(&self, supplier_id: i64) -> Result<f64> {
        get_balance(&self.db, supplier_id).await
    }

    /// Retrieves a boleta with its items and supplier, for receipt rendering.
    pub async fn get_boleta(&self, boleta_id: i64) -> Result<Option<BoletaDetails>> {
        boleta::get_boleta(&self.db, boleta_id).await
    }
}
