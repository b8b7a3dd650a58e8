//! Movement store - the append-only ledger log.
//!
//! Movements are terminal facts: this module exposes an insert and a history
//! read, and nothing else. No update or delete exists anywhere in the crate.
//! Write faults always propagate to the caller; a silently dropped payment or
//! order is never acceptable.

use crate::{
    entities::{Movement, movement, movement::MovementKind},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Appends one movement to a supplier's ledger.
///
/// The amount is the positive magnitude of the transaction; direction comes
/// from `kind`. A non-positive, NaN, or infinite amount is rejected before
/// any write. When `timestamp` is omitted the entry is stamped with the
/// current time; when supplied it is stored verbatim, which lets orders carry
/// their real delivery date rather than the data-entry time.
///
/// Generic over the connection so the order composer can call it inside an
/// open transaction. Supplier existence is not checked here; the service
/// layer does that, and the schema's foreign key backstops it.
pub async fn record_movement<C>(
    conn: &C,
    supplier_id: i64,
    kind: MovementKind,
    amount: f64,
    description: Option<String>,
    timestamp: Option<DateTimeUtc>,
) -> Result<movement::Model>
where
    C: ConnectionTrait,
{
    if amount <= 0.0 || !amount.is_finite() {
        return Err(Error::InvalidAmount { amount });
    }

    let movement = movement::ActiveModel {
        supplier_id: Set(supplier_id),
        kind: Set(kind),
        amount: Set(amount),
        description: Set(description),
        timestamp: Set(timestamp.unwrap_or_else(chrono::Utc::now)),
        ..Default::default()
    };

    movement.insert(conn).await.map_err(Into::into)
}

/// Retrieves a supplier's full movement history, newest first.
///
/// Ordered by timestamp descending; two movements sharing a timestamp come
/// back with the larger id first. The whole history is returned in one shot,
/// there is no pagination at this layer.
pub async fn get_movements_for_supplier(
    db: &DatabaseConnection,
    supplier_id: i64,
) -> Result<Vec<movement::Model>> {
    Movement::find()
        .filter(movement::Column::SupplierId.eq(supplier_id))
        .order_by_desc(movement::Column::Timestamp)
        .order_by_desc(movement::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{create_test_supplier, setup_test_db};
    use chrono::{TimeZone, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_record_movement_rejects_bad_amounts() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        for bad in [0.0, -50.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result =
                record_movement(&db, 1, MovementKind::Payment, bad, None, None).await;
            assert!(
                matches!(result, Err(Error::InvalidAmount { .. })),
                "amount {bad} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_record_movement_stamps_current_time() -> Result<()> {
        let db = setup_test_db().await?;
        let supplier = create_test_supplier(&db, "Proveedor").await?;

        let before = Utc::now();
        let movement = record_movement(
            &db,
            supplier.id,
            MovementKind::Payment,
            250.0,
            Some("pago parcial".to_string()),
            None,
        )
        .await?;
        let after = Utc::now();

        assert_eq!(movement.kind, MovementKind::Payment);
        assert_eq!(movement.amount, 250.0);
        assert!(movement.timestamp >= before && movement.timestamp <= after);

        Ok(())
    }

    #[tokio::test]
    async fn test_record_movement_stores_explicit_timestamp() -> Result<()> {
        let db = setup_test_db().await?;
        let supplier = create_test_supplier(&db, "Proveedor").await?;

        let delivery = Utc.with_ymd_and_hms(2025, 3, 14, 0, 0, 0).unwrap();
        let movement = record_movement(
            &db,
            supplier.id,
            MovementKind::Order,
            980.0,
            None,
            Some(delivery),
        )
        .await?;

        assert_eq!(movement.timestamp, delivery);

        let reloaded = Movement::find_by_id(movement.id).one(&db).await?.unwrap();
        assert_eq!(reloaded.timestamp, delivery);

        Ok(())
    }

    #[tokio::test]
    async fn test_history_is_newest_first() -> Result<()> {
        let db = setup_test_db().await?;
        let supplier = create_test_supplier(&db, "Proveedor").await?;

        let day1 = Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap();
        let day2 = Utc.with_ymd_and_hms(2025, 2, 20, 12, 0, 0).unwrap();

        let older =
            record_movement(&db, supplier.id, MovementKind::Order, 100.0, None, Some(day1))
                .await?;
        let newer =
            record_movement(&db, supplier.id, MovementKind::Order, 200.0, None, Some(day2))
                .await?;

        let history = get_movements_for_supplier(&db, supplier.id).await?;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, newer.id);
        assert_eq!(history[1].id, older.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_history_ties_break_by_id_descending() -> Result<()> {
        let db = setup_test_db().await?;
        let supplier = create_test_supplier(&db, "Proveedor").await?;

        let same_moment = Utc.with_ymd_and_hms(2025, 5, 5, 9, 30, 0).unwrap();
        let first = record_movement(
            &db,
            supplier.id,
            MovementKind::Order,
            10.0,
            None,
            Some(same_moment),
        )
        .await?;
        let second = record_movement(
            &db,
            supplier.id,
            MovementKind::Payment,
            20.0,
            None,
            Some(same_moment),
        )
        .await?;

        let history = get_movements_for_supplier(&db, supplier.id).await?;
        assert_eq!(history[0].id, second.id);
        assert_eq!(history[1].id, first.id);
        assert!(second.id > first.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_history_is_scoped_per_supplier() -> Result<()> {
        let db = setup_test_db().await?;
        let one = create_test_supplier(&db, "Uno").await?;
        let two = create_test_supplier(&db, "Dos").await?;

        record_movement(&db, one.id, MovementKind::Payment, 50.0, None, None).await?;
        record_movement(&db, two.id, MovementKind::Order, 75.0, None, None).await?;

        let history_one = get_movements_for_supplier(&db, one.id).await?;
        let history_two = get_movements_for_supplier(&db, two.id).await?;

        assert_eq!(history_one.len(), 1);
        assert_eq!(history_one[0].supplier_id, one.id);
        assert_eq!(history_two.len(), 1);
        assert_eq!(history_two[0].supplier_id, two.id);

        Ok(())
    }
}
