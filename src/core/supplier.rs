//! Supplier business logic - management of supplier accounts.
//!
//! Provides CRUD and search over suppliers plus the balance accessor used by
//! the ledger. The balance column is deliberately absent from the general
//! update path: once a supplier exists, its balance moves only through ledger
//! operations, and always via a relative update executed inside the same
//! database transaction as the movement insert.

use crate::{
    entities::{Supplier, supplier},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, QuerySelect, Set, prelude::*};

/// Creates a new supplier with a zero balance, performing input validation.
///
/// The name must be non-blank; surrounding whitespace is trimmed. Contact
/// fields are all optional. The balance always starts at zero and is owned by
/// the ledger afterwards.
pub async fn create_supplier(
    db: &DatabaseConnection,
    name: String,
    contact: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    city: Option<String>,
) -> Result<supplier::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Supplier name cannot be empty".to_string(),
        });
    }

    let supplier = supplier::ActiveModel {
        name: Set(name.trim().to_string()),
        contact: Set(contact),
        phone: Set(phone),
        email: Set(email),
        address: Set(address),
        city: Set(city),
        balance: Set(0.0),
        status: Set("activo".to_string()),
        registered_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    supplier.insert(db).await.map_err(Into::into)
}

/// Finds a supplier by its unique ID.
pub async fn get_supplier_by_id(
    db: &DatabaseConnection,
    supplier_id: i64,
) -> Result<Option<supplier::Model>> {
    Supplier::find_by_id(supplier_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all suppliers, ordered alphabetically by name.
pub async fn get_all_suppliers(db: &DatabaseConnection) -> Result<Vec<supplier::Model>> {
    Supplier::find()
        .order_by_asc(supplier::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Searches suppliers by name with pagination.
///
/// `query` filters with a case-insensitive substring match; `None` returns
/// everyone. Returns the requested page plus the total number of matches so
/// callers can render page controls.
pub async fn search_suppliers(
    db: &DatabaseConnection,
    query: Option<&str>,
    limit: u64,
    offset: u64,
) -> Result<(Vec<supplier::Model>, u64)> {
    let mut select = Supplier::find();
    if let Some(q) = query.filter(|q| !q.trim().is_empty()) {
        select = select.filter(supplier::Column::Name.contains(q.trim()));
    }

    let total = select.clone().count(db).await?;
    let page = select
        .order_by_asc(supplier::Column::Name)
        .limit(limit)
        .offset(offset)
        .all(db)
        .await?;

    Ok((page, total))
}

/// Field-by-field update payload; `None` leaves a field unchanged.
///
/// There is deliberately no balance field here: once a supplier exists its
/// balance moves only through ledger operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierUpdate {
    /// New name (validated non-blank)
    pub name: Option<String>,
    /// New contact person
    pub contact: Option<String>,
    /// New phone number
    pub phone: Option<String>,
    /// New email address
    pub email: Option<String>,
    /// New street address
    pub address: Option<String>,
    /// New city
    pub city: Option<String>,
}

/// Updates a supplier's identity and contact fields.
pub async fn update_supplier(
    db: &DatabaseConnection,
    supplier_id: i64,
    update: SupplierUpdate,
) -> Result<supplier::Model> {
    let existing = Supplier::find_by_id(supplier_id)
        .one(db)
        .await?
        .ok_or(Error::SupplierNotFound { id: supplier_id })?;

    let mut active: supplier::ActiveModel = existing.into();

    if let Some(name) = update.name {
        if name.trim().is_empty() {
            return Err(Error::Config {
                message: "Supplier name cannot be empty".to_string(),
            });
        }
        active.name = Set(name.trim().to_string());
    }
    if let Some(contact) = update.contact {
        active.contact = Set(Some(contact));
    }
    if let Some(phone) = update.phone {
        active.phone = Set(Some(phone));
    }
    if let Some(email) = update.email {
        active.email = Set(Some(email));
    }
    if let Some(address) = update.address {
        active.address = Set(Some(address));
    }
    if let Some(city) = update.city {
        active.city = Set(Some(city));
    }

    active.update(db).await.map_err(Into::into)
}

/// Returns the supplier's materialized balance.
///
/// This is the stored `saldo` column, maintained incrementally by the ledger;
/// it is not recomputed from the movement history on every read.
pub async fn get_balance(db: &DatabaseConnection, supplier_id: i64) -> Result<f64> {
    let supplier = Supplier::find_by_id(supplier_id)
        .one(db)
        .await?
        .ok_or(Error::SupplierNotFound { id: supplier_id })?;

    Ok(supplier.balance)
}

/// Applies a relative balance change as a single atomic update statement.
///
/// Executes `UPDATE proveedores SET saldo = saldo + ? WHERE id = ?` so two
/// concurrent ledger operations can never lose each other's delta the way a
/// read-modify-write would. Callers must run this inside the same transaction
/// as the movement insert it accounts for; pass the open transaction as
/// `conn`.
pub async fn adjust_balance<C>(
    conn: &C,
    supplier_id: i64,
    amount_delta: f64,
) -> Result<supplier::Model>
where
    C: ConnectionTrait,
{
    use sea_orm::sea_query::Expr;

    let _supplier = Supplier::find_by_id(supplier_id)
        .one(conn)
        .await?
        .ok_or(Error::SupplierNotFound { id: supplier_id })?;

    Supplier::update_many()
        .col_expr(
            supplier::Column::Balance,
            Expr::col(supplier::Column::Balance).add(amount_delta),
        )
        .filter(supplier::Column::Id.eq(supplier_id))
        .exec(conn)
        .await?;

    Supplier::find_by_id(supplier_id)
        .one(conn)
        .await?
        .ok_or(Error::SupplierNotFound { id: supplier_id })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{create_test_supplier, setup_test_db};
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_supplier_rejects_blank_name() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = create_supplier(&db, "   ".to_string(), None, None, None, None, None).await;
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[tokio::test]
    async fn test_create_supplier_defaults() -> Result<()> {
        let db = setup_test_db().await?;

        let supplier = create_supplier(
            &db,
            "  Forrajeria El Galpon  ".to_string(),
            Some("Marta".to_string()),
            Some("011-5555-1234".to_string()),
            None,
            Some("Calle 12 n 340".to_string()),
            Some("La Plata".to_string()),
        )
        .await?;

        assert_eq!(supplier.name, "Forrajeria El Galpon");
        assert_eq!(supplier.balance, 0.0);
        assert_eq!(supplier.status, "activo");
        assert_eq!(supplier.contact.as_deref(), Some("Marta"));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_supplier_by_id() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_test_supplier(&db, "Alimentos Sur").await?;

        let found = get_supplier_by_id(&db, created.id).await?;
        assert_eq!(found, Some(created));

        let missing = get_supplier_by_id(&db, 999).await?;
        assert!(missing.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_search_suppliers_filters_and_paginates() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_supplier(&db, "Sieger Distribuciones").await?;
        create_test_supplier(&db, "Granja La Union").await?;
        create_test_supplier(&db, "Sieger Norte").await?;

        // Substring match, case-insensitive
        let (page, total) = search_suppliers(&db, Some("sieger"), 50, 0).await?;
        assert_eq!(total, 2);
        assert_eq!(page.len(), 2);
        assert!(page.iter().all(|s| s.name.starts_with("Sieger")));

        // Pagination: page size 1 still reports the full count
        let (first, total) = search_suppliers(&db, Some("Sieger"), 1, 0).await?;
        assert_eq!(total, 2);
        assert_eq!(first.len(), 1);
        let (second, _) = search_suppliers(&db, Some("Sieger"), 1, 1).await?;
        assert_eq!(second.len(), 1);
        assert_ne!(first[0].id, second[0].id);

        // No query returns everyone
        let (all, total) = search_suppliers(&db, None, 50, 0).await?;
        assert_eq!(total, 3);
        assert_eq!(all.len(), 3);

        // The unpaginated listing is alphabetical
        let listed = get_all_suppliers(&db).await?;
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].name, "Granja La Union");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_supplier_leaves_balance_alone() -> Result<()> {
        let db = setup_test_db().await?;
        let supplier = create_test_supplier(&db, "Proveedor Uno").await?;

        adjust_balance(&db, supplier.id, 1200.0).await?;

        let updated = update_supplier(
            &db,
            supplier.id,
            SupplierUpdate {
                name: Some("Proveedor Uno SRL".to_string()),
                phone: Some("221-400-1000".to_string()),
                ..Default::default()
            },
        )
        .await?;

        assert_eq!(updated.name, "Proveedor Uno SRL");
        assert_eq!(updated.phone.as_deref(), Some("221-400-1000"));
        assert_eq!(updated.balance, 1200.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_supplier_rejects_blank_name() -> Result<()> {
        let db = setup_test_db().await?;
        let supplier = create_test_supplier(&db, "Proveedor Uno").await?;

        let result = update_supplier(
            &db,
            supplier.id,
            SupplierUpdate {
                name: Some("  ".to_string()),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(result, Err(Error::Config { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_supplier_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = update_supplier(&db, 424242, SupplierUpdate::default()).await;
        assert!(matches!(result, Err(Error::SupplierNotFound { id: 424242 })));

        Ok(())
    }

    #[tokio::test]
    async fn test_adjust_balance_accumulates() -> Result<()> {
        let db = setup_test_db().await?;
        let supplier = create_test_supplier(&db, "Balanceados Oeste").await?;

        adjust_balance(&db, supplier.id, 1500.0).await?;
        let after = adjust_balance(&db, supplier.id, -400.0).await?;

        assert_eq!(after.balance, 1100.0);
        assert_eq!(get_balance(&db, supplier.id).await?, 1100.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_adjust_balance_missing_supplier() -> Result<()> {
        let db = setup_test_db().await?;

        let result = adjust_balance(&db, 7, 10.0).await;
        assert!(matches!(result, Err(Error::SupplierNotFound { id: 7 })));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_balance_missing_supplier() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([Vec::<supplier::Model>::new()])
            .into_connection();

        let result = get_balance(&db, 99).await;
        assert!(matches!(result, Err(Error::SupplierNotFound { id: 99 })));
    }
}
