//! Receipt and statement rendering.
//!
//! Builds plain-text renditions of a boleta and of a supplier account
//! statement from structured data. These strings are what the shell prints or
//! previews; PDF generation is a separate concern and lives outside this
//! crate.

use crate::{
    config::store::StoreProfile,
    core::boleta::BoletaDetails,
    entities::{movement, movement::MovementKind, supplier},
};
use std::fmt::Write as _;

/// Renders a boleta as a plain-text receipt.
///
/// Layout: store header, supplier block, one line per item, totals.
#[must_use]
pub fn render_receipt(details: &BoletaDetails, store: &StoreProfile) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", store.name);
    if let Some(address) = &store.address {
        let _ = writeln!(out, "{address}");
    }
    if let Some(phone) = &store.phone {
        let _ = writeln!(out, "Tel: {phone}");
    }
    let _ = writeln!(out, "{}", "=".repeat(40));

    let _ = writeln!(out, "Boleta #{}", details.boleta.id);
    let _ = writeln!(
        out,
        "Fecha: {}",
        details.boleta.issued_at.format("%Y-%m-%d")
    );
    let _ = writeln!(out, "Proveedor: {}", details.supplier.name);
    if let Some(phone) = &details.supplier.phone {
        let _ = writeln!(out, "Tel: {phone}");
    }
    if let Some(address) = &details.supplier.address {
        let _ = writeln!(out, "Direccion: {address}");
    }
    let _ = writeln!(out, "{}", "-".repeat(40));

    for item in &details.items {
        let _ = writeln!(
            out,
            "{} x {} @ ${:.2} = ${:.2}",
            item.quantity, item.product_name, item.unit_price, item.subtotal
        );
    }

    let _ = writeln!(out, "{}", "-".repeat(40));
    let _ = writeln!(out, "Subtotal: ${:.2}", details.boleta.subtotal);
    let _ = writeln!(out, "TOTAL: ${:.2}", details.boleta.total);

    out
}

/// Renders a supplier's movement history as a plain-text account statement.
///
/// Expects movements newest-first, as
/// [`crate::core::movement::get_movements_for_supplier`] returns them.
#[must_use]
pub fn render_statement(supplier: &supplier::Model, movements: &[movement::Model]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Cuenta corriente: {}", supplier.name);
    let _ = writeln!(out, "Saldo actual: ${:.2}", supplier.balance);
    let _ = writeln!(out, "{}", "-".repeat(40));

    if movements.is_empty() {
        let _ = writeln!(out, "Sin movimientos");
        return out;
    }

    for movement in movements {
        let label = match movement.kind {
            MovementKind::Payment => "PAGO",
            MovementKind::Order => "PEDIDO",
        };
        let _ = write!(
            out,
            "{}  {:<6} ${:.2}",
            movement.timestamp.format("%Y-%m-%d"),
            label,
            movement.amount
        );
        if let Some(description) = &movement.description {
            let _ = write!(out, "  {description}");
        }
        let _ = writeln!(out);
    }

    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::{boleta::get_boleta, ledger::LedgerService};
    use crate::test_utils::{create_test_supplier, sample_item, setup_test_db};

    #[tokio::test]
    async fn test_render_receipt_layout() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;
        let supplier = create_test_supplier(&db, "Sieger Distribuciones").await?;
        let service = LedgerService::new(db.clone());

        let boleta_id = service
            .create_order(
                supplier.id,
                &[sample_item("Bolsa 5kg", 10, 1500.0)],
                None,
                None,
            )
            .await?;
        let details = get_boleta(&db, boleta_id).await?.unwrap();

        let store = StoreProfile {
            name: "Huellitas Mascotas".to_string(),
            address: Some("Av. Siempre Viva 742".to_string()),
            phone: None,
        };

        let receipt = render_receipt(&details, &store);
        assert!(receipt.starts_with("Huellitas Mascotas\n"));
        assert!(receipt.contains("Av. Siempre Viva 742"));
        assert!(receipt.contains(&format!("Boleta #{boleta_id}")));
        assert!(receipt.contains("Proveedor: Sieger Distribuciones"));
        assert!(receipt.contains("10 x Bolsa 5kg @ $1500.00 = $15000.00"));
        assert!(receipt.contains("TOTAL: $15000.00"));

        Ok(())
    }

    #[tokio::test]
    async fn test_render_statement_lists_movements() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;
        let supplier = create_test_supplier(&db, "Granja La Union").await?;
        let service = LedgerService::new(db.clone());

        service
            .create_order(supplier.id, &[sample_item("Maiz", 4, 500.0)], None, None)
            .await?;
        service
            .record_payment(supplier.id, 800.0, Some("efectivo".to_string()))
            .await?;

        let movements = service.get_history(supplier.id).await?;
        let supplier = crate::core::supplier::get_supplier_by_id(&db, supplier.id)
            .await?
            .unwrap();

        let statement = render_statement(&supplier, &movements);
        assert!(statement.contains("Cuenta corriente: Granja La Union"));
        assert!(statement.contains("Saldo actual: $1200.00"));
        assert!(statement.contains("PAGO"));
        assert!(statement.contains("PEDIDO"));
        assert!(statement.contains("efectivo"));

        // Newest first: the payment line precedes the order line
        let payment_pos = statement.find("PAGO").unwrap();
        let order_pos = statement.find("PEDIDO").unwrap();
        assert!(payment_pos < order_pos);

        Ok(())
    }

    #[test]
    fn test_render_statement_empty_history() {
        let supplier = supplier::Model {
            id: 1,
            name: "Nuevo".to_string(),
            contact: None,
            phone: None,
            email: None,
            address: None,
            city: None,
            balance: 0.0,
            status: "activo".to_string(),
            registered_at: chrono::Utc::now(),
        };

        let statement = render_statement(&supplier, &[]);
        assert!(statement.contains("Sin movimientos"));
    }
}
