//! Core business logic for the Huellitas store system.
//!
//! Everything in here is framework-agnostic: async functions over an injected
//! `SeaORM` connection, plus the [`ledger::LedgerService`] facade that the
//! shell constructs once at startup. No module reaches for a global database
//! path; the handle always comes in from the caller.

/// Order receipt composition and retrieval
pub mod boleta;
/// In-memory sales cart
pub mod cart;
/// Category and subcategory taxonomy
pub mod category;
/// Ledger service facade: payments, orders, history, balances
pub mod ledger;
/// Append-only movement store
pub mod movement;
/// Product catalog and bulk price maintenance
pub mod product;
/// Receipt and account-statement rendering
pub mod report;
/// Supplier management and balance access
pub mod supplier;
