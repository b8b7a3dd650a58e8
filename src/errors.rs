//! Unified error types and result handling for the Huellitas core.

use thiserror::Error;

/// All failures that can surface from configuration, storage, or validation.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration problem (missing file, bad TOML, invalid field)
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Any fault raised by the storage layer
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Filesystem fault while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required environment variable was missing or malformed
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// A monetary amount was non-positive, NaN, or infinite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// A line-item quantity was zero or negative
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity {
        /// The rejected quantity
        quantity: i64,
    },

    /// A price-increase percentage was non-positive, NaN, or infinite
    #[error("Invalid percentage: {percent}")]
    InvalidPercentage {
        /// The rejected percentage
        percent: f64,
    },

    /// An order was submitted with no line items
    #[error("An order must contain at least one line item")]
    EmptyOrder,

    /// The referenced supplier does not exist
    #[error("Supplier not found: {id}")]
    SupplierNotFound {
        /// The supplier id that failed to resolve
        id: i64,
    },

    /// The referenced product does not exist
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The product id that failed to resolve
        id: i64,
    },

    /// The referenced category does not exist
    #[error("Category not found: {id}")]
    CategoryNotFound {
        /// The category id that failed to resolve
        id: i64,
    },
}

/// Convenience `Result` type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
