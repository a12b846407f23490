//! Catalog domain module.
//!
//! Tracks named, categorized, priced product records inside a named
//! warehouse, implemented purely as in-memory domain logic (no IO, no
//! storage). Categories come from a [`CategoryRegistry`]; the [`Catalog`]
//! never creates them itself.

pub mod catalog;
pub mod category;
pub mod product;

pub use catalog::{AddProduct, Catalog, DEFAULT_CATALOG_NAME};
pub use category::{Category, CategoryRegistry, normalize_category_name};
pub use product::ProductRecord;

pub use rust_decimal::Decimal;
pub use warehouse_core::{DomainError, DomainResult, ProductId};
