//! Catalog domain module: the inventory engine.
//!
//! This crate contains the business rules for stocked catalog items,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). Every operation takes the current item state and returns the
//! next state or a typed error; persistence is the caller's job.

pub mod fields;
pub mod item;

pub use fields::{EmailAddress, Price, SkuCode};
pub use item::{CatalogItem, ItemDraft, StockStatus};
