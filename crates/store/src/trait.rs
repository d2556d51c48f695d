use shopforge_catalog::{CatalogItem, SkuCode};
use shopforge_core::{CatalogResult, ItemId};

/// Narrow persistence interface for catalog items.
///
/// The inventory engine itself performs no I/O; it is handed the current
/// item state and returns the next one. This trait is the collaborator that
/// owns fetching and persisting that state, including the two correctness
/// obligations the engine cannot enforce alone:
///
/// - SKU uniqueness among live items (`save` rejects a duplicate code held
///   by a different item).
/// - Per-item serializability of read-modify-write mutations (`mutate` runs
///   the whole read-apply-write cycle in one critical section, so two
///   concurrent reservations cannot both read the same stale quantity).
pub trait ItemStore: Send + Sync {
    fn find_by_id(&self, id: ItemId) -> CatalogResult<CatalogItem>;

    /// Insert or replace an item. Fails with a SKU conflict when another
    /// live item already holds the same code.
    fn save(&self, item: CatalogItem) -> CatalogResult<CatalogItem>;

    fn exists_by_code(&self, sku: &SkuCode) -> CatalogResult<bool>;

    /// The `code_in_use` predicate for updates: is the code held by an item
    /// other than `id`?
    fn code_in_use_by_other(&self, sku: &SkuCode, id: ItemId) -> CatalogResult<bool>;

    fn delete(&self, id: ItemId) -> CatalogResult<()>;

    fn count_all(&self) -> CatalogResult<usize>;

    fn list(&self) -> CatalogResult<Vec<CatalogItem>>;

    /// Case-insensitive substring match on the display name.
    fn search_by_name(&self, query: &str) -> CatalogResult<Vec<CatalogItem>>;

    /// Read-apply-write an item under one critical section.
    ///
    /// `apply` receives the current state and returns the next state (or a
    /// domain error, which is passed through unchanged and leaves the stored
    /// state untouched).
    fn mutate(
        &self,
        id: ItemId,
        apply: &mut dyn FnMut(&CatalogItem) -> CatalogResult<CatalogItem>,
    ) -> CatalogResult<CatalogItem>;
}
