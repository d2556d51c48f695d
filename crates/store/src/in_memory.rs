use std::collections::HashMap;
use std::sync::RwLock;

use shopforge_catalog::{CatalogItem, SkuCode};
use shopforge_core::{CatalogError, CatalogResult, Entity, ItemId};

use super::r#trait::ItemStore;

/// In-memory item store.
///
/// A single `RwLock` over the item map. `mutate` holds the write lock across
/// the whole read-apply-write cycle, which gives the per-item serialization
/// the engine's contract requires (store-wide, which is stronger than
/// necessary but trivially correct at this scale).
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    items: RwLock<HashMap<ItemId, CatalogItem>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> CatalogResult<std::sync::RwLockReadGuard<'_, HashMap<ItemId, CatalogItem>>> {
        self.items
            .read()
            .map_err(|_| CatalogError::storage("item store lock poisoned"))
    }

    fn write(&self) -> CatalogResult<std::sync::RwLockWriteGuard<'_, HashMap<ItemId, CatalogItem>>> {
        self.items
            .write()
            .map_err(|_| CatalogError::storage("item store lock poisoned"))
    }
}

impl ItemStore for InMemoryItemStore {
    fn find_by_id(&self, id: ItemId) -> CatalogResult<CatalogItem> {
        self.read()?
            .get(&id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(id))
    }

    fn save(&self, item: CatalogItem) -> CatalogResult<CatalogItem> {
        let mut items = self.write()?;
        let duplicate = items
            .values()
            .any(|other| other.sku() == item.sku() && other.id() != item.id());
        if duplicate {
            return Err(CatalogError::conflict("sku", item.sku().as_str()));
        }
        items.insert(item.id_typed(), item.clone());
        Ok(item)
    }

    fn exists_by_code(&self, sku: &SkuCode) -> CatalogResult<bool> {
        Ok(self.read()?.values().any(|item| item.sku() == sku))
    }

    fn code_in_use_by_other(&self, sku: &SkuCode, id: ItemId) -> CatalogResult<bool> {
        Ok(self
            .read()?
            .values()
            .any(|item| item.sku() == sku && item.id_typed() != id))
    }

    fn delete(&self, id: ItemId) -> CatalogResult<()> {
        match self.write()?.remove(&id) {
            Some(_) => Ok(()),
            None => Err(CatalogError::not_found(id)),
        }
    }

    fn count_all(&self) -> CatalogResult<usize> {
        Ok(self.read()?.len())
    }

    fn list(&self) -> CatalogResult<Vec<CatalogItem>> {
        let mut items: Vec<_> = self.read()?.values().cloned().collect();
        // Stable presentation order for an unordered map.
        items.sort_by_key(|item| item.id_typed());
        Ok(items)
    }

    fn search_by_name(&self, query: &str) -> CatalogResult<Vec<CatalogItem>> {
        let needle = query.to_lowercase();
        let mut items: Vec<_> = self
            .read()?
            .values()
            .filter(|item| item.name().to_lowercase().contains(&needle))
            .cloned()
            .collect();
        items.sort_by_key(|item| item.id_typed());
        Ok(items)
    }

    fn mutate(
        &self,
        id: ItemId,
        apply: &mut dyn FnMut(&CatalogItem) -> CatalogResult<CatalogItem>,
    ) -> CatalogResult<CatalogItem> {
        let mut items = self.write()?;
        let current = items.get(&id).ok_or_else(|| CatalogError::not_found(id))?;
        let next = apply(current)?;
        items.insert(id, next.clone());
        Ok(next)
    }
}
