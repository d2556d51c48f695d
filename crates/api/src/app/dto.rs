use serde::Deserialize;

use shopforge_catalog::{CatalogItem, EmailAddress, ItemDraft};

// -------------------------
// Request DTOs
// -------------------------

/// Body for item creation and full update.
#[derive(Debug, Deserialize)]
pub struct ItemRequest {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub description: Option<String>,
    pub quantity: i64,
    pub sku: String,
    #[serde(default)]
    pub contact: Option<String>,
}

impl ItemRequest {
    pub fn into_draft(self) -> ItemDraft {
        ItemDraft {
            name: self.name,
            price: self.price,
            description: self.description,
            quantity: self.quantity,
            sku: self.sku,
            contact: self.contact,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SetStockRequest {
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct AdjustStockRequest {
    pub amount: i64,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: String,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn item_to_json(item: &CatalogItem) -> serde_json::Value {
    serde_json::json!({
        "id": item.id_typed().to_string(),
        "name": item.name(),
        "price": item.price().to_string(),
        "description": item.description(),
        "quantity": item.quantity(),
        "sku": item.sku().as_str(),
        "contact": item.contact().map(EmailAddress::as_str),
        "status": item.status(),
        "created_at": item.created_at().to_rfc3339(),
        "updated_at": item.updated_at().to_rfc3339(),
    })
}
