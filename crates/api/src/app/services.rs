//! Collaborator wiring for the HTTP layer.

use shopforge_expeditions::ExpeditionClient;
use shopforge_expeditions::client::DEFAULT_BASE_URL;
use shopforge_store::InMemoryItemStore;

/// The collaborators every handler reaches for.
///
/// The store is the single owner of item state; handlers fetch, call the
/// engine, and persist through it. The expedition client is a stateless
/// upstream supplier.
pub struct AppServices {
    pub store: InMemoryItemStore,
    pub expeditions: ExpeditionClient,
}

pub fn build_services() -> AppServices {
    let base_url = std::env::var("SHOPFORGE_EXPEDITIONS_URL")
        .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    AppServices {
        store: InMemoryItemStore::new(),
        expeditions: ExpeditionClient::with_base_url(base_url),
    }
}
