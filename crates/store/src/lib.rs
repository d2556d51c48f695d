//! Item store collaborator: the narrow persistence interface the inventory
//! engine is written against, plus an in-memory implementation.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryItemStore;
pub use r#trait::ItemStore;
