//! Entity stores - keyed CRUD storage with derived queries.
//!
//! `EntityStore` is the method-call contract that controllers and services
//! use. `InMemoryEntityStore` is the concurrent in-process implementation.
//!
//! ## Example
//!
//! ```ignore
//! use entity_store::{contains_ignore_case, EntityStore, InMemoryEntityStore};
//!
//! let store = InMemoryEntityStore::<Book>::new();
//! let saved = store.save(Book::new("Clean Code", "Robert C. Martin"));
//! let id = saved.id.unwrap();
//!
//! assert!(store.exists_by_id(id));
//! let found = store.find_by(&contains_ignore_case(|b: &Book| b.title.as_str(), "clean"));
//! store.delete_by_id(id);
//! ```

mod in_memory;
mod traits;

pub use in_memory::InMemoryEntityStore;
pub use traits::EntityStore;
