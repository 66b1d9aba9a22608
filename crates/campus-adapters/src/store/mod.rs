//! Store adapters.

mod memory;

pub use memory::{Collection, InMemoryStore};
