//! Application ports (traits) for the layered chain.
//!
//! In onion architecture, ports define the interfaces each ring depends on.
//! Adapters in `campus-adapters` implement the driven side.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by services, implemented by infrastructure
//!   - `Repository<E>`: CRUD access to one entity collection
//!
//! - **Driving (Input) Ports**: Called by controllers, implemented by services
//!   - `EntityService<E>`: use cases for one entity kind

pub mod input;
pub mod output;

pub use input::EntityService;
pub use output::Repository;
