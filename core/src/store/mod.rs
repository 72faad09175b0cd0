// tabula/src/store/mod.rs

//! The typed store: entity contracts, the per-type repository, and the
//! schema-version guard.

pub mod entity;
pub mod repository;
pub mod schema;

pub use entity::{Entity, Searchable};
pub use repository::Repository;
pub use schema::SchemaGuard;
