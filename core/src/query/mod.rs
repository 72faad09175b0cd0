// tabula/src/query/mod.rs

//! Pure query helpers operating on fully materialized collections.

pub mod lookup;
pub mod page;

pub use lookup::Lookup;
pub use page::{paginate, Page, PageRequest, SortDirection};
