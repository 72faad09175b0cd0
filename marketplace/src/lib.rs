// marketplace/src/lib.rs

//! Workstay: the data layer of a work-exchange-for-accommodation
//! marketplace. Hosts list properties that need help, helpers browse and
//! request stays, both parties message each other and leave reviews after a
//! completed exchange.
//!
//! Everything persists through `tabula` repositories over one injected
//! backend (in-memory or file-backed). The public surface has two tiers:
//!  - `services::*`: synchronous business rules returning typed
//!    `Result<_, AppError>`.
//!  - `MarketplaceApi`: the async facade wrapping every operation in a
//!    uniform `{data, success, error, timestamp}` envelope with a fixed
//!    simulated network delay.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod search;
pub mod seed;
pub mod services;
pub mod state;

// --- Re-exports for the Public API ---

pub use crate::api::{ApiResponse, MarketplaceApi};
pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::search::{ListingSearch, SEARCH_PAGE_SIZE};
pub use crate::state::Marketplace;
