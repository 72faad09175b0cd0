// marketplace/src/services/mod.rs

//! Application services: the business rules sitting between the API surface
//! and the repositories. Storage failures bubble up as `AppError::Store`;
//! rule violations are typed application errors.

pub mod auth;
pub mod bookings;
pub mod categories;
pub mod listings;
pub mod messaging;
pub mod profiles;
pub mod reviews;
