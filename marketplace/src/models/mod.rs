// marketplace/src/models/mod.rs

//! Data structures representing stored entities. Each model carries its own
//! `tabula::Entity` implementation (collection slot, id, touch).

pub mod booking;
pub mod category;
pub mod listing;
pub mod message;
pub mod profile;
pub mod review;
pub mod user;

// Re-export the model structs for convenient access
pub use booking::{Booking, BookingStatus};
pub use category::Category;
pub use listing::{AccommodationType, Listing, ListingStatus, Location};
pub use message::{Conversation, Message};
pub use profile::{HostingPreferences, Profile, PropertyDetails};
pub use review::Review;
pub use user::{Role, User};
