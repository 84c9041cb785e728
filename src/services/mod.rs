//! Mutation and read services over the entity stores
//!
//! Each service owns the rules for its slice of the catalog; all of them talk
//! to storage through [`crate::storage::EntityStore`] so the backend is
//! swappable.

pub mod auth;
pub mod catalog;
pub mod content;
pub mod offers;
pub mod orders;
pub mod reports;

pub use auth::MockAuthProvider;
pub use catalog::CatalogService;
pub use content::ContentService;
pub use offers::OfferService;
pub use orders::OrderService;
pub use reports::ReportService;
