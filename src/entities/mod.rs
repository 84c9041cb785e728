//! Canonical entity shapes for the back office
//!
//! One struct per entity, with optional fields explicit; every call site uses
//! these shapes rather than ad-hoc variants. Serialized field names are
//! camelCase to match the JSON the admin UI exchanges.

pub mod category;
pub mod content;
pub mod offer;
pub mod order;
pub mod product;
pub mod user;

pub use category::{Category, CategoryDraft, CategoryRow};
pub use content::{Banner, BannerDraft, ContentBlock};
pub use offer::{Offer, OfferDraft};
pub use order::{Order, OrderDraft, OrderItem, OrderStatus};
pub use product::{Product, ProductDraft, ProductRow};
pub use user::{User, UserProfileDraft};
