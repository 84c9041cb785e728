//! Core traits and types shared across the back office

pub mod auth;
pub mod entity;
pub mod error;
pub mod field;
pub mod query;

pub use auth::{AuthContext, AuthProvider, Role};
pub use entity::{Entity, IdSequence, Listable};
pub use error::{AdminError, AdminResult};
pub use field::{FieldFormat, FieldValue};
pub use query::{ListQuery, PageResponse, PaginationMeta, SortDirection, SortSpec, run_query};
