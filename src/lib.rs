//! # backoffice
//!
//! Core of an e-commerce admin back office: an in-memory entity store, a
//! shared list-query engine (search, stable sort, pagination), typed
//! mutation services with a referential guard between products and
//! categories, and a debounced list controller that keeps client views
//! consistent under slow responses.
//!
//! ## Layers
//!
//! - [`core`]: entity traits, field values, query engine, errors, auth
//! - [`entities`]: the concrete admin entities and their draft payloads
//! - [`storage`]: the [`storage::EntityStore`] trait, the in-memory
//!   implementation, and the demo fixtures
//! - [`services`]: catalog, orders, offers, content, reports, mock auth
//! - [`client`]: the list-view controller (debounce, page reset, stale
//!   response guard)
//! - [`server`]: the axum REST exposure
//! - [`config`]: YAML configuration
//!
//! ## Example
//!
//! ```no_run
//! use backoffice::config::AdminConfig;
//! use backoffice::server::{AppState, build_router};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let state = AppState::seeded(AdminConfig::default());
//! let router = build_router(state);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, router).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod services;
pub mod storage;

/// Common imports for downstream code
pub mod prelude {
    pub use crate::core::entity::{Entity, IdSequence, Listable};
    pub use crate::core::error::{AdminError, AdminResult};
    pub use crate::core::query::{ListQuery, PageResponse, SortDirection, SortSpec, run_query};
    pub use crate::storage::EntityStore;
    pub use crate::storage::in_memory::InMemoryStore;
}
