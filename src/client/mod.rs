//! Client-side plumbing for list views

pub mod controller;

pub use controller::{ListBackend, ListController, ViewPhase, ViewState};
