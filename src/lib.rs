//! Recipe catalog with role-based interactive console sessions.
//!
//! The [`Catalog`] keeps recipes in insertion order and answers searches by
//! ingredients, category, and dietary info. The [`session`] module drives the
//! administrator and browsing menus over any line-oriented console.

uniffi::setup_scaffolding!();

pub mod catalog;
pub mod ffi;
pub mod loader;
pub mod model;
pub mod session;

pub use catalog::{split_list, Catalog, CatalogEntry, SearchField};
pub use loader::LoadError;
pub use model::*;
pub use session::{Console, SessionError};
