// ClientDesk - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: ui, platform, app, or any file/GUI crate directly.

pub mod export;
pub mod filter;
pub mod mock;
pub mod model;
pub mod sort;
pub mod store;
