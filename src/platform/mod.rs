// ClientDesk - platform/mod.rs
//
// Platform abstraction layer: directories, config files, on-disk storage.
// Dependencies: standard library, directories crate, the core store trait.
// Must NOT depend on: app, ui.

pub mod config;
pub mod store;
