// ClientDesk - app/mod.rs
//
// Application layer: startup wiring and state management.
// Dependencies: core layer, platform (config values, store backend).
// Must NOT depend on: ui.

pub mod startup;
pub mod state;
