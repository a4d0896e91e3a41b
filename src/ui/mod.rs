// ClientDesk - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (state), core (read-only models), egui.
// Must NOT depend on: direct I/O.

pub mod panels;
pub mod theme;
