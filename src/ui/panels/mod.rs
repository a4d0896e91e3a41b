// ClientDesk - ui/panels/mod.rs

pub mod sort_panel;
pub mod table;
pub mod toolbar;
