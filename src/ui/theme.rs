// ClientDesk - ui/theme.rs
//
// Colour scheme, status badge colours, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::ClientStatus;
use crate::platform::config::ThemeMode;
use egui::Color32;

/// Map the configured theme to egui's preference.
pub fn theme_preference(mode: ThemeMode) -> egui::ThemePreference {
    match mode {
        ThemeMode::System => egui::ThemePreference::System,
        ThemeMode::Light => egui::ThemePreference::Light,
        ThemeMode::Dark => egui::ThemePreference::Dark,
    }
}

/// Icon for the header theme toggle.
pub fn theme_icon(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::System => "\u{1f5a5}", // desktop computer
        ThemeMode::Light => "\u{2600}",   // sun
        ThemeMode::Dark => "\u{1f319}",   // crescent moon
    }
}

/// Foreground colour for a status badge.
pub fn status_colour(status: &ClientStatus, dark_mode: bool) -> Color32 {
    match (status, dark_mode) {
        (ClientStatus::Active, true) => Color32::from_rgb(74, 222, 128), // Green 400
        (ClientStatus::Active, false) => Color32::from_rgb(21, 128, 61), // Green 700
        (ClientStatus::Inactive, true) => Color32::from_rgb(156, 163, 175), // Gray 400
        (ClientStatus::Inactive, false) => Color32::from_rgb(75, 85, 99), // Gray 600
        (ClientStatus::Pending, true) => Color32::from_rgb(251, 191, 36), // Amber 400
        (ClientStatus::Pending, false) => Color32::from_rgb(180, 83, 9), // Amber 700
        (ClientStatus::Archived, true) => Color32::from_rgb(248, 113, 113), // Red 400
        (ClientStatus::Archived, false) => Color32::from_rgb(185, 28, 28), // Red 700
    }
}

/// Subtle badge background for a status.
pub fn status_bg_colour(status: &ClientStatus) -> Color32 {
    match status {
        ClientStatus::Active => Color32::from_rgba_premultiplied(34, 197, 94, 30),
        ClientStatus::Inactive => Color32::from_rgba_premultiplied(107, 114, 128, 30),
        ClientStatus::Pending => Color32::from_rgba_premultiplied(217, 119, 6, 30),
        ClientStatus::Archived => Color32::from_rgba_premultiplied(220, 38, 38, 30),
    }
}

/// Rendered status badge text.
pub fn status_badge(status: &ClientStatus, dark_mode: bool) -> egui::RichText {
    egui::RichText::new(format!(" {} ", status.label()))
        .color(status_colour(status, dark_mode))
        .background_color(status_bg_colour(status))
        .strong()
}

/// Insertion marker drawn while a sort criterion is dragged over a row.
pub const DROP_MARKER: Color32 = Color32::from_rgb(59, 130, 246); // Blue 500

/// Layout constants.
pub const SORT_PANEL_WIDTH: f32 = 420.0;
pub const TABLE_SPACING: [f32; 2] = [18.0, 6.0];
pub const MONO_SIZE: f32 = 12.5;
