// ClientDesk - ui/panels/toolbar.rs
//
// Header (title + theme toggle) and the table toolbar: category buttons,
// search box, and the button that opens the sort dialog.

use crate::app::state::AppState;
use crate::core::filter::CategoryFilter;
use crate::ui::theme;
use crate::util::constants::SEARCH_BOX_WIDTH;

/// Render the page header.
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading(egui::RichText::new("Client Management").strong().size(24.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = format!("{} {}", theme::theme_icon(state.theme), state.theme.label());
            if ui
                .button(label)
                .on_hover_text("Switch theme (System / Light / Dark)")
                .clicked()
            {
                state.theme = state.theme.next();
                ui.ctx().set_theme(theme::theme_preference(state.theme));
                tracing::debug!(theme = state.theme.label(), "Theme changed");
            }
        });
    });
}

/// Render the filter/search/sort toolbar.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal_wrapped(|ui| {
        for (category, label) in CategoryFilter::buttons() {
            let selected = state.filter.category == *category;
            if ui.selectable_label(selected, *label).clicked() && !selected {
                state.set_category(*category);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let active = state.sort.criteria().len();
            let sort_label = if active > 0 {
                format!("\u{21c5} Sort ({active})")
            } else {
                "\u{21c5} Sort".to_string()
            };
            if ui.button(sort_label).clicked() {
                state.show_sort_panel = true;
            }

            let mut query = state.filter.query.clone();
            let search = ui.add(
                egui::TextEdit::singleline(&mut query)
                    .hint_text("Search clients...")
                    .desired_width(SEARCH_BOX_WIDTH),
            );
            if search.changed() {
                state.set_query(&query);
            }
        });
    });
}
