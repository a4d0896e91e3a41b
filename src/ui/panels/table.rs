// ClientDesk - ui/panels/table.rs
//
// Client table (central area). Renders `state.view` in order; column headers
// show the sort priority and direction of any active criterion on that column.

use crate::app::state::AppState;
use crate::core::model::{SortDirection, SortField};
use crate::ui::theme;
use crate::util::constants::TABLE_DATE_FORMAT;

/// Table columns, left to right.
const COLUMNS: [(SortField, &str); 8] = [
    (SortField::Id, "Client ID"),
    (SortField::Name, "Client Name"),
    (SortField::Type, "Client Type"),
    (SortField::Email, "Email"),
    (SortField::Status, "Status"),
    (SortField::UpdatedBy, "Updated By"),
    (SortField::CreatedAt, "Created"),
    (SortField::UpdatedAt, "Updated"),
];

/// Render the client table.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    if state.view.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new("No results found").weak());
        });
        return;
    }

    let dark_mode = ui.visuals().dark_mode;

    egui::ScrollArea::both()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            egui::Grid::new("client_table")
                .num_columns(COLUMNS.len())
                .spacing(theme::TABLE_SPACING)
                .striped(true)
                .show(ui, |ui| {
                    for (field, title) in COLUMNS {
                        ui.label(egui::RichText::new(column_header(state, field, title)).strong());
                    }
                    ui.end_row();

                    for client in state.visible_clients() {
                        ui.label(
                            egui::RichText::new(&client.id)
                                .monospace()
                                .size(theme::MONO_SIZE),
                        );
                        ui.label(egui::RichText::new(&client.name).strong());
                        ui.label(client.client_type.label());
                        ui.label(&client.email);
                        ui.label(theme::status_badge(&client.status, dark_mode));
                        ui.label(&client.updated_by);
                        ui.label(client.created_at.format(TABLE_DATE_FORMAT).to_string());
                        ui.label(client.updated_at.format(TABLE_DATE_FORMAT).to_string());
                        ui.end_row();
                    }
                });
        });
}

/// Header text, annotated with "1 ▲" style markers for sorted columns.
fn column_header(state: &AppState, field: SortField, title: &str) -> String {
    let criteria = state.sort.criteria();
    let Some(rank) = criteria.iter().position(|c| c.field == field) else {
        return title.to_string();
    };
    let arrow = match criteria[rank].direction {
        SortDirection::Asc => "\u{25b2}",
        SortDirection::Desc => "\u{25bc}",
    };
    if criteria.len() > 1 {
        format!("{title} {arrow}{}", rank + 1)
    } else {
        format!("{title} {arrow}")
    }
}
