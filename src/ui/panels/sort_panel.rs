// ClientDesk - ui/panels/sort_panel.rs
//
// Sort dialog: the ordered list of active sort criteria (drag to reorder,
// toggle direction, remove) plus a selector to add the remaining fields.

use crate::app::state::AppState;
use crate::core::model::SortDirection;
use crate::ui::theme;

/// Edits collected while drawing; applied once the list is no longer borrowed.
enum SortAction {
    Toggle(String),
    Remove(String),
    Move { active: String, over: String },
}

/// Render the sort dialog window (if open).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_sort_panel {
        return;
    }

    let mut open = state.show_sort_panel;
    egui::Window::new("Sort Clients")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(theme::SORT_PANEL_WIDTH)
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 96.0])
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new("Drag to change priority. The first field sorts first.")
                    .small()
                    .weak(),
            );
            ui.add_space(4.0);

            render_criteria(ui, state);

            ui.separator();
            render_add_row(ui, state);

            if !state.sort.criteria().is_empty() {
                ui.add_space(4.0);
                if ui.button("Clear all").clicked() {
                    state.reset_sort();
                }
            }
        });
    state.show_sort_panel = open;
}

fn render_criteria(ui: &mut egui::Ui, state: &mut AppState) {
    if state.sort.criteria().is_empty() {
        ui.label(
            egui::RichText::new("No sort fields applied. Add one below.")
                .italics()
                .weak(),
        );
        return;
    }

    let mut action: Option<SortAction> = None;

    for (rank, criterion) in state.sort.criteria().iter().enumerate() {
        let row = ui.horizontal(|ui| {
            let handle_id = egui::Id::new(("sort_criterion", criterion.id.as_str()));
            ui.dnd_drag_source(handle_id, criterion.id.clone(), |ui| {
                ui.label(egui::RichText::new("\u{2630}").weak()); // drag handle
                ui.label(format!("{}.", rank + 1));
                ui.label(egui::RichText::new(criterion.field.label()).strong());
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .small_button("\u{2716}")
                    .on_hover_text("Remove this sort field")
                    .clicked()
                {
                    action = Some(SortAction::Remove(criterion.id.clone()));
                }
                let arrow = match criterion.direction {
                    SortDirection::Asc => "\u{2b06}",
                    SortDirection::Desc => "\u{2b07}",
                };
                if ui
                    .button(format!("{arrow} {}", criterion.direction.label()))
                    .on_hover_text("Toggle direction")
                    .clicked()
                {
                    action = Some(SortAction::Toggle(criterion.id.clone()));
                }
            });
        });

        let response = row.response;
        if response.dnd_hover_payload::<String>().is_some() {
            let rect = response.rect;
            ui.painter().hline(
                rect.x_range(),
                rect.top(),
                egui::Stroke::new(2.0, theme::DROP_MARKER),
            );
        }
        if let Some(dragged) = response.dnd_release_payload::<String>() {
            action = Some(SortAction::Move {
                active: dragged.as_ref().clone(),
                over: criterion.id.clone(),
            });
        }
    }

    match action {
        Some(SortAction::Toggle(id)) => state.toggle_sort_direction(&id),
        Some(SortAction::Remove(id)) => state.remove_sort_criterion(&id),
        Some(SortAction::Move { active, over }) => {
            tracing::debug!(active = %active, over = %over, "Sort criterion dragged");
            state.move_sort_criterion(&active, &over);
        }
        None => {}
    }
}

fn render_add_row(ui: &mut egui::Ui, state: &mut AppState) {
    let available = state.sort.available_fields();
    if available.is_empty() {
        ui.label(egui::RichText::new("All fields already added").weak());
        return;
    }

    // Drop a stale selection (e.g. the field was added by another path).
    if let Some(pending) = state.pending_sort_field {
        if !available.contains(&pending) {
            state.pending_sort_field = None;
        }
    }

    ui.horizontal(|ui| {
        let selected_text = state
            .pending_sort_field
            .map(|field| field.label())
            .unwrap_or("Select field...");
        egui::ComboBox::from_id_salt("add_sort_field")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for field in &available {
                    ui.selectable_value(&mut state.pending_sort_field, Some(*field), field.label());
                }
            });

        let can_add = state.pending_sort_field.is_some();
        if ui.add_enabled(can_add, egui::Button::new("Add")).clicked() {
            if let Some(field) = state.pending_sort_field.take() {
                state.add_sort_field(field);
            }
        }
    });
}
