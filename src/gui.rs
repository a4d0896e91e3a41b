// ClientDesk - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the header, toolbar, client table and sort dialog.

use crate::app::state::AppState;
use crate::core::export::ExportFormat;
use crate::ui;
use crate::util::constants::DRAG_ACTIVATION_DISTANCE;

/// The ClientDesk application.
pub struct ClientDeskApp {
    pub state: AppState,
}

impl ClientDeskApp {
    /// Create a new application instance with the given state.
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        cc.egui_ctx
            .set_theme(ui::theme::theme_preference(state.theme));
        cc.egui_ctx.options_mut(|options| {
            options.input_options.max_click_dist = DRAG_ACTIVATION_DISTANCE;
        });
        for warning in &state.warnings {
            tracing::warn!("{}", warning);
        }
        Self { state }
    }

    /// Ask for a destination and export the visible view.
    fn export(&mut self, format: ExportFormat) {
        let Some(dest) = rfd::FileDialog::new()
            .add_filter(format.label(), &[format.extension()])
            .set_file_name(format.default_file_name())
            .save_file()
        else {
            return;
        };

        self.state.status_message = match self.state.export_visible(format, &dest) {
            Ok(n) => format!("Exported {n} clients to {}.", format.label()),
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                format!("{} export failed: {e}", format.label())
            }
        };
    }
}

impl eframe::App for ClientDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let has_rows = !self.state.view.is_empty();
                    ui.add_enabled_ui(has_rows, |ui| {
                        if ui.button("Export CSV...").clicked() {
                            ui.close_menu();
                            self.export(ExportFormat::Csv);
                        }
                        if ui.button("Export JSON...").clicked() {
                            ui.close_menu();
                            self.export(ExportFormat::Json);
                        }
                    });
                    ui.separator();
                    if ui.button("Regenerate Clients").clicked() {
                        self.state.regenerate_clients();
                        ui.close_menu();
                    }
                    let has_sort = !self.state.sort.criteria().is_empty();
                    ui.add_enabled_ui(has_sort, |ui| {
                        if ui.button("Reset Sort").clicked() {
                            self.state.reset_sort();
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if !self.state.warnings.is_empty() {
                    let badge = egui::RichText::new(format!(
                        " \u{26a0} {} ",
                        self.state.warnings.len()
                    ))
                    .color(egui::Color32::from_rgb(217, 119, 6)); // Amber 600
                    ui.label(badge)
                        .on_hover_text(self.state.warnings.join("\n"));
                    ui.separator();
                }
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total = self.state.clients.len();
                    let visible = self.state.view.len();
                    ui.label(format!("{visible}/{total} clients"));
                    if self.state.debug_mode {
                        ui.separator();
                        ui.label(egui::RichText::new("DEBUG").small().weak());
                    }
                });
            });
        });

        // Header and toolbar
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui::panels::toolbar::render_header(ui, &mut self.state);
            ui.add_space(4.0);
            ui::panels::toolbar::render(ui, &mut self.state);
            ui.add_space(6.0);
        });

        // Central panel (client table)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::table::render(ui, &self.state);
        });

        // Sort dialog
        ui::panels::sort_panel::render(ctx, &mut self.state);
    }
}
