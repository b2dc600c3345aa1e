//! Population-change viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the configuration and the
//! [`AppState`] and implements [`eframe::App`] to render the entry list,
//! the compute/reload controls and the message label.

use eframe::App;
use pop_core::{config::ViewerConfig, workbook};

use crate::state::{AppState, LoadStatus};

/// Main application state for the interactive viewer.
///
/// The workbook is read once in [`Viewer::new`] and the resulting table is
/// cached in `state`. Selecting an entry or pressing "Compute change" only
/// touches that cache; the file is read again only on "Reload".
///
/// ### Fields
/// - `cfg` - Data source and window settings.
/// - `state` - Cached table, selection and message label.
pub struct Viewer {
    cfg: ViewerConfig,
    state: AppState,
}

impl Viewer {
    /// Creates a viewer and performs the initial load.
    ///
    /// A failed load does not abort: the viewer starts in an error state
    /// and reports the failure in the central panel.
    pub fn new(cfg: ViewerConfig) -> Self {
        let state = AppState::new(workbook::load_table(&cfg.source));
        Self { cfg, state }
    }

    /// Re-reads the workbook and replaces the cached table.
    fn reload(&mut self) {
        self.state.apply_load(workbook::load_table(&self.cfg.source));
    }

    /// One-line summary for the status bar.
    fn summary(&self) -> String {
        match self.state.status() {
            LoadStatus::Loaded(table) => format!(
                "entries = {}  skipped = {}  sheet = {}",
                table.records.len(),
                table.skipped.total(),
                table.sheet
            ),
            LoadStatus::Failed(_) => "no data loaded".to_owned(),
        }
    }

    /// Builds the top panel (compute and reload buttons).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let can_compute = self.state.selected().is_some();
                if ui
                    .add_enabled(can_compute, egui::Button::new("Compute change"))
                    .clicked()
                {
                    self.state.compute_selected();
                }

                if ui.button("Reload").clicked() {
                    self.reload();
                }

                ui.separator();
                if let Some(record) = self.state.selected_record() {
                    ui.label(format!("selected: {}", record.label()));
                }
            });
        });
    }

    /// Builds the bottom status bar (counts and source path).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(self.summary());
                ui.separator();
                ui.label(self.cfg.source.workbook.display().to_string());
            });
        });
    }

    /// Builds the message label panel.
    fn ui_message_panel(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("message_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label(egui::RichText::new(self.state.message()).strong());
            ui.add_space(4.0);
        });
    }

    /// Builds the central panel: the entry list, or the load error.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let LoadStatus::Failed(msg) = self.state.status() {
                ui.colored_label(ui.visuals().error_fg_color, "Failed to load data");
                ui.label(msg.as_str());
                return;
            }

            let records = self.state.records();
            let selected = self.state.selected();
            let row_height = ui.text_style_height(&egui::TextStyle::Body);
            let mut clicked = None;

            // Only the visible rows are laid out; the county sheet has thousands.
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show_rows(ui, row_height, records.len(), |ui, range| {
                    for i in range {
                        let is_selected = selected == Some(i);
                        if ui.selectable_label(is_selected, records[i].label()).clicked() {
                            clicked = Some(i);
                        }
                    }
                });

            if let Some(i) = clicked {
                self.state.select(i);
            }
        });
    }
}

impl App for Viewer {
    /// Main egui update callback. Called every frame by eframe.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_message_panel(ctx);
        self.ui_central_panel(ctx);
    }
}
