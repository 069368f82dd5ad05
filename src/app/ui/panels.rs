use eframe::egui::{self, Align, Context, Layout, TextEdit};

use super::super::{GraphSketchApp, MatrixAction};

impl GraphSketchApp {
    /// Lays out the window for one frame. Matrix commands are returned rather
    /// than run so the save dialog never opens inside a panel closure.
    pub(in crate::app) fn show(&mut self, ctx: &Context) -> Option<MatrixAction> {
        let mut action = None;

        egui::TopBottomPanel::top("menu_bar")
            .resizable(false)
            .show(ctx, |ui| {
                egui::MenuBar::new().ui(ui, |ui| {
                    ui.menu_button("File", |ui| {
                        if ui.button("Save matrix…").clicked() {
                            action = Some(MatrixAction::Save);
                            ui.close();
                        }
                        if ui.button("Print matrix").clicked() {
                            action = Some(MatrixAction::Print);
                            ui.close();
                        }
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(self.summary_text());
                    });
                });
            });

        egui::TopBottomPanel::bottom("matrix")
            .resizable(true)
            .default_height(180.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Show matrix").clicked() {
                        action = Some(MatrixAction::Show);
                    }
                    ui.separator();
                    ui.label(Self::KEY_HELP);
                    if let Some(export_text) = self.export_text() {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(export_text);
                        });
                    }
                });
                ui.add_space(4.0);
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let mut text = self.matrix_text.as_str();
                    ui.add(
                        TextEdit::multiline(&mut text)
                            .code_editor()
                            .desired_rows(8)
                            .desired_width(f32::INFINITY),
                    );
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| self.draw_canvas(ui));

        action
    }
}
