use std::path::PathBuf;

use eframe::egui::Context;

use graph_sketch::editor::{EditorConfig, EditorSession};
use graph_sketch::graph::json_export_path;

mod canvas;
mod render_utils;
mod ui;

pub struct GraphSketchApp {
    session: EditorSession,
    matrix_text: String,
    export_status: Option<ExportStatus>,
}

enum ExportStatus {
    Saved(PathBuf),
    Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MatrixAction {
    Show,
    Save,
    Print,
}

impl GraphSketchApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        tracing::info!(placement = config.placement.label(), "editor ready");
        Self {
            session: EditorSession::new(config),
            matrix_text: String::new(),
            export_status: None,
        }
    }

    fn run_matrix_action(&mut self, action: MatrixAction) {
        match action {
            MatrixAction::Show => {
                self.matrix_text = self.session.store().adjacency_matrix().to_text();
            }
            MatrixAction::Save => self.save_matrix(),
            MatrixAction::Print => {
                let matrix = self.session.store().adjacency_matrix();
                if let Err(error) = matrix.write_text(&mut std::io::stderr().lock()) {
                    tracing::warn!("{error:#}");
                }
            }
        }
    }

    fn save_matrix(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .set_file_name("matrix.json")
            .save_file()
        else {
            return;
        };

        let path = json_export_path(path);
        let matrix = self.session.store().adjacency_matrix();
        self.export_status = Some(match matrix.save_json(&path) {
            Ok(()) => ExportStatus::Saved(path),
            Err(error) => {
                let message = format!("{error:#}");
                tracing::warn!(path = %path.display(), "{message}");
                ExportStatus::Failed(message)
            }
        });
    }
}

impl eframe::App for GraphSketchApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if let Some(action) = self.show(ctx) {
            self.run_matrix_action(action);
        }
    }
}
