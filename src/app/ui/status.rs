use super::super::{ExportStatus, GraphSketchApp};

impl GraphSketchApp {
    pub(in crate::app) const KEY_HELP: &'static str =
        "click: add / select  ·  E: edge  ·  D: delete  ·  R: delete edge";

    pub(in crate::app) fn summary_text(&self) -> String {
        let store = self.session.store();
        let mut parts = vec![
            format!("vertices {}", store.vertex_count()),
            format!("edges {}", store.edge_count()),
            format!("mode: {}", self.session.config().placement.label()),
        ];

        let selected = self.session.selection().vertices().len();
        if selected > 0 {
            parts.push(format!("selected {selected}"));
        }

        parts.join(" | ")
    }

    pub(in crate::app) fn export_text(&self) -> Option<String> {
        self.export_status.as_ref().map(|status| match status {
            ExportStatus::Saved(path) => format!("saved {}", path.display()),
            ExportStatus::Failed(error) => format!("export failed: {error}"),
        })
    }
}
