use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use super::store::VertexId;

/// Snapshot of the adjacency relation, one row per vertex in id order.
///
/// Serializes as the bare array of rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AdjacencyMatrix {
    #[serde(skip)]
    vertex_ids: Vec<VertexId>,
    rows: Vec<Vec<u8>>,
}

impl AdjacencyMatrix {
    pub(super) fn new(vertex_ids: Vec<VertexId>, rows: Vec<Vec<u8>>) -> Self {
        Self { vertex_ids, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn vertex_ids(&self) -> &[VertexId] {
        &self.vertex_ids
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        self.rows.get(row).and_then(|cells| cells.get(column)).copied()
    }

    /// Nested-list rendering, e.g. `[[0, 1], [1, 0]]`.
    pub fn to_text(&self) -> String {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let cells = row.iter().map(u8::to_string).collect::<Vec<_>>();
                format!("[{}]", cells.join(", "))
            })
            .collect::<Vec<_>>();
        format!("[{}]", rows.join(", "))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to encode adjacency matrix")
    }

    pub fn write_text(&self, writer: &mut impl Write) -> Result<()> {
        writeln!(writer, "{}", self.to_text()).context("failed to write adjacency matrix")
    }

    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write adjacency matrix to {}", path.display()))?;
        tracing::info!(path = %path.display(), vertices = self.len(), "adjacency matrix saved");
        Ok(())
    }
}

/// Gives a chosen export path the `.json` extension when it has none.
pub fn json_export_path(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("json")
    }
}
