mod app;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use graph_sketch::editor::{EditorConfig, PlacementMode};
use graph_sketch::graph::PickConfig;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Maximum distance from an edge for a click to add a control point.
    #[arg(long, default_value_t = PickConfig::SEGMENT_THRESHOLD)]
    segment_threshold: f32,

    /// Keep appending clicks as waypoints to the most recently created edge.
    #[arg(long)]
    waypoints: bool,

    #[arg(long, default_value = "graph_sketch=info")]
    log_filter: String,
}

impl Args {
    fn editor_config(&self) -> EditorConfig {
        EditorConfig {
            pick: PickConfig {
                segment_threshold: self.segment_threshold.max(0.0),
                ..PickConfig::default()
            },
            placement: if self.waypoints {
                PlacementMode::AppendWaypoints
            } else {
                PlacementMode::InsertOnSegment
            },
        }
    }
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_filter))
        .with_writer(std::io::stderr)
        .init();

    let config = args.editor_config();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([960.0, 780.0])
            .with_title("Graph Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "graph-sketch",
        options,
        Box::new(move |cc| Ok(Box::new(app::GraphSketchApp::new(cc, config)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_segment_insertion() {
        let args = Args::parse_from(["graph-sketch"]);
        let config = args.editor_config();
        assert_eq!(config.placement, PlacementMode::InsertOnSegment);
        assert_eq!(config.pick, PickConfig::default());
    }

    #[test]
    fn waypoint_flag_and_threshold_are_applied() {
        let args = Args::parse_from(["graph-sketch", "--waypoints", "--segment-threshold", "12.5"]);
        let config = args.editor_config();
        assert_eq!(config.placement, PlacementMode::AppendWaypoints);
        assert_eq!(config.pick.segment_threshold, 12.5);
    }
}
