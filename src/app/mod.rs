use crate::model;
use crate::prompt;
use eframe::egui;

mod actions;
mod interaction;
mod render;
mod settings;
mod update;

/// Interaction mode for pointer gestures on the canvas: dragging a node on
/// press (`Move`) or starting a new transition from it (`Draw`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Move,
    Draw,
}

/// Pointer gesture in flight. At most one node is being dragged or connected
/// from at a time; `Connect` carries the live pointer position that drives
/// the preview arrow.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Gesture {
    Idle,
    DragNode(model::NodeId),
    Connect {
        from: model::NodeId,
        pointer: egui::Pos2,
    },
}

pub struct SketchApp {
    diagram: model::Diagram,
    prompt: &'static str,
    mode: Mode,
    selected: Option<model::NodeId>,
    gesture: Gesture,
    canvas_center: egui::Pos2,
    node_radius: f32,
    transition_label: String,
    show_grid: bool,
    grid_spacing: f32,
}

impl SketchApp {
    fn config_path() -> Option<String> {
        if let Some(home) = std::env::var_os("HOME") {
            let path = std::path::PathBuf::from(home)
                .join(".config")
                .join("statepad.toml");
            if path.exists() {
                return Some(path.display().to_string());
            }
        }
        if std::path::Path::new("settings.toml").exists() {
            return Some("settings.toml".to_string());
        }
        None
    }

    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings = Self::config_path()
            .and_then(|path| settings::load_settings(&path))
            .unwrap_or_default();
        Self::with_settings(settings)
    }

    fn with_settings(settings: settings::AppSettings) -> Self {
        Self {
            diagram: model::Diagram::default(),
            prompt: prompt::random_prompt(),
            mode: Mode::Move,
            selected: None,
            gesture: Gesture::Idle,
            canvas_center: egui::pos2(400.0, 300.0),
            node_radius: settings.node_radius,
            transition_label: settings.transition_label,
            show_grid: settings.show_grid,
            grid_spacing: settings.grid_spacing,
        }
    }
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_settings(settings::AppSettings::default())
    }
}
