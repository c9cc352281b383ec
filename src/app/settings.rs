use serde::Deserialize;

/// Optional appearance settings. Everything defaults so a partial file is
/// fine; a missing or malformed file falls back to the defaults entirely.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub(super) struct AppSettings {
    pub node_radius: f32,
    pub transition_label: String,
    pub show_grid: bool,
    pub grid_spacing: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            node_radius: 30.0,
            transition_label: "a".to_string(),
            show_grid: false,
            grid_spacing: 64.0,
        }
    }
}

pub(super) fn load_settings(path: &str) -> Option<AppSettings> {
    let s = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<AppSettings>(&s) {
        Ok(settings) => Some(settings),
        Err(err) => {
            log::warn!("ignoring malformed settings at {path}: {err}");
            None
        }
    }
}
