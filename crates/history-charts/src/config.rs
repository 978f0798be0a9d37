// File: crates/history-charts/src/config.rs
// Summary: Renderer configuration (TOML) with defaults matching the fixed page layout.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::backend::SkiaBackend;
use crate::error::{ConfigError, LoadError};
use crate::loader::{DataLocation, DEFAULT_DATA_PATH, DEFAULT_PAGE};
use crate::model::Field;
use crate::surface::SurfaceSet;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererConfig {
    /// URL or local path of the hosting page.
    pub page: String,
    /// History document location, relative to `page`.
    pub data: String,
    /// Directory receiving one `<surface id>.png` per chart.
    pub output_dir: PathBuf,
    pub width: i32,
    pub height: i32,
    /// Theme preset name (`light`, `dark`, `high-contrast-dark`).
    pub theme: String,
    pub draw_labels: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE.to_string(),
            data: DEFAULT_DATA_PATH.to_string(),
            output_dir: PathBuf::from("web/charts"),
            width: 800,
            height: 400,
            theme: "light".to_string(),
            draw_labels: true,
        }
    }
}

impl RendererConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.display().to_string(), source })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse { path: path.display().to_string(), source })
    }

    pub fn data_location(&self) -> Result<DataLocation, LoadError> {
        DataLocation::resolve(&self.page, &self.data)
    }

    /// One surface per plotted field.
    pub fn surfaces(&self) -> SurfaceSet {
        SurfaceSet::in_dir(&self.output_dir, Field::ALL.map(Field::surface_id), self.width, self.height)
    }

    pub fn theme(&self) -> chart_core::Theme {
        chart_core::theme::find(&self.theme)
    }

    pub fn backend(&self) -> SkiaBackend {
        SkiaBackend::new(self.surfaces()).with_theme(self.theme()).with_labels(self.draw_labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_one_directory_above_page() {
        let cfg = RendererConfig::default();
        let loc = cfg.data_location().unwrap();
        let expected = std::path::absolute("data/history.json").unwrap();
        assert_eq!(loc.url().to_file_path().unwrap(), expected);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = RendererConfig::from_toml_str("width = 640\ntheme = \"dark\"\n").unwrap();
        assert_eq!(cfg.width, 640);
        assert_eq!(cfg.height, 400);
        assert_eq!(cfg.theme().name, "dark");
        assert_eq!(cfg.data, "../data/history.json");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(RendererConfig::from_toml_str("colour = \"red\"").is_err());
    }

    #[test]
    fn surfaces_cover_every_field() {
        let cfg = RendererConfig::default();
        let surfaces = cfg.surfaces();
        for field in Field::ALL {
            assert!(surfaces.get(field.surface_id()).is_some());
        }
        assert_eq!(surfaces.len(), 4);
    }
}
