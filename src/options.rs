//! Camera tuning options with TOML preset support.
//!
//! Every tunable the camera core uses lives here: projection parameters,
//! gesture sensitivities, and the clamp ranges that keep the orbit math
//! non-degenerate. Options serialize to/from TOML so hosts can ship view
//! presets; the JSON schema feeds settings UIs.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

/// Camera projection and control parameters.
///
/// Defaults reproduce the reference orbit behavior exactly; a host that
/// never touches this struct gets 0.3°-per-pixel rotation, a pitch limit
/// of ±85°, and an orbit radius clamped to [2, 20]. All fields use
/// `#[serde(default)]` so partial TOML files work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Rotation sensitivity in degrees per device pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.05, max = 1.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Zoom sensitivity in radius units per scroll unit.
    #[schemars(title = "Zoom Speed", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub zoom_speed: f32,
    /// Pitch clamp magnitude in degrees; must stay below 90 so the up
    /// vector never parallels the view direction.
    #[schemars(skip)]
    pub pitch_limit: f32,
    /// Minimum orbit radius; must stay positive so the eye never reaches
    /// the target.
    #[schemars(skip)]
    pub min_radius: f32,
    /// Maximum orbit radius.
    #[schemars(skip)]
    pub max_radius: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            znear: 0.1,
            zfar: 100.0,
            rotate_speed: 0.3,
            zoom_speed: 0.01,
            pitch_limit: 85.0,
            min_radius: 2.0,
            max_radius: 20.0,
        }
    }
}

impl CameraOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(CameraOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrbitError> {
        let content = std::fs::read_to_string(path).map_err(OrbitError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))?;
        log::debug!("loaded camera options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrbitError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbitError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbitError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = CameraOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: CameraOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
rotate_speed = 0.5
";
        let opts: CameraOptions = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.rotate_speed, 0.5);
        // Everything else should be default
        assert_eq!(opts.fovy, 60.0);
        assert_eq!(opts.pitch_limit, 85.0);
        assert_eq!(opts.max_radius, 20.0);
    }

    #[test]
    fn defaults_match_reference_constants() {
        let opts = CameraOptions::default();
        assert_eq!(opts.fovy, 60.0);
        assert_eq!(opts.znear, 0.1);
        assert_eq!(opts.zfar, 100.0);
        assert_eq!(opts.rotate_speed, 0.3);
        assert_eq!(opts.zoom_speed, 0.01);
        assert_eq!((opts.min_radius, opts.max_radius), (2.0, 20.0));
    }

    #[test]
    fn schema_exposes_ui_fields_only() {
        let schema_value =
            serde_json::to_value(CameraOptions::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("fovy"));
        assert!(props.contains_key("rotate_speed"));
        assert!(props.contains_key("zoom_speed"));

        // Clamp ranges and clip planes are invariants, not UI knobs
        assert!(!props.contains_key("pitch_limit"));
        assert!(!props.contains_key("min_radius"));
        assert!(!props.contains_key("znear"));
    }
}
