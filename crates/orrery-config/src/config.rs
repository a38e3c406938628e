//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Mesh ingestion and surface parameterization settings.
    pub mesh: MeshConfig,
    /// Orbital scene settings.
    pub scene: SceneConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Mesh ingestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MeshConfig {
    /// Size the largest bounding-box dimension is scaled to.
    pub target_size: f32,
    /// Angular distance (radians) from ±π within which a vertex counts as on the UV seam.
    pub seam_threshold: f32,
    /// Mirror the longitude term (`u = 1 - u`) so textures read eastward from outside.
    pub flip_u: bool,
    /// Generate spherical UVs. When false the UV buffer is left empty.
    pub generate_uvs: bool,
}

/// One renderable body in the scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BodyConfig {
    /// Body name. `sun`, `earth` and `moon` receive orbital transforms.
    pub name: String,
    /// Path to the STL geometry file.
    pub mesh: PathBuf,
    /// Optional path to an equirectangular texture image.
    pub texture: Option<PathBuf>,
}

/// Orbital scene configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Simulated seconds per wall-clock second.
    pub time_scale: f32,
    /// Earth's distance from the sun in scene units.
    pub earth_orbit_radius: f32,
    /// Moon's distance from earth in scene units.
    pub moon_orbit_distance: f32,
    /// Uniform scale applied to the moon mesh.
    pub moon_scale: f32,
    /// Uniform scale applied to the sun mesh.
    pub sun_scale: f32,
    /// Earth's axial tilt in degrees.
    pub axial_tilt_deg: f32,
    /// Days per full earth spin.
    pub days_per_earth_rotation: f32,
    /// Days per earth orbit around the sun.
    pub days_per_earth_year: f32,
    /// Days per moon orbit around earth (sidereal).
    pub days_per_moon_orbit: f32,
    /// Bodies to load.
    pub bodies: Vec<BodyConfig>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            target_size: 150.0,
            seam_threshold: 0.005,
            flip_u: true,
            generate_uvs: true,
        }
    }
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            mesh: PathBuf::from("sphere.stl"),
            texture: None,
        }
    }
}

impl BodyConfig {
    fn textured(name: &str, texture: &str) -> Self {
        Self {
            name: name.to_string(),
            mesh: PathBuf::from("sphere.stl"),
            texture: Some(PathBuf::from(texture)),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            time_scale: 10_000.0,
            earth_orbit_radius: 400.0,
            moon_orbit_distance: 200.0,
            moon_scale: 0.27,
            sun_scale: 2.0,
            axial_tilt_deg: 23.5,
            days_per_earth_rotation: 1.0,
            days_per_earth_year: 365.25,
            days_per_moon_orbit: 27.322,
            bodies: vec![
                BodyConfig::textured("sun", "2k_sun.bmp"),
                BodyConfig::textured("earth", "2k_earth_daymap.bmp"),
                BodyConfig::textured("moon", "2k_moon.bmp"),
            ],
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Platform config directory for Orrery (e.g. `~/.config/orrery`).
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("orrery"))
        .ok_or(ConfigError::NoConfigDir)
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
