//! Command-line argument parsing for Orrery.

use std::path::PathBuf;

use clap::Parser;

use crate::{BodyConfig, Config};

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Sun, earth and moon mesh loader")]
pub struct CliArgs {
    /// Load a single STL mesh instead of the configured bodies.
    #[arg(long)]
    pub mesh: Option<PathBuf>,

    /// Texture image for the `--mesh` body.
    #[arg(long, requires = "mesh")]
    pub texture: Option<PathBuf>,

    /// Size the largest bounding-box dimension is scaled to.
    #[arg(long)]
    pub target_size: Option<f32>,

    /// Seam detection threshold in radians.
    #[arg(long)]
    pub seam_threshold: Option<f32>,

    /// Keep the raw longitude direction instead of mirroring it.
    #[arg(long)]
    pub no_flip_u: bool,

    /// Number of fixed 1/60 s frames to simulate.
    #[arg(long, default_value_t = 60)]
    pub frames: u32,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref path) = args.mesh {
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "mesh".to_string());
            self.scene.bodies = vec![BodyConfig {
                name,
                mesh: path.clone(),
                texture: args.texture.clone(),
            }];
        }
        if let Some(size) = args.target_size {
            self.mesh.target_size = size;
        }
        if let Some(threshold) = args.seam_threshold {
            self.mesh.seam_threshold = threshold;
        }
        if args.no_flip_u {
            self.mesh.flip_u = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
