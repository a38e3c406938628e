//! Headless Orrery driver.
//!
//! Loads every configured body through the mesh pipeline, runs the orbital
//! clock for a fixed number of frames and logs where everything ended up.
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags:
//! `cargo run -p orrery-demo -- --mesh sphere.stl --texture 2k_earth_daymap.bmp`.

use std::process::ExitCode;

use clap::Parser;
use orrery_config::{CliArgs, Config, default_config_dir};
use orrery_scene::Scene;
use tracing::{error, info};

/// Fixed frame step, matching a 60 Hz render loop.
const FIXED_DT: f32 = 1.0 / 60.0;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = match args.config.clone().map_or_else(default_config_dir, Ok) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    orrery_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let mut scene = match Scene::load(&config) {
        Ok(scene) => scene,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    for _ in 0..args.frames {
        scene.step(FIXED_DT);
    }

    info!(
        frames = args.frames,
        days = scene.orbit.elapsed_days,
        "simulation finished"
    );
    for body in &scene.bodies {
        let pos = body.world_position();
        info!(
            body = %body.name,
            x = pos.x,
            y = pos.y,
            z = pos.z,
            vertices = body.mesh.vertex_count(),
            triangles = body.mesh.triangle_count(),
            textured = body.is_textured(),
            "body state"
        );
    }

    ExitCode::SUCCESS
}
