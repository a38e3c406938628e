//! Sun, earth and moon: loaded bodies plus the clock that moves them.

mod body;
mod orbit;

pub use body::{RenderBody, SceneError, load_body};
pub use orbit::{BodyTransforms, OrbitalState, SECONDS_PER_DAY};

use orrery_config::Config;
use orrery_mesh::MeshLoader;

/// All loaded bodies and the orbital state driving their transforms.
#[derive(Debug, Clone)]
pub struct Scene {
    pub bodies: Vec<RenderBody>,
    pub orbit: OrbitalState,
}

impl Scene {
    /// Load every configured body. The first body that fails to load aborts.
    pub fn load(config: &Config) -> Result<Self, SceneError> {
        let loader = MeshLoader::new(&config.mesh);
        let bodies = config
            .scene
            .bodies
            .iter()
            .map(|body| load_body(body, &loader))
            .collect::<Result<Vec<_>, _>>()?;

        let mut scene = Self {
            bodies,
            orbit: OrbitalState::new(&config.scene),
        };
        scene.apply_transforms();
        Ok(scene)
    }

    /// Advance the clock by `dt_seconds` of wall time and refresh model matrices.
    pub fn step(&mut self, dt_seconds: f32) {
        self.orbit.advance(dt_seconds);
        self.apply_transforms();
    }

    pub fn body(&self, name: &str) -> Option<&RenderBody> {
        self.bodies.iter().find(|b| b.name == name)
    }

    fn apply_transforms(&mut self) {
        let transforms = self.orbit.transforms();
        for body in &mut self.bodies {
            if let Some(model) = transforms.for_body(&body.name) {
                body.model = model;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use orrery_config::BodyConfig;
    use orrery_stl::{Triangle, write_binary_stl};

    fn write_octahedron(dir: &std::path::Path) -> std::path::PathBuf {
        let mut tris = Vec::new();
        for sx in [1.0f32, -1.0] {
            for sy in [1.0f32, -1.0] {
                for sz in [1.0f32, -1.0] {
                    let a = Vec3::new(sx, 0.0, 0.0);
                    let b = Vec3::new(0.0, sy, 0.0);
                    let c = Vec3::new(0.0, 0.0, sz);
                    let (b, c) = if sx * sy * sz > 0.0 { (b, c) } else { (c, b) };
                    tris.push(Triangle::new(Vec3::ZERO, [a, b, c]));
                }
            }
        }
        let path = dir.join("octa.stl");
        std::fs::write(&path, write_binary_stl(&tris)).unwrap();
        path
    }

    fn scene_config(mesh: std::path::PathBuf) -> Config {
        let mut config = Config::default();
        config.scene.bodies = ["sun", "earth", "moon", "probe"]
            .into_iter()
            .map(|name| BodyConfig {
                name: name.to_string(),
                mesh: mesh.clone(),
                texture: None,
            })
            .collect();
        config
    }

    #[test]
    fn test_scene_loads_all_bodies() {
        let dir = tempfile::tempdir().unwrap();
        let config = scene_config(write_octahedron(dir.path()));
        let scene = Scene::load(&config).unwrap();

        assert_eq!(scene.bodies.len(), 4);
        let earth = scene.body("earth").unwrap();
        let pos = earth.world_position();
        assert!((pos - Vec3::new(400.0, 0.0, 0.0)).length() < 1e-3, "{pos}");
        assert_eq!(scene.body("probe").unwrap().model, glam::Mat4::IDENTITY);
    }

    #[test]
    fn test_step_moves_earth_and_moon() {
        let dir = tempfile::tempdir().unwrap();
        let config = scene_config(write_octahedron(dir.path()));
        let mut scene = Scene::load(&config).unwrap();

        let earth_before = scene.body("earth").unwrap().world_position();
        let moon_before = scene.body("moon").unwrap().world_position();
        for _ in 0..600 {
            scene.step(1.0 / 60.0);
        }
        let earth_after = scene.body("earth").unwrap().world_position();
        let moon_after = scene.body("moon").unwrap().world_position();

        assert!(earth_after.distance(earth_before) > 1.0);
        assert!(moon_after.distance(moon_before) > 1.0);
        assert!((earth_after.length() - 400.0).abs() < 1e-2);
        assert!((moon_after.distance(earth_after) - 200.0).abs() < 1e-2);
    }

    #[test]
    fn test_missing_mesh_aborts_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = scene_config(dir.path().join("absent.stl"));
        let result = Scene::load(&config);
        assert!(matches!(result, Err(SceneError::Mesh { ref name, .. }) if name == "sun"));
    }
}
