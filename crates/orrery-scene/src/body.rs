//! A renderable body: normalized mesh, optional texture, model matrix.

use glam::{Mat4, Vec3};
use orrery_config::BodyConfig;
use orrery_mesh::{MeshBuffers, MeshError, MeshLoader};
use orrery_texture::{TextureImage, TextureSource, load_texture};

/// Errors that stop a body from loading.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("failed to load mesh for body '{name}': {source}")]
    Mesh {
        name: String,
        #[source]
        source: MeshError,
    },
}

/// Geometry and appearance of one body, plus where it sits in the world.
#[derive(Debug, Clone)]
pub struct RenderBody {
    pub name: String,
    pub mesh: MeshBuffers,
    pub texture: Option<TextureImage>,
    pub model: Mat4,
}

impl RenderBody {
    /// True when the body carries both a texture and UVs to sample it with.
    pub fn is_textured(&self) -> bool {
        self.texture.is_some() && self.mesh.has_uvs()
    }

    /// Origin of the body's local frame in world space.
    pub fn world_position(&self) -> Vec3 {
        self.model.transform_point3(Vec3::ZERO)
    }
}

/// Load a body's mesh and, if configured, its texture.
///
/// A texture that cannot be loaded is not fatal: the body is kept with
/// its positions and normals, its UVs are dropped and it renders
/// untextured.
pub fn load_body(config: &BodyConfig, loader: &MeshLoader) -> Result<RenderBody, SceneError> {
    let loaded = loader.load(&config.mesh).map_err(|source| SceneError::Mesh {
        name: config.name.clone(),
        source,
    })?;
    let mut mesh = loaded.buffers;

    let texture = match &config.texture {
        Some(path) if mesh.has_uvs() => {
            match load_texture(&TextureSource::File(path.clone())) {
                Ok(image) => Some(image),
                Err(err) => {
                    tracing::warn!(body = %config.name, "{err}; rendering untextured");
                    mesh.strip_uvs();
                    None
                }
            }
        }
        Some(path) => {
            tracing::warn!(
                body = %config.name,
                texture = %path.display(),
                "UV generation disabled, ignoring texture"
            );
            None
        }
        None => None,
    };

    Ok(RenderBody {
        name: config.name.clone(),
        mesh,
        texture,
        model: Mat4::IDENTITY,
    })
}
