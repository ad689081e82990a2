use glam::Vec4;
use uuid::Uuid;

use crate::impl_material_api;
use crate::resources::material::MaterialSettings;
use crate::resources::texture::TextureHandle;
use crate::resources::version_tracker::ChangeTracker;

/// Parameter block of [`MeshPhysicalMaterial`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshPhysicalParams {
    pub color: Vec4,
    pub roughness: f32,
    pub metalness: f32,
    pub opacity: f32,
    pub env_map_intensity: f32,
    pub transmission: f32,
}

impl Default for MeshPhysicalParams {
    fn default() -> Self {
        Self {
            color: Vec4::ONE,
            roughness: 1.0,
            metalness: 0.0,
            opacity: 1.0,
            env_map_intensity: 1.0,
            transmission: 0.0,
        }
    }
}

/// Physically based material with transmission, used for glass-like
/// surfaces.
#[derive(Debug)]
pub struct MeshPhysicalMaterial {
    pub uuid: Uuid,
    pub(crate) params: MeshPhysicalParams,
    pub(crate) map: Option<TextureHandle>,
    pub(crate) settings: MaterialSettings,
    pub(crate) tracker: ChangeTracker,
}

impl MeshPhysicalMaterial {
    #[must_use]
    pub fn new(color: Vec4) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            params: MeshPhysicalParams { color, ..Default::default() },
            map: None,
            settings: MaterialSettings::default(),
            tracker: ChangeTracker::new(),
        }
    }
}

impl_material_api!(
    MeshPhysicalMaterial,
    MeshPhysicalParams,
    "mesh_physical",
    params: [
        (color,             Vec4, "Base color."),
        (roughness,         f32,  "Roughness factor."),
        (metalness,         f32,  "Metalness factor."),
        (opacity,           f32,  "Opacity value."),
        (env_map_intensity, f32,  "Environment map intensity."),
        (transmission,      f32,  "Transmission factor; 1 is fully glass-like."),
    ]
);

impl Default for MeshPhysicalMaterial {
    fn default() -> Self {
        Self::new(Vec4::ONE)
    }
}
