mod macros;
mod physical;
mod standard;

pub use physical::{MeshPhysicalMaterial, MeshPhysicalParams};
pub use standard::{MeshStandardMaterial, MeshStandardParams};

use std::sync::Arc;

use glam::Vec4;
use parking_lot::RwLock;
use uuid::Uuid;

/// A material shared between the scene, the renderer and timeline callbacks.
pub type SharedMaterial<T> = Arc<RwLock<T>>;

/// Wraps a material for sharing.
#[must_use]
pub fn shared<T: MaterialTrait>(material: T) -> SharedMaterial<T> {
    Arc::new(RwLock::new(material))
}

/// Blending settings common to all materials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MaterialSettings {
    pub transparent: bool,
}

// ============================================================================
// MaterialTrait
// ============================================================================

/// Interface every material exposes to the renderer and to timeline
/// callbacks.
pub trait MaterialTrait: Send + Sync + std::fmt::Debug {
    /// Shader family name, e.g. `"mesh_physical"`.
    fn material_type(&self) -> &'static str;

    fn uuid(&self) -> Uuid;

    /// Base color as normalized RGBA.
    fn base_color(&self) -> Vec4;

    fn set_base_color(&mut self, color: Vec4);

    fn settings(&self) -> &MaterialSettings;

    /// Incremented on every mutation.
    fn version(&self) -> u64;

    /// Dirty flag the renderer polls each frame.
    fn needs_update(&self) -> bool;

    /// Sets the dirty flag. Must follow any mutation the renderer should see.
    fn set_needs_update(&mut self);

    /// Clears the dirty flag, returning whether it was set.
    fn take_needs_update(&mut self) -> bool;
}
