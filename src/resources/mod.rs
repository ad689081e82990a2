//! Core resource definitions
//!
//! Renderer-agnostic data the showcase mutates:
//! - Color: CSS-style color parsing and formatting
//! - Material: physical and standard PBR materials with dirty tracking
//! - Texture: image handles with explicit load state
//! - Image: decoded RGBA8 pixels

pub mod color;
pub mod image;
pub mod material;
pub mod texture;
pub mod version_tracker;

pub use color::{Color, ColorValue, convert_rgba_to_rgb};
pub use self::image::Image;
pub use material::{
    MaterialSettings, MaterialTrait, MeshPhysicalMaterial, MeshPhysicalParams,
    MeshStandardMaterial, MeshStandardParams, SharedMaterial,
};
pub use texture::{LoadState, Texture, TextureHandle};
