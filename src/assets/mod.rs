//! Asset loading
//!
//! - [`TextureLoader`]: non-blocking image loads with explicit readiness
//! - [`TextureBank`]: named label textures
//! - [`generate_init_materials`]: the bottle's baseline material set

pub mod bank;
pub mod factory;
pub mod io;
pub mod loader;

pub use bank::{TextureBank, load_textures};
pub use factory::{LABEL_TEXTURE, MaterialSet, generate_init_materials, generate_materials_with_label};
pub use io::{FileAssetReader, asset_name, texture_path};
pub use loader::TextureLoader;
