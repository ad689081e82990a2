#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod assets;
pub mod config;
pub mod errors;
pub mod overlay;
pub mod resources;
pub mod scene;
pub mod showcase;

pub use animation::{ColorState, Keyframe, ScrollTimeline, Timeline, load_animations, update_materials};
pub use assets::{MaterialSet, TextureBank, TextureLoader, generate_init_materials, load_textures};
pub use config::ShowcaseSettings;
pub use errors::{Result, ShowcaseError};
pub use overlay::{CssLength, Document, OverlayStyle};
pub use resources::{Color, MaterialTrait, Texture, convert_rgba_to_rgb};
pub use scene::{Node, Scene};
pub use showcase::Showcase;
