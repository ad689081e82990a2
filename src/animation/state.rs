use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::resources::color::ColorValue;

/// Color state shared between the timeline and its update callbacks.
pub type SharedColorState = Arc<RwLock<ColorState>>;

/// Current bottle colors: `cristal` tints the glass shell, `soda` the
/// liquid fill.
///
/// Keyframes interpolate these strings in place; the material update
/// callback copies them onto the materials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorState {
    pub cristal: ColorValue,
    pub soda: ColorValue,
}

impl ColorState {
    #[must_use]
    pub fn new(cristal: &str, soda: &str) -> Self {
        Self {
            cristal: cristal.to_string(),
            soda: soda.to_string(),
        }
    }

    #[must_use]
    pub fn into_shared(self) -> SharedColorState {
        Arc::new(RwLock::new(self))
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new("#8c8c8c", "#000")
    }
}
