//! Overlay document
//!
//! A minimal model of the DOM elements layered over the 3D canvas: the page
//! background container and the per-variant product cards. Timeline
//! keyframes write into [`OverlayStyle`]; the host mirrors the style onto
//! real elements however it renders them.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ShowcaseError};
use crate::resources::color::ColorValue;

/// An overlay element shared between the document and timeline keyframes.
pub type SharedElement = Arc<RwLock<OverlayElement>>;

/// A CSS length with the two units the showcase uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CssLength {
    Percent(f32),
    Px(f32),
}

impl CssLength {
    #[must_use]
    pub fn value(self) -> f32 {
        match self {
            Self::Percent(v) | Self::Px(v) => v,
        }
    }

    #[must_use]
    pub fn same_unit(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Percent(_), Self::Percent(_)) | (Self::Px(_), Self::Px(_))
        )
    }

    #[must_use]
    pub fn with_value(self, value: f32) -> Self {
        match self {
            Self::Percent(_) => Self::Percent(value),
            Self::Px(_) => Self::Px(value),
        }
    }
}

impl Default for CssLength {
    fn default() -> Self {
        Self::Px(0.0)
    }
}

impl FromStr for CssLength {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = || ShowcaseError::InvalidLength(s.to_string());

        if let Some(v) = trimmed.strip_suffix('%') {
            return v.trim().parse().map(Self::Percent).map_err(|_| invalid());
        }
        let number = trimmed.strip_suffix("px").unwrap_or(trimmed);
        number.trim().parse().map(Self::Px).map_err(|_| invalid())
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(v) => write!(f, "{v}%"),
            Self::Px(v) => write!(f, "{v}px"),
        }
    }
}

/// The style fields timeline keyframes can drive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyle {
    /// `None` renders as transparent.
    pub background: Option<ColorValue>,
    pub opacity: f32,
    pub left: CssLength,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            background: None,
            opacity: 1.0,
            left: CssLength::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayElement {
    id: String,
    pub style: OverlayStyle,
    attached: bool,
}

impl OverlayElement {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `false` for stand-in elements created for ids the document lacks.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// An element that belongs to no document. Writes to it are harmless.
    #[must_use]
    pub fn detached(id: &str) -> SharedElement {
        Arc::new(RwLock::new(Self {
            id: id.to_string(),
            style: OverlayStyle::default(),
            attached: false,
        }))
    }
}

/// Elements addressable by id.
#[derive(Debug, Default)]
pub struct Document {
    elements: FxHashMap<String, SharedElement>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an element, replacing any element with the same id.
    pub fn insert(&mut self, id: &str, style: OverlayStyle) -> SharedElement {
        let element = Arc::new(RwLock::new(OverlayElement {
            id: id.to_string(),
            style,
            attached: true,
        }));
        self.elements.insert(id.to_string(), Arc::clone(&element));
        element
    }

    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<SharedElement> {
        self.elements.get(id).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_percent_and_px() {
        assert_eq!("25%".parse::<CssLength>().unwrap(), CssLength::Percent(25.0));
        assert_eq!("12px".parse::<CssLength>().unwrap(), CssLength::Px(12.0));
        assert_eq!("7".parse::<CssLength>().unwrap(), CssLength::Px(7.0));
        assert!("wide".parse::<CssLength>().is_err());
    }

    #[test]
    fn displays_with_unit() {
        assert_eq!(CssLength::Percent(65.0).to_string(), "65%");
        assert_eq!(CssLength::Px(3.5).to_string(), "3.5px");
    }
}
