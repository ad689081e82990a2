use std::fmt;
use std::sync::Arc;

use glam::Vec3;
use serde::Serialize;

use crate::animation::state::SharedColorState;
use crate::animation::values::{Interpolatable, interpolate_color_value};
use crate::overlay::{CssLength, OverlayStyle, SharedElement};
use crate::resources::color::{Color, ColorValue};
use crate::scene::{NodeHandle, SharedScene};

/// Callback run every time a keyframe is rendered.
pub type OnUpdate = Arc<dyn Fn() + Send + Sync>;

/// Independently timed track a keyframe belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Lane {
    Position,
    Rotation,
    Color,
    Label,
    Card,
    Background,
}

/// Which transform vector a keyframe drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransformChannel {
    Position,
    /// Euler angles in radians.
    Rotation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AxisProps {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub z: Option<f32>,
}

impl AxisProps {
    #[must_use]
    pub fn x(value: f32) -> Self {
        Self { x: Some(value), ..Self::default() }
    }

    #[must_use]
    pub fn y(value: f32) -> Self {
        Self { y: Some(value), ..Self::default() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColorProps {
    pub cristal: Option<ColorValue>,
    pub soda: Option<ColorValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OverlayProps {
    pub background: Option<ColorValue>,
    pub opacity: Option<f32>,
    pub left: Option<CssLength>,
}

/// What a keyframe animates, with the fixed property set of that kind.
#[derive(Debug, Clone)]
pub enum KeyframeTarget {
    Transform {
        scene: SharedScene,
        node: NodeHandle,
        channel: TransformChannel,
        props: AxisProps,
    },
    ColorState {
        state: SharedColorState,
        props: ColorProps,
    },
    Overlay {
        element: SharedElement,
        props: OverlayProps,
    },
}

/// An authored property value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(f32),
    Color(ColorValue),
    Length(CssLength),
}

impl PropertyValue {
    #[must_use]
    pub fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_color(&self) -> Option<&str> {
        match self {
            Self::Color(c) => Some(c),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_length(&self) -> Option<CssLength> {
        match self {
            Self::Length(l) => Some(*l),
            _ => None,
        }
    }
}

/// Target values captured when a tween first renders.
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    Axes(Vec3),
    Colors { cristal: ColorValue, soda: ColorValue },
    Overlay(OverlayStyle),
    /// The target node no longer exists.
    Missing,
}

/// One entry of a [`Timeline`](crate::animation::Timeline).
#[derive(Clone)]
pub struct Keyframe {
    pub target: KeyframeTarget,
    /// Scroll-progress coordinate at which the tween starts.
    pub point_time: f32,
    /// Tween length; the player's default applies when `None`.
    pub duration: Option<f32>,
    pub lane: Lane,
    on_update: Option<OnUpdate>,
}

impl fmt::Debug for Keyframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keyframe")
            .field("target", &self.target_label())
            .field("point_time", &self.point_time)
            .field("duration", &self.duration)
            .field("lane", &self.lane)
            .field("on_update", &self.on_update.is_some())
            .finish()
    }
}

impl Keyframe {
    #[must_use]
    pub fn new(target: KeyframeTarget, point_time: f32, lane: Lane) -> Self {
        Self {
            target,
            point_time,
            duration: None,
            lane,
            on_update: None,
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn with_on_update<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_update = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn on_update(&self) -> Option<&OnUpdate> {
        self.on_update.as_ref()
    }

    pub fn invoke_on_update(&self) {
        if let Some(f) = &self.on_update {
            f();
        }
    }

    #[must_use]
    pub fn effective_duration(&self, default: f32) -> f32 {
        self.duration.unwrap_or(default).max(0.0)
    }

    /// Authored value of a property, by its animation name
    /// (`x`, `y`, `z`, `cristal`, `soda`, `background`, `opacity`, `left`).
    #[must_use]
    pub fn property(&self, name: &str) -> Option<PropertyValue> {
        self.properties()
            .into_iter()
            .find_map(|(key, value)| (key == name).then_some(value))
    }

    /// All authored properties in declaration order.
    #[must_use]
    pub fn properties(&self) -> Vec<(&'static str, PropertyValue)> {
        let mut out = Vec::new();
        match &self.target {
            KeyframeTarget::Transform { props, .. } => {
                for (key, value) in [("x", props.x), ("y", props.y), ("z", props.z)] {
                    if let Some(v) = value {
                        out.push((key, PropertyValue::Number(v)));
                    }
                }
            }
            KeyframeTarget::ColorState { props, .. } => {
                for (key, value) in [("cristal", &props.cristal), ("soda", &props.soda)] {
                    if let Some(v) = value {
                        out.push((key, PropertyValue::Color(v.clone())));
                    }
                }
            }
            KeyframeTarget::Overlay { props, .. } => {
                if let Some(v) = &props.background {
                    out.push(("background", PropertyValue::Color(v.clone())));
                }
                if let Some(v) = props.opacity {
                    out.push(("opacity", PropertyValue::Number(v)));
                }
                if let Some(v) = props.left {
                    out.push(("left", PropertyValue::Length(v)));
                }
            }
        }
        out
    }

    /// Human-readable target, e.g. `BottleGroup.position`, `colors`,
    /// `#Classic_Card`.
    #[must_use]
    pub fn target_label(&self) -> String {
        match &self.target {
            KeyframeTarget::Transform { scene, node, channel, .. } => {
                let name = scene
                    .read()
                    .get_node(*node)
                    .map_or_else(|| "<removed>".to_string(), |n| n.name.clone());
                match channel {
                    TransformChannel::Position => format!("{name}.position"),
                    TransformChannel::Rotation => format!("{name}.rotation"),
                }
            }
            KeyframeTarget::ColorState { .. } => "colors".to_string(),
            KeyframeTarget::Overlay { element, .. } => format!("#{}", element.read().id()),
        }
    }

    /// Reads the target's current values.
    #[must_use]
    pub fn capture(&self) -> Snapshot {
        match &self.target {
            KeyframeTarget::Transform { scene, node, channel, .. } => {
                let scene = scene.read();
                match scene.get_node(*node) {
                    Some(n) => Snapshot::Axes(match channel {
                        TransformChannel::Position => n.transform.position,
                        TransformChannel::Rotation => n.transform.rotation,
                    }),
                    None => Snapshot::Missing,
                }
            }
            KeyframeTarget::ColorState { state, .. } => {
                let state = state.read();
                Snapshot::Colors {
                    cristal: state.cristal.clone(),
                    soda: state.soda.clone(),
                }
            }
            KeyframeTarget::Overlay { element, .. } => Snapshot::Overlay(element.read().style.clone()),
        }
    }

    /// Writes the values at `progress` (0..=1) between `from` and the
    /// authored values. Does not run the update callback.
    pub fn render(&self, from: &Snapshot, progress: f32) {
        let t = progress.clamp(0.0, 1.0);
        match (&self.target, from) {
            (KeyframeTarget::Transform { scene, node, channel, props }, Snapshot::Axes(start)) => {
                let mut scene = scene.write();
                let Some(n) = scene.get_node_mut(*node) else {
                    return;
                };
                let v = match channel {
                    TransformChannel::Position => &mut n.transform.position,
                    TransformChannel::Rotation => &mut n.transform.rotation,
                };
                if let Some(x) = props.x {
                    v.x = f32::interpolate_linear(&start.x, &x, t);
                }
                if let Some(y) = props.y {
                    v.y = f32::interpolate_linear(&start.y, &y, t);
                }
                if let Some(z) = props.z {
                    v.z = f32::interpolate_linear(&start.z, &z, t);
                }
            }
            (KeyframeTarget::ColorState { state, props }, Snapshot::Colors { cristal, soda }) => {
                let mut state = state.write();
                if let Some(to) = &props.cristal {
                    state.cristal = interpolate_color_value(cristal, to, t);
                }
                if let Some(to) = &props.soda {
                    state.soda = interpolate_color_value(soda, to, t);
                }
            }
            (KeyframeTarget::Overlay { element, props }, Snapshot::Overlay(start)) => {
                let mut element = element.write();
                let style = &mut element.style;
                if let Some(to) = &props.background {
                    style.background = if t <= 0.0 {
                        start.background.clone()
                    } else {
                        let from = start
                            .background
                            .clone()
                            .unwrap_or_else(|| Color::TRANSPARENT.to_css_rgba());
                        Some(interpolate_color_value(&from, to, t))
                    };
                }
                if let Some(to) = props.opacity {
                    style.opacity = f32::interpolate_linear(&start.opacity, &to, t);
                }
                if let Some(to) = props.left {
                    style.left = CssLength::interpolate_linear(&start.left, &to, t);
                }
            }
            _ => {}
        }
    }

    /// Jumps straight to the authored values and runs the update callback,
    /// as an engine does when scroll crosses the whole tween at once.
    pub fn complete(&self) {
        let from = self.capture();
        self.render(&from, 1.0);
        self.invoke_on_update();
    }

    #[must_use]
    pub fn summary(&self) -> KeyframeSummary {
        KeyframeSummary {
            target: self.target_label(),
            lane: self.lane,
            point_time: self.point_time,
            duration: self.duration,
            properties: self
                .properties()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            has_on_update: self.on_update.is_some(),
        }
    }
}

/// Serializable description of a keyframe, for inspection and debugging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyframeSummary {
    pub target: String,
    pub lane: Lane,
    pub point_time: f32,
    pub duration: Option<f32>,
    pub properties: Vec<(String, PropertyValue)>,
    pub has_on_update: bool,
}
