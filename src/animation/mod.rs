pub mod builder;
pub mod keyframe;
pub mod player;
pub mod state;
pub mod timeline;
pub mod values;

pub use builder::{TimelineBuilder, load_animations, update_materials, variant_names};
pub use keyframe::{
    AxisProps, ColorProps, Keyframe, KeyframeSummary, KeyframeTarget, Lane, OnUpdate,
    OverlayProps, PropertyValue, Snapshot, TransformChannel,
};
pub use player::ScrollTimeline;
pub use state::{ColorState, SharedColorState};
pub use timeline::{Timeline, TimelineSection};
pub use values::{Interpolatable, interpolate_color_value};
