use std::f32::consts::TAU;
use std::sync::Arc;

use crate::animation::keyframe::{
    AxisProps, ColorProps, Keyframe, KeyframeTarget, Lane, OverlayProps, TransformChannel,
};
use crate::animation::state::SharedColorState;
use crate::animation::timeline::Timeline;
use crate::assets::{MaterialSet, TextureBank};
use crate::config::ShowcaseSettings;
use crate::errors::Result;
use crate::overlay::{CssLength, Document, OverlayElement, SharedElement};
use crate::resources::color::{Color, convert_rgba_to_rgb};
use crate::resources::material::{MaterialTrait, SharedMaterial};
use crate::scene::{NodeHandle, SharedScene};

/// A card sliding in or out of view.
struct CardMove {
    element: &'static str,
    opacity: f32,
    left_percent: f32,
    point_time: f32,
    duration: Option<f32>,
}

/// One showcased product and the page section it occupies.
struct Variant {
    name: &'static str,
    /// Bottle position and rotation start together.
    point_time: f32,
    position_x: f32,
    rotation_y: f32,
    color_time: f32,
    cristal: &'static str,
    soda: &'static str,
    label: &'static str,
    label_time: f32,
    card_in: Option<CardMove>,
    card_out: Option<CardMove>,
    background: &'static str,
    background_time: f32,
}

// Hand-authored choreography. Several entries share a start time (both
// card moves at 4.5 and 6.5, color and background at 6.1).
static VARIANTS: [Variant; 4] = [
    Variant {
        name: "Init",
        point_time: 0.0,
        position_x: 0.0,
        rotation_y: 0.0,
        color_time: 0.0,
        cristal: "#8c8c8c",
        soda: "#000",
        label: "FalloutBoy",
        label_time: 0.5,
        card_in: None,
        card_out: None,
        background: "#000000",
        background_time: 0.1,
    },
    Variant {
        name: "Nuka Cola",
        point_time: 2.0,
        position_x: 1.0,
        rotation_y: TAU,
        color_time: 2.0,
        cristal: "#555555",
        soda: "#000000",
        label: "Classic",
        label_time: 3.0,
        card_in: Some(CardMove {
            element: "Classic_Card",
            opacity: 1.0,
            left_percent: 25.0,
            point_time: 2.5,
            duration: None,
        }),
        card_out: None,
        background: "#F37070",
        background_time: 2.1,
    },
    Variant {
        name: "Quantum Cola",
        point_time: 4.0,
        position_x: -1.0,
        rotation_y: -TAU,
        color_time: 4.0,
        cristal: "#108587",
        soda: "#D0FFFF",
        label: "Quantum",
        label_time: 5.0,
        card_in: Some(CardMove {
            element: "Quantum_Card",
            opacity: 1.0,
            left_percent: 65.0,
            point_time: 4.5,
            duration: None,
        }),
        card_out: Some(CardMove {
            element: "Classic_Card",
            opacity: 0.0,
            left_percent: 50.0,
            point_time: 4.5,
            duration: Some(0.5),
        }),
        background: "#71C4F4",
        background_time: 4.1,
    },
    Variant {
        name: "Sunset Sarsaparilla",
        point_time: 6.0,
        position_x: 1.0,
        rotation_y: TAU,
        color_time: 6.1,
        cristal: "#7E3810",
        soda: "#602A0C",
        label: "Sunset",
        label_time: 7.0,
        card_in: Some(CardMove {
            element: "Sunset_Card",
            opacity: 1.0,
            left_percent: 25.0,
            point_time: 6.5,
            duration: None,
        }),
        card_out: Some(CardMove {
            element: "Quantum_Card",
            opacity: 0.0,
            left_percent: 50.0,
            point_time: 6.5,
            duration: Some(0.5),
        }),
        background: "#F5C771",
        background_time: 6.1,
    },
];

/// Names of the showcased variants, in scroll order.
pub fn variant_names() -> impl Iterator<Item = &'static str> {
    VARIANTS.iter().map(|v| v.name)
}

/// Copies the color state onto the shell and fill materials.
///
/// Alpha is stripped first (material colors are opaque). A color that does
/// not parse leaves that material's previous color in place; both dirty
/// flags are set either way.
pub fn update_materials<S, F>(
    shell: &SharedMaterial<S>,
    fill: &SharedMaterial<F>,
    colors: &SharedColorState,
) where
    S: MaterialTrait,
    F: MaterialTrait,
{
    let (cristal, soda) = {
        let colors = colors.read();
        (colors.cristal.clone(), colors.soda.clone())
    };
    apply_color(&mut *shell.write(), &cristal);
    apply_color(&mut *fill.write(), &soda);
}

fn apply_color(material: &mut dyn MaterialTrait, value: &str) {
    match Color::parse(&convert_rgba_to_rgb(value)) {
        Ok(color) => material.set_base_color(color.to_vec4()),
        Err(err) => log::warn!(
            "Keeping previous {} color: {err}",
            material.material_type()
        ),
    }
    material.set_needs_update();
}

/// Assembles the showcase timeline from the live scene, overlay document
/// and shared resources.
pub struct TimelineBuilder<'a> {
    scene: &'a SharedScene,
    document: &'a Document,
    colors: &'a SharedColorState,
    materials: &'a MaterialSet,
    textures: &'a TextureBank,
    bottle_group: String,
    background_element: String,
}

impl<'a> TimelineBuilder<'a> {
    pub fn new(
        scene: &'a SharedScene,
        document: &'a Document,
        colors: &'a SharedColorState,
        materials: &'a MaterialSet,
        textures: &'a TextureBank,
    ) -> Self {
        let defaults = ShowcaseSettings::default();
        Self {
            scene,
            document,
            colors,
            materials,
            textures,
            bottle_group: defaults.bottle_group,
            background_element: defaults.background_element,
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: &ShowcaseSettings) -> Self {
        self.bottle_group.clone_from(&settings.bottle_group);
        self.background_element.clone_from(&settings.background_element);
        self
    }

    /// Fails with [`ShowcaseError::ObjectNotFound`] when the scene has no
    /// bottle group.
    ///
    /// [`ShowcaseError::ObjectNotFound`]: crate::errors::ShowcaseError::ObjectNotFound
    pub fn build(self) -> Result<Timeline> {
        let bottle = self.scene.read().find_by_name(&self.bottle_group)?;
        let background = self.element(&self.background_element);

        let mut timeline = Timeline::default();
        for variant in &VARIANTS {
            let keyframes = self.variant_keyframes(variant, bottle, &background);
            timeline.push_section(variant.name, keyframes);
        }

        log::debug!(
            "Showcase timeline built: {} keyframes across {} variants",
            timeline.len(),
            timeline.sections().len()
        );
        Ok(timeline)
    }

    fn variant_keyframes(
        &self,
        variant: &Variant,
        bottle: NodeHandle,
        background: &SharedElement,
    ) -> Vec<Keyframe> {
        let mut keyframes = Vec::with_capacity(7);

        keyframes.push(Keyframe::new(
            KeyframeTarget::Transform {
                scene: Arc::clone(self.scene),
                node: bottle,
                channel: TransformChannel::Position,
                props: AxisProps::x(variant.position_x),
            },
            variant.point_time,
            Lane::Position,
        ));

        keyframes.push(Keyframe::new(
            KeyframeTarget::Transform {
                scene: Arc::clone(self.scene),
                node: bottle,
                channel: TransformChannel::Rotation,
                props: AxisProps::y(variant.rotation_y),
            },
            variant.point_time,
            Lane::Rotation,
        ));

        keyframes.push(self.color_keyframe(variant));
        keyframes.push(self.label_keyframe(variant));

        for card in [&variant.card_in, &variant.card_out].into_iter().flatten() {
            keyframes.push(self.card_keyframe(card));
        }

        keyframes.push(Keyframe::new(
            KeyframeTarget::Overlay {
                element: Arc::clone(background),
                props: OverlayProps {
                    background: Some(variant.background.to_string()),
                    ..OverlayProps::default()
                },
            },
            variant.background_time,
            Lane::Background,
        ));

        keyframes
    }

    fn color_keyframe(&self, variant: &Variant) -> Keyframe {
        let shell = Arc::clone(&self.materials.shell);
        let fill = Arc::clone(&self.materials.fill);
        let colors = Arc::clone(self.colors);

        Keyframe::new(
            KeyframeTarget::ColorState {
                state: Arc::clone(self.colors),
                props: ColorProps {
                    cristal: Some(variant.cristal.to_string()),
                    soda: Some(variant.soda.to_string()),
                },
            },
            variant.color_time,
            Lane::Color,
        )
        .with_on_update(move || update_materials(&shell, &fill, &colors))
    }

    fn label_keyframe(&self, variant: &Variant) -> Keyframe {
        let label = Arc::clone(&self.materials.label);
        let texture = self.textures.get(variant.label).cloned();
        if texture.is_none() {
            log::warn!(
                "Label texture `{}` is not in the bank; `{}` will clear the label map",
                variant.label,
                variant.name
            );
        }

        Keyframe::new(
            KeyframeTarget::ColorState {
                state: Arc::clone(self.colors),
                props: ColorProps::default(),
            },
            variant.label_time,
            Lane::Label,
        )
        .with_on_update(move || {
            let mut label = label.write();
            label.set_map(texture.clone());
            label.set_needs_update();
        })
    }

    fn card_keyframe(&self, card: &CardMove) -> Keyframe {
        let keyframe = Keyframe::new(
            KeyframeTarget::Overlay {
                element: self.element(card.element),
                props: OverlayProps {
                    opacity: Some(card.opacity),
                    left: Some(CssLength::Percent(card.left_percent)),
                    ..OverlayProps::default()
                },
            },
            card.point_time,
            Lane::Card,
        );
        match card.duration {
            Some(duration) => keyframe.with_duration(duration),
            None => keyframe,
        }
    }

    fn element(&self, id: &str) -> SharedElement {
        self.document.get_element_by_id(id).unwrap_or_else(|| {
            log::warn!("Overlay element `{id}` is missing; its keyframes animate a detached element");
            OverlayElement::detached(id)
        })
    }
}

/// Builds the showcase timeline with default settings.
///
/// Fails with [`ShowcaseError::ObjectNotFound`] when the scene has no
/// `"BottleGroup"`.
///
/// [`ShowcaseError::ObjectNotFound`]: crate::errors::ShowcaseError::ObjectNotFound
pub fn load_animations(
    scene: &SharedScene,
    document: &Document,
    colors: &SharedColorState,
    materials: &MaterialSet,
    textures: &TextureBank,
) -> Result<Timeline> {
    TimelineBuilder::new(scene, document, colors, materials, textures).build()
}
