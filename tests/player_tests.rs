//! Scroll Player Tests
//!
//! Tests for:
//! - Tween progress: lazy start capture, chaining, zero durations
//! - Render ordering forward and backward
//! - Change detection and unreached tweens
//! - The full showcase timeline driven end to end

use std::f32::consts::{PI, TAU};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bottlescroll::MaterialTrait;
use bottlescroll::animation::{
    AxisProps, ColorState, Keyframe, KeyframeTarget, Lane, OverlayProps, ScrollTimeline,
    SharedColorState, Timeline, TransformChannel, load_animations,
};
use bottlescroll::assets::{MaterialSet, TextureBank, TextureLoader, generate_init_materials, load_textures};
use bottlescroll::overlay::{CssLength, Document, OverlayStyle, SharedElement};
use bottlescroll::scene::{NodeHandle, Scene, SharedScene};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn single_node() -> (SharedScene, NodeHandle) {
    let mut scene = Scene::new();
    let node = scene.build_node("BottleGroup").build();
    (scene.into_shared(), node)
}

fn move_x(scene: &SharedScene, node: NodeHandle, x: f32, at: f32) -> Keyframe {
    Keyframe::new(
        KeyframeTarget::Transform {
            scene: Arc::clone(scene),
            node,
            channel: TransformChannel::Position,
            props: AxisProps::x(x),
        },
        at,
        Lane::Position,
    )
}

fn x_of(scene: &SharedScene, node: NodeHandle) -> f32 {
    scene.read().get_node(node).unwrap().transform.position.x
}

// ============================================================================
// Tween Mechanics
// ============================================================================

#[test]
fn tween_interpolates_linearly() {
    let (scene, node) = single_node();
    let timeline = Timeline::new(vec![move_x(&scene, node, 10.0, 1.0).with_duration(2.0)]);
    let mut player = ScrollTimeline::new(timeline, 0.5);

    player.seek(2.0);
    assert!(approx(x_of(&scene, node), 5.0));
    player.seek(5.0);
    assert!(approx(x_of(&scene, node), 10.0));
}

#[test]
fn consecutive_tweens_chain_from_previous_end() {
    let (scene, node) = single_node();
    let timeline = Timeline::new(vec![
        move_x(&scene, node, 10.0, 0.0).with_duration(1.0),
        move_x(&scene, node, 20.0, 2.0).with_duration(1.0),
    ]);
    let mut player = ScrollTimeline::new(timeline, 0.5);

    // Jump past the first tween straight into the second.
    player.seek(2.5);
    assert!(approx(x_of(&scene, node), 15.0));
}

#[test]
fn rewinding_restores_captured_start() {
    let (scene, node) = single_node();
    scene.write().get_node_mut(node).unwrap().transform.position.x = -3.0;
    let timeline = Timeline::new(vec![
        move_x(&scene, node, 10.0, 0.0).with_duration(1.0),
        move_x(&scene, node, 20.0, 2.0).with_duration(1.0),
    ]);
    let mut player = ScrollTimeline::new(timeline, 0.5);

    player.seek(3.0);
    assert!(approx(x_of(&scene, node), 20.0));

    player.seek(1.5);
    assert!(approx(x_of(&scene, node), 10.0));

    player.seek(0.0);
    assert!(approx(x_of(&scene, node), -3.0));
}

#[test]
fn zero_duration_jumps_at_start() {
    let (scene, node) = single_node();
    let timeline = Timeline::new(vec![move_x(&scene, node, 4.0, 1.0).with_duration(0.0)]);
    let mut player = ScrollTimeline::new(timeline, 0.5);

    player.seek(0.99);
    assert!(approx(x_of(&scene, node), 0.0));
    player.seek(1.0);
    assert!(approx(x_of(&scene, node), 4.0));
}

#[test]
fn default_duration_applies() {
    let (scene, node) = single_node();
    let timeline = Timeline::new(vec![move_x(&scene, node, 1.0, 0.0)]);
    let mut player = ScrollTimeline::new(timeline, 0.5);

    assert!(approx(player.duration(), 0.5));
    player.seek(0.25);
    assert!(approx(x_of(&scene, node), 0.5));
}

// ============================================================================
// Callbacks & Change Detection
// ============================================================================

fn counting(scene: &SharedScene, node: NodeHandle, at: f32, hits: &Arc<AtomicUsize>) -> Keyframe {
    let hits = Arc::clone(hits);
    move_x(scene, node, 1.0, at).with_on_update(move || {
        hits.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn unreached_tweens_never_render() {
    let (scene, node) = single_node();
    let hits = Arc::new(AtomicUsize::new(0));
    let timeline = Timeline::new(vec![counting(&scene, node, 5.0, &hits)]);
    let mut player = ScrollTimeline::new(timeline, 0.5);

    assert_eq!(player.seek(0.0), 0);
    assert_eq!(player.seek(3.0), 0);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn callback_runs_once_per_progress_change() {
    let (scene, node) = single_node();
    let hits = Arc::new(AtomicUsize::new(0));
    let timeline = Timeline::new(vec![counting(&scene, node, 0.0, &hits)]);
    let mut player = ScrollTimeline::new(timeline, 0.5);

    player.seek(0.1);
    player.seek(0.2);
    assert_eq!(hits.load(Ordering::SeqCst), 2);

    // Beyond the end progress stays at 1.
    player.seek(1.0);
    player.seek(2.0);
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[test]
fn backward_seek_renders_later_tweens_first() {
    let (scene, node) = single_node();
    let order = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let tagged = |tag: u8, at: f32| {
        let order = Arc::clone(&order);
        move_x(&scene, node, f32::from(tag), at).with_on_update(move || order.lock().push(tag))
    };
    let timeline = Timeline::new(vec![tagged(1, 0.0), tagged(2, 1.0), tagged(3, 2.0)]);
    let mut player = ScrollTimeline::new(timeline, 0.5);

    player.seek(3.0);
    assert_eq!(*order.lock(), [1, 2, 3]);

    order.lock().clear();
    player.seek(0.0);
    assert_eq!(*order.lock(), [3, 2, 1]);
}

#[test]
fn seek_progress_clamps() {
    let (scene, node) = single_node();
    let timeline = Timeline::new(vec![move_x(&scene, node, 1.0, 1.0).with_duration(1.0)]);
    let mut player = ScrollTimeline::new(timeline, 0.5);

    player.seek_progress(3.0);
    assert_eq!(player.time(), Some(2.0));
    player.seek_progress(-1.0);
    assert_eq!(player.time(), Some(0.0));
}

#[test]
fn reset_forgets_playhead() {
    let (scene, node) = single_node();
    let timeline = Timeline::new(vec![move_x(&scene, node, 1.0, 0.0)]);
    let mut player = ScrollTimeline::new(timeline, 0.5);

    player.seek(1.0);
    player.reset();
    assert_eq!(player.time(), None);
    // Values stay where they were.
    assert!(approx(x_of(&scene, node), 1.0));
}

// ============================================================================
// Showcase Timeline
// ============================================================================

struct Showroom {
    scene: SharedScene,
    bottle: NodeHandle,
    document: Document,
    colors: SharedColorState,
    materials: MaterialSet,
    textures: TextureBank,
}

impl Showroom {
    fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let (scene, bottle) = single_node();
        let mut document = Document::new();
        document.insert("bg_container", OverlayStyle::default());
        for card in ["Classic_Card", "Quantum_Card", "Sunset_Card"] {
            document.insert(
                card,
                OverlayStyle {
                    opacity: 0.0,
                    left: CssLength::Percent(50.0),
                    ..OverlayStyle::default()
                },
            );
        }

        let root = std::env::temp_dir().join(format!("bottlescroll-play-{}", uuid::Uuid::new_v4()));
        let loader = TextureLoader::new(root);
        let materials = generate_init_materials(&loader, None);
        let textures = load_textures(&loader, ["FalloutBoy", "Classic", "Quantum", "Sunset"]);

        Self {
            scene,
            bottle,
            document,
            colors: ColorState::default().into_shared(),
            materials,
            textures,
        }
    }

    fn player(&self) -> ScrollTimeline {
        let timeline = load_animations(
            &self.scene,
            &self.document,
            &self.colors,
            &self.materials,
            &self.textures,
        )
        .unwrap();
        ScrollTimeline::new(timeline, 0.5)
    }

    fn element(&self, id: &str) -> SharedElement {
        self.document.get_element_by_id(id).unwrap()
    }

    fn rotation_y(&self) -> f32 {
        self.scene.read().get_node(self.bottle).unwrap().transform.rotation.y
    }

    fn label_is(&self, name: &str) -> bool {
        let label = self.materials.label.read();
        Arc::ptr_eq(label.map().unwrap(), self.textures.get(name).unwrap())
    }
}

#[test]
fn scrolling_to_the_end_shows_last_variant() {
    let room = Showroom::new();
    let mut player = room.player();

    player.seek_progress(1.0);

    assert!(approx(room.scene.read().get_node(room.bottle).unwrap().transform.position.x, 1.0));
    assert!(approx(room.rotation_y(), TAU));
    assert_eq!(*room.colors.read(), ColorState::new("#7E3810", "#602A0C"));
    assert!(room.label_is("Sunset"));

    let sunset = room.element("Sunset_Card").read().style.clone();
    assert!(approx(sunset.opacity, 1.0));
    assert_eq!(sunset.left, CssLength::Percent(25.0));

    let quantum = room.element("Quantum_Card").read().style.clone();
    assert!(approx(quantum.opacity, 0.0));
    assert_eq!(quantum.left, CssLength::Percent(50.0));

    assert_eq!(
        room.element("bg_container").read().style.background.as_deref(),
        Some("#F5C771")
    );
}

#[test]
fn mid_spin_is_half_a_turn() {
    let room = Showroom::new();
    let mut player = room.player();

    player.seek(2.25);
    assert!(approx(room.rotation_y(), PI));
}

#[test]
fn color_midway_is_rgba_and_reaches_materials() {
    let room = Showroom::new();
    let mut player = room.player();

    player.seek(2.25);
    let colors = room.colors.read().clone();
    assert!(colors.cristal.starts_with("rgba("));
    assert!(room.materials.shell.read().needs_update());
}

#[test]
fn scrolling_back_to_top_restores_initial_look() {
    let room = Showroom::new();
    let mut player = room.player();

    player.seek_progress(1.0);
    player.seek(0.0);

    assert!(approx(room.rotation_y(), 0.0));
    assert_eq!(*room.colors.read(), ColorState::default());
    assert!(room.label_is("FalloutBoy"));
    for card in ["Classic_Card", "Quantum_Card", "Sunset_Card"] {
        let style = room.element(card).read().style.clone();
        assert!(approx(style.opacity, 0.0), "{card} should be hidden");
    }
    assert_eq!(room.element("bg_container").read().style.background, None);
}

#[test]
fn background_tween_from_unset_restores_unset() {
    let mut document = Document::new();
    let element = document.insert("bg", OverlayStyle::default());
    let keyframe = Keyframe::new(
        KeyframeTarget::Overlay {
            element: Arc::clone(&element),
            props: OverlayProps {
                background: Some("#F37070".to_string()),
                ..OverlayProps::default()
            },
        },
        1.0,
        Lane::Background,
    )
    .with_duration(1.0);
    let mut player = ScrollTimeline::new(Timeline::new(vec![keyframe]), 0.5);

    player.seek(1.5);
    assert_eq!(element.read().style.background.as_deref(), Some("rgba(122,56,56,0.5)"));

    player.seek(0.0);
    assert_eq!(element.read().style.background, None);
}

#[test]
fn showcase_duration_covers_last_tween() {
    let room = Showroom::new();
    let player = room.player();
    assert!(approx(player.duration(), 7.5));
    assert_eq!(player.timeline().len(), 25);
}
