//! Showcase Setup Tests
//!
//! Tests for:
//! - ShowcaseSettings: partial JSON with defaults, files, malformed input
//! - Showcase::setup: wiring with renamed elements and textures
//! - Setup failure when the bottle group is missing

use std::path::PathBuf;

use bottlescroll::Showcase;
use bottlescroll::config::{DEFAULT_TWEEN_DURATION, ShowcaseSettings};
use bottlescroll::errors::ShowcaseError;
use bottlescroll::overlay::{CssLength, Document, OverlayStyle};
use bottlescroll::scene::{Scene, SharedScene};

fn temp_root() -> PathBuf {
    std::env::temp_dir().join(format!("bottlescroll-setup-{}", uuid::Uuid::new_v4()))
}

fn bottle_scene(group: &str) -> SharedScene {
    let mut scene = Scene::new();
    let model = scene.build_node("Model").build();
    scene.build_node(group).with_parent(model).build();
    scene.into_shared()
}

fn page(background: &str) -> Document {
    let mut document = Document::new();
    document.insert(background, OverlayStyle::default());
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
    document
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn partial_json_keeps_defaults() {
    let settings = ShowcaseSettings::from_json_str(r#"{ "asset_root": "x" }"#).unwrap();

    assert_eq!(settings.asset_root, PathBuf::from("x"));
    assert_eq!(settings.bottle_group, "BottleGroup");
    assert_eq!(settings.label_texture, "FalloutBoy");
    assert_eq!(settings.background_element, "bg_container");
    assert_eq!(settings.textures, ["FalloutBoy", "Classic", "Quantum", "Sunset"]);
    assert!((settings.default_duration - DEFAULT_TWEEN_DURATION).abs() < f32::EPSILON);
    assert!((settings.default_duration - 0.5).abs() < f32::EPSILON);
}

#[test]
fn malformed_json_is_rejected() {
    let err = ShowcaseSettings::from_json_str("{ asset_root: ").unwrap_err();
    assert!(matches!(err, ShowcaseError::JsonError(_)));

    let err = ShowcaseSettings::from_json_str(r#"{ "default_duration": "slow" }"#).unwrap_err();
    assert!(matches!(err, ShowcaseError::JsonError(_)));
}

#[test]
fn settings_round_trip_through_file() {
    let root = temp_root();
    std::fs::create_dir_all(&root).unwrap();
    let path = root.join("settings.json");

    let settings = ShowcaseSettings {
        bottle_group: "Flask".to_string(),
        textures: vec!["Classic".to_string()],
        ..ShowcaseSettings::default()
    };
    std::fs::write(&path, settings.to_json_pretty().unwrap()).unwrap();

    let loaded = ShowcaseSettings::from_file(&path).unwrap();
    assert_eq!(loaded, settings);

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn missing_settings_file_is_io_error() {
    let err = ShowcaseSettings::from_file(temp_root().join("absent.json")).unwrap_err();
    assert!(matches!(err, ShowcaseError::IoError(_)));
}

// ============================================================================
// Setup
// ============================================================================

#[test]
fn setup_honors_renamed_elements() {
    let _ = env_logger::builder().is_test(true).try_init();
    let settings = ShowcaseSettings {
        asset_root: temp_root(),
        background_element: "page_bg".to_string(),
        label_texture: "Classic".to_string(),
        ..ShowcaseSettings::default()
    };
    let scene = bottle_scene("BottleGroup");
    let document = page("page_bg");

    let mut showcase = Showcase::setup(settings, &scene, &document).unwrap();
    assert_eq!(showcase.player.timeline().len(), 25);
    assert_eq!(showcase.textures.len(), 4);
    assert_eq!(showcase.materials.label.read().map().unwrap().name, "Classic");

    assert!(showcase.scroll_to(1.0) > 0);
    let background = document.get_element_by_id("page_bg").unwrap();
    assert_eq!(background.read().style.background.as_deref(), Some("#F5C771"));

    showcase.wait_for_textures();
    assert!(!showcase.textures.all_ready());
}

#[test]
fn setup_without_bottle_group_fails() {
    let scene = bottle_scene("SomethingElse");
    let document = page("bg_container");
    let settings = ShowcaseSettings {
        asset_root: temp_root(),
        ..ShowcaseSettings::default()
    };

    let result = Showcase::setup(settings, &scene, &document);
    assert!(matches!(
        result,
        Err(ShowcaseError::ObjectNotFound(ref name)) if name == "BottleGroup"
    ));
}
