//! Scroll Showcase Example
//!
//! Builds a bottle scene and its overlay cards, then sweeps the scroll
//! position from top to bottom and back, logging what a renderer would
//! draw at each step.
//!
//! Usage:
//! - `cargo run --example scroll_showcase [settings.json]`
//! - `RUST_LOG=debug` shows texture loads and timeline construction

use bottlescroll::animation::Lane;
use bottlescroll::overlay::{CssLength, Document, OverlayStyle};
use bottlescroll::resources::material::MaterialTrait;
use bottlescroll::scene::Scene;
use bottlescroll::{Showcase, ShowcaseSettings};

const STEPS: u16 = 16;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match std::env::args().nth(1) {
        Some(path) => ShowcaseSettings::from_file(path)?,
        None => ShowcaseSettings::default(),
    };

    // Stand-in for the loaded bottle model
    let mut scene = Scene::new();
    let model = scene.build_node("Model").build();
    let group = scene.build_node(&settings.bottle_group).with_parent(model).build();
    for part in ["Shell", "Fill", "Label"] {
        scene.build_node(part).with_parent(group).build();
    }
    let scene = scene.into_shared();

    let mut document = Document::new();
    document.insert(&settings.background_element, OverlayStyle::default());
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

    let mut showcase = Showcase::setup(settings, &scene, &document)?;
    showcase.wait_for_textures();
    if !showcase.textures.all_ready() {
        log::warn!(
            "Some label textures are missing under {}; labels will render untextured",
            showcase.settings.asset_root.display()
        );
    }

    let forward = (0..=STEPS).map(|i| f32::from(i) / f32::from(STEPS));
    let backward = (0..STEPS).rev().map(|i| f32::from(i) / f32::from(STEPS));

    for progress in forward.chain(backward) {
        let rendered = showcase.scroll_to(progress);
        if rendered == 0 {
            continue;
        }

        let colors = showcase.colors.read().clone();
        let label = showcase
            .materials
            .label
            .read()
            .map()
            .map_or_else(|| "<none>".to_string(), |t| t.name.clone());
        let (position, rotation) = {
            let scene = scene.read();
            let node = scene.get_node(group).expect("bottle group exists");
            (node.transform.position, node.transform.rotation)
        };
        let background = document
            .get_element_by_id(&showcase.settings.background_element)
            .and_then(|e| e.read().style.background.clone())
            .unwrap_or_default();

        log::info!(
            "scroll {progress:>5.3} | x {:>5.2} rot {:>6.2} | cristal {:<22} soda {:<22} | label {label} | bg {background}",
            position.x,
            rotation.y,
            colors.cristal,
            colors.soda,
        );

        // A renderer would upload the materials here and clear the flags.
        showcase.materials.shell.write().take_needs_update();
        showcase.materials.fill.write().take_needs_update();
        showcase.materials.label.write().take_needs_update();
    }

    let timeline = showcase.player.timeline();
    println!("{} keyframes, {} card moves", timeline.len(), timeline.lane(Lane::Card).count());
    println!("{}", timeline.to_json()?);

    Ok(())
}
