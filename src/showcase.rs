//! Showcase wiring
//!
//! [`Showcase::setup`] runs the initialization sequence a page performs
//! once the bottle model is in the scene: create the materials, request the
//! label textures, then build the scroll timeline over them.

use std::sync::Arc;

use crate::animation::{ColorState, ScrollTimeline, SharedColorState, TimelineBuilder};
use crate::assets::{
    MaterialSet, TextureBank, TextureLoader, generate_materials_with_label, load_textures,
};
use crate::config::ShowcaseSettings;
use crate::errors::Result;
use crate::overlay::Document;
use crate::scene::SharedScene;

/// Everything the scroll-driven showcase needs at runtime.
pub struct Showcase {
    pub settings: ShowcaseSettings,
    pub loader: Arc<TextureLoader>,
    pub materials: MaterialSet,
    pub textures: TextureBank,
    pub colors: SharedColorState,
    pub player: ScrollTimeline,
}

impl Showcase {
    /// Fails when the scene lacks the bottle group.
    pub fn setup(settings: ShowcaseSettings, scene: &SharedScene, document: &Document) -> Result<Self> {
        let loader = Arc::new(TextureLoader::new(&settings.asset_root));
        let colors = ColorState::default().into_shared();

        let materials = generate_materials_with_label(&loader, &settings.label_texture, None);
        let textures = load_textures(&loader, &settings.textures);

        let timeline = TimelineBuilder::new(scene, document, &colors, &materials, &textures)
            .with_settings(&settings)
            .build()?;
        let player = ScrollTimeline::new(timeline, settings.default_duration);

        log::info!(
            "Showcase ready: {} keyframes over {:.1} scroll units, assets from {}",
            player.timeline().len(),
            player.duration(),
            loader.root_path().display()
        );

        Ok(Self {
            settings,
            loader,
            materials,
            textures,
            colors,
            player,
        })
    }

    /// Applies a scroll position in `[0, 1]`.
    pub fn scroll_to(&mut self, progress: f32) -> usize {
        self.player.seek_progress(progress)
    }

    /// Blocks until the requested textures have settled.
    pub fn wait_for_textures(&self) {
        self.loader.wait_idle();
    }
}
