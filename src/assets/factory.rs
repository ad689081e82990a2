use glam::Vec4;

use crate::animation::state::ColorState;
use crate::assets::io::texture_path;
use crate::assets::loader::TextureLoader;
use crate::resources::color::Color;
use crate::resources::material::{
    MeshPhysicalMaterial, MeshStandardMaterial, SharedMaterial, shared,
};

/// Image shown on the label before any variant is selected.
pub const LABEL_TEXTURE: &str = "FalloutBoy";

const SHELL_COLOR: u32 = 0x8c_8c_8c;

/// The three bottle materials.
#[derive(Debug, Clone)]
pub struct MaterialSet {
    /// Glass shell ("cristal").
    pub shell: SharedMaterial<MeshPhysicalMaterial>,
    /// Liquid fill ("soda").
    pub fill: SharedMaterial<MeshStandardMaterial>,
    /// Brand label.
    pub label: SharedMaterial<MeshStandardMaterial>,
}

/// Builds the baseline materials and requests the default label texture.
///
/// `scheme` overrides the shell and fill base colors.
pub fn generate_init_materials(loader: &TextureLoader, scheme: Option<&ColorState>) -> MaterialSet {
    generate_materials_with_label(loader, LABEL_TEXTURE, scheme)
}

/// [`generate_init_materials`] with a caller-chosen label image.
pub fn generate_materials_with_label(
    loader: &TextureLoader,
    label_texture: &str,
    scheme: Option<&ColorState>,
) -> MaterialSet {
    let label_map = loader.load(&texture_path(label_texture));
    label_map.set_flip_y(false);

    let shell_color = scheme.map_or_else(
        || Color::from_hex_u32(SHELL_COLOR).to_vec4(),
        |s| scheme_color(&s.cristal, Color::from_hex_u32(SHELL_COLOR)),
    );
    let fill_color = scheme.map_or_else(
        || Color::BLACK.to_vec4(),
        |s| scheme_color(&s.soda, Color::BLACK),
    );

    let mut shell = MeshPhysicalMaterial::new(shell_color);
    shell.configure(|p| {
        p.metalness = 0.0;
        p.roughness = 0.2;
        p.opacity = 1.0;
        p.env_map_intensity = 1.0;
        p.transmission = 1.0;
    });
    shell.set_transparent(true);

    let mut fill = MeshStandardMaterial::new(fill_color);
    fill.configure(|p| {
        p.roughness = 1.0;
        p.metalness = 1.0;
        p.opacity = 1.0;
    });
    fill.set_transparent(false);

    let mut label = MeshStandardMaterial::new(Color::WHITE.to_vec4());
    label.configure(|p| {
        p.roughness = 0.5;
        p.metalness = 1.0;
        p.env_map_intensity = 1.0;
    });
    label.set_transparent(true);
    label.set_map(Some(label_map));

    log::debug!("Bottle materials created, label texture `{label_texture}` requested");

    MaterialSet {
        shell: shared(shell),
        fill: shared(fill),
        label: shared(label),
    }
}

fn scheme_color(value: &str, fallback: Color) -> Vec4 {
    match Color::parse(value) {
        Ok(color) => Color { a: 1.0, ..color }.to_vec4(),
        Err(err) => {
            log::warn!("Ignoring color scheme override: {err}");
            fallback.to_vec4()
        }
    }
}
