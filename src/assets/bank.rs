use rustc_hash::FxHashMap;

use crate::assets::io::texture_path;
use crate::assets::loader::TextureLoader;
use crate::resources::texture::TextureHandle;

/// Named label textures, swapped onto the brand material by the timeline.
///
/// Read-only after construction. Handles may still be loading; the bank
/// does not wait for them.
#[derive(Debug, Clone, Default)]
pub struct TextureBank {
    textures: FxHashMap<String, TextureHandle>,
}

impl TextureBank {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TextureHandle> {
        self.textures.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.textures.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.textures.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TextureHandle)> {
        self.textures.iter().map(|(name, handle)| (name.as_str(), handle))
    }

    /// Whether every texture has finished loading successfully.
    #[must_use]
    pub fn all_ready(&self) -> bool {
        self.textures.values().all(|t| t.is_ready())
    }
}

impl FromIterator<(String, TextureHandle)> for TextureBank {
    fn from_iter<I: IntoIterator<Item = (String, TextureHandle)>>(iter: I) -> Self {
        Self {
            textures: iter.into_iter().collect(),
        }
    }
}

/// Issues a load for `/<name>.png` per name, with flip-Y disabled, and
/// returns the bank at once. Entries fill in as loads complete.
pub fn load_textures<I, S>(loader: &TextureLoader, names: I) -> TextureBank
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let bank: TextureBank = names
        .into_iter()
        .map(|name| {
            let name = name.as_ref();
            let texture = loader.load(&texture_path(name));
            texture.set_flip_y(false);
            (name.to_string(), texture)
        })
        .collect();

    if bank.is_empty() {
        log::debug!("No label textures requested");
    } else {
        log::debug!("Requested {} label textures", bank.len());
    }
    bank
}
