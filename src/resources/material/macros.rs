// src/resources/material/macros.rs

/// Material API generator.
///
/// Generates setters/getters for the parameter block, the common settings
/// API, the color-map slot, and the [`MaterialTrait`] implementation.
/// Every generated setter bumps the material version; the renderer-facing
/// dirty flag is left to the caller (`set_needs_update`).
///
/// [`MaterialTrait`]: crate::resources::material::MaterialTrait
#[macro_export]
macro_rules! impl_material_api {
    (
        $struct_name:ident,
        $params_struct:ty,
        $type_name:expr,
        // Params: (field name, type, doc)
        params: [ $(($p_field:ident, $p_type:ty, $p_doc:expr)),* $(,)? ]
    ) => {
        impl $struct_name {

            // --- Settings API ---

            /// Enables alpha blending.
            pub fn set_transparent(&mut self, transparent: bool) {
                if self.settings.transparent != transparent {
                    self.settings.transparent = transparent;
                    self.tracker.changed();
                }
            }
            #[must_use]
            pub fn transparent(&self) -> bool {
                self.settings.transparent
            }

            // --- Param Accessors ---
            $(
                paste::paste! {
                    #[doc = $p_doc]
                    pub fn [<set_ $p_field>](&mut self, value: $p_type) {
                        self.params.$p_field = value;
                        self.tracker.changed();
                    }
                }

                #[doc = $p_doc]
                #[must_use]
                pub fn $p_field(&self) -> $p_type {
                    self.params.$p_field
                }
            )*

            // --- Color Map ---

            /// The color map, if any.
            #[must_use]
            pub fn map(&self) -> Option<&$crate::resources::texture::TextureHandle> {
                self.map.as_ref()
            }

            /// Replaces the color map. `None` renders untextured.
            pub fn set_map(&mut self, map: Option<$crate::resources::texture::TextureHandle>) {
                self.map = map;
                self.tracker.changed();
            }

            // --- Batch Config ---
            pub fn configure<F>(&mut self, f: F)
            where
                F: FnOnce(&mut $params_struct),
            {
                f(&mut self.params);
                self.tracker.changed();
            }

            #[must_use]
            pub fn params(&self) -> &$params_struct {
                &self.params
            }
        }

        impl $crate::resources::material::MaterialTrait for $struct_name {
            fn material_type(&self) -> &'static str { $type_name }
            fn uuid(&self) -> uuid::Uuid { self.uuid }
            fn base_color(&self) -> glam::Vec4 { self.params.color }
            fn set_base_color(&mut self, color: glam::Vec4) {
                self.params.color = color;
                self.tracker.changed();
            }
            fn settings(&self) -> &$crate::resources::material::MaterialSettings { &self.settings }
            fn version(&self) -> u64 { self.tracker.version() }
            fn needs_update(&self) -> bool { self.tracker.needs_update() }
            fn set_needs_update(&mut self) { self.tracker.mark_needs_update(); }
            fn take_needs_update(&mut self) -> bool { self.tracker.take_needs_update() }
        }
    };
}
