/// Version tracker - used to mark resource changes
///
/// `version` counts every mutation. `needs_update` is the renderer-facing
/// dirty flag: set explicitly after a batch of mutations, cleared by the
/// renderer once it has consumed the new state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeTracker {
    version: u64,
    needs_update: bool,
}

impl ChangeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: 0,
            needs_update: false,
        }
    }

    /// Marks as modified, increments version by 1
    pub fn changed(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    /// Flags the resource for the renderer to pick up on its next frame.
    pub fn mark_needs_update(&mut self) {
        self.needs_update = true;
        self.changed();
    }

    #[must_use]
    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    /// Clears the dirty flag, returning whether it was set.
    pub fn take_needs_update(&mut self) -> bool {
        std::mem::take(&mut self.needs_update)
    }

    /// Gets the current version number
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }
}
