//! Selected-region tracking that stays valid across atlas edits

/// Index of the currently selected atlas region, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionSelection {
    index: Option<usize>,
}

impl RegionSelection {
    /// Nothing selected
    pub const fn none() -> Self {
        Self { index: None }
    }

    /// Selected index
    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    /// Select `index`, clamped to the last of `len` regions
    pub fn select(&mut self, index: usize, len: usize) {
        self.index = Some(index);
        self.clamp(len);
    }

    /// Select the last of `len` regions
    pub const fn select_last(&mut self, len: usize) {
        self.index = len.checked_sub(1);
    }

    /// Pull the selection back inside `len` regions
    ///
    /// An index past the end moves to the new last region; an empty atlas
    /// clears the selection.
    pub fn clamp(&mut self, len: usize) {
        self.index = match self.index {
            _ if len == 0 => None,
            Some(index) if index >= len => Some(len - 1),
            current => current,
        };
    }

    /// Adjust after the region at `removed` was taken out, leaving `len` regions
    ///
    /// Selections after the removed slot keep pointing at the same region;
    /// a removed selection stays on the same slot, or the new last one when
    /// the slot no longer exists.
    pub fn after_removal(&mut self, removed: usize, len: usize) {
        if let Some(index) = self.index {
            if index > removed {
                self.index = Some(index - 1);
            }
        }
        self.clamp(len);
    }
}
