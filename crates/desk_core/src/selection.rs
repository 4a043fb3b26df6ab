use std::collections::BTreeSet;

use desk_logging::desk_debug;

use crate::{FileId, FileRegistry};

/// Registry ids the next report should cover.
///
/// Every member is a current registry id: toggles of unknown ids are ignored and
/// clearing the registry clears the selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSet {
    ids: BTreeSet<FileId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id`. Returns `false` if `id` is not registered.
    pub fn toggle(&mut self, id: FileId, registry: &FileRegistry) -> bool {
        if !registry.contains(id) {
            desk_debug!("Ignoring toggle of unregistered file id {}", id);
            return false;
        }
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
        true
    }

    /// Clears the selection when everything is selected, otherwise selects every
    /// registered id. Evaluated against the registry as it is now.
    pub fn toggle_all(&mut self, registry: &FileRegistry) {
        if self.covers(registry) {
            self.ids.clear();
        } else {
            self.ids = registry.ids();
        }
    }

    /// True when the selection size matches the number of distinct registered ids.
    pub fn covers(&self, registry: &FileRegistry) -> bool {
        self.ids.len() == registry.ids().len()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: FileId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn ids(&self) -> Vec<FileId> {
        self.ids.iter().copied().collect()
    }
}
