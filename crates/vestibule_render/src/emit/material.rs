//! Material lookups consumed by the emitter.

use vestibule_core::{DisplayListHandle, MaterialIndex};

/// The four material-system functions the renderer needs.
pub trait MaterialTable {
    /// State for drawing with no particular material, emitted once per frame.
    fn default_material(&self) -> DisplayListHandle;

    /// Commands that bind `material`.
    fn bind_material(&self, material: MaterialIndex) -> DisplayListHandle;

    /// Commands that undo [`MaterialTable::bind_material`] for `material`.
    fn revert_material(&self, material: MaterialIndex) -> DisplayListHandle;

    /// First transparent material. Materials at or past it draw back to front.
    fn transparent_start(&self) -> MaterialIndex;
}

/// Bind/revert pair for one material.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterialCommands {
    /// Bind commands.
    pub bind: DisplayListHandle,
    /// Revert commands.
    pub revert: DisplayListHandle,
}

/// Plain array-backed [`MaterialTable`].
///
/// Materials missing from the table fall back to the default material for
/// both bind and revert.
#[derive(Debug, Clone, Default)]
pub struct MaterialCommandTable {
    default: DisplayListHandle,
    materials: Vec<MaterialCommands>,
    transparent_start: MaterialIndex,
}

impl MaterialCommandTable {
    /// Creates a table. Materials are indexed by position in `materials`.
    #[must_use]
    pub fn new(
        default: DisplayListHandle,
        materials: Vec<MaterialCommands>,
        transparent_start: MaterialIndex,
    ) -> Self {
        Self {
            default,
            materials,
            transparent_start,
        }
    }

    /// Number of materials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Returns true if the table has no materials.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    fn entry(&self, material: MaterialIndex) -> Option<&MaterialCommands> {
        self.materials.get(usize::from(material.raw()))
    }
}

impl MaterialTable for MaterialCommandTable {
    fn default_material(&self) -> DisplayListHandle {
        self.default
    }

    fn bind_material(&self, material: MaterialIndex) -> DisplayListHandle {
        self.entry(material).map_or(self.default, |entry| entry.bind)
    }

    fn revert_material(&self, material: MaterialIndex) -> DisplayListHandle {
        self.entry(material).map_or(self.default, |entry| entry.revert)
    }

    fn transparent_start(&self) -> MaterialIndex {
        self.transparent_start
    }
}
