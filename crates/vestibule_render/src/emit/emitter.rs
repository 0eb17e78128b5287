//! Material-batched command emission.

use vestibule_core::{LevelData, MaterialIndex};

use super::material::MaterialTable;
use super::target::{CommandTarget, CountingTarget};
use crate::dynamic::DynamicScene;

/// Counts from one emission pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitStats {
    /// Material bind commands.
    pub binds: u32,
    /// Material revert commands.
    pub reverts: u32,
    /// Static display lists called.
    pub static_draws: u32,
    /// Dynamic objects rendered.
    pub dynamic_draws: u32,
    /// Every command pushed, including those from the dynamic scene.
    pub commands: u32,
}

/// Emits draw commands for `order`, already sorted.
///
/// Starts with the default material. A material is bound when an object's
/// material differs from the one currently bound, reverting the previous one
/// first; untextured objects leave the binding as is. The last bound
/// material is reverted at the end, so each run of one material costs
/// exactly one bind and one revert.
#[allow(clippy::cast_possible_truncation)]
pub fn emit_commands<D, M>(
    level: &LevelData,
    order: &[u16],
    dynamic: &D,
    materials: &M,
    target: &mut dyn CommandTarget,
) -> EmitStats
where
    D: DynamicScene + ?Sized,
    M: MaterialTable + ?Sized,
{
    let mut target = CountingTarget::new(target);
    let mut stats = EmitStats::default();
    let content = level.static_content();
    let static_count = content.len();

    target.push_display_list(materials.default_material());

    let mut previous: Option<MaterialIndex> = None;

    for &index in order {
        let slot = usize::from(index);
        let is_static = slot < static_count;

        let material = if is_static {
            content[slot].material
        } else {
            dynamic.material_index((slot - static_count) as u16)
        };

        if let Some(material) = material {
            if previous != Some(material) {
                if let Some(bound) = previous {
                    target.push_display_list(materials.revert_material(bound));
                    stats.reverts += 1;
                }
                target.push_display_list(materials.bind_material(material));
                stats.binds += 1;
                previous = Some(material);
            }
        }

        if is_static {
            target.push_display_list(content[slot].display_list);
            stats.static_draws += 1;
        } else {
            dynamic.render_object((slot - static_count) as u16, &mut target);
            stats.dynamic_draws += 1;
        }
    }

    if let Some(bound) = previous {
        target.push_display_list(materials.revert_material(bound));
        stats.reverts += 1;
    }

    stats.commands = target.count();
    stats
}
