use crate::foundation::core::NumberLock;

/// Display number of a scene: its locked number, or its 1-based position.
///
/// Scene numbers are not sparse and do not route around locked numbers;
/// reordering scenes is rare and locked scene numbers are expected to be too.
pub fn scene_number(lock: NumberLock, index: usize) -> u32 {
    lock.locked().unwrap_or_else(|| positional_number(index))
}

/// Resolve the display numbers of an ordered sequence of scenes.
pub fn resolve_scene_numbers(locks: &[NumberLock]) -> Vec<u32> {
    locks
        .iter()
        .enumerate()
        .map(|(index, lock)| scene_number(*lock, index))
        .collect()
}

fn positional_number(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_add(1))
}

#[cfg(test)]
#[path = "../../tests/unit/numbering/scene.rs"]
mod tests;
