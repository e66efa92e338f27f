use crate::foundation::{
    core::{NumberLock, SHOT_NUMBER_STEP},
    error::{ShotcodeError, ShotcodeResult},
};

/// Next automatic number for an unlocked shot.
///
/// `previous` is the resolved number of the preceding shot (0 for the first
/// shot). `locked_numbers` is every locked number in the scene; only those
/// above `previous` are considered.
///
/// Prefers the next multiple of ten. When a locked number sits at or below that
/// boundary the gap up to it is halved instead, and a lock at `previous + 1`
/// is stepped over before trying again. The result is always greater than
/// `previous` and never one of `locked_numbers`.
///
/// Fails with [`ShotcodeError::Validation`] when no such number fits in a
/// `u32`, i.e. when the scene has run out of numbers above `previous`.
pub fn next_shot_auto_number(previous: u32, locked_numbers: &[u32]) -> ShotcodeResult<u32> {
    let mut previous = previous;
    loop {
        let next_locked = locked_numbers
            .iter()
            .copied()
            .filter(|&n| n > previous)
            .min();
        let base = next_decade(previous);

        match (next_locked, base) {
            (None, Some(base)) => return Ok(base),
            (Some(locked), Some(base)) if locked > base => return Ok(base),
            (Some(locked), _) if locked - previous == 1 => previous = locked,
            (Some(locked), _) => return Ok(previous + (locked - previous) / 2),
            (None, None) => {
                return Err(ShotcodeError::validation(format!(
                    "no shot number left after {previous}"
                )));
            }
        }
    }
}

/// Resolve the display numbers of an ordered sequence of shots.
///
/// Locked shots keep their number; every other shot gets
/// [`next_shot_auto_number`] of the number resolved just before it.
#[tracing::instrument(level = "trace", skip_all, fields(shots = locks.len()))]
pub fn resolve_shot_numbers(locks: &[NumberLock]) -> ShotcodeResult<Vec<u32>> {
    let locked_numbers: Vec<u32> = locks.iter().filter_map(|l| l.locked()).collect();

    let mut previous = 0;
    let mut out = Vec::with_capacity(locks.len());
    for lock in locks {
        let number = match lock {
            NumberLock::Locked(n) => *n,
            NumberLock::Auto => next_shot_auto_number(previous, &locked_numbers)?,
        };
        out.push(number);
        previous = number;
    }
    Ok(out)
}

// Next multiple of the step strictly above `n`, if it fits.
fn next_decade(n: u32) -> Option<u32> {
    (n / SHOT_NUMBER_STEP + 1).checked_mul(SHOT_NUMBER_STEP)
}

#[cfg(test)]
#[path = "../../tests/unit/numbering/shot.rs"]
mod tests;
