use std::{fmt, str::FromStr};

use crate::foundation::{
    core::{SCENE_CODE_WIDTH, SHOT_CODE_WIDTH},
    error::{ShotcodeError, ShotcodeResult},
};

/// A shot's label, `SS-NNN`: scene number and shot number, zero-padded.
///
/// The pad widths are minimums; larger numbers widen the field instead of
/// being truncated.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ShotCode {
    /// Resolved scene number.
    pub scene: u32,
    /// Resolved shot number within the scene.
    pub shot: u32,
}

impl ShotCode {
    /// Pair a scene number with a shot number.
    pub fn new(scene: u32, shot: u32) -> Self {
        Self { scene, shot }
    }
}

impl fmt::Display for ShotCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:0sw$}-{:0hw$}",
            self.scene,
            self.shot,
            sw = SCENE_CODE_WIDTH,
            hw = SHOT_CODE_WIDTH
        )
    }
}

impl FromStr for ShotCode {
    type Err = ShotcodeError;

    fn from_str(s: &str) -> ShotcodeResult<Self> {
        let s = s.trim();
        let (scene, shot) = s
            .split_once('-')
            .ok_or_else(|| ShotcodeError::parse(format!("shotcode '{s}' is missing '-'")))?;
        Ok(Self {
            scene: parse_part(s, scene)?,
            shot: parse_part(s, shot)?,
        })
    }
}

/// Format a scene and shot number as a shotcode string.
pub fn shot_code(scene: u32, shot: u32) -> String {
    ShotCode::new(scene, shot).to_string()
}

fn parse_part(code: &str, part: &str) -> ShotcodeResult<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ShotcodeError::parse(format!(
            "shotcode '{code}' must look like SS-NNN"
        )));
    }
    part.parse()
        .map_err(|e| ShotcodeError::parse(format!("shotcode '{code}': {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/numbering/code.rs"]
mod tests;
