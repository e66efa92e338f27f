/// Gap between consecutive automatic shot numbers when nothing is locked.
pub const SHOT_NUMBER_STEP: u32 = 10;
/// Minimum width of the scene part of a shotcode.
pub const SCENE_CODE_WIDTH: usize = 2;
/// Minimum width of the shot part of a shotcode.
pub const SHOT_CODE_WIDTH: usize = 3;

/// Whether a scene or shot number is pinned by the user or derived automatically.
///
/// Serialized as a nullable integer: `null` is [`NumberLock::Auto`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum NumberLock {
    /// Number fixed by an explicit user action; never reassigned automatically.
    Locked(u32),
    /// No number locked; computed from the item's neighbours.
    #[default]
    Auto,
}

impl NumberLock {
    /// The locked number, if any.
    pub fn locked(self) -> Option<u32> {
        match self {
            Self::Locked(n) => Some(n),
            Self::Auto => None,
        }
    }

    /// `true` for [`NumberLock::Locked`].
    pub fn is_locked(self) -> bool {
        matches!(self, Self::Locked(_))
    }
}

impl From<Option<u32>> for NumberLock {
    fn from(value: Option<u32>) -> Self {
        match value {
            Some(n) => Self::Locked(n),
            None => Self::Auto,
        }
    }
}

impl From<NumberLock> for Option<u32> {
    fn from(value: NumberLock) -> Self {
        value.locked()
    }
}
