use std::{fmt, str::FromStr};

use crate::foundation::{
    error::{ShotcodeError, ShotcodeResult},
    ordering::ReferenceOrder,
};

/// Production state of a shot.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ShotStatus {
    /// Planned, not started.
    #[default]
    Default,
    /// Flagged as possibly cut or still undecided.
    Unsure,
    /// Being animated.
    Wip,
    /// Done.
    Animated,
}

impl ShotStatus {
    /// Every status in canonical display order.
    pub const ALL: [ShotStatus; 4] = [Self::Default, Self::Unsure, Self::Wip, Self::Animated];

    /// Status after the primary action (click): moves a shot towards done.
    pub fn next(self) -> Self {
        match self {
            Self::Unsure => Self::Default,
            Self::Default => Self::Wip,
            Self::Wip => Self::Animated,
            Self::Animated => Self::Animated,
        }
    }

    /// Status after the secondary action (right-click): flags or unflags as unsure.
    pub fn toggled_unsure(self) -> Self {
        match self {
            Self::Animated | Self::Unsure => Self::Default,
            Self::Default | Self::Wip => Self::Unsure,
        }
    }

    /// Reaching this status pins the shot's number, since files exist under its code.
    pub fn locks_number(self) -> bool {
        matches!(self, Self::Wip | Self::Animated)
    }

    /// Lowercase name as used in project files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Unsure => "unsure",
            Self::Wip => "wip",
            Self::Animated => "animated",
        }
    }
}

impl fmt::Display for ShotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ShotStatus {
    type Err = ShotcodeError;

    fn from_str(s: &str) -> ShotcodeResult<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ShotcodeError::parse(format!("unknown shot status '{s}'")))
    }
}

/// Set of statuses to show. Empty shows every shot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusFilter {
    statuses: Vec<ShotStatus>,
}

impl StatusFilter {
    /// Filter showing every shot.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter showing only the given statuses, kept in canonical display order.
    pub fn only(statuses: impl IntoIterator<Item = ShotStatus>) -> ShotcodeResult<Self> {
        let mut statuses: Vec<ShotStatus> = statuses.into_iter().collect();
        ReferenceOrder::new(ShotStatus::ALL).sort(&mut statuses)?;
        statuses.dedup();
        Ok(Self { statuses })
    }

    /// Selected statuses in display order.
    pub fn statuses(&self) -> &[ShotStatus] {
        &self.statuses
    }

    /// `true` when nothing is filtered out.
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Whether a shot with `status` is shown.
    pub fn shows(&self, status: ShotStatus) -> bool {
        self.statuses.is_empty() || self.statuses.contains(&status)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/status.rs"]
mod tests;
