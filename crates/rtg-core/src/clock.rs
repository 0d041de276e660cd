// ─────────────────────────────────────────────────────────────────────
// RTG Core — Mission Clock
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Host time as seen by the decay model.

use rtg_types::constants::{DAYS_PER_YEAR, HOURS_PER_DAY, MINUTES_PER_HOUR, SECONDS_PER_MINUTE};

/// Elapsed mission time supplied by the host on every call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MissionTime {
    /// Editor / no-time context: always zero elapsed time.
    #[default]
    DesignTime,
    /// Elapsed time since activation [years].
    Elapsed(f64),
}

impl MissionTime {
    /// Convert host mission seconds into Kerbin years (6 h days).
    pub fn from_mission_seconds(seconds: f64) -> Self {
        MissionTime::Elapsed(
            seconds / SECONDS_PER_MINUTE / MINUTES_PER_HOUR / HOURS_PER_DAY / DAYS_PER_YEAR,
        )
    }

    /// Map the host's editor flag and clock reading. In the editor the
    /// clock value is ignored.
    pub fn from_host(in_editor: bool, mission_seconds: f64) -> Self {
        if in_editor {
            MissionTime::DesignTime
        } else {
            Self::from_mission_seconds(mission_seconds)
        }
    }

    pub fn years(self) -> f64 {
        match self {
            MissionTime::DesignTime => 0.0,
            MissionTime::Elapsed(years) => years,
        }
    }

    pub fn is_design_time(self) -> bool {
        matches!(self, MissionTime::DesignTime)
    }
}
