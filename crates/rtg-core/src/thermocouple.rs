// ─────────────────────────────────────────────────────────────────────
// RTG Core — Thermocouple Presets
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Named conversion efficiencies a player can cycle through.

use serde::{Deserialize, Serialize};

/// Tolerance when matching a stored efficiency back to a preset.
const PRESET_MATCH_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ThermocoupleKind {
    #[default]
    KerbaniumTelluride,
    Thermionic,
    Thermophotovoltaic,
}

impl ThermocoupleKind {
    pub const ALL: [ThermocoupleKind; 3] = [
        ThermocoupleKind::KerbaniumTelluride,
        ThermocoupleKind::Thermionic,
        ThermocoupleKind::Thermophotovoltaic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ThermocoupleKind::KerbaniumTelluride => "Kerbanium Telluride",
            ThermocoupleKind::Thermionic => "Thermionic",
            ThermocoupleKind::Thermophotovoltaic => "Thermophotovoltaic",
        }
    }

    pub fn efficiency(self) -> f64 {
        match self {
            ThermocoupleKind::KerbaniumTelluride => 0.05,
            ThermocoupleKind::Thermionic => 0.18,
            ThermocoupleKind::Thermophotovoltaic => 0.3,
        }
    }

    /// Cycle to the next preset, wrapping after the last.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&k| k == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Preset whose efficiency equals `efficiency`, if any.
    pub fn from_efficiency(efficiency: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| (k.efficiency() - efficiency).abs() < PRESET_MATCH_TOLERANCE)
    }
}
