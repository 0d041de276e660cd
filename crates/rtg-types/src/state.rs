// ─────────────────────────────────────────────────────────────────────
// RTG Core — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::Serialize;

/// Discrete efficiency band of a decaying source, for user-facing messages.
/// Ordered from healthiest to most depleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum EfficiencyBand {
    Nominal,
    BelowThreeQuarters,
    BelowHalf,
    BelowQuarter,
    BelowEighth,
    BelowSixteenth,
}

impl EfficiencyBand {
    /// Classify a decay percentage against the 75/50/25/12.5/6.25 thresholds.
    pub fn classify(decay_percent: f64) -> Self {
        if decay_percent < 6.25 {
            EfficiencyBand::BelowSixteenth
        } else if decay_percent < 12.5 {
            EfficiencyBand::BelowEighth
        } else if decay_percent < 25.0 {
            EfficiencyBand::BelowQuarter
        } else if decay_percent < 50.0 {
            EfficiencyBand::BelowHalf
        } else if decay_percent < 75.0 {
            EfficiencyBand::BelowThreeQuarters
        } else {
            EfficiencyBand::Nominal
        }
    }

    /// Notification text for the host, `None` while output is nominal.
    pub fn message(self) -> Option<&'static str> {
        match self {
            EfficiencyBand::Nominal => None,
            EfficiencyBand::BelowThreeQuarters => {
                Some("The RTG is operating at three quarters efficiency.")
            }
            EfficiencyBand::BelowHalf => Some("The RTG is operating at one half efficiency."),
            EfficiencyBand::BelowQuarter => Some("The RTG is operating at one quarter efficiency."),
            EfficiencyBand::BelowEighth => Some("The RTG is operating at one eighth efficiency."),
            EfficiencyBand::BelowSixteenth => {
                Some("The RTG is operating below one sixteenth efficiency.")
            }
        }
    }
}

/// Derived values of an active generator unit for one point in time.
/// Recomputed on every update, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayState {
    pub fuel_name: String,
    pub half_life: f64,
    pub fuel_mass: f64,
    pub efficiency: f64,
    /// Elapsed time the values were computed for [years].
    pub elapsed_years: f64,
    /// Remaining output capacity, (0, 100].
    pub decay_percent: f64,
    /// `decay_percent` rounded to a whole percent.
    pub fuel_remaining: f64,
    /// Electrical output [Ec/s].
    pub power_output: f64,
    /// Elapsed time at which output reaches three quarters [years].
    pub time_to_three_quarters: f64,
    /// Elapsed time at the configured secondary lifepoint [years].
    pub time_to_secondary: f64,
    pub band: EfficiencyBand,
}
