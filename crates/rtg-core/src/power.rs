// ─────────────────────────────────────────────────────────────────────
// RTG Core — Power Output
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Thermocouple conversion of decay heat into electrical output.

use rtg_types::config::RoundingMode;
use rtg_types::constants::{FULL_OUTPUT_PERCENT, POWER_CALIBRATION_DIVISOR, POWER_DECIMALS};
use rtg_types::error::{RtgError, RtgResult};

/// Round `value` to `decimals` places with the given tie-breaking rule.
pub fn round_to(value: f64, decimals: i32, mode: RoundingMode) -> f64 {
    let scale = 10f64.powi(decimals);
    let scaled = value * scale;
    let rounded = match mode {
        RoundingMode::HalfAwayFromZero => scaled.round(),
        RoundingMode::HalfEven => scaled.round_ties_even(),
    };
    rounded / scale
}

/// Heat produced by the fuel load before decay and conversion losses.
pub fn reaction_power(energy_density: f64, fuel_mass: f64) -> f64 {
    energy_density * fuel_mass
}

/// Electrical output rate [Ec/s].
///
/// `round(decay% * (energy_density * mass) * efficiency / K, 2)` with
/// `K = POWER_CALIBRATION_DIVISOR`. Linear in `decay_percent`.
pub fn power_output(
    decay_percent: f64,
    fuel_mass: f64,
    energy_density: f64,
    efficiency: f64,
    rounding: RoundingMode,
) -> RtgResult<f64> {
    check_range("decay percent", decay_percent, 0.0, FULL_OUTPUT_PERCENT)?;
    check_range("fuel mass", fuel_mass, 0.0, f64::MAX)?;
    check_range("energy density", energy_density, 0.0, f64::MAX)?;
    check_range("efficiency", efficiency, 0.0, 1.0)?;

    let raw = decay_percent * reaction_power(energy_density, fuel_mass) * efficiency
        / POWER_CALIBRATION_DIVISOR;
    let rounded = round_to(raw, POWER_DECIMALS, rounding);
    if !rounded.is_finite() {
        return Err(RtgError::InvalidConfiguration(format!(
            "power output overflows for mass {fuel_mass} and energy density {energy_density}"
        )));
    }
    Ok(rounded)
}

fn check_range(what: &str, value: f64, lo: f64, hi: f64) -> RtgResult<()> {
    if !value.is_finite() || value < lo || value > hi {
        return Err(RtgError::InvalidConfiguration(format!(
            "{what} must lie in [{lo}, {hi}], got {value}"
        )));
    }
    Ok(())
}
