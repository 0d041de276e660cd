// ─────────────────────────────────────────────────────────────────────
// RTG Core — Lifepoint Projection
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Projected elapsed time until output drops to a fraction of its start.
//!
//! The projection is linear against the half-life,
//! `t(f) = t_half - t_half * f`, not an inverse of the exponential curve.
//! It matches what players see in the part menu and is kept as such.

use rtg_types::config::{RoundingMode, SecondaryLifepoint};
use rtg_types::constants::LIFEPOINT_DECIMALS;
use rtg_types::error::{RtgError, RtgResult};

use crate::decay::validate_half_life;
use crate::power::round_to;

/// Elapsed years until output reaches `fraction` of the starting rate,
/// rounded with the default convention.
pub fn time_to_fraction(half_life: f64, fraction: f64) -> RtgResult<f64> {
    time_to_fraction_with(half_life, fraction, RoundingMode::default())
}

pub fn time_to_fraction_with(
    half_life: f64,
    fraction: f64,
    rounding: RoundingMode,
) -> RtgResult<f64> {
    validate_half_life(half_life)?;
    if !(0.0..=1.0).contains(&fraction) {
        return Err(RtgError::InvalidConfiguration(format!(
            "lifepoint fraction must lie in [0, 1], got {fraction}"
        )));
    }
    Ok(round_to(
        half_life - half_life * fraction,
        LIFEPOINT_DECIMALS,
        rounding,
    ))
}

/// The two lifepoints a unit reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifepointProjection {
    pub three_quarters: f64,
    pub secondary: f64,
}

impl LifepointProjection {
    pub fn project(
        half_life: f64,
        secondary: SecondaryLifepoint,
        rounding: RoundingMode,
    ) -> RtgResult<Self> {
        Ok(LifepointProjection {
            three_quarters: time_to_fraction_with(half_life, 0.75, rounding)?,
            secondary: time_to_fraction_with(half_life, secondary.fraction(), rounding)?,
        })
    }
}
