// ─────────────────────────────────────────────────────────────────────
// RTG Core — Decay Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Exponential decay of the fuel's output capacity.

use rtg_types::constants::FULL_OUTPUT_PERCENT;
use rtg_types::error::{RtgError, RtgResult};

/// Remaining output capacity [%] after `elapsed_time` years.
///
/// `100 * 2^(-t / t_half)`. Called every simulation tick, so it stays
/// allocation-free. `elapsed_time` must be finite and `>= 0`; `half_life`
/// must be finite and `> 0`. Past ~1075 half-lives `2^-x` underflows; the
/// result is floored at `f64::MIN_POSITIVE` so it never reaches zero.
pub fn decay_percent(elapsed_time: f64, half_life: f64) -> RtgResult<f64> {
    validate_half_life(half_life)?;
    if !elapsed_time.is_finite() || elapsed_time < 0.0 {
        return Err(RtgError::InvalidConfiguration(format!(
            "elapsed time must be finite and non-negative, got {elapsed_time}"
        )));
    }
    Ok((FULL_OUTPUT_PERCENT * (-elapsed_time / half_life).exp2()).max(f64::MIN_POSITIVE))
}

pub(crate) fn validate_half_life(half_life: f64) -> RtgResult<()> {
    if !half_life.is_finite() || half_life <= 0.0 {
        return Err(RtgError::InvalidConfiguration(format!(
            "half-life must be finite and positive, got {half_life}"
        )));
    }
    Ok(())
}
