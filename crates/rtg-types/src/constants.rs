// ─────────────────────────────────────────────────────────────────────
// RTG Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Decay percentage of fresh fuel.
pub const FULL_OUTPUT_PERCENT: f64 = 100.0;

/// Calibration divisor K of the power-output formula.
/// Single fuel axis with a scalar thermocouple efficiency.
pub const POWER_CALIBRATION_DIVISOR: f64 = 15.0;

/// Decimal places kept on power output [Ec/s].
pub const POWER_DECIMALS: i32 = 2;

/// Decimal places kept on lifepoint projections [years].
pub const LIFEPOINT_DECIMALS: i32 = 3;

/// Kerbin clock: 60 s/min, 60 min/h, 6 h/day, 426.08 days/year.
pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const HOURS_PER_DAY: f64 = 6.0;
pub const DAYS_PER_YEAR: f64 = 426.08;

/// Fallback fuel used when a requested name is absent from the catalog.
pub const DEFAULT_FUEL_NAME: &str = "Blutonium-238";
pub const DEFAULT_HALF_LIFE: f64 = 25.43;
pub const DEFAULT_ENERGY_DENSITY: f64 = 0.54;
pub const DEFAULT_DENSITY: f64 = 0.0;
pub const DEFAULT_COST: f64 = 0.0;

/// Fuel mass of a freshly placed unit [kg].
pub const DEFAULT_FUEL_MASS: f64 = 5.0;

/// Efficiency of a freshly placed unit (Kerbanium Telluride couple).
pub const DEFAULT_EFFICIENCY: f64 = 0.05;

/// Current schema version of persisted unit state.
pub const UNIT_STATE_VERSION: u32 = 1;

/// Node name holding fuel records in a catalog document.
pub const CATALOG_NODE: &str = "RESOURCE_DEFINITION";
