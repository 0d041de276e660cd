// ─────────────────────────────────────────────────────────────────────
// RTG Core — Generator Unit
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Simulation state of one RTG instance.
//!
//! A unit starts `Uninitialized`. `load` binds a fuel from the catalog,
//! validates mass and efficiency and computes the first display state.
//! Afterwards the host calls `update` each tick with fresh mission time;
//! nothing accumulates between calls.

use rtg_types::config::{
    format_decimal, parse_decimal, RoundingMode, SecondaryLifepoint, UnitState,
};
use rtg_types::constants::{DEFAULT_EFFICIENCY, DEFAULT_FUEL_MASS, UNIT_STATE_VERSION};
use rtg_types::error::{RtgError, RtgResult};
use rtg_types::state::{DisplayState, EfficiencyBand};

use crate::catalog::{FuelCatalog, FuelDefinition};
use crate::clock::MissionTime;
use crate::decay::decay_percent;
use crate::lifepoint::LifepointProjection;
use crate::power::{power_output, round_to};
use crate::thermocouple::ThermocoupleKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitPhase {
    Uninitialized,
    Active,
}

/// One generator bound to a shared, read-only fuel catalog.
#[derive(Debug, Clone)]
pub struct GeneratorUnit<'c> {
    catalog: &'c FuelCatalog,
    fuel: Option<&'c FuelDefinition>,
    fuel_mass: f64,
    efficiency: f64,
    rounding: RoundingMode,
    secondary: SecondaryLifepoint,
    display: Option<DisplayState>,
}

impl<'c> GeneratorUnit<'c> {
    pub fn new(catalog: &'c FuelCatalog) -> Self {
        GeneratorUnit {
            catalog,
            fuel: None,
            fuel_mass: DEFAULT_FUEL_MASS,
            efficiency: DEFAULT_EFFICIENCY,
            rounding: RoundingMode::default(),
            secondary: SecondaryLifepoint::default(),
            display: None,
        }
    }

    pub fn phase(&self) -> UnitPhase {
        if self.fuel.is_some() {
            UnitPhase::Active
        } else {
            UnitPhase::Uninitialized
        }
    }

    pub fn fuel(&self) -> Option<&'c FuelDefinition> {
        self.fuel
    }

    pub fn fuel_mass(&self) -> f64 {
        self.fuel_mass
    }

    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// Preset matching the current efficiency, if it is one.
    pub fn thermocouple(&self) -> Option<ThermocoupleKind> {
        ThermocoupleKind::from_efficiency(self.efficiency)
    }

    /// Last computed display state.
    pub fn display(&self) -> Option<&DisplayState> {
        self.display.as_ref()
    }

    /// Restore persisted configuration and activate the unit.
    ///
    /// Unknown fuels fall back to the catalog default and unparsable
    /// numbers to their defaults; both are logged. A non-positive mass or
    /// an efficiency outside (0, 1] is returned as an error and leaves the
    /// unit untouched.
    pub fn load(&mut self, state: &UnitState, time: MissionTime) -> RtgResult<DisplayState> {
        if state.version > UNIT_STATE_VERSION {
            log::warn!(
                "Unit state version {} is newer than supported version {}",
                state.version,
                UNIT_STATE_VERSION
            );
        }

        let catalog = self.catalog;
        let fuel = match state.fuel.as_deref() {
            Some(name) => catalog.resolve(name),
            None => {
                log::debug!("No fuel persisted, using defaults");
                catalog.default_definition()
            }
        };
        let fuel_mass = parse_or_default("fuelMass", state.fuel_mass.as_deref(), DEFAULT_FUEL_MASS);
        let efficiency =
            parse_or_default("efficiency", state.efficiency.as_deref(), DEFAULT_EFFICIENCY);
        validate_fuel_mass(fuel_mass)?;
        validate_efficiency(efficiency)?;

        let display = self.compute(fuel, fuel_mass, efficiency, time)?;
        self.fuel = Some(fuel);
        self.fuel_mass = fuel_mass;
        self.efficiency = efficiency;
        self.display = Some(display.clone());
        log::info!(
            "RTG active: {} {} kg at {:.0}% efficiency",
            fuel.name(),
            fuel_mass,
            efficiency * 100.0
        );
        Ok(display)
    }

    /// Persistable configuration. Derived values are never saved.
    pub fn save(&self) -> UnitState {
        UnitState {
            version: UNIT_STATE_VERSION,
            fuel: self.fuel.map(|f| f.name().to_string()),
            fuel_mass: Some(format_decimal(self.fuel_mass)),
            efficiency: Some(format_decimal(self.efficiency)),
        }
    }

    /// Recompute all derived values for `time`.
    pub fn update(&mut self, time: MissionTime) -> RtgResult<DisplayState> {
        let fuel = self.fuel.ok_or(RtgError::Uninitialized)?;
        let display = self.compute(fuel, self.fuel_mass, self.efficiency, time)?;
        self.display = Some(display.clone());
        Ok(display)
    }

    /// Energy produced over a tick of `dt` host time units, for the host to
    /// credit to its storage.
    pub fn power_for_tick(&mut self, time: MissionTime, dt: f64) -> RtgResult<f64> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(RtgError::InvalidConfiguration(format!(
                "tick duration must be finite and non-negative, got {dt}"
            )));
        }
        Ok(self.update(time)?.power_output * dt)
    }

    /// Bind a fuel by name; unknown names resolve to the default.
    pub fn select_fuel(&mut self, name: &str) -> RtgResult<&'c FuelDefinition> {
        self.require_active()?;
        let catalog = self.catalog;
        let fuel = catalog.resolve(name);
        self.fuel = Some(fuel);
        Ok(fuel)
    }

    pub fn next_fuel(&mut self) -> RtgResult<&'c FuelDefinition> {
        let current = self.require_active()?;
        let catalog = self.catalog;
        let fuel = catalog.next(current);
        self.fuel = Some(fuel);
        Ok(fuel)
    }

    pub fn previous_fuel(&mut self) -> RtgResult<&'c FuelDefinition> {
        let current = self.require_active()?;
        let catalog = self.catalog;
        let fuel = catalog.previous(current);
        self.fuel = Some(fuel);
        Ok(fuel)
    }

    pub fn set_fuel_mass(&mut self, fuel_mass: f64) -> RtgResult<()> {
        validate_fuel_mass(fuel_mass)?;
        self.fuel_mass = fuel_mass;
        Ok(())
    }

    pub fn set_efficiency(&mut self, efficiency: f64) -> RtgResult<()> {
        validate_efficiency(efficiency)?;
        self.efficiency = efficiency;
        Ok(())
    }

    pub fn select_thermocouple(&mut self, kind: ThermocoupleKind) {
        self.efficiency = kind.efficiency();
    }

    /// Cycle thermocouple presets. A custom efficiency restarts the cycle
    /// at the first preset.
    pub fn next_thermocouple(&mut self) -> ThermocoupleKind {
        let kind = match self.thermocouple() {
            Some(current) => current.next(),
            None => ThermocoupleKind::default(),
        };
        self.select_thermocouple(kind);
        kind
    }

    pub fn set_rounding(&mut self, rounding: RoundingMode) {
        self.rounding = rounding;
    }

    pub fn set_secondary_lifepoint(&mut self, secondary: SecondaryLifepoint) {
        self.secondary = secondary;
    }

    /// Volume of the loaded fuel [`density / mass`].
    pub fn fuel_volume(&self) -> RtgResult<f64> {
        self.require_active()?.volume(self.fuel_mass)
    }

    fn require_active(&self) -> RtgResult<&'c FuelDefinition> {
        self.fuel.ok_or(RtgError::Uninitialized)
    }

    fn compute(
        &self,
        fuel: &FuelDefinition,
        fuel_mass: f64,
        efficiency: f64,
        time: MissionTime,
    ) -> RtgResult<DisplayState> {
        let elapsed_years = time.years();
        let decay = decay_percent(elapsed_years, fuel.half_life())?;
        let power = power_output(
            decay,
            fuel_mass,
            fuel.energy_density(),
            efficiency,
            self.rounding,
        )?;
        let lifepoints =
            LifepointProjection::project(fuel.half_life(), self.secondary, self.rounding)?;

        Ok(DisplayState {
            fuel_name: fuel.name().to_string(),
            half_life: fuel.half_life(),
            fuel_mass,
            efficiency,
            elapsed_years,
            decay_percent: decay,
            fuel_remaining: round_to(decay, 0, self.rounding),
            power_output: power,
            time_to_three_quarters: lifepoints.three_quarters,
            time_to_secondary: lifepoints.secondary,
            band: EfficiencyBand::classify(decay),
        })
    }
}

fn parse_or_default(field: &str, raw: Option<&str>, default: f64) -> f64 {
    match raw {
        None => default,
        Some(text) => parse_decimal(field, text).unwrap_or_else(|e| {
            log::warn!("{e}, using default {default}");
            default
        }),
    }
}

fn validate_fuel_mass(fuel_mass: f64) -> RtgResult<()> {
    if !fuel_mass.is_finite() || fuel_mass <= 0.0 {
        return Err(RtgError::InvalidConfiguration(format!(
            "fuel mass must be positive, got {fuel_mass}"
        )));
    }
    Ok(())
}

fn validate_efficiency(efficiency: f64) -> RtgResult<()> {
    if !efficiency.is_finite() || efficiency <= 0.0 || efficiency > 1.0 {
        return Err(RtgError::InvalidConfiguration(format!(
            "efficiency must lie in (0, 1], got {efficiency}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtg_types::config::FuelRecord;

    fn record(name: &str, half_life: &str, energy_density: &str) -> FuelRecord {
        FuelRecord {
            name: Some(name.to_string()),
            half_life: Some(half_life.to_string()),
            energy_density: Some(energy_density.to_string()),
            density: Some("0".to_string()),
            cost: Some("0".to_string()),
        }
    }

    fn blutonium_only() -> FuelCatalog {
        FuelCatalog::load(&[record("Blutonium-238", "25.43", "0.54")])
    }

    fn three_fuels() -> FuelCatalog {
        FuelCatalog::load(&[
            record("Kerbium-90", "8.352", "0.46"),
            record("Blutonium-238", "25.43", "0.54"),
            record("Kerbaricium-241", "125.28", "0.135"),
        ])
    }

    fn state(fuel: Option<&str>, mass: &str, efficiency: &str) -> UnitState {
        UnitState {
            fuel: fuel.map(str::to_string),
            fuel_mass: Some(mass.to_string()),
            efficiency: Some(efficiency.to_string()),
            ..UnitState::default()
        }
    }

    #[test]
    fn test_reference_unit_at_launch() {
        let catalog = blutonium_only();
        let mut unit = GeneratorUnit::new(&catalog);
        assert_eq!(unit.phase(), UnitPhase::Uninitialized);

        let d = unit
            .load(&state(Some("Blutonium-238"), "7.8", "0.05"), MissionTime::DesignTime)
            .unwrap();
        assert_eq!(unit.phase(), UnitPhase::Active);
        assert_eq!(d.decay_percent, 100.0);
        assert_eq!(d.fuel_remaining, 100.0);
        assert!((d.power_output - 1.40).abs() < 1e-9, "got {}", d.power_output);
        assert_eq!(d.band, EfficiencyBand::Nominal);
    }

    #[test]
    fn test_reference_unit_after_one_half_life() {
        let catalog = blutonium_only();
        let mut unit = GeneratorUnit::new(&catalog);
        let fresh = unit
            .load(&state(Some("Blutonium-238"), "7.8", "0.05"), MissionTime::DesignTime)
            .unwrap();
        let aged = unit.update(MissionTime::Elapsed(25.43)).unwrap();
        assert!((aged.decay_percent - 50.0).abs() < 1e-12);
        assert!((aged.power_output - fresh.power_output / 2.0).abs() < 1e-9);
        assert_eq!(aged.band, EfficiencyBand::BelowThreeQuarters);
    }

    #[test]
    fn test_fuel_remaining_tie_rounds_to_even() {
        let catalog = FuelCatalog::load(&[record("Kerbium-1", "1", "0.5")]);
        let mut unit = GeneratorUnit::new(&catalog);
        unit.load(&state(Some("Kerbium-1"), "0.75", "0.05"), MissionTime::DesignTime)
            .unwrap();
        // 100 * 0.5 * 0.75 * 0.05 / 15 = 0.125 exactly
        assert!((unit.display().unwrap().power_output - 0.12).abs() < 1e-12);

        let aged = unit.update(MissionTime::Elapsed(3.0)).unwrap();
        assert_eq!(aged.decay_percent, 12.5);
        assert_eq!(aged.fuel_remaining, 12.0);

        unit.set_rounding(RoundingMode::HalfAwayFromZero);
        let away = unit.update(MissionTime::Elapsed(3.0)).unwrap();
        assert_eq!(away.fuel_remaining, 13.0);
    }

    #[test]
    fn test_update_is_idempotent() {
        let catalog = three_fuels();
        let mut unit = GeneratorUnit::new(&catalog);
        unit.load(&state(Some("Kerbium-90"), "10", "0.18"), MissionTime::DesignTime)
            .unwrap();
        let t = MissionTime::from_mission_seconds(5.0e6);
        let a = unit.update(t).unwrap();
        let b = unit.update(t).unwrap();
        assert_eq!(a, b);
        assert_eq!(unit.display(), Some(&b));
    }

    #[test]
    fn test_unresolved_fuel_falls_back_to_default() {
        let catalog = three_fuels();
        let mut unit = GeneratorUnit::new(&catalog);
        unit.load(&state(Some("Unobtainium"), "5", "0.05"), MissionTime::DesignTime)
            .unwrap();
        let fuel = unit.fuel().unwrap();
        assert_eq!(fuel.name(), "Blutonium-238");
        assert_eq!(fuel.half_life(), 25.43);
        assert_eq!(fuel.energy_density(), 0.54);
    }

    #[test]
    fn test_absent_fields_use_defaults() {
        let catalog = three_fuels();
        let mut unit = GeneratorUnit::new(&catalog);
        let d = unit.load(&UnitState::default(), MissionTime::DesignTime).unwrap();
        assert_eq!(d.fuel_name, "Blutonium-238");
        assert_eq!(unit.fuel_mass(), DEFAULT_FUEL_MASS);
        assert_eq!(unit.efficiency(), DEFAULT_EFFICIENCY);
    }

    #[test]
    fn test_unparsable_fields_use_defaults() {
        let catalog = three_fuels();
        let mut unit = GeneratorUnit::new(&catalog);
        unit.load(&state(Some("Kerbium-90"), "heavy", "n/a"), MissionTime::DesignTime)
            .unwrap();
        assert_eq!(unit.fuel_mass(), DEFAULT_FUEL_MASS);
        assert_eq!(unit.efficiency(), DEFAULT_EFFICIENCY);
        assert_eq!(unit.fuel().unwrap().name(), "Kerbium-90");
    }

    #[test]
    fn test_invalid_mass_or_efficiency_is_surfaced() {
        let catalog = three_fuels();
        let mut unit = GeneratorUnit::new(&catalog);
        let err = unit
            .load(&state(Some("Kerbium-90"), "0", "0.05"), MissionTime::DesignTime)
            .unwrap_err();
        assert!(matches!(err, RtgError::InvalidConfiguration(_)));
        assert_eq!(unit.phase(), UnitPhase::Uninitialized);

        assert!(unit
            .load(&state(Some("Kerbium-90"), "5", "1.5"), MissionTime::DesignTime)
            .is_err());
        assert!(unit
            .load(&state(Some("Kerbium-90"), "-2", "0.05"), MissionTime::DesignTime)
            .is_err());
        assert_eq!(unit.phase(), UnitPhase::Uninitialized);
    }

    #[test]
    fn test_update_before_load() {
        let catalog = three_fuels();
        let mut unit = GeneratorUnit::new(&catalog);
        assert!(matches!(
            unit.update(MissionTime::DesignTime),
            Err(RtgError::Uninitialized)
        ));
        assert!(unit.next_fuel().is_err());
    }

    #[test]
    fn test_negative_elapsed_time_rejected() {
        let catalog = three_fuels();
        let mut unit = GeneratorUnit::new(&catalog);
        unit.load(&UnitState::default(), MissionTime::DesignTime).unwrap();
        let before = unit.display().cloned();
        assert!(unit.update(MissionTime::Elapsed(-1.0)).is_err());
        assert_eq!(unit.display().cloned(), before);
    }

    #[test]
    fn test_fuel_navigation() {
        let catalog = three_fuels();
        let mut unit = GeneratorUnit::new(&catalog);
        unit.load(&state(Some("Kerbaricium-241"), "5", "0.05"), MissionTime::DesignTime)
            .unwrap();
        assert_eq!(unit.next_fuel().unwrap().name(), "Kerbium-90");
        assert_eq!(unit.previous_fuel().unwrap().name(), "Kerbaricium-241");
        assert_eq!(unit.previous_fuel().unwrap().name(), "Blutonium-238");
        assert_eq!(unit.select_fuel("Kerbium-90").unwrap().name(), "Kerbium-90");
        let d = unit.update(MissionTime::DesignTime).unwrap();
        assert_eq!(d.fuel_name, "Kerbium-90");
        assert_eq!(d.half_life, 8.352);
    }

    #[test]
    fn test_setters_validate() {
        let catalog = three_fuels();
        let mut unit = GeneratorUnit::new(&catalog);
        assert!(unit.set_fuel_mass(0.0).is_err());
        assert!(unit.set_efficiency(0.0).is_err());
        assert!(unit.set_efficiency(1.01).is_err());
        unit.set_fuel_mass(12.0).unwrap();
        unit.set_efficiency(1.0).unwrap();
        assert_eq!(unit.fuel_mass(), 12.0);
        assert_eq!(unit.efficiency(), 1.0);
    }

    #[test]
    fn test_thermocouple_cycle() {
        let catalog = three_fuels();
        let mut unit = GeneratorUnit::new(&catalog);
        assert_eq!(unit.thermocouple(), Some(ThermocoupleKind::KerbaniumTelluride));
        assert_eq!(unit.next_thermocouple(), ThermocoupleKind::Thermionic);
        assert_eq!(unit.efficiency(), 0.18);
        unit.set_efficiency(0.42).unwrap();
        assert_eq!(unit.thermocouple(), None);
        assert_eq!(unit.next_thermocouple(), ThermocoupleKind::KerbaniumTelluride);
    }

    #[test]
    fn test_save_then_load_restores_configuration() {
        let catalog = three_fuels();
        let mut unit = GeneratorUnit::new(&catalog);
        unit.load(&state(Some("Kerbaricium-241"), "12.5", "0.3"), MissionTime::DesignTime)
            .unwrap();
        let saved = unit.save();
        assert_eq!(saved.fuel.as_deref(), Some("Kerbaricium-241"));
        assert_eq!(saved.fuel_mass.as_deref(), Some("12.5"));
        assert_eq!(saved.efficiency.as_deref(), Some("0.3"));

        let mut restored = GeneratorUnit::new(&catalog);
        let a = restored.load(&saved, MissionTime::Elapsed(3.0)).unwrap();
        let b = unit.update(MissionTime::Elapsed(3.0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_uninitialized_save_omits_fuel() {
        let catalog = three_fuels();
        let unit = GeneratorUnit::new(&catalog);
        let saved = unit.save();
        assert!(saved.fuel.is_none());
        assert_eq!(saved.fuel_mass.as_deref(), Some("5"));
    }

    #[test]
    fn test_power_for_tick() {
        let catalog = blutonium_only();
        let mut unit = GeneratorUnit::new(&catalog);
        unit.load(&state(Some("Blutonium-238"), "7.8", "0.05"), MissionTime::DesignTime)
            .unwrap();
        let energy = unit.power_for_tick(MissionTime::DesignTime, 0.5).unwrap();
        assert!((energy - 0.70).abs() < 1e-9);
        assert!(unit.power_for_tick(MissionTime::DesignTime, -0.1).is_err());
    }

    #[test]
    fn test_secondary_lifepoint_selection() {
        let catalog = three_fuels();
        let mut unit = GeneratorUnit::new(&catalog);
        unit.load(&state(Some("Kerbium-90"), "5", "0.05"), MissionTime::DesignTime)
            .unwrap();
        let quarter = unit.update(MissionTime::DesignTime).unwrap();
        assert!((quarter.time_to_three_quarters - 2.088).abs() < 1e-9);
        assert!((quarter.time_to_secondary - 6.264).abs() < 1e-9);

        unit.set_secondary_lifepoint(SecondaryLifepoint::Half);
        let half = unit.update(MissionTime::DesignTime).unwrap();
        assert!((half.time_to_secondary - 4.176).abs() < 1e-9);
    }

    #[test]
    fn test_units_share_one_catalog() {
        let catalog = three_fuels();
        let mut a = GeneratorUnit::new(&catalog);
        let mut b = GeneratorUnit::new(&catalog);
        a.load(&state(Some("Kerbium-90"), "5", "0.05"), MissionTime::DesignTime)
            .unwrap();
        b.load(&state(Some("Kerbium-90"), "5", "0.05"), MissionTime::DesignTime)
            .unwrap();
        assert!(std::ptr::eq(a.fuel().unwrap(), b.fuel().unwrap()));
    }

    #[test]
    fn test_fuel_volume() {
        let catalog = FuelCatalog::load(&[FuelRecord {
            density: Some("0.02".to_string()),
            ..record("Kerbium-90", "8.352", "0.46")
        }]);
        let mut unit = GeneratorUnit::new(&catalog);
        assert!(unit.fuel_volume().is_err());
        unit.load(&state(Some("Kerbium-90"), "4", "0.05"), MissionTime::DesignTime)
            .unwrap();
        assert!((unit.fuel_volume().unwrap() - 0.005).abs() < 1e-12);
    }
}
