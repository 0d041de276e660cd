// ─────────────────────────────────────────────────────────────────────
// RTG Core — Fuel Catalog
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fuel definitions and the load-once catalog that owns them.
//!
//! The catalog is built from structured records, then only read. Units
//! borrow definitions from it, so it must outlive every unit resolving
//! against it.

use std::fmt;
use std::io::Write;

use serde::Serialize;

use rtg_types::config::{format_decimal, parse_decimal, CatalogDocument, FuelRecord};
use rtg_types::constants::{
    DEFAULT_COST, DEFAULT_DENSITY, DEFAULT_ENERGY_DENSITY, DEFAULT_FUEL_NAME, DEFAULT_HALF_LIFE,
};
use rtg_types::error::{RtgError, RtgResult};

/// One radioisotope fuel type. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelDefinition {
    name: String,
    /// [years]
    half_life: f64,
    /// Output per kg at full decay and full efficiency.
    energy_density: f64,
    density: f64,
    cost: f64,
}

impl FuelDefinition {
    pub fn new(
        name: impl Into<String>,
        half_life: f64,
        energy_density: f64,
        density: f64,
        cost: f64,
    ) -> RtgResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RtgError::InvalidConfiguration(
                "fuel name must not be empty".to_string(),
            ));
        }
        if !half_life.is_finite() || half_life <= 0.0 {
            return Err(RtgError::InvalidConfiguration(format!(
                "fuel {name}: half-life must be positive, got {half_life}"
            )));
        }
        if !energy_density.is_finite() || energy_density <= 0.0 {
            return Err(RtgError::InvalidConfiguration(format!(
                "fuel {name}: energy density must be positive, got {energy_density}"
            )));
        }
        if !density.is_finite() || density < 0.0 {
            return Err(RtgError::InvalidConfiguration(format!(
                "fuel {name}: density must be non-negative, got {density}"
            )));
        }
        if !cost.is_finite() || cost < 0.0 {
            return Err(RtgError::InvalidConfiguration(format!(
                "fuel {name}: cost must be non-negative, got {cost}"
            )));
        }
        Ok(FuelDefinition {
            name,
            half_life,
            energy_density,
            density,
            cost,
        })
    }

    /// Build from a raw record. Every field is required; a missing,
    /// unparsable or out-of-range field is a `ConfigParse` error naming it.
    pub fn from_record(record: &FuelRecord) -> RtgResult<Self> {
        let name = required("name", record.name.as_deref())?;
        if name.trim().is_empty() {
            return Err(parse_error("name", name));
        }
        let half_life = field_value("halfLife", record.half_life.as_deref(), false)?;
        let energy_density =
            field_value("energyDensity", record.energy_density.as_deref(), false)?;
        let density = field_value("density", record.density.as_deref(), true)?;
        let cost = field_value("cost", record.cost.as_deref(), true)?;
        Self::new(name, half_life, energy_density, density, cost)
    }

    pub fn to_record(&self) -> FuelRecord {
        FuelRecord {
            name: Some(self.name.clone()),
            half_life: Some(format_decimal(self.half_life)),
            energy_density: Some(format_decimal(self.energy_density)),
            density: Some(format_decimal(self.density)),
            cost: Some(format_decimal(self.cost)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn half_life(&self) -> f64 {
        self.half_life
    }

    pub fn energy_density(&self) -> f64 {
        self.energy_density
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// `density / mass`, as the part menu reports it.
    pub fn volume(&self, fuel_mass: f64) -> RtgResult<f64> {
        if !fuel_mass.is_finite() || fuel_mass <= 0.0 {
            return Err(RtgError::InvalidConfiguration(format!(
                "fuel mass must be positive, got {fuel_mass}"
            )));
        }
        Ok(self.density / fuel_mass)
    }
}

impl Default for FuelDefinition {
    fn default() -> Self {
        FuelDefinition {
            name: DEFAULT_FUEL_NAME.to_string(),
            half_life: DEFAULT_HALF_LIFE,
            energy_density: DEFAULT_ENERGY_DENSITY,
            density: DEFAULT_DENSITY,
            cost: DEFAULT_COST,
        }
    }
}

impl fmt::Display for FuelDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Half-life: {}", self.half_life)?;
        write!(f, "Energy Density: {}", self.energy_density)
    }
}

fn parse_error(field: &str, value: &str) -> RtgError {
    RtgError::ConfigParse {
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn required<'a>(field: &str, value: Option<&'a str>) -> RtgResult<&'a str> {
    value.ok_or_else(|| parse_error(field, ""))
}

/// Required decimal field, positive (or non-negative with `allow_zero`).
fn field_value(field: &str, raw: Option<&str>, allow_zero: bool) -> RtgResult<f64> {
    let raw = required(field, raw)?;
    let value = parse_decimal(field, raw)?;
    if value < 0.0 || (value == 0.0 && !allow_zero) {
        return Err(parse_error(field, raw));
    }
    Ok(value)
}

/// Ordered, duplicate-free collection of fuel definitions.
#[derive(Debug, Clone, Default)]
pub struct FuelCatalog {
    fuels: Vec<FuelDefinition>,
    fallback: FuelDefinition,
}

impl FuelCatalog {
    /// Build from raw records.
    ///
    /// Records without a half-life are not fuels and are skipped silently.
    /// Malformed records and duplicate names are skipped with a warning;
    /// the first definition of a name wins. Never fails.
    pub fn load(records: &[FuelRecord]) -> Self {
        let mut catalog = FuelCatalog::default();
        for record in records.iter().filter(|r| r.is_fuel()) {
            let added = FuelDefinition::from_record(record).and_then(|fuel| catalog.insert(fuel));
            if let Err(e) = added {
                log::warn!("Skipping fuel record {:?}: {e}", record.name);
            }
        }
        log::info!("Fuel catalog loaded with {} definitions", catalog.len());
        catalog.dump();
        catalog
    }

    pub fn from_document(doc: &CatalogDocument) -> Self {
        Self::load(&doc.records)
    }

    pub fn from_json_str(contents: &str) -> RtgResult<Self> {
        Ok(Self::from_document(&CatalogDocument::from_json_str(contents)?))
    }

    /// Load from a JSON catalog file. Only IO or document-level JSON
    /// failures are errors; bad records are skipped.
    pub fn from_file(path: &str) -> RtgResult<Self> {
        Ok(Self::from_document(&CatalogDocument::from_file(path)?))
    }

    fn insert(&mut self, fuel: FuelDefinition) -> RtgResult<()> {
        if self.contains(fuel.name()) {
            return Err(RtgError::DuplicateDefinition(fuel.name));
        }
        self.fuels.push(fuel);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.fuels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fuels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FuelDefinition> {
        self.fuels.iter()
    }

    pub fn get(&self, index: usize) -> Option<&FuelDefinition> {
        self.fuels.get(index)
    }

    /// Definition substituted for names the catalog does not know.
    pub fn default_definition(&self) -> &FuelDefinition {
        &self.fallback
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// First definition with exactly this name.
    pub fn find_by_name(&self, name: &str) -> Option<&FuelDefinition> {
        self.fuels.iter().find(|f| f.name == name)
    }

    /// Definition for `name`, or the default definition when unknown.
    pub fn resolve(&self, name: &str) -> &FuelDefinition {
        match self.find_by_name(name) {
            Some(fuel) => fuel,
            None => {
                let err = RtgError::UnresolvedReference(name.to_string());
                log::warn!("{err}, using {}", self.fallback.name);
                &self.fallback
            }
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fuels.iter().position(|f| f.name == name)
    }

    /// Entry after `current`, wrapping to the first. Unknown `current`
    /// yields the first entry.
    pub fn next(&self, current: &FuelDefinition) -> &FuelDefinition {
        if self.fuels.is_empty() {
            return &self.fallback;
        }
        let index = match self.position(current.name()) {
            Some(i) => (i + 1) % self.fuels.len(),
            None => 0,
        };
        &self.fuels[index]
    }

    /// Entry before `current`, wrapping to the last. Unknown `current`
    /// yields the last entry.
    pub fn previous(&self, current: &FuelDefinition) -> &FuelDefinition {
        if self.fuels.is_empty() {
            return &self.fallback;
        }
        let last = self.fuels.len() - 1;
        let index = match self.position(current.name()) {
            Some(0) | None => last,
            Some(i) => i - 1,
        };
        &self.fuels[index]
    }

    pub fn to_records(&self) -> Vec<FuelRecord> {
        self.fuels.iter().map(FuelDefinition::to_record).collect()
    }

    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            records: self.to_records(),
        }
    }

    /// Write the catalog as a JSON document, one record per definition.
    pub fn save<W: Write>(&self, mut sink: W) -> RtgResult<()> {
        serde_json::to_writer_pretty(&mut sink, &self.to_document())?;
        sink.flush()?;
        Ok(())
    }

    /// Log every definition at debug level.
    pub fn dump(&self) {
        for (i, fuel) in self.fuels.iter().enumerate() {
            log::debug!("Fuel list dump {}: {}", i + 1, fuel);
        }
    }
}

impl<'a> IntoIterator for &'a FuelCatalog {
    type Item = &'a FuelDefinition;
    type IntoIter = std::slice::Iter<'a, FuelDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.fuels.iter()
    }
}
