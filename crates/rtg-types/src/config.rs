// ─────────────────────────────────────────────────────────────────────
// RTG Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::UNIT_STATE_VERSION;
use crate::error::{RtgError, RtgResult};

/// Rounding convention applied to power output and lifepoint projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// 12.5 -> 13, -12.5 -> -13
    HalfAwayFromZero,
    /// Banker's rounding, the host's `Math.Round` default: 12.5 -> 12, 13.5 -> 14
    #[default]
    HalfEven,
}

/// Which second lifepoint a unit reports next to the three-quarter point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecondaryLifepoint {
    #[default]
    Quarter,
    Half,
}

impl SecondaryLifepoint {
    /// Output fraction the projection targets.
    pub fn fraction(self) -> f64 {
        match self {
            SecondaryLifepoint::Quarter => 0.25,
            SecondaryLifepoint::Half => 0.5,
        }
    }
}

/// One raw record of a catalog document.
///
/// Every value is a decimal-formatted string; parsing happens when the
/// catalog builds its definitions. Fields not listed here are ignored, so
/// non-fuel resource definitions can share the same document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub half_life: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_density: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
}

impl FuelRecord {
    /// Only records carrying a half-life describe a fuel.
    pub fn is_fuel(&self) -> bool {
        self.half_life.is_some()
    }
}

/// Catalog document: `{"RESOURCE_DEFINITION": [ {..}, {..} ]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(rename = "RESOURCE_DEFINITION", default)]
    pub records: Vec<FuelRecord>,
}

impl CatalogDocument {
    pub fn from_file(path: &str) -> RtgResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(contents: &str) -> RtgResult<Self> {
        let doc: Self = serde_json::from_str(contents)?;
        Ok(doc)
    }

    pub fn to_json_string(&self) -> RtgResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Persisted configuration of one generator unit.
///
/// `fuel` absent means "use defaults". Numeric values stay strings so a
/// corrupt entry degrades to its default instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitState {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_mass: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<String>,
}

fn default_version() -> u32 {
    UNIT_STATE_VERSION
}

impl Default for UnitState {
    fn default() -> Self {
        UnitState {
            version: default_version(),
            fuel: None,
            fuel_mass: None,
            efficiency: None,
        }
    }
}

impl UnitState {
    pub fn from_file(path: &str) -> RtgResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(contents: &str) -> RtgResult<Self> {
        let state: Self = serde_json::from_str(contents)?;
        Ok(state)
    }

    pub fn to_json_string(&self) -> RtgResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Parse a decimal string field. Non-finite values are rejected.
pub fn parse_decimal(field: &str, raw: &str) -> RtgResult<f64> {
    let parse_error = || RtgError::ConfigParse {
        field: field.to_string(),
        value: raw.to_string(),
    };
    let value: f64 = raw.trim().parse().map_err(|_| parse_error())?;
    if !value.is_finite() {
        return Err(parse_error());
    }
    Ok(value)
}

/// Shortest decimal text that parses back to the same value.
pub fn format_decimal(value: f64) -> String {
    value.to_string()
}
