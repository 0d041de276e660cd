// ─────────────────────────────────────────────────────────────────────
// RTG Core — Decay Engine
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Radioisotope thermoelectric generator model.
//!
//! - `decay`, `power`, `lifepoint`: pure per-tick calculators
//! - `catalog`: load-once fuel definitions with cyclic navigation
//! - `thermocouple`, `clock`: host-facing presets and time conversion
//! - `generator`: one RTG unit tying the above together

pub mod catalog;
pub mod clock;
pub mod decay;
pub mod generator;
pub mod lifepoint;
pub mod power;
pub mod thermocouple;

pub use catalog::{FuelCatalog, FuelDefinition};
pub use clock::MissionTime;
pub use generator::{GeneratorUnit, UnitPhase};
pub use thermocouple::ThermocoupleKind;
