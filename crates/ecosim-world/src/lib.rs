//! Ecosystem simulation engine.
//!
//! This module implements the organisms, the behaviors they opt into, and
//! the ecosystem that advances them day by day.

pub mod capability;
pub mod organism;
pub mod ecosystem;
pub mod report;
pub mod seed;

pub use capability::{HuntOutcome, Living, Predator, Reproducible};
pub use organism::{Animal, Microorganism, Organism, OrganismData, OrganismSpec, Plant};
pub use ecosystem::Ecosystem;
pub use report::{DayReport, EcosystemEvent, RunSummary, StatusReport};
