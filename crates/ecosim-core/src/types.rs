//! Core type definitions for the simulation.

use crate::{EnergyConfig, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an organism instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrganismId(pub Uuid);

impl OrganismId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrganismId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrganismId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three kinds of living things
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KindTag {
    Animal,
    Plant,
    Microorganism,
}

impl KindTag {
    pub fn all() -> [KindTag; 3] {
        [KindTag::Animal, KindTag::Plant, KindTag::Microorganism]
    }
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KindTag::Animal => "Animal",
            KindTag::Plant => "Plant",
            KindTag::Microorganism => "Microorganism",
        };
        f.write_str(name)
    }
}

/// Attributes shared by every organism regardless of kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    pub energy: f64,
    pub age: u64,
    pub size: f64,
}

impl Vitals {
    /// Build vitals, rejecting negative or non-finite energy and size
    pub fn new(energy: f64, age: u64, size: f64) -> Result<Self> {
        if !energy.is_finite() || energy < 0.0 {
            return Err(Error::Validation(format!(
                "energy must be a non-negative number, got {}",
                energy
            )));
        }
        if !size.is_finite() || size < 0.0 {
            return Err(Error::Validation(format!(
                "size must be a non-negative number, got {}",
                size
            )));
        }

        Ok(Self { energy, age, size })
    }

    /// Fixed starting stats of an offspring
    pub fn newborn(config: &EnergyConfig) -> Self {
        Self {
            energy: config.offspring_energy,
            age: 0,
            size: config.offspring_size,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.energy > 0.0
    }

    /// One year older, `cost` energy poorer. Age saturates at `u64::MAX`.
    pub fn age_one_year(&mut self, cost: f64) {
        self.age = self.age.saturating_add(1);
        self.energy -= cost;
    }

    pub fn add_energy(&mut self, amount: f64) {
        self.energy += amount;
    }
}
