//! Organism kinds and their state.

use crate::capability::{Living, Predator, Reproducible};
use ecosim_core::{EnergyConfig, KindTag, OrganismId, Result, Vitals};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// An animal, identified by its species
#[derive(Debug, Clone)]
pub struct Animal {
    pub id: OrganismId,
    pub vitals: Vitals,
    pub species: String,
}

impl Animal {
    pub fn new(energy: f64, age: u64, size: f64, species: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: OrganismId::new(),
            vitals: Vitals::new(energy, age, size)?,
            species: species.into(),
        })
    }
}

/// A plant, identified by its kind, e.g. "Oak Tree"
#[derive(Debug, Clone)]
pub struct Plant {
    pub id: OrganismId,
    pub vitals: Vitals,
    pub kind: String,
}

impl Plant {
    pub fn new(energy: f64, age: u64, size: f64, kind: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: OrganismId::new(),
            vitals: Vitals::new(energy, age, size)?,
            kind: kind.into(),
        })
    }
}

/// A microorganism, identified by its habitat
#[derive(Debug, Clone)]
pub struct Microorganism {
    pub id: OrganismId,
    pub vitals: Vitals,
    pub habitat: String,
}

impl Microorganism {
    pub fn new(energy: f64, age: u64, size: f64, habitat: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: OrganismId::new(),
            vitals: Vitals::new(energy, age, size)?,
            habitat: habitat.into(),
        })
    }

    /// Gain `absorb_gain` energy. Always succeeds.
    pub fn absorb_nutrients(&mut self, energy: &EnergyConfig) {
        self.vitals.add_energy(energy.absorb_gain);
        trace!(id = %self.id, energy = self.vitals.energy, "Absorbed nutrients");
    }
}

impl Living for Animal {
    fn id(&self) -> OrganismId {
        self.id
    }

    fn kind(&self) -> KindTag {
        KindTag::Animal
    }

    fn label(&self) -> &str {
        &self.species
    }

    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}

impl Reproducible for Animal {
    fn reproduce(&self, energy: &EnergyConfig) -> Organism {
        Organism::Animal(Animal {
            id: OrganismId::new(),
            vitals: Vitals::newborn(energy),
            species: self.species.clone(),
        })
    }
}

impl Predator for Animal {}

impl Living for Plant {
    fn id(&self) -> OrganismId {
        self.id
    }

    fn kind(&self) -> KindTag {
        KindTag::Plant
    }

    fn label(&self) -> &str {
        &self.kind
    }

    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}

impl Reproducible for Plant {
    fn reproduce(&self, energy: &EnergyConfig) -> Organism {
        Organism::Plant(Plant {
            id: OrganismId::new(),
            vitals: Vitals::newborn(energy),
            kind: self.kind.clone(),
        })
    }
}

impl Living for Microorganism {
    fn id(&self) -> OrganismId {
        self.id
    }

    fn kind(&self) -> KindTag {
        KindTag::Microorganism
    }

    fn label(&self) -> &str {
        &self.habitat
    }

    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}

/// Any organism living in an ecosystem
#[derive(Debug, Clone)]
pub enum Organism {
    Animal(Animal),
    Plant(Plant),
    Microorganism(Microorganism),
}

impl Organism {
    pub fn from_spec(spec: &OrganismSpec) -> Result<Self> {
        let OrganismSpec { kind, label, energy, age, size } = spec;
        let organism = match kind {
            KindTag::Animal => Organism::Animal(Animal::new(*energy, *age, *size, label.as_str())?),
            KindTag::Plant => Organism::Plant(Plant::new(*energy, *age, *size, label.as_str())?),
            KindTag::Microorganism => {
                Organism::Microorganism(Microorganism::new(*energy, *age, *size, label.as_str())?)
            }
        };
        Ok(organism)
    }

    fn as_living(&self) -> &dyn Living {
        match self {
            Organism::Animal(animal) => animal,
            Organism::Plant(plant) => plant,
            Organism::Microorganism(micro) => micro,
        }
    }

    fn as_living_mut(&mut self) -> &mut dyn Living {
        match self {
            Organism::Animal(animal) => animal,
            Organism::Plant(plant) => plant,
            Organism::Microorganism(micro) => micro,
        }
    }

    pub fn as_reproducible(&self) -> Option<&dyn Reproducible> {
        match self {
            Organism::Animal(animal) => Some(animal),
            Organism::Plant(plant) => Some(plant),
            Organism::Microorganism(_) => None,
        }
    }

    pub fn as_predator_mut(&mut self) -> Option<&mut dyn Predator> {
        match self {
            Organism::Animal(animal) => Some(animal),
            Organism::Plant(_) | Organism::Microorganism(_) => None,
        }
    }

    pub fn as_microorganism_mut(&mut self) -> Option<&mut Microorganism> {
        match self {
            Organism::Microorganism(micro) => Some(micro),
            Organism::Animal(_) | Organism::Plant(_) => None,
        }
    }
}

impl Living for Organism {
    fn id(&self) -> OrganismId {
        self.as_living().id()
    }

    fn kind(&self) -> KindTag {
        self.as_living().kind()
    }

    fn label(&self) -> &str {
        self.as_living().label()
    }

    fn vitals(&self) -> &Vitals {
        self.as_living().vitals()
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        self.as_living_mut().vitals_mut()
    }
}

impl From<Animal> for Organism {
    fn from(animal: Animal) -> Self {
        Organism::Animal(animal)
    }
}

impl From<Plant> for Organism {
    fn from(plant: Plant) -> Self {
        Organism::Plant(plant)
    }
}

impl From<Microorganism> for Organism {
    fn from(micro: Microorganism) -> Self {
        Organism::Microorganism(micro)
    }
}

/// Parameters for building an organism
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganismSpec {
    pub kind: KindTag,
    pub label: String,
    pub energy: f64,
    pub age: u64,
    pub size: f64,
}

impl OrganismSpec {
    pub fn new(kind: KindTag, label: impl Into<String>, energy: f64, age: u64, size: f64) -> Self {
        Self {
            kind,
            label: label.into(),
            energy,
            age,
            size,
        }
    }

    pub fn animal(species: impl Into<String>, energy: f64, age: u64, size: f64) -> Self {
        Self::new(KindTag::Animal, species, energy, age, size)
    }

    pub fn plant(kind: impl Into<String>, energy: f64, age: u64, size: f64) -> Self {
        Self::new(KindTag::Plant, kind, energy, age, size)
    }

    pub fn microorganism(habitat: impl Into<String>, energy: f64, age: u64, size: f64) -> Self {
        Self::new(KindTag::Microorganism, habitat, energy, age, size)
    }
}

/// Serializable organism data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganismData {
    pub id: OrganismId,
    pub kind: KindTag,
    pub label: String,
    pub energy: f64,
    pub age: u64,
    pub size: f64,
}

impl From<&Organism> for OrganismData {
    fn from(org: &Organism) -> Self {
        let vitals = org.vitals();
        Self {
            id: org.id(),
            kind: org.kind(),
            label: org.label().to_string(),
            energy: vitals.energy,
            age: vitals.age,
            size: vitals.size,
        }
    }
}
