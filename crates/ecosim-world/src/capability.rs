//! Behaviors organisms share or opt into.
//!
//! Every organism is [`Living`]. Kinds that can breed implement
//! [`Reproducible`]; kinds that hunt implement [`Predator`]. The ecosystem
//! discovers these through the capability accessors on
//! [`Organism`](crate::Organism), never by matching on concrete kinds.

use crate::organism::Organism;
use ecosim_core::{EnergyConfig, KindTag, OrganismId, Vitals};
use tracing::debug;

/// State and lifecycle common to every organism
pub trait Living {
    fn id(&self) -> OrganismId;
    fn kind(&self) -> KindTag;
    /// Species, plant kind or habitat, depending on the kind
    fn label(&self) -> &str;
    fn vitals(&self) -> &Vitals;
    fn vitals_mut(&mut self) -> &mut Vitals;

    fn age_one_year(&mut self, energy: &EnergyConfig) {
        self.vitals_mut().age_one_year(energy.aging_cost);
    }

    fn is_alive(&self) -> bool {
        self.vitals().is_alive()
    }
}

/// Organisms that produce offspring of their own kind and label
pub trait Reproducible: Living {
    /// Build one offspring with newborn stats
    fn reproduce(&self, energy: &EnergyConfig) -> Organism;
}

/// Result of a hunt
#[derive(Debug)]
pub enum HuntOutcome {
    /// The prey, now owned by the caller, and the position it was taken from
    Caught { prey: Organism, position: usize },
    NoPrey,
}

/// Organisms that hunt
pub trait Predator: Living {
    /// Take the first candidate as prey.
    ///
    /// Any kind qualifies and there is no self-exclusion; the predator gains
    /// `hunt_gain` energy and the prey leaves `candidates`. An empty slice of
    /// candidates leaves everything untouched.
    fn hunt(&mut self, candidates: &mut Vec<Organism>, energy: &EnergyConfig) -> HuntOutcome {
        if candidates.is_empty() {
            debug!(hunter = %self.id(), label = self.label(), "Found no prey");
            return HuntOutcome::NoPrey;
        }

        let position = 0;
        let prey = candidates.remove(position);
        self.vitals_mut().add_energy(energy.hunt_gain);

        debug!(
            hunter = %self.id(),
            prey = %prey.id(),
            prey_kind = %prey.kind(),
            energy = self.vitals().energy,
            "Hunt succeeded"
        );

        HuntOutcome::Caught { prey, position }
    }
}
