//! The ecosystem: owns the organisms and advances simulated days.

use crate::capability::{HuntOutcome, Living};
use crate::organism::{Organism, OrganismData, OrganismSpec};
use crate::report::{DayReport, EcosystemEvent, RunSummary, StatusReport};
use ecosim_core::{PopulationStats, ReproductionPolicy, Result, SimulationConfig};
use tracing::{debug, event, info, instrument, trace, Level};

pub struct Ecosystem {
    organisms: Vec<Organism>,
    config: SimulationConfig,
    day: u64,
}

impl Ecosystem {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.energy.validate()?;

        Ok(Self {
            organisms: Vec::new(),
            config,
            day: 0,
        })
    }

    /// Build an ecosystem seeded with one organism per spec, in order
    pub fn from_specs<I>(config: SimulationConfig, specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = OrganismSpec>,
    {
        let mut ecosystem = Self::new(config)?;
        for spec in specs {
            ecosystem.add_organism(Organism::from_spec(&spec)?);
        }
        Ok(ecosystem)
    }

    pub fn add_organism(&mut self, organism: impl Into<Organism>) {
        let organism = organism.into();
        trace!(id = %organism.id(), kind = %organism.kind(), label = organism.label(), "Organism added");
        self.organisms.push(organism);
    }

    pub fn organisms(&self) -> &[Organism] {
        &self.organisms
    }

    pub fn len(&self) -> usize {
        self.organisms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }

    /// Number of days simulated so far
    pub fn day(&self) -> u64 {
        self.day
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Advance one day.
    ///
    /// Each organism takes its whole turn (age, reproduce, hunt, absorb)
    /// before the next one moves, so an early hunter can remove a later
    /// organism before that organism acts. The acting organism is lifted out
    /// of the sequence for its turn; the rest of the sequence is what it
    /// hunts from. Organisms with no energy left are dropped once everyone
    /// has had their turn, and under [`ReproductionPolicy::Deferred`] the
    /// day's offspring are appended after that.
    #[instrument(skip(self), fields(day = self.day + 1, population = self.organisms.len()))]
    pub fn simulate_day(&mut self) -> DayReport {
        self.day += 1;
        let mut report = DayReport::new(self.day);
        let mut nursery = Vec::new();

        let mut cursor = 0;
        while cursor < self.organisms.len() {
            let mut actor = self.organisms.remove(cursor);

            // Prey taken from in front of the cursor shifts everyone after it left by one
            if let Some(position) = self.take_turn(&mut actor, &mut report, &mut nursery) {
                if position < cursor {
                    cursor -= 1;
                }
            }

            self.organisms.insert(cursor, actor);
            cursor += 1;
        }

        self.remove_dead_organisms(&mut report);

        for offspring in nursery {
            report.record(EcosystemEvent::Joined {
                id: offspring.id(),
                kind: offspring.kind(),
                label: offspring.label().to_string(),
            });
            self.organisms.push(offspring);
        }

        report.population = self.organisms.len();

        info!(
            event = "day_complete",
            day = self.day,
            population = report.population,
            hunted = report.hunted,
            died = report.died,
            born = report.born,
            joined = report.joined,
            "Day complete"
        );
        self.emit_population_metrics();

        report
    }

    /// Advance `days` days
    #[instrument(skip(self))]
    pub fn run(&mut self, days: u64) -> RunSummary {
        info!("Starting simulation for {} days", days);

        let mut reports = Vec::new();
        for _ in 0..days {
            reports.push(self.simulate_day());
        }

        RunSummary {
            days: reports,
            final_stats: self.stats(),
        }
    }

    pub fn display_status(&self) -> StatusReport {
        StatusReport {
            day: self.day,
            organisms: self.organisms.iter().map(OrganismData::from).collect(),
        }
    }

    pub fn stats(&self) -> PopulationStats {
        PopulationStats::collect(self.organisms.iter().map(|o| (o.kind(), o.vitals())))
    }

    /// One organism's turn. Returns where its prey sat in the remaining
    /// sequence, if it caught one.
    fn take_turn(
        &mut self,
        actor: &mut Organism,
        report: &mut DayReport,
        nursery: &mut Vec<Organism>,
    ) -> Option<usize> {
        let energy = &self.config.energy;

        actor.age_one_year(energy);
        report.record(EcosystemEvent::Aged {
            id: actor.id(),
            kind: actor.kind(),
            label: actor.label().to_string(),
            age: actor.vitals().age,
            energy: actor.vitals().energy,
        });

        if !actor.is_alive() {
            debug!(id = %actor.id(), label = actor.label(), "Out of energy, skipping turn");
            return None;
        }

        if let Some(parent) = actor.as_reproducible() {
            match self.config.reproduction {
                ReproductionPolicy::Disabled => {
                    trace!(id = %parent.id(), "Reproduction disabled");
                }
                policy => {
                    let offspring = parent.reproduce(energy);
                    report.record(EcosystemEvent::Reproduced {
                        parent: parent.id(),
                        kind: parent.kind(),
                        label: parent.label().to_string(),
                    });
                    report.record(EcosystemEvent::Born {
                        offspring: offspring.id(),
                        kind: offspring.kind(),
                        label: offspring.label().to_string(),
                    });
                    debug!(
                        parent = %parent.id(),
                        offspring = %offspring.id(),
                        policy = %policy,
                        "Offspring produced"
                    );

                    if policy == ReproductionPolicy::Deferred {
                        nursery.push(offspring);
                    }
                }
            }
        }

        let mut caught_at = None;
        if let Some(predator) = actor.as_predator_mut() {
            match predator.hunt(&mut self.organisms, energy) {
                HuntOutcome::Caught { prey, position } => {
                    report.record(EcosystemEvent::Hunted {
                        hunter: predator.id(),
                        hunter_label: predator.label().to_string(),
                        prey: prey.id(),
                        prey_kind: prey.kind(),
                        prey_label: prey.label().to_string(),
                    });
                    caught_at = Some(position);
                }
                HuntOutcome::NoPrey => {
                    report.record(EcosystemEvent::FoundNoPrey {
                        hunter: predator.id(),
                        hunter_label: predator.label().to_string(),
                    });
                }
            }
        }

        if let Some(micro) = actor.as_microorganism_mut() {
            micro.absorb_nutrients(energy);
            report.record(EcosystemEvent::AbsorbedNutrients {
                id: micro.id,
                habitat: micro.habitat.clone(),
                energy: micro.vitals.energy,
            });
        }

        caught_at
    }

    fn remove_dead_organisms(&mut self, report: &mut DayReport) {
        let (alive, dead): (Vec<Organism>, Vec<Organism>) =
            std::mem::take(&mut self.organisms)
                .into_iter()
                .partition(|organism| organism.is_alive());
        self.organisms = alive;

        for organism in dead {
            debug!(
                event = "organism_death",
                id = %organism.id(),
                label = organism.label(),
                age = organism.vitals().age,
                final_energy = organism.vitals().energy,
                "Organism died"
            );
            report.record(EcosystemEvent::Died {
                id: organism.id(),
                kind: organism.kind(),
                label: organism.label().to_string(),
                energy: organism.vitals().energy,
            });
        }
    }

    fn emit_population_metrics(&self) {
        let stats = self.stats();

        event!(
            Level::INFO,
            gauge_name = "population_total",
            gauge_value = stats.total,
            day = self.day,
            "Population gauge"
        );

        debug!(
            event = "population_metrics",
            day = self.day,
            total_energy = stats.total_energy,
            avg_energy = stats.avg_energy,
            avg_age = stats.avg_age,
            max_age = stats.max_age,
            by_kind = ?stats.by_kind,
            "Population metrics snapshot"
        );
    }
}
