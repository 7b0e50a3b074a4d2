//! What happened during a day, and what the ecosystem looks like now.

use crate::organism::OrganismData;
use ecosim_core::{KindTag, OrganismId, PopulationStats, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single narrated event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EcosystemEvent {
    Aged {
        id: OrganismId,
        kind: KindTag,
        label: String,
        age: u64,
        energy: f64,
    },
    Reproduced {
        parent: OrganismId,
        kind: KindTag,
        label: String,
    },
    Born {
        offspring: OrganismId,
        kind: KindTag,
        label: String,
    },
    Hunted {
        hunter: OrganismId,
        hunter_label: String,
        prey: OrganismId,
        prey_kind: KindTag,
        prey_label: String,
    },
    FoundNoPrey {
        hunter: OrganismId,
        hunter_label: String,
    },
    AbsorbedNutrients {
        id: OrganismId,
        habitat: String,
        energy: f64,
    },
    Died {
        id: OrganismId,
        kind: KindTag,
        label: String,
        energy: f64,
    },
    Joined {
        id: OrganismId,
        kind: KindTag,
        label: String,
    },
}

impl fmt::Display for EcosystemEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcosystemEvent::Aged { label, age, energy, .. } => {
                write!(f, "The {} is now {} years old with {} energy.", label, age, energy)
            }
            EcosystemEvent::Reproduced { label, .. } => write!(f, "The {} is reproducing.", label),
            EcosystemEvent::Born { kind: KindTag::Plant, label, .. } => {
                write!(f, "A new {} has grown.", label)
            }
            EcosystemEvent::Born { label, .. } => write!(f, "A new {} has been born.", label),
            EcosystemEvent::Hunted { hunter_label, prey_kind, .. } => {
                write!(f, "The {} is hunting a {}.", hunter_label, prey_kind)
            }
            EcosystemEvent::FoundNoPrey { hunter_label, .. } => {
                write!(f, "The {} found no prey.", hunter_label)
            }
            EcosystemEvent::AbsorbedNutrients { .. } => {
                f.write_str("The microorganism absorbed nutrients and gained energy.")
            }
            EcosystemEvent::Died { label, .. } => write!(f, "The {} has run out of energy.", label),
            EcosystemEvent::Joined { label, .. } => {
                write!(f, "The young {} joined the ecosystem.", label)
            }
        }
    }
}

/// Everything that happened during one simulated day
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayReport {
    pub day: u64,
    pub events: Vec<EcosystemEvent>,
    pub hunted: usize,
    pub died: usize,
    pub born: usize,
    pub joined: usize,
    /// Population once the day is over
    pub population: usize,
}

impl DayReport {
    pub fn new(day: u64) -> Self {
        Self {
            day,
            ..Default::default()
        }
    }

    pub fn record(&mut self, event: EcosystemEvent) {
        match &event {
            EcosystemEvent::Hunted { .. } => self.hunted += 1,
            EcosystemEvent::Died { .. } => self.died += 1,
            EcosystemEvent::Born { .. } => self.born += 1,
            EcosystemEvent::Joined { .. } => self.joined += 1,
            _ => {}
        }
        self.events.push(event);
    }

    /// Narration lines, skipping the routine aging entries
    pub fn narration(&self) -> impl Iterator<Item = String> + '_ {
        self.events
            .iter()
            .filter(|event| !matches!(event, EcosystemEvent::Aged { .. }))
            .map(|event| event.to_string())
    }
}

/// Snapshot of every organism, in ecosystem order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub day: u64,
    pub organisms: Vec<OrganismData>,
}

impl StatusReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current status of the ecosystem:")?;
        for organism in &self.organisms {
            writeln!(
                f,
                "{} | Energy: {}, Age: {}, Size: {}",
                organism.kind, organism.energy, organism.age, organism.size
            )?;
        }
        Ok(())
    }
}

/// Result of running several days
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub days: Vec<DayReport>,
    pub final_stats: PopulationStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts() {
        let mut report = DayReport::new(1);
        report.record(EcosystemEvent::Hunted {
            hunter: OrganismId::new(),
            hunter_label: "Lion".to_string(),
            prey: OrganismId::new(),
            prey_kind: KindTag::Animal,
            prey_label: "Deer".to_string(),
        });
        report.record(EcosystemEvent::Born {
            offspring: OrganismId::new(),
            kind: KindTag::Plant,
            label: "Oak Tree".to_string(),
        });

        assert_eq!(report.hunted, 1);
        assert_eq!(report.born, 1);
        assert_eq!(report.died, 0);
        assert_eq!(report.events.len(), 2);
    }

    #[test]
    fn test_event_narration() {
        let hunted = EcosystemEvent::Hunted {
            hunter: OrganismId::new(),
            hunter_label: "Lion".to_string(),
            prey: OrganismId::new(),
            prey_kind: KindTag::Animal,
            prey_label: "Deer".to_string(),
        };
        assert_eq!(hunted.to_string(), "The Lion is hunting a Animal.");

        let grown = EcosystemEvent::Born {
            offspring: OrganismId::new(),
            kind: KindTag::Plant,
            label: "Oak Tree".to_string(),
        };
        assert_eq!(grown.to_string(), "A new Oak Tree has grown.");

        let born = EcosystemEvent::Born {
            offspring: OrganismId::new(),
            kind: KindTag::Animal,
            label: "Lion".to_string(),
        };
        assert_eq!(born.to_string(), "A new Lion has been born.");
    }

    #[test]
    fn test_narration_skips_aging() {
        let mut report = DayReport::new(1);
        report.record(EcosystemEvent::Aged {
            id: OrganismId::new(),
            kind: KindTag::Microorganism,
            label: "Soil".to_string(),
            age: 2,
            energy: 40.0,
        });
        report.record(EcosystemEvent::AbsorbedNutrients {
            id: OrganismId::new(),
            habitat: "Soil".to_string(),
            energy: 45.0,
        });

        let lines: Vec<String> = report.narration().collect();
        assert_eq!(lines, vec!["The microorganism absorbed nutrients and gained energy."]);
    }

    #[test]
    fn test_status_display() {
        let status = StatusReport {
            day: 0,
            organisms: vec![OrganismData {
                id: OrganismId::new(),
                kind: KindTag::Microorganism,
                label: "Soil".to_string(),
                energy: 50.0,
                age: 1,
                size: 0.01,
            }],
        };

        assert_eq!(
            status.to_string(),
            "Current status of the ecosystem:\nMicroorganism | Energy: 50, Age: 1, Size: 0.01\n"
        );

        let json = status.to_json().unwrap();
        assert!(json.contains("\"label\": \"Soil\""));
    }
}
