//! Population statistics.

use crate::{KindTag, Vitals};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate view of a population at one moment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopulationStats {
    pub total: usize,
    pub by_kind: BTreeMap<String, usize>,
    pub total_energy: f64,
    pub avg_energy: f64,
    pub avg_age: f64,
    pub max_age: u64,
}

impl PopulationStats {
    pub fn collect<'a, I>(population: I) -> Self
    where
        I: IntoIterator<Item = (KindTag, &'a Vitals)>,
    {
        let mut stats = Self::default();
        let mut total_age: u128 = 0;

        for (kind, vitals) in population {
            stats.total += 1;
            *stats.by_kind.entry(kind.to_string()).or_insert(0) += 1;
            stats.total_energy += vitals.energy;
            total_age += u128::from(vitals.age);
            stats.max_age = stats.max_age.max(vitals.age);
        }

        if stats.total > 0 {
            stats.avg_energy = stats.total_energy / stats.total as f64;
            stats.avg_age = total_age as f64 / stats.total as f64;
        }

        stats
    }

    pub fn count(&self, kind: KindTag) -> usize {
        self.by_kind.get(&kind.to_string()).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_population() {
        let stats = PopulationStats::collect(std::iter::empty());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.avg_energy, 0.0);
        assert_eq!(stats.max_age, 0);
    }

    #[test]
    fn test_large_ages_do_not_overflow() {
        let old = Vitals::new(10.0, u64::MAX / 2 + 1, 1.0).unwrap();
        let older = Vitals::new(10.0, u64::MAX, 1.0).unwrap();

        let stats = PopulationStats::collect(vec![(KindTag::Plant, &old), (KindTag::Plant, &older)]);

        assert_eq!(stats.total, 2);
        assert_eq!(stats.max_age, u64::MAX);
        assert!(stats.avg_age > (u64::MAX / 2) as f64);
    }

    #[test]
    fn test_collect() {
        let lion = Vitals::new(110.0, 6, 50.0).unwrap();
        let oak = Vitals::new(190.0, 11, 100.0).unwrap();
        let soil = Vitals::new(45.0, 2, 0.01).unwrap();

        let stats = PopulationStats::collect(vec![
            (KindTag::Animal, &lion),
            (KindTag::Plant, &oak),
            (KindTag::Microorganism, &soil),
        ]);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.count(KindTag::Animal), 1);
        assert_eq!(stats.count(KindTag::Plant), 1);
        assert_eq!(stats.total_energy, 345.0);
        assert_eq!(stats.avg_energy, 115.0);
        assert_eq!(stats.max_age, 11);
        assert!((stats.avg_age - 19.0 / 3.0).abs() < 1e-9);
    }
}
