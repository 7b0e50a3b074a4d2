//! Configuration types for the simulation.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Energy amounts applied by the daily behaviors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// Energy lost per year of aging
    pub aging_cost: f64,
    /// Energy gained from a successful hunt
    pub hunt_gain: f64,
    /// Energy gained by a microorganism absorbing nutrients
    pub absorb_gain: f64,
    /// Starting energy of a newborn
    pub offspring_energy: f64,
    /// Starting size of a newborn
    pub offspring_size: f64,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            aging_cost: 10.0,
            hunt_gain: 20.0,
            absorb_gain: 5.0,
            offspring_energy: 50.0,
            offspring_size: 1.0,
        }
    }
}

impl EnergyConfig {
    /// Every amount must be a finite, non-negative number
    pub fn validate(&self) -> Result<()> {
        let amounts = [
            ("aging_cost", self.aging_cost),
            ("hunt_gain", self.hunt_gain),
            ("absorb_gain", self.absorb_gain),
            ("offspring_energy", self.offspring_energy),
            ("offspring_size", self.offspring_size),
        ];

        for (name, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Validation(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

/// What happens to offspring built during a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReproductionPolicy {
    /// Offspring is narrated, then discarded; population size is unchanged
    #[default]
    Announce,
    /// Offspring joins the ecosystem after the day ends and acts from the next day
    Deferred,
    /// Reproduction is skipped
    Disabled,
}

impl FromStr for ReproductionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "announce" => Ok(ReproductionPolicy::Announce),
            "deferred" => Ok(ReproductionPolicy::Deferred),
            "disabled" => Ok(ReproductionPolicy::Disabled),
            other => Err(Error::Config(format!(
                "unknown reproduction policy '{}' (expected announce, deferred or disabled)",
                other
            ))),
        }
    }
}

impl fmt::Display for ReproductionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReproductionPolicy::Announce => "announce",
            ReproductionPolicy::Deferred => "deferred",
            ReproductionPolicy::Disabled => "disabled",
        };
        f.write_str(name)
    }
}

/// Simulation run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of days the driver advances
    pub days: u64,
    /// Offspring handling
    pub reproduction: ReproductionPolicy,
    /// Energy configuration
    pub energy: EnergyConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: 1,
            reproduction: ReproductionPolicy::default(),
            energy: EnergyConfig::default(),
        }
    }
}

pub const DAYS_ENV: &str = "ECOSIM_DAYS";
pub const REPRODUCTION_ENV: &str = "ECOSIM_REPRODUCTION";

impl SimulationConfig {
    /// Overlay `ECOSIM_DAYS` and `ECOSIM_REPRODUCTION` when set.
    ///
    /// A variable whose `skip_*` flag is true is neither read nor parsed, so
    /// a value decided elsewhere (a command-line flag) wins even over a
    /// malformed variable.
    pub fn apply_env_except(self, skip_days: bool, skip_reproduction: bool) -> Result<Self> {
        let days = (!skip_days).then(|| std::env::var(DAYS_ENV).ok()).flatten();
        let reproduction = (!skip_reproduction)
            .then(|| std::env::var(REPRODUCTION_ENV).ok())
            .flatten();
        self.apply_overrides(days.as_deref(), reproduction.as_deref())
    }

    pub fn apply_overrides(mut self, days: Option<&str>, reproduction: Option<&str>) -> Result<Self> {
        if let Some(days) = days {
            self.days = days.trim().parse().map_err(|_| {
                Error::Config(format!("{} must be a non-negative integer, got '{}'", DAYS_ENV, days))
            })?;
        }
        if let Some(policy) = reproduction {
            self.reproduction = policy.parse()?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let energy = EnergyConfig::default();
        assert_eq!(energy.aging_cost, 10.0);
        assert_eq!(energy.hunt_gain, 20.0);
        assert_eq!(energy.absorb_gain, 5.0);
        assert_eq!(energy.offspring_energy, 50.0);
        assert_eq!(energy.offspring_size, 1.0);

        let config = SimulationConfig::default();
        assert_eq!(config.days, 1);
        assert_eq!(config.reproduction, ReproductionPolicy::Announce);
    }

    #[test]
    fn test_energy_validation() {
        assert!(EnergyConfig::default().validate().is_ok());

        let config = EnergyConfig {
            hunt_gain: -20.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Validation(_))));

        let config = EnergyConfig {
            offspring_size: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("deferred".parse::<ReproductionPolicy>().unwrap(), ReproductionPolicy::Deferred);
        assert_eq!(" Announce ".parse::<ReproductionPolicy>().unwrap(), ReproductionPolicy::Announce);
        assert_eq!("DISABLED".parse::<ReproductionPolicy>().unwrap(), ReproductionPolicy::Disabled);
        assert!(matches!("grow".parse::<ReproductionPolicy>(), Err(Error::Config(_))));
    }

    #[test]
    fn test_overrides() {
        let config = SimulationConfig::default()
            .apply_overrides(Some("7"), Some("deferred"))
            .unwrap();
        assert_eq!(config.days, 7);
        assert_eq!(config.reproduction, ReproductionPolicy::Deferred);

        let unchanged = SimulationConfig::default().apply_overrides(None, None).unwrap();
        assert_eq!(unchanged.days, 1);

        assert!(SimulationConfig::default().apply_overrides(Some("-3"), None).is_err());
    }

    // The only test in this crate that touches the ECOSIM_* variables
    #[test]
    fn test_apply_env_reads_variables() {
        std::env::set_var(DAYS_ENV, "4");
        std::env::set_var(REPRODUCTION_ENV, "disabled");
        let config = SimulationConfig::default().apply_env_except(false, false).unwrap();
        assert_eq!(config.days, 4);
        assert_eq!(config.reproduction, ReproductionPolicy::Disabled);

        // Skipped variables keep the defaults
        let config = SimulationConfig::default().apply_env_except(true, true).unwrap();
        assert_eq!(config.days, 1);
        assert_eq!(config.reproduction, ReproductionPolicy::Announce);

        // A malformed variable fails only when it is read
        std::env::set_var(REPRODUCTION_ENV, "bogus");
        assert!(matches!(
            SimulationConfig::default().apply_env_except(false, false),
            Err(Error::Config(_))
        ));
        let config = SimulationConfig::default().apply_env_except(false, true).unwrap();
        assert_eq!(config.days, 4);
        assert_eq!(config.reproduction, ReproductionPolicy::Announce);

        std::env::remove_var(DAYS_ENV);
        std::env::remove_var(REPRODUCTION_ENV);
        let config = SimulationConfig::default().apply_env_except(false, false).unwrap();
        assert_eq!(config.days, 1);
    }

    #[test]
    fn test_config_serialization() {
        let config = SimulationConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"reproduction\":\"announce\""));

        let deserialized: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.days, deserialized.days);
        assert_eq!(config.energy.hunt_gain, deserialized.energy.hunt_gain);
    }
}
