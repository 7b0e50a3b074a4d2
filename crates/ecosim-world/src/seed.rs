//! Starting populations.

use crate::organism::OrganismSpec;

/// Lion, Deer, Oak Tree and a soil bacterium, in that order
pub fn demo_population() -> Vec<OrganismSpec> {
    vec![
        OrganismSpec::animal("Lion", 100.0, 5, 50.0),
        OrganismSpec::animal("Deer", 80.0, 3, 40.0),
        OrganismSpec::plant("Oak Tree", 200.0, 10, 100.0),
        OrganismSpec::microorganism("Soil", 50.0, 1, 0.01),
    ]
}
