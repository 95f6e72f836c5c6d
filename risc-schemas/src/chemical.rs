use serde::{Deserialize, Serialize};

/// First-order degradation rate of a chemical, in 1/day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemicalDegradation {
    pub chemical: String,
    pub rate_per_day: f64,
}
