use serde::{Deserialize, Serialize};

/// A contaminant listed on the contaminants section. Concentration is always positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContaminantEntry {
    pub chemical: String,
    pub concentration: f64,
}
