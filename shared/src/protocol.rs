use serde::{Deserialize, Serialize};

/// Handed to the upload callback after every progress computation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProgressReport {
    pub id: u64,
    pub progress: f64,
}

/// Score of one typed paragraph.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoundSummary {
    pub wpm: f64,
    pub accuracy: f64,
    pub progress: f64,
}
