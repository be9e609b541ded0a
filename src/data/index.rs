use super::model::{TechFrequencies, TechTerm};

/// Weight of each technology term in the digitalization index.
///
/// The weights are applied as-is; they are not normalized.
pub const TECH_WEIGHTS: [(TechTerm, f64); 5] = [
    (TechTerm::ArtificialIntelligence, 0.30),
    (TechTerm::Blockchain, 0.10),
    (TechTerm::BigData, 0.25),
    (TechTerm::CloudComputing, 0.15),
    (TechTerm::DigitalApplication, 0.20),
];

/// Weighted sum of the term frequencies. No rounding.
pub fn digitalization_index(freqs: &TechFrequencies) -> f64 {
    TECH_WEIGHTS
        .iter()
        .map(|&(term, weight)| freqs.get(term) * weight)
        .sum()
}
