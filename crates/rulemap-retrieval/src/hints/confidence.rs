use std::collections::HashMap;

use rulemap_core::constants::NEUTRAL_CONFIDENCE_WEIGHT;
use rulemap_core::models::MappingCandidate;

/// Mean mapping similarity over the identifiers a rule actually uses.
///
/// An identifier with no mapping counts as [`NEUTRAL_CONFIDENCE_WEIGHT`].
/// Repeated identifiers count once per occurrence. No identifiers gives 0.0;
/// the result is clamped to [0, 1].
pub fn overall_confidence<S: AsRef<str>>(mappings: &[MappingCandidate], used_identifiers: &[S]) -> f64 {
    if used_identifiers.is_empty() {
        return 0.0;
    }

    let by_identifier: HashMap<&str, f64> = mappings
        .iter()
        .map(|m| (m.identifier.as_str(), f64::from(m.similarity)))
        .collect();

    let total: f64 = used_identifiers
        .iter()
        .map(|id| {
            by_identifier
                .get(id.as_ref())
                .copied()
                .unwrap_or(NEUTRAL_CONFIDENCE_WEIGHT)
        })
        .sum();

    (total / used_identifiers.len() as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulemap_core::models::SourcePhrase;

    fn mapping(identifier: &str, similarity: f32) -> MappingCandidate {
        MappingCandidate {
            source: SourcePhrase::PromptContext,
            identifier: identifier.to_string(),
            similarity,
            label: identifier.to_string(),
        }
    }

    #[test]
    fn nothing_used_is_zero() {
        let used: [&str; 0] = [];
        assert_eq!(overall_confidence(&[mapping("a", 0.9)], &used), 0.0);
    }

    #[test]
    fn mean_of_mapped_similarities() {
        let mappings = [mapping("a", 0.75), mapping("b", 0.25)];
        let c = overall_confidence(&mappings, &["a", "b"]);
        assert!((c - 0.5).abs() < 1e-9);
    }

    #[test]
    fn unmapped_identifiers_weigh_neutral() {
        let mappings = [mapping("a", 1.0)];
        let c = overall_confidence(&mappings, &["a", "missing"]);
        assert!((c - 0.75).abs() < 1e-9);
    }

    #[test]
    fn clamped_to_unit_interval() {
        assert_eq!(overall_confidence(&[mapping("a", -0.4)], &["a"]), 0.0);
        assert_eq!(overall_confidence(&[mapping("a", 1.5)], &["a"]), 1.0);
    }
}
