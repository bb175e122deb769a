//! Regex and vocabulary heuristics for pulling field phrases out of a prompt.
//!
//! Three independent passes over the lowercased prompt, concatenated in this
//! order and deduplicated keeping the first occurrence:
//! 1. text immediately before a comparison operator or comparison word
//! 2. text after "with" / "having" up to a quote, `>`, `<`, or the end
//! 3. every vocabulary term the prompt contains

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use rulemap_core::constants::MIN_PHRASE_CHARS;
use rulemap_core::traits::IPhraseExtractor;

use super::vocabulary::DEFAULT_VOCABULARY;

static OPERATOR_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"([a-z_\s]+?)\s*(?:>|<|>=|<=|==|=|is|equals?|greater|less|above|below|at least|minimum|maximum)",
    )
    .ok()
});

static WITH_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"(?:with|having)\s+([a-z_\s]+?)(?:\s+['"]|\s+>|\s+<|$)"#).ok());

/// Default [`IPhraseExtractor`]: operator pattern, with/having pattern, and a
/// literal vocabulary scan.
#[derive(Debug, Clone)]
pub struct HeuristicPhraseExtractor {
    vocabulary: Vec<String>,
}

impl Default for HeuristicPhraseExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicPhraseExtractor {
    pub fn new() -> Self {
        Self {
            vocabulary: DEFAULT_VOCABULARY.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Built-in vocabulary followed by `extra` terms (lowercased, blanks skipped).
    pub fn with_extra_vocabulary<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut extractor = Self::new();
        for term in extra {
            let term = term.as_ref().trim().to_lowercase();
            if !term.is_empty() && !extractor.vocabulary.contains(&term) {
                extractor.vocabulary.push(term);
            }
        }
        extractor
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }
}

/// Trimmed capture group 1 of every match, keeping those longer than the minimum.
fn captured_phrases<'a>(pattern: &LazyLock<Option<Regex>>, text: &'a str) -> Vec<&'a str> {
    let Some(re) = pattern.as_ref() else {
        return Vec::new();
    };
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|p| p.chars().count() > MIN_PHRASE_CHARS)
        .collect()
}

impl IPhraseExtractor for HeuristicPhraseExtractor {
    fn extract(&self, prompt: &str) -> Vec<String> {
        let lower = prompt.to_lowercase();

        let operator = captured_phrases(&OPERATOR_PATTERN, &lower);
        let with = captured_phrases(&WITH_PATTERN, &lower);
        let terms = self
            .vocabulary
            .iter()
            .map(String::as_str)
            .filter(|term| lower.contains(term));

        let mut seen = HashSet::new();
        operator
            .into_iter()
            .chain(with)
            .chain(terms)
            .filter(|phrase| seen.insert(*phrase))
            .map(str::to_string)
            .collect()
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}
