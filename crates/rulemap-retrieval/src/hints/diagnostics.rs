use rulemap_catalog::KeyCatalog;
use rulemap_core::constants::MAX_DIAGNOSED_FIELDS;
use rulemap_core::errors::RulemapResult;
use rulemap_core::models::UnknownField;

use crate::matcher::KeyMatcher;

/// Suggestions for the first few identifiers the catalog does not contain.
///
/// At most [`MAX_DIAGNOSED_FIELDS`] unknown identifiers are diagnosed, in the
/// order they appear in `used_identifiers`.
pub fn diagnose_unknown_fields<S: AsRef<str>>(
    matcher: &KeyMatcher,
    catalog: &KeyCatalog,
    used_identifiers: &[S],
    suggestion_top_k: usize,
) -> RulemapResult<Vec<UnknownField>> {
    used_identifiers
        .iter()
        .map(AsRef::as_ref)
        .filter(|id| !catalog.contains(id))
        .take(MAX_DIAGNOSED_FIELDS)
        .map(|id| -> RulemapResult<UnknownField> {
            Ok(UnknownField {
                identifier: id.to_string(),
                suggestions: matcher.suggest_for_unknown_field(id, suggestion_top_k)?,
            })
        })
        .collect()
}

/// Rejection text for a rule referencing unknown identifiers.
pub fn rejection_message<S: AsRef<str>>(unknown_identifiers: &[S], diagnostics: &[UnknownField]) -> String {
    let listed: Vec<&str> = unknown_identifiers.iter().map(AsRef::as_ref).collect();
    let mut message = format!(
        "Rule contains invalid field(s): {}. Suggestions:",
        listed.join(", ")
    );
    for field in diagnostics {
        message.push_str("\n  ");
        message.push_str(&field.to_string());
    }
    message
}
