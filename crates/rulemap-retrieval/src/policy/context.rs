/// Heading of every non-empty policy digest.
pub const CONTEXT_HEADER: &str = "## Relevant Policy Guidelines:\n";

/// Numbered digest of `chunks` within `max_chars`.
///
/// Each entry is `"\n{n}. {chunk}\n"`. Entries are appended whole until the
/// next one would push the running total past `max_chars`; the header is not
/// counted. No chunks yields an empty string.
pub fn format_policy_context(chunks: &[String], max_chars: usize) -> String {
    if chunks.is_empty() {
        return String::new();
    }

    let mut context = String::from(CONTEXT_HEADER);
    let mut total_chars = 0usize;

    for (i, chunk) in chunks.iter().enumerate() {
        let entry = format!("\n{}. {}\n", i + 1, chunk);
        let entry_chars = entry.chars().count();
        if total_chars + entry_chars > max_chars {
            break;
        }
        context.push_str(&entry);
        total_chars += entry_chars;
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_entries() {
        let chunks = vec!["alpha".to_string(), "beta".to_string()];
        assert_eq!(
            format_policy_context(&chunks, 4_000),
            "## Relevant Policy Guidelines:\n\n1. alpha\n\n2. beta\n"
        );
    }

    #[test]
    fn stops_before_exceeding_budget() {
        // "\n1. aaaa\n" is 9 chars, "\n2. bbbb\n" another 9.
        let chunks = vec!["aaaa".to_string(), "bbbb".to_string()];
        assert_eq!(format_policy_context(&chunks, 17), "## Relevant Policy Guidelines:\n\n1. aaaa\n");
        assert_eq!(format_policy_context(&chunks, 18).matches("\n2. ").count(), 1);
    }

    #[test]
    fn tiny_budget_keeps_only_header() {
        let chunks = vec!["a chunk".to_string()];
        assert_eq!(format_policy_context(&chunks, 1), CONTEXT_HEADER);
    }

    #[test]
    fn nothing_retrieved_is_empty() {
        assert_eq!(format_policy_context(&[], 4_000), "");
    }
}
