use rulemap_core::models::PolicyChunk;

/// Split `document` into paragraphs separated by blank lines.
///
/// A blank line is one containing only whitespace, so a line holding only
/// spaces or tabs separates paragraphs just like an empty line does.
/// Paragraphs are returned untrimmed, without their separating blank lines,
/// in document order.
pub fn split_paragraphs(document: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in document.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }
    paragraphs
}

/// Paragraphs of `document` whose trimmed length exceeds `min_chars`.
pub fn chunk_document(document: &str, document_index: usize, min_chars: usize) -> Vec<PolicyChunk> {
    split_paragraphs(document)
        .iter()
        .filter_map(|p| PolicyChunk::from_paragraph(p, document_index, min_chars))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_lines_separate_paragraphs() {
        let doc = "first line\nstill first\n    \nsecond\n\n\n\nthird";
        assert_eq!(split_paragraphs(doc), ["first line\nstill first", "second", "third"]);
    }

    #[test]
    fn space_or_tab_line_splits_without_double_newline() {
        assert_eq!(split_paragraphs("a\n \nb"), ["a", "b"]);
        assert_eq!(split_paragraphs("a\n\t\nb"), ["a", "b"]);
        assert_eq!(split_paragraphs("a\nb"), ["a\nb"]);
    }

    #[test]
    fn short_paragraphs_are_dropped() {
        let long = "x".repeat(200);
        let doc = format!("ten chars!\n\n{long}");
        let chunks = chunk_document(&doc, 4, 50);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text(), long);
        assert_eq!(chunks[0].document(), 4);
    }

    #[test]
    fn boundary_length_is_exclusive() {
        let exactly = "y".repeat(50);
        let just_over = "z".repeat(51);
        assert!(chunk_document(&exactly, 0, 50).is_empty());
        assert_eq!(chunk_document(&just_over, 0, 50).len(), 1);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 26 two-byte characters: 52 bytes but only 26 characters.
        let doc = "é".repeat(26);
        assert!(chunk_document(&doc, 0, 50).is_empty());
    }

    #[test]
    fn chunks_are_trimmed() {
        let doc = format!("   {}   \n", "policy ".repeat(10));
        let chunks = chunk_document(&doc, 0, 50);
        assert_eq!(chunks[0].text(), "policy ".repeat(10).trim_end());
    }

    #[test]
    fn empty_document_has_no_chunks() {
        assert!(chunk_document("", 0, 50).is_empty());
        assert!(chunk_document("\n \n\t\n", 0, 50).is_empty());
    }
}
