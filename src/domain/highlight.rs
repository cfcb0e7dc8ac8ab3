//! Search match highlighting for the name column

/// A piece of a name, flagged when it equals the search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn new(text: &str, matched: bool) -> Self {
        Self {
            text: text.to_string(),
            matched,
        }
    }
}

/// Case fold shared by search filtering and highlighting
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Split `text` around every case-insensitive, non-overlapping occurrence of
/// `term`. The term is matched literally. An empty term yields the whole text
/// as one unmatched segment.
///
/// Matching runs on the folded text; a match that covers only part of a
/// character's fold marks the whole source character.
pub fn highlight_segments(text: &str, term: &str) -> Vec<Segment> {
    let needle = fold_case(term);
    if needle.is_empty() || text.is_empty() {
        return vec![Segment::new(text, false)];
    }

    // Folded text plus, for each folded byte, the source char's byte range
    let mut folded = String::with_capacity(text.len());
    let mut origin: Vec<(usize, usize)> = Vec::with_capacity(text.len());
    for (start, c) in text.char_indices() {
        let end = start + c.len_utf8();
        for lower in c.to_lowercase() {
            folded.push(lower);
            origin.extend(std::iter::repeat_n((start, end), lower.len_utf8()));
        }
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut from = 0;
    while let Some(found) = folded[from..].find(&needle) {
        let match_start = from + found;
        let match_end = match_start + needle.len();
        from = match_end;

        let start = origin[match_start].0.max(plain_start);
        let end = origin[match_end - 1].1;
        if start >= end {
            continue;
        }
        if plain_start < start {
            segments.push(Segment::new(&text[plain_start..start], false));
        }
        segments.push(Segment::new(&text[start..end], true));
        plain_start = end;
    }
    if plain_start < text.len() {
        segments.push(Segment::new(&text[plain_start..], false));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_leading_match_keeping_original_case() {
        let segments = highlight_segments("Jane", "ja");
        assert_eq!(
            segments,
            vec![Segment::new("Ja", true), Segment::new("ne", false)]
        );
    }

    #[test]
    fn marks_every_occurrence() {
        let segments = highlight_segments("Anna Banana", "an");
        let matched: Vec<_> = segments.iter().filter(|s| s.matched).map(|s| s.text.as_str()).collect();
        assert_eq!(matched, vec!["An", "an", "an"]);
        let joined: String = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, "Anna Banana");
    }

    #[test]
    fn empty_term_or_no_match_is_plain() {
        assert_eq!(highlight_segments("John", ""), vec![Segment::new("John", false)]);
        assert_eq!(highlight_segments("John", "xy"), vec![Segment::new("John", false)]);
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let segments = highlight_segments("a.b (c)", "(c");
        assert_eq!(segments[1], Segment::new("(c", true));
        assert!(!highlight_segments("abc", ".").iter().any(|s| s.matched));
    }

    #[test]
    fn handles_multibyte_names() {
        let segments = highlight_segments("Zoë Ëva", "ë");
        let matched: Vec<_> = segments.iter().filter(|s| s.matched).map(|s| s.text.as_str()).collect();
        assert_eq!(matched, vec!["ë", "Ë"]);
    }

    #[test]
    fn expanding_folds_still_highlight() {
        // 'İ' folds to "i\u{307}", so a plain "i" matches part of it
        let segments = highlight_segments("İpek", "i");
        assert_eq!(
            segments,
            vec![Segment::new("İ", true), Segment::new("pek", false)]
        );
        assert!(fold_case("İpek").contains(&fold_case("i")));
    }
}
