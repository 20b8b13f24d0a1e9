//! Line collection
//!
//! Splits the engine's raw text block into an ordered sequence of lines.
//! No trimming, normalization, or deduplication is performed.

/// Split a recognized text block on line breaks, preserving empty lines
/// and exact order. A trailing line terminator does not produce a trailing
/// empty entry.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_preserves_order() {
        assert_eq!(split_lines("HELLO\nWORLD\n"), vec!["HELLO", "WORLD"]);
    }

    #[test]
    fn test_split_preserves_empty_lines() {
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_empty_block() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_split_does_not_trim() {
        assert_eq!(split_lines("  spaced  \n"), vec!["  spaced  "]);
    }

    #[test]
    fn test_split_round_trips_block() {
        // Re-joining with line terminators reconstructs the block,
        // modulo the trailing terminator
        let block = "first\n\nsecond\nthird\n";
        let joined: String = split_lines(block)
            .iter()
            .map(|l| format!("{}\n", l))
            .collect();
        assert_eq!(joined, block);
    }
}
