//! Response formatter
//!
//! Normalizes raw assistant text for display: runs of horizontal whitespace
//! collapse to a single space, whitespace hugging line breaks is trimmed,
//! and the cleaned text splits on line breaks into paragraph units. The
//! whole pipeline is idempotent, so it is safe to apply at any layer.

#[cfg(test)]
mod proptests;

/// Normalize spacing without disturbing line structure.
///
/// Idempotent: cleaning already-clean text returns it unchanged.
pub fn clean(raw: &str) -> String {
    let collapsed = collapse_runs(raw);
    let trimmed = trim_line_edges(&collapsed);
    trimmed.trim().to_string()
}

/// Clean `raw` and split it into display lines, one per visual paragraph.
/// Interior blank lines are preserved as empty entries.
pub fn format(raw: &str) -> Vec<String> {
    clean(raw).split('\n').map(str::to_string).collect()
}

fn is_horizontal_ws(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Replace every run of two or more horizontal whitespace characters with a
/// single space. A lone space or tab is left as-is.
fn collapse_runs(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if is_horizontal_ws(c) && chars.peek().copied().is_some_and(is_horizontal_ws) {
            while chars.peek().copied().is_some_and(is_horizontal_ws) {
                chars.next();
            }
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

/// Strip horizontal whitespace adjacent to line breaks.
fn trim_line_edges(raw: &str) -> String {
    raw.split('\n')
        .map(|line| line.trim_matches(is_horizontal_ws))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_space_runs() {
        assert_eq!(clean("a  b   c"), "a b c");
        assert_eq!(clean("a \t b"), "a b");
        assert_eq!(clean("already clean"), "already clean");
    }

    #[test]
    fn test_trims_around_line_breaks() {
        assert_eq!(clean("line one   \n   line two"), "line one\nline two");
        assert_eq!(clean("a\n b\nc "), "a\nb\nc");
    }

    #[test]
    fn test_trims_outer_whitespace() {
        assert_eq!(clean("  hello  "), "hello");
        assert_eq!(clean("\n\nhello\n"), "hello");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn test_preserves_interior_blank_lines() {
        assert_eq!(clean("para one\n\npara two"), "para one\n\npara two");
        assert_eq!(
            format("para one\n\npara two"),
            vec!["para one", "", "para two"]
        );
    }

    #[test]
    fn test_format_splits_into_lines() {
        assert_eq!(
            format("Name (District)\nType: Government\nCourses: BA, BSc"),
            vec!["Name (District)", "Type: Government", "Courses: BA, BSc"]
        );
        // Empty input yields a single empty line, which the UI renders as
        // one empty paragraph.
        assert_eq!(format(""), vec![""]);
    }

    #[test]
    fn test_clean_is_idempotent_on_samples() {
        let samples = [
            "  a  b \n  c\td  \n\n e ",
            "single",
            " \t \n \t ",
            "tab\there",
        ];
        for sample in samples {
            let once = clean(sample);
            assert_eq!(clean(&once), once, "not idempotent for {sample:?}");
        }
    }
}
