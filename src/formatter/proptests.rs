//! Property-based tests for the response formatter
//!
//! The key invariant is idempotence: formatting already-formatted text is a
//! no-op, so the pipeline can run at any layer without compounding.

use super::*;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

/// Raw assistant text: words, spaces, tabs, and line breaks in any mix.
fn arb_raw_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            4 => "[a-zA-Z0-9.,!?()*:-]{1,8}",
            2 => Just(" ".to_string()),
            1 => Just("  ".to_string()),
            1 => Just("\t".to_string()),
            1 => Just("\n".to_string()),
            1 => Just(" \n ".to_string()),
        ],
        0..40,
    )
    .prop_map(|pieces| pieces.concat())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_clean_is_idempotent(raw in arb_raw_text()) {
        let once = clean(&raw);
        prop_assert_eq!(clean(&once), once);
    }

    #[test]
    fn prop_format_rejoin_is_stable(raw in arb_raw_text()) {
        let lines = format(&raw);
        let rejoined = lines.join("\n");
        prop_assert_eq!(format(&rejoined), lines);
    }

    #[test]
    fn prop_lines_carry_no_edge_or_run_whitespace(raw in arb_raw_text()) {
        for line in format(&raw) {
            prop_assert!(!line.starts_with(' ') && !line.starts_with('\t'), "leading ws in {line:?}");
            prop_assert!(!line.ends_with(' ') && !line.ends_with('\t'), "trailing ws in {line:?}");
            prop_assert!(!line.contains("  "), "space run in {line:?}");
            prop_assert!(!line.contains('\n'), "embedded break in {line:?}");
        }
    }

    #[test]
    fn prop_non_whitespace_content_is_preserved(raw in arb_raw_text()) {
        let kept: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let cleaned: String = clean(&raw).chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(cleaned, kept);
    }
}
