use ordkit_util::strings::{collapse_spaces, is_blank, trim};
use proptest::prelude::*;

#[test]
fn blank_strings() {
    for s in [Some(""), Some("    "), None] {
        assert!(is_blank(s), "{s:?}");
    }
    for s in ["a", "  a  "] {
        assert!(!is_blank(Some(s)), "{s:?}");
    }
}

#[test]
fn trim_strings() {
    let cases = [("abc", "abc"), ("  abc ", "abc"), ("  _  abc  ; ", "_  abc  ;")];
    for (src, expected) in cases {
        assert_eq!(trim(src), expected);
    }
}

#[test]
fn collapse_strings() {
    assert_eq!(collapse_spaces("  _  abc  ; "), "_ abc ;");
}

proptest! {
    #[test]
    fn collapse_is_idempotent(s in "[ a-c\t\n]{0,24}") {
        let once = collapse_spaces(&s);
        prop_assert_eq!(collapse_spaces(&once), once.clone());
        prop_assert!(!once.contains("  "));
        prop_assert_eq!(trim(&once), once.as_str());
        prop_assert_eq!(is_blank(Some(s.as_str())), once.is_empty());
    }
}
