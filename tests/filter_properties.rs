// tests/filter_properties.rs

use on_change::watch::FilterConfig;
use proptest::prelude::*;

const NONE: [&str; 0] = [];

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9_]{1,8}", 1..5).prop_map(|parts| format!("/{}", parts.join("/")))
}

fn ext_strategy() -> impl Strategy<Value = String> {
    "\\.[a-z]{1,4}"
}

proptest! {
    #[test]
    fn empty_filter_accepts_every_path(path in path_strategy()) {
        let filter = FilterConfig::new(NONE, NONE).unwrap();
        prop_assert!(filter.include(&path));
    }

    #[test]
    fn listed_extension_is_accepted(stem in path_strategy(), ext in ext_strategy()) {
        let filter = FilterConfig::new([ext.as_str()], NONE).unwrap();
        let path = format!("{stem}{ext}");
        prop_assert!(filter.include(&path));
    }

    #[test]
    fn unlisted_extension_is_rejected(path in path_strategy(), ext in ext_strategy()) {
        // Generated paths never contain a dot.
        let filter = FilterConfig::new([ext.as_str()], NONE).unwrap();
        prop_assert!(!filter.include(&path));
    }

    #[test]
    fn exclusion_wins_over_extension(stem in path_strategy(), ext in ext_strategy()) {
        let path = format!("{stem}{ext}");
        let pattern = regex::escape(&stem);
        let filter = FilterConfig::new([ext.as_str()], [pattern.as_str()]).unwrap();
        prop_assert!(!filter.include(&path));
    }

    #[test]
    fn extension_order_does_not_matter(
        path in path_strategy(),
        exts in prop::collection::vec(ext_strategy(), 1..5),
    ) {
        let forward = FilterConfig::new(&exts, NONE).unwrap();
        let reversed: Vec<&String> = exts.iter().rev().collect();
        let backward = FilterConfig::new(reversed, NONE).unwrap();
        prop_assert_eq!(forward.include(&path), backward.include(&path));
    }

    #[test]
    fn adding_an_exclusion_never_adds_paths(
        path in path_strategy(),
        ext in ext_strategy(),
        excluded in "[a-z]{1,3}",
    ) {
        let loose = FilterConfig::new([ext.as_str()], NONE).unwrap();
        let strict = FilterConfig::new([ext.as_str()], [excluded.as_str()]).unwrap();
        prop_assert!(!strict.include(&path) || loose.include(&path));
    }
}
