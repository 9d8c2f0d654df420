//! Property-based tests for the version order and increment rules.

use std::cmp::Ordering;

use proptest::prelude::*;

use version_tag_check::domain::{validate, Qualifier, Rejection, Verdict, Version};

fn qualifier() -> impl Strategy<Value = Option<Qualifier>> {
    prop_oneof![
        Just(None),
        Just(Some(Qualifier::Snapshot)),
        Just(Some(Qualifier::Alpha)),
        Just(Some(Qualifier::Beta)),
        Just(Some(Qualifier::Release)),
        (1u8..=99).prop_map(Qualifier::release_candidate),
        (1u8..=99).prop_map(Qualifier::hotfix),
    ]
}

/// Small numbers so that equal triples come up often
fn version() -> impl Strategy<Value = Version> {
    (0u32..3, 0u32..3, 0u32..3, qualifier()).prop_map(|(major, minor, patch, qualifier)| {
        Version {
            major,
            minor,
            patch,
            qualifier,
        }
    })
}

proptest! {
    /// Rendering then parsing gives back the same version, with or without `v`.
    #[test]
    fn render_parse_roundtrip(version in version()) {
        prop_assert_eq!(Version::parse(&version.to_string()).unwrap(), version);
        prop_assert_eq!(Version::parse(&version.tag_name()).unwrap(), version);
    }

    /// Exactly one of less, equal, greater, and equal means identical.
    #[test]
    fn order_is_trichotomous(a in version(), b in version()) {
        let forward = a.cmp(&b);
        prop_assert_eq!(forward.reverse(), b.cmp(&a));
        prop_assert_eq!(forward == Ordering::Equal, a == b);
    }

    #[test]
    fn order_is_transitive(a in version(), b in version(), c in version()) {
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }

    /// Differing numeric triples decide the order on their own.
    #[test]
    fn numbers_dominate_qualifiers(a in version(), b in version()) {
        if !a.same_numbers(&b) {
            prop_assert_eq!(a.cmp(&b), a.numbers().cmp(&b.numbers()));
        }
    }

    /// A candidate is accepted exactly when it ranks above the previous version.
    #[test]
    fn validate_agrees_with_order(previous in version(), candidate in version()) {
        let verdict = validate(Some(&previous), &candidate);
        prop_assert_eq!(verdict.is_accepted(), candidate > previous);
        if candidate == previous {
            prop_assert_eq!(verdict, Verdict::Rejected(Rejection::DuplicateTag));
        }
    }
}
