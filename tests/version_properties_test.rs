use std::cmp::Ordering;

use conch::domain::{Classification, Commit, Policy, Version};
use proptest::prelude::*;

fn arb_identifier() -> impl Strategy<Value = String> {
    prop_oneof![
        "(0|[1-9][0-9]{0,2})",
        "[a-zA-Z][0-9a-zA-Z-]{0,3}",
        // long numeric runs still compare as integers
        "[1-9][0-9]{18,24}",
    ]
}

fn arb_version_string() -> impl Strategy<Value = String> {
    (
        0u64..4,
        0u64..4,
        0u64..4,
        prop::option::of(prop::collection::vec(arb_identifier(), 1..4)),
    )
        .prop_map(|(major, minor, patch, pre)| {
            let mut s = format!("{}.{}.{}", major, minor, patch);
            if let Some(pre) = pre {
                s.push('-');
                s.push_str(&pre.join("."));
            }
            s
        })
}

fn parse(s: &str) -> Version {
    Version::parse(s).unwrap()
}

proptest! {
    #[test]
    fn parse_display_round_trip(s in arb_version_string(), build in prop::option::of("[0-9a-zA-Z-]{1,5}")) {
        let s = match build {
            Some(build) => format!("{}+{}", s, build),
            None => s,
        };
        prop_assert_eq!(parse(&s).to_string(), s);
    }

    #[test]
    fn compare_is_reflexive(s in arb_version_string()) {
        let v = parse(&s);
        prop_assert_eq!(v.compare(&v), Ordering::Equal);
    }

    #[test]
    fn compare_is_antisymmetric(a in arb_version_string(), b in arb_version_string()) {
        let (a, b) = (parse(&a), parse(&b));
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
    }

    #[test]
    fn compare_is_transitive(
        a in arb_version_string(),
        b in arb_version_string(),
        c in arb_version_string(),
    ) {
        let mut versions = [parse(&a), parse(&b), parse(&c)];
        versions.sort_by(|x, y| x.compare(y));
        prop_assert_ne!(versions[0].compare(&versions[2]), Ordering::Greater);
    }

    #[test]
    fn build_metadata_is_ignored(s in arb_version_string(), build in "[0-9a-zA-Z-]{1,5}") {
        let plain = parse(&s);
        let built = parse(&format!("{}+{}", s, build));
        prop_assert_eq!(plain.compare(&built), Ordering::Equal);
    }

    #[test]
    fn precedence_matches_semver_crate(a in arb_version_string(), b in arb_version_string()) {
        let ours = parse(&a).compare(&parse(&b));
        let theirs = semver::Version::parse(&a)
            .unwrap()
            .cmp(&semver::Version::parse(&b).unwrap());
        prop_assert_eq!(ours, theirs);
    }

    #[test]
    fn categorized_bump_increases_precedence(
        s in arb_version_string(),
        impact in prop_oneof![
            Just(Classification::Breaking),
            Just(Classification::Minor),
            Just(Classification::Patch),
        ],
    ) {
        let v = parse(&s);
        let next = v.bump(impact).unwrap();
        prop_assert_eq!(next.compare(&v), Ordering::Greater);
        prop_assert!(next.prerelease.is_none());
    }

    #[test]
    fn classification_ignores_footer_order(
        footers in prop::collection::vec(
            prop_oneof![
                Just("Refs: #1"),
                Just("Reviewed-by: someone"),
                Just("BREAKING CHANGE: removed"),
                Just("Closes #9"),
            ],
            1..5,
        ),
    ) {
        let policy = Policy::default();
        let classify = |footers: &[&str]| {
            let message = format!("fix: x\n\n{}", footers.join("\n"));
            Commit::parse_message(&message).unwrap().classification(&policy)
        };

        let mut reversed = footers.clone();
        reversed.reverse();
        prop_assert_eq!(classify(reversed.as_slice()), classify(footers.as_slice()));
    }
}

#[test]
fn test_semver_org_precedence_example() {
    let ordered = [
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-alpha.beta",
        "1.0.0-beta",
        "1.0.0-beta.2",
        "1.0.0-beta.11",
        "1.0.0-rc.1",
        "1.0.0",
    ];
    for pair in ordered.windows(2) {
        assert_eq!(
            parse(pair[0]).compare(&parse(pair[1])),
            Ordering::Less,
            "{} < {}",
            pair[0],
            pair[1]
        );
    }
}
