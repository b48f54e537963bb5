//! The case split must partition the configuration space: a generic
//! configuration is admitted by exactly one of the 36 cases, and boundary
//! configurations (ties) by at least one.

use proptest::prelude::*;

use cappedwalks_engine::cases::{Case, Configuration, PairOrder, Regime};

/// True when the three compared expressions of a pair are pairwise
/// distinct, so the regime classification cannot tie.
fn pair_is_generic(e: f64, minor: f64, major: f64) -> bool {
    let major_plus_third = major + minor / 3.0;
    let minor_plus_half = minor + major / 2.0;
    e != major_plus_third && e != minor_plus_half && major_plus_third != minor_plus_half
}

proptest! {
    #[test]
    fn regimes_cover_every_triple_and_partition_generic_ones(
        e in 0.0f64..2.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let (minor, major) = if a <= b { (a, b) } else { (b, a) };
        let admitted = Regime::ALL
            .iter()
            .filter(|r| r.admits(e, minor, major))
            .count();
        prop_assert!(admitted >= 1, "no regime admits e={e}, minor={minor}, major={major}");
        if pair_is_generic(e, minor, major) {
            prop_assert_eq!(admitted, 1);
        }
    }

    #[test]
    fn orderings_cover_every_pair_and_partition_distinct_ones(
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let admitted = PairOrder::ALL.iter().filter(|o| o.admits(a, b)).count();
        prop_assert!(admitted >= 1);
        if a != b {
            prop_assert_eq!(admitted, 1);
        }
    }

    #[test]
    fn cases_cover_every_configuration_and_partition_generic_ones(
        w1 in 0.0f64..1.0,
        w2 in 0.0f64..1.0,
        w3 in 0.0f64..1.0,
        d1 in 0.0f64..1.0,
        d2 in 0.0f64..1.0,
        d3 in 0.0f64..1.0,
    ) {
        let config = Configuration {
            weights: [w1, w2, w3],
            degrees: [d1, d2, d3],
        };
        let admitted = Case::enumerate().filter(|c| c.admits(&config)).count();
        prop_assert!(admitted >= 1, "no case admits {config:?}");

        let (minor12, major12) = if w1 <= w2 { (w1, w2) } else { (w2, w1) };
        let (minor23, major23) = if w2 <= w3 { (w2, w3) } else { (w3, w2) };
        let generic = w1 != w2
            && w2 != w3
            && pair_is_generic(d1 + w1, minor12, major12)
            && pair_is_generic(d2 + w2, minor23, major23);
        if generic {
            prop_assert_eq!(admitted, 1, "multiple cases admit {:?}", config);
        }
    }
}
