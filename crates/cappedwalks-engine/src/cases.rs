use serde::Serialize;
use std::fmt;

/// Direction of the ordering assumption between the two part weights of an
/// adjacent pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PairOrder {
    /// The left weight is at most the right weight.
    #[serde(rename = "le")]
    FirstAtMost,
    /// The left weight is at least the right weight.
    #[serde(rename = "ge")]
    FirstAtLeast,
}

impl PairOrder {
    pub const ALL: [PairOrder; 2] = [PairOrder::FirstAtMost, PairOrder::FirstAtLeast];

    /// Comparison symbol for human-readable case labels.
    pub fn symbol(self) -> &'static str {
        match self {
            PairOrder::FirstAtMost => "<=",
            PairOrder::FirstAtLeast => ">=",
        }
    }

    /// Whether a concrete weight pair satisfies this ordering.
    pub fn admits(self, left: f64, right: f64) -> bool {
        match self {
            PairOrder::FirstAtMost => left <= right,
            PairOrder::FirstAtLeast => left >= right,
        }
    }

    /// Split `(left, right)` into `(minor, major)` under this ordering
    /// assumption.
    pub fn minor_major<T>(self, left: T, right: T) -> (T, T) {
        match self {
            PairOrder::FirstAtMost => (left, right),
            PairOrder::FirstAtLeast => (right, left),
        }
    }
}

/// Which of the three candidate expressions is pinned as the maximum for an
/// adjacent pair: the pair's edge budget `e`, `major + minor/3`, or
/// `minor + major/2`.
///
/// Only the edge-budget regime yields a closed-form walk count; the other
/// two contribute zero. The serialized labels keep the vocabulary of the
/// survey reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Regime {
    /// The edge budget dominates both weight combinations.
    #[serde(rename = "max=m")]
    EdgeBudget,
    /// `major + minor/3` caps the edge budget.
    #[serde(rename = "max=RL13")]
    MajorPlusThird,
    /// `minor + major/2` caps the edge budget.
    #[serde(rename = "max=LR12")]
    MinorPlusHalf,
}

impl Regime {
    pub const ALL: [Regime; 3] = [
        Regime::EdgeBudget,
        Regime::MajorPlusThird,
        Regime::MinorPlusHalf,
    ];

    /// Stable label used in case reports.
    pub fn label(self) -> &'static str {
        match self {
            Regime::EdgeBudget => "max=m",
            Regime::MajorPlusThird => "max=RL13",
            Regime::MinorPlusHalf => "max=LR12",
        }
    }

    /// Whether a concrete `(e, minor, major)` triple falls in this regime.
    ///
    /// Classifies by which of the three expressions attains the maximum;
    /// on ties every regime achieving the maximum admits the triple, so
    /// generic triples are admitted by exactly one regime.
    pub fn admits(self, e: f64, minor: f64, major: f64) -> bool {
        let major_plus_third = major + minor / 3.0;
        let minor_plus_half = minor + major / 2.0;
        match self {
            Regime::EdgeBudget => e >= major_plus_third && e >= minor_plus_half,
            Regime::MajorPlusThird => {
                major_plus_third >= e && major_plus_third >= minor_plus_half
            }
            Regime::MinorPlusHalf => minor_plus_half >= e && minor_plus_half >= major_plus_third,
        }
    }
}

/// One case of the exhaustive split: an ordering assumption for each
/// adjacent part pair and a regime assumption for each pair's walk count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Case {
    pub order12: PairOrder,
    pub order23: PairOrder,
    pub regime12: Regime,
    pub regime23: Regime,
}

impl Case {
    /// Number of cases in the exhaustive split.
    pub const COUNT: usize = 36;

    /// Enumerate all 2 x 2 x 3 x 3 cases, orders outermost.
    ///
    /// The order is fixed so case indices and reports are stable across
    /// runs.
    pub fn enumerate() -> impl Iterator<Item = Case> {
        PairOrder::ALL.into_iter().flat_map(|order12| {
            PairOrder::ALL.into_iter().flat_map(move |order23| {
                Regime::ALL.into_iter().flat_map(move |regime12| {
                    Regime::ALL.into_iter().map(move |regime23| Case {
                        order12,
                        order23,
                        regime12,
                        regime23,
                    })
                })
            })
        })
    }

    /// Whether a concrete configuration satisfies this case's ordering and
    /// regime assumptions.
    pub fn admits(&self, config: &Configuration) -> bool {
        let [w1, w2, w3] = config.weights;
        let [d1, d2, _] = config.degrees;
        if !self.order12.admits(w1, w2) || !self.order23.admits(w2, w3) {
            return false;
        }
        let (minor12, major12) = self.order12.minor_major(w1, w2);
        let (minor23, major23) = self.order23.minor_major(w2, w3);
        self.regime12.admits(d1 + w1, minor12, major12)
            && self.regime23.admits(d2 + w2, minor23, major23)
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "W1 {} W2, W2 {} W3, {}, {}",
            self.order12.symbol(),
            self.order23.symbol(),
            self.regime12.label(),
            self.regime23.label()
        )
    }
}

/// A concrete assignment of part weights and degrees, prior to any case
/// assumption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Configuration {
    pub weights: [f64; 3],
    pub degrees: [f64; 3],
}
