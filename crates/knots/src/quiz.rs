//! Quiz pair generation.
//!
//! "Equivalence" here is identity of the generating catalog name, a stand-in
//! for topological equivalence: the equivalent branch builds two instances
//! from the identical PD code, the non-equivalent branch draws two distinct
//! names without replacement. The trivial knot is excluded from both
//! branches. No invariant computation happens anywhere.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog;
use crate::knot::Knot;

/// Replay token to make pair draws reproducible and indexable by round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Errors surfaced by pair generation.
#[derive(Debug)]
pub enum PairError {
    /// The catalog must offer at least two non-trivial knots.
    CatalogTooSmall { have: usize },
    /// A sampled name vanished from the catalog (cannot happen for the
    /// built-in table; kept for descriptive failure over a panic).
    UnknownName { name: String },
}

impl fmt::Display for PairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairError::CatalogTooSmall { have } => {
                write!(f, "need at least 2 non-trivial catalog knots, have {have}")
            }
            PairError::UnknownName { name } => {
                write!(f, "catalog has no knot named {name:?}")
            }
        }
    }
}

impl std::error::Error for PairError {}

/// One generated quiz round: two knots plus the ground-truth answer.
#[derive(Clone, Debug)]
pub struct KnotPair {
    pub first: Knot,
    pub second: Knot,
    /// True iff both knots were generated from the same catalog name.
    pub equivalent: bool,
}

/// Draw a quiz pair for `tok`.
///
/// Flips the equivalent/non-equivalent branch, then samples names from the
/// catalog minus the Unknot. Identical tokens reproduce identical pairs.
pub fn draw_pair(tok: ReplayToken) -> Result<KnotPair, PairError> {
    let names = catalog::quiz_names();
    if names.len() < 2 {
        return Err(PairError::CatalogTooSmall { have: names.len() });
    }
    let mut rng = tok.to_std_rng();
    let equivalent = rng.gen_bool(0.5);
    let (name1, name2) = if equivalent {
        let name = names[rng.gen_range(0..names.len())];
        (name, name)
    } else {
        // Without replacement: draw the second from the remaining names.
        let i = rng.gen_range(0..names.len());
        let j_raw = rng.gen_range(0..names.len() - 1);
        let j = if j_raw >= i { j_raw + 1 } else { j_raw };
        (names[i], names[j])
    };
    let build = |name: &str| {
        catalog::pd_code(name)
            .map(|pd| Knot::from_pd(name, pd))
            .ok_or_else(|| PairError::UnknownName { name: name.into() })
    };
    Ok(KnotPair {
        first: build(name1)?,
        second: build(name2)?,
        equivalent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equivalent_pairs_share_name_and_code() {
        for index in 0..64 {
            let pair = draw_pair(ReplayToken { seed: 7, index }).unwrap();
            if pair.equivalent {
                assert_eq!(pair.first.name(), pair.second.name());
                assert_eq!(pair.first.pd(), pair.second.pd());
            } else {
                assert_ne!(pair.first.name(), pair.second.name());
            }
            assert_ne!(pair.first.name(), catalog::UNKNOT);
            assert_ne!(pair.second.name(), catalog::UNKNOT);
        }
    }

    #[test]
    fn both_branches_occur() {
        let mut eq = 0;
        let mut ne = 0;
        for index in 0..64 {
            let pair = draw_pair(ReplayToken { seed: 3, index }).unwrap();
            if pair.equivalent {
                eq += 1;
            } else {
                ne += 1;
            }
        }
        assert!(eq > 0 && ne > 0);
    }

    #[test]
    fn same_token_reproduces_the_pair() {
        let tok = ReplayToken { seed: 11, index: 4 };
        let (a, b) = (draw_pair(tok).unwrap(), draw_pair(tok).unwrap());
        assert_eq!(a.first.name(), b.first.name());
        assert_eq!(a.second.name(), b.second.name());
        assert_eq!(a.equivalent, b.equivalent);
    }
}
