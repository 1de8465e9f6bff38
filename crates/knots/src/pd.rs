//! Planar Diagram (PD) codes: the combinatorial input of the pipeline.
//!
//! - `ArcId`: integer label of a strand segment between two crossings.
//! - `Crossing`: the four arc labels meeting at one crossing, in cyclic order.
//! - `PdCode`: ordered, non-empty crossing list; immutable once validated.
//!
//! Validation happens at the `PdCode` boundary so everything downstream
//! (graph, layout, trace, render) can assume well-formed input.

use std::fmt;

/// Arc-segment identifier. Unique per diagram; shared by the two crossings
/// the arc connects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArcId(pub u32);

impl fmt::Display for ArcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One crossing: four arc ends in cyclic order.
pub type Crossing = [ArcId; 4];

/// Errors surfaced by PD-code validation.
#[derive(Debug, PartialEq, Eq)]
pub enum PdError {
    /// A PD code must contain at least one crossing.
    Empty,
    /// A crossing row did not have exactly four arc identifiers.
    WrongArity { index: usize, len: usize },
    /// An arc identifier appeared twice within one crossing (self-loop).
    RepeatedArc { index: usize, arc: ArcId },
}

impl fmt::Display for PdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdError::Empty => write!(f, "PD code has no crossings"),
            PdError::WrongArity { index, len } => {
                write!(f, "crossing {index} has {len} arc identifiers (expected 4)")
            }
            PdError::RepeatedArc { index, arc } => {
                write!(f, "crossing {index} repeats arc {arc}")
            }
        }
    }
}

impl std::error::Error for PdError {}

/// A validated PD code. Its length is the crossing number of the diagram.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PdCode {
    crossings: Vec<Crossing>,
}

impl PdCode {
    /// Build from fixed-arity crossings, checking non-emptiness and
    /// per-crossing distinctness.
    pub fn new(crossings: Vec<Crossing>) -> Result<Self, PdError> {
        if crossings.is_empty() {
            return Err(PdError::Empty);
        }
        for (index, cross) in crossings.iter().enumerate() {
            for i in 0..4 {
                for j in (i + 1)..4 {
                    if cross[i] == cross[j] {
                        return Err(PdError::RepeatedArc {
                            index,
                            arc: cross[i],
                        });
                    }
                }
            }
        }
        Ok(Self { crossings })
    }

    /// Build from unsized rows (e.g. parsed input), checking arity as well.
    pub fn from_rows(rows: &[&[u32]]) -> Result<Self, PdError> {
        let mut crossings = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let &[a, b, c, d] = *row else {
                return Err(PdError::WrongArity {
                    index,
                    len: row.len(),
                });
            };
            crossings.push([ArcId(a), ArcId(b), ArcId(c), ArcId(d)]);
        }
        Self::new(crossings)
    }

    /// Crossing number of the diagram.
    #[inline]
    pub fn crossing_count(&self) -> usize {
        self.crossings.len()
    }

    #[inline]
    pub fn crossings(&self) -> &[Crossing] {
        &self.crossings
    }

    /// Position-index of the first crossing containing `arc`, in PD order.
    pub fn first_crossing_of(&self, arc: ArcId) -> Option<usize> {
        self.crossings.iter().position(|c| c.contains(&arc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_code() {
        assert_eq!(PdCode::new(Vec::new()), Err(PdError::Empty));
    }

    #[test]
    fn rejects_wrong_arity_rows() {
        let err = PdCode::from_rows(&[&[1, 2, 3]]).unwrap_err();
        assert_eq!(err, PdError::WrongArity { index: 0, len: 3 });
    }

    #[test]
    fn rejects_repeated_arc_in_crossing() {
        let err = PdCode::from_rows(&[&[1, 2, 3, 4], &[5, 6, 5, 7]]).unwrap_err();
        assert_eq!(
            err,
            PdError::RepeatedArc {
                index: 1,
                arc: ArcId(5)
            }
        );
    }

    #[test]
    fn first_crossing_prefers_pd_order() {
        // Arc 4 also appears in the second crossing; the first wins.
        let pd = PdCode::from_rows(&[&[1, 2, 3, 4], &[4, 5, 6, 7]]).unwrap();
        assert_eq!(pd.first_crossing_of(ArcId(4)), Some(0));
        assert_eq!(pd.first_crossing_of(ArcId(7)), Some(1));
        assert_eq!(pd.first_crossing_of(ArcId(99)), None);
    }
}
