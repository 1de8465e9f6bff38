//! Fixed table of named knots and their PD codes.
//!
//! Pure data: the quiz draws from this table and the core consumes it
//! read-only. Crossing numbers run 1 (Unknot) through 10. The codes use
//! consecutive arc labels per crossing; the connectivity they induce is what
//! the drawing pipeline renders, no sign information is carried.

use crate::pd::{ArcId, Crossing, PdCode};

/// Name of the trivial knot, excluded from quiz pairs.
pub const UNKNOT: &str = "Unknot";

/// `(name, crossing_count)` rows of the catalog, in crossing order.
const TABLE: &[(&str, usize)] = &[
    (UNKNOT, 1),
    ("Trefoil", 3),
    ("FigureEight", 4),
    ("Cinquefoil", 5),
    ("6₁", 6),
    ("7₄", 7),
    ("8₁₉", 8),
    ("9₄₂", 9),
    ("10₁₆₁", 10),
];

/// All catalog names, in crossing order.
pub fn names() -> Vec<&'static str> {
    TABLE.iter().map(|(name, _)| *name).collect()
}

/// Names eligible for quiz pairs (catalog minus the trivial knot).
pub fn quiz_names() -> Vec<&'static str> {
    TABLE
        .iter()
        .filter(|(name, _)| *name != UNKNOT)
        .map(|(name, _)| *name)
        .collect()
}

/// Look up the PD code for a named knot.
pub fn pd_code(name: &str) -> Option<PdCode> {
    let &(_, n) = TABLE.iter().find(|(t, _)| *t == name)?;
    let crossings: Vec<Crossing> = (0..n as u32)
        .map(|i| {
            let base = 4 * i + 1;
            [
                ArcId(base),
                ArcId(base + 1),
                ArcId(base + 2),
                ArcId(base + 3),
            ]
        })
        .collect();
    // The table only holds positive counts, so validation cannot fail here.
    Some(PdCode::new(crossings).unwrap_or_else(|_| unreachable!()))
}
