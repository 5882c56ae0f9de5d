//! Name comparison predicates.
//!
//! Two strategies are supported:
//!
//! - [`exact`]: literal string equality, no case folding or normalization
//! - [`fuzzy`]: the names are within [`FUZZY_MAX_EDITS`] edits of each other,
//!   either as whole strings or with one name found approximately inside the other
//!
//! The fuzzy predicate is an approximate substring search run in both directions,
//! so `"Acetone"` matches `"Acetone, HPLC grade"` as well as `"Acetne"`.

use crate::core::types::NameStrategy;

/// Maximum number of insertions, deletions or substitutions for a fuzzy match
pub const FUZZY_MAX_EDITS: usize = 1;

/// Literal equality
#[must_use]
pub fn exact(a: &str, b: &str) -> bool {
    a == b
}

/// Approximate equality within [`FUZZY_MAX_EDITS`] edits.
///
/// Symmetric and reflexive. An empty name only matches names of at most
/// [`FUZZY_MAX_EDITS`] characters; a name of a single character matches every
/// non-empty name.
#[must_use]
pub fn fuzzy(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    if a.is_empty() || b.is_empty() {
        return strsim::levenshtein(a, b) <= FUZZY_MAX_EDITS;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    contains_near(&a, &b, FUZZY_MAX_EDITS) || contains_near(&b, &a, FUZZY_MAX_EDITS)
}

/// Check whether `pattern` occurs somewhere in `text` with at most `max_edits` edits.
///
/// Column-wise edit distance where a match may start at any text position,
/// so the top row of the table stays at zero.
fn contains_near(pattern: &[char], text: &[char], max_edits: usize) -> bool {
    let m = pattern.len();
    if m <= max_edits {
        return true;
    }

    let mut prev: Vec<usize> = (0..=m).collect();
    let mut cur = vec![0; m + 1];

    for &t in text {
        cur[0] = 0;
        for i in 1..=m {
            let substitution = prev[i - 1] + usize::from(pattern[i - 1] != t);
            let deletion = prev[i] + 1;
            let insertion = cur[i - 1] + 1;
            cur[i] = substitution.min(deletion).min(insertion);
        }

        if cur[m] <= max_edits {
            return true;
        }

        std::mem::swap(&mut prev, &mut cur);
    }

    false
}

impl NameStrategy {
    /// Apply this strategy to two names
    #[must_use]
    pub fn matches(&self, a: &str, b: &str) -> bool {
        match self {
            Self::Exact => exact(a, b),
            Self::Fuzzy => fuzzy(a, b),
        }
    }
}
