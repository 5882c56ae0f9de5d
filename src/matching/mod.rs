//! Compound matching engine and name predicates.
//!
//! - [`CompoundMatcher`]: compares every source record with every target record
//! - [`MatchOutcome`]: a pair of records whose names matched, with its classification
//! - [`name`]: the exact and fuzzy name predicates
//!
//! ## Matching Algorithm
//!
//! For each `(source, target)` pair, in source-major order:
//!
//! 1. **Name check**: the configured [`NameStrategy`](crate::core::NameStrategy)
//!    decides whether the pair is a candidate at all
//! 2. **Classification**: `is_exact` uses literal equality regardless of strategy;
//!    `is_within_tolerance` requires both retention times to be known
//! 3. **Confirmation**: non-exact candidates are offered to the optional oracle,
//!    which may reject them
//! 4. **Reporting**: unless `name_only` is set, only candidates within tolerance
//!    are kept
//!
//! ## Example
//!
//! ```rust
//! use rt_matcher::{Compound, CompoundMatcher, MatchingConfig, NameStrategy};
//!
//! let features = vec![Compound::new("Acetne").with_retention_time(1.0)];
//! let library = vec![Compound::new("Acetone").with_retention_time(1.2)];
//!
//! let engine = CompoundMatcher::new(MatchingConfig {
//!     strategy: NameStrategy::Fuzzy,
//!     ..MatchingConfig::default()
//! });
//! let matches = engine.find_matches(&features, &library);
//!
//! assert_eq!(matches.len(), 1);
//! assert!(!matches[0].is_exact);
//! ```

pub mod engine;
pub mod name;

pub use engine::{CompoundMatcher, MatchOutcome, MatchingConfig};
pub use name::FUZZY_MAX_EDITS;
