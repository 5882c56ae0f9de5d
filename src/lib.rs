//! # rt-matcher
//!
//! A library for matching compounds between two lists by name and retention time.
//!
//! In untargeted metabolomics, a run produces a list of detected features, each with a
//! putative name and a retention time (RT). Confirming an annotation means finding the
//! same compound in a reference library and checking that both were seen at about the
//! same RT. Names drift between tools ("Acetne" vs "Acetone", "Caffeine" vs
//! "Caffeine anhydrous"), so exact string comparison alone misses real matches.
//!
//! ## Features
//!
//! - **Exact matching**: literal name equality
//! - **Fuzzy matching**: names within a single edit, or found inside one another
//! - **RT tolerance**: strict absolute-difference check; unknown RTs never agree
//! - **Confirmation**: an optional callback can veto each non-exact match
//! - **Inventory lookup**: the same engine locates molecules in a storage inventory
//!
//! ## Example
//!
//! ```rust
//! use rt_matcher::{Compound, CompoundMatcher, MatchingConfig, Tolerance};
//!
//! let features = vec![Compound::new("Acetone").with_retention_time(4.2)];
//! let library = vec![Compound::new("Acetone").with_retention_time(4.3)];
//!
//! let engine = CompoundMatcher::new(MatchingConfig {
//!     tolerance: Tolerance::Within(0.5),
//!     ..MatchingConfig::default()
//! });
//!
//! for m in engine.find_matches(&features, &library) {
//!     println!("{} match: {} -- {}", m.kind(), m.left, m.right);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Compound and inventory records, matching configuration types
//! - [`matching`]: Name predicates and the compound matching engine
//! - [`parsing`]: Delimited text record sources
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::compound::{Compound, Record, StockEntry};
pub use crate::core::types::*;
pub use crate::matching::engine::{CompoundMatcher, MatchOutcome, MatchingConfig};
