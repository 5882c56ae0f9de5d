//! Core data types for compound matching.
//!
//! - [`Compound`]: a named compound with an optional retention time
//! - [`StockEntry`]: an inventory item with a storage location
//! - [`Record`]: the view of either one that the matching engine needs
//! - [`NameStrategy`], [`Tolerance`], [`MatchKind`]: matching configuration and result types
//!
//! ## Retention times
//!
//! A retention time is either absent or a finite number. Absence means "unknown"
//! and is never coerced to zero: two compounds with an unknown retention time on
//! either side are never considered within tolerance.

pub mod compound;
pub mod types;

pub use compound::{Compound, Record, StockEntry};
pub use types::{MatchKind, NameStrategy, Tolerance};
