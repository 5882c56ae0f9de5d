//! Record sources for the matching engine.
//!
//! Input files are delimited text, one record per line:
//!
//! | File | Columns | Example |
//! |------|---------|---------|
//! | Feature list / library | name, [retention time] | `Acetone,4.2` |
//! | Molecule list | whole line is the name | `1,2-Dichloroethane` |
//! | Inventory | name, location | `Caffeine,Shelf A3` |
//!
//! Blank lines and `#` comments are skipped. In delimited files a header line is
//! recognised by its first column (`name`, `compound`, `feature`, `molecule`) and
//! fields are trimmed. Molecule lists are never split or header-checked, since
//! IUPAC names routinely contain commas.
//! A missing retention time is kept as unknown rather than zero.
//!
//! ## Example
//!
//! ```rust
//! use rt_matcher::parsing::delimited::parse_compound_text;
//!
//! let compounds = parse_compound_text("name,rt\nAcetone,4.2\nGlucose,\n", ',').unwrap();
//! assert_eq!(compounds[0].retention_time, Some(4.2));
//! assert_eq!(compounds[1].retention_time, None);
//! ```

use std::path::Path;

use crate::utils::validation::{ValidationError, MAX_RECORDS};

pub mod delimited;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid record format: {0}")]
    InvalidFormat(String),

    #[error("Invalid value on line {line}: {source}")]
    InvalidValue {
        line: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Too many records: line {line} goes past the maximum of {MAX_RECORDS} records")]
    TooManyRecords { line: usize },
}

/// Pick the field delimiter for a file: tab for `.tsv`, comma otherwise
#[must_use]
pub fn delimiter_for(path: &Path) -> char {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match ext.as_deref() {
        Some("tsv" | "tab") => '\t',
        _ => ',',
    }
}
