use serde::{Deserialize, Serialize};

/// Anything the matching engine can compare: a name plus an optional retention time.
pub trait Record {
    /// Name used for exact or fuzzy comparison
    fn name(&self) -> &str;

    /// Retention time, if known
    fn retention_time(&self) -> Option<f64>;
}

/// A compound from a feature list or a library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compound {
    /// Compound name as it appears in the input
    pub name: String,

    /// Retention time. `None` means unknown, never zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_time: Option<f64>,
}

impl Compound {
    /// Create a compound with an unknown retention time.
    ///
    /// The name must not be empty. Parsers reject empty names; other callers
    /// are responsible for upholding this, and debug builds assert it.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "compound name must not be empty");
        Self {
            name,
            retention_time: None,
        }
    }

    /// Set the retention time, which must be finite (debug builds assert it).
    pub fn with_retention_time(mut self, rt: f64) -> Self {
        debug_assert!(rt.is_finite(), "retention time must be finite, got {rt}");
        self.retention_time = Some(rt);
        self
    }
}

impl Record for Compound {
    fn name(&self) -> &str {
        &self.name
    }

    fn retention_time(&self) -> Option<f64> {
        self.retention_time
    }
}

impl std::fmt::Display for Compound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.retention_time {
            Some(rt) => write!(f, "{}<{rt}>", self.name),
            None => write!(f, "{}<NA>", self.name),
        }
    }
}

/// An inventory entry: a stocked molecule and where to find it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    /// Name the molecule is stocked under
    pub name: String,

    /// Storage location (shelf, freezer, box, ...)
    pub location: String,
}

impl StockEntry {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

impl Record for StockEntry {
    fn name(&self) -> &str {
        &self.name
    }

    // Inventories carry no retention times
    fn retention_time(&self) -> Option<f64> {
        None
    }
}
