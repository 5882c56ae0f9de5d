use serde::{Deserialize, Serialize};

/// Default retention time tolerance
pub const DEFAULT_TOLERANCE: f64 = 0.5;

/// How two names are compared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameStrategy {
    /// Literal string equality
    #[default]
    Exact,
    /// Approximate equality within a single edit
    Fuzzy,
}

/// Maximum allowed retention time difference between two compounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tolerance {
    /// Values must differ by strictly less than this amount
    Within(f64),
    /// Any two known values agree
    Unbounded,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::Within(DEFAULT_TOLERANCE)
    }
}

impl Tolerance {
    /// Check two retention times against the tolerance.
    ///
    /// An absent value on either side never agrees, whatever the tolerance.
    #[must_use]
    pub fn accepts(&self, a: Option<f64>, b: Option<f64>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => match self {
                Self::Within(limit) => (a - b).abs() < *limit,
                Self::Unbounded => true,
            },
            _ => false,
        }
    }
}

impl std::fmt::Display for Tolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Within(limit) => write!(f, "{limit}"),
            Self::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Qualifier reported with every match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchKind {
    Exact,
    Fuzzy,
}

impl MatchKind {
    #[must_use]
    pub fn from_exact(is_exact: bool) -> Self {
        if is_exact {
            Self::Exact
        } else {
            Self::Fuzzy
        }
    }
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "EXACT"),
            Self::Fuzzy => write!(f, "FUZZY"),
        }
    }
}
