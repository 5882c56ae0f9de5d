use std::convert::Infallible;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::compound::{Compound, Record};
use crate::core::types::{MatchKind, NameStrategy, Tolerance};
use crate::matching::name;

/// Result of comparing two records whose names matched
#[derive(Debug, Serialize)]
pub struct MatchOutcome<'a, S = Compound, T = Compound> {
    /// Record from the source (feature) collection
    pub left: &'a S,

    /// Record from the target (library) collection
    pub right: &'a T,

    /// Names are identical under literal equality
    pub is_exact: bool,

    /// Both retention times are known and agree within the tolerance
    pub is_within_tolerance: bool,
}

impl<'a, S: Record, T: Record> MatchOutcome<'a, S, T> {
    /// Compare two records, returning `None` when their names do not match under `strategy`.
    ///
    /// Exactness is always judged by literal equality, whichever strategy admitted the pair.
    pub fn evaluate(
        left: &'a S,
        right: &'a T,
        strategy: NameStrategy,
        tolerance: Tolerance,
    ) -> Option<Self> {
        if !strategy.matches(left.name(), right.name()) {
            return None;
        }

        Some(Self {
            left,
            right,
            is_exact: name::exact(left.name(), right.name()),
            is_within_tolerance: tolerance.accepts(left.retention_time(), right.retention_time()),
        })
    }
}

impl<S, T> MatchOutcome<'_, S, T> {
    pub fn kind(&self) -> MatchKind {
        MatchKind::from_exact(self.is_exact)
    }
}

// Outcomes only hold shared references, so copying never requires S or T to be Clone
impl<S, T> Clone for MatchOutcome<'_, S, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, T> Copy for MatchOutcome<'_, S, T> {}

/// Configuration for the compound matcher
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// How names are compared
    pub strategy: NameStrategy,

    /// Allowed retention time difference
    pub tolerance: Tolerance,

    /// Report name matches even when retention times disagree
    pub name_only: bool,
}

impl MatchingConfig {
    /// Whether a retained outcome belongs in the final output
    fn is_reportable<S, T>(&self, outcome: &MatchOutcome<'_, S, T>) -> bool {
        self.name_only || outcome.is_within_tolerance
    }
}

/// Matches every source record against every target record
#[derive(Debug, Clone, Default)]
pub struct CompoundMatcher {
    config: MatchingConfig,
}

impl CompoundMatcher {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Find all reportable matches, accepting every non-exact name match.
    ///
    /// Output is in source-major, target-minor order.
    pub fn find_matches<'a, S: Record, T: Record>(
        &self,
        source: &'a [S],
        target: &'a [T],
    ) -> Vec<MatchOutcome<'a, S, T>> {
        let result: Result<_, Infallible> =
            self.find_matches_confirmed(source, target, |_, _| Ok(true));
        match result {
            Ok(matches) => matches,
            Err(never) => match never {},
        }
    }

    /// Find all reportable matches, asking `confirm` about each non-exact name match.
    ///
    /// `confirm` is called at most once per candidate pair, in cross-product order,
    /// before the tolerance filter is applied. A rejected pair is dropped even when
    /// `name_only` is set. The first error returned by `confirm` aborts matching and
    /// is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns whatever error `confirm` returns.
    pub fn find_matches_confirmed<'a, S, T, F, E>(
        &self,
        source: &'a [S],
        target: &'a [T],
        mut confirm: F,
    ) -> Result<Vec<MatchOutcome<'a, S, T>>, E>
    where
        S: Record,
        T: Record,
        F: FnMut(&str, &str) -> Result<bool, E>,
    {
        let mut results = Vec::new();
        let mut candidates = 0usize;
        let mut rejected = 0usize;

        for left in source {
            for right in target {
                let Some(outcome) = MatchOutcome::evaluate(
                    left,
                    right,
                    self.config.strategy,
                    self.config.tolerance,
                ) else {
                    continue;
                };
                candidates += 1;

                if !outcome.is_exact && !confirm(left.name(), right.name())? {
                    rejected += 1;
                    continue;
                }

                if self.config.is_reportable(&outcome) {
                    results.push(outcome);
                }
            }
        }

        debug!(
            pairs = source.len() * target.len(),
            candidates,
            rejected,
            reported = results.len(),
            "compound matching finished"
        );

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compound::StockEntry;

    fn compound(name: &str, rt: f64) -> Compound {
        Compound::new(name).with_retention_time(rt)
    }

    fn matcher(strategy: NameStrategy, tolerance: Tolerance, name_only: bool) -> CompoundMatcher {
        CompoundMatcher::new(MatchingConfig {
            strategy,
            tolerance,
            name_only,
        })
    }

    #[test]
    fn test_exact_within_tolerance() {
        let source = vec![compound("Acetone", 4.2)];
        let target = vec![compound("Acetone", 4.3)];

        let matches = matcher(NameStrategy::Exact, Tolerance::Within(0.5), false)
            .find_matches(&source, &target);

        assert_eq!(matches.len(), 1);
        assert!(matches[0].is_exact);
        assert!(matches[0].is_within_tolerance);
        assert_eq!(matches[0].kind(), MatchKind::Exact);
    }

    #[test]
    fn test_exact_outside_tolerance() {
        let source = vec![compound("Acetone", 4.2)];
        let target = vec![compound("Acetone", 4.3)];

        let strict = matcher(NameStrategy::Exact, Tolerance::Within(0.05), false);
        assert!(strict.find_matches(&source, &target).is_empty());

        let name_only = matcher(NameStrategy::Exact, Tolerance::Within(0.05), true);
        let matches = name_only.find_matches(&source, &target);
        assert_eq!(matches.len(), 1);
        assert!(matches[0].is_exact);
        assert!(!matches[0].is_within_tolerance);
    }

    #[test]
    fn test_fuzzy_with_confirmation() {
        let source = vec![compound("Acetne", 1.0)];
        let target = vec![compound("Acetone", 1.0)];
        let engine = matcher(NameStrategy::Fuzzy, Tolerance::default(), false);

        let rejected: Result<_, Infallible> =
            engine.find_matches_confirmed(&source, &target, |_, _| Ok(false));
        assert!(rejected.unwrap().is_empty());

        let accepted: Result<_, Infallible> =
            engine.find_matches_confirmed(&source, &target, |_, _| Ok(true));
        let accepted = accepted.unwrap();
        assert_eq!(accepted.len(), 1);
        assert!(!accepted[0].is_exact);
        assert!(accepted[0].is_within_tolerance);
        assert_eq!(accepted[0].kind(), MatchKind::Fuzzy);
    }

    #[test]
    fn test_missing_rt_never_within_tolerance() {
        let source = vec![Compound::new("X")];
        let target = vec![compound("X", 1.0)];

        let engine = matcher(NameStrategy::Exact, Tolerance::Unbounded, true);
        let matches = engine.find_matches(&source, &target);
        assert_eq!(matches.len(), 1);
        assert!(matches[0].is_exact);
        assert!(!matches[0].is_within_tolerance);

        let strict = matcher(NameStrategy::Exact, Tolerance::Unbounded, false);
        assert!(strict.find_matches(&source, &target).is_empty());
    }

    #[test]
    fn test_disjoint_names() {
        let source = vec![compound("Acetone", 1.0), compound("Benzene", 2.0)];
        let target = vec![compound("Toluene", 1.0), compound("Xylene", 2.0)];

        let engine = matcher(NameStrategy::Exact, Tolerance::Unbounded, true);
        assert!(engine.find_matches(&source, &target).is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        let some = vec![compound("Acetone", 1.0)];
        let none: Vec<Compound> = Vec::new();
        let engine = CompoundMatcher::default();

        assert!(engine.find_matches(&none, &some).is_empty());
        assert!(engine.find_matches(&some, &none).is_empty());
    }

    #[test]
    fn test_output_order_is_source_major() {
        let source = vec![compound("A", 1.0), compound("B", 1.0)];
        let target = vec![compound("B", 1.0), compound("A", 1.0), compound("A", 1.1)];

        let engine = matcher(NameStrategy::Exact, Tolerance::Within(0.5), false);
        let matches = engine.find_matches(&source, &target);
        let pairs: Vec<(f64, &str, f64)> = matches
            .iter()
            .map(|m| {
                (
                    m.left.retention_time.unwrap(),
                    m.right.name.as_str(),
                    m.right.retention_time.unwrap(),
                )
            })
            .collect();

        assert_eq!(pairs, vec![(1.0, "A", 1.0), (1.0, "A", 1.1), (1.0, "B", 1.0)]);
        assert_eq!(matches[0].left.name, "A");
        assert_eq!(matches[2].left.name, "B");
    }

    #[test]
    fn test_duplicates_are_not_collapsed() {
        let source = vec![compound("A", 1.0), compound("A", 1.0)];
        let target = vec![compound("A", 1.0), compound("A", 1.0)];

        let matches = CompoundMatcher::default().find_matches(&source, &target);
        assert_eq!(matches.len(), 4);
    }

    #[test]
    fn test_deterministic() {
        let source = vec![compound("Acetone", 1.0), compound("Acetne", 1.2)];
        let target = vec![compound("Acetone", 1.1), compound("Acetic", 1.0)];
        let engine = matcher(NameStrategy::Fuzzy, Tolerance::Within(0.5), true);

        fn summarize(matches: Vec<MatchOutcome<'_>>) -> Vec<(String, String, bool, bool)> {
            matches
                .into_iter()
                .map(|m| {
                    (
                        m.left.name.clone(),
                        m.right.name.clone(),
                        m.is_exact,
                        m.is_within_tolerance,
                    )
                })
                .collect()
        }

        let first = summarize(engine.find_matches(&source, &target));
        let second = summarize(engine.find_matches(&source, &target));
        assert_eq!(first, second);
    }

    #[test]
    fn test_confirm_only_called_for_non_exact_candidates() {
        let source = vec![compound("Acetone", 1.0), compound("Benzene", 1.0)];
        let target = vec![
            compound("Acetone", 1.0),
            compound("Acetne", 1.0),
            compound("Toluene", 1.0),
        ];
        let engine = matcher(NameStrategy::Fuzzy, Tolerance::Within(0.5), false);

        let mut calls = Vec::new();
        let result: Result<_, Infallible> = engine.find_matches_confirmed(&source, &target, |a, b| {
            calls.push((a.to_string(), b.to_string()));
            Ok(true)
        });

        assert_eq!(result.unwrap().len(), 2);
        assert_eq!(calls, vec![("Acetone".to_string(), "Acetne".to_string())]);
    }

    #[test]
    fn test_confirm_runs_before_tolerance_filter() {
        // The pair will fail tolerance, but the oracle is still consulted
        let source = vec![compound("Acetne", 1.0)];
        let target = vec![compound("Acetone", 9.0)];
        let engine = matcher(NameStrategy::Fuzzy, Tolerance::Within(0.5), false);

        let mut calls = 0;
        let result: Result<_, Infallible> = engine.find_matches_confirmed(&source, &target, |_, _| {
            calls += 1;
            Ok(true)
        });

        assert!(result.unwrap().is_empty());
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_rejection_overrides_name_only() {
        let source = vec![compound("Acetne", 1.0)];
        let target = vec![compound("Acetone", 1.0)];
        let engine = matcher(NameStrategy::Fuzzy, Tolerance::Unbounded, true);

        let result: Result<_, Infallible> =
            engine.find_matches_confirmed(&source, &target, |_, _| Ok(false));
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_confirm_error_propagates() {
        let source = vec![compound("Acetne", 1.0), compound("Acetone", 1.0)];
        let target = vec![compound("Acetone", 1.0)];
        let engine = matcher(NameStrategy::Fuzzy, Tolerance::Within(0.5), false);

        let mut calls = 0;
        let result = engine.find_matches_confirmed(&source, &target, |_, _| {
            calls += 1;
            Err("prompt closed")
        });

        assert_eq!(result.unwrap_err(), "prompt closed");
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_exact_strategy_never_reports_fuzzy() {
        let source = vec![compound("Acetne", 1.0)];
        let target = vec![compound("Acetone", 1.0)];
        let engine = matcher(NameStrategy::Exact, Tolerance::Unbounded, true);
        assert!(engine.find_matches(&source, &target).is_empty());
    }

    #[test]
    fn test_outcome_count_bounded_by_cross_product() {
        let source: Vec<Compound> = (0..4).map(|i| compound("A", f64::from(i))).collect();
        let target: Vec<Compound> = (0..3).map(|i| compound("A", f64::from(i))).collect();
        let engine = matcher(NameStrategy::Fuzzy, Tolerance::Unbounded, true);
        assert_eq!(engine.find_matches(&source, &target).len(), 12);
    }

    #[test]
    fn test_inventory_records() {
        let molecules = vec![Compound::new("Caffeine"), Compound::new("Taurine")];
        let inventory = vec![
            StockEntry::new("Caffeine", "Shelf A"),
            StockEntry::new("Caffeine anhydrous", "Freezer 2"),
        ];
        let engine = matcher(NameStrategy::Fuzzy, Tolerance::default(), true);

        let matches = engine.find_matches(&molecules, &inventory);
        let locations: Vec<&str> = matches.iter().map(|m| m.right.location.as_str()).collect();
        assert_eq!(locations, vec!["Shelf A", "Freezer 2"]);
        assert!(matches[0].is_exact);
        assert!(!matches[1].is_exact);
        assert!(matches.iter().all(|m| !m.is_within_tolerance));
    }
}
