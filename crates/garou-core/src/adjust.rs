//! Adjustment-move search.
//!
//! After a combo the attacker has `advantage` frames before the opponent can
//! act. To land a setup (a jump, a meaty attack, ...) exactly on wake-up the
//! attacker burns the difference with one move or two moves in a row. This
//! module finds every single move and every unordered pair of catalog entries
//! whose total frame count falls in the allowed window.
//!
//! Results keep catalog order: all singles first, then all pairs in
//! `(i, j)` index order with `i < j`. A pair is formed from two catalog
//! *entries*, so a move is only used twice when the catalog lists it twice.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use tracing::debug;

use crate::frame::Move;

/// Text shown when nothing fills the window
pub const NO_MATCH: &str = "no match";

/// A move that can fill frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub name: &'a str,
    pub total: i32,
}

impl<'a> Candidate<'a> {
    pub fn new(name: &'a str, total: i32) -> Self {
        Self { name, total }
    }

    /// Moves without a total cannot fill anything and yield `None`
    pub fn from_move(mv: &'a Move) -> Option<Self> {
        let total = i32::try_from(mv.total?).ok()?;
        Some(Self::new(&mv.name, total))
    }
}

/// Which side of the required count a fill may land on
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FillPolicy {
    /// Window `[R, R + T]`; nothing fits when `R < 0`
    #[default]
    AtOrAfter,
    /// Window `[R - T, R]`; nothing fits when `R < -T`
    AtOrBefore,
}

impl FillPolicy {
    /// Inclusive window for a required count, or `None` when the requirement
    /// cannot be met at all
    pub fn window(self, required: i32, tolerance: u32) -> Option<FillWindow> {
        let required = i64::from(required);
        let tolerance = i64::from(tolerance);

        match self {
            Self::AtOrAfter => (required >= 0).then_some(FillWindow {
                min: required,
                max: required + tolerance,
            }),
            Self::AtOrBefore => (required >= -tolerance).then_some(FillWindow {
                min: required - tolerance,
                max: required,
            }),
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

/// Inclusive frame range a fill must land in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillWindow {
    pub min: i64,
    pub max: i64,
}

impl FillWindow {
    pub fn contains(&self, total: i64) -> bool {
        (self.min..=self.max).contains(&total)
    }
}

/// Tolerance and policy applied to one kind of target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FillRule {
    pub policy: FillPolicy,
    pub tolerance: u32,
}

impl FillRule {
    /// Fixed timing targets: the fill has to land exactly on the frame
    pub const EXACT: Self = Self {
        policy: FillPolicy::AtOrAfter,
        tolerance: 0,
    };

    pub fn new(policy: FillPolicy, tolerance: u32) -> Self {
        Self { policy, tolerance }
    }

    pub fn search(&self, candidates: &[Candidate<'_>], required: i32) -> Vec<Adjustment> {
        find_adjustments(candidates, required, self.tolerance, self.policy)
    }
}

/// One way of filling the window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Adjustment {
    Single {
        name: String,
        total: i32,
        diff: i64,
    },
    Pair {
        first: String,
        first_total: i32,
        second: String,
        second_total: i32,
        diff: i64,
    },
    NoMatch,
}

impl Adjustment {
    pub fn is_match(&self) -> bool {
        !matches!(self, Self::NoMatch)
    }

    /// Frames consumed by the fill
    pub fn total(&self) -> Option<i64> {
        match self {
            Self::Single { total, .. } => Some(i64::from(*total)),
            Self::Pair {
                first_total,
                second_total,
                ..
            } => Some(i64::from(*first_total) + i64::from(*second_total)),
            Self::NoMatch => None,
        }
    }

    /// Frames over (positive) or under (negative) the exact requirement
    pub fn diff(&self) -> Option<i64> {
        match self {
            Self::Single { diff, .. } | Self::Pair { diff, .. } => Some(*diff),
            Self::NoMatch => None,
        }
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single { name, total, diff } => write!(f, "{name} ({total}F)({diff:+}F)"),
            Self::Pair {
                first,
                first_total,
                second,
                second_total,
                diff,
            } => write!(
                f,
                "{first} ({first_total}F) + {second} ({second_total}F)({diff:+}F)"
            ),
            Self::NoMatch => f.write_str(NO_MATCH),
        }
    }
}

/// Find every single move and unordered pair that fills `required` frames.
///
/// Returns `[Adjustment::NoMatch]` when the window is unreachable or nothing
/// lands in it; the result is never empty.
pub fn find_adjustments(
    candidates: &[Candidate<'_>],
    required: i32,
    tolerance: u32,
    policy: FillPolicy,
) -> Vec<Adjustment> {
    let Some(window) = policy.window(required, tolerance) else {
        debug!(
            "Required {}F is out of reach ({}, tolerance {}F)",
            required, policy, tolerance
        );
        return vec![Adjustment::NoMatch];
    };
    let required = i64::from(required);

    let mut results: Vec<Adjustment> = candidates
        .iter()
        .filter(|c| window.contains(i64::from(c.total)))
        .map(|c| Adjustment::Single {
            name: c.name.to_string(),
            total: c.total,
            diff: i64::from(c.total) - required,
        })
        .collect();

    for (i, first) in candidates.iter().enumerate() {
        for second in &candidates[i + 1..] {
            let total = i64::from(first.total) + i64::from(second.total);
            if window.contains(total) {
                results.push(Adjustment::Pair {
                    first: first.name.to_string(),
                    first_total: first.total,
                    second: second.name.to_string(),
                    second_total: second.total,
                    diff: total - required,
                });
            }
        }
    }

    debug!(
        "Required {}F in [{}, {}]: {} fills from {} candidates",
        required,
        window.min,
        window.max,
        results.len(),
        candidates.len()
    );

    if results.is_empty() {
        results.push(Adjustment::NoMatch);
    }
    results
}

/// Same as [`find_adjustments`], rendered as display strings
pub fn describe_adjustments(
    candidates: &[Candidate<'_>],
    required: i32,
    tolerance: u32,
    policy: FillPolicy,
) -> Vec<String> {
    find_adjustments(candidates, required, tolerance, policy)
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(name: &str, total: i32) -> Candidate<'_> {
        Candidate::new(name, total)
    }

    #[test]
    fn test_single_match_only_inside_window() {
        let candidates = [c("A", 10), c("B", 9), c("C", 11)];
        let results = describe_adjustments(&candidates, 10, 0, FillPolicy::AtOrAfter);
        assert_eq!(results, vec!["A (10F)(+0F)"]);
    }

    #[test]
    fn test_pair_is_emitted_once() {
        let candidates = [c("A", 5), c("B", 5)];
        let results = describe_adjustments(&candidates, 10, 0, FillPolicy::AtOrAfter);
        assert_eq!(results, vec!["A (5F) + B (5F)(+0F)"]);
    }

    #[test]
    fn test_move_is_not_paired_with_itself() {
        let candidates = [c("A", 5)];
        let results = find_adjustments(&candidates, 10, 0, FillPolicy::AtOrAfter);
        assert_eq!(results, vec![Adjustment::NoMatch]);
    }

    #[test]
    fn test_duplicate_catalog_entries_can_pair() {
        let candidates = [c("A", 5), c("A", 5)];
        let results = describe_adjustments(&candidates, 10, 0, FillPolicy::AtOrAfter);
        assert_eq!(results, vec!["A (5F) + A (5F)(+0F)"]);
    }

    #[test]
    fn test_empty_candidates_yield_sentinel() {
        for (required, tolerance) in [(0, 0), (10, 3), (-1, 5), (100, 0)] {
            for policy in [FillPolicy::AtOrAfter, FillPolicy::AtOrBefore] {
                let results = describe_adjustments(&[], required, tolerance, policy);
                assert_eq!(results, vec![NO_MATCH]);
            }
        }
    }

    #[test]
    fn test_negative_required_short_circuits() {
        // The short-circuit depends on `required` alone, even if a candidate
        // would otherwise land in the window
        let candidates = [c("Impossible", -5), c("A", 0)];
        let results = find_adjustments(&candidates, -5, 2, FillPolicy::AtOrAfter);
        assert_eq!(results, vec![Adjustment::NoMatch]);
    }

    #[test]
    fn test_at_or_before_short_circuit_bound() {
        let candidates = [c("Zero", 0)];
        // -3 is still reachable with tolerance 3: window [-6, -3]
        assert_eq!(
            find_adjustments(&candidates, -3, 3, FillPolicy::AtOrBefore),
            vec![Adjustment::NoMatch]
        );
        // -4 is below -tolerance and never searched
        assert_eq!(
            describe_adjustments(&candidates, -4, 3, FillPolicy::AtOrBefore),
            vec![NO_MATCH]
        );
        // 0 is reachable under both policies
        assert_eq!(
            describe_adjustments(&candidates, 0, 3, FillPolicy::AtOrBefore),
            vec!["Zero (0F)(+0F)"]
        );
    }

    #[test]
    fn test_windows_per_policy() {
        assert_eq!(
            FillPolicy::AtOrAfter.window(12, 3),
            Some(FillWindow { min: 12, max: 15 })
        );
        assert_eq!(
            FillPolicy::AtOrBefore.window(12, 3),
            Some(FillWindow { min: 9, max: 12 })
        );
        assert_eq!(FillPolicy::AtOrAfter.window(-1, 3), None);
        assert_eq!(
            FillPolicy::AtOrBefore.window(-3, 3),
            Some(FillWindow { min: -6, max: -3 })
        );
        assert_eq!(FillPolicy::AtOrBefore.window(-4, 3), None);
    }

    #[test]
    fn test_at_or_before_reports_negative_diff() {
        let candidates = [c("5A", 8), c("2D", 14), c("Jump-in", 22)];
        let results = describe_adjustments(&candidates, 16, 3, FillPolicy::AtOrBefore);
        assert_eq!(results, vec!["2D (14F)(-2F)"]);
    }

    #[test]
    fn test_tolerance_window_reports_diff() {
        let candidates = [c("5A", 8), c("2D", 14), c("Jump-in", 22)];
        let results = describe_adjustments(&candidates, 12, 3, FillPolicy::AtOrAfter);
        assert_eq!(results, vec!["2D (14F)(+2F)"]);
    }

    #[test]
    fn test_singles_precede_pairs_in_catalog_order() {
        let candidates = [c("A", 4), c("B", 10), c("C", 6), c("D", 10)];
        let results = describe_adjustments(&candidates, 10, 0, FillPolicy::AtOrAfter);
        assert_eq!(
            results,
            vec![
                "B (10F)(+0F)",
                "D (10F)(+0F)",
                "A (4F) + C (6F)(+0F)",
            ]
        );
    }

    #[test]
    fn test_search_is_idempotent() {
        let candidates = [c("A", 3), c("B", 4), c("C", 7), c("D", 1), c("E", 6)];
        let first = find_adjustments(&candidates, 7, 1, FillPolicy::AtOrAfter);
        let second = find_adjustments(&candidates, 7, 1, FillPolicy::AtOrAfter);
        assert_eq!(first, second);
        assert!(first.len() > 1);
    }

    #[test]
    fn test_every_match_lies_in_window() {
        let candidates = [c("A", 3), c("B", 4), c("C", 7), c("D", 1), c("E", 6), c("F", 9)];
        for policy in [FillPolicy::AtOrAfter, FillPolicy::AtOrBefore] {
            for required in -4..20 {
                let Some(window) = policy.window(required, 2) else {
                    continue;
                };
                for adjustment in find_adjustments(&candidates, required, 2, policy) {
                    if let Some(total) = adjustment.total() {
                        assert!(window.contains(total), "{adjustment} outside {window:?}");
                        assert_eq!(adjustment.diff(), Some(total - i64::from(required)));
                    }
                }
            }
        }
    }

    #[test]
    fn test_candidate_from_move() {
        let with_total = Move::new("5A").with_total(16);
        let without_total = Move::new("Throw").with_startup(1);
        assert_eq!(Candidate::from_move(&with_total), Some(c("5A", 16)));
        assert_eq!(Candidate::from_move(&without_total), None);
    }

    #[test]
    fn test_fill_rule_exact() {
        let candidates = [c("A", 12), c("B", 13)];
        let results = FillRule::EXACT.search(&candidates, 12);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].to_string(), "A (12F)(+0F)");
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("at-or-after".parse::<FillPolicy>().unwrap(), FillPolicy::AtOrAfter);
        assert_eq!("at-or-before".parse::<FillPolicy>().unwrap(), FillPolicy::AtOrBefore);
        assert_eq!(FillPolicy::AtOrBefore.to_string(), "at-or-before");
        assert!("later".parse::<FillPolicy>().is_err());
    }

    #[test]
    fn test_adjustment_serializes_with_kind_tag() {
        let json = serde_json::to_value(Adjustment::Single {
            name: "2D".to_string(),
            total: 14,
            diff: 2,
        })
        .unwrap();
        assert_eq!(json["kind"], "single");
        assert_eq!(json["diff"], 2);
        assert_eq!(serde_json::to_value(Adjustment::NoMatch).unwrap()["kind"], "no_match");
    }
}
