//! The rule set: one ordered checker list per move type.
//!
//! A move is legal when the engine's baseline checks pass and every checker
//! in the applicable list passes. Lists are checked in order and the first
//! failure is reported.

use serde::{Deserialize, Serialize};

use super::build::BuildChecker;
use super::free::FreeChecker;
use super::lane::LaneChecker;
use super::matching::MatchChecker;
use super::pair::PairChecker;
use super::sort::SortChecker;
use super::CheckResult;

/// Ordered checker lists for every move type.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RuleSet {
    /// Mover/target pairs in a build, and adjacent cards within a moving stack.
    pub pair: Vec<PairChecker>,
    pub build: Vec<BuildChecker>,
    pub lane: Vec<LaneChecker>,
    pub sort: Vec<SortChecker>,
    pub matching: Vec<MatchChecker>,
    pub free: Vec<FreeChecker>,
}

impl RuleSet {
    /// Empty lists, except that matching is forbidden.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pair: Vec::new(),
            build: Vec::new(),
            lane: Vec::new(),
            sort: Vec::new(),
            matching: vec![MatchChecker::Forbidden],
            free: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_pair(mut self, checker: PairChecker) -> Self {
        self.pair.push(checker);
        self
    }

    #[must_use]
    pub fn with_build(mut self, checker: BuildChecker) -> Self {
        self.build.push(checker);
        self
    }

    #[must_use]
    pub fn with_lane(mut self, checker: LaneChecker) -> Self {
        self.lane.push(checker);
        self
    }

    #[must_use]
    pub fn with_sort(mut self, checker: SortChecker) -> Self {
        self.sort.push(checker);
        self
    }

    /// Add a match checker. The first one added replaces the default
    /// `Forbidden`.
    #[must_use]
    pub fn with_match(mut self, checker: MatchChecker) -> Self {
        if matches!(self.matching.as_slice(), [MatchChecker::Forbidden]) {
            self.matching.clear();
        }
        self.matching.push(checker);
        self
    }

    #[must_use]
    pub fn with_free(mut self, checker: FreeChecker) -> Self {
        self.free.push(checker);
        self
    }

    /// Kings-only laning limits how many lanes a "move one" stack can use.
    #[must_use]
    pub fn lanes_need_kings(&self) -> bool {
        self.lane.iter().any(|c| matches!(c, LaneChecker::King))
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Run checkers in order, stopping at the first failure.
pub(crate) fn run_all<C>(checkers: &[C], mut check: impl FnMut(&C) -> CheckResult) -> CheckResult {
    checkers.iter().try_for_each(|checker| check(checker))
}
