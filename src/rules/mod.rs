//! Rule checker registry.
//!
//! Legality in every variant is expressed as ordered lists of checkers, one
//! list per move type. Each checker returns `Ok(())` or the message that
//! explains why the move is illegal.
//!
//! ## Key Components
//!
//! - [`PairChecker`]: may one card sit on another (builds and stacks)
//! - [`BuildChecker`]: may a stack be built onto a tableau card
//! - [`LaneChecker`]: may a stack move into an empty tableau pile
//! - [`SortChecker`]: may a card go onto a foundation
//! - [`MatchChecker`]: may two cards be removed together
//! - [`FreeChecker`]: may a card go into a free cell
//! - [`RuleSet`]: the lists a variant is configured with
//!
//! ## Design Philosophy
//!
//! Checkers are tagged variants rather than boxed closures, so a `RuleSet`
//! can be inspected, compared and serialized. Variant-specific predicates
//! use the `Custom` variant of each family, which holds a plain function.
//!
//! ## Example Usage
//!
//! ```
//! use solitaire_engine::core::{CardId, SolitaireConfig};
//! use solitaire_engine::rules::{CheckResult, PairChecker, RuleSet};
//! use solitaire_engine::engine::Solitaire;
//!
//! fn no_face_cards(game: &Solitaire, mover: CardId, _target: CardId) -> CheckResult {
//!     if game.card(mover).rank().value() > 10 {
//!         return Err("Face cards cannot be built.".into());
//!     }
//!     Ok(())
//! }
//!
//! let rules = RuleSet::new()
//!     .with_pair(PairChecker::Down)
//!     .with_pair(PairChecker::custom("no-face-cards", no_face_cards));
//!
//! let config = SolitaireConfig::new("Custom").with_rules(rules);
//! assert_eq!(config.rules.pair.len(), 2);
//! ```

mod build;
mod free;
mod lane;
mod matching;
mod pair;
mod registry;
mod sort;
pub mod support;

pub use build::{BuildChecker, BuildFn};
pub use free::{FreeChecker, FreeFn};
pub use lane::{LaneChecker, LaneFn};
pub use matching::{MatchChecker, MatchFn};
pub use pair::{PairChecker, PairFn};
pub use registry::RuleSet;
pub use sort::{SortChecker, SortFn};

pub(crate) use registry::run_all;

/// Outcome of a single checker: `Err` carries the user-facing message.
pub type CheckResult = Result<(), String>;

/// A named custom checker function.
///
/// The name shows up in `Debug` output; function pointers have no useful
/// representation of their own.
#[derive(Clone, Copy)]
pub struct CustomCheck<F> {
    pub name: &'static str,
    pub check: F,
}

impl<F> CustomCheck<F> {
    pub const fn new(name: &'static str, check: F) -> Self {
        Self { name, check }
    }
}

impl<F> std::fmt::Debug for CustomCheck<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Custom({})", self.name)
    }
}
