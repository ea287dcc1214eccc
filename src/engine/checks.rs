//! Legality checks: baseline checks plus the configured checker lists.
//!
//! Each `check_*` runs the game-invariant baseline checks first, then the
//! variant's checkers in order. The first failure is returned as the
//! user-facing message. Nothing here mutates the game.

use super::game::Solitaire;
use crate::core::{CardId, PileId, PileKind};
use crate::rules::{run_all, CheckResult};

impl Solitaire {
    /// The run of cards that would move with `card`, or an empty vec if it
    /// cannot move as the base of a stack.
    ///
    /// Cells hold single cards. Reserve and waste cards move alone and only
    /// from the top. Tableau runs must pass the pair checkers card to card.
    #[must_use]
    pub fn super_stack(&self, card: CardId) -> Vec<CardId> {
        let Some(pile) = self.piles.location(card) else {
            return Vec::new();
        };
        match self.piles.kind(pile) {
            PileKind::Cells => vec![card],
            PileKind::Reserve | PileKind::Waste => {
                if self.piles.is_top(card) {
                    vec![card]
                } else {
                    Vec::new()
                }
            }
            PileKind::Stock => Vec::new(),
            PileKind::Tableau | PileKind::Foundation => {
                let cards = self.piles.cards(pile);
                let start = self.piles.index_of(card).unwrap_or(cards.len());
                let stack = &cards[start..];
                if self.stack_is_valid(stack) {
                    stack.to_vec()
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn stack_is_valid(&self, stack: &[CardId]) -> bool {
        stack
            .windows(2)
            .all(|pair| self.pair_check(pair[1], pair[0]).is_ok())
    }

    fn pair_check(&self, mover: CardId, target: CardId) -> CheckResult {
        run_all(&self.config.rules.pair, |checker| checker.check(self, mover, target))
    }

    fn in_kind(&self, card: CardId, kind: PileKind) -> bool {
        self.piles
            .location(card)
            .map_or(false, |pile| self.piles.kind(pile) == kind)
    }

    fn not_in_play(&self, card: CardId) -> bool {
        self.piles.location(card).is_none() || self.in_kind(card, PileKind::Stock)
    }

    /// Can `mover` (and the stack above it) be built onto `target`?
    pub fn check_build(&self, mover: CardId, target: CardId) -> CheckResult {
        let m = self.card(mover);
        let t = self.card(target);

        if !self.in_kind(target, PileKind::Tableau) || !self.piles.is_top(target) {
            return Err(format!(
                "The destination (the {}) is not on top of a tableau pile.",
                t.name()
            ));
        }
        if self.in_kind(mover, PileKind::Foundation) {
            return Err("Cards may not be moved from the foundation.".into());
        }
        if !self.piles.is_face_up(mover) {
            return Err(format!("The {} is face down and cannot be moved.", m.name()));
        }
        let stack = self.super_stack(mover);
        if stack.is_empty() {
            return Err(format!("The {} is not the base of a movable stack.", m.name()));
        }
        if self.piles.location(mover) == self.piles.location(target) {
            return Err(format!("The {} is already in that pile.", m.name()));
        }

        self.pair_check(mover, target)?;
        run_all(&self.config.rules.build, |checker| {
            checker.check(self, mover, target, &stack)
        })
    }

    /// Can `card` go into a free cell?
    pub fn check_free(&self, card: CardId) -> CheckResult {
        let c = self.card(card);

        if self.piles.free_cells() == 0 {
            return Err(format!("There are no free cells to place the {} into.", c.name()));
        }
        if self.in_kind(card, PileKind::Foundation) {
            return Err("Cards cannot be freed from the foundation.".into());
        }
        if self.in_kind(card, PileKind::Cells) {
            return Err(format!("The {} is already in a free cell.", c.name()));
        }
        if self.not_in_play(card) {
            return Err(format!("The {} is not in play.", c.name()));
        }
        if !self.piles.is_top(card) {
            return Err(format!("The {} is not available to be freed.", c.name()));
        }
        if !self.piles.is_face_up(card) {
            return Err(format!("The {} is face down and cannot be freed.", c.name()));
        }

        run_all(&self.config.rules.free, |checker| checker.check(self, card))
    }

    /// Can `card` (and the stack above it) move into an empty tableau pile?
    pub fn check_lane(&self, card: CardId) -> CheckResult {
        let c = self.card(card);

        if self.in_kind(card, PileKind::Foundation) {
            return Err(format!("The {} is sorted and cannot be moved.", c.name()));
        }
        if !self.piles.is_face_up(card) {
            return Err(format!("The {} is face down and cannot be moved.", c.name()));
        }
        if self.piles.empty_tableau().next().is_none() {
            return Err("There are no open lanes.".into());
        }
        let stack = self.super_stack(card);
        if stack.is_empty() {
            return Err(format!(
                "The {} is not the base of a valid stack to move.",
                c.name()
            ));
        }

        run_all(&self.config.rules.lane, |checker| checker.check(self, card, &stack))
    }

    /// Can `card` be sorted onto `foundation`?
    pub fn check_sort(&self, card: CardId, foundation: PileId) -> CheckResult {
        let c = self.card(card);

        if self.in_kind(card, PileKind::Foundation) {
            return Err(format!("The {} is already sorted.", c.name()));
        }
        if !self.piles.is_face_up(card) {
            return Err(format!("The {} is face down and cannot be sorted.", c.name()));
        }
        if self.not_in_play(card) {
            return Err(format!("The {} is not in play.", c.name()));
        }
        let exposed_kind = matches!(
            self.location_kind(card),
            Some(PileKind::Tableau | PileKind::Reserve | PileKind::Waste)
        );
        if exposed_kind && !self.piles.is_top(card) {
            return Err(format!("The {} is blocked and cannot be sorted.", c.name()));
        }

        run_all(&self.config.rules.sort, |checker| {
            checker.check(self, card, foundation)
        })
    }

    /// Can `a` and `b` be matched and removed together?
    pub fn check_match(&self, a: CardId, b: CardId) -> CheckResult {
        if a == b {
            return Err("A card cannot be matched with itself.".into());
        }
        for card in [a, b] {
            let c = self.card(card);
            if self.in_kind(card, PileKind::Foundation) {
                return Err(format!("The {} is sorted and cannot be moved.", c.name()));
            }
            if !self.piles.is_face_up(card) {
                return Err(format!("The {} is face down and cannot be moved.", c.name()));
            }
            if self.not_in_play(card) {
                return Err(format!("The {} is not in play.", c.name()));
            }
        }

        run_all(&self.config.rules.matching, |checker| checker.check(self, a, b))
    }

    /// First foundation `card` can be sorted to, or the first failure.
    pub(crate) fn sortable_foundation(&self, card: CardId) -> Result<PileId, String> {
        let foundations = self.find_foundation(card);
        let mut first_error = None;
        for foundation in foundations {
            match self.check_sort(card, foundation) {
                Ok(()) => return Ok(foundation),
                Err(message) => {
                    first_error.get_or_insert(message);
                }
            }
        }
        Err(first_error.unwrap_or_else(|| {
            format!("There is no foundation for the {}.", self.card(card).name())
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{DealMode, SolitaireConfig};
    use crate::dealers::Dealer;
    use crate::engine::{Layout, Solitaire};
    use crate::rules::{PairChecker, RuleSet};

    fn klondike_pairs() -> SolitaireConfig {
        SolitaireConfig::new("Pairs")
            .with_tableau(3)
            .with_cells(1)
            .with_deal(DealMode::Unshuffled)
            .with_dealers(vec![Dealer::StockAll])
            .with_rules(
                RuleSet::new()
                    .with_pair(PairChecker::Down)
                    .with_pair(PairChecker::AltColor),
            )
    }

    #[test]
    fn test_super_stack() {
        let layout = Layout::new()
            .tableau(0, &["#KS", "9H", "8S", "7H"])
            .tableau(1, &["9C", "8C"]);
        let game = Solitaire::from_layout(klondike_pairs(), &layout).unwrap();

        let nine = game.find("9H").unwrap()[0];
        assert_eq!(game.super_stack(nine).len(), 3);

        let king = game.find("KS").unwrap()[0];
        assert!(game.super_stack(king).is_empty());

        // 8C on 9C breaks the alternating colors.
        let nine_clubs = game.find("9C").unwrap()[0];
        assert!(game.super_stack(nine_clubs).is_empty());
    }

    #[test]
    fn test_build_baseline_messages() {
        let layout = Layout::new()
            .tableau(0, &["#KS", "7H"])
            .tableau(1, &["8S", "5C"])
            .foundation(0, &["AD"]);
        let game = Solitaire::from_layout(klondike_pairs(), &layout).unwrap();
        let find = |text: &str| game.find(text).unwrap()[0];

        assert_eq!(
            game.check_build(find("7H"), find("8S")),
            Err("The destination (the Eight of Spades) is not on top of a tableau pile.".into())
        );
        assert_eq!(
            game.check_build(find("AD"), find("5C")),
            Err("Cards may not be moved from the foundation.".into())
        );
        assert_eq!(
            game.check_build(find("KS"), find("5C")),
            Err("The King of Spades is face down and cannot be moved.".into())
        );
    }

    #[test]
    fn test_free_baseline_messages() {
        let layout = Layout::new()
            .tableau(0, &["KS", "QH"])
            .cells(&["2C"]);
        let game = Solitaire::from_layout(klondike_pairs(), &layout).unwrap();
        let queen = game.find("QH").unwrap()[0];
        assert_eq!(
            game.check_free(queen),
            Err("There are no free cells to place the Queen of Hearts into.".into())
        );
    }

    #[test]
    fn test_match_self_rejected() {
        let layout = Layout::new().tableau(0, &["KS"]);
        let game = Solitaire::from_layout(klondike_pairs(), &layout).unwrap();
        let king = game.find("KS").unwrap()[0];
        assert_eq!(
            game.check_match(king, king),
            Err("A card cannot be matched with itself.".into())
        );
    }

    #[test]
    fn test_sort_blocked_card() {
        let layout = Layout::new().tableau(0, &["AH", "KS"]);
        let game = Solitaire::from_layout(klondike_pairs(), &layout).unwrap();
        let ace = game.find("AH").unwrap()[0];
        let foundation = game.find_foundation(ace)[0];
        assert_eq!(
            game.check_sort(ace, foundation),
            Err("The Ace of Hearts is blocked and cannot be sorted.".into())
        );
    }
}
