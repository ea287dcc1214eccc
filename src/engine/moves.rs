//! The move operations: build, free, lane, sort, match, undo, alternate.
//!
//! Every operation validates completely before touching a pile. A rejected
//! move returns `Err` and leaves piles, history and counters as they were.
//!
//! ## Candidates
//!
//! In multi-deck games a token such as `"7H"` names several physical cards.
//! The `*_candidates` operations take every candidate, collect the legal
//! combinations, perform the first and keep the rest for
//! [`Solitaire::alternate`].

use serde::{Deserialize, Serialize};

use super::game::{GameStatus, Solitaire};
use super::history::{Facing, Order};
use crate::core::{CardId, MoveError, PileId, PileKind, Rank};
use crate::rules::run_all;

/// A validated move that has not been executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PendingMove {
    Build { mover: CardId, target: CardId },
    Free(CardId),
    Lane(CardId),
    Sort { card: CardId, foundation: PileId },
    Match(CardId, CardId),
}

impl Solitaire {
    // === Single-card moves ===

    /// Build `mover` (and any valid stack above it) onto `target`.
    pub fn build(&mut self, mover: CardId, target: CardId) -> Result<(), MoveError> {
        self.build_candidates(&[mover], &[target])
    }

    /// Move `card` into a free cell.
    pub fn free(&mut self, card: CardId) -> Result<(), MoveError> {
        self.free_candidates(&[card])
    }

    /// Move `card` (and any valid stack above it) into the first empty
    /// tableau pile.
    pub fn lane(&mut self, card: CardId) -> Result<(), MoveError> {
        self.lane_candidates(&[card])
    }

    /// Move `card` to the first of its foundations that accepts it.
    pub fn sort(&mut self, card: CardId) -> Result<(), MoveError> {
        self.sort_candidates(&[card])
    }

    /// Match `a` with `b`; both go to the first foundation.
    pub fn match_cards(&mut self, a: CardId, b: CardId) -> Result<(), MoveError> {
        self.match_candidates(&[a], &[b])
    }

    // === Candidate moves ===

    pub fn build_candidates(
        &mut self,
        movers: &[CardId],
        targets: &[CardId],
    ) -> Result<(), MoveError> {
        let mut moves = Vec::new();
        for &mover in movers {
            for &target in targets {
                moves.push(PendingMove::Build { mover, target });
            }
        }
        self.perform_first(moves)
    }

    pub fn free_candidates(&mut self, cards: &[CardId]) -> Result<(), MoveError> {
        self.perform_first(cards.iter().map(|&card| PendingMove::Free(card)).collect())
    }

    pub fn lane_candidates(&mut self, cards: &[CardId]) -> Result<(), MoveError> {
        self.perform_first(cards.iter().map(|&card| PendingMove::Lane(card)).collect())
    }

    pub fn sort_candidates(&mut self, cards: &[CardId]) -> Result<(), MoveError> {
        let mut moves = Vec::new();
        for &card in cards {
            for foundation in self.find_foundation(card) {
                moves.push(PendingMove::Sort { card, foundation });
            }
        }
        if moves.is_empty() {
            if let Some(&card) = cards.first() {
                return Err(MoveError::Illegal(format!(
                    "There is no foundation for the {}.",
                    self.card(card).name()
                )));
            }
        }
        self.perform_first(moves)
    }

    pub fn match_candidates(&mut self, first: &[CardId], second: &[CardId]) -> Result<(), MoveError> {
        let mut moves = Vec::new();
        for &a in first {
            for &b in second {
                if a != b {
                    moves.push(PendingMove::Match(a, b));
                }
            }
        }
        if moves.is_empty() {
            if let Some(&card) = first.first() {
                moves.push(PendingMove::Match(card, card));
            }
        }
        self.perform_first(moves)
    }

    // === Text commands ===

    /// Build using card tokens such as `"7H"` and `"8S-T3"`.
    pub fn build_text(&mut self, mover: &str, target: &str) -> Result<(), MoveError> {
        let movers = self.find(mover)?;
        let targets = self.find(target)?;
        self.build_candidates(&movers, &targets)
    }

    pub fn free_text(&mut self, card: &str) -> Result<(), MoveError> {
        let cards = self.find(card)?;
        self.free_candidates(&cards)
    }

    pub fn lane_text(&mut self, card: &str) -> Result<(), MoveError> {
        let cards = self.find(card)?;
        self.lane_candidates(&cards)
    }

    pub fn sort_text(&mut self, card: &str) -> Result<(), MoveError> {
        let cards = self.find(card)?;
        self.sort_candidates(&cards)
    }

    pub fn match_text(&mut self, a: &str, b: &str) -> Result<(), MoveError> {
        let first = self.find(a)?;
        let second = self.find(b)?;
        self.match_candidates(&first, &second)
    }

    // === Execution ===

    /// Validate a pending move against the current position.
    pub fn check_move(&self, pending: PendingMove) -> Result<(), String> {
        match pending {
            PendingMove::Build { mover, target } => self.check_build(mover, target),
            PendingMove::Free(card) => self.check_free(card),
            PendingMove::Lane(card) => self.check_lane(card),
            PendingMove::Sort { card, foundation } => self.check_sort(card, foundation),
            PendingMove::Match(a, b) => self.check_match(a, b),
        }
    }

    /// Perform the first legal move and remember the other legal ones.
    fn perform_first(&mut self, moves: Vec<PendingMove>) -> Result<(), MoveError> {
        self.ensure_playing()?;

        let mut legal = Vec::new();
        let mut first_error = None;
        for pending in moves {
            match self.check_move(pending) {
                Ok(()) => legal.push(pending),
                Err(message) => {
                    first_error.get_or_insert(message);
                }
            }
        }

        if legal.is_empty() {
            let message = first_error.unwrap_or_else(|| "There is no card to move.".into());
            log::trace!("{}: rejected move: {}", self.config.name, message);
            return Err(MoveError::Illegal(message));
        }

        let chosen = legal.remove(0);
        self.execute(chosen);
        self.alternatives = legal;
        Ok(())
    }

    /// Carry out a move that has already passed its checks.
    fn execute(&mut self, pending: PendingMove) {
        let from = match pending {
            PendingMove::Build { mover, .. }
            | PendingMove::Free(mover)
            | PendingMove::Lane(mover)
            | PendingMove::Sort { card: mover, .. }
            | PendingMove::Match(mover, _) => self.piles.location(mover),
        };

        match pending {
            PendingMove::Build { mover, target } => {
                let stack = self.super_stack(mover);
                if let Some(to) = self.piles.location(target) {
                    self.transfer(&stack, to, Facing::Keep, Order::Kept, false);
                    if self.config.clear_full_runs {
                        self.clear_full_run(to);
                    }
                }
            }
            PendingMove::Free(card) => {
                let cells = self.piles.cells();
                self.transfer(&[card], cells, Facing::Up, Order::Kept, false);
            }
            PendingMove::Lane(card) => {
                let stack = self.super_stack(card);
                let first_empty = self.piles.empty_tableau().next();
                if let Some(to) = first_empty {
                    self.transfer(&stack, to, Facing::Keep, Order::Kept, false);
                }
            }
            PendingMove::Sort { card, foundation } => {
                self.transfer(&[card], foundation, Facing::Up, Order::Kept, false);
            }
            PendingMove::Match(a, b) => {
                if let Some(&to) = self.piles.foundations().first() {
                    self.transfer(&[a], to, Facing::Up, Order::Kept, false);
                    self.transfer(&[b], to, Facing::Up, Order::Kept, true);
                }
            }
        }

        log::debug!("{}: {:?}", self.config.name, pending);
        if let Some(from) = from {
            self.update_blocked(from);
        }
        self.check_win();
    }

    /// Send a completed thirteen-card run on `pile` to an empty foundation,
    /// chained to the build that completed it.
    fn clear_full_run(&mut self, pile: PileId) {
        let cards = self.piles.cards(pile);
        let count = usize::from(Rank::COUNT);
        if cards.len() < count {
            return;
        }
        let run = cards[cards.len() - count..].to_vec();
        if !run.iter().all(|&card| self.piles.is_face_up(card)) {
            return;
        }
        let valid = run_all(&self.config.rules.lane, |checker| {
            checker.check(self, run[0], &run)
        });
        if valid.is_err() {
            return;
        }
        let empty = self
            .find_foundation(run[0])
            .into_iter()
            .find(|&foundation| self.piles.is_empty(foundation));
        if let Some(foundation) = empty {
            self.transfer(&run, foundation, Facing::Up, Order::Kept, true);
            log::debug!("{}: cleared a run to {}", self.config.name, foundation);
        }
    }

    /// After a move out of reserve pile `i`, every reserve pile left of it is
    /// blocked. The blocked index then retreats past empty piles.
    pub(crate) fn update_blocked(&mut self, from: PileId) {
        if !self.config.track_blocked {
            return;
        }
        if self.piles.kind(from) == PileKind::Reserve {
            self.blocked = self.piles.position(from).checked_sub(1);
        }
        let reserve = self.piles.reserve();
        while let Some(blocked) = self.blocked {
            match reserve.get(blocked + 1) {
                Some(&next) if self.piles.is_empty(next) => {
                    self.blocked = blocked.checked_sub(1);
                }
                _ => break,
            }
        }
    }

    // === Undo and alternates ===

    /// Undo the last `count` logical moves.
    ///
    /// Fails with `NothingToUndo`, changing nothing, if fewer than `count`
    /// moves have been made. Undoing out of a win resumes play.
    pub fn undo(&mut self, count: usize) -> Result<(), MoveError> {
        if self.status == GameStatus::Abandoned {
            return Err(MoveError::GameOver);
        }
        if self.logical_moves() < count {
            return Err(MoveError::NothingToUndo);
        }
        for _ in 0..count {
            self.undo_logical();
            self.undo_count += 1;
        }
        if count > 0 {
            self.alternatives.clear();
            if self.status == GameStatus::Won && !self.is_won() {
                self.status = GameStatus::Playing;
            }
            log::debug!("{}: undid {} move(s)", self.config.name, count);
        }
        Ok(())
    }

    /// Take back the last move without penalty and make the next legal
    /// alternative instead.
    ///
    /// ```
    /// use solitaire_engine::core::{DeckSpec, SolitaireConfig};
    /// use solitaire_engine::engine::{Layout, Solitaire};
    /// use solitaire_engine::rules::{PairChecker, RuleSet};
    ///
    /// let config = SolitaireConfig::new("Two Decks")
    ///     .with_deck(DeckSpec::standard().with_decks(2))
    ///     .with_foundations(8)
    ///     .with_rules(RuleSet::new().with_pair(PairChecker::Down));
    /// let layout = Layout::new()
    ///     .tableau(0, &["8S"])
    ///     .tableau(1, &["7H"])
    ///     .tableau(2, &["7H"]);
    /// let mut game = Solitaire::from_layout(config, &layout).unwrap();
    ///
    /// game.build_text("7H", "8S").unwrap();
    /// assert_eq!(game.tableau(1).len(), 0);
    ///
    /// game.alternate().unwrap();
    /// assert_eq!(game.tableau(1).len(), 1);
    /// assert_eq!(game.tableau(2).len(), 0);
    /// assert_eq!(game.undo_count(), 0);
    /// ```
    pub fn alternate(&mut self) -> Result<(), MoveError> {
        self.ensure_playing()?;
        if self.alternatives.is_empty() || self.logical_moves() == 0 {
            return Err(MoveError::NoAlternate);
        }

        let snapshot = self.clone();
        let mut remaining = std::mem::take(&mut self.alternatives);
        self.undo_logical();

        while !remaining.is_empty() {
            let next = remaining.remove(0);
            if self.check_move(next).is_ok() {
                self.execute(next);
                self.alternatives = remaining;
                return Ok(());
            }
        }

        *self = snapshot;
        self.alternatives.clear();
        Err(MoveError::NoAlternate)
    }

    // === Automatic play ===

    /// Sort every exposed card of rank `max_rank` or lower, repeatedly, until
    /// nothing more can be sorted. Returns the number of cards sorted.
    pub fn auto_sort(&mut self, max_rank: Rank) -> Result<usize, MoveError> {
        self.ensure_playing()?;
        let mut total = 0;
        loop {
            let mut sorted = 0;
            for card in self.exposed_cards() {
                if self.status != GameStatus::Playing {
                    break;
                }
                if self.card(card).rank() > max_rank {
                    continue;
                }
                if let Ok(foundation) = self.sortable_foundation(card) {
                    self.execute(PendingMove::Sort { card, foundation });
                    sorted += 1;
                }
            }
            if sorted == 0 {
                break;
            }
            total += sorted;
        }
        if total > 0 {
            self.alternatives.clear();
        }
        Ok(total)
    }

    /// Cells, tableau tops, the waste top and reserve tops.
    fn exposed_cards(&self) -> Vec<CardId> {
        let piles = &self.piles;
        let mut cards: Vec<CardId> = piles.cards(piles.cells()).to_vec();
        cards.extend(piles.tableau().iter().filter_map(|&pile| piles.top(pile)));
        cards.extend(piles.top(piles.waste()));
        cards.extend(piles.reserve().iter().filter_map(|&pile| piles.top(pile)));
        cards
    }

    /// Make the most natural move for a card: sort, build onto a tableau top,
    /// match, free, lane, in that order.
    pub fn guess(&mut self, card: CardId) -> Result<(), MoveError> {
        self.ensure_playing()?;
        match self.guess_move(card) {
            Some(pending) => {
                self.execute(pending);
                self.alternatives.clear();
                Ok(())
            }
            None => Err(MoveError::NoMoves(format!(
                "There are no valid moves for the {}.",
                self.card(card).name()
            ))),
        }
    }

    fn guess_move(&self, card: CardId) -> Option<PendingMove> {
        if let Ok(foundation) = self.sortable_foundation(card) {
            return Some(PendingMove::Sort { card, foundation });
        }

        let piles = &self.piles;
        for &pile in piles.tableau() {
            let Some(top) = piles.top(pile) else {
                continue;
            };
            let build = PendingMove::Build { mover: card, target: top };
            if self.check_move(build).is_ok() {
                return Some(build);
            }
            let pair = PendingMove::Match(card, top);
            if self.check_move(pair).is_ok() {
                return Some(pair);
            }
        }

        let mut others: Vec<CardId> = Vec::new();
        others.extend(piles.top(piles.waste()));
        others.extend(piles.reserve().iter().filter_map(|&pile| piles.top(pile)));
        others.extend_from_slice(piles.cards(piles.cells()));
        for other in others {
            let pair = PendingMove::Match(card, other);
            if self.check_move(pair).is_ok() {
                return Some(pair);
            }
        }

        if piles.location(card) != Some(piles.cells()) && self.check_free(card).is_ok() {
            return Some(PendingMove::Free(card));
        }
        if self.check_lane(card).is_ok() {
            return Some(PendingMove::Lane(card));
        }
        None
    }

    /// Build `card` onto `target`, or failing that match them.
    pub fn guess_pair(&mut self, card: CardId, target: CardId) -> Result<(), MoveError> {
        self.ensure_playing()?;
        let build = PendingMove::Build { mover: card, target };
        let pair = PendingMove::Match(card, target);
        let chosen = [build, pair]
            .into_iter()
            .find(|&pending| self.check_move(pending).is_ok());
        match chosen {
            Some(pending) => {
                self.execute(pending);
                self.alternatives.clear();
                Ok(())
            }
            None => Err(MoveError::NoMoves(format!(
                "There are no valid moves for the {} and the {}.",
                self.card(card).name(),
                self.card(target).name()
            ))),
        }
    }

    /// Guess with card tokens; each candidate card is tried in turn.
    pub fn guess_text(&mut self, card: &str) -> Result<(), MoveError> {
        let cards = self.find(card)?;
        let mut first_error = None;
        for &candidate in &cards {
            match self.guess(candidate) {
                Ok(()) => return Ok(()),
                Err(err) => {
                    first_error.get_or_insert(err);
                }
            }
        }
        Err(first_error.unwrap_or_else(|| MoveError::UnknownCard(card.to_string())))
    }
}
