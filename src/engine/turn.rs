//! The turn command, one behavior per `TurnMode`.

use super::game::Solitaire;
use super::history::{Facing, Order};
use crate::core::{MoveError, TurnMode};

impl Solitaire {
    /// Turn cards over from the stock, as the game's turn mode defines it.
    ///
    /// The whole turn is one logical move for undo.
    pub fn turn(&mut self) -> Result<(), MoveError> {
        self.ensure_playing()?;
        let result = match self.config.turn_mode {
            TurnMode::Waste => self.turn_to_waste(),
            TurnMode::Tableau { allow_empty } => self.turn_to_tableau(allow_empty),
            TurnMode::Consolidate => self.consolidate(),
            TurnMode::CompactReserve { pile_size } => self.compact_reserve(pile_size),
        };
        match &result {
            Ok(()) => {
                self.alternatives.clear();
                log::debug!("{}: turned ({} passes)", self.config.name, self.stock_passes);
                self.check_win();
            }
            Err(err) => log::trace!("{}: rejected turn: {}", self.config.name, err),
        }
        result
    }

    /// Turn the waste back over onto the stock and finish the game turning
    /// one card at a time, with one more pass allowed.
    ///
    /// Only available when the config allows it, once per game. Undoing the
    /// switch restores the original turn count.
    pub fn switch_one(&mut self) -> Result<(), MoveError> {
        self.ensure_playing()?;
        if !self.config.switch_one
            || self.switched_at.is_some()
            || self.config.turn_mode != TurnMode::Waste
        {
            return Err(MoveError::Illegal("You may not switch to one card at a time.".into()));
        }
        let waste = self.piles.waste();
        if self.piles.is_empty(waste) {
            return Err(MoveError::Illegal("There are no cards in the waste to turn over.".into()));
        }

        let stock = self.piles.stock();
        let cards = self.piles.cards(waste).to_vec();
        self.transfer(&cards, stock, Facing::Down, Order::Reversed, false);
        self.mark_pass();
        if let Some(record) = self.history.back_mut() {
            record.switched = true;
        }
        self.switched_at = Some(self.stock_passes);
        self.alternatives.clear();
        log::debug!("{}: switched to turning one card", self.config.name);
        Ok(())
    }

    fn turn_to_waste(&mut self) -> Result<(), MoveError> {
        let stock = self.piles.stock();
        let waste = self.piles.waste();

        if self.piles.is_empty(stock) && self.piles.is_empty(waste) {
            return Err(MoveError::Illegal("There are no more cards to turn.".into()));
        }
        if self.max_passes() == Some(self.stock_passes) {
            return Err(MoveError::Illegal(
                "You may not make any more passes through the stock.".into(),
            ));
        }

        let mut chained = false;
        if self.piles.is_empty(stock) {
            let cards = self.piles.cards(waste).to_vec();
            self.transfer(&cards, stock, Facing::Down, Order::Reversed, false);
            chained = true;
        }

        let available = self.piles.len(stock);
        let count = self.turn_count().min(available);
        let cards = self.piles.cards(stock)[available - count..].to_vec();
        self.transfer(&cards, waste, Facing::Up, Order::Reversed, chained);

        if self.piles.is_empty(stock) {
            self.mark_pass();
        }
        Ok(())
    }

    fn turn_to_tableau(&mut self, allow_empty: bool) -> Result<(), MoveError> {
        let stock = self.piles.stock();
        if self.piles.is_empty(stock) {
            return Err(MoveError::Illegal(
                "There are no more cards to turn over.".into(),
            ));
        }
        if !allow_empty && self.piles.empty_tableau().next().is_some() {
            return Err(MoveError::Illegal(
                "You cannot turn over cards from the stock if you have empty tableau piles."
                    .into(),
            ));
        }

        let tableau = self.piles.tableau().to_vec();
        for (index, pile) in tableau.into_iter().enumerate() {
            let Some(card) = self.piles.top(stock) else {
                break;
            };
            self.transfer(&[card], pile, Facing::Up, Order::Kept, index > 0);
        }
        Ok(())
    }

    /// Close the gaps in the tableau, then refill empty piles from the stock.
    fn consolidate(&mut self) -> Result<(), MoveError> {
        let stock = self.piles.stock();
        let tableau = self.piles.tableau().to_vec();
        let mut chained = false;
        let mut empties = std::collections::VecDeque::new();

        for &pile in &tableau {
            if self.piles.is_empty(pile) {
                empties.push_back(pile);
            } else if let Some(&gap) = empties.front() {
                let cards = self.piles.cards(pile).to_vec();
                self.transfer(&cards, gap, Facing::Up, Order::Kept, chained);
                chained = true;
                empties.pop_front();
                empties.push_back(pile);
            }
        }

        for pile in empties {
            let Some(card) = self.piles.top(stock) else {
                break;
            };
            self.transfer(&[card], pile, Facing::Up, Order::Kept, chained);
            chained = true;
        }

        if chained {
            Ok(())
        } else {
            Err(MoveError::Illegal("There are no gaps in the tableau to fill.".into()))
        }
    }

    /// Shift reserve cards left, bottom card first, until every pile but the
    /// last holds `pile_size` cards. Clears any blocked reserve piles.
    fn compact_reserve(&mut self, pile_size: usize) -> Result<(), MoveError> {
        let reserve = self.piles.reserve().to_vec();
        let mut chained = false;

        loop {
            let Some(start) = reserve.iter().position(|&pile| self.piles.len(pile) < pile_size)
            else {
                break;
            };
            let source = reserve[start + 1..]
                .iter()
                .copied()
                .find(|&pile| !self.piles.is_empty(pile));
            let Some(source) = source else {
                break;
            };
            let card = self.piles.cards(source)[0];
            self.transfer(&[card], reserve[start], Facing::Up, Order::Kept, chained);
            chained = true;
        }

        if !chained {
            return Err(MoveError::Illegal("There are no reserve cards to shift.".into()));
        }
        self.blocked = None;
        Ok(())
    }
}
