//! Move history: the transfer primitive and undo.
//!
//! Every card movement after setup goes through [`Solitaire::transfer`],
//! which removes a contiguous run of cards from one pile, places it on
//! another and pushes a [`MoveRecord`]. Undo pops records and reverses them.
//!
//! ## Chaining
//!
//! A logical move can span several records (a turn of three cards, a match
//! of two, a Spider run sent home after a build). Every record after the
//! first is `chained`; undo keeps popping until it has reversed an unchained
//! record, so the whole group comes back as one unit.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::game::Solitaire;
use crate::core::{CardId, PileId, PileKind};

/// Face state applied to cards as they land.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Facing {
    Keep,
    Up,
    Down,
}

/// Whether the moved run keeps its order or is flipped over as a packet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Order {
    Kept,
    Reversed,
}

/// One tracked transfer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Cards moved, in their order in the source pile (bottom first).
    pub cards: SmallVec<[CardId; 4]>,
    pub from: PileId,
    /// Index in the source pile of the first moved card.
    pub from_index: usize,
    pub to: PileId,
    /// Face-up state of each moved card before the move.
    pub faces: SmallVec<[bool; 4]>,
    /// The run landed in reverse order.
    pub reversed: bool,
    /// Part of the same logical move as the record before it.
    pub chained: bool,
    /// The move turned the new top card of the source face up.
    pub revealed: bool,
    /// This turn emptied the stock and counted a pass.
    pub completed_pass: bool,
    /// The waste went back to the stock for a switch to turning one card.
    pub switched: bool,
    /// Blocked reserve index before the move.
    pub blocked_before: Option<usize>,
    /// Consecutive foundation moves before the move.
    pub last_sort_before: u32,
}

impl Solitaire {
    /// Move a contiguous run of cards to the top of another pile and record it.
    ///
    /// `cards` must be `pile[i..i + cards.len()]` of the pile holding the first
    /// card. The caller has already validated the move; this only executes.
    pub(crate) fn transfer(
        &mut self,
        cards: &[CardId],
        to: PileId,
        facing: Facing,
        order: Order,
        chained: bool,
    ) {
        let Some(&first) = cards.first() else {
            return;
        };
        let (Some(from), Some(from_index)) = (self.piles.location(first), self.piles.index_of(first))
        else {
            return;
        };

        let faces: SmallVec<[bool; 4]> = cards.iter().map(|&c| self.piles.is_face_up(c)).collect();
        let mut moving = self.piles.remove_range(from, from_index, cards.len());
        if order == Order::Reversed {
            moving.reverse();
        }
        for card in moving {
            let up = match facing {
                Facing::Keep => self.piles.is_face_up(card),
                Facing::Up => true,
                Facing::Down => false,
            };
            self.piles.push(to, card, up);
        }

        // Turn over a newly exposed card. The stock stays face down.
        let mut revealed = false;
        if self.piles.kind(from) != PileKind::Stock {
            if let Some(top) = self.piles.top(from) {
                if !self.piles.is_face_up(top) {
                    self.piles.set_face_up(top, true);
                    revealed = true;
                }
            }
        }

        self.history.push_back(MoveRecord {
            cards: SmallVec::from_slice(cards),
            from,
            from_index,
            to,
            faces,
            reversed: order == Order::Reversed,
            chained,
            revealed,
            completed_pass: false,
            switched: false,
            blocked_before: self.blocked,
            last_sort_before: self.last_sort,
        });

        if !chained {
            self.move_count += 1;
            if self.piles.kind(to) == PileKind::Foundation {
                self.last_sort += 1;
            } else {
                self.last_sort = 0;
            }
        }
    }

    /// Reverse the most recent record. Returns it, or `None` if the history
    /// is empty.
    fn undo_record(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop_back()?;

        if record.revealed {
            if let Some(top) = self.piles.top(record.from) {
                self.piles.set_face_up(top, false);
            }
        }

        let count = record.cards.len();
        let start = self.piles.len(record.to).saturating_sub(count);
        self.piles.remove_range(record.to, start, count);
        self.piles
            .insert_at(record.from, record.from_index, &record.cards, &record.faces);

        if record.completed_pass {
            self.stock_passes = self.stock_passes.saturating_sub(1);
        }
        if record.switched {
            self.switched_at = None;
        }
        self.blocked = record.blocked_before;
        self.last_sort = record.last_sort_before;
        Some(record)
    }

    /// Reverse one logical move: records up to and including the first
    /// unchained one.
    pub(crate) fn undo_logical(&mut self) -> bool {
        while let Some(record) = self.undo_record() {
            if !record.chained {
                self.move_count = self.move_count.saturating_sub(1);
                return true;
            }
        }
        false
    }

    /// Number of logical moves in the history.
    #[must_use]
    pub fn logical_moves(&self) -> usize {
        self.history.iter().filter(|record| !record.chained).count()
    }

    /// Flag the last record as having completed a pass through the stock.
    pub(crate) fn mark_pass(&mut self) {
        if let Some(record) = self.history.back_mut() {
            record.completed_pass = true;
        }
        self.stock_passes += 1;
    }
}
