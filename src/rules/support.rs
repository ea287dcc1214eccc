//! Helpers shared by several checker families.

use crate::core::{CardId, PileId, PileKind};
use crate::engine::Solitaire;

/// Largest stack that could be moved one card at a time through the free
/// cells and empty lanes: `(1 + free cells) * 2^lanes`.
///
/// The destination lane does not count when moving to a lane. When only
/// kings may be laned, empty lanes cannot be used as stepping stones.
#[must_use]
pub fn move_one_size(game: &Solitaire, to_lane: bool) -> usize {
    let piles = game.piles();
    let free = piles.free_cells();
    let lanes = if game.config().rules.lanes_need_kings() {
        0
    } else {
        piles.empty_tableau().count().saturating_sub(usize::from(to_lane))
    };
    (1 + free).saturating_mul(1usize.checked_shl(lanes as u32).unwrap_or(usize::MAX))
}

/// The card covering `card` in a pyramid layout, if any.
///
/// Tableau pile `i` is covered while it is no longer than pile `i + 1`.
#[must_use]
pub fn pyramid_blocker(game: &Solitaire, card: CardId) -> Option<CardId> {
    let piles = game.piles();
    let pile = piles.location(card)?;
    if piles.kind(pile) != PileKind::Tableau {
        return None;
    }
    let next = *piles.tableau().get(piles.position(pile) + 1)?;
    if piles.len(pile) <= piles.len(next) {
        piles.top(next)
    } else {
        None
    }
}

/// True if the pile is a reserve pile at or left of the blocked index.
#[must_use]
pub fn in_blocked_reserve(game: &Solitaire, pile: Option<PileId>) -> bool {
    let (Some(pile), Some(blocked)) = (pile, game.blocked_reserve()) else {
        return false;
    };
    let piles = game.piles();
    piles.kind(pile) == PileKind::Reserve && piles.position(pile) <= blocked
}

/// True if `card` is the top card of some reserve pile.
#[must_use]
pub fn on_reserve_top(game: &Solitaire, card: CardId) -> bool {
    let piles = game.piles();
    piles.reserve().iter().any(|&pile| piles.top(pile) == Some(card))
}
