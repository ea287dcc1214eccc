//! Error types.
//!
//! No error is fatal: every `Err` returned by the engine leaves the piles,
//! the history and the counters exactly as they were.

use thiserror::Error;

use super::entity::PileKind;

/// Failure to parse a card token such as `"7H"` or `"KS-T3"`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardParseError {
    #[error("'{0}' is not a valid card")]
    Malformed(String),

    #[error("'{0}' is not a valid location")]
    BadLocation(String),
}

/// A rejected move. The message of `Illegal` is the user-facing reason.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// A baseline check or a rule checker failed.
    #[error("{0}")]
    Illegal(String),

    /// The text named a card that does not exist (or not at that location).
    #[error("there is no card matching '{0}'")]
    UnknownCard(String),

    #[error(transparent)]
    Parse(#[from] CardParseError),

    #[error("there are not enough moves to undo")]
    NothingToUndo,

    #[error("the last move is not alternatable")]
    NoAlternate,

    #[error("the game is over")]
    GameOver,

    /// No move of any kind fits the given card(s).
    #[error("{0}")]
    NoMoves(String),
}

impl MoveError {
    /// The user-facing rejection reason, if this was a rules rejection.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            MoveError::Illegal(reason) | MoveError::NoMoves(reason) => Some(reason),
            _ => None,
        }
    }
}

/// A configuration or dealing failure while setting up a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("the {dealer} dealer needs at least one {kind} pile")]
    MissingPiles { dealer: &'static str, kind: PileKind },

    #[error("the deck ran out during the {dealer} dealer")]
    DeckExhausted { dealer: &'static str },

    #[error("{0} cards were left undealt")]
    UndealtCards(usize),

    #[error("there is no {0} left in the deck")]
    MissingCard(String),

    #[error("choice {0} is not one of the offered cards")]
    InvalidChoice(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Parse(#[from] CardParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = MoveError::Illegal("There are no open lanes.".into());
        assert_eq!(err.to_string(), "There are no open lanes.");
        assert_eq!(err.reason(), Some("There are no open lanes."));
        assert_eq!(MoveError::GameOver.reason(), None);

        let err = SetupError::MissingPiles { dealer: "reserve-n", kind: PileKind::Reserve };
        assert_eq!(err.to_string(), "the reserve-n dealer needs at least one reserve pile");
    }

    #[test]
    fn test_parse_error_conversion() {
        let err: MoveError = CardParseError::Malformed("ZZ".into()).into();
        assert_eq!(err.to_string(), "'ZZ' is not a valid card");
    }
}
