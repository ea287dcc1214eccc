//! Dealers: the setup pipeline of a variant.
//!
//! A variant lists its dealers in order. Each one moves cards from the
//! shuffled deck onto the table, flips cards, or adjusts the starting
//! foundation rank. After the last dealer runs, every card must be on the
//! table or discarded.
//!
//! ## Example
//!
//! ```
//! use solitaire_engine::core::{DealMode, SolitaireConfig};
//! use solitaire_engine::dealers::Dealer;
//! use solitaire_engine::engine::Solitaire;
//!
//! let config = SolitaireConfig::new("Klondike")
//!     .with_deal(DealMode::Unshuffled)
//!     .with_dealers(vec![Dealer::Klondike, Dealer::StockAll]);
//! let game = Solitaire::new(config).unwrap();
//!
//! assert_eq!(game.tableau(6).len(), 7);
//! assert_eq!(game.stock().len(), 24);
//! ```

mod dealer;

pub use dealer::Dealer;
