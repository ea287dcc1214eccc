//! Variant presets.
//!
//! Each function returns a complete [`SolitaireConfig`](crate::core::SolitaireConfig)
//! built from the generic checker and dealer vocabulary. Nothing here is
//! special-cased by the engine; a caller can build the same configs by hand
//! or tweak a preset with the `with_*` methods.
//!
//! ```
//! use solitaire_engine::engine::Solitaire;
//! use solitaire_engine::games::{self, KlondikeOptions};
//!
//! let options = KlondikeOptions { turn_count: 1, ..KlondikeOptions::default() };
//! let game = Solitaire::new(games::klondike(&options).with_seed(42)).unwrap();
//! assert_eq!(game.stock().len(), 24);
//! ```

mod bisley;
mod canfield;
mod freecell;
mod klondike;
mod pyramid;
mod spider;

pub use bisley::{bisley, quadrille, QuadrilleOptions};
pub use canfield::{canfield, CanfieldOptions};
pub use freecell::{bakers_game, freecell, freecell_numbered, FreeCellOptions};
pub use klondike::{klondike, thoughtful, yukon, KlondikeOptions, ThoughtfulOptions, YukonOptions};
pub use pyramid::{monte_carlo, pyramid, MonteCarloOptions, PyramidOptions};
pub use spider::{forty_thieves, spider, FortyThievesOptions, SpiderOptions, SpiderSuits};
