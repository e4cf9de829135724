//! Reading and writing of whole MCNP input decks
//!
#![doc = include_str!("../readme.md")]

mod deck;
mod error;
mod reader;
mod writer;

#[doc(inline)]
pub use deck::{DataCard, Deck};

#[doc(inline)]
pub use reader::{parse_deck, read_deck};

#[doc(inline)]
pub use writer::write_deck;

#[doc(inline)]
pub use error::{Error, Result};
