//! `ncards` is a modular toolkit for reading and writing MCNP input cards
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use ncards_grammar as grammar;

#[doc(inline)]
pub use ncards_utils as utils;

#[cfg(feature = "cards")]
#[cfg_attr(docsrs, doc(cfg(feature = "cards")))]
#[doc(inline)]
pub use ncards_cards as cards;

#[cfg(feature = "deck")]
#[cfg_attr(docsrs, doc(cfg(feature = "deck")))]
#[doc(inline)]
pub use ncards_deck as deck;
