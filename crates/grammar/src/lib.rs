//! Primitive value grammar for MCNP input cards
//!
//! MCNP cards are built from a handful of primitive tokens. Each token type in
//! this crate owns:
//!
//! - a nom parser recognising exactly its own span of text ([Token::parse])
//! - a checked entry point for whole words ([Token::from_mcnp])
//! - a canonical formatter ([Token::to_mcnp], via `Display`)
//! - comparisons against native values so range checks read naturally
//!
//! ```rust
//! # use ncards_grammar::{Integer, OrJump, Real, Token};
//! let tme = Integer::from_mcnp("30").unwrap();
//! assert!(tme >= 0);
//!
//! // MCNP allows the exponent without an `e`
//! let energy = Real::from_mcnp("1.5+3").unwrap();
//! assert_eq!(energy, 1500.0);
//!
//! // Anything that may be skipped is an explicit tagged union
//! let wupn = OrJump::<Real>::from_mcnp("j").unwrap();
//! assert!(wupn.is_jump());
//! ```
//!
//! The [lexer] functions split card text into words and deal with the `Nj`
//! jump shorthand before words are handed to individual tokens.

mod error;
mod parsers;
mod token;

pub mod lexer;

#[doc(inline)]
pub use error::{Error, Level, Result};

#[doc(inline)]
pub use token::{Designator, Integer, Jump, OrJump, Particle, Real, Text, Token, Tuple};
