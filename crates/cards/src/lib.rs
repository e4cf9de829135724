//! Schema-driven MCNP card parsing, validation, and writing
//!
//! Every card layout is a static [Schema]: a keyword, whether it takes a
//! numeric suffix or a particle designator, ordered [Field]s with a [Kind]
//! and a [Rule], named options, and cross-field [Check]s. A single engine
//! does the rest for every card in the [catalog].
//!
//! - [Card] - an immutable card that passed every check
//! - [Builder] - field-by-field construction, validated on build
//! - [catalog] - every supported layout, and keyword dispatch
//!
//! # Quickstart example
//!
//! ```rust
//! use ncards_cards::{catalog, Builder, Card};
//!
//! // Parse with whichever layout fits
//! let card = Card::from_mcnp("sb -21 3.0").unwrap();
//! assert_eq!(card.name(), "sb_function");
//! assert_eq!(card["function"], -21);
//!
//! // Errors say what went wrong and where
//! let error = Card::from_mcnp("ctme -1").unwrap_err();
//! assert!(error.is_semantics());
//! assert_eq!(error.field(), Some("tme"));
//!
//! // Build from loose values, validated exactly like parsed text
//! let card = Builder::new(catalog::schema("lost").unwrap())
//!     .set("lost1", 5)
//!     .set("lost2", "j")
//!     .build()
//!     .unwrap();
//! assert_eq!(card.to_mcnp(), "lost 5 j");
//! ```
//!
//! # Parsing order
//!
//! Text is checked in two passes. The whole card must first fit the layout:
//! keyword, suffix, designator, then every word assigned to a field or an
//! option. Only then are values checked against the rules, stopping at the
//! first failure. See [Error] for how the two kinds of failure are reported.

mod builder;
mod card;
mod error;
mod input;
mod kind;
mod matcher;
mod rule;
mod schema;
mod validate;
mod value;

pub mod catalog;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use builder::Builder;
pub use card::Card;
pub use input::Input;
pub use kind::Kind;
pub use rule::Rule;
pub use schema::{Check, Field, Presence, Schema};
pub use value::Value;
