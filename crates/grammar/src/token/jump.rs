use nom::combinator::map;
use nom::IResult;
use serde::Serialize;

use crate::parsers;
use crate::token::Token;

/// The `j` placeholder, or `Nj` for N consecutive placeholders
///
/// A jump tells MCNP to use the default for an entry. Card fields that may be
/// skipped hold an [OrJump](crate::OrJump) rather than a `Jump` directly. The
/// [lexer](crate::lexer) reads and writes the `Nj` shorthand through this type.
///
/// ```rust
/// # use ncards_grammar::{Jump, Token};
/// assert_eq!(Jump::from_mcnp("j").unwrap().count(), 1);
/// assert_eq!(Jump::from_mcnp("3J").unwrap().count(), 3);
/// assert!(Jump::from_mcnp("0j").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Jump(u32);

impl Jump {
    /// Jump over `count` entries, `None` for zero
    pub fn new(count: u32) -> Option<Self> {
        (count > 0).then_some(Self(count))
    }

    /// Number of entries skipped
    pub fn count(&self) -> u32 {
        self.0
    }
}

impl Token for Jump {
    fn grammar() -> String {
        "[n]j".to_string()
    }

    fn parse(i: &str) -> IResult<&str, Self> {
        map(parsers::jump, Self)(i)
    }
}

impl std::fmt::Display for Jump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "j"),
            n => write!(f, "{n}j"),
        }
    }
}
