use nom::combinator::map;
use nom::IResult;
use serde::Serialize;

use crate::parsers;
use crate::token::Token;

/// Free text without whitespace, e.g. a library identifier or a keyword value
///
/// The original case is kept for output, but comparisons against `&str` and
/// enumerations ignore case, as MCNP does.
///
/// ```rust
/// # use ncards_grammar::{Text, Token};
/// let geom = Text::from_mcnp("XYZ").unwrap();
/// assert_eq!(geom, "xyz");
/// assert!(geom.is_one_of(&["xyz", "rec"]));
/// assert_eq!(geom.to_mcnp(), "XYZ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Text(String);

impl Text {
    /// Wrap any string, which may contain whitespace for free-text fields
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The text as written
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }

    /// Case-insensitive membership of an enumeration
    pub fn is_one_of(&self, choices: &[&str]) -> bool {
        choices.iter().any(|c| self.eq_ignore_case(c))
    }
}

impl Token for Text {
    fn grammar() -> String {
        "text".to_string()
    }

    fn parse(i: &str) -> IResult<&str, Self> {
        map(parsers::word, |w: &str| Self(w.to_string()))(i)
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.eq_ignore_case(other)
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.eq_ignore_case(other)
    }
}

impl std::fmt::Display for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
