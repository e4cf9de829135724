use std::cmp::Ordering;

use nom::combinator::map;
use nom::IResult;
use serde::Serialize;

use crate::parsers;
use crate::token::Token;

/// Signed integer value, e.g. a cell number, a count, or a flag
///
/// Compares directly against native integers so that range checks read
/// naturally.
///
/// ```rust
/// # use ncards_grammar::{Integer, Token};
/// let suffix = Integer::from_mcnp("104").unwrap();
/// assert!(suffix <= 99_999_999);
/// assert_eq!(suffix, 104);
/// assert_eq!(suffix.to_mcnp(), "104");
///
/// // anything that is not an integer is an error
/// assert!(Integer::from_mcnp("1.5").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Integer(i64);

impl Integer {
    /// The decoded value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl Token for Integer {
    fn grammar() -> String {
        "integer".to_string()
    }

    fn parse(i: &str) -> IResult<&str, Self> {
        map(parsers::integer, Self)(i)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Integer> for i64 {
    fn from(value: Integer) -> Self {
        value.0
    }
}

impl PartialEq<i64> for Integer {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<i64> for Integer {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl std::fmt::Display for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
