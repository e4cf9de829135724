use std::cmp::Ordering;

use nom::branch::alt;
use nom::combinator::{map, verify};
use nom::IResult;
use serde::Serialize;

use ncards_utils::f;

use crate::parsers;
use crate::token::{Integer, Real, Token};

/// A value that may be replaced by the `j` jump placeholder
///
/// Explicit tagged union, so every use site has to decide what a jump means
/// for it. Comparisons against native numbers are always `false` for the
/// [OrJump::Jump] variant, which means range checks never reject a jump.
///
/// ```rust
/// # use ncards_grammar::{Integer, OrJump, Token};
/// let value = OrJump::<Integer>::from_mcnp("5").unwrap();
/// assert_eq!(value, 5);
/// assert_eq!(value.value(), Some(&Integer::from(5)));
///
/// let jump = OrJump::<Integer>::from_mcnp("J").unwrap();
/// assert!(jump.is_jump());
/// assert!(!(jump < 0) && !(jump >= 0));
/// assert_eq!(jump.to_mcnp(), "j");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OrJump<T> {
    /// An explicit value
    Value(T),
    /// Use the default
    Jump,
}

impl<T> OrJump<T> {
    /// Check for the jump placeholder
    pub fn is_jump(&self) -> bool {
        matches!(self, Self::Jump)
    }

    /// Reference to the explicit value, if there is one
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Jump => None,
        }
    }

    /// Take the explicit value, if there is one
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Jump => None,
        }
    }

    /// Maps the explicit value, leaving a jump untouched
    pub fn map<U, F: FnOnce(T) -> U>(self, op: F) -> OrJump<U> {
        match self {
            Self::Value(value) => OrJump::Value(op(value)),
            Self::Jump => OrJump::Jump,
        }
    }
}

impl<T: Token> Token for OrJump<T> {
    fn grammar() -> String {
        f!("{}|j", T::grammar())
    }

    fn parse(i: &str) -> IResult<&str, Self> {
        alt((
            // a single placeholder only, `3j` stands for several entries
            map(verify(parsers::jump, |n: &u32| *n == 1), |_| Self::Jump),
            map(T::parse, Self::Value),
        ))(i)
    }
}

impl<T> From<T> for OrJump<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl PartialEq<i64> for OrJump<Integer> {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Self::Value(value) => value == other,
            Self::Jump => false,
        }
    }
}

impl PartialOrd<i64> for OrJump<Integer> {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        match self {
            Self::Value(value) => value.partial_cmp(other),
            Self::Jump => None,
        }
    }
}

impl PartialEq<f64> for OrJump<Real> {
    fn eq(&self, other: &f64) -> bool {
        match self {
            Self::Value(value) => value == other,
            Self::Jump => false,
        }
    }
}

impl PartialOrd<f64> for OrJump<Real> {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        match self {
            Self::Value(value) => value.partial_cmp(other),
            Self::Jump => None,
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for OrJump<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Jump => write!(f, "j"),
        }
    }
}
