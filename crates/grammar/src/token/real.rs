use std::cmp::Ordering;

use nom::combinator::map;
use nom::IResult;
use serde::Serialize;

use ncards_utils::ValueExt;

use crate::parsers;
use crate::token::{Integer, Token};

/// Real value, e.g. an energy bound, a density, or a time cutoff
///
/// Reads every form MCNP accepts, including the exponent without an `e`.
///
/// ```rust
/// # use ncards_grammar::{Real, Token};
/// assert_eq!(Real::from_mcnp("1.5e3").unwrap(), 1500.0);
/// assert_eq!(Real::from_mcnp("1.5+3").unwrap(), 1500.0);
/// assert_eq!(Real::from_mcnp("-2").unwrap(), -2.0);
/// ```
///
/// Written out using the shortest text that reads back to the same value.
///
/// ```rust
/// # use ncards_grammar::{Real, Token};
/// assert_eq!(Real::from(3.0).to_mcnp(), "3.0");
/// assert_eq!(Real::from(2e-30).to_mcnp(), "2e-30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Real(f64);

impl Real {
    /// The decoded value
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Token for Real {
    fn grammar() -> String {
        "real".to_string()
    }

    fn parse(i: &str) -> IResult<&str, Self> {
        map(parsers::real, Self)(i)
    }
}

impl From<f64> for Real {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Integer> for Real {
    fn from(value: Integer) -> Self {
        Self(value.value() as f64)
    }
}

impl From<Real> for f64 {
    fn from(value: Real) -> Self {
        value.0
    }
}

impl PartialEq<f64> for Real {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<f64> for Real {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl std::fmt::Display for Real {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.mcnp())
    }
}
