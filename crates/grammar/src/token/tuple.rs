use itertools::Itertools;
use nom::character::complete::space1;
use nom::combinator::map;
use nom::multi::separated_list1;
use nom::IResult;
use serde::Serialize;

use ncards_utils::f;

use crate::token::Token;

/// Non-empty, ordered list of a single token type
///
/// Standalone parsing is greedy and takes every element it can. When a tuple
/// is one field of a card the card grammar decides how many elements belong
/// to it.
///
/// ```rust
/// # use ncards_grammar::{Real, Token, Tuple};
/// let bins = Tuple::<Real>::from_mcnp("1e-5 1.0 1+3").unwrap();
/// assert_eq!(bins.len(), 3);
/// assert_eq!(bins.last(), &Real::from(1000.0));
/// assert_eq!(bins.to_mcnp(), "1e-5 1.0 1000.0");
///
/// assert!(Tuple::<Real>::from_mcnp("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Tuple<T>(Vec<T>);

impl<T> Tuple<T> {
    /// Tuple of the given elements, `None` if there are none
    pub fn new(elements: Vec<T>) -> Option<Self> {
        (!elements.is_empty()).then_some(Self(elements))
    }

    /// Number of elements, always at least one
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false, tuples are never empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first element
    pub fn first(&self) -> &T {
        &self.0[0]
    }

    /// The last element
    pub fn last(&self) -> &T {
        &self.0[self.0.len() - 1]
    }

    /// Iterate over elements in order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// The elements as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Consume the tuple, returning the elements
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T: Token> Token for Tuple<T> {
    fn grammar() -> String {
        f!("{}...", T::grammar())
    }

    fn parse(i: &str) -> IResult<&str, Self> {
        map(separated_list1(space1, T::parse), Self)(i)
    }
}

impl<'a, T> IntoIterator for &'a Tuple<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Tuple<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}
