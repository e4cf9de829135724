//! Decoded field values

use itertools::Itertools;
use serde::Serialize;

use ncards_grammar::{Designator, Integer, OrJump, Real, Text, Tuple};

/// A decoded field value
///
/// Numbers compare directly against native literals, so `card["nps"] == 1000`
/// reads naturally. Integers and reals compare by numeric value, and a jump
/// never equals any number.
///
/// ```rust
/// # use ncards_cards::Value;
/// # use ncards_grammar::{Integer, Real};
/// assert_eq!(Value::Integer(Integer::from(30)), 30);
/// assert_eq!(Value::Real(Real::from(30.0)), 30);
/// assert_ne!(Value::Jump, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(Integer),
    Real(Real),
    Text(Text),
    Designator(Designator),
    Jump,
    Entry(Vec<Value>),
    Tuple(Tuple<Value>),
}

impl Value {
    /// Explicit `j` in place of a number
    pub fn is_jump(&self) -> bool {
        matches!(self, Self::Jump)
    }

    /// Integer value, `None` for anything else
    pub fn as_integer(&self) -> Option<Integer> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Real value, `None` for anything else
    pub fn as_real(&self) -> Option<Real> {
        match self {
            Self::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// Numeric value of an integer or real
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(i.value() as f64),
            Self::Real(r) => Some(r.value()),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_designator(&self) -> Option<&Designator> {
        match self {
            Self::Designator(d) => Some(d),
            _ => None,
        }
    }

    /// Elements of a tuple or entry
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::Entry(values) => Some(values),
            Self::Tuple(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    /// Integer-or-jump view, `None` if neither
    pub fn as_integer_or_jump(&self) -> Option<OrJump<Integer>> {
        match self {
            Self::Integer(i) => Some(OrJump::Value(*i)),
            Self::Jump => Some(OrJump::Jump),
            _ => None,
        }
    }

    /// Real-or-jump view, `None` if neither
    pub fn as_real_or_jump(&self) -> Option<OrJump<Real>> {
        match self {
            Self::Real(r) => Some(OrJump::Value(*r)),
            Self::Jump => Some(OrJump::Jump),
            _ => None,
        }
    }

    /// Numeric values of a list, skipping jumps
    ///
    /// `None` if this is not a list or any element is not a number.
    pub fn numbers(&self) -> Option<Vec<f64>> {
        self.as_list()?
            .iter()
            .filter(|v| !v.is_jump())
            .map(Value::as_number)
            .collect()
    }

    /// Words written to a card for this value
    pub(crate) fn words(&self) -> Vec<String> {
        match self {
            Self::Jump => vec!["j".to_string()],
            Self::Entry(values) => values.iter().flat_map(Value::words).collect(),
            Self::Tuple(values) => values.iter().flat_map(Value::words).collect(),
            Self::Integer(i) => vec![i.to_string()],
            Self::Real(r) => vec![r.to_string()],
            Self::Text(t) => vec![t.to_string()],
            Self::Designator(d) => vec![d.to_string()],
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.words().iter().join(" "))
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Self::Integer(i) => i == other,
            Self::Real(r) => r.value() == *other as f64,
            _ => false,
        }
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        self.as_number().is_some_and(|v| v == *other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_text().is_some_and(|t| t == other)
    }
}

impl From<Integer> for Value {
    fn from(value: Integer) -> Self {
        Self::Integer(value)
    }
}

impl From<Real> for Value {
    fn from(value: Real) -> Self {
        Self::Real(value)
    }
}

impl From<Text> for Value {
    fn from(value: Text) -> Self {
        Self::Text(value)
    }
}

impl From<Designator> for Value {
    fn from(value: Designator) -> Self {
        Self::Designator(value)
    }
}

impl<T: Into<Value>> From<OrJump<T>> for Value {
    fn from(value: OrJump<T>) -> Self {
        match value {
            OrJump::Value(v) => v.into(),
            OrJump::Jump => Self::Jump,
        }
    }
}
