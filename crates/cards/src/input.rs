//! Loosely typed values handed to a [Builder](crate::Builder)

use ncards_grammar::{Designator, Level, Tuple};
use ncards_utils::{f, ValueExt};

use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::value::Value;

/// Anything that can be converted into a field value
///
/// Raw text is decoded exactly as it would be on a card. Native numbers are
/// written out and decoded the same way, so an `i64` given for a real field
/// is promoted, while an `f64` given for an integer field is rejected.
///
/// ```rust
/// # use ncards_cards::Input;
/// let inputs: Vec<Input> = vec!["1.0 2j".into(), 3.into(), 0.5.into(), vec![1, 2].into()];
/// assert_eq!(inputs.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Raw(String),
    Integer(i64),
    Real(f64),
    Value(Value),
    List(Vec<Input>),
}

impl Input {
    /// Decode into a value with the structure of `kind`
    pub(crate) fn into_value(self, kind: &Kind) -> Result<Value> {
        match self {
            Self::Value(value) if kind.accepts(&value) => Ok(value),
            Self::Value(value) => kind.parse_text(&value.to_string()),
            Self::Raw(text) => kind.parse_text(&text),
            Self::Integer(i) => kind.parse_text(&i.to_string()),
            Self::Real(r) => kind.parse_text(&r.mcnp()),
            Self::List(inputs) => list(inputs, kind),
        }
    }
}

fn list(inputs: Vec<Input>, kind: &Kind) -> Result<Value> {
    let count = inputs.len();
    let wrong_length = || {
        Error::Grammar(ncards_grammar::Error::syntax(
            Level::Entry,
            f!("list of {count} values for {}", kind.grammar()),
        ))
    };

    match kind {
        Kind::Tuple(element) => {
            let values = inputs
                .into_iter()
                .map(|input| input.into_value(element))
                .collect::<Result<Vec<Value>>>()?;
            Tuple::new(values).map(Value::Tuple).ok_or_else(wrong_length)
        }
        Kind::Entry(kinds) if kinds.len() == count => inputs
            .into_iter()
            .zip(kinds.iter())
            .map(|(input, kind)| input.into_value(kind))
            .collect::<Result<Vec<Value>>>()
            .map(Value::Entry),
        _ => Err(wrong_length()),
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

impl From<i64> for Input {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Input {
    fn from(value: i32) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<f64> for Input {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Designator> for Input {
    fn from(value: Designator) -> Self {
        Self::Value(Value::Designator(value))
    }
}

impl<T: Into<Input>> From<Vec<T>> for Input {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use ncards_grammar::Text;

    use super::*;

    #[test]
    fn integers_promote_to_reals() {
        let value = Input::from(3).into_value(&Kind::Real).unwrap();
        assert_eq!(value.to_string(), "3.0");
    }

    #[test]
    fn reals_do_not_demote() {
        assert!(Input::from(3.5).into_value(&Kind::Integer).is_err());
    }

    #[test]
    fn lists_follow_kind() {
        let entry = Kind::Entry(&[Kind::Text, Kind::Real]);
        let value = Input::from(vec!["1001.80c", "2"]).into_value(&entry).unwrap();
        assert_eq!(value.to_string(), "1001.80c 2.0");

        let tuple = Kind::Tuple(&Kind::IntegerOrJump);
        let value = Input::from(vec![Input::from(1), Input::from("j")]).into_value(&tuple).unwrap();
        assert_eq!(value.to_string(), "1 j");

        assert!(Input::List(vec![]).into_value(&tuple).is_err());
    }

    #[test]
    fn mismatched_values_are_reparsed() {
        let value = Input::from(Value::Integer(5.into())).into_value(&Kind::RealOrJump).unwrap();
        assert_eq!(value, 5.0);
    }

    #[test]
    fn text_must_survive_the_lexer() {
        let value = Input::from(Value::Text(Text::new("lwtr.20t"))).into_value(&Kind::Text);
        assert_eq!(value.unwrap().to_string(), "lwtr.20t");
        assert!(Input::from(Value::Text(Text::new("a=b"))).into_value(&Kind::Text).is_err());
        assert!(Input::from(Value::Text(Text::new("a$b"))).into_value(&Kind::Text).is_err());

        let value = Input::from("see  a=b").into_value(&Kind::Line).unwrap();
        assert_eq!(value.to_string(), "see a b");
    }

    #[test]
    fn reals_must_be_finite() {
        assert!(Input::from(f64::INFINITY).into_value(&Kind::Real).is_err());
        assert!(Input::from(Value::Real(f64::NAN.into())).into_value(&Kind::RealOrJump).is_err());
    }
}
