//! Per-field semantic constraints

use itertools::Itertools;

use ncards_utils::{f, SliceExt};

use crate::value::Value;

/// Constraint on the value of a single field
///
/// Rules only look at the field they are attached to. Relations between
/// fields are [Check](crate::Check)s on the whole card. A jump is always
/// accepted, since it stands for the default value.
///
/// Because nested rules must be `'static`, use a named constant for the inner
/// rule of [Rule::Each]:
///
/// ```rust
/// # use ncards_cards::Rule;
/// const POSITIVE: Rule = Rule::Above(0.0);
/// const ALL_POSITIVE: Rule = Rule::Each(&POSITIVE);
/// assert_eq!(ALL_POSITIVE.describe(), "each value > 0");
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// No constraint
    Any,
    /// Number `>=` the bound
    Min(f64),
    /// Number `>` the bound
    Above(f64),
    /// Number `<=` the bound
    Max(f64),
    /// Number `<` the bound
    Below(f64),
    /// Number within the inclusive range
    Range(f64, f64),
    /// Number other than zero
    NonZero,
    /// Integer from a fixed set
    OneOf(&'static [i64]),
    /// Text from a fixed set, ignoring case
    Choice(&'static [&'static str]),
    /// Rule applied to every element of a tuple or entry
    Each(&'static Rule),
    /// Strictly increasing list of numbers
    Ascending,
    /// Any other test, with a description of what it accepts
    Custom(fn(&Value) -> bool, &'static str),
}

impl Rule {
    /// Test a value against the rule
    pub fn check(&self, value: &Value) -> bool {
        if value.is_jump() {
            return true;
        }

        match self {
            Self::Any => true,
            Self::Min(min) => number(value, |v| v >= *min),
            Self::Above(min) => number(value, |v| v > *min),
            Self::Max(max) => number(value, |v| v <= *max),
            Self::Below(max) => number(value, |v| v < *max),
            Self::Range(lo, hi) => number(value, |v| (*lo..=*hi).contains(&v)),
            Self::NonZero => number(value, |v| v != 0.0),
            Self::OneOf(set) => value.as_integer().is_some_and(|i| set.contains(&i.value())),
            Self::Choice(set) => value.as_text().is_some_and(|t| t.is_one_of(set)),
            Self::Each(rule) => value
                .as_list()
                .is_some_and(|values| values.iter().all(|v| rule.check(v))),
            Self::Ascending => value.numbers().is_some_and(|v| v.is_ascending()),
            Self::Custom(test, _) => test(value),
        }
    }

    /// Index of the first element failing an [Rule::Each] rule
    pub(crate) fn first_failure<'a>(&self, value: &'a Value) -> Option<(usize, &'a Value)> {
        match self {
            Self::Each(rule) => value
                .as_list()?
                .iter()
                .enumerate()
                .find(|(_, v)| !rule.check(v)),
            _ => None,
        }
    }

    /// Description of the accepted values, used in error messages
    pub fn describe(&self) -> String {
        match self {
            Self::Any => "any value".to_string(),
            Self::Min(min) => f!("a value >= {min}"),
            Self::Above(min) => f!("a value > {min}"),
            Self::Max(max) => f!("a value <= {max}"),
            Self::Below(max) => f!("a value < {max}"),
            Self::Range(lo, hi) => f!("a value in [{lo}, {hi}]"),
            Self::NonZero => "a non-zero value".to_string(),
            Self::OneOf(set) => f!("one of {{{}}}", set.iter().join(", ")),
            Self::Choice(set) => f!("one of {{{}}}", set.iter().join(", ")),
            Self::Each(rule) => f!("each {}", rule.describe().trim_start_matches("a ")),
            Self::Ascending => "strictly ascending values".to_string(),
            Self::Custom(_, description) => description.to_string(),
        }
    }
}

fn number(value: &Value, test: impl Fn(f64) -> bool) -> bool {
    value.as_number().is_some_and(test)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ncards_grammar::{Integer, Real, Text, Tuple};

    fn real(v: f64) -> Value {
        Value::Real(Real::from(v))
    }

    fn tuple(values: Vec<Value>) -> Value {
        Value::Tuple(Tuple::new(values).unwrap())
    }

    #[test]
    fn bounds() {
        assert!(Rule::Min(0.0).check(&real(0.0)));
        assert!(!Rule::Above(0.0).check(&real(0.0)));
        assert!(Rule::Range(-1.0, 1.0).check(&real(1.0)));
        assert!(!Rule::Below(2.0).check(&real(2.0)));
        assert!(!Rule::NonZero.check(&Value::Integer(Integer::from(0))));
    }

    #[test]
    fn jumps_always_pass() {
        assert!(Rule::Above(10.0).check(&Value::Jump));
        assert!(Rule::OneOf(&[1]).check(&Value::Jump));
    }

    #[test]
    fn non_numbers_fail_numeric_rules() {
        assert!(!Rule::Min(0.0).check(&Value::Text(Text::from("abc"))));
    }

    #[test]
    fn each_reports_first_failure() {
        const POSITIVE: Rule = Rule::Above(0.0);
        let value = tuple(vec![real(1.0), real(-2.0), real(-3.0)]);
        let rule = Rule::Each(&POSITIVE);
        assert!(!rule.check(&value));
        assert_eq!(rule.first_failure(&value), Some((1, &real(-2.0))));
    }

    #[test]
    fn ascending() {
        assert!(Rule::Ascending.check(&tuple(vec![real(1.0), Value::Jump, real(2.0)])));
        assert!(!Rule::Ascending.check(&tuple(vec![real(1.0), real(1.0)])));
    }

    #[test]
    fn descriptions() {
        assert_eq!(Rule::OneOf(&[-2, -3]).describe(), "one of {-2, -3}");
        assert_eq!(Rule::Min(0.0).describe(), "a value >= 0");
    }
}
