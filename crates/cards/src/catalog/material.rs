//! Material and transformation cards

use nom::bytes::complete::take_while1;
use nom::character::complete::{alphanumeric1, char, digit1};
use nom::combinator::{all_consuming, opt};
use nom::sequence::{pair, preceded};
use nom::IResult;

use crate::card::Card;
use crate::kind::Kind;
use crate::rule::Rule;
use crate::schema::{Check, Field, Presence, Schema};
use crate::value::Value;

const COMPONENT: Rule = Rule::Custom(
    is_component,
    "a zaid such as 1001 or 1001.80c with a non-zero fraction",
);
const COMPONENTS: Rule = Rule::Each(&COMPONENT);
const LIBRARY: Rule = Rule::Custom(is_library, "a library identifier such as 80c");

const fn library(keyword: &'static str) -> Schema {
    Schema {
        name: keyword,
        keyword,
        fields: LIBRARIES,
        ..Schema::OPTION
    }
}

const LIBRARIES: &[Field] = &[Field::new("library", Kind::Text).rule(LIBRARY)];

/// `mn zaid fraction... [keyword=value...]` material composition
///
/// Fractions are all positive for atom fractions or all negative for weight
/// fractions. `m0` may hold only options to set defaults for every material.
pub static M: Schema = Schema {
    name: "m",
    keyword: "m",
    suffix: Presence::Required,
    suffix_rule: Rule::Range(0.0, 99_999_999.0),
    fields: &[Field::new(
        "components",
        Kind::Tuple(&Kind::Entry(&[Kind::Text, Kind::Real])),
    )
    .optional()
    .rule(COMPONENTS)],
    options: &[
        Schema {
            name: "gas",
            keyword: "gas",
            fields: &[Field::new("gas", Kind::Integer).rule(Rule::OneOf(&[0, 1]))],
            ..Schema::OPTION
        },
        Schema {
            name: "estep",
            keyword: "estep",
            fields: &[Field::new("estep", Kind::Integer).rule(Rule::Above(0.0))],
            ..Schema::OPTION
        },
        Schema {
            name: "hstep",
            keyword: "hstep",
            fields: &[Field::new("hstep", Kind::Integer).rule(Rule::Above(0.0))],
            ..Schema::OPTION
        },
        Schema {
            name: "cond",
            keyword: "cond",
            fields: &[Field::new("cond", Kind::Real)],
            ..Schema::OPTION
        },
        library("nlib"),
        library("plib"),
        library("pnlib"),
        library("elib"),
        library("hlib"),
    ],
    checks: &[Check {
        fields: &["components"],
        test: consistent_fractions,
        describe: "all atom fractions or all weight fractions",
    }],
    ..Schema::CARD
};

/// `mtn tables...` thermal scattering tables
pub static MT: Schema = Schema {
    name: "mt",
    keyword: "mt",
    suffix: Presence::Required,
    suffix_rule: Rule::Range(1.0, 99_999_999.0),
    fields: &[Field::new("tables", Kind::Tuple(&Kind::Text))],
    ..Schema::CARD
};

/// `trn o1 o2 o3 [xx' yx' zx' ... zz'] [m]` coordinate transformation
pub static TR: Schema = Schema {
    name: "tr",
    keyword: "tr",
    suffix: Presence::Required,
    suffix_rule: Rule::Range(1.0, 999.0),
    fields: &[
        Field::new("origin", Kind::Entry(&[Kind::Real, Kind::Real, Kind::Real])),
        Field::new(
            "matrix",
            Kind::Entry(&[
                Kind::Real,
                Kind::Real,
                Kind::Real,
                Kind::Real,
                Kind::Real,
                Kind::Real,
                Kind::Real,
                Kind::Real,
                Kind::Real,
            ]),
        )
        .optional(),
        Field::new("m", Kind::Integer)
            .optional()
            .rule(Rule::OneOf(&[-1, 1])),
    ],
    ..Schema::CARD
};

fn is_component(value: &Value) -> bool {
    match value.as_list() {
        Some([zaid, fraction]) => {
            zaid.as_text().is_some_and(|z| self::zaid(z.as_str()).is_ok())
                && fraction.as_number().is_some_and(|f| f != 0.0)
        }
        _ => false,
    }
}

fn is_library(value: &Value) -> bool {
    value
        .as_text()
        .is_some_and(|text| identifier(text.as_str()).is_ok())
}

fn identifier(i: &str) -> IResult<&str, &str> {
    all_consuming(alphanumeric1)(i)
}

/// Nuclide identifier, e.g. `1001`, `92235.80c`, or `6000.84p`
fn zaid(i: &str) -> IResult<&str, (&str, Option<&str>)> {
    all_consuming(pair(
        digit1,
        opt(preceded(char('.'), take_while1(|c: char| c.is_ascii_alphanumeric()))),
    ))(i)
}

fn consistent_fractions(card: &Card) -> bool {
    let Some(components) = card.get("components").and_then(Value::as_list) else {
        return true;
    };

    let fractions: Vec<f64> = components
        .iter()
        .filter_map(|c| c.as_list()?.get(1)?.as_number())
        .collect();

    fractions.iter().all(|f| *f > 0.0) || fractions.iter().all(|f| *f < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water() {
        let card = M.parse("m1 1001.80c 2 8016.80c 1 nlib=80c").unwrap();
        assert_eq!(card.to_mcnp(), "m1 1001.80c 2.0 8016.80c 1.0 nlib=80c");
        assert!(M.parse("m0 nlib=80c").is_ok());
    }

    #[test]
    fn mixed_fractions() {
        let error = M.parse("m1 1001 2 8016 -1").unwrap_err();
        assert_eq!(error.field(), Some("components"));
    }

    #[test]
    fn bad_components() {
        let error = M.parse("m1 1001.80c 0 8016.80c 1").unwrap_err();
        assert_eq!(error.field(), Some("components[0]"));
        assert!(M.parse("m1 h1 1").is_err());
        assert!(M.parse("m1 1001 2 8016").is_err());
    }

    #[test]
    fn transformations() {
        assert!(TR.parse("tr1 0 0 5").is_ok());
        let card = TR.parse("tr2 0 0 0 1 0 0 0 1 0 0 0 1 -1").unwrap();
        assert_eq!(card["m"], -1);
        assert!(TR.parse("tr1 0 0 0 1 0").is_err());
    }
}
