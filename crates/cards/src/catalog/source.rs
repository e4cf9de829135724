//! Source definition and criticality source cards

use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{alpha1, digit1};
use nom::combinator::all_consuming;
use nom::sequence::preceded;
use nom::IResult;

use ncards_grammar::{Real, Token};

use crate::card::Card;
use crate::kind::Kind;
use crate::rule::Rule;
use crate::schema::{Check, Field, Presence, Schema};
use crate::value::Value;

const NON_NEGATIVE: Rule = Rule::Min(0.0);
const PROBABILITIES: Rule = Rule::Each(&NON_NEGATIVE);
const SOURCE_VARIABLE: Rule = Rule::Custom(
    is_source_variable,
    "a value, a distribution dN, or a dependency fVAR",
);
const SOURCE_VARIABLES: Rule = Rule::Each(&SOURCE_VARIABLE);

/// Built-in analytic source functions
const FUNCTIONS: &[i64] = &[-2, -3, -4, -5, -6, -7, -21, -31, -41];

const VARIABLE: &[Field] = &[Field::new("value", Kind::Tuple(&Kind::Text)).rule(SOURCE_VARIABLES)];

/// Source variable given as values, a distribution, or a dependency
const fn variable(keyword: &'static str) -> Schema {
    Schema {
        name: keyword,
        keyword,
        fields: VARIABLE,
        ..Schema::OPTION
    }
}

/// `sdef var=value...` general source definition
pub static SDEF: Schema = Schema {
    name: "sdef",
    keyword: "sdef",
    options: &[
        variable("cel"),
        variable("sur"),
        variable("erg"),
        variable("tme"),
        variable("dir"),
        variable("vec"),
        variable("nrm"),
        variable("pos"),
        variable("rad"),
        variable("ext"),
        variable("axs"),
        variable("x"),
        variable("y"),
        variable("z"),
        variable("ccc"),
        variable("ara"),
        Schema {
            name: "wgt",
            keyword: "wgt",
            fields: &[Field::new("wgt", Kind::Real).rule(Rule::Above(0.0))],
            ..Schema::OPTION
        },
        Schema {
            name: "eff",
            keyword: "eff",
            fields: &[Field::new("eff", Kind::Real).rule(Rule::Range(0.0, 1.0))],
            ..Schema::OPTION
        },
        Schema {
            name: "par",
            keyword: "par",
            fields: &[Field::new("par", Kind::Text)],
            ..Schema::OPTION
        },
        Schema {
            name: "tr",
            keyword: "tr",
            fields: &[Field::new("tr", Kind::Text)],
            ..Schema::OPTION
        },
    ],
    ..Schema::CARD
};

/// `sin [option] values...` source information
pub static SI: Schema = Schema {
    name: "si",
    keyword: "si",
    suffix: Presence::Required,
    suffix_rule: Rule::Range(1.0, 999.0),
    fields: &[
        Field::new("option", Kind::Choice(&["h", "l", "a", "s"])).optional(),
        Field::new("values", Kind::Tuple(&Kind::Real)),
    ],
    ..Schema::CARD
};

const TABULAR: Schema = Schema {
    suffix: Presence::Required,
    suffix_rule: Rule::Range(1.0, 999.0),
    fields: &[
        Field::new("option", Kind::Choice(&["d", "c", "v", "w"])).optional(),
        Field::new("probabilities", Kind::Tuple(&Kind::Real)).rule(PROBABILITIES),
    ],
    ..Schema::CARD
};

const FUNCTION: Schema = Schema {
    suffix: Presence::Optional,
    suffix_rule: Rule::Range(1.0, 999.0),
    fields: &[
        Field::new("function", Kind::Integer).rule(Rule::OneOf(FUNCTIONS)),
        Field::new("a", Kind::Real),
        Field::new("b", Kind::Real).optional(),
    ],
    ..Schema::CARD
};

/// `spn [option] probabilities...` tabular source probabilities
pub static SP_TABULAR: Schema = Schema {
    name: "sp_tabular",
    keyword: "sp",
    ..TABULAR
};

/// `sp[n] function a [b]` built-in source probability function
pub static SP_FUNCTION: Schema = Schema {
    name: "sp_function",
    keyword: "sp",
    ..FUNCTION
};

/// `sbn [option] probabilities...` tabular source bias
pub static SB_TABULAR: Schema = Schema {
    name: "sb_tabular",
    keyword: "sb",
    ..TABULAR
};

/// `sb[n] function a [b]` built-in source bias function
pub static SB_FUNCTION: Schema = Schema {
    name: "sb_function",
    keyword: "sb",
    ..FUNCTION
};

/// `kcode nsrck rkk ikz kct msrk knrm mrkp kc8` criticality source
pub static KCODE: Schema = Schema {
    name: "kcode",
    keyword: "kcode",
    fields: &[
        Field::new("nsrck", Kind::IntegerOrJump).rule(Rule::Above(0.0)),
        Field::new("rkk", Kind::RealOrJump).optional().rule(Rule::Above(0.0)),
        Field::new("ikz", Kind::IntegerOrJump).optional().rule(NON_NEGATIVE),
        Field::new("kct", Kind::IntegerOrJump).optional().rule(NON_NEGATIVE),
        Field::new("msrk", Kind::IntegerOrJump).optional().rule(Rule::Above(0.0)),
        Field::new("knrm", Kind::IntegerOrJump).optional().rule(Rule::OneOf(&[0, 1])),
        Field::new("mrkp", Kind::IntegerOrJump).optional().rule(Rule::Above(0.0)),
        Field::new("kc8", Kind::IntegerOrJump).optional().rule(Rule::OneOf(&[0, 1])),
    ],
    checks: &[Check {
        fields: &["ikz", "kct"],
        test: active_cycles,
        describe: "more total cycles than skipped cycles",
    }],
    ..Schema::CARD
};

/// `ksrc x y z...` initial fission source points
pub static KSRC: Schema = Schema {
    name: "ksrc",
    keyword: "ksrc",
    fields: &[Field::new(
        "points",
        Kind::Tuple(&Kind::Entry(&[Kind::Real, Kind::Real, Kind::Real])),
    )],
    ..Schema::CARD
};

/// A kct of zero means run until the time or history cutoff
fn active_cycles(card: &Card) -> bool {
    match (card.number("ikz"), card.number("kct")) {
        (Some(ikz), Some(kct)) => kct == 0.0 || kct > ikz,
        _ => true,
    }
}

fn is_source_variable(value: &Value) -> bool {
    value
        .as_text()
        .is_some_and(|text| Real::from_mcnp(text.as_str()).is_ok() || reference(text.as_str()).is_ok())
}

/// Distribution number `d3` or dependency `ferg`
fn reference(i: &str) -> IResult<&str, &str> {
    all_consuming(alt((
        preceded(tag_no_case("d"), digit1),
        preceded(tag_no_case("f"), alpha1),
    )))(i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn sdef_variables() {
        let card = SDEF.parse("sdef pos=0 0 0 erg=d1 par=n dir=fpos d2").unwrap();
        assert_eq!(card.options().len(), 4);
        assert_eq!(card.to_mcnp(), "sdef pos=0 0 0 erg=d1 par=n dir=fpos d2");

        let error = SDEF.parse("sdef erg=14 wgt=0").unwrap_err();
        assert_eq!(error.field(), Some("wgt"));
        assert!(SDEF.parse("sdef erg=x1").unwrap_err().is_semantics());
    }

    #[test]
    fn si_options_are_optional() {
        let card = SI.parse("si1 h 0 1 2").unwrap();
        assert_eq!(card["option"], "H");
        let card = SI.parse("si1 0 1 2").unwrap();
        assert!(card.get("option").is_none());
    }

    #[test]
    fn sb_alternatives() {
        let card = catalog::parse("sb1 -21 3.0").unwrap();
        assert_eq!(card.name(), "sb_function");
        assert_eq!(card["function"], -21);

        let card = catalog::parse("sb1 d 0 1 2").unwrap();
        assert_eq!(card.name(), "sb_tabular");

        // not a known function, but still a valid table
        let card = catalog::parse("sb1 1 2").unwrap();
        assert_eq!(card.name(), "sb_tabular");

        let error = catalog::parse("sb -99 3.0").unwrap_err();
        assert_eq!(error.field(), Some("function"));
    }

    #[test]
    fn kcode_cycles() {
        assert!(KCODE.parse("kcode 1000 1.0 50 250").is_ok());
        assert!(KCODE.parse("kcode 1000 1.0 50 0").is_ok());
        let error = KCODE.parse("kcode 1000 1.0 50 20").unwrap_err();
        assert_eq!(error.field(), Some("ikz, kct"));
    }

    #[test]
    fn ksrc_points() {
        let card = KSRC.parse("ksrc 0 0 0 1 1 1").unwrap();
        assert_eq!(card["points"].as_list().unwrap().len(), 2);
        assert!(KSRC.parse("ksrc 0 0 0 1").is_err());
    }
}
