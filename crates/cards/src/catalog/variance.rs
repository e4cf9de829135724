//! Variance reduction and particle tracking cards

use crate::card::Card;
use crate::kind::Kind;
use crate::rule::Rule;
use crate::schema::{Check, Field, Presence, Schema};
use crate::value::Value;

const NON_NEGATIVE: Rule = Rule::Min(0.0);
const POSITIVE: Rule = Rule::Above(0.0);
const LOWER_BOUND: Rule = Rule::Custom(is_lower_bound, "a bound >= 0, or -1 to kill");

/// `imp:pl importances...` cell importances
pub static IMP: Schema = Schema {
    name: "imp",
    keyword: "imp",
    designator: Presence::Required,
    fields: &[Field::new("importances", Kind::Tuple(&Kind::RealOrJump))
        .rule(Rule::Each(&NON_NEGATIVE))],
    ..Schema::CARD
};

/// `wwp:pl wupn wsurvn mxspln mwhere switchn mtime wnorm etsplt wu nmfp`
/// weight window parameters
pub static WWP: Schema = Schema {
    name: "wwp",
    keyword: "wwp",
    designator: Presence::Required,
    fields: &[
        Field::new("wupn", Kind::RealOrJump).optional().rule(Rule::Min(2.0)),
        Field::new("wsurvn", Kind::RealOrJump).optional().rule(Rule::Above(1.0)),
        Field::new("mxspln", Kind::RealOrJump).optional().rule(Rule::Above(1.0)),
        Field::new("mwhere", Kind::IntegerOrJump).optional().rule(Rule::OneOf(&[-1, 0, 1])),
        Field::new("switchn", Kind::RealOrJump).optional(),
        Field::new("mtime", Kind::IntegerOrJump).optional().rule(Rule::OneOf(&[0, 1])),
        Field::new("wnorm", Kind::RealOrJump).optional(),
        Field::new("etsplt", Kind::IntegerOrJump).optional().rule(Rule::OneOf(&[0, 1])),
        Field::new("wu", Kind::RealOrJump).optional().rule(POSITIVE),
        Field::new("nmfp", Kind::RealOrJump).optional().rule(POSITIVE),
    ],
    checks: &[Check {
        fields: &["wupn", "wsurvn"],
        test: survival_below_upper,
        describe: "survival weight below the upper weight bound",
    }],
    ..Schema::CARD
};

/// `wwe:pl bounds...` weight window energy or time bounds
pub static WWE: Schema = Schema {
    name: "wwe",
    keyword: "wwe",
    designator: Presence::Required,
    fields: &[Field::new("bounds", Kind::Tuple(&Kind::Real)).rule(Rule::Ascending)],
    ..Schema::CARD
};

/// `wwnn:pl bounds...` lower weight bounds for energy or time bin n
pub static WWN: Schema = Schema {
    name: "wwn",
    keyword: "wwn",
    suffix: Presence::Required,
    suffix_rule: Rule::Range(1.0, 99.0),
    designator: Presence::Required,
    fields: &[Field::new("bounds", Kind::Tuple(&Kind::RealOrJump))
        .rule(Rule::Each(&LOWER_BOUND))],
    ..Schema::CARD
};

const fn option(keyword: &'static str, fields: &'static [Field]) -> Schema {
    Schema {
        name: keyword,
        keyword,
        fields,
        ..Schema::OPTION
    }
}

const COUNT: &[Field] = &[Field::new("value", Kind::Integer).rule(POSITIVE)];
const INTEGER: &[Field] = &[Field::new("value", Kind::Integer)];
const REAL: &[Field] = &[Field::new("value", Kind::Real)];
const NUMBERS: &[Field] = &[Field::new("values", Kind::Tuple(&Kind::Integer))];
const WORDS: &[Field] = &[Field::new("values", Kind::Tuple(&Kind::Text))];
const FILE: &[Field] = &[Field::new("value", Kind::Choice(&["asc", "bin", "aov"]))];
const WRITE: &[Field] = &[Field::new("value", Kind::Choice(&["pos", "all"]))];
const EVENT: &[Field] = &[Field::new(
    "values",
    Kind::Tuple(&Kind::Choice(&["src", "bnk", "sur", "col", "ter", "cap"])),
)];

/// `ptrac keyword=values...` particle track output
pub static PTRAC: Schema = Schema {
    name: "ptrac",
    keyword: "ptrac",
    options: &[
        option("buffer", COUNT),
        option("file", FILE),
        option("max", INTEGER),
        option("meph", COUNT),
        option("write", WRITE),
        option("event", EVENT),
        option("filter", WORDS),
        option("type", WORDS),
        Schema {
            name: "nps",
            keyword: "nps",
            fields: &[Field::new("values", Kind::Tuple(&Kind::Integer))
                .rule(Rule::Each(&POSITIVE))],
            checks: &[Check {
                fields: &["values"],
                test: history_range,
                describe: "one history or a first and last history",
            }],
            ..Schema::OPTION
        },
        option("cell", NUMBERS),
        option("surface", NUMBERS),
        option("tally", NUMBERS),
        option("value", REAL),
    ],
    ..Schema::CARD
};

fn is_lower_bound(value: &Value) -> bool {
    value.as_number().is_some_and(|v| v >= 0.0 || v == -1.0)
}

fn survival_below_upper(card: &Card) -> bool {
    match (card.number("wupn"), card.number("wsurvn")) {
        (Some(wupn), Some(wsurvn)) => wsurvn < wupn,
        _ => true,
    }
}

fn history_range(card: &Card) -> bool {
    let Some(values) = card.get("values").and_then(Value::numbers) else {
        return false;
    };
    match values.as_slice() {
        [_] => true,
        [first, last] => first <= last,
        _ => false,
    }
}
