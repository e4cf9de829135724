//! Problem termination, output, and run control cards

use crate::kind::Kind;
use crate::rule::Rule;
use crate::schema::{Field, Schema};

const NON_NEGATIVE: Rule = Rule::Min(0.0);
const POSITIVE: Rule = Rule::Above(0.0);

/// `nps npp [npsmg]` history cutoff
pub static NPS: Schema = Schema {
    name: "nps",
    keyword: "nps",
    fields: &[
        Field::new("npp", Kind::Real).rule(POSITIVE),
        Field::new("npsmg", Kind::Integer).optional().rule(NON_NEGATIVE),
    ],
    ..Schema::CARD
};

/// `ctme tme` computer time cutoff in minutes
pub static CTME: Schema = Schema {
    name: "ctme",
    keyword: "ctme",
    fields: &[Field::new("tme", Kind::Real).rule(NON_NEGATIVE)],
    ..Schema::CARD
};

/// `lost lost1 lost2` lost particle limits
pub static LOST: Schema = Schema {
    name: "lost",
    keyword: "lost",
    fields: &[
        Field::new("lost1", Kind::IntegerOrJump).rule(NON_NEGATIVE),
        Field::new("lost2", Kind::IntegerOrJump).rule(NON_NEGATIVE),
    ],
    ..Schema::CARD
};

/// `prdmp ndp ndm mct ndmp dmmp` print and dump cycle
pub static PRDMP: Schema = Schema {
    name: "prdmp",
    keyword: "prdmp",
    fields: &[
        Field::new("ndp", Kind::IntegerOrJump).optional(),
        Field::new("ndm", Kind::IntegerOrJump).optional(),
        Field::new("mct", Kind::IntegerOrJump)
            .optional()
            .rule(Rule::OneOf(&[-2, -1, 0, 1])),
        Field::new("ndmp", Kind::IntegerOrJump).optional().rule(NON_NEGATIVE),
        Field::new("dmmp", Kind::IntegerOrJump).optional().rule(NON_NEGATIVE),
    ],
    ..Schema::CARD
};

/// `print [tables...]` output tables, negative numbers exclude
pub static PRINT: Schema = Schema {
    name: "print",
    keyword: "print",
    fields: &[Field::new("tables", Kind::Tuple(&Kind::Integer))
        .optional()
        .rule(Rule::Each(&Rule::NonZero))],
    ..Schema::CARD
};

/// `dbcn [x...]` debug information
pub static DBCN: Schema = Schema {
    name: "dbcn",
    keyword: "dbcn",
    fields: &[Field::new("x", Kind::Tuple(&Kind::RealOrJump)).optional()],
    ..Schema::CARD
};

/// `rand gen= seed= stride= hist=` random number generator
pub static RAND: Schema = Schema {
    name: "rand",
    keyword: "rand",
    options: &[
        Schema {
            name: "gen",
            keyword: "gen",
            fields: &[Field::new("gen", Kind::Integer).rule(Rule::OneOf(&[1, 2, 3, 4]))],
            ..Schema::OPTION
        },
        Schema {
            name: "seed",
            keyword: "seed",
            fields: &[Field::new("seed", Kind::Integer).rule(POSITIVE)],
            ..Schema::OPTION
        },
        Schema {
            name: "stride",
            keyword: "stride",
            fields: &[Field::new("stride", Kind::Integer).rule(POSITIVE)],
            ..Schema::OPTION
        },
        Schema {
            name: "hist",
            keyword: "hist",
            fields: &[Field::new("hist", Kind::Integer).rule(POSITIVE)],
            ..Schema::OPTION
        },
    ],
    ..Schema::CARD
};

/// `mode x...` particles to transport
pub static MODE: Schema = Schema {
    name: "mode",
    keyword: "mode",
    fields: &[Field::new("particles", Kind::Tuple(&Kind::Designator))],
    ..Schema::CARD
};

#[cfg(test)]
mod tests {
    use super::*;
    use ncards_grammar::Level;

    #[test]
    fn ctme() {
        let card = CTME.parse("ctme 30").unwrap();
        assert_eq!(card["tme"], 30);
        assert_eq!(card.to_mcnp(), "ctme 30.0");

        let error = CTME.parse("ctme -1").unwrap_err();
        assert!(error.is_semantics());
        assert_eq!(error.field(), Some("tme"));
        assert!(CTME.parse("ctme abc").unwrap_err().is_syntax());
    }

    #[test]
    fn lost_accepts_jumps() {
        let card = LOST.parse("lost j 10").unwrap();
        assert!(card["lost1"].is_jump());
        assert_eq!(card["lost2"], 10);
    }

    #[test]
    fn rand_options() {
        let card = RAND.parse("rand gen=2 seed=12345").unwrap();
        assert_eq!(card.option("seed").unwrap()["seed"], 12345);

        let error = RAND.parse("rand gen=7").unwrap_err();
        assert_eq!(error.level(), Some(Level::Option));
    }

    #[test]
    fn mode_particles() {
        let card = MODE.parse("mode n p e").unwrap();
        assert_eq!(card["particles"].as_list().unwrap().len(), 3);
        assert!(MODE.parse("mode").is_err());
    }
}
