//! Integration tests for parsing, writing, and building cards

use ncards_cards::catalog::{self, CATALOG};
use std::time::{Duration, Instant};

use ncards_cards::{Builder, Card, Error, Value};
use ncards_grammar::{Level, Text};
use rstest::rstest;

#[rstest]
#[case("nps 1000")]
#[case("ctme 30")]
#[case("lost 5 2")]
#[case("prdmp j j 1 2")]
#[case("print 10 -20")]
#[case("dbcn 1 j 3")]
#[case("rand gen=2 seed=12345 stride=152917")]
#[case("mode n p")]
#[case("sdef pos=0 0 0 erg=d1 par=n")]
#[case("si1 h 0 1 2")]
#[case("sp1 d 0 1 1")]
#[case("sp2 -3 0.988 2.249")]
#[case("sb1 -21 3")]
#[case("kcode 1000 1.0 50 250")]
#[case("ksrc 0 0 0 10 0 0")]
#[case("f4:n 1 2 3")]
#[case("fc4 neutron flux")]
#[case("fc4 see 2j")]
#[case("e4 1e-5 1 14")]
#[case("t4 1 10 100")]
#[case("c2 -0.5 0 1")]
#[case("fm4 -1 1 -6")]
#[case("fq4 e f")]
#[case("de4 log 1 2 3")]
#[case("df4 lin 1 2 3")]
#[case("fmesh14:n geom=xyz origin=0 0 0 imesh=10 20 iints=2 2")]
#[case("m1 1001.80c 2 8016.80c 1 nlib=80c")]
#[case("mt1 lwtr.20t")]
#[case("tr1 0 0 5")]
#[case("phys:n 20 0 j j j j 1")]
#[case("phys:p 100 1")]
#[case("phys:e 100 0 1")]
#[case("phys:h 100 j j j -1")]
#[case("cut:n j 0.1")]
#[case("void")]
#[case("nonu 0 j 2")]
#[case("imp:n 1 2j 0")]
#[case("wwp:n 5 3 5 0 -1")]
#[case("wwe:n 1e-5 1 20")]
#[case("wwn1:n 0.5 -1 j 0")]
#[case("ptrac file=asc nps=1 1000")]
fn text_round_trip(#[case] text: &str) {
    let card = Card::from_mcnp(text).unwrap();
    let written = card.to_mcnp();
    assert_eq!(Card::from_mcnp(&written).unwrap(), card, "{written}");
    // canonical text is stable
    assert_eq!(Card::from_mcnp(&written).unwrap().to_mcnp(), written);
}

#[rstest]
#[case("lost 5 2")]
#[case("sb1 -21 3 0.5")]
#[case("kcode 1000 j 50 250")]
#[case("fmesh4:p geom=cyl imesh=5 iints=10 out=none")]
#[case("m2 92235.80c -0.9 92238.80c -0.1 gas=1")]
#[case("wwp:p 4 j 5")]
fn builder_round_trip(#[case] text: &str) {
    let card = Card::from_mcnp(text).unwrap();
    assert_eq!(Builder::unbuild(&card).build().unwrap(), card);
    assert_eq!(card.to_builder().build().unwrap(), card);
}

#[test]
fn grammar_lists_fields_in_order() {
    for schema in CATALOG {
        let grammar = schema.grammar();
        let names: Vec<&str> = grammar
            .split_whitespace()
            .skip(1)
            .take(schema.fields.len())
            .map(|token| {
                token
                    .trim_matches(|c| c == '[' || c == ']')
                    .trim_end_matches("...")
            })
            .collect();
        assert_eq!(names, schema.field_names(), "{grammar}");
    }
}

#[rstest]
#[case("lost j j")]
#[case("kcode j")]
#[case("wwp:n j j j j j j j j j j")]
#[case("phys:n j j j")]
#[case("imp:n j")]
fn jumps_pass_every_rule(#[case] text: &str) {
    assert!(Card::from_mcnp(text).is_ok(), "{text}");
}

#[test]
fn first_failure_is_reported() {
    // nsrck, rkk, and the ikz/kct relation are all wrong
    let error = Card::from_mcnp("kcode 0 -1 50 20").unwrap_err();
    assert_eq!(error.field(), Some("nsrck"));

    // a bad option is only reported once the fields are fine
    let error = Card::from_mcnp("fmesh4:n geom=box").unwrap_err();
    assert!(error.is_syntax());
    let error = Card::from_mcnp("fmesh3:n imesh=2 1").unwrap_err();
    assert_eq!(error.field(), Some("suffix"));
}

#[test]
fn syntax_before_semantics() {
    // the value is out of range, but the card also has a word too many
    let error = Card::from_mcnp("ctme -1 2").unwrap_err();
    assert!(error.is_syntax());
    assert_eq!(error.level(), Some(Level::Card));
}

#[test]
fn repeated_options() {
    let error = Card::from_mcnp("rand seed=1 seed=2").unwrap_err();
    assert!(error.is_syntax());
    assert_eq!(error.level(), Some(Level::Option));
}

#[test]
fn unknown_keywords() {
    assert!(matches!(
        Card::from_mcnp("zzz 1 2").unwrap_err(),
        Error::UnknownKeyword(_)
    ));
    assert!(matches!(
        Card::from_mcnp("*f8:n 1").unwrap_err(),
        Error::UnknownKeyword(_)
    ));
}

#[test]
fn error_messages() {
    let error = Card::from_mcnp("ctme -1").unwrap_err();
    assert_eq!(
        error.to_string(),
        "invalid card value -1.0 for `tme` on `ctme`, expected a value >= 0"
    );
}

#[test]
fn multi_line_cards() {
    let text = "m1 1001.80c 2 $ hydrogen\n     8016.80c 1";
    let card = catalog::parse(text).unwrap();
    assert_eq!(card.to_mcnp(), "m1 1001.80c 2.0 8016.80c 1.0");

    let text = "e4 1e-5 1 &\n 14";
    assert_eq!(catalog::parse(text).unwrap()["bounds"].as_list().unwrap().len(), 3);
}

#[test]
fn edits_are_validated() {
    let card = Card::from_mcnp("wwp:n 5 3").unwrap();
    let edited = card.with("wupn", 10).unwrap();
    assert_eq!(edited.to_mcnp(), "wwp:n 10.0 3.0");
    assert!(card.with("wsurvn", 6).is_err());
    assert!(matches!(
        card.with("nothing", 1).unwrap_err(),
        Error::UnknownField { .. }
    ));
}

#[test]
fn long_cards_read_in_linear_time() {
    let text = format!("imp:n {}", vec!["1"; 100_000].join(" "));

    let start = Instant::now();
    let card = Card::from_mcnp(&text).unwrap();
    let written = card.to_mcnp();
    let elapsed = start.elapsed();

    assert!(elapsed < Duration::from_secs(10), "{elapsed:?}");
    assert_eq!(card["importances"].as_list().unwrap().len(), 100_000);
    assert_eq!(written.split(' ').count(), 100_001);
}

#[test]
fn overflowing_reals_are_rejected() {
    assert!(Card::from_mcnp("ctme 1e999").unwrap_err().is_syntax());
    assert!(Card::from_mcnp("ctme 1e300").is_ok());

    let builder = catalog::schema("ctme").unwrap().builder();
    assert!(builder.set("tme", f64::INFINITY).build().is_err());
}

#[test]
fn text_values_must_read_back() {
    let mt = catalog::schema("mt").unwrap();
    let card = mt
        .builder()
        .suffix(1)
        .set("tables", vec![Value::Text(Text::new("lwtr.20t"))])
        .build()
        .unwrap();
    assert_eq!(card.to_mcnp(), "mt1 lwtr.20t");

    let built = mt
        .builder()
        .suffix(1)
        .set("tables", vec![Value::Text(Text::new("a=b"))])
        .build();
    assert!(built.is_err());
}

#[test]
fn free_text_keeps_jumps() {
    let card = Card::from_mcnp("fc4 see 2j").unwrap();
    assert_eq!(card["comment"].to_string(), "see 2j");
    assert_eq!(card.to_mcnp(), "fc4 see 2j");
}

#[rstest]
#[case("phys:e 100 0 1", "phys_e")]
#[case("phys:h 100 j j j -1", "phys_h")]
#[case("phys:d 100", "phys_h")]
#[case("phys:a 200 0", "phys_h")]
fn charged_particle_physics(#[case] text: &str, #[case] name: &str) {
    assert_eq!(Card::from_mcnp(text).unwrap().name(), name);
}
