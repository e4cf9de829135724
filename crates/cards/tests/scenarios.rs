//! End to end behaviour for a few commonly used cards

use ncards_cards::{catalog, Builder, Card};

#[test]
fn ctme() {
    let card = Card::from_mcnp("ctme 30").unwrap();
    assert_eq!(card["tme"], 30);

    let error = Card::from_mcnp("ctme -1").unwrap_err();
    assert!(error.is_semantics());
    assert_eq!(error.field(), Some("tme"));
}

#[test]
fn lost() {
    let card = Card::from_mcnp("lost 5 2").unwrap();
    assert_eq!(card["lost1"], 5);
    assert_eq!(card["lost2"], 2);

    let rebuilt = Builder::unbuild(&card).build().unwrap();
    assert_eq!(rebuilt, card);
    assert_eq!(rebuilt.to_mcnp(), "lost 5 2");
}

#[test]
fn sb_function() {
    let card = Card::from_mcnp("sb -21 3.0").unwrap();
    assert_eq!(card.name(), "sb_function");
    assert_eq!(card["function"], -21);
    assert_eq!(card["a"], 3.0);
    assert!(card.get("b").is_none());

    let error = Card::from_mcnp("sb -99 3.0").unwrap_err();
    assert!(error.is_semantics());
    assert_eq!(error.field(), Some("function"));
}

#[test]
fn kcode_from_builder() {
    let schema = catalog::schema("kcode").unwrap();
    let card = Builder::new(schema)
        .set("nsrck", 5000)
        .set("kct", 150)
        .build()
        .unwrap();
    assert_eq!(card.to_mcnp(), "kcode 5000 j j 150");
    assert!(card["rkk"].is_jump());
}

#[test]
fn json_output() {
    let card = Card::from_mcnp("fmesh14:n geom=cyl imesh=10").unwrap();
    let json: serde_json::Value = serde_json::from_str(&card.to_json().unwrap()).unwrap();
    assert_eq!(json["suffix"], 14);
    assert_eq!(json["designator"], "n");
    assert_eq!(json["geom"]["geom"], "cyl");
    assert_eq!(json["imesh"]["bounds"][0], 10.0);
}
