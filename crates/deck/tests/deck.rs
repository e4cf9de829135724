//! Integration tests for reading and writing decks

use ncards_deck::{parse_deck, read_deck, write_deck, DataCard, Deck, Error};
use rstest::{fixture, rstest};

#[fixture]
fn simple() -> Deck {
    read_deck("./data/simple.i").unwrap()
}

#[rstest]
fn blocks(simple: Deck) {
    assert_eq!(simple.message.as_deref(), Some("outp=simple.o runtpe=simple.r"));
    assert_eq!(simple.title, "simple sphere with a point source");
    assert_eq!(simple.cells.len(), 2);
    assert_eq!(simple.cells[0], "1  1 -1.0  -1      imp:n=1 imp:p=1");
    assert_eq!(simple.surfaces, vec!["1  so  10.0"]);
    assert_eq!(simple.data.len(), 16);
}

#[rstest]
#[case("m", 1)]
#[case("mt", 1)]
#[case("f", 1)]
#[case("fmesh", 1)]
#[case("phys", 1)]
#[case("imp", 1)]
#[case("void", 0)]
fn parsed_cards(simple: Deck, #[case] keyword: &str, #[case] count: usize) {
    assert_eq!(simple.find(keyword).count(), count);
}

#[rstest]
fn continuation_lines(simple: Deck) {
    let material = simple.find("m").next().unwrap();
    assert_eq!(material.to_mcnp(), "m1 1001.80c 2.0 8016.80c 1.0");

    let energies = simple.find("e").next().unwrap();
    assert_eq!(energies["bounds"].as_list().unwrap().len(), 5);

    let mesh = simple.find("fmesh").next().unwrap();
    assert_eq!(mesh.options().len(), 8);
}

#[rstest]
fn unknown_cards_are_kept(simple: Deck) {
    let raw: Vec<&str> = simple.raw().collect();
    assert_eq!(raw, vec!["*f8:n 1"]);
}

#[rstest]
fn data_order_is_kept(simple: Deck) {
    let keywords: Vec<String> = simple
        .data
        .iter()
        .map(|card| match card {
            DataCard::Card(card) => card.keyword().to_string(),
            DataCard::Raw(text) => text.clone(),
        })
        .collect();
    assert_eq!(keywords.first().map(String::as_str), Some("m"));
    assert_eq!(keywords.last().map(String::as_str), Some("print"));
    assert_eq!(keywords[8], "*f8:n 1");
}

#[rstest]
fn written_decks_read_back(simple: Deck) {
    let text = simple.to_mcnp();
    assert!(text.lines().all(|line| line.len() <= 80));

    let deck = parse_deck(&text).unwrap();
    assert_eq!(deck, simple);
}

#[rstest]
fn write_to_file(simple: Deck) {
    let path = std::env::temp_dir().join("ncards_simple_out.i");
    write_deck(&simple, &path).unwrap();
    assert_eq!(read_deck(&path).unwrap(), simple);
    std::fs::remove_file(path).unwrap();
}

#[test]
fn invalid_cards_fail() {
    match read_deck("./data/invalid.i") {
        Err(Error::Card { line, source }) => {
            assert_eq!(line, 8);
            assert_eq!(source.field(), Some("wupn, wsurvn"));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn missing_files() {
    assert!(matches!(read_deck("./data/missing.i"), Err(Error::IOError(_))));
}

#[test]
fn coupled_transport_physics() {
    let text = "\
coupled electron photon run
1  1 -7.8  -1  imp:n,p,e,h=1
2  0        1  imp:n,p,e,h=0

1  so  5.0

m1 26056.80c 1
mode n p e h
phys:n 20
phys:p 100 0 1
phys:e 100 0 1 j j j j j j 1
phys:h 100 j j j -1
nps 1000
";
    let deck = parse_deck(text).unwrap();
    assert_eq!(deck.raw().count(), 0);

    let names: Vec<&str> = deck.find("phys").map(|card| card.name()).collect();
    assert_eq!(names, vec!["phys_n", "phys_p", "phys_e", "phys_h"]);

    assert_eq!(parse_deck(&deck.to_mcnp()).unwrap(), deck);
}
