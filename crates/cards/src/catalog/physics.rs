//! Physics options and cutoffs

use ncards_grammar::Particle;

use crate::card::Card;
use crate::kind::Kind;
use crate::rule::Rule;
use crate::schema::{Check, Field, Presence, Schema};

const NON_NEGATIVE: Rule = Rule::Min(0.0);
const POSITIVE: Rule = Rule::Above(0.0);
const SWITCH: Rule = Rule::OneOf(&[0, 1]);
const FRACTION: Rule = Rule::Range(0.0, 1.0);
const STEP_FACTOR: Rule = Rule::Range(0.8, 0.99);

/// `phys:n emax emcnf iunr ...` neutron physics
pub static PHYS_N: Schema = Schema {
    name: "phys_n",
    keyword: "phys",
    designator: Presence::Required,
    particles: &[Particle::Neutron],
    fields: &[
        Field::new("emax", Kind::RealOrJump).optional().rule(POSITIVE),
        Field::new("emcnf", Kind::RealOrJump).optional().rule(NON_NEGATIVE),
        Field::new("iunr", Kind::IntegerOrJump).optional().rule(SWITCH),
        Field::new("dnb", Kind::IntegerOrJump).optional(),
        Field::new("tabl", Kind::RealOrJump).optional(),
        Field::new("fism", Kind::IntegerOrJump).optional().rule(Rule::OneOf(&[0, 1, 5])),
        Field::new("coilf", Kind::RealOrJump).optional().rule(NON_NEGATIVE),
        Field::new("cutn", Kind::RealOrJump).optional(),
        Field::new("ngam", Kind::IntegerOrJump).optional().rule(Rule::OneOf(&[0, 1, 2])),
        Field::new("reserved", Kind::IntegerOrJump).optional(),
        Field::new("i_int_model", Kind::IntegerOrJump).optional().rule(Rule::Range(0.0, 3.0)),
        Field::new("i_els_model", Kind::IntegerOrJump).optional().rule(Rule::Range(0.0, 1.0)),
    ],
    checks: &[Check {
        fields: &["emax", "emcnf"],
        test: analog_capture_below_emax,
        describe: "analog capture energy no higher than the upper energy limit",
    }],
    ..Schema::CARD
};

/// `phys:p emcpf ides nocoh ispn nodop j fism` photon physics
pub static PHYS_P: Schema = Schema {
    name: "phys_p",
    keyword: "phys",
    designator: Presence::Required,
    particles: &[Particle::Photon],
    fields: &[
        Field::new("emcpf", Kind::RealOrJump).optional().rule(POSITIVE),
        Field::new("ides", Kind::IntegerOrJump).optional().rule(SWITCH),
        Field::new("nocoh", Kind::IntegerOrJump).optional().rule(SWITCH),
        Field::new("ispn", Kind::IntegerOrJump).optional().rule(Rule::OneOf(&[-1, 0, 1])),
        Field::new("nodop", Kind::IntegerOrJump).optional().rule(SWITCH),
        Field::new("reserved", Kind::IntegerOrJump).optional(),
        Field::new("fism", Kind::IntegerOrJump).optional().rule(Rule::OneOf(&[0, 1, 5])),
    ],
    ..Schema::CARD
};

/// `phys:e emax ides iphot ibad istrg bnum xnum rnok enum numb ...` electron physics
pub static PHYS_E: Schema = Schema {
    name: "phys_e",
    keyword: "phys",
    designator: Presence::Required,
    particles: &[Particle::Electron],
    fields: &[
        Field::new("emax", Kind::RealOrJump).optional().rule(POSITIVE),
        Field::new("ides", Kind::IntegerOrJump).optional().rule(SWITCH),
        Field::new("iphot", Kind::IntegerOrJump).optional().rule(SWITCH),
        Field::new("ibad", Kind::IntegerOrJump).optional().rule(SWITCH),
        Field::new("istrg", Kind::IntegerOrJump).optional().rule(SWITCH),
        Field::new("bnum", Kind::RealOrJump).optional().rule(NON_NEGATIVE),
        Field::new("xnum", Kind::RealOrJump).optional().rule(NON_NEGATIVE),
        Field::new("rnok", Kind::RealOrJump).optional().rule(NON_NEGATIVE),
        Field::new("enum", Kind::RealOrJump).optional().rule(NON_NEGATIVE),
        Field::new("numb", Kind::RealOrJump).optional().rule(NON_NEGATIVE),
        Field::new("i_mcs_model", Kind::IntegerOrJump).optional(),
        Field::new("efac", Kind::RealOrJump).optional().rule(STEP_FACTOR),
        Field::new("electron_method_boundary", Kind::RealOrJump)
            .optional()
            .rule(NON_NEGATIVE),
        Field::new("ckvnum", Kind::RealOrJump).optional().rule(FRACTION),
    ],
    ..Schema::CARD
};

/// Every particle without a physics card of its own
const CHARGED: &[Particle] = &[
    Particle::NegativeMuon,
    Particle::AntiNeutron,
    Particle::ElectronNeutrino,
    Particle::MuonNeutrino,
    Particle::Positron,
    Particle::Proton,
    Particle::LambdaBaryon,
    Particle::PosSigmaBaryon,
    Particle::NegSigmaBaryon,
    Particle::XiBaryon,
    Particle::NegXiBaryon,
    Particle::OmegaBaryon,
    Particle::PosMuon,
    Particle::AntiElectronNeutrino,
    Particle::AntiMuonNeutrino,
    Particle::AntiProton,
    Particle::PosPion,
    Particle::NeuPion,
    Particle::PosKaon,
    Particle::ShortKaon,
    Particle::LongKaon,
    Particle::AntiLambdaBaryon,
    Particle::AntiPosSigmaBaryon,
    Particle::AntiNegSigmaBaryon,
    Particle::AntiNeuXiBaryon,
    Particle::PosXiBaryon,
    Particle::AntiOmega,
    Particle::Deuteron,
    Particle::Triton,
    Particle::Helion,
    Particle::Alpha,
    Particle::NegPion,
    Particle::NegKaon,
    Particle::HeavyIon,
];

/// `phys:h emax ean tabl j istrg j recl j j j efac ckvnum drp` proton physics
///
/// The same layout applies to every other particle, e.g. `phys:d` or `phys:#`.
pub static PHYS_H: Schema = Schema {
    name: "phys_h",
    keyword: "phys",
    designator: Presence::Required,
    particles: CHARGED,
    fields: &[
        Field::new("emax", Kind::RealOrJump).optional().rule(POSITIVE),
        Field::new("ean", Kind::RealOrJump).optional().rule(NON_NEGATIVE),
        Field::new("tabl", Kind::RealOrJump).optional(),
        Field::new("reserved4", Kind::IntegerOrJump).optional(),
        Field::new("istrg", Kind::IntegerOrJump).optional().rule(Rule::OneOf(&[-1, 1])),
        Field::new("reserved6", Kind::IntegerOrJump).optional(),
        Field::new("recl", Kind::RealOrJump).optional().rule(FRACTION),
        Field::new("reserved8", Kind::IntegerOrJump).optional(),
        Field::new("reserved9", Kind::IntegerOrJump).optional(),
        Field::new("reserved10", Kind::IntegerOrJump).optional(),
        Field::new("efac", Kind::RealOrJump).optional().rule(STEP_FACTOR),
        Field::new("ckvnum", Kind::RealOrJump).optional().rule(FRACTION),
        Field::new("drp", Kind::RealOrJump).optional(),
    ],
    ..Schema::CARD
};

/// `cut:pl t e wc1 wc2 swtm` time, energy, and weight cutoffs
pub static CUT: Schema = Schema {
    name: "cut",
    keyword: "cut",
    designator: Presence::Required,
    fields: &[
        Field::new("t", Kind::RealOrJump).optional().rule(POSITIVE),
        Field::new("e", Kind::RealOrJump).optional().rule(NON_NEGATIVE),
        Field::new("wc1", Kind::RealOrJump).optional(),
        Field::new("wc2", Kind::RealOrJump).optional(),
        Field::new("swtm", Kind::RealOrJump).optional().rule(NON_NEGATIVE),
    ],
    checks: &[Check {
        fields: &["wc1", "wc2"],
        test: weight_cutoffs,
        describe: "wc2 no greater than wc1",
    }],
    ..Schema::CARD
};

/// `void [cells...]` remove materials, for all or the listed cells
pub static VOID: Schema = Schema {
    name: "void",
    keyword: "void",
    fields: &[Field::new("cells", Kind::Tuple(&Kind::Integer))
        .optional()
        .rule(Rule::Each(&POSITIVE))],
    ..Schema::CARD
};

/// `nonu [fission...]` fission treatment per cell
pub static NONU: Schema = Schema {
    name: "nonu",
    keyword: "nonu",
    fields: &[Field::new("fission", Kind::Tuple(&Kind::IntegerOrJump))
        .optional()
        .rule(Rule::Each(&Rule::OneOf(&[0, 1, 2])))],
    ..Schema::CARD
};

fn analog_capture_below_emax(card: &Card) -> bool {
    match (card.number("emax"), card.number("emcnf")) {
        (Some(emax), Some(emcnf)) => emcnf <= emax,
        _ => true,
    }
}

/// Only meaningful when both are given as weights rather than zero
fn weight_cutoffs(card: &Card) -> bool {
    match (card.number("wc1"), card.number("wc2")) {
        (Some(wc1), Some(wc2)) if wc1 > 0.0 && wc2 > 0.0 => wc2 <= wc1,
        (Some(wc1), Some(wc2)) if wc1 < 0.0 && wc2 < 0.0 => wc2 >= wc1,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn phys_by_particle() {
        let card = catalog::parse("phys:n 20 0 j j j j 1").unwrap();
        assert_eq!(card.name(), "phys_n");
        assert_eq!(card["coilf"], 1.0);

        let card = catalog::parse("phys:p 100 1").unwrap();
        assert_eq!(card.name(), "phys_p");

        // the photon layout is the one that fits, so its error is reported
        let error = catalog::parse("phys:p 100 3").unwrap_err();
        assert_eq!(error.field(), Some("ides"));

        let card = catalog::parse("phys:e 100 0 1").unwrap();
        assert_eq!(card.name(), "phys_e");
        assert_eq!(card["iphot"], 1);

        let card = catalog::parse("phys:h 100 j -1").unwrap();
        assert_eq!(card.name(), "phys_h");
        assert!(card["ean"].is_jump());

        // the proton layout covers every other particle
        assert_eq!(catalog::parse("phys:d 100").unwrap().name(), "phys_h");
        assert_eq!(catalog::parse("phys:e 100 2").unwrap_err().field(), Some("ides"));
    }

    #[test]
    fn every_particle_has_physics() {
        for particle in Particle::ALL {
            let text = format!("phys:{} 100", particle.symbol());
            assert!(catalog::parse(&text).is_ok(), "{text}");
        }
    }

    #[test]
    fn step_factor_range() {
        assert!(PHYS_E.parse("phys:e j j j j j j j j j j j 0.9").is_ok());
        let error = PHYS_H.parse("phys:h j j j j j j j j j j 0.5").unwrap_err();
        assert_eq!(error.field(), Some("efac"));
    }

    #[test]
    fn emcnf_below_emax() {
        let error = PHYS_N.parse("phys:n 20 30").unwrap_err();
        assert_eq!(error.field(), Some("emax, emcnf"));
    }

    #[test]
    fn cutoffs() {
        assert!(CUT.parse("cut:n j 0.1 0.5 0.25").is_ok());
        assert!(CUT.parse("cut:n j 0.1 -0.5 -0.25").is_ok());
        assert_eq!(CUT.parse("cut:n j 0.1 0.5 0.75").unwrap_err().field(), Some("wc1, wc2"));
    }

    #[test]
    fn cell_lists() {
        assert!(VOID.parse("void").is_ok());
        assert!(VOID.parse("void 1 2 3").is_ok());
        assert!(NONU.parse("nonu 0 j 2").is_ok());
        assert_eq!(NONU.parse("nonu 0 3").unwrap_err().field(), Some("fission[1]"));
    }
}
