//! MCNP particle designators

use serde::Serialize;

use crate::error::Error;

/// Complete collection of MCNP particle variants
///
/// Particles appear on cards as single character symbols, e.g. the `n` of
/// `imp:n` or the `p` of `mode n p`. Every symbol is case-insensitive.
///
/// ```rust
/// # use ncards_grammar::Particle;
/// // From the particle symbol
/// assert_eq!(Some(Particle::Alpha), Particle::from_symbol('a'));
/// assert_eq!(Some(Particle::PosMuon), Particle::from_symbol('!'));
///
/// // From the particle number, symbol, or full name
/// assert_eq!(Particle::Alpha, Particle::try_from(34).unwrap());
/// assert_eq!(Particle::Alpha, Particle::try_from("A").unwrap());
/// assert_eq!(Particle::Alpha, Particle::try_from("alpha particle").unwrap());
/// ```
///
/// For reference, the full list of MCNP particle identifiers:
///
/// | ID | Name                                  | Symbol   |
/// | -- | ------------------------------------- | -------- |
/// | 1  | neutron                               | n        |
/// | 2  | photon                                | p        |
/// | 3  | electron                              | e        |
/// | 4  | negative muon                         | \|       |
/// | 5  | anti neutron                          | q        |
/// | 6  | electron neutrino                     | u        |
/// | 7  | muon neutrino                         | v        |
/// | 8  | positron                              | f        |
/// | 9  | proton                                | h        |
/// | 10 | lambda baryon                         | l        |
/// | 11 | positive sigma baryon                 | +        |
/// | 12 | negative sigma baryon                 | -        |
/// | 13 | cascade; xi baryon                    | x        |
/// | 14 | negative cascade; negative xi baryon  | y        |
/// | 15 | omega baryon                          | o        |
/// | 16 | positive muon                         | !        |
/// | 17 | anti electron neutrino                | <        |
/// | 18 | anti muon neutrino                    | >        |
/// | 19 | anti proton                           | g        |
/// | 20 | positive pion                         | /        |
/// | 21 | neutral pion                          | z        |
/// | 22 | positive kaon                         | k        |
/// | 23 | kaon, short                           | %        |
/// | 24 | kaon, long                            | ^        |
/// | 25 | anti lambda baryon                    | b        |
/// | 26 | anti positive sigma baryon            | _        |
/// | 27 | anti negative sigma baryon            | ~        |
/// | 28 | anti cascade; anti neutral xi baryon  | c        |
/// | 29 | positive cascade; positive xi baryon  | w        |
/// | 30 | anti omega                            | @        |
/// | 31 | deuteron                              | d        |
/// | 32 | triton                                | t        |
/// | 33 | helion                                | s        |
/// | 34 | alpha particle                        | a        |
/// | 35 | negative pion                         | *        |
/// | 36 | negative kaon                         | ?        |
/// | 37 | heavy ions                            | #        |
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Particle {
    Neutron = 1,
    Photon = 2,
    Electron = 3,
    NegativeMuon = 4,
    AntiNeutron = 5,
    ElectronNeutrino = 6,
    MuonNeutrino = 7,
    Positron = 8,
    Proton = 9,
    LambdaBaryon = 10,
    PosSigmaBaryon = 11,
    NegSigmaBaryon = 12,
    XiBaryon = 13,
    NegXiBaryon = 14,
    OmegaBaryon = 15,
    PosMuon = 16,
    AntiElectronNeutrino = 17,
    AntiMuonNeutrino = 18,
    AntiProton = 19,
    PosPion = 20,
    NeuPion = 21,
    PosKaon = 22,
    ShortKaon = 23,
    LongKaon = 24,
    AntiLambdaBaryon = 25,
    AntiPosSigmaBaryon = 26,
    AntiNegSigmaBaryon = 27,
    AntiNeuXiBaryon = 28,
    PosXiBaryon = 29,
    AntiOmega = 30,
    Deuteron = 31,
    Triton = 32,
    Helion = 33,
    Alpha = 34,
    NegPion = 35,
    NegKaon = 36,
    HeavyIon = 37,
}

impl Particle {
    /// Every particle, in order of the MCNP particle number
    pub const ALL: [Particle; 37] = [
        Self::Neutron,
        Self::Photon,
        Self::Electron,
        Self::NegativeMuon,
        Self::AntiNeutron,
        Self::ElectronNeutrino,
        Self::MuonNeutrino,
        Self::Positron,
        Self::Proton,
        Self::LambdaBaryon,
        Self::PosSigmaBaryon,
        Self::NegSigmaBaryon,
        Self::XiBaryon,
        Self::NegXiBaryon,
        Self::OmegaBaryon,
        Self::PosMuon,
        Self::AntiElectronNeutrino,
        Self::AntiMuonNeutrino,
        Self::AntiProton,
        Self::PosPion,
        Self::NeuPion,
        Self::PosKaon,
        Self::ShortKaon,
        Self::LongKaon,
        Self::AntiLambdaBaryon,
        Self::AntiPosSigmaBaryon,
        Self::AntiNegSigmaBaryon,
        Self::AntiNeuXiBaryon,
        Self::PosXiBaryon,
        Self::AntiOmega,
        Self::Deuteron,
        Self::Triton,
        Self::Helion,
        Self::Alpha,
        Self::NegPion,
        Self::NegKaon,
        Self::HeavyIon,
    ];

    /// The MCNP particle number
    ///
    /// ```rust
    /// # use ncards_grammar::Particle;
    /// assert_eq!(Particle::Electron as u8, Particle::Electron.id());
    /// ```
    #[inline]
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// The single character used on cards, always lowercase
    pub fn symbol(&self) -> char {
        match self {
            Self::Neutron => 'n',
            Self::Photon => 'p',
            Self::Electron => 'e',
            Self::NegativeMuon => '|',
            Self::AntiNeutron => 'q',
            Self::ElectronNeutrino => 'u',
            Self::MuonNeutrino => 'v',
            Self::Positron => 'f',
            Self::Proton => 'h',
            Self::LambdaBaryon => 'l',
            Self::PosSigmaBaryon => '+',
            Self::NegSigmaBaryon => '-',
            Self::XiBaryon => 'x',
            Self::NegXiBaryon => 'y',
            Self::OmegaBaryon => 'o',
            Self::PosMuon => '!',
            Self::AntiElectronNeutrino => '<',
            Self::AntiMuonNeutrino => '>',
            Self::AntiProton => 'g',
            Self::PosPion => '/',
            Self::NeuPion => 'z',
            Self::PosKaon => 'k',
            Self::ShortKaon => '%',
            Self::LongKaon => '^',
            Self::AntiLambdaBaryon => 'b',
            Self::AntiPosSigmaBaryon => '_',
            Self::AntiNegSigmaBaryon => '~',
            Self::AntiNeuXiBaryon => 'c',
            Self::PosXiBaryon => 'w',
            Self::AntiOmega => '@',
            Self::Deuteron => 'd',
            Self::Triton => 't',
            Self::Helion => 's',
            Self::Alpha => 'a',
            Self::NegPion => '*',
            Self::NegKaon => '?',
            Self::HeavyIon => '#',
        }
    }

    /// Full name as given in the user manual
    pub fn name(&self) -> &'static str {
        match self {
            Self::Neutron => "neutron",
            Self::Photon => "photon",
            Self::Electron => "electron",
            Self::NegativeMuon => "negative muon",
            Self::AntiNeutron => "anti neutron",
            Self::ElectronNeutrino => "electron neutrino",
            Self::MuonNeutrino => "muon neutrino",
            Self::Positron => "positron",
            Self::Proton => "proton",
            Self::LambdaBaryon => "lambda baryon",
            Self::PosSigmaBaryon => "positive sigma baryon",
            Self::NegSigmaBaryon => "negative sigma baryon",
            Self::XiBaryon => "cascade; xi baryon",
            Self::NegXiBaryon => "negative cascade; negative xi baryon",
            Self::OmegaBaryon => "omega baryon",
            Self::PosMuon => "positive muon",
            Self::AntiElectronNeutrino => "anti electron neutrino",
            Self::AntiMuonNeutrino => "anti muon neutrino",
            Self::AntiProton => "anti proton",
            Self::PosPion => "positive pion",
            Self::NeuPion => "neutral pion",
            Self::PosKaon => "positive kaon",
            Self::ShortKaon => "kaon, short",
            Self::LongKaon => "kaon, long",
            Self::AntiLambdaBaryon => "anti lambda baryon",
            Self::AntiPosSigmaBaryon => "anti positive sigma baryon",
            Self::AntiNegSigmaBaryon => "anti negative sigma baryon",
            Self::AntiNeuXiBaryon => "anti cascade; anti neutral xi baryon",
            Self::PosXiBaryon => "positive cascade; positive xi baryon",
            Self::AntiOmega => "anti omega",
            Self::Deuteron => "deuteron",
            Self::Triton => "triton",
            Self::Helion => "helion",
            Self::Alpha => "alpha particle",
            Self::NegPion => "negative pion",
            Self::NegKaon => "negative kaon",
            Self::HeavyIon => "heavy ions",
        }
    }

    /// Find the particle for a card symbol, ignoring case
    pub fn from_symbol(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        Self::ALL.into_iter().find(|p| p.symbol() == c)
    }
}

/// Convert from any valid particle number
impl TryFrom<u8> for Particle {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1..=37 => Ok(Self::ALL[(v - 1) as usize]),
            _ => Err(Error::FailedToInferParticle(v.to_string())),
        }
    }
}

/// Convert from any valid particle number, symbol, or full name
impl TryFrom<&str> for Particle {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim().to_lowercase();

        if let Ok(id) = s.parse::<u8>() {
            return Self::try_from(id);
        }

        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_symbol(c).ok_or(Error::FailedToInferParticle(s));
        }

        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or(Error::FailedToInferParticle(s))
    }
}

impl std::fmt::Display for Particle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_unique() {
        for particle in Particle::ALL {
            assert_eq!(Particle::from_symbol(particle.symbol()), Some(particle));
        }
    }

    #[test]
    fn ids_match_table_order() {
        for (i, particle) in Particle::ALL.iter().enumerate() {
            assert_eq!(particle.id() as usize, i + 1);
        }
    }

    #[test]
    fn try_from_str() {
        assert_eq!(Particle::try_from("29").unwrap(), Particle::PosXiBaryon);
        assert_eq!(Particle::try_from("N").unwrap(), Particle::Neutron);
        assert_eq!(Particle::try_from("heavy ions").unwrap(), Particle::HeavyIon);
        assert!(Particle::try_from("0").is_err());
        assert!(Particle::try_from("$").is_err());
        assert!(Particle::try_from("graviton").is_err());
    }
}
