//! Trait symbols, trait pairs and four-letter type codes.
//!
//! The eight traits form four opposing pairs. A [`TypeCode`] holds exactly one
//! trait from each pair in the fixed order `E/I, S/N, T/F, J/P`, so a partial
//! or mixed-up code cannot be constructed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the eight personality traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Trait {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Trait {
    /// All traits in board order.
    pub const ALL: [Trait; 8] = [
        Trait::E,
        Trait::I,
        Trait::S,
        Trait::N,
        Trait::T,
        Trait::F,
        Trait::J,
        Trait::P,
    ];

    /// Single-letter symbol used in type codes.
    pub fn symbol(self) -> char {
        match self {
            Trait::E => 'E',
            Trait::I => 'I',
            Trait::S => 'S',
            Trait::N => 'N',
            Trait::T => 'T',
            Trait::F => 'F',
            Trait::J => 'J',
            Trait::P => 'P',
        }
    }

    /// Parse a symbol (case-insensitive).
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'E' => Some(Trait::E),
            'I' => Some(Trait::I),
            'S' => Some(Trait::S),
            'N' => Some(Trait::N),
            'T' => Some(Trait::T),
            'F' => Some(Trait::F),
            'J' => Some(Trait::J),
            'P' => Some(Trait::P),
            _ => None,
        }
    }

    /// The pair this trait belongs to.
    pub fn pair(self) -> TraitPair {
        match self {
            Trait::E | Trait::I => TraitPair::EI,
            Trait::S | Trait::N => TraitPair::SN,
            Trait::T | Trait::F => TraitPair::TF,
            Trait::J | Trait::P => TraitPair::JP,
        }
    }

    /// Position of this trait in a score board.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One of the four opposing trait pairs, in type-code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TraitPair {
    EI,
    SN,
    TF,
    JP,
}

impl TraitPair {
    /// Pairs in the order their winners appear in a type code.
    pub const ALL: [TraitPair; 4] = [TraitPair::EI, TraitPair::SN, TraitPair::TF, TraitPair::JP];

    /// The symbol chosen when a tie-break draw is below 0.5.
    pub fn first(self) -> Trait {
        match self {
            TraitPair::EI => Trait::E,
            TraitPair::SN => Trait::S,
            TraitPair::TF => Trait::T,
            TraitPair::JP => Trait::J,
        }
    }

    pub fn second(self) -> Trait {
        match self {
            TraitPair::EI => Trait::I,
            TraitPair::SN => Trait::N,
            TraitPair::TF => Trait::F,
            TraitPair::JP => Trait::P,
        }
    }

    pub fn contains(self, t: Trait) -> bool {
        t.pair() == self
    }

    fn position(self) -> usize {
        self as usize
    }
}

/// Error returned when a string is not one of the 16 type codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid type code: {0:?}")]
pub struct ParseTypeCodeError(pub String);

/// A four-letter personality type such as `ENFP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeCode([Trait; 4]);

impl TypeCode {
    /// Build a code from one trait per pair, in pair order.
    ///
    /// Returns `None` if any trait is not from the matching pair.
    pub fn from_traits(traits: [Trait; 4]) -> Option<Self> {
        let valid = TraitPair::ALL
            .iter()
            .zip(traits.iter())
            .all(|(pair, t)| pair.contains(*t));
        valid.then_some(Self(traits))
    }

    /// Build a code by asking `pick` for the winner of each pair.
    ///
    /// Each answer is coerced into its pair: anything that is not the pair's
    /// second symbol counts as the first.
    pub fn from_pairs(mut pick: impl FnMut(TraitPair) -> Trait) -> Self {
        let mut traits = [Trait::E; 4];
        for pair in TraitPair::ALL {
            let chosen = pick(pair);
            traits[pair.position()] = if chosen == pair.second() {
                pair.second()
            } else {
                pair.first()
            };
        }
        Self(traits)
    }

    /// The four traits of this code.
    pub fn traits(&self) -> [Trait; 4] {
        self.0
    }

    /// The trait chosen for `pair`.
    pub fn winner(&self, pair: TraitPair) -> Trait {
        self.0[pair.position()]
    }

    /// All 16 codes, `ESTJ` first and `INFP` last.
    pub fn all() -> impl Iterator<Item = TypeCode> {
        (0u8..16).map(|bits| {
            TypeCode::from_pairs(|pair| {
                let shift = 3 - pair.position();
                if bits >> shift & 1 == 0 {
                    pair.first()
                } else {
                    pair.second()
                }
            })
        })
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in self.0 {
            write!(f, "{}", t.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for TypeCode {
    type Err = ParseTypeCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTypeCodeError(s.to_string());
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 4 {
            return Err(err());
        }
        let mut traits = [Trait::E; 4];
        for (slot, c) in traits.iter_mut().zip(chars) {
            *slot = Trait::from_symbol(c).ok_or_else(err)?;
        }
        TypeCode::from_traits(traits).ok_or_else(err)
    }
}

impl TryFrom<String> for TypeCode {
    type Error = ParseTypeCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeCode> for String {
    fn from(code: TypeCode) -> Self {
        code.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn trait_symbols_round_trip() {
        for t in Trait::ALL {
            assert_eq!(Trait::from_symbol(t.symbol()), Some(t));
        }
        assert_eq!(Trait::from_symbol('x'), None);
        assert_eq!(Trait::from_symbol('n'), Some(Trait::N));
    }

    #[test]
    fn every_trait_belongs_to_exactly_one_pair() {
        for pair in TraitPair::ALL {
            let members: Vec<_> = Trait::ALL.iter().filter(|t| pair.contains(**t)).collect();
            assert_eq!(members, vec![&pair.first(), &pair.second()]);
        }
    }

    #[test]
    fn parse_valid_code() {
        let code: TypeCode = "ENFP".parse().unwrap();
        assert_eq!(code.traits(), [Trait::E, Trait::N, Trait::F, Trait::P]);
        assert_eq!(code.to_string(), "ENFP");
        assert_eq!(code.winner(TraitPair::TF), Trait::F);
    }

    #[test]
    fn parse_is_case_insensitive() {
        let code: TypeCode = "intj".parse().unwrap();
        assert_eq!(code.to_string(), "INTJ");
    }

    #[test]
    fn parse_rejects_wrong_length_and_order() {
        assert!("ENF".parse::<TypeCode>().is_err());
        assert!("ENFPX".parse::<TypeCode>().is_err());
        // N in the E/I slot
        assert!("NEFP".parse::<TypeCode>().is_err());
        assert!("EXFP".parse::<TypeCode>().is_err());
    }

    #[test]
    fn from_traits_validates_pairs() {
        assert!(TypeCode::from_traits([Trait::I, Trait::S, Trait::T, Trait::J]).is_some());
        assert!(TypeCode::from_traits([Trait::S, Trait::I, Trait::T, Trait::J]).is_none());
    }

    #[test]
    fn all_yields_sixteen_distinct_codes() {
        let codes: HashSet<String> = TypeCode::all().map(|c| c.to_string()).collect();
        assert_eq!(codes.len(), 16);
        assert_eq!(TypeCode::all().next().unwrap().to_string(), "ESTJ");
        assert_eq!(TypeCode::all().last().unwrap().to_string(), "INFP");
    }

    #[test]
    fn type_code_serializes_as_string() {
        let code: TypeCode = "ISFJ".parse().unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"ISFJ\"");
        let back: TypeCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
        assert!(serde_json::from_str::<TypeCode>("\"ABCD\"").is_err());
    }
}
