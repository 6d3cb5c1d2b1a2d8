use crate::error::{LoaderError, LoaderResult};
use serde::{Deserialize, Serialize};

/// Printing rarity, in canonical severity order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Land,
    Common,
    Uncommon,
    Rare,
    MythicRare,
    Special,
}

const RARITY_TABLE: [(Rarity, char, &str); 6] = [
    (Rarity::Land, 'L', "basic land"),
    (Rarity::Common, 'C', "common"),
    (Rarity::Uncommon, 'U', "uncommon"),
    (Rarity::Rare, 'R', "rare"),
    (Rarity::MythicRare, 'M', "mythic rare"),
    (Rarity::Special, 'S', "special"),
];

impl Rarity {
    pub const ALL: [Rarity; 6] = [
        Rarity::Land,
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::MythicRare,
        Rarity::Special,
    ];

    /// Single-character symbol written to the card-in-set rarity column
    pub fn symbol(self) -> char {
        RARITY_TABLE[self as usize].1
    }

    /// Display name as it appears in the source document
    pub fn name(self) -> &'static str {
        RARITY_TABLE[self as usize].2
    }

    /// Look up a rarity by its symbol (case-sensitive)
    pub fn from_symbol(symbol: char) -> LoaderResult<Self> {
        RARITY_TABLE
            .iter()
            .find(|(_, s, _)| *s == symbol)
            .map(|(rarity, _, _)| *rarity)
            .ok_or_else(|| LoaderError::unrecognized("rarity symbol", symbol.to_string()))
    }

    /// Parse free-form rarity text (case-insensitive).
    ///
    /// Both "basic land" and "land" name the land rarity; older documents
    /// used either spelling.
    pub fn from_name(name: &str) -> LoaderResult<Self> {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case("land") {
            return Ok(Rarity::Land);
        }
        RARITY_TABLE
            .iter()
            .find(|(_, _, n)| n.eq_ignore_ascii_case(trimmed))
            .map(|(rarity, _, _)| *rarity)
            .ok_or_else(|| LoaderError::unrecognized("rarity", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        let symbols: String = Rarity::ALL.iter().map(|r| r.symbol()).collect();
        assert_eq!(symbols, "LCURMS");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Rarity::from_name("Mythic Rare").unwrap(), Rarity::MythicRare);
        assert_eq!(Rarity::from_name("COMMON").unwrap(), Rarity::Common);
        assert_eq!(Rarity::from_name("Basic Land").unwrap(), Rarity::Land);
        assert_eq!(Rarity::from_name("land").unwrap(), Rarity::Land);
    }

    #[test]
    fn test_unknown_rarity_is_fatal() {
        assert!(matches!(
            Rarity::from_name("bonus"),
            Err(LoaderError::UnrecognizedValue { kind: "rarity", .. })
        ));
    }

    #[test]
    fn test_from_symbol() {
        assert_eq!(Rarity::from_symbol('M').unwrap(), Rarity::MythicRare);
        assert!(Rarity::from_symbol('m').is_err());
        for rarity in Rarity::ALL {
            assert_eq!(Rarity::from_symbol(rarity.symbol()).unwrap(), rarity);
            assert_eq!(Rarity::from_name(rarity.name()).unwrap(), rarity);
        }
    }
}
