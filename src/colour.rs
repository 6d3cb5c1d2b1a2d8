use crate::error::{LoaderError, LoaderResult};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One of the five mana colours, in canonical bit order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Colour {
    White,
    Blue,
    Black,
    Red,
    Green,
}

/// Static metadata attached to each colour
#[derive(Debug, Clone, Copy)]
struct ColourInfo {
    colour: Colour,
    symbol: &'static str,
    name: &'static str,
    flag: u32,
}

const COLOUR_TABLE: [ColourInfo; 5] = [
    ColourInfo { colour: Colour::White, symbol: "W", name: "White", flag: 1 << 0 },
    ColourInfo { colour: Colour::Blue, symbol: "U", name: "Blue", flag: 1 << 1 },
    ColourInfo { colour: Colour::Black, symbol: "B", name: "Black", flag: 1 << 2 },
    ColourInfo { colour: Colour::Red, symbol: "R", name: "Red", flag: 1 << 3 },
    ColourInfo { colour: Colour::Green, symbol: "G", name: "Green", flag: 1 << 4 },
];

/// Colours parsed from a single card field (never more than five distinct)
pub type ColourList = SmallVec<[Colour; 5]>;

impl Colour {
    pub const ALL: [Colour; 5] = [
        Colour::White,
        Colour::Blue,
        Colour::Black,
        Colour::Red,
        Colour::Green,
    ];

    fn info(self) -> &'static ColourInfo {
        &COLOUR_TABLE[self as usize]
    }

    /// Single-letter symbol, e.g. `U` for blue
    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }

    /// Display name, e.g. `Blue`
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Bit value used in colour flag columns
    pub fn flag(self) -> u32 {
        self.info().flag
    }

    /// Look up a colour by symbol (case-sensitive)
    pub fn from_symbol(symbol: &str) -> LoaderResult<Self> {
        COLOUR_TABLE
            .iter()
            .find(|info| info.symbol == symbol)
            .map(|info| info.colour)
            .ok_or_else(|| LoaderError::unrecognized("colour symbol", symbol))
    }

    /// Look up a colour by display name (case-insensitive)
    pub fn from_name(name: &str) -> LoaderResult<Self> {
        COLOUR_TABLE
            .iter()
            .find(|info| info.name.eq_ignore_ascii_case(name))
            .map(|info| info.colour)
            .ok_or_else(|| LoaderError::unrecognized("colour name", name))
    }

    /// Parse a colour token as found in the source document.
    ///
    /// Older documents list colours by name and colour identities by symbol,
    /// so both spellings are accepted here.
    pub fn parse(token: &str) -> LoaderResult<Self> {
        Self::from_symbol(token)
            .or_else(|_| Self::from_name(token))
            .map_err(|_| LoaderError::unrecognized("colour", token))
    }

    /// Parse every token of a colour list, failing on the first unknown one
    pub fn parse_list<S: AsRef<str>>(tokens: &[S]) -> LoaderResult<ColourList> {
        tokens.iter().map(|t| Self::parse(t.as_ref())).collect()
    }
}

/// Fold a colour list into a bitmask. Empty or absent lists yield 0.
pub fn colour_flags<S: AsRef<str>>(tokens: Option<&[S]>) -> LoaderResult<u32> {
    let Some(tokens) = tokens else {
        return Ok(0);
    };
    Ok(Colour::parse_list(tokens)?
        .iter()
        .fold(0, |flags, colour| flags | colour.flag()))
}
