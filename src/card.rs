use crate::base::{lenient_string, lenient_string_list};
use crate::colour::{colour_flags, Colour, ColourList};
use crate::error::{LoaderError, LoaderResult};
use crate::rarity::Rarity;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static LEADING_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?[0-9]+").expect("leading integer pattern is valid"));

/// How two faces of one physical card relate to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkType {
    Split,
    Flip,
    DoubleFaced,
}

impl LinkType {
    /// Map a layout keyword to its link type, if it has one
    pub fn from_layout(layout: &str) -> Option<Self> {
        match layout {
            "split" => Some(LinkType::Split),
            "flip" => Some(LinkType::Flip),
            "double-faced" => Some(LinkType::DoubleFaced),
            _ => None,
        }
    }

    /// Tag written to the link-type column
    pub fn tag(self) -> char {
        match self {
            LinkType::Split => 's',
            LinkType::Flip => 'f',
            LinkType::DoubleFaced => 't',
        }
    }
}

/// Best-effort integer extraction from a power/toughness string.
///
/// Takes the first optionally-signed run of digits anywhere in the text, so
/// `"1+*"` gives 1 and `"*1*"` gives 1. Absent input, input without digits
/// and runs too large for an `i32` all give 0. This is lossy by nature.
pub fn numeric_value(raw: Option<&str>) -> i32 {
    raw.and_then(|text| LEADING_INTEGER.find(text))
        .and_then(|m| m.as_str().parse::<i32>().ok())
        .unwrap_or(0)
}

/// One printing of a card in one set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub name: String,

    #[serde(default)]
    pub layout: Option<String>,

    /// Every face name sharing this physical card, this one included
    #[serde(default)]
    pub names: Option<Vec<String>>,

    #[serde(default)]
    pub mana_cost: Option<String>,

    #[serde(default, rename = "cmc")]
    pub converted_mana_cost: f64,

    #[serde(default)]
    pub colors: Option<Vec<String>>,

    #[serde(default)]
    pub color_identity: Option<Vec<String>>,

    #[serde(default, rename = "type")]
    pub type_line: Option<String>,

    #[serde(default)]
    pub supertypes: Option<Vec<String>>,

    #[serde(default)]
    pub types: Option<Vec<String>>,

    #[serde(default)]
    pub subtypes: Option<Vec<String>>,

    pub rarity: String,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default, rename = "flavor")]
    pub flavor_text: Option<String>,

    #[serde(default)]
    pub artist: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub number: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub power: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub toughness: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub loyalty: Option<String>,

    #[serde(default, rename = "multiverseid", deserialize_with = "lenient_string")]
    pub multiverse_id: Option<String>,

    /// Multiverse ids of alternate-art printings in the same set
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub variations: Option<Vec<String>>,

    // Filled in by the pipeline, never read from the document
    #[serde(skip)]
    set_code: String,

    #[serde(skip)]
    oracle_id: Option<u32>,
}

impl CardRecord {
    pub fn new(name: impl Into<String>, rarity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rarity: rarity.into(),
            ..Self::default()
        }
    }

    /// Code of the set this printing belongs to
    pub fn set_code(&self) -> &str {
        &self.set_code
    }

    pub(crate) fn set_set_code(&mut self, code: &str) {
        self.set_code = code.to_string();
    }

    /// Oracle id, available once the oracle pass has run
    pub fn oracle_id(&self) -> Option<u32> {
        self.oracle_id
    }

    pub(crate) fn set_oracle_id(&mut self, oracle_id: u32) {
        self.oracle_id = Some(oracle_id);
    }

    /// Oracle id, failing if the oracle pass has not reached this card
    pub fn require_oracle_id(&self) -> LoaderResult<u32> {
        self.oracle_id.ok_or_else(|| LoaderError::MissingField {
            field: "oracle id",
            context: format!("card {:?} in set {}", self.name, self.set_code),
        })
    }

    pub fn colours(&self) -> LoaderResult<ColourList> {
        Colour::parse_list(self.colors.as_deref().unwrap_or_default())
    }

    pub fn colour_flags(&self) -> LoaderResult<u32> {
        colour_flags(self.colors.as_deref())
    }

    pub fn colour_identity_flags(&self) -> LoaderResult<u32> {
        colour_flags(self.color_identity.as_deref())
    }

    /// Number of entries in the raw colour list
    pub fn colour_count(&self) -> usize {
        self.colors.as_ref().map_or(0, Vec::len)
    }

    pub fn numeric_power(&self) -> i32 {
        numeric_value(self.power.as_deref())
    }

    pub fn numeric_toughness(&self) -> i32 {
        numeric_value(self.toughness.as_deref())
    }

    /// Link type of a multi-faced card; `None` for single-faced cards and
    /// for layouts that carry companion names but no link tag
    pub fn link_type(&self) -> Option<LinkType> {
        self.names.as_ref()?;
        self.layout.as_deref().and_then(LinkType::from_layout)
    }

    /// Whether the card declares companion face names at all
    pub fn has_companions(&self) -> bool {
        self.names.is_some()
    }

    /// Names of the other faces sharing this physical card
    pub fn companion_names(&self) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .flatten()
            .map(String::as_str)
            .filter(move |n| *n != self.name)
    }

    pub fn rarity(&self) -> LoaderResult<Rarity> {
        Rarity::from_name(&self.rarity)
    }

    /// Supertypes followed by types, space-joined
    pub fn full_type(&self) -> Option<String> {
        let parts: Vec<&str> = [self.supertypes.as_ref(), self.types.as_ref()]
            .into_iter()
            .flatten()
            .flatten()
            .map(String::as_str)
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Subtypes, space-joined
    pub fn subtype_line(&self) -> Option<String> {
        self.subtypes
            .as_ref()
            .filter(|subtypes| !subtypes.is_empty())
            .map(|subtypes| subtypes.join(" "))
    }
}
