use crate::blocks::{AdditionalBlocks, BlockAssignment};
use crate::card::CardRecord;
use crate::error::LoaderResult;
use crate::set::SetRecord;
use crate::tabular::{fold_newlines, TabularRow};

/// Oracle-level row: one per distinct card name
#[derive(Debug, Clone, PartialEq)]
pub struct CardRow {
    pub oracle_id: u32,
    pub name: String,
    pub mana_cost: Option<String>,
    pub converted_mana_cost: f64,
    pub colour_flags: u32,
    pub colour_identity_flags: u32,
    pub colour_count: usize,
    pub type_line: Option<String>,
    pub subtype_line: Option<String>,
    pub power: Option<String>,
    pub numeric_power: i32,
    pub toughness: Option<String>,
    pub numeric_toughness: i32,
    pub loyalty: Option<String>,
    pub rules_text: Option<String>,
}

impl CardRow {
    /// Fails on an unknown colour token or a card without an oracle id
    pub fn from_card(card: &CardRecord) -> LoaderResult<Self> {
        Ok(Self {
            oracle_id: card.require_oracle_id()?,
            name: card.name.clone(),
            mana_cost: card.mana_cost.clone(),
            converted_mana_cost: card.converted_mana_cost,
            colour_flags: card.colour_flags()?,
            colour_identity_flags: card.colour_identity_flags()?,
            colour_count: card.colour_count(),
            type_line: card.full_type(),
            subtype_line: card.subtype_line(),
            power: card.power.clone(),
            numeric_power: card.numeric_power(),
            toughness: card.toughness.clone(),
            numeric_toughness: card.numeric_toughness(),
            loyalty: card.loyalty.clone(),
            rules_text: card.text.as_deref().map(fold_newlines),
        })
    }
}

impl TabularRow for CardRow {
    fn columns(&self) -> Vec<Option<String>> {
        vec![
            Some(self.oracle_id.to_string()),
            Some(self.name.clone()),
            self.mana_cost.clone(),
            Some(self.converted_mana_cost.to_string()),
            Some(self.colour_flags.to_string()),
            Some(self.colour_identity_flags.to_string()),
            Some(self.colour_count.to_string()),
            self.type_line.clone(),
            self.subtype_line.clone(),
            self.power.clone(),
            Some(self.numeric_power.to_string()),
            self.toughness.clone(),
            Some(self.numeric_toughness.to_string()),
            self.loyalty.clone(),
            self.rules_text.clone(),
        ]
    }
}

/// Printing-level row: one per card per set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSetRow {
    /// Whether to lead with a NULL placeholder for an auto-increment id
    pub include_id: bool,
    pub oracle_id: u32,
    pub set_code: String,
    pub multiverse_id: Option<String>,
    pub artist: Option<String>,
    pub flavor_text: Option<String>,
    pub rarity: char,
    pub collector_number: Option<String>,
}

impl CardSetRow {
    /// Fails on an unknown rarity or a card without an oracle id
    pub fn from_card(card: &CardRecord, include_id: bool) -> LoaderResult<Self> {
        Ok(Self {
            include_id,
            oracle_id: card.require_oracle_id()?,
            set_code: card.set_code().to_string(),
            multiverse_id: card.multiverse_id.clone(),
            artist: card.artist.clone(),
            flavor_text: card.flavor_text.as_deref().map(fold_newlines),
            rarity: card.rarity()?.symbol(),
            collector_number: card.number.clone(),
        })
    }
}

impl TabularRow for CardSetRow {
    fn columns(&self) -> Vec<Option<String>> {
        let mut columns = Vec::with_capacity(8);
        if self.include_id {
            columns.push(None);
        }
        columns.extend([
            Some(self.oracle_id.to_string()),
            Some(self.set_code.clone()),
            self.multiverse_id.clone(),
            self.artist.clone(),
            self.flavor_text.clone(),
            Some(self.rarity.to_string()),
            self.collector_number.clone(),
        ]);
        columns
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRow {
    pub id: u32,
    pub name: String,
}

impl TabularRow for BlockRow {
    fn columns(&self) -> Vec<Option<String>> {
        vec![Some(self.id.to_string()), Some(self.name.clone())]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetRow {
    pub code: String,
    pub name: String,
    pub block_id: Option<u32>,
    pub release_date: Option<String>,
}

impl SetRow {
    pub fn from_set(set: &SetRecord, blocks: &BlockAssignment, additional: &AdditionalBlocks) -> Self {
        Self {
            code: set.code.clone(),
            name: set.name.clone(),
            block_id: blocks.block_id_for_set(set, additional),
            release_date: set.release_date.clone(),
        }
    }
}

impl TabularRow for SetRow {
    fn columns(&self) -> Vec<Option<String>> {
        vec![
            None,
            Some(self.code.clone()),
            Some(self.name.clone()),
            self.block_id.map(|id| id.to_string()),
            self.release_date.clone(),
        ]
    }
}

/// Generic `(id, name)` row used by the type and subtype listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRow {
    pub id: u32,
    pub name: String,
}

impl TabularRow for NamedRow {
    fn columns(&self) -> Vec<Option<String>> {
        vec![Some(self.id.to_string()), Some(self.name.clone())]
    }
}
