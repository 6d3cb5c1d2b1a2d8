//! Normalizes nested MTG set/card JSON into relational load files.
//!
//! Every distinct card name gets a stable oracle id shared by all of its
//! printings. Blocks get dense ids, multi-faced cards get link rows, and a
//! remap table carries ids from a previous load into externally owned tables.

pub mod base;
pub mod blocks;
pub mod card;
pub mod card_types;
pub mod catalog;
pub mod colour;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod links;
pub mod oracle;
pub mod output_generator;
pub mod pipeline;
pub mod rarity;
pub mod remap;
pub mod rows;
pub mod set;
pub mod tabular;

#[cfg(feature = "python")]
mod python;

pub use blocks::{AdditionalBlocks, BlockAssignment};
pub use card::{numeric_value, CardRecord, LinkType};
pub use card_types::CardTypeListing;
pub use catalog::{Catalog, SkipList};
pub use colour::{colour_flags, Colour};
pub use config::LoaderConfig;
pub use dictionary::KnownWords;
pub use error::{LoaderError, LoaderResult};
pub use links::{build_link_rows, LinkPolicy, LinkRow};
pub use oracle::OracleIndex;
pub use output_generator::{OutputGenerator, OutputSummary};
pub use pipeline::PipelineContext;
pub use rarity::Rarity;
pub use remap::{migrate_directory, HistoricalCards, RemapOutcome, RemapTable};
pub use set::{ReleaseDate, SetRecord};
pub use tabular::{TabularRow, TabularWriter};
