// Load file output - one tab-delimited file per relational table
use indexmap::IndexMap;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::dictionary::{write_dictionary, KnownWords};
use crate::error::{LoaderError, LoaderResult};
use crate::pipeline::PipelineContext;
use crate::tabular::{TabularRow, TabularWriter};

/// Destination table of one load file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTable {
    pub name: &'static str,
    pub file_name: &'static str,
    pub columns: &'static [&'static str],
}

impl LoadTable {
    /// Column list for a bulk-load statement, e.g. `(id,name)`
    pub fn column_list(&self) -> String {
        format!("({})", self.columns.join(","))
    }
}

pub static CARDS: LoadTable = LoadTable {
    name: "cards",
    file_name: "cards",
    columns: &[
        "id",
        "name",
        "cost",
        "cmc",
        "colour",
        "colouridentity",
        "numcolours",
        "type",
        "subtype",
        "power",
        "numpower",
        "toughness",
        "numtoughness",
        "loyalty",
        "rules",
    ],
};

pub static CARD_SETS: LoadTable = LoadTable {
    name: "cardsets",
    file_name: "cardsets",
    columns: &[
        "id",
        "cardid",
        "setcode",
        "multiverseid",
        "artist",
        "flavourtext",
        "rarity",
        "collectornum",
    ],
};

pub static BLOCKS: LoadTable = LoadTable {
    name: "blocks",
    file_name: "blocks",
    columns: &["id", "name"],
};

pub static SETS: LoadTable = LoadTable {
    name: "sets",
    file_name: "sets",
    columns: &["id", "code", "name", "blockid", "release_date"],
};

pub static TYPES: LoadTable = LoadTable {
    name: "types",
    file_name: "types",
    columns: &["id", "name"],
};

pub static SUBTYPES: LoadTable = LoadTable {
    name: "subtypes",
    file_name: "subtypes",
    columns: &["id", "name"],
};

pub static CARD_LINKS: LoadTable = LoadTable {
    name: "cardlinks",
    file_name: "cardlinks",
    columns: &["cardid_from", "cardid_to", "link_type"],
};

pub static LOAD_TABLES: [&LoadTable; 7] =
    [&CARDS, &CARD_SETS, &BLOCKS, &SETS, &TYPES, &SUBTYPES, &CARD_LINKS];

/// Rows written per table, in write order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSummary {
    pub rows: IndexMap<&'static str, usize>,
    pub dictionary_words: Option<usize>,
}

impl OutputSummary {
    pub fn rows_for(&self, table: &str) -> Option<usize> {
        self.rows.get(table).copied()
    }

    pub fn total_rows(&self) -> usize {
        self.rows.values().sum()
    }
}

#[derive(Debug, Clone)]
pub struct OutputGenerator {
    pub output_dir: PathBuf,
}

impl OutputGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn path_for(&self, table: &LoadTable) -> PathBuf {
        self.output_dir.join(table.file_name)
    }

    /// Write every load file for a prepared context.
    ///
    /// All rows are built before the first file is opened, so an
    /// unrecognised colour or rarity leaves no output behind.
    pub fn write_all(&self, ctx: &PipelineContext) -> LoaderResult<OutputSummary> {
        let cards = ctx.card_rows()?;
        let card_sets = ctx.card_set_rows()?;
        let blocks = ctx.block_rows();
        let sets = ctx.set_rows();
        let card_types = ctx.card_types();
        let types = card_types.type_rows();
        let subtypes = card_types.subtype_rows();
        let links = ctx.link_rows();

        fs::create_dir_all(&self.output_dir)
            .map_err(|e| LoaderError::io(&self.output_dir, e))?;

        let mut summary = OutputSummary::default();
        self.write_table(&CARDS, &cards, &mut summary)?;
        self.write_table(&CARD_SETS, &card_sets, &mut summary)?;
        self.write_table(&BLOCKS, &blocks, &mut summary)?;
        self.write_table(&SETS, &sets, &mut summary)?;
        self.write_table(&TYPES, &types, &mut summary)?;
        self.write_table(&SUBTYPES, &subtypes, &mut summary)?;
        self.write_table(&CARD_LINKS, &links, &mut summary)?;

        let config = ctx.config();
        if let Some(output) = config.dictionary_output_path.as_deref() {
            let known = match config.known_words_path.as_deref() {
                Some(path) => KnownWords::from_path(path)?,
                None => KnownWords::default(),
            };
            summary.dictionary_words = Some(self.write_dictionary(ctx, &known, output)?);
        }

        info!(
            "Wrote {} rows across {} load files to {}",
            summary.total_rows(),
            summary.rows.len(),
            self.output_dir.display()
        );
        Ok(summary)
    }

    fn write_table<R: TabularRow>(
        &self,
        table: &'static LoadTable,
        rows: &[R],
        summary: &mut OutputSummary,
    ) -> LoaderResult<()> {
        let path = self.path_for(table);
        let mut writer = TabularWriter::create(&path)?;
        let written = writer.write_all_rows(rows)?;
        writer.finish()?;
        info!("Wrote {} rows to {}", written, path.display());
        summary.rows.insert(table.name, written);
        Ok(())
    }

    /// Write the spell-check word list, returning how many words it holds
    pub fn write_dictionary(
        &self,
        ctx: &PipelineContext,
        known: &KnownWords,
        path: &Path,
    ) -> LoaderResult<usize> {
        let words = ctx.dictionary_words(known);
        write_dictionary(path, &words)?;
        info!("Wrote {} dictionary words to {}", words.len(), path.display());
        Ok(words.len())
    }
}
