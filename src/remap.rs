//! Carry externally owned card references across a full re-import.
//!
//! A previous run's `(old id, name)` pairs are joined on exact name against
//! this run's oracle ids. The resulting table rewrites the card id column of
//! each dependent table; ids that do not remap are left as they were.

use crate::error::{LoaderError, LoaderResult};
use crate::oracle::OracleIndex;
use crate::tabular::{read_rows, TabularWriter};
use indexmap::IndexMap;
use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;

/// Identifier table from a previous run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoricalCards {
    entries: Vec<(u32, String)>,
}

impl HistoricalCards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, old_id: u32, name: impl Into<String>) {
        self.entries.push((old_id, name.into()));
    }

    /// Read `(old id, name)` from the first two columns of a load file.
    ///
    /// Accepts both a bare two-column table and the previous run's `cards`
    /// file, whose leading columns are the oracle id and the name.
    pub fn from_path(path: impl AsRef<Path>) -> LoaderResult<Self> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let mut historical = Self::new();
        for (index, row) in read_rows(path)?.into_iter().enumerate() {
            let mut fields = row.into_iter();
            let id = fields.next().flatten();
            let name = fields.next().flatten();
            let (Some(id), Some(name)) = (id, name) else {
                return Err(LoaderError::malformed_table(
                    &source_name,
                    index + 1,
                    "expected an id and a name",
                ));
            };
            let old_id = id.trim().parse::<u32>().map_err(|_| {
                LoaderError::malformed_table(&source_name, index + 1, format!("bad card id {:?}", id))
            })?;
            historical.push(old_id, name);
        }
        info!("Read {} historical card ids from {}", historical.len(), source_name);
        Ok(historical)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.entries.iter().map(|(id, name)| (*id, name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(u32, S)> for HistoricalCards {
    fn from_iter<I: IntoIterator<Item = (u32, S)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(id, name)| (id, name.into())).collect(),
        }
    }
}

/// Externally owned table holding a card id foreign key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependentTable {
    pub name: &'static str,
    pub columns: &'static [&'static str],
    pub card_id_column: &'static str,
}

impl DependentTable {
    /// Position of the card id column
    pub fn card_id_index(&self) -> Option<usize> {
        self.columns.iter().position(|c| *c == self.card_id_column)
    }

    pub fn file_name(&self) -> &'static str {
        self.name
    }
}

pub static USER_CARDS: DependentTable = DependentTable {
    name: "usercards",
    columns: &["id", "ownerid", "cardid", "setcode", "count"],
    card_id_column: "cardid",
};

pub static USER_CARD_CHANGES: DependentTable = DependentTable {
    name: "usercardchanges",
    columns: &["id", "userid", "cardid", "setcode", "datemodified", "difference"],
    card_id_column: "cardid",
};

pub static TAG_LINKS: DependentTable = DependentTable {
    name: "taglinks",
    columns: &["id", "tagid", "cardid"],
    card_id_column: "cardid",
};

pub static DECK_CARDS: DependentTable = DependentTable {
    name: "deckcards",
    columns: &["id", "deckid", "cardid", "count"],
    card_id_column: "cardid",
};

pub static DEPENDENT_TABLES: [&DependentTable; 4] =
    [&USER_CARDS, &USER_CARD_CHANGES, &TAG_LINKS, &DECK_CARDS];

/// Per-table result of applying the remap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemapOutcome {
    pub rewritten: usize,
    /// Rows whose id had no mapping and were left as they were
    pub unmapped: usize,
    pub null_ids: usize,
}

/// Old id to new oracle id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemapTable {
    mapping: FxHashMap<u32, u32>,
    orphaned: Vec<(u32, String)>,
}

impl RemapTable {
    /// Join historical names against this run's canonical names.
    ///
    /// An old id may repeat with the same name, but an old id naming two
    /// different cards is rejected.
    pub fn build(historical: &HistoricalCards, oracle: &OracleIndex) -> LoaderResult<Self> {
        let mut table = Self::default();
        let mut seen: FxHashMap<u32, &str> = FxHashMap::default();
        for (old_id, name) in historical.iter() {
            if let Some(first) = seen.insert(old_id, name) {
                if first != name {
                    return Err(LoaderError::ConflictingHistoricalId {
                        old_id,
                        first: first.to_string(),
                        second: name.to_string(),
                    });
                }
                continue;
            }
            match oracle.oracle_id(name) {
                Some(new_id) => {
                    table.mapping.insert(old_id, new_id);
                }
                None => {
                    debug!("Historical card {} {:?} has no current oracle id", old_id, name);
                    table.orphaned.push((old_id, name.to_string()));
                }
            }
        }
        if !table.orphaned.is_empty() {
            warn!(
                "{} historical card ids have no match in this run",
                table.orphaned.len()
            );
        }
        info!("Built remap table with {} entries", table.mapping.len());
        Ok(table)
    }

    pub fn get(&self, old_id: u32) -> Option<u32> {
        self.mapping.get(&old_id).copied()
    }

    /// Historical entries whose name is absent from this run
    pub fn orphaned(&self) -> &[(u32, String)] {
        &self.orphaned
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Rewrite the card id column of `rows` in place
    pub fn apply(
        &self,
        table: &DependentTable,
        rows: &mut [Vec<Option<String>>],
    ) -> LoaderResult<RemapOutcome> {
        let column = table.card_id_index().ok_or_else(|| {
            LoaderError::malformed_table(table.name, 0, format!("no column {}", table.card_id_column))
        })?;
        let mut outcome = RemapOutcome::default();
        for (index, row) in rows.iter_mut().enumerate() {
            if row.len() != table.columns.len() {
                return Err(LoaderError::malformed_table(
                    table.name,
                    index + 1,
                    format!("expected {} columns, found {}", table.columns.len(), row.len()),
                ));
            }
            let Some(raw) = row[column].as_deref() else {
                outcome.null_ids += 1;
                continue;
            };
            let old_id = raw.trim().parse::<u32>().map_err(|_| {
                LoaderError::malformed_table(table.name, index + 1, format!("bad card id {:?}", raw))
            })?;
            match self.get(old_id) {
                Some(new_id) => {
                    row[column] = Some(new_id.to_string());
                    outcome.rewritten += 1;
                }
                None => outcome.unmapped += 1,
            }
        }
        if outcome.unmapped > 0 {
            warn!(
                "{} rows of {} reference card ids that did not remap",
                outcome.unmapped, table.name
            );
        }
        Ok(outcome)
    }
}

/// Rewrite every dependent table dump present in `dir`, in place.
///
/// Each dump is a load file named after its table. Absent dumps are skipped.
/// The rewritten rows go to a sibling `.tmp` file that replaces the dump only
/// once fully written, so a failed write leaves the original intact.
pub fn migrate_directory(
    dir: impl AsRef<Path>,
    remap: &RemapTable,
) -> LoaderResult<IndexMap<&'static str, RemapOutcome>> {
    let dir = dir.as_ref();
    let mut outcomes = IndexMap::new();
    for table in DEPENDENT_TABLES {
        let path = dir.join(table.file_name());
        if !path.exists() {
            debug!("No dump for {} in {}", table.name, dir.display());
            continue;
        }
        let mut rows = read_rows(&path)?;
        let outcome = remap.apply(table, &mut rows)?;

        let staging = dir.join(format!("{}.tmp", table.file_name()));
        if let Err(err) = write_rows(&staging, &rows) {
            let _ = fs::remove_file(&staging);
            return Err(err);
        }
        fs::rename(&staging, &path).map_err(|e| LoaderError::io(&path, e))?;

        info!(
            "Remapped {}: {} rewritten, {} unmapped, {} null",
            table.name, outcome.rewritten, outcome.unmapped, outcome.null_ids
        );
        outcomes.insert(table.name, outcome);
    }
    Ok(outcomes)
}

fn write_rows(path: &Path, rows: &[Vec<Option<String>>]) -> LoaderResult<()> {
    let mut writer = TabularWriter::create(path)?;
    for row in rows {
        writer.write_fields(row)?;
    }
    writer.finish()?;
    Ok(())
}
