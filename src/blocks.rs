use crate::catalog::Catalog;
use crate::error::{LoaderError, LoaderResult};
use crate::set::SetRecord;
use indexmap::IndexMap;
use log::{info, warn};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;

/// User-maintained block memberships for sets the source document leaves
/// without a block. Each line is `block name<TAB>CODE CODE ...`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdditionalBlocks {
    blocks: IndexMap<String, Vec<String>>,
    // set code -> block name; a set may belong to one supplemental block only
    membership: FxHashMap<String, String>,
}

impl AdditionalBlocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(text: &str) -> LoaderResult<Self> {
        Self::parse_named(text, "additional blocks table")
    }

    fn parse_named(text: &str, source_name: &str) -> LoaderResult<Self> {
        let mut blocks = Self::new();
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (name, codes) = line.split_once('\t').ok_or_else(|| {
                LoaderError::malformed_table(source_name, index + 1, "expected a tab after the block name")
            })?;
            let name = name.trim();
            if name.is_empty() {
                return Err(LoaderError::malformed_table(
                    source_name,
                    index + 1,
                    "empty block name",
                ));
            }
            blocks.add_block(name, codes.split_whitespace())?;
        }
        Ok(blocks)
    }

    /// Load the table from a file. A missing file is an empty table.
    pub fn from_path(path: impl AsRef<Path>) -> LoaderResult<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => Self::parse_named(&text, &path.display().to_string()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Additional blocks file {} not found", path.display());
                Ok(Self::new())
            }
            Err(e) => Err(LoaderError::io(path, e)),
        }
    }

    /// Declare a block and its member sets. Re-declaring a block, or claiming
    /// a set that another block already claims, is rejected.
    pub fn add_block<I, S>(&mut self, name: &str, codes: I) -> LoaderResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.blocks.contains_key(name) {
            return Err(LoaderError::DuplicateBlock(name.to_string()));
        }
        let mut members = Vec::new();
        for code in codes {
            let code: String = code.into();
            if let Some(first) = self.membership.get(&code) {
                return Err(LoaderError::OverlappingBlockMembership {
                    set_code: code,
                    first: first.clone(),
                    second: name.to_string(),
                });
            }
            if members.contains(&code) {
                continue;
            }
            members.push(code);
        }
        for code in &members {
            self.membership.insert(code.clone(), name.to_string());
        }
        self.blocks.insert(name.to_string(), members);
        Ok(())
    }

    /// Supplemental block containing `set_code`, if any
    pub fn block_for_set(&self, set_code: &str) -> Option<&str> {
        self.membership.get(set_code).map(String::as_str)
    }

    /// Block names in declared order
    pub fn block_names(&self) -> impl Iterator<Item = &str> {
        self.blocks.keys().map(String::as_str)
    }

    pub fn members(&self, block: &str) -> Option<&[String]> {
        self.blocks.get(block).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Densely packed block ids, starting at 1
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockAssignment {
    ids: IndexMap<String, u32>,
}

impl BlockAssignment {
    /// Number blocks declared by catalog sets first (catalog order), then
    /// blocks only named in the supplemental table (declared order)
    pub fn assign(catalog: &Catalog, additional: &AdditionalBlocks) -> Self {
        let mut assignment = Self::default();
        for set in catalog.sets() {
            if let Some(block) = set.block_name() {
                assignment.assign_next(block);
            }
        }
        for block in additional.block_names() {
            assignment.assign_next(block);
        }
        info!("Assigned {} block ids", assignment.len());
        assignment
    }

    fn assign_next(&mut self, block: &str) {
        if !self.ids.contains_key(block) {
            let id = self.ids.len() as u32 + 1;
            self.ids.insert(block.to_string(), id);
        }
    }

    pub fn id(&self, block: &str) -> Option<u32> {
        self.ids.get(block).copied()
    }

    /// Block id for a set: its declared block wins, otherwise the
    /// supplemental block listing its code, otherwise none
    pub fn block_id_for_set(&self, set: &SetRecord, additional: &AdditionalBlocks) -> Option<u32> {
        match set.block_name() {
            Some(block) => self.id(block),
            None => additional
                .block_for_set(&set.code)
                .and_then(|block| self.id(block)),
        }
    }

    /// `(id, name)` pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.ids.iter().map(|(name, id)| (*id, name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
