use crate::card::CardRecord;
use crate::error::{LoaderError, LoaderResult};
use crate::set::SetRecord;
use indexmap::{IndexMap, IndexSet};
use log::{debug, info, warn};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Set codes excluded from every derived computation and output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipList {
    codes: IndexSet<String>,
}

impl SkipList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one set code per line; `#` starts a trailing comment and
    /// blank or comment-only lines are ignored
    pub fn parse(text: &str) -> Self {
        let codes = text
            .lines()
            .map(|line| line.split('#').next().unwrap_or_default().trim())
            .filter(|code| !code.is_empty())
            .map(str::to_string)
            .collect();
        Self { codes }
    }

    /// Load a skip-list file. A missing file is an empty list.
    pub fn from_path(path: impl AsRef<Path>) -> LoaderResult<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => Ok(Self::parse(&text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Skip list {} not found, no sets will be skipped", path.display());
                Ok(Self::new())
            }
            Err(e) => Err(LoaderError::io(path, e)),
        }
    }

    pub fn insert(&mut self, code: impl Into<String>) {
        self.codes.insert(code.into());
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SkipList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Every set in the source document, keyed by set code in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    sets: IndexMap<String, SetRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from already-parsed sets, failing on a repeated code
    pub fn from_sets(sets: impl IntoIterator<Item = SetRecord>) -> LoaderResult<Self> {
        let mut catalog = Self::new();
        for set in sets {
            catalog.insert(set)?;
        }
        Ok(catalog)
    }

    /// Parse the nested document: an object keyed by set code whose values
    /// carry set metadata and a `cards` array
    pub fn from_json_str(json: &str) -> LoaderResult<Self> {
        let document: IndexMap<String, SetRecord> = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    pub fn from_reader(reader: impl Read) -> LoaderResult<Self> {
        let document: IndexMap<String, SetRecord> = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    pub fn from_path(path: impl AsRef<Path>) -> LoaderResult<Self> {
        let path = path.as_ref();
        info!("Reading set data from {}", path.display());
        let json = fs::read_to_string(path).map_err(|e| LoaderError::io(path, e))?;
        let catalog = Self::from_json_str(&json)?;
        info!(
            "Deserialised {} sets containing {} printings",
            catalog.len(),
            catalog.card_count()
        );
        Ok(catalog)
    }

    fn from_document(document: IndexMap<String, SetRecord>) -> LoaderResult<Self> {
        let mut catalog = Self::new();
        for (key, mut set) in document {
            if set.code.trim().is_empty() {
                return Err(LoaderError::MissingField {
                    field: "code",
                    context: format!("set entry {:?}", key),
                });
            }
            if set.code != key {
                debug!("Set entry {} declares code {}", key, set.code);
            }
            if let Some(raw) = set.release_date.as_deref() {
                if set.parsed_release_date().is_none() {
                    warn!("Set {} has an unrecognised release date {:?}", set.code, raw);
                }
            }
            set.attach_cards();
            catalog.insert(set)?;
        }
        Ok(catalog)
    }

    /// Add a set, keyed by its code
    pub fn insert(&mut self, mut set: SetRecord) -> LoaderResult<()> {
        if self.sets.contains_key(&set.code) {
            return Err(LoaderError::DuplicateSetCode(set.code));
        }
        set.attach_cards();
        self.sets.insert(set.code.clone(), set);
        Ok(())
    }

    /// Drop every set named in the skip list, returning how many were removed
    pub fn apply_skip_list(&mut self, skip_list: &SkipList) -> usize {
        let before = self.sets.len();
        self.sets.retain(|code, _| {
            let skipped = skip_list.contains(code);
            if skipped {
                debug!("Skipping set {}", code);
            }
            !skipped
        });
        let removed = before - self.sets.len();
        info!("Skipped {} sets, {} remain", removed, self.sets.len());
        removed
    }

    pub fn get(&self, code: &str) -> Option<&SetRecord> {
        self.sets.get(code)
    }

    /// Sets in catalog order
    pub fn sets(&self) -> impl Iterator<Item = &SetRecord> {
        self.sets.values()
    }

    pub(crate) fn sets_mut(&mut self) -> impl Iterator<Item = &mut SetRecord> {
        self.sets.values_mut()
    }

    /// Every printing, in catalog order then listed order within each set
    pub fn cards(&self) -> impl Iterator<Item = &CardRecord> {
        self.sets.values().flat_map(|set| set.cards.iter())
    }

    /// The printing at `position` within the set `code`
    pub fn card_at(&self, code: &str, position: usize) -> Option<&CardRecord> {
        self.sets.get(code).and_then(|set| set.cards.get(position))
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn card_count(&self) -> usize {
        self.sets.values().map(|set| set.cards.len()).sum()
    }
}
