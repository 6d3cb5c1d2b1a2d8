use crate::catalog::Catalog;
use crate::error::{LoaderError, LoaderResult};
use indexmap::IndexSet;
use log::info;
use rustc_hash::FxHashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Lower-cased words a spell checker already knows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownWords {
    words: FxHashSet<String>,
}

impl KnownWords {
    pub fn parse(text: &str) -> Self {
        text.lines().collect()
    }

    pub fn from_path(path: impl AsRef<Path>) -> LoaderResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| LoaderError::io(path, e))?;
        let known = Self::parse(&text);
        info!("Read {} known words from {}", known.len(), path.display());
        Ok(known)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for KnownWords {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_lowercase)
                .collect(),
        }
    }
}

/// Words from card names a spell checker would not recognise, in
/// first-seen order. Commas and colons are stripped from each word.
pub fn card_name_words(catalog: &Catalog, known: &KnownWords) -> Vec<String> {
    let mut words: IndexSet<String> = IndexSet::new();
    for card in catalog.cards() {
        for chunk in card.name.split(' ') {
            let word: String = chunk.chars().filter(|c| *c != ',' && *c != ':').collect();
            if word.is_empty() || known.contains(&word) {
                continue;
            }
            words.insert(word);
        }
    }
    info!("Collected {} dictionary words from card names", words.len());
    words.into_iter().collect()
}

/// Write one word per line, CRLF-terminated
pub fn write_dictionary(path: impl AsRef<Path>, words: &[String]) -> LoaderResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| LoaderError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for word in words {
        write!(writer, "{}\r\n", word).map_err(|e| LoaderError::io(path, e))?;
    }
    writer.flush().map_err(|e| LoaderError::io(path, e))
}
