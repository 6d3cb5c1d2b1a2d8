use crate::catalog::Catalog;
use crate::rows::NamedRow;
use indexmap::IndexSet;
use log::info;

/// Distinct type and subtype words over the filtered catalog, in
/// first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardTypeListing {
    types: IndexSet<String>,
    subtypes: IndexSet<String>,
}

impl CardTypeListing {
    /// Collect supertypes and types from every set not named in
    /// `excluded_sets`, and subtypes from every set
    pub fn collect<S: AsRef<str>>(catalog: &Catalog, excluded_sets: &[S]) -> Self {
        let mut listing = Self::default();
        for set in catalog.sets() {
            let list_types = !excluded_sets.iter().any(|code| code.as_ref() == set.code);
            for card in &set.cards {
                if list_types {
                    let words = card.supertypes.iter().chain(card.types.iter()).flatten();
                    for word in words {
                        if !listing.types.contains(word) {
                            listing.types.insert(word.clone());
                        }
                    }
                }
                for word in card.subtypes.iter().flatten() {
                    if !listing.subtypes.contains(word) {
                        listing.subtypes.insert(word.clone());
                    }
                }
            }
        }
        info!(
            "Found {} distinct types and {} distinct subtypes",
            listing.types.len(),
            listing.subtypes.len()
        );
        listing
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    pub fn subtypes(&self) -> impl Iterator<Item = &str> {
        self.subtypes.iter().map(String::as_str)
    }

    pub fn type_rows(&self) -> Vec<NamedRow> {
        numbered(&self.types)
    }

    pub fn subtype_rows(&self) -> Vec<NamedRow> {
        numbered(&self.subtypes)
    }
}

fn numbered(words: &IndexSet<String>) -> Vec<NamedRow> {
    words
        .iter()
        .enumerate()
        .map(|(index, name)| NamedRow {
            id: index as u32 + 1,
            name: name.clone(),
        })
        .collect()
}
