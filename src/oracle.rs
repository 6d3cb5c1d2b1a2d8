use crate::card::CardRecord;
use crate::catalog::Catalog;
use crate::error::{LoaderError, LoaderResult};
use indexmap::IndexMap;
use log::info;

/// Location of the first-seen printing of a card name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCard {
    pub oracle_id: u32,
    pub set_code: String,
    pub position: usize,
}

/// Canonical card per distinct name, in oracle id order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OracleIndex {
    canonical: IndexMap<String, CanonicalCard>,
}

impl OracleIndex {
    /// Walk the (already skip-filtered) catalog in order, giving the first
    /// printing of each name the next oracle id and back-filling that id onto
    /// every later printing of the same name.
    ///
    /// Names match exactly and case-sensitively. An empty name is fatal.
    pub fn resolve(catalog: &mut Catalog) -> LoaderResult<Self> {
        let mut canonical: IndexMap<String, CanonicalCard> = IndexMap::new();
        let mut next_id: u32 = 0;

        for set in catalog.sets_mut() {
            let set_code = set.code.clone();
            for (position, card) in set.cards.iter_mut().enumerate() {
                if card.name.trim().is_empty() {
                    return Err(LoaderError::MissingField {
                        field: "name",
                        context: format!("card #{} in set {}", position, set_code),
                    });
                }
                let oracle_id = match canonical.get(&card.name) {
                    Some(existing) => existing.oracle_id,
                    None => {
                        next_id += 1;
                        canonical.insert(
                            card.name.clone(),
                            CanonicalCard {
                                oracle_id: next_id,
                                set_code: set_code.clone(),
                                position,
                            },
                        );
                        next_id
                    }
                };
                card.set_oracle_id(oracle_id);
            }
        }

        info!("Assigned {} oracle ids", canonical.len());
        Ok(Self { canonical })
    }

    pub fn oracle_id(&self, name: &str) -> Option<u32> {
        self.canonical.get(name).map(|c| c.oracle_id)
    }

    pub fn get(&self, name: &str) -> Option<&CanonicalCard> {
        self.canonical.get(name)
    }

    /// The first-seen printing of `name`
    pub fn canonical_card<'a>(&self, catalog: &'a Catalog, name: &str) -> Option<&'a CardRecord> {
        let entry = self.canonical.get(name)?;
        catalog.card_at(&entry.set_code, entry.position)
    }

    /// Canonical printings in oracle id order
    pub fn canonical_cards<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = &'a CardRecord> + 'a {
        self.canonical
            .values()
            .filter_map(move |entry| catalog.card_at(&entry.set_code, entry.position))
    }

    /// `(name, oracle id)` pairs in oracle id order
    pub fn ids_by_name(&self) -> impl Iterator<Item = (&str, u32)> {
        self.canonical
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.oracle_id))
    }

    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}
