use crate::card::LinkType;
use crate::catalog::Catalog;
use crate::oracle::OracleIndex;
use crate::tabular::TabularRow;
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// What to do with a multi-faced card whose layout has no link tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkPolicy {
    /// Emit no row for the card
    #[default]
    SkipUntagged,
    /// Emit the row with a NULL link type
    EmitUntagged,
}

/// Directed link between two faces of one physical card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkRow {
    pub from: u32,
    pub to: u32,
    pub link_type: Option<LinkType>,
}

impl TabularRow for LinkRow {
    fn columns(&self) -> Vec<Option<String>> {
        vec![
            Some(self.from.to_string()),
            Some(self.to.to_string()),
            self.link_type.map(|t| t.tag().to_string()),
        ]
    }
}

/// Build link rows from every canonical card that lists companion faces.
///
/// Rows are directed and not deduplicated: when both faces list each other
/// there is one row per direction, each tagged with its source's layout.
/// A companion name with no canonical card is skipped with a warning.
pub fn build_link_rows(catalog: &Catalog, oracle: &OracleIndex, policy: LinkPolicy) -> Vec<LinkRow> {
    let mut rows = Vec::new();
    for card in oracle.canonical_cards(catalog) {
        if !card.has_companions() {
            continue;
        }
        let link_type = card.link_type();
        if link_type.is_none() && policy == LinkPolicy::SkipUntagged {
            warn!(
                "Card {:?} has companion faces but layout {:?} has no link type, no link written",
                card.name, card.layout
            );
            continue;
        }
        let Some(from) = card.oracle_id() else {
            continue;
        };
        for companion in card.companion_names() {
            match oracle.oracle_id(companion) {
                Some(to) => rows.push(LinkRow { from, to, link_type }),
                None => warn!(
                    "Companion {:?} of card {:?} is not in the catalog",
                    companion, card.name
                ),
            }
        }
    }
    info!("Built {} card links", rows.len());
    rows
}
