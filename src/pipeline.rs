//! Ordered pipeline stages over one owned context.
//!
//! `prepare` loads and filters the catalog, then assigns oracle and block
//! ids. Everything after that reads the finished context and never mutates
//! it, so row building can happen in any order.

use crate::blocks::{AdditionalBlocks, BlockAssignment};
use crate::card_types::CardTypeListing;
use crate::catalog::{Catalog, SkipList};
use crate::config::LoaderConfig;
use crate::dictionary::{card_name_words, KnownWords};
use crate::error::LoaderResult;
use crate::links::{build_link_rows, LinkRow};
use crate::oracle::OracleIndex;
use crate::remap::{HistoricalCards, RemapTable};
use crate::rows::{BlockRow, CardRow, CardSetRow, SetRow};
use log::info;

#[derive(Debug, Clone)]
pub struct PipelineContext {
    config: LoaderConfig,
    catalog: Catalog,
    additional_blocks: AdditionalBlocks,
    oracle: OracleIndex,
    blocks: BlockAssignment,
}

impl PipelineContext {
    /// Read every input named by `config` and run the resolution passes
    pub fn prepare(config: LoaderConfig) -> LoaderResult<Self> {
        let skip_list = SkipList::from_path(&config.skip_list_path)?;
        let additional_blocks = AdditionalBlocks::from_path(&config.additional_blocks_path)?;
        let catalog = Catalog::from_path(&config.input_path)?;
        Self::from_parts(config, catalog, &skip_list, additional_blocks)
    }

    /// Run the resolution passes over inputs already in memory
    pub fn from_parts(
        config: LoaderConfig,
        mut catalog: Catalog,
        skip_list: &SkipList,
        additional_blocks: AdditionalBlocks,
    ) -> LoaderResult<Self> {
        catalog.apply_skip_list(skip_list);
        let oracle = OracleIndex::resolve(&mut catalog)?;
        let blocks = BlockAssignment::assign(&catalog, &additional_blocks);
        info!(
            "Prepared {} sets, {} oracle cards, {} blocks",
            catalog.len(),
            oracle.len(),
            blocks.len()
        );
        Ok(Self {
            config,
            catalog,
            additional_blocks,
            oracle,
            blocks,
        })
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn oracle(&self) -> &OracleIndex {
        &self.oracle
    }

    pub fn blocks(&self) -> &BlockAssignment {
        &self.blocks
    }

    pub fn additional_blocks(&self) -> &AdditionalBlocks {
        &self.additional_blocks
    }

    /// One row per canonical card, in oracle id order
    pub fn card_rows(&self) -> LoaderResult<Vec<CardRow>> {
        self.oracle
            .canonical_cards(&self.catalog)
            .map(CardRow::from_card)
            .collect()
    }

    /// One row per printing, in catalog order
    pub fn card_set_rows(&self) -> LoaderResult<Vec<CardSetRow>> {
        let include_id = self.config.include_card_set_id;
        self.catalog
            .cards()
            .map(|card| CardSetRow::from_card(card, include_id))
            .collect()
    }

    pub fn block_rows(&self) -> Vec<BlockRow> {
        self.blocks
            .iter()
            .map(|(id, name)| BlockRow {
                id,
                name: name.to_string(),
            })
            .collect()
    }

    pub fn set_rows(&self) -> Vec<SetRow> {
        self.catalog
            .sets()
            .map(|set| SetRow::from_set(set, &self.blocks, &self.additional_blocks))
            .collect()
    }

    pub fn link_rows(&self) -> Vec<LinkRow> {
        build_link_rows(&self.catalog, &self.oracle, self.config.link_policy)
    }

    pub fn card_types(&self) -> CardTypeListing {
        CardTypeListing::collect(&self.catalog, self.config.type_excluded_sets.as_slice())
    }

    pub fn dictionary_words(&self, known: &KnownWords) -> Vec<String> {
        card_name_words(&self.catalog, known)
    }

    pub fn remap_table(&self, historical: &HistoricalCards) -> LoaderResult<RemapTable> {
        RemapTable::build(historical, &self.oracle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardRecord;
    use crate::set::SetRecord;

    fn context() -> PipelineContext {
        let mut ice = SetRecord::new("ICE", "Ice Age");
        ice.block = Some("Ice Age".to_string());
        ice.push_card(CardRecord::new("Brainstorm", "Common"));
        let mut csp = SetRecord::new("CSP", "Coldsnap");
        csp.push_card(CardRecord::new("Brainstorm", "Common"));
        csp.push_card(CardRecord::new("Dark Depths", "Rare"));
        let mut pmei = SetRecord::new("pMEI", "Media Inserts");
        pmei.push_card(CardRecord::new("Arena", "Special"));

        let catalog = Catalog::from_sets(vec![ice, csp, pmei]).unwrap();
        let additional = AdditionalBlocks::parse("Ice Age\tCSP\n").unwrap();
        let skip: SkipList = ["pMEI"].into_iter().collect();
        PipelineContext::from_parts(LoaderConfig::default(), catalog, &skip, additional).unwrap()
    }

    #[test]
    fn test_skipped_sets_contribute_nothing() {
        let ctx = context();
        assert!(ctx.catalog().get("pMEI").is_none());
        assert_eq!(ctx.oracle().oracle_id("Arena"), None);
        assert_eq!(ctx.card_rows().unwrap().len(), 2);
        assert_eq!(ctx.card_set_rows().unwrap().len(), 3);
        assert_eq!(ctx.set_rows().len(), 2);
    }

    #[test]
    fn test_supplemental_block_shares_declared_id() {
        let ctx = context();
        assert_eq!(ctx.block_rows(), vec![BlockRow { id: 1, name: "Ice Age".to_string() }]);

        let block_ids: Vec<Option<u32>> = ctx.set_rows().iter().map(|r| r.block_id).collect();
        assert_eq!(block_ids, vec![Some(1), Some(1)]);
    }

    #[test]
    fn test_remap_table_uses_current_oracle_ids() {
        let ctx = context();
        let historical: HistoricalCards = vec![(40, "Dark Depths"), (41, "Arena")].into_iter().collect();
        let remap = ctx.remap_table(&historical).unwrap();
        assert_eq!(remap.get(40), Some(2));
        assert_eq!(remap.orphaned(), &[(41, "Arena".to_string())]);

        let conflicting: HistoricalCards = vec![(40, "Dark Depths"), (40, "Brainstorm")].into_iter().collect();
        assert!(ctx.remap_table(&conflicting).is_err());
    }
}
