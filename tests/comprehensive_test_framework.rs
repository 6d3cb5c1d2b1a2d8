use mtg_oracle_loader::*;

/// Shared trait checks applied across the public value types
#[cfg(test)]
mod comprehensive_tests {
    use super::*;
    use mtg_oracle_loader::rows::{BlockRow, NamedRow};

    /// Default, clone and debug behave for a value type
    fn test_trait_implementations<T>()
    where
        T: Clone + PartialEq + std::fmt::Debug + Default,
    {
        let default_instance = T::default();
        let cloned_instance = default_instance.clone();
        assert_eq!(default_instance, cloned_instance);

        let debug_string = format!("{:?}", default_instance);
        assert!(!debug_string.is_empty());
    }

    fn assert_send_sync<T: Send + Sync>() {}

    /// Serializing then deserializing yields an equal value
    fn test_json_round_trip<T>(instance: &T)
    where
        T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let json = serde_json::to_string(instance).unwrap();
        let parsed: T = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, instance);
    }

    #[test]
    fn test_value_types() {
        test_trait_implementations::<Catalog>();
        test_trait_implementations::<SkipList>();
        test_trait_implementations::<OracleIndex>();
        test_trait_implementations::<AdditionalBlocks>();
        test_trait_implementations::<BlockAssignment>();
        test_trait_implementations::<CardTypeListing>();
        test_trait_implementations::<KnownWords>();
        test_trait_implementations::<HistoricalCards>();
        test_trait_implementations::<RemapTable>();
        test_trait_implementations::<RemapOutcome>();
        test_trait_implementations::<OutputSummary>();
        test_trait_implementations::<LinkPolicy>();
    }

    #[test]
    fn test_thread_safety() {
        assert_send_sync::<PipelineContext>();
        assert_send_sync::<LoaderError>();
        assert_send_sync::<CardRecord>();
    }

    #[test]
    fn test_serde_types() {
        let mut card = CardRecord::new("Llanowar Elves", "Common");
        card.colors = Some(vec!["Green".to_string()]);
        card.power = Some("1".to_string());
        test_json_round_trip(&card);

        let mut set = SetRecord::new("LEA", "Limited Edition Alpha");
        set.release_date = Some("1993-08-05".to_string());
        test_json_round_trip(&set);

        test_json_round_trip(&LoaderConfig::default());
        test_json_round_trip(&LinkPolicy::EmitUntagged);
    }

    #[test]
    fn test_row_equality() {
        let block = BlockRow { id: 1, name: "Ice Age".to_string() };
        assert_eq!(block.clone(), block);
        let named = NamedRow { id: 2, name: "Creature".to_string() };
        assert_eq!(named.to_line(), "2\tCreature");
    }
}
