use mtg_oracle_loader::card::*;
use mtg_oracle_loader::colour::{colour_flags, Colour};
use mtg_oracle_loader::rarity::Rarity;

mod comprehensive_card_tests {
    use super::*;
    use mtg_oracle_loader::LoaderError;

    /// Power/toughness strings map to the first signed digit run, or 0
    #[test]
    fn test_numeric_extraction_table() {
        let cases: [(Option<&str>, i32); 8] = [
            (Some("1"), 1),
            (Some("-3"), -3),
            (Some("1+*"), 1),
            (Some("*"), 0),
            (None, 0),
            (Some("*1*"), 1),
            (Some("2.5"), 2),
            (Some(""), 0),
        ];
        for (raw, expected) in cases {
            assert_eq!(numeric_value(raw), expected, "input {:?}", raw);
        }
    }

    #[test]
    fn test_colour_codec_table() {
        let expected = [
            (Colour::White, "W", "White", 1),
            (Colour::Blue, "U", "Blue", 2),
            (Colour::Black, "B", "Black", 4),
            (Colour::Red, "R", "Red", 8),
            (Colour::Green, "G", "Green", 16),
        ];
        for (colour, symbol, name, flag) in expected {
            assert_eq!(colour.symbol(), symbol);
            assert_eq!(colour.name(), name);
            assert_eq!(colour.flag(), flag);
            assert_eq!(Colour::parse(symbol).unwrap(), colour);
            assert_eq!(Colour::parse(name).unwrap(), colour);
        }
    }

    #[test]
    fn test_colour_flags_mixed_tokens() {
        assert_eq!(colour_flags(Some(&["W", "Blue"][..])).unwrap(), 3);
        assert_eq!(colour_flags::<&str>(None).unwrap(), 0);
        assert_eq!(
            colour_flags(Some(&["W", "W"][..])).unwrap(),
            colour_flags(Some(&["W"][..])).unwrap()
        );
    }

    #[test]
    fn test_unknown_colour_and_rarity_are_fatal() {
        assert!(matches!(
            colour_flags(Some(&["P"][..])),
            Err(LoaderError::UnrecognizedValue { kind: "colour", .. })
        ));
        assert!(matches!(
            Rarity::from_name("Timeshifted"),
            Err(LoaderError::UnrecognizedValue { kind: "rarity", .. })
        ));
    }

    #[test]
    fn test_rarity_codec() {
        assert_eq!(Rarity::from_name("Basic Land").unwrap().symbol(), 'L');
        assert_eq!(Rarity::from_name("Mythic Rare").unwrap().symbol(), 'M');
        assert_eq!(Rarity::from_symbol('U').unwrap(), Rarity::Uncommon);
        assert_eq!(Rarity::Special.name(), "special");
    }

    /// Cards with optional fields missing still deserialize
    #[test]
    fn test_sparse_card_document() {
        let card: CardRecord =
            serde_json::from_str(r#"{"name": "Island", "rarity": "Basic Land"}"#).unwrap();
        assert_eq!(card.converted_mana_cost, 0.0);
        assert_eq!(card.colour_flags().unwrap(), 0);
        assert_eq!(card.colour_count(), 0);
        assert_eq!(card.full_type(), None);
        assert_eq!(card.subtype_line(), None);
        assert_eq!(card.link_type(), None);
        assert!(!card.has_companions());
    }

    #[test]
    fn test_link_types() {
        assert_eq!(LinkType::from_layout("split").map(LinkType::tag), Some('s'));
        assert_eq!(LinkType::from_layout("flip").map(LinkType::tag), Some('f'));
        assert_eq!(LinkType::from_layout("double-faced").map(LinkType::tag), Some('t'));
        assert_eq!(LinkType::from_layout("normal"), None);
        assert_eq!(LinkType::from_layout("meld"), None);
    }

    #[test]
    fn test_numeric_variations_are_strings() {
        let card: CardRecord = serde_json::from_str(
            r#"{"name": "Plains", "rarity": "Basic Land", "variations": [289, "290"], "loyalty": 3}"#,
        )
        .unwrap();
        assert_eq!(
            card.variations,
            Some(vec!["289".to_string(), "290".to_string()])
        );
        assert_eq!(card.loyalty.as_deref(), Some("3"));
    }
}
