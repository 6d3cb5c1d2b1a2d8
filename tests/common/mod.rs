#![allow(dead_code)]

use mtg_oracle_loader::{AdditionalBlocks, Catalog, LoaderConfig, PipelineContext, SkipList};

/// Small source document covering reprints, a split card, a flip card,
/// a set with a supplemental block and a set on the skip list
pub const DOCUMENT: &str = r#"{
    "ICE": {
        "name": "Ice Age",
        "code": "ICE",
        "releaseDate": "1995-06-03",
        "block": "Ice Age",
        "cards": [
            {
                "name": "Brainstorm",
                "manaCost": "{U}",
                "cmc": 1,
                "colors": ["Blue"],
                "colorIdentity": ["U"],
                "type": "Instant",
                "types": ["Instant"],
                "rarity": "Common",
                "text": "Draw three cards,\nthen put two cards from your hand on top of your library in any order.",
                "artist": "Christopher Rush",
                "number": "61",
                "multiverseid": 2474
            },
            {
                "name": "Adarkar Wastes",
                "type": "Land",
                "types": ["Land"],
                "rarity": "Rare",
                "artist": "John Avon",
                "multiverseid": 2748
            }
        ]
    },
    "CSP": {
        "name": "Coldsnap",
        "code": "CSP",
        "releaseDate": "2006-07-21",
        "block": " ",
        "cards": [
            {
                "name": "Brainstorm",
                "manaCost": "{U}",
                "cmc": 1,
                "colors": ["Blue"],
                "colorIdentity": ["U"],
                "types": ["Instant"],
                "rarity": "Common",
                "flavor": "The mind is a storm\nof ideas.",
                "number": "28",
                "multiverseid": "121236"
            }
        ]
    },
    "APC": {
        "name": "Apocalypse",
        "code": "APC",
        "releaseDate": "2001-06-04",
        "block": "Invasion",
        "cards": [
            {
                "name": "Fire",
                "names": ["Fire", "Ice"],
                "layout": "split",
                "manaCost": "{1}{R}",
                "cmc": 2,
                "colors": ["Red"],
                "colorIdentity": ["R", "U"],
                "types": ["Instant"],
                "rarity": "Uncommon",
                "number": "128a"
            },
            {
                "name": "Ice",
                "names": ["Fire", "Ice"],
                "layout": "split",
                "manaCost": "{1}{U}",
                "cmc": 2,
                "colors": ["Blue"],
                "colorIdentity": ["R", "U"],
                "types": ["Instant"],
                "rarity": "Uncommon",
                "number": "128b"
            }
        ]
    },
    "CHK": {
        "name": "Champions of Kamigawa",
        "code": "CHK",
        "releaseDate": "2004-10-01",
        "block": "Kamigawa",
        "cards": [
            {
                "name": "Bushi Tenderfoot",
                "names": ["Bushi Tenderfoot", "Kenzo the Hardhearted"],
                "layout": "flip",
                "manaCost": "{W}",
                "cmc": 1,
                "colors": ["White"],
                "colorIdentity": ["W"],
                "types": ["Creature"],
                "subtypes": ["Human", "Soldier"],
                "rarity": "Uncommon",
                "power": "1",
                "toughness": "1"
            },
            {
                "name": "Kenzo the Hardhearted",
                "names": ["Bushi Tenderfoot", "Kenzo the Hardhearted"],
                "layout": "flip",
                "colors": ["White"],
                "colorIdentity": ["W"],
                "supertypes": ["Legendary"],
                "types": ["Creature"],
                "subtypes": ["Human", "Samurai"],
                "rarity": "Uncommon",
                "power": "3",
                "toughness": "4"
            }
        ]
    },
    "pMEI": {
        "name": "Media Inserts",
        "code": "pMEI",
        "releaseDate": "1995",
        "cards": [
            {"name": "Arena", "types": ["Land"], "rarity": "Special"}
        ]
    }
}"#;

pub const SKIP_LIST: &str = "pMEI # media inserts\n";

pub const ADDITIONAL_BLOCKS: &str = "Ice Age\tCSP\n";

pub fn catalog() -> Catalog {
    Catalog::from_json_str(DOCUMENT).expect("fixture document parses")
}

pub fn context_with(config: LoaderConfig) -> PipelineContext {
    let skip_list = SkipList::parse(SKIP_LIST);
    let additional = AdditionalBlocks::parse(ADDITIONAL_BLOCKS).expect("fixture blocks parse");
    PipelineContext::from_parts(config, catalog(), &skip_list, additional)
        .expect("fixture context prepares")
}

pub fn context() -> PipelineContext {
    context_with(LoaderConfig::default())
}
