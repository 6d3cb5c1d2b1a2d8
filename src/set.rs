use crate::base::non_blank;
use crate::card::CardRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Release date precision as published for a set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReleaseDate {
    Year(i32),
    Month { year: i32, month: u32 },
    Day(NaiveDate),
}

impl ReleaseDate {
    /// Parse `YYYY-MM-DD`, `YYYY-MM` or `YYYY`
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(ReleaseDate::Day(date));
        }
        let mut parts = raw.split('-');
        let year = parts.next()?;
        if year.len() != 4 {
            return None;
        }
        let year: i32 = year.parse().ok()?;
        match (parts.next(), parts.next()) {
            (None, None) => Some(ReleaseDate::Year(year)),
            (Some(month), None) => {
                let month: u32 = month.parse().ok()?;
                (1..=12)
                    .contains(&month)
                    .then_some(ReleaseDate::Month { year, month })
            }
            _ => None,
        }
    }

    pub fn year(&self) -> i32 {
        use chrono::Datelike;
        match self {
            ReleaseDate::Year(year) => *year,
            ReleaseDate::Month { year, .. } => *year,
            ReleaseDate::Day(date) => date.year(),
        }
    }
}

/// One named product release and the printings it contains
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRecord {
    pub name: String,

    pub code: String,

    #[serde(default)]
    pub release_date: Option<String>,

    #[serde(default)]
    pub block: Option<String>,

    #[serde(default)]
    pub cards: Vec<CardRecord>,
}

impl SetRecord {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Declared block name, treating a blank value as no block
    pub fn block_name(&self) -> Option<&str> {
        non_blank(self.block.as_deref())
    }

    pub fn parsed_release_date(&self) -> Option<ReleaseDate> {
        self.release_date.as_deref().and_then(ReleaseDate::parse)
    }

    /// Add a printing, pointing it back at this set
    pub fn push_card(&mut self, mut card: CardRecord) {
        card.set_set_code(&self.code);
        self.cards.push(card);
    }

    /// Point every contained printing back at this set's code
    pub(crate) fn attach_cards(&mut self) {
        let code = self.code.clone();
        for card in &mut self.cards {
            card.set_set_code(&code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_date_precision() {
        assert_eq!(
            ReleaseDate::parse("1995-06-03"),
            Some(ReleaseDate::Day(NaiveDate::from_ymd_opt(1995, 6, 3).unwrap()))
        );
        assert_eq!(
            ReleaseDate::parse("1993-08"),
            Some(ReleaseDate::Month { year: 1993, month: 8 })
        );
        assert_eq!(ReleaseDate::parse("1994"), Some(ReleaseDate::Year(1994)));
        assert_eq!(ReleaseDate::parse("1994-13"), None);
        assert_eq!(ReleaseDate::parse("soon"), None);
        assert_eq!(ReleaseDate::parse("1995-06-03").unwrap().year(), 1995);
    }

    #[test]
    fn test_blank_block_is_absent() {
        let mut set = SetRecord::new("ICE", "Ice Age");
        assert_eq!(set.block_name(), None);
        set.block = Some("  ".to_string());
        assert_eq!(set.block_name(), None);
        set.block = Some("Ice Age".to_string());
        assert_eq!(set.block_name(), Some("Ice Age"));
    }

    #[test]
    fn test_push_card_sets_back_reference() {
        let mut set = SetRecord::new("LEA", "Limited Edition Alpha");
        set.push_card(CardRecord::new("Shock", "common"));
        assert_eq!(set.cards[0].set_code(), "LEA");
    }
}
