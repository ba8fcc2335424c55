use crate::{Error, Result};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// The 13 ranks of a standard deck. Suits never matter for the expectation
/// calculation, so a card is just its rank.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize_enum_str, Deserialize_enum_str,
)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

impl Rank {
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }

    pub fn abbreviation(&self) -> String {
        self.to_string()
    }

    /// Blackjack value in [1, 10]. Ace counts as 1 here; promotion to 11 is
    /// the hand's business.
    pub fn value(&self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }

    /// Returns the first rank carrying the given blackjack value, so 10 maps
    /// to Ten.
    pub fn from_value(value: u8) -> Result<Rank> {
        Rank::iter()
            .find(|rank| rank.value() == value)
            .ok_or_else(|| {
                Error::InvalidArgument(format!("No rank has blackjack value {}", value))
            })
    }

    /// Case-insensitive. "T" is accepted for Ten.
    pub fn from_abbreviation(abbreviation: &str) -> Result<Rank> {
        let normalized = match abbreviation.trim().to_uppercase().as_str() {
            "T" => String::from("10"),
            other => other.to_string(),
        };
        normalized.parse().map_err(|_| {
            Error::InvalidArgument(format!("Unknown rank abbreviation '{}'", abbreviation))
        })
    }

    pub fn is_ace(&self) -> bool {
        *self == Rank::Ace
    }

    pub fn is_ten_valued(&self) -> bool {
        self.value() == 10
    }
}

/// Parses a comma or whitespace separated list such as "A,8" or "K Q 2".
pub fn parse_ranks(text: &str) -> Result<Vec<Rank>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(Rank::from_abbreviation)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_of_all_ranks() {
        let values: Vec<u8> = Rank::iter().map(|rank| rank.value()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10]);
    }

    #[test]
    fn from_value_picks_representative_rank() {
        assert_eq!(Rank::from_value(1).unwrap(), Rank::Ace);
        assert_eq!(Rank::from_value(7).unwrap(), Rank::Seven);
        assert_eq!(Rank::from_value(10).unwrap(), Rank::Ten);
        assert!(matches!(
            Rank::from_value(0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(Rank::from_value(11).is_err());
    }

    #[test]
    fn abbreviations_round_trip_through_display() {
        for rank in Rank::iter() {
            let abbreviation = rank.abbreviation();
            assert_eq!(Rank::from_abbreviation(&abbreviation).unwrap(), rank);
        }
        assert_eq!(Rank::King.abbreviation(), "K");
        assert_eq!(Rank::Ten.abbreviation(), "10");
    }

    #[test]
    fn abbreviation_parsing_is_lenient() {
        assert_eq!(Rank::from_abbreviation("a").unwrap(), Rank::Ace);
        assert_eq!(Rank::from_abbreviation(" q ").unwrap(), Rank::Queen);
        assert_eq!(Rank::from_abbreviation("T").unwrap(), Rank::Ten);
        assert!(Rank::from_abbreviation("1").is_err());
        assert!(Rank::from_abbreviation("Z").is_err());
    }

    #[test]
    fn parse_rank_lists() {
        assert_eq!(parse_ranks("A,8").unwrap(), vec![Rank::Ace, Rank::Eight]);
        assert_eq!(
            parse_ranks("K Q, 2").unwrap(),
            vec![Rank::King, Rank::Queen, Rank::Two]
        );
        assert!(parse_ranks("").unwrap().is_empty());
        assert!(parse_ranks("A,X").is_err());
    }

    #[test]
    fn names() {
        assert_eq!(Rank::Ace.name(), "Ace");
        assert_eq!(Rank::Jack.name(), "Jack");
    }
}
