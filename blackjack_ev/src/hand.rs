use crate::card::parse_ranks;
use crate::{Error, Rank, Result};
use std::fmt;

/// One group of cards held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Rank>,
    is_split: bool,
}

impl Hand {
    pub fn new() -> Hand {
        Hand {
            cards: Vec::with_capacity(3),
            is_split: false,
        }
    }

    pub fn from_ranks(ranks: &[Rank]) -> Hand {
        Hand {
            cards: ranks.to_vec(),
            is_split: false,
        }
    }

    /// Parses abbreviations such as "A,8".
    pub fn from_abbreviations(text: &str) -> Result<Hand> {
        Ok(Hand::from_ranks(&parse_ranks(text)?))
    }

    /// Marks the hand as the result of a split.
    pub fn into_split(mut self) -> Hand {
        self.is_split = true;
        self
    }

    pub fn is_split(&self) -> bool {
        self.is_split
    }

    pub fn add(&mut self, rank: Rank) {
        self.cards.push(rank);
    }

    /// A copy of this hand with one more card. Used by every recursive branch
    /// so that sibling branches never share a hand.
    pub fn with_rank(&self, rank: Rank) -> Hand {
        let mut next = self.clone();
        next.add(rank);
        next
    }

    /// Removes the first card of the given rank.
    pub fn remove(&mut self, rank: Rank) -> Result<()> {
        match self.cards.iter().position(|card| *card == rank) {
            Some(index) => {
                self.cards.remove(index);
                Ok(())
            }
            None => Err(Error::InvalidState(format!(
                "No card of rank '{}' exists in the hand",
                rank.name()
            ))),
        }
    }

    pub fn contains(&self, rank: Rank) -> bool {
        self.cards.contains(&rank)
    }

    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    pub fn first(&self) -> Option<Rank> {
        self.cards.first().copied()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Note that this method treats Ace as 1.
    pub fn get_sum(&self) -> u16 {
        self.cards.iter().map(|card| card.value() as u16).sum()
    }

    /// Best total that does not bust if one exists. At most one ace can ever
    /// be promoted to 11.
    pub fn total(&self) -> u16 {
        let sum = self.get_sum();
        if self.contains(Rank::Ace) && sum <= 11 {
            sum + 10
        } else {
            sum
        }
    }

    pub fn is_soft(&self) -> bool {
        self.contains(Rank::Ace) && self.get_sum() <= 11
    }

    pub fn bust(&self) -> bool {
        self.get_sum() > 21
    }

    /// Two cards totaling 21. Whether it pays as a blackjack after a split is
    /// a rule question left to the outcome evaluator.
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.total() == 21
    }

    /// Exactly two cards of the same rank.
    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && self.cards[0] == self.cards[1]
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards: Vec<String> = self.cards.iter().map(|card| card.abbreviation()).collect();
        let softness = if self.is_soft() { "soft" } else { "hard" };
        write!(f, "[{}] ({} {})", cards.join(" "), softness, self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_with_flexible_aces() {
        assert_eq!(Hand::from_ranks(&[Rank::Ace, Rank::Six]).total(), 17);
        assert_eq!(Hand::from_ranks(&[Rank::Ace, Rank::Ace]).total(), 12);
        assert_eq!(
            Hand::from_ranks(&[Rank::Ace, Rank::Six, Rank::Ten]).total(),
            17
        );
        assert_eq!(
            Hand::from_ranks(&[Rank::Ace, Rank::Ace, Rank::Nine]).total(),
            21
        );
        assert_eq!(
            Hand::from_ranks(&[Rank::King, Rank::Queen, Rank::Two]).total(),
            22
        );
        assert_eq!(Hand::new().total(), 0);
    }

    #[test]
    fn softness() {
        assert!(Hand::from_ranks(&[Rank::Ace, Rank::Six]).is_soft());
        assert!(!Hand::from_ranks(&[Rank::Ace, Rank::Six, Rank::Ten]).is_soft());
        assert!(!Hand::from_ranks(&[Rank::Ten, Rank::Seven]).is_soft());
        assert!(Hand::from_ranks(&[Rank::Ace]).is_soft());
    }

    #[test]
    fn naturals_and_busts() {
        assert!(Hand::from_ranks(&[Rank::Ace, Rank::Jack]).is_natural());
        assert!(!Hand::from_ranks(&[Rank::Seven, Rank::Seven, Rank::Seven]).is_natural());
        assert!(Hand::from_ranks(&[Rank::King, Rank::Queen, Rank::Two]).bust());
        assert!(!Hand::from_ranks(&[Rank::Ace, Rank::Ace, Rank::King]).bust());
    }

    #[test]
    fn split_eligibility_needs_the_same_rank() {
        assert!(Hand::from_ranks(&[Rank::Eight, Rank::Eight]).can_split());
        assert!(!Hand::from_ranks(&[Rank::King, Rank::Queen]).can_split());
        assert!(!Hand::from_ranks(&[Rank::Ten, Rank::Seven]).can_split());
        assert!(!Hand::from_ranks(&[Rank::Five, Rank::Five, Rank::Five]).can_split());
    }

    #[test]
    fn remove_missing_rank_is_an_error() {
        let mut hand = Hand::from_ranks(&[Rank::Nine, Rank::Two]);
        hand.remove(Rank::Nine).unwrap();
        assert_eq!(hand.cards(), &[Rank::Two]);
        assert!(matches!(hand.remove(Rank::Nine), Err(Error::InvalidState(_))));
    }

    #[test]
    fn with_rank_clones() {
        let hand = Hand::from_ranks(&[Rank::Five]).into_split();
        let next = hand.with_rank(Rank::Six);
        assert_eq!(hand.len(), 1);
        assert_eq!(next.len(), 2);
        assert!(next.is_split());
        assert_eq!(next.total(), 11);
    }

    #[test]
    fn parse_and_display() {
        let hand = Hand::from_abbreviations("A,8").unwrap();
        assert_eq!(hand.cards(), &[Rank::Ace, Rank::Eight]);
        assert_eq!(hand.to_string(), "[A 8] (soft 19)");
        assert!(Hand::from_abbreviations("A,B").is_err());
    }
}
