use crate::{CardCount, Error, Rank, Result};

/// Represents a shoe in the real world. Suits are irrelevant here, so only
/// the number of each rank left is tracked, together with the Hi-Lo count.
#[derive(Debug, Clone)]
pub struct Shoe {
    number_of_decks: u8,
    ranks: [u16; 13],
    card_count: CardCount,
    running_count: i32,
}

impl Shoe {
    /// Creates a full shoe.
    pub fn new(number_of_decks: u8) -> Shoe {
        Shoe {
            number_of_decks,
            ranks: [(number_of_decks as u16) * 4; 13],
            card_count: CardCount::with_number_of_decks(number_of_decks),
            running_count: 0,
        }
    }

    /// Puts every dealt card back and resets the running count.
    pub fn reset(&mut self) {
        *self = Shoe::new(self.number_of_decks);
    }

    /// Takes a dealt card out of the shoe. Fails if no such card is left.
    pub fn remove(&mut self, rank: Rank) -> Result<()> {
        let index = rank_index(rank);
        if self.ranks[index] == 0 {
            return Err(Error::InvalidState(format!(
                "No card of rank '{}' exists in the shoe",
                rank.name()
            )));
        }
        self.card_count.remove_card(rank.value())?;
        self.ranks[index] -= 1;
        self.running_count += hi_lo_tag(rank);
        Ok(())
    }

    pub fn remove_all(&mut self, ranks: &[Rank]) -> Result<()> {
        for rank in ranks {
            self.remove(*rank)?;
        }
        Ok(())
    }

    /// Returns a card to the shoe.
    pub fn add(&mut self, rank: Rank) {
        self.ranks[rank_index(rank)] += 1;
        self.card_count.add_card(rank.value());
        self.running_count -= hi_lo_tag(rank);
    }

    pub fn contains(&self, rank: Rank) -> bool {
        self.ranks[rank_index(rank)] > 0
    }

    pub fn count_of(&self, rank: Rank) -> u16 {
        self.ranks[rank_index(rank)]
    }

    pub fn len(&self) -> usize {
        self.card_count.get_total() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.card_count.is_empty()
    }

    pub fn number_of_decks(&self) -> u8 {
        self.number_of_decks
    }

    /// The count vector handed to the expectation calculator.
    pub fn card_count(&self) -> CardCount {
        self.card_count
    }

    pub fn running_count(&self) -> i32 {
        self.running_count
    }

    /// Running count per remaining deck. 0.0 for an empty shoe.
    pub fn true_count(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.running_count as f64 / (self.len() as f64 / 52.0)
        }
    }
}

fn rank_index(rank: Rank) -> usize {
    rank as usize
}

/// Hi-Lo tag of a card leaving the shoe.
fn hi_lo_tag(rank: Rank) -> i32 {
    match rank.value() {
        2..=6 => 1,
        1 | 10 => -1,
        _ => 0,
    }
}
