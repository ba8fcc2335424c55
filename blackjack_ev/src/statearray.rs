use crate::{Error, Hand, Result};
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Index;

const MOD: u128 = 3817949514078926267; // A prime number with 62 bits.
const BASE: u128 = 211;
const POW_BASE: [u128; 10] = get_powers_of_base();

const fn get_powers_of_base() -> [u128; 10] {
    let mut ret: [u128; 10] = [0; 10];
    ret[0] = 1;

    let mut i = 1;
    while i < ret.len() {
        ret[i] = ret[i - 1] * BASE % MOD;
        i += 1;
    }

    ret
}

/// This provides a container to store the numbers of each card value (from
/// 1 to 10 inclusive) left in the shoe.
///
/// The struct is `Copy`: every recursive branch works on its own snapshot.
#[derive(Clone, Copy, Debug)]
pub struct CardCount {
    counts: [u16; 10],
    hash_value: u128,
    total: u16,
}

impl CardCount {
    pub fn new(counts: &[u16; 10]) -> CardCount {
        let mut card_count = CardCount {
            counts: *counts,
            hash_value: 0,
            total: 0,
        };

        card_count.propagate_counts();

        card_count
    }

    pub fn with_number_of_decks(number_of_decks: u8) -> CardCount {
        let mut counts = [(number_of_decks as u16) * 4; 10];
        counts[9] = (number_of_decks as u16) * 16;
        Self::new(&counts)
    }

    /// Add a card of given card value.
    ///
    /// Note that this method won't check if the card value is valid.
    pub fn add_card(&mut self, card_value: u8) {
        let index = (card_value - 1) as usize;
        self.counts[index] += 1;
        self.hash_value = (self.hash_value + POW_BASE[index]) % MOD;
        self.total += 1;
    }

    /// Remove a card of given card value. Fails when no card of that value is
    /// left; the count is never clamped.
    pub fn remove_card(&mut self, card_value: u8) -> Result<()> {
        if card_value == 0 || card_value > 10 {
            return Err(Error::InvalidArgument(format!(
                "Card value {} is not in [1, 10]",
                card_value
            )));
        }
        let index = (card_value - 1) as usize;
        if self.counts[index] == 0 {
            return Err(Error::InvalidState(format!(
                "No card of value {} is left in the shoe",
                card_value
            )));
        }
        self.counts[index] -= 1;
        self.hash_value = (self.hash_value + MOD - POW_BASE[index]) % MOD;
        self.total -= 1;
        Ok(())
    }

    /// A copy of this count with one card of the given value taken out.
    pub fn without(&self, card_value: u8) -> Result<CardCount> {
        let mut next = *self;
        next.remove_card(card_value)?;
        Ok(next)
    }

    pub fn get_total(&self) -> u16 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Probability that the next card has the given value. 0.0 for an empty
    /// shoe.
    pub fn get_proportion(&self, card_value: u8) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self[card_value] as f64 / self.total as f64
        }
    }

    pub fn as_array(&self) -> &[u16; 10] {
        &self.counts
    }

    fn propagate_counts(&mut self) {
        self.hash_value = 0;
        self.total = 0;
        for i in 0..self.counts.len() {
            self.hash_value += (self.counts[i] as u128) * POW_BASE[i];
            self.total += self.counts[i];
        }
        self.hash_value %= MOD;
    }
}

impl Default for CardCount {
    fn default() -> Self {
        CardCount::new(&[0; 10])
    }
}

impl TryFrom<&[i32]> for CardCount {
    type Error = Error;

    fn try_from(raw: &[i32]) -> Result<Self> {
        if raw.len() != 10 {
            return Err(Error::InvalidArgument(format!(
                "A count vector needs 10 slots, got {}",
                raw.len()
            )));
        }
        let mut counts = [0u16; 10];
        for (i, &count) in raw.iter().enumerate() {
            counts[i] = u16::try_from(count).map_err(|_| {
                Error::InvalidArgument(format!(
                    "Count of value {} must be a non-negative integer, got {}",
                    i + 1,
                    count
                ))
            })?;
        }
        Ok(CardCount::new(&counts))
    }
}

impl Index<u8> for CardCount {
    type Output = u16;
    fn index(&self, index: u8) -> &Self::Output {
        &self.counts[(index - 1) as usize]
    }
}

impl Hash for CardCount {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u128(self.hash_value);
    }
}

impl PartialEq for CardCount {
    fn eq(&self, other: &Self) -> bool {
        self.hash_value == other.hash_value && self.counts == other.counts
    }
}

impl Eq for CardCount {}

/// Which recursion a memoized value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Stand,
    Hit,
    Double,
    Split,
}

/// Everything an expectation depends on once the rule is fixed.
///
/// Card counts of the hands are bucketed as `min(len, 3)`: a single dealer
/// card opens the peek window, two cards can be a natural, and beyond that
/// the length no longer changes the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateKey {
    shoe: CardCount,
    player_total: u16,
    player_soft: bool,
    player_cards: u8,
    dealer_total: u16,
    dealer_soft: bool,
    dealer_cards: u8,
    is_split: bool,
    action: ActionKind,
}

impl StateKey {
    pub fn new(
        shoe: &CardCount,
        player_hand: &Hand,
        dealer_hand: &Hand,
        is_split: bool,
        action: ActionKind,
    ) -> Self {
        Self {
            shoe: *shoe,
            player_total: player_hand.total(),
            player_soft: player_hand.is_soft(),
            player_cards: player_hand.len().min(3) as u8,
            dealer_total: dealer_hand.total(),
            dealer_soft: dealer_hand.is_soft(),
            dealer_cards: dealer_hand.len().min(3) as u8,
            is_split,
            action,
        }
    }
}

/// This struct provide a convenient way to use a StateKey as the index of the
/// array.
#[derive(Debug, Default, Clone)]
pub struct StateArray<T: Copy> {
    data: HashMap<StateKey, T>,
}

impl<T: Copy> StateArray<T> {
    pub fn new() -> StateArray<T> {
        StateArray {
            data: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: HashMap::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn contains_state(&self, index: &StateKey) -> bool {
        self.data.contains_key(index)
    }

    pub fn get(&self, index: &StateKey) -> Option<T> {
        self.data.get(index).copied()
    }

    pub fn insert(&mut self, index: StateKey, value: T) {
        self.data.insert(index, value);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: Copy> Index<&StateKey> for StateArray<T> {
    type Output = T;
    fn index(&self, index: &StateKey) -> &Self::Output {
        &self.data[index]
    }
}
