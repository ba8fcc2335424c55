pub mod calculation;
mod card;
mod error;
mod hand;
pub mod shoe;
mod statearray;

use serde::{Deserialize, Serialize};

pub use calculation::{ActionExpectations, EvCalculator};
pub use card::{parse_ranks, Rank};
pub use error::{Error, Result};
pub use hand::Hand;
pub use shoe::Shoe;
pub use statearray::{ActionKind, CardCount, StateArray, StateKey};

/// House rules fixed for the lifetime of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rule {
    pub number_of_decks: u8,
    /// Payout multiple of a natural Blackjack, e.g. 1.5 for 3:2.
    pub blackjack_payout: f64,
    pub allow_surrender: bool,
    pub dealer_hit_on_soft17: bool,
    /// Dealer checks the hole card for a natural when showing an Ace or a
    /// ten-valued card.
    pub dealer_peek: bool,
    /// Dealer plays out even when every player hand is already resolved.
    /// Only the table presentation cares about this.
    pub dealer_always_plays_out: bool,
    pub natural_blackjack_on_split: bool,
    pub allow_das: bool,
    pub hit_split_aces: bool,
    /// Only meaningful together with `hit_split_aces` and `allow_das`.
    pub double_split_aces: bool,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            number_of_decks: 6,
            blackjack_payout: 1.5,
            allow_surrender: true,
            dealer_hit_on_soft17: true,
            dealer_peek: true,
            dealer_always_plays_out: false,
            natural_blackjack_on_split: false,
            allow_das: true,
            hit_split_aces: false,
            double_split_aces: false,
        }
    }
}

impl Rule {
    /// Brings out-of-range values back to something playable, warning about
    /// every adjustment.
    pub fn normalized(mut self) -> Self {
        if self.number_of_decks < 1 || self.number_of_decks > 8 {
            log::warn!(
                "number_of_decks {} out of valid range (1-8), using 6",
                self.number_of_decks
            );
            self.number_of_decks = 6;
        }

        if !(self.blackjack_payout > 0.0) {
            log::warn!(
                "blackjack_payout {} must be positive, using 1.5",
                self.blackjack_payout
            );
            self.blackjack_payout = 1.5;
        }

        if self.double_split_aces && (!self.hit_split_aces || !self.allow_das) {
            log::warn!("double_split_aces requires hit_split_aces and allow_das, enabling both");
            self.hit_split_aces = true;
            self.allow_das = true;
        }

        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Stand,
    Hit,
    Double,
    Split,
    Surrender,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Decision::Stand => "Stand",
            Decision::Hit => "Hit",
            Decision::Double => "Double",
            Decision::Split => "Split",
            Decision::Surrender => "Surrender",
        };
        write!(f, "{}", name)
    }
}
