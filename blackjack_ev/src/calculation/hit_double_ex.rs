use super::EvCalculator;
use crate::{ActionKind, CardCount, Hand, Rank, Result, StateKey};

impl EvCalculator {
    /// Takes one card, then continues with whichever of stand and hit is
    /// better.
    pub(super) fn memoization_hit_expectation(
        &mut self,
        shoe: &CardCount,
        player_hand: &Hand,
        dealer_hand: &Hand,
        is_split: bool,
    ) -> Result<f64> {
        let state = StateKey::new(shoe, player_hand, dealer_hand, is_split, ActionKind::Hit);
        if let Some(ex) = self.ex.get(&state) {
            return Ok(ex);
        }

        let mut weighted_sum = 0.0;
        let mut total_weight = 0u32;
        for card_value in 1..=10u8 {
            let count = shoe[card_value];
            if count == 0 {
                continue;
            }

            let next_player_hand = player_hand.with_rank(Rank::from_value(card_value)?);
            let ex = {
                if next_player_hand.bust() {
                    -1.0
                } else {
                    let next_shoe = shoe.without(card_value)?;
                    let stand = self.memoization_stand_expectation(
                        &next_shoe,
                        &next_player_hand,
                        dealer_hand,
                        is_split,
                    )?;
                    let hit = self.memoization_hit_expectation(
                        &next_shoe,
                        &next_player_hand,
                        dealer_hand,
                        is_split,
                    )?;
                    stand.max(hit)
                }
            };
            weighted_sum += ex * count as f64;
            total_weight += count as u32;
        }

        let ex = average(weighted_sum, total_weight);
        self.ex.insert(state, ex);
        Ok(ex)
    }

    /// Doubles the wager and takes exactly one card.
    pub(super) fn memoization_double_expectation(
        &mut self,
        shoe: &CardCount,
        player_hand: &Hand,
        dealer_hand: &Hand,
        is_split: bool,
    ) -> Result<f64> {
        let state = StateKey::new(shoe, player_hand, dealer_hand, is_split, ActionKind::Double);
        if let Some(ex) = self.ex.get(&state) {
            return Ok(ex);
        }

        let mut weighted_sum = 0.0;
        let mut total_weight = 0u32;
        for card_value in 1..=10u8 {
            let count = shoe[card_value];
            if count == 0 {
                continue;
            }

            let next_player_hand = player_hand.with_rank(Rank::from_value(card_value)?);
            let ex = {
                if next_player_hand.bust() {
                    -2.0
                } else {
                    let next_shoe = shoe.without(card_value)?;
                    2.0 * self.memoization_stand_expectation(
                        &next_shoe,
                        &next_player_hand,
                        dealer_hand,
                        is_split,
                    )?
                }
            };
            weighted_sum += ex * count as f64;
            total_weight += count as u32;
        }

        let ex = average(weighted_sum, total_weight);
        self.ex.insert(state, ex);
        Ok(ex)
    }
}

/// An empty shoe has nothing to average over.
pub(super) fn average(weighted_sum: f64, total_weight: u32) -> f64 {
    if total_weight == 0 {
        0.0
    } else {
        weighted_sum / total_weight as f64
    }
}
