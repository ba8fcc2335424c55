use super::hit_double_ex::average;
use super::EvCalculator;
use crate::{ActionKind, CardCount, Error, Hand, Rank, Result, StateKey};

impl EvCalculator {
    /// Plays one hand holding the first card of the pair plus one drawn card,
    /// and counts it twice. The second hand is assumed to play out the same
    /// way.
    pub(super) fn memoization_split_expectation(
        &mut self,
        shoe: &CardCount,
        player_hand: &Hand,
        dealer_hand: &Hand,
    ) -> Result<f64> {
        let state = StateKey::new(shoe, player_hand, dealer_hand, true, ActionKind::Split);
        if let Some(ex) = self.ex.get(&state) {
            return Ok(ex);
        }

        let pair_card = match player_hand.first() {
            Some(card) => card,
            None => {
                return Err(Error::InvalidArgument(String::from(
                    "Cannot split an empty hand",
                )))
            }
        };
        let split_aces = pair_card.is_ace();
        let can_hit = !split_aces || self.rule.hit_split_aces;
        let can_double = self.rule.allow_das
            && (!split_aces || (self.rule.hit_split_aces && self.rule.double_split_aces));

        let mut weighted_sum = 0.0;
        let mut total_weight = 0u32;
        for card_value in 1..=10u8 {
            let count = shoe[card_value];
            if count == 0 {
                continue;
            }

            let next_shoe = shoe.without(card_value)?;
            let split_hand =
                Hand::from_ranks(&[pair_card, Rank::from_value(card_value)?]).into_split();

            let stand =
                self.memoization_stand_expectation(&next_shoe, &split_hand, dealer_hand, true)?;
            let hit = {
                if can_hit {
                    self.memoization_hit_expectation(&next_shoe, &split_hand, dealer_hand, true)?
                } else {
                    -f64::INFINITY
                }
            };
            let double = {
                if can_double {
                    self.memoization_double_expectation(
                        &next_shoe,
                        &split_hand,
                        dealer_hand,
                        true,
                    )?
                } else {
                    -f64::INFINITY
                }
            };

            weighted_sum += stand.max(hit).max(double) * count as f64;
            total_weight += count as u32;
        }

        let ex = 2.0 * average(weighted_sum, total_weight);
        log::trace!(
            "split {} against {} evaluated to {:.5}",
            player_hand,
            dealer_hand,
            ex
        );
        self.ex.insert(state, ex);
        Ok(ex)
    }
}
