use super::hit_double_ex::average;
use super::{evaluate_outcome, EvCalculator};
use crate::{ActionKind, CardCount, Hand, Rank, Result, Rule, StateKey};

impl EvCalculator {
    /// Note that the dealer draws from the same shoe the player drew from,
    /// which may still contain the hole card.
    pub(super) fn memoization_stand_expectation(
        &mut self,
        shoe: &CardCount,
        player_hand: &Hand,
        dealer_hand: &Hand,
        is_split: bool,
    ) -> Result<f64> {
        // Obvious case: Bust. The dealer never gets to play.
        if player_hand.bust() {
            return Ok(-1.0);
        }

        let state = StateKey::new(shoe, player_hand, dealer_hand, is_split, ActionKind::Stand);
        if let Some(ex) = self.ex.get(&state) {
            return Ok(ex);
        }

        if dealer_must_stand(&self.rule, dealer_hand) {
            let ex = evaluate_outcome(&self.rule, player_hand, dealer_hand, is_split);
            self.ex.insert(state, ex);
            return Ok(ex);
        }

        let mut weighted_sum = 0.0;
        let mut total_weight = 0u32;
        for card_value in 1..=10u8 {
            let count = shoe[card_value];
            if count == 0 || self.hole_card_was_peeked(dealer_hand, card_value) {
                continue;
            }

            let next_shoe = shoe.without(card_value)?;
            let next_dealer_hand = dealer_hand.with_rank(Rank::from_value(card_value)?);
            let ex = self.memoization_stand_expectation(
                &next_shoe,
                player_hand,
                &next_dealer_hand,
                is_split,
            )?;
            weighted_sum += ex * count as f64;
            total_weight += count as u32;
        }

        let ex = average(weighted_sum, total_weight);
        self.ex.insert(state, ex);
        Ok(ex)
    }

    /// With peeking on, a lone up card of Ace or ten already proved the hole
    /// card does not complete a natural.
    fn hole_card_was_peeked(&self, dealer_hand: &Hand, card_value: u8) -> bool {
        if !self.rule.dealer_peek || dealer_hand.len() != 1 {
            return false;
        }
        match dealer_hand.first() {
            Some(up_card) if up_card.is_ten_valued() => card_value == 1,
            Some(up_card) if up_card.is_ace() => card_value == 10,
            _ => false,
        }
    }
}

/// Bust, hard 17 or more, and soft 18 or more always stand. Soft 17 depends on
/// the table.
pub(super) fn dealer_must_stand(rule: &Rule, dealer_hand: &Hand) -> bool {
    let total = dealer_hand.total();
    match total.cmp(&17) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Equal => !dealer_hand.is_soft() || !rule.dealer_hit_on_soft17,
        std::cmp::Ordering::Less => false,
    }
}
