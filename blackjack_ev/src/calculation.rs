use crate::{CardCount, Decision, Error, Hand, Result, Rule, StateArray};

mod hit_double_ex;
mod outcome;
mod split_ex;
mod stand_ex;

pub use outcome::evaluate_outcome;

/// Exact expectation calculator for one shoe-state session.
///
/// The rule is fixed at construction, so every memoized value stays valid for
/// as long as the calculator lives. Build a new calculator (or call
/// `clear_cache`) if the rule must change.
#[derive(Debug, Clone)]
pub struct EvCalculator {
    rule: Rule,
    ex: StateArray<f64>,
}

impl EvCalculator {
    pub fn new(rule: Rule) -> Self {
        Self {
            rule,
            ex: StateArray::with_capacity(1 << 12),
        }
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Number of memoized states.
    pub fn cache_len(&self) -> usize {
        self.ex.len()
    }

    pub fn clear_cache(&mut self) {
        self.ex.clear();
    }

    /// Expectation of standing now and letting the dealer play out.
    pub fn stand_ev(
        &mut self,
        shoe: &CardCount,
        player_hand: &Hand,
        dealer_hand: &Hand,
    ) -> Result<f64> {
        check_hands("stand_ev", player_hand, dealer_hand)?;
        let ex = self.memoization_stand_expectation(
            shoe,
            player_hand,
            dealer_hand,
            player_hand.is_split(),
        )?;
        self.log_result("stand", ex);
        Ok(ex)
    }

    /// Expectation of taking one card and then continuing optimally with
    /// stand or hit.
    pub fn hit_ev(&mut self, shoe: &CardCount, player_hand: &Hand, dealer_hand: &Hand) -> Result<f64> {
        check_hands("hit_ev", player_hand, dealer_hand)?;
        let ex = self.memoization_hit_expectation(
            shoe,
            player_hand,
            dealer_hand,
            player_hand.is_split(),
        )?;
        self.log_result("hit", ex);
        Ok(ex)
    }

    /// Expectation of doubling the wager and taking exactly one card.
    pub fn double_ev(
        &mut self,
        shoe: &CardCount,
        player_hand: &Hand,
        dealer_hand: &Hand,
    ) -> Result<f64> {
        check_hands("double_ev", player_hand, dealer_hand)?;
        let ex = self.memoization_double_expectation(
            shoe,
            player_hand,
            dealer_hand,
            player_hand.is_split(),
        )?;
        self.log_result("double", ex);
        Ok(ex)
    }

    /// Expectation of splitting a pair, counted over both resulting hands.
    pub fn split_ev(
        &mut self,
        shoe: &CardCount,
        player_hand: &Hand,
        dealer_hand: &Hand,
    ) -> Result<f64> {
        check_hands("split_ev", player_hand, dealer_hand)?;
        if !player_hand.can_split() {
            return Err(Error::InvalidArgument(format!(
                "split_ev needs a pair, got {}",
                player_hand
            )));
        }
        let ex = self.memoization_split_expectation(shoe, player_hand, dealer_hand)?;
        self.log_result("split", ex);
        Ok(ex)
    }

    /// Half the wager is forfeited, whatever the cards.
    pub fn surrender_ev(&self, player_hand: &Hand, dealer_hand: &Hand) -> Result<f64> {
        check_hands("surrender_ev", player_hand, dealer_hand)?;
        Ok(-0.5)
    }

    /// Expectations of every action the table would offer for this hand.
    pub fn evaluate_situation(
        &mut self,
        shoe: &CardCount,
        player_hand: &Hand,
        dealer_hand: &Hand,
    ) -> Result<ActionExpectations> {
        let first_decision = player_hand.len() == 2;

        let stand = self.stand_ev(shoe, player_hand, dealer_hand)?;
        let hit = self.hit_ev(shoe, player_hand, dealer_hand)?;
        let double = {
            if first_decision {
                Some(self.double_ev(shoe, player_hand, dealer_hand)?)
            } else {
                None
            }
        };
        let split = {
            if player_hand.can_split() {
                Some(self.split_ev(shoe, player_hand, dealer_hand)?)
            } else {
                None
            }
        };
        let surrender = {
            if first_decision && self.rule.allow_surrender {
                Some(self.surrender_ev(player_hand, dealer_hand)?)
            } else {
                None
            }
        };

        Ok(ActionExpectations {
            stand,
            hit,
            double,
            split,
            surrender,
        })
    }

    fn log_result(&self, action: &str, ex: f64) {
        log::debug!(
            "{:<8} ev {:>+.5} ({} memoized states)",
            action,
            ex,
            self.ex.len()
        );
    }
}

/// Both sides must hold at least one card.
fn check_hands(operation: &str, player_hand: &Hand, dealer_hand: &Hand) -> Result<()> {
    if player_hand.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "{} needs the player's cards",
            operation
        )));
    }
    if dealer_hand.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "{} needs the dealer's up card",
            operation
        )));
    }
    Ok(())
}

/// Expectation of every action for one situation. `None` means the action
/// is not offered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActionExpectations {
    pub stand: f64,
    pub hit: f64,
    pub double: Option<f64>,
    pub split: Option<f64>,
    pub surrender: Option<f64>,
}

impl ActionExpectations {
    pub fn get(&self, decision: Decision) -> Option<f64> {
        match decision {
            Decision::Stand => Some(self.stand),
            Decision::Hit => Some(self.hit),
            Decision::Double => self.double,
            Decision::Split => self.split,
            Decision::Surrender => self.surrender,
        }
    }

    /// The best offered action. Ties go to the earlier of stand, hit, double,
    /// split, surrender.
    pub fn best(&self) -> (Decision, f64) {
        let mut max_decision = Decision::Stand;
        let mut max_ex = self.stand;
        for decision in [
            Decision::Hit,
            Decision::Double,
            Decision::Split,
            Decision::Surrender,
        ] {
            if let Some(ex) = self.get(decision) {
                if max_ex < ex {
                    max_ex = ex;
                    max_decision = decision;
                }
            }
        }
        (max_decision, max_ex)
    }
}
