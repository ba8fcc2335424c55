use crate::{Hand, Rule};

/// Payout multiple of a finished player hand against a finished dealer hand.
///
/// A player two-card 21 only counts as a natural after a split when the rule
/// says so. The dealer's natural never depends on the split flag.
pub fn evaluate_outcome(rule: &Rule, player_hand: &Hand, dealer_hand: &Hand, is_split: bool) -> f64 {
    let player_sum = player_hand.total();
    let dealer_sum = dealer_hand.total();

    let player_natural =
        player_hand.is_natural() && (!is_split || rule.natural_blackjack_on_split);
    let dealer_natural = dealer_hand.is_natural();

    if player_natural && dealer_natural {
        0.0
    } else if player_natural {
        rule.blackjack_payout
    } else if dealer_natural {
        -1.0
    } else if player_sum > 21 {
        -1.0
    } else if dealer_sum > 21 {
        1.0
    } else if player_sum > dealer_sum {
        1.0
    } else if player_sum < dealer_sum {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rank;
    use rand::Rng;

    fn hand(ranks: &[Rank]) -> Hand {
        Hand::from_ranks(ranks)
    }

    #[test]
    fn both_naturals_push() {
        let rule = Rule::default();
        let natural = hand(&[Rank::Ace, Rank::King]);
        assert_eq!(evaluate_outcome(&rule, &natural, &natural, false), 0.0);
    }

    #[test]
    fn player_natural_pays_configured_odds() {
        let rule = Rule {
            blackjack_payout: 1.2,
            ..Default::default()
        };
        let natural = hand(&[Rank::Ten, Rank::Ace]);
        let dealer = hand(&[Rank::Seven, Rank::Seven, Rank::Seven]);
        assert_eq!(evaluate_outcome(&rule, &natural, &dealer, false), 1.2);
    }

    #[test]
    fn dealer_natural_beats_drawn_21() {
        let rule = Rule::default();
        let player = hand(&[Rank::Seven, Rank::Seven, Rank::Seven]);
        let dealer = hand(&[Rank::Ace, Rank::Queen]);
        assert_eq!(evaluate_outcome(&rule, &player, &dealer, false), -1.0);
    }

    #[test]
    fn split_21_is_not_a_natural_unless_allowed() {
        let player = hand(&[Rank::Ace, Rank::Jack]);
        let dealer = hand(&[Rank::Ten, Rank::Nine]);

        let rule = Rule::default();
        assert_eq!(evaluate_outcome(&rule, &player, &dealer, true), 1.0);
        assert_eq!(evaluate_outcome(&rule, &player, &dealer, false), 1.5);

        let rule = Rule {
            natural_blackjack_on_split: true,
            ..Default::default()
        };
        assert_eq!(evaluate_outcome(&rule, &player, &dealer, true), 1.5);

        // The dealer's natural ignores the split flag.
        let dealer_natural = hand(&[Rank::Ace, Rank::Ten]);
        assert_eq!(
            evaluate_outcome(&Rule::default(), &player, &dealer_natural, true),
            -1.0
        );
    }

    #[test]
    fn player_bust_loses_even_if_dealer_busts() {
        let rule = Rule::default();
        let player = hand(&[Rank::King, Rank::Queen, Rank::Two]);
        let dealer = hand(&[Rank::King, Rank::Six, Rank::Nine]);
        assert_eq!(evaluate_outcome(&rule, &player, &dealer, false), -1.0);
    }

    #[test]
    fn plain_comparisons() {
        let rule = Rule::default();
        let twenty = hand(&[Rank::King, Rank::Queen]);
        let eighteen = hand(&[Rank::Ten, Rank::Eight]);
        let dealer_bust = hand(&[Rank::Ten, Rank::Six, Rank::Eight]);
        assert_eq!(evaluate_outcome(&rule, &twenty, &eighteen, false), 1.0);
        assert_eq!(evaluate_outcome(&rule, &eighteen, &twenty, false), -1.0);
        assert_eq!(evaluate_outcome(&rule, &twenty, &twenty, false), 0.0);
        assert_eq!(evaluate_outcome(&rule, &eighteen, &dealer_bust, false), 1.0);
    }

    fn random_non_natural_hand<R: Rng>(rng: &mut R) -> Hand {
        loop {
            let number_of_cards = rng.gen_range(2..=5);
            let mut hand = Hand::new();
            for _ in 0..number_of_cards {
                hand.add(Rank::from_value(rng.gen_range(1..=10)).unwrap());
            }
            if !hand.is_natural() {
                return hand;
            }
        }
    }

    #[test]
    fn swapping_sides_negates_the_outcome() {
        let rule = Rule::default();
        let mut rng = rand::thread_rng();
        for _turn in 0..1000 {
            let a = random_non_natural_hand(&mut rng);
            let b = random_non_natural_hand(&mut rng);
            if a.bust() && b.bust() {
                continue;
            }
            assert_eq!(
                evaluate_outcome(&rule, &a, &b, false),
                -evaluate_outcome(&rule, &b, &a, false),
                "{} vs {}",
                a,
                b
            );
        }
    }
}
