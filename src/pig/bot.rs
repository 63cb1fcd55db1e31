use rand::Rng;

use super::player::Turn;

/// A seat's choice between rolling again and banking the turn score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Roll,
    Hold,
}

/// Turn score a cautious bot is happy to bank
const CAUTIOUS_LIMIT: u32 = 3;
/// Turn score a greedy bot keeps rolling up to
const GREEDY_LIMIT: u32 = 30;

/// The bot always opens its turn with a roll. After that it flips between
/// a cautious and a greedy mood each decision and keeps rolling while the
/// turn score is at or below that mood's limit.
pub fn decide<R: Rng + ?Sized>(turn: &Turn, rng: &mut R) -> Decision {
    if turn.rolls == 0 {
        return Decision::Roll;
    }

    let limit = if rng.gen_range(1..=10) <= 5 {
        CAUTIOUS_LIMIT
    } else {
        GREEDY_LIMIT
    };

    if turn.score <= limit {
        Decision::Roll
    } else {
        Decision::Hold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_first_decision_is_always_roll() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..20 {
            assert_eq!(decide(&Turn::default(), &mut rng), Decision::Roll);
        }
    }

    #[test]
    fn test_low_turn_score_keeps_rolling() {
        let mut rng = StdRng::seed_from_u64(5);
        let turn = Turn { score: 3, rolls: 1 };
        for _ in 0..20 {
            assert_eq!(decide(&turn, &mut rng), Decision::Roll);
        }
    }

    #[test]
    fn test_high_turn_score_always_holds() {
        let mut rng = StdRng::seed_from_u64(5);
        let turn = Turn { score: 31, rolls: 8 };
        for _ in 0..20 {
            assert_eq!(decide(&turn, &mut rng), Decision::Hold);
        }
    }

    #[test]
    fn test_middle_turn_score_mixes() {
        let mut rng = StdRng::seed_from_u64(9);
        let turn = Turn { score: 12, rolls: 3 };
        let decisions: Vec<_> = (0..200).map(|_| decide(&turn, &mut rng)).collect();
        assert!(decisions.contains(&Decision::Roll));
        assert!(decisions.contains(&Decision::Hold));
    }
}
