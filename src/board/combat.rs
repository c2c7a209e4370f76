//! Combat outcomes.
//!
//! The engine never hard-codes who beats whom; it asks a `CombatRules`
//! implementation. `ClassicRules` covers the standard rule set.

use super::piece::Rank;

/// Result of an attack from the attacker's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Battle {
    /// The defender is removed and the attacker takes its cell.
    Win,
    /// The attacker is removed.
    Lose,
    /// Both pieces are removed.
    Tie,
}

/// Capability lookup keyed by (attacker rank, defender rank).
pub trait CombatRules {
    fn outcome(&self, attacker: Rank, defender: Rank) -> Battle;
}

/// Standard rules: the Spy takes the Marshal when attacking, Miners defuse
/// Bombs, Bombs stop everything else, equal strengths trade.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicRules;

impl CombatRules for ClassicRules {
    fn outcome(&self, attacker: Rank, defender: Rank) -> Battle {
        if !attacker.is_movable() {
            return Battle::Lose;
        }
        match (attacker, defender) {
            (_, Rank::Flag) => Battle::Win,
            (Rank::Miner, Rank::Bomb) => Battle::Win,
            (_, Rank::Bomb) => Battle::Lose,
            (Rank::Spy, Rank::Marshal) => Battle::Win,
            _ => match attacker.strength().cmp(&defender.strength()) {
                std::cmp::Ordering::Greater => Battle::Win,
                std::cmp::Ordering::Less => Battle::Lose,
                std::cmp::Ordering::Equal => Battle::Tie,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::ALL_RANKS;

    #[test]
    fn spy_takes_marshal_only_when_attacking() {
        assert_eq!(ClassicRules.outcome(Rank::Spy, Rank::Marshal), Battle::Win);
        assert_eq!(ClassicRules.outcome(Rank::Marshal, Rank::Spy), Battle::Win);
        assert_eq!(ClassicRules.outcome(Rank::Spy, Rank::Scout), Battle::Lose);
    }

    #[test]
    fn only_miner_defuses_bombs() {
        for r in ALL_RANKS.into_iter().filter(|r| r.is_movable()) {
            let expected = if r == Rank::Miner { Battle::Win } else { Battle::Lose };
            assert_eq!(ClassicRules.outcome(r, Rank::Bomb), expected, "{:?}", r);
        }
    }

    #[test]
    fn flag_always_falls() {
        for r in ALL_RANKS.into_iter().filter(|r| r.is_movable()) {
            assert_eq!(ClassicRules.outcome(r, Rank::Flag), Battle::Win);
        }
    }

    #[test]
    fn equal_ranks_tie() {
        assert_eq!(ClassicRules.outcome(Rank::Captain, Rank::Captain), Battle::Tie);
        assert_eq!(ClassicRules.outcome(Rank::General, Rank::Colonel), Battle::Win);
        assert_eq!(ClassicRules.outcome(Rank::Sergeant, Rank::Major), Battle::Lose);
    }
}
