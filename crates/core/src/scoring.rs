//! Session scoreboard.
//!
//! Counts won rounds per player. Lives as long as the process; "play again"
//! keeps it, nothing persists it.

use crate::types::{Outcome, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn rounds_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Record a finished round. `InProgress` is ignored.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Player::X) => self.x_wins = self.x_wins.saturating_add(1),
            Outcome::Won(Player::O) => self.o_wins = self.o_wins.saturating_add(1),
            Outcome::Draw => self.draws = self.draws.saturating_add(1),
            Outcome::InProgress => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_per_player() {
        let mut s = Scoreboard::new();
        s.record(Outcome::Won(Player::X));
        s.record(Outcome::Won(Player::X));
        s.record(Outcome::Won(Player::O));
        s.record(Outcome::Draw);
        s.record(Outcome::InProgress);

        assert_eq!(s.wins(Player::X), 2);
        assert_eq!(s.wins(Player::O), 1);
        assert_eq!(s.draws(), 1);
        assert_eq!(s.rounds_played(), 4);
    }
}
