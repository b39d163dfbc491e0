//! In-memory statistics across the games of one run

use super::session::{GameSession, GameStatus, MAX_ATTEMPTS};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by the number of attempts used (index 0 unused)
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    /// Count a finished session; sessions still in progress are ignored
    pub fn record(&mut self, session: &GameSession) {
        match session.status() {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;
                let attempts = session.history().len();
                if let Some(slot) = self.guess_distribution.get_mut(attempts) {
                    *slot += 1;
                }
            }
            GameStatus::Lost => self.total_games += 1,
        }
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
