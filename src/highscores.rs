//! High score leaderboard
//!
//! In-memory, session-scoped top 10. Each entry keeps the seed that
//! produced the run, so any score on the board can be replayed.
//! Nothing here is written to disk.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// World seed of the run that earned it
    pub seed: u64,
}

/// Session leaderboard, sorted descending by score
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score qualifies for the leaderboard.
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a score if it qualifies; returns the 1-indexed rank.
    pub fn add_score(&mut self, score: u64, seed: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry { score, seed };
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_never_qualifies() {
        let mut scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert_eq!(scores.add_score(0, 1), None);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_entries_stay_sorted() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(30, 1), Some(1));
        assert_eq!(scores.add_score(90, 2), Some(1));
        assert_eq!(scores.add_score(60, 3), Some(2));

        let ordered: Vec<u64> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(ordered, vec![90, 60, 30]);
        assert_eq!(scores.top_score(), Some(90));
    }

    #[test]
    fn test_board_trims_to_capacity() {
        let mut scores = HighScores::new();
        for i in 1..=12u64 {
            scores.add_score(i * 10, i);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.top_score(), Some(120));

        // Too low for a full board
        assert!(!scores.qualifies(30));
        assert_eq!(scores.add_score(30, 99), None);
    }
}
