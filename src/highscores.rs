//! Session leaderboard
//!
//! Tracks the top 10 runs of the current process. Nothing is persisted;
//! the next launch starts from an empty table.

use serde::{Deserialize, Serialize};

/// Maximum number of entries to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Level the run ended on
    pub level: u32,
    /// Run length in simulated seconds
    pub duration_secs: f64,
}

/// Best runs of the session, sorted descending by score.
///
/// Ties rank the earlier run higher.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create an empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Whether a score would make the table. Zero never qualifies.
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        self.entries.len() < MAX_HIGH_SCORES
            || self.entries.last().is_some_and(|e| score > e.score)
    }

    /// The 1-indexed rank a score would take, or `None` if it misses.
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        Some(self.insertion_index(score) + 1)
    }

    /// Record a finished run. Returns the 1-indexed rank it took, or
    /// `None` if it did not qualify.
    pub fn add_score(&mut self, score: u64, level: u32, duration_secs: f64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let index = self.insertion_index(score);
        self.entries.insert(
            index,
            HighScoreEntry {
                score,
                level,
                duration_secs,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);

        Some(index + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The best score recorded so far, if any.
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Slot a score would occupy in the descending table. Equal scores
    /// land after the existing ones.
    fn insertion_index(&self, score: u64) -> usize {
        self.entries.partition_point(|e| e.score >= score)
    }
}
