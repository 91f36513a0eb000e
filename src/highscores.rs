//! Session leaderboard
//!
//! Kept in memory only: it lives as long as the process and is never
//! written anywhere.

/// Maximum number of runs to keep
pub const MAX_HIGH_SCORES: usize = 5;

/// A single finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreEntry {
    /// Final score
    pub score: u64,
    /// Run number within the session (1-based)
    pub run: u32,
    /// Frames the run lasted
    pub frames: u64,
}

/// Best runs of the current session, sorted descending by score
#[derive(Debug, Clone, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a finished run. Returns the rank achieved (1-indexed) or None if
    /// it didn't qualify. Ties keep the earlier run ahead.
    pub fn add_score(&mut self, score: u64, run: u32, frames: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry { score, run, frames };
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

    /// Best score this session (if any run finished)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}
