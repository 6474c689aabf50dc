//! Score history - append-only log of finished games
//!
//! One entry is appended each time a game ends. Restarting a game does not
//! touch the log, so best-score queries span every game of the process run.

use std::fmt::Write;

/// Result of one finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreEntry {
    pub score: u32,
    /// Tower height reached, base block excluded.
    pub height: u32,
}

/// Log of finished games, oldest first in storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreHistory {
    entries: Vec<ScoreEntry>,
}

impl ScoreHistory {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a finished game. Duplicates and zero values are accepted.
    pub fn append(&mut self, score: u32, height: u32) {
        self.entries.push(ScoreEntry { score, height });
    }

    /// Highest score recorded, 0 when empty.
    pub fn best_score(&self) -> u32 {
        self.entries.iter().map(|e| e.score).max().unwrap_or(0)
    }

    /// Highest tower recorded, 0 when empty.
    pub fn best_height(&self) -> u32 {
        self.entries.iter().map(|e| e.height).max().unwrap_or(0)
    }

    /// Number of games recorded.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, most recent game first.
    pub fn entries(&self) -> impl Iterator<Item = &ScoreEntry> + '_ {
        self.entries.iter().rev()
    }

    /// Up to `n` entries ordered by score, highest first.
    ///
    /// Returns `None` when no game has been recorded yet. Among equal scores
    /// the more recent game comes first.
    pub fn top_n(&self, n: usize) -> Option<Vec<ScoreEntry>> {
        if self.entries.is_empty() {
            return None;
        }

        let mut sorted: Vec<ScoreEntry> = self.entries().copied().collect();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted.truncate(n);
        Some(sorted)
    }

    /// Human-readable top-`n` table.
    pub fn top_scores_report(&self, n: usize) -> String {
        let Some(top) = self.top_n(n) else {
            return "No games played yet!".to_string();
        };

        let mut out = String::new();
        let _ = writeln!(out, "Top {} Scores:", top.len());
        for (i, entry) in top.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. Score: {} (Height: {})",
                i + 1,
                entry.score,
                entry.height
            );
        }
        out
    }

    /// Forget every recorded game.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
