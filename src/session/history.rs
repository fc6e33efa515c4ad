//! Finished-game history: per-game records plus running totals

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use super::state::GameStatus;
use crate::engine::Difficulty;

/// Records kept in the rolling window
pub const HISTORY_CAPACITY: usize = 100;
/// Records returned by [`HistoryLog::summary`]
pub const RECENT_GAMES: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub session_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub difficulty: Difficulty,
    pub result: GameStatus,
    /// Half-moves played by both sides
    pub total_moves: usize,
    pub duration_seconds: u64,
}

/// Running totals over every recorded game, including those evicted from
/// the window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryMetadata {
    pub total_games: u64,
    pub first_player_wins: u64,
    pub second_player_wins: u64,
    pub draws: u64,
}

/// Receives one record per finished game.
pub trait HistorySink {
    fn record(&mut self, record: HistoryRecord);
}

/// Response shape of a history query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub metadata: HistoryMetadata,
    pub games: Vec<HistoryRecord>,
}

/// In-memory history store with a bounded window of recent games.
///
/// Serializes as `{"metadata": {...}, "games": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLog {
    metadata: HistoryMetadata,
    games: VecDeque<HistoryRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metadata(&self) -> HistoryMetadata {
        self.metadata
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Stored records, oldest first
    pub fn games(&self) -> impl Iterator<Item = &HistoryRecord> + '_ {
        self.games.iter()
    }

    /// Up to `n` most recent records, oldest first
    pub fn recent(&self, n: usize) -> Vec<HistoryRecord> {
        let skip = self.games.len().saturating_sub(n);
        self.games.iter().skip(skip).cloned().collect()
    }

    pub fn summary(&self) -> HistorySummary {
        HistorySummary {
            metadata: self.metadata,
            games: self.recent(RECENT_GAMES),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load a previously exported log, dropping records beyond the window
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut log: HistoryLog = serde_json::from_str(json)?;
        while log.games.len() > HISTORY_CAPACITY {
            log.games.pop_front();
        }
        Ok(log)
    }
}

impl HistorySink for HistoryLog {
    fn record(&mut self, record: HistoryRecord) {
        match record.result {
            GameStatus::FirstPlayerWin => self.metadata.first_player_wins += 1,
            GameStatus::SecondPlayerWin => self.metadata.second_player_wins += 1,
            GameStatus::Draw => self.metadata.draws += 1,
            GameStatus::Ongoing => {
                warn!(session = %record.session_id, "ignoring history record for unfinished game");
                return;
            }
        }
        self.metadata.total_games += 1;

        debug!(session = %record.session_id, result = ?record.result, "game recorded");
        self.games.push_back(record);
        if self.games.len() > HISTORY_CAPACITY {
            self.games.pop_front();
        }
    }
}
