//! Request/response facade over sessions, the AI engine and the history sink
//!
//! Each operation maps to one web endpoint of a game server: it looks up the
//! session, runs the session operation and returns a serializable response.
//! Errors carry an HTTP-style code through [`GameError::status_code`].

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::board::Pos;
use crate::engine::{AIEngine, Difficulty, EngineConfig};
use crate::error::Result;
use crate::rules::WinningLine;
use crate::session::{GameStatus, HistoryLog, HistorySink, HistorySummary, SessionStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGameResponse {
    pub session_id: Uuid,
    pub board: Vec<Vec<u8>>,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayResponse {
    pub player_move: Pos,
    pub ai_move: Option<Pos>,
    pub status: GameStatus,
    pub winning_line: Option<WinningLine>,
    pub board: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoResponse {
    pub board: Vec<Vec<u8>>,
    pub undo_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintResponse {
    pub row: u8,
    pub col: u8,
    pub hint_count: u32,
}

/// Owns every live session, the engine and the history sink.
pub struct GomokuService<H = HistoryLog> {
    sessions: SessionStore,
    engine: AIEngine,
    history: H,
}

impl GomokuService<HistoryLog> {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_sink(AIEngine::with_config(config), HistoryLog::new())
    }

    /// Totals plus the most recent finished games
    pub fn history(&self) -> HistorySummary {
        self.history.summary()
    }
}

impl Default for GomokuService<HistoryLog> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: HistorySink> GomokuService<H> {
    pub fn with_sink(engine: AIEngine, history: H) -> Self {
        Self::with_parts(SessionStore::new(), engine, history)
    }

    pub fn with_parts(sessions: SessionStore, engine: AIEngine, history: H) -> Self {
        Self {
            sessions,
            engine,
            history,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn sink(&self) -> &H {
        &self.history
    }

    #[instrument(skip(self))]
    pub fn new_game(&mut self, difficulty: Difficulty) -> Result<NewGameResponse> {
        let session_id = self.sessions.create(difficulty);
        let session = self.sessions.get(session_id)?;
        info!(session = %session_id, %difficulty, "new game");
        Ok(NewGameResponse {
            session_id,
            board: session.board().to_rows(),
            difficulty,
        })
    }

    /// Play the human's move and the AI's reply.
    ///
    /// A game that ends here is reported to the history sink exactly once and
    /// queued for eviction; until evicted it rejects any later move.
    #[instrument(skip(self))]
    pub fn play(&mut self, session_id: Uuid, row: i32, col: i32) -> Result<PlayResponse> {
        let session = self.sessions.get_mut(session_id)?;
        let outcome = session.player_turn(&mut self.engine, row, col)?;

        let finished = outcome.status.is_over();
        if finished {
            if let Some(record) = session.history_record(Utc::now()) {
                self.history.record(record);
            }
        }

        let response = PlayResponse {
            player_move: outcome.player_move,
            ai_move: outcome.ai_move,
            status: outcome.status,
            winning_line: outcome.winning_line,
            board: session.board().to_rows(),
        };
        if finished {
            self.sessions.mark_finished(session_id);
        }
        Ok(response)
    }

    #[instrument(skip(self))]
    pub fn undo(&mut self, session_id: Uuid, steps: usize) -> Result<UndoResponse> {
        let session = self.sessions.get_mut(session_id)?;
        session.undo(steps)?;
        Ok(UndoResponse {
            board: session.board().to_rows(),
            undo_count: session.undo_count(),
        })
    }

    #[instrument(skip(self))]
    pub fn hint(&mut self, session_id: Uuid) -> Result<HintResponse> {
        let session = self.sessions.get_mut(session_id)?;
        let pos = session.hint(&mut self.engine)?;
        Ok(HintResponse {
            row: pos.row,
            col: pos.col,
            hint_count: session.hint_count(),
        })
    }
}
