//! Game sessions: the per-game state machine, the session registry and the
//! finished-game history log

pub mod history;
pub mod state;
pub mod store;

pub use history::{HistoryLog, HistoryMetadata, HistoryRecord, HistorySink, HistorySummary};
pub use state::{GameSession, GameStatus, MoveRecord, TurnOutcome, AI, HUMAN, MAX_HINTS, MAX_UNDOS};
pub use store::SessionStore;
