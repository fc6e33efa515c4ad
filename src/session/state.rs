//! Session state machine for one game against the AI
//!
//! A session starts `Ongoing` and moves to exactly one terminal status:
//!
//! ```text
//!            +--> FirstPlayerWin   (black completes five)
//! Ongoing ---+--> SecondPlayerWin  (white completes five)
//!            +--> Draw             (board filled without five)
//! ```
//!
//! Once terminal, moves and undos are rejected with
//! [`GameError::GameAlreadyOver`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::history::HistoryRecord;
use crate::board::{Board, Pos, Stone};
use crate::engine::{AIEngine, Difficulty};
use crate::error::{GameError, Result};
use crate::rules::{check_winner, is_board_full, WinningLine};

/// Undos allowed per session
pub const MAX_UNDOS: u32 = 3;
/// Hints allowed per session
pub const MAX_HINTS: u32 = 5;

/// The human always plays black and moves first
pub const HUMAN: Stone = Stone::Black;
pub const AI: Stone = Stone::White;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Ongoing,
    FirstPlayerWin,
    SecondPlayerWin,
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }

    /// Terminal status for a five completed by `stone`
    fn won_by(stone: Stone) -> Self {
        match stone {
            Stone::Black => GameStatus::FirstPlayerWin,
            Stone::White => GameStatus::SecondPlayerWin,
            Stone::Empty => GameStatus::Ongoing,
        }
    }
}

/// One accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub pos: Pos,
    pub player: Stone,
}

/// Result of [`GameSession::player_turn`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub player_move: Pos,
    /// `None` when the player's move ended the game
    pub ai_move: Option<Pos>,
    pub status: GameStatus,
    pub winning_line: Option<WinningLine>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    id: Uuid,
    board: Board,
    current_turn: Stone,
    moves: Vec<MoveRecord>,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    undo_count: u32,
    hint_count: u32,
    difficulty: Difficulty,
    created_at: DateTime<Utc>,
}

impl GameSession {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            id: Uuid::new_v4(),
            board: Board::new(),
            current_turn: HUMAN,
            moves: Vec::new(),
            status: GameStatus::Ongoing,
            winning_line: None,
            undo_count: 0,
            hint_count: 0,
            difficulty,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn undo_count(&self) -> u32 {
        self.undo_count
    }

    pub fn hint_count(&self) -> u32 {
        self.hint_count
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Check that `(row, col)` can take a stone.
    ///
    /// Checks run in a fixed order: bounds, occupancy, then game status.
    pub fn validate_move(&self, row: i32, col: i32) -> Result<Pos> {
        let pos = Pos::checked(row, col).ok_or(GameError::OutOfRange { row, col })?;
        if !self.board.is_empty(pos) {
            return Err(GameError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        if self.status.is_over() {
            return Err(GameError::GameAlreadyOver);
        }
        Ok(pos)
    }

    /// Validate and place a stone for `player`, then hand the turn over.
    ///
    /// Does not look for a winner.
    pub fn apply_move(&mut self, row: i32, col: i32, player: Stone) -> Result<Pos> {
        let pos = self.validate_move(row, col)?;
        self.board.place_stone(pos, player);
        self.moves.push(MoveRecord { pos, player });
        self.current_turn = player.opponent();
        Ok(pos)
    }

    /// Play the human's move and, if the game goes on, the AI's reply.
    #[instrument(skip(self, engine), fields(session = %self.id, difficulty = %self.difficulty))]
    pub fn player_turn(&mut self, engine: &mut AIEngine, row: i32, col: i32) -> Result<TurnOutcome> {
        let player_move = self.apply_move(row, col, HUMAN)?;

        if let Some(outcome) = self.settle(player_move, HUMAN) {
            return Ok(TurnOutcome {
                player_move,
                ai_move: None,
                ..outcome
            });
        }

        let Some(ai_pos) = engine.get_move(&self.board, self.difficulty, AI) else {
            // The board still has empty cells, so the game stays open
            warn!("engine returned no move on a non-full board");
            return Ok(TurnOutcome {
                player_move,
                ai_move: None,
                status: self.status,
                winning_line: None,
            });
        };
        let ai_move = self.apply_move(i32::from(ai_pos.row), i32::from(ai_pos.col), AI)?;
        debug!(%player_move, %ai_move, "turn played");

        let outcome = self.settle(ai_move, AI).unwrap_or(TurnOutcome {
            player_move,
            ai_move: Some(ai_move),
            status: GameStatus::Ongoing,
            winning_line: None,
        });
        Ok(TurnOutcome {
            player_move,
            ai_move: Some(ai_move),
            ..outcome
        })
    }

    /// Record a terminal status if `last` ended the game
    fn settle(&mut self, last: Pos, player: Stone) -> Option<TurnOutcome> {
        if let Some(line) = check_winner(&self.board, last, player) {
            self.status = GameStatus::won_by(player);
            self.winning_line = Some(line);
        } else if is_board_full(&self.board) {
            self.status = GameStatus::Draw;
        } else {
            return None;
        }

        info!(status = ?self.status, moves = self.moves.len(), "game finished");
        Some(TurnOutcome {
            player_move: last,
            ai_move: None,
            status: self.status,
            winning_line: self.winning_line,
        })
    }

    /// Take back the last `steps` moves and give the turn back to the human.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn undo(&mut self, steps: usize) -> Result<()> {
        if self.status.is_over() {
            return Err(GameError::GameAlreadyOver);
        }
        if steps == 0 {
            return Err(GameError::InvalidUndoSteps);
        }
        if self.undo_count >= MAX_UNDOS {
            return Err(GameError::UndoLimitExceeded { limit: MAX_UNDOS });
        }
        if self.moves.len() < steps {
            return Err(GameError::InsufficientHistory {
                requested: steps,
                available: self.moves.len(),
            });
        }

        for record in self.moves.drain(self.moves.len() - steps..) {
            self.board.remove_stone(record.pos);
        }
        self.current_turn = HUMAN;
        self.undo_count += 1;
        debug!(undo_count = self.undo_count, remaining = self.moves.len(), "moves undone");
        Ok(())
    }

    /// Suggest a move for the human using the medium-tier heuristic.
    ///
    /// The board is left untouched. A failed hint does not use up the quota.
    #[instrument(skip(self, engine), fields(session = %self.id))]
    pub fn hint(&mut self, engine: &mut AIEngine) -> Result<Pos> {
        if self.hint_count >= MAX_HINTS {
            return Err(GameError::HintLimitExceeded { limit: MAX_HINTS });
        }
        let pos = engine
            .get_move(&self.board, Difficulty::Medium, HUMAN)
            .ok_or(GameError::NoLegalMove)?;
        self.hint_count += 1;
        debug!(%pos, hint_count = self.hint_count, "hint given");
        Ok(pos)
    }

    /// History entry for a finished game, `None` while still ongoing
    pub fn history_record(&self, finished_at: DateTime<Utc>) -> Option<HistoryRecord> {
        if !self.status.is_over() {
            return None;
        }
        let duration = (finished_at - self.created_at).num_seconds().max(0);
        Some(HistoryRecord {
            session_id: self.id,
            timestamp: finished_at,
            difficulty: self.difficulty,
            result: self.status,
            total_moves: self.moves.len(),
            duration_seconds: duration as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineConfig;
    use chrono::Duration;

    fn engine() -> AIEngine {
        AIEngine::with_config(EngineConfig {
            seed: Some(42),
            ..EngineConfig::default()
        })
    }

    fn play_all(session: &mut GameSession, moves: &[(i32, i32, Stone)]) {
        for &(r, c, player) in moves {
            session.apply_move(r, c, player).unwrap();
        }
    }

    /// Stripes of width two along rows, shifted each row: no run longer than two
    fn draw_pattern(row: usize, col: usize) -> Stone {
        if (col / 2 + row) % 2 == 1 {
            Stone::Black
        } else {
            Stone::White
        }
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new(Difficulty::Hard);
        assert_eq!(session.status(), GameStatus::Ongoing);
        assert_eq!(session.current_turn(), Stone::Black);
        assert!(session.board().is_board_empty());
        assert!(session.moves().is_empty());
        assert_eq!(session.undo_count(), 0);
        assert_eq!(session.hint_count(), 0);
        assert_eq!(session.difficulty(), Difficulty::Hard);
        assert_ne!(session.id(), GameSession::new(Difficulty::Hard).id());
    }

    #[test]
    fn test_validate_move_order() {
        let mut session = GameSession::new(Difficulty::Easy);
        assert_eq!(
            session.validate_move(-1, 3),
            Err(GameError::OutOfRange { row: -1, col: 3 })
        );
        assert_eq!(
            session.validate_move(7, 15),
            Err(GameError::OutOfRange { row: 7, col: 15 })
        );

        session.apply_move(7, 7, Stone::Black).unwrap();
        assert_eq!(
            session.validate_move(7, 7),
            Err(GameError::CellOccupied { row: 7, col: 7 })
        );
        assert_eq!(session.validate_move(0, 0), Ok(Pos::new(0, 0)));
    }

    #[test]
    fn test_apply_move_flips_turn() {
        let mut session = GameSession::new(Difficulty::Easy);
        session.apply_move(7, 7, Stone::Black).unwrap();
        assert_eq!(session.current_turn(), Stone::White);
        session.apply_move(7, 8, Stone::White).unwrap();
        assert_eq!(session.current_turn(), Stone::Black);
        assert_eq!(
            session.moves(),
            &[
                MoveRecord { pos: Pos::new(7, 7), player: Stone::Black },
                MoveRecord { pos: Pos::new(7, 8), player: Stone::White },
            ]
        );
        assert_eq!(session.board().get(Pos::new(7, 8)), Stone::White);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut session = GameSession::new(Difficulty::Medium);
        let mut engine = engine();
        session.apply_move(3, 3, Stone::Black).unwrap();
        let before = session.board().clone();

        assert!(session.player_turn(&mut engine, 3, 3).is_err());
        assert!(session.player_turn(&mut engine, 20, 3).is_err());
        assert_eq!(session.board(), &before);
        assert_eq!(session.moves().len(), 1);
    }

    #[test]
    fn test_turn_alternation() {
        let mut session = GameSession::new(Difficulty::Medium);
        let mut engine = engine();

        let outcome = session.player_turn(&mut engine, 7, 7).unwrap();
        assert_eq!(outcome.player_move, Pos::new(7, 7));
        assert_eq!(outcome.status, GameStatus::Ongoing);
        assert!(outcome.winning_line.is_none());

        let ai = outcome.ai_move.unwrap();
        assert_eq!(session.board().get(ai), Stone::White);
        assert_eq!(session.current_turn(), Stone::Black);

        let spread = [(3, 3), (11, 11), (3, 11), (11, 3), (0, 7), (14, 7), (7, 0), (7, 14)];
        let mut play_free = |session: &mut GameSession| {
            let &(r, c) = spread
                .iter()
                .find(|&&(r, c)| session.board().is_empty(Pos::new(r as u8, c as u8)))
                .unwrap();
            let outcome = session.player_turn(&mut engine, r, c).unwrap();
            assert_eq!(outcome.status, GameStatus::Ongoing);
            assert!(outcome.ai_move.is_some());
        };

        play_free(&mut session);
        play_free(&mut session);
        session.undo(2).unwrap();
        play_free(&mut session);
        play_free(&mut session);

        assert_eq!(session.moves().len(), 8);
        for (i, record) in session.moves().iter().enumerate() {
            let expected = if i % 2 == 0 { Stone::Black } else { Stone::White };
            assert_eq!(record.player, expected, "move {i}");
            assert_eq!(session.board().get(record.pos), expected);
        }
        assert_eq!(session.board().stone_count(), 8);
        assert_eq!(session.current_turn(), Stone::Black);
    }

    #[test]
    fn test_zero_radius_engine_keeps_game_open() {
        let mut session = GameSession::new(Difficulty::Medium);
        let mut engine = AIEngine::with_config(EngineConfig {
            radius: 0,
            seed: Some(3),
            ..EngineConfig::default()
        });

        let outcome = session.player_turn(&mut engine, 7, 7).unwrap();
        assert_eq!(outcome.status, GameStatus::Ongoing);
        assert!(outcome.ai_move.is_some());
        assert_eq!(session.board().stone_count(), 2);

        let hint = session.hint(&mut engine).unwrap();
        assert!(session.board().is_empty(hint));
        assert_eq!(session.hint_count(), 1);
    }

    #[test]
    fn test_immediate_win_skips_ai() {
        let mut session = GameSession::new(Difficulty::Medium);
        let mut engine = engine();
        play_all(
            &mut session,
            &[(7, 3, Stone::Black), (7, 4, Stone::Black), (7, 5, Stone::Black), (7, 6, Stone::Black)],
        );

        let outcome = session.player_turn(&mut engine, 7, 7).unwrap();
        let expected = [
            Pos::new(7, 3),
            Pos::new(7, 4),
            Pos::new(7, 5),
            Pos::new(7, 6),
            Pos::new(7, 7),
        ];
        assert_eq!(outcome.status, GameStatus::FirstPlayerWin);
        assert_eq!(outcome.winning_line, Some(expected));
        assert_eq!(outcome.ai_move, None);
        assert_eq!(session.moves().len(), 5);
        assert_eq!(session.board().stones_of(Stone::White).count(), 0);
        assert_eq!(session.winning_line(), Some(expected));
    }

    #[test]
    fn test_ai_win_ends_game() {
        let mut session = GameSession::new(Difficulty::Medium);
        let mut engine = engine();
        play_all(
            &mut session,
            &[(2, 2, Stone::White), (2, 3, Stone::White), (2, 4, Stone::White), (2, 5, Stone::White)],
        );

        // Black ignores the four; white completes it at either end
        let outcome = session.player_turn(&mut engine, 12, 12).unwrap();
        assert_eq!(outcome.status, GameStatus::SecondPlayerWin);
        let ai = outcome.ai_move.unwrap();
        assert!(ai == Pos::new(2, 1) || ai == Pos::new(2, 6), "got {ai}");
        assert!(outcome.winning_line.unwrap().contains(&ai));
    }

    #[test]
    fn test_full_board_draw() {
        let mut session = GameSession::new(Difficulty::Easy);
        let mut engine = engine();
        for r in 0..15 {
            for c in 0..15 {
                if (r, c) != (14, 14) {
                    session
                        .apply_move(r as i32, c as i32, draw_pattern(r, c))
                        .unwrap();
                }
            }
        }
        assert_eq!(draw_pattern(14, 14), Stone::Black);

        let outcome = session.player_turn(&mut engine, 14, 14).unwrap();
        assert_eq!(outcome.status, GameStatus::Draw);
        assert_eq!(outcome.ai_move, None);
        assert_eq!(outcome.winning_line, None);
        assert!(session.board().is_full());
    }

    #[test]
    fn test_finished_game_is_immutable() {
        let mut session = GameSession::new(Difficulty::Medium);
        let mut engine = engine();
        play_all(
            &mut session,
            &[(0, 0, Stone::Black), (0, 1, Stone::Black), (0, 2, Stone::Black), (0, 3, Stone::Black)],
        );
        session.player_turn(&mut engine, 0, 4).unwrap();
        assert_eq!(session.status(), GameStatus::FirstPlayerWin);

        assert_eq!(
            session.player_turn(&mut engine, 10, 10),
            Err(GameError::GameAlreadyOver)
        );
        assert_eq!(session.undo(2), Err(GameError::GameAlreadyOver));
        assert_eq!(session.moves().len(), 5);
    }

    #[test]
    fn test_undo_restores_cells() {
        let mut session = GameSession::new(Difficulty::Easy);
        play_all(
            &mut session,
            &[(7, 7, Stone::Black), (7, 8, Stone::White), (8, 8, Stone::Black)],
        );

        session.undo(2).unwrap();
        assert_eq!(session.moves().len(), 1);
        assert!(session.board().is_empty(Pos::new(7, 8)));
        assert!(session.board().is_empty(Pos::new(8, 8)));
        assert_eq!(session.board().get(Pos::new(7, 7)), Stone::Black);
        assert_eq!(session.current_turn(), Stone::Black);
        assert_eq!(session.undo_count(), 1);
    }

    #[test]
    fn test_undo_limit() {
        let mut session = GameSession::new(Difficulty::Easy);
        for i in 0..8 {
            let player = if i % 2 == 0 { Stone::Black } else { Stone::White };
            session.apply_move(i, 0, player).unwrap();
        }

        for _ in 0..MAX_UNDOS {
            session.undo(2).unwrap();
        }
        assert_eq!(session.undo(2), Err(GameError::UndoLimitExceeded { limit: 3 }));
        assert_eq!(session.undo_count(), 3);
        assert_eq!(session.moves().len(), 2);
    }

    #[test]
    fn test_undo_insufficient_history() {
        let mut session = GameSession::new(Difficulty::Easy);
        session.apply_move(7, 7, Stone::Black).unwrap();

        assert_eq!(
            session.undo(2),
            Err(GameError::InsufficientHistory { requested: 2, available: 1 })
        );
        assert_eq!(session.undo(0), Err(GameError::InvalidUndoSteps));
        assert_eq!(session.undo_count(), 0);
        assert_eq!(session.moves().len(), 1);

        session.undo(1).unwrap();
        assert!(session.board().is_board_empty());
    }

    #[test]
    fn test_hint_limit() {
        let mut session = GameSession::new(Difficulty::Hard);
        let mut engine = engine();
        session.apply_move(7, 7, Stone::Black).unwrap();
        session.apply_move(7, 8, Stone::White).unwrap();
        let before = session.board().clone();

        for n in 1..=MAX_HINTS {
            let pos = session.hint(&mut engine).unwrap();
            assert!(session.board().is_empty(pos));
            assert_eq!(session.hint_count(), n);
        }
        assert_eq!(
            session.hint(&mut engine),
            Err(GameError::HintLimitExceeded { limit: 5 })
        );
        assert_eq!(session.hint_count(), 5);
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn test_hint_empty_board_center() {
        let mut session = GameSession::new(Difficulty::Easy);
        let mut engine = engine();
        assert_eq!(session.hint(&mut engine), Ok(Pos::new(7, 7)));
    }

    #[test]
    fn test_hint_full_board_keeps_quota() {
        let mut session = GameSession::new(Difficulty::Easy);
        let mut engine = engine();
        for r in 0..15 {
            for c in 0..15 {
                session
                    .apply_move(r as i32, c as i32, draw_pattern(r, c))
                    .unwrap();
            }
        }
        assert_eq!(session.hint(&mut engine), Err(GameError::NoLegalMove));
        assert_eq!(session.hint_count(), 0);
    }

    #[test]
    fn test_hint_blocks_white_four() {
        let mut session = GameSession::new(Difficulty::Easy);
        let mut engine = engine();
        play_all(
            &mut session,
            &[(4, 4, Stone::White), (5, 5, Stone::White), (6, 6, Stone::White), (7, 7, Stone::White)],
        );
        let hint = session.hint(&mut engine).unwrap();
        assert!(hint == Pos::new(3, 3) || hint == Pos::new(8, 8), "got {hint}");
    }

    #[test]
    fn test_history_record() {
        let mut session = GameSession::new(Difficulty::Medium);
        assert!(session.history_record(Utc::now()).is_none());

        let mut engine = engine();
        play_all(
            &mut session,
            &[(7, 3, Stone::Black), (7, 4, Stone::Black), (7, 5, Stone::Black), (7, 6, Stone::Black)],
        );
        session.player_turn(&mut engine, 7, 7).unwrap();

        let finished = session.created_at() + Duration::seconds(42);
        let record = session.history_record(finished).unwrap();
        assert_eq!(record.session_id, session.id());
        assert_eq!(record.result, GameStatus::FirstPlayerWin);
        assert_eq!(record.difficulty, Difficulty::Medium);
        assert_eq!(record.total_moves, 5);
        assert_eq!(record.duration_seconds, 42);
        assert_eq!(record.timestamp, finished);
    }

    #[test]
    fn test_status_serde() {
        assert_eq!(
            serde_json::to_string(&GameStatus::FirstPlayerWin).unwrap(),
            "\"first_player_win\""
        );
        assert_eq!(
            serde_json::from_str::<GameStatus>("\"draw\"").unwrap(),
            GameStatus::Draw
        );
    }
}
