//! Registry of live sessions keyed by id

use std::collections::{HashMap, VecDeque};

use tracing::debug;
use uuid::Uuid;

use super::state::GameSession;
use crate::engine::Difficulty;
use crate::error::{GameError, Result};

/// Finished sessions kept around for late requests before eviction
pub const FINISHED_RETENTION: usize = 64;

/// Live sessions plus a bounded tail of finished ones.
///
/// Finished sessions stay answerable (with `GameAlreadyOver`) until more than
/// the retention count have finished after them; the oldest is then dropped.
#[derive(Debug)]
pub struct SessionStore {
    sessions: HashMap<Uuid, GameSession>,
    finished: VecDeque<Uuid>,
    retention: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_retention(FINISHED_RETENTION)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_retention(retention: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            finished: VecDeque::new(),
            retention,
        }
    }

    /// Start a new session and return its id
    pub fn create(&mut self, difficulty: Difficulty) -> Uuid {
        self.insert(GameSession::new(difficulty))
    }

    pub fn insert(&mut self, session: GameSession) -> Uuid {
        let id = session.id();
        self.sessions.insert(id, session);
        debug!(session = %id, live = self.sessions.len(), "session stored");
        id
    }

    pub fn get(&self, id: Uuid) -> Result<&GameSession> {
        self.sessions.get(&id).ok_or(GameError::SessionNotFound(id))
    }

    pub fn get_mut(&mut self, id: Uuid) -> Result<&mut GameSession> {
        self.sessions.get_mut(&id).ok_or(GameError::SessionNotFound(id))
    }

    pub fn remove(&mut self, id: Uuid) -> Result<GameSession> {
        self.finished.retain(|&f| f != id);
        self.sessions.remove(&id).ok_or(GameError::SessionNotFound(id))
    }

    /// Queue a finished session for eviction, dropping the oldest finished
    /// sessions beyond the retention count
    pub fn mark_finished(&mut self, id: Uuid) {
        if !self.sessions.contains_key(&id) || self.finished.contains(&id) {
            return;
        }
        self.finished.push_back(id);
        while self.finished.len() > self.retention {
            if let Some(old) = self.finished.pop_front() {
                self.sessions.remove(&old);
                debug!(session = %old, "finished session evicted");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
