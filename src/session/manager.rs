use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use log::{info, warn};
use uuid::Uuid;

use super::state::GameSession;
use super::SessionError;
use crate::config::{Config, GameConfig, SessionsConfig};
use crate::game::rng::RandomSource;
use crate::validation::escape_log;

/// Keyed store of independent games.
///
/// Each session owns its player and combat outright; the manager only hands
/// out `&mut` access for one command at a time.
#[derive(Debug)]
pub struct SessionManager {
    sessions: HashMap<String, GameSession>,
    limits: SessionsConfig,
    rules: GameConfig,
}

impl SessionManager {
    pub fn new(config: &Config) -> Self {
        SessionManager {
            sessions: HashMap::new(),
            limits: config.sessions.clone(),
            rules: config.game.clone(),
        }
    }

    /// Create a fresh session and return its id.
    ///
    /// Idle sessions are pruned first, so a full store can still accept a
    /// newcomer when someone has wandered off.
    pub fn open(&mut self) -> Result<String, SessionError> {
        self.prune_idle(Utc::now());
        if self.sessions.len() >= self.limits.max_sessions {
            warn!(
                "Session rejected: capacity {} reached",
                self.limits.max_sessions
            );
            return Err(SessionError::CapacityReached {
                max: self.limits.max_sessions,
            });
        }
        let id = Uuid::new_v4().to_string();
        self.sessions
            .insert(id.clone(), GameSession::new(id.clone(), self.rules.clone()));
        info!("Session opened: {} ({} active)", id, self.sessions.len());
        Ok(id)
    }

    /// Route one command to the session `id`.
    pub fn handle(
        &mut self,
        id: &str,
        input: &str,
        rng: &mut dyn RandomSource,
    ) -> Result<String, SessionError> {
        match self.sessions.get_mut(id) {
            Some(session) => Ok(session.handle(input, rng)),
            None => {
                warn!("Command for unknown session {}", escape_log(id));
                Err(SessionError::UnknownSession(id.to_string()))
            }
        }
    }

    pub fn close(&mut self, id: &str) -> Result<(), SessionError> {
        match self.sessions.remove(id) {
            Some(_) => {
                info!("Session closed: {}", id);
                Ok(())
            }
            None => Err(SessionError::UnknownSession(id.to_string())),
        }
    }

    /// Drop sessions idle past the configured timeout. Returns how many went.
    pub fn prune_idle(&mut self, now: DateTime<Utc>) -> usize {
        let timeout_min = self.limits.idle_timeout_minutes as i64;
        if timeout_min == 0 {
            return 0;
        }
        let cutoff = now - Duration::minutes(timeout_min);
        let before = self.sessions.len();
        self.sessions.retain(|id, s| {
            let keep = !s.is_idle_since(cutoff);
            if !keep {
                info!("Session {} expired after {} min idle", id, timeout_min);
            }
            keep
        });
        before - self.sessions.len()
    }

    pub fn get(&self, id: &str) -> Option<&GameSession> {
        self.sessions.get(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
