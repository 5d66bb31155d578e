//! # Presentation shells
//!
//! Two front ends over the same [`crate::game`] rules:
//!
//! - [`console::ConsoleShell`] drives one game through numbered menus on any
//!   reader/writer pair (stdin/stdout in the binary).
//! - [`manager::SessionManager`] keeps many independent games keyed by
//!   session id and answers one short text command at a time, the shape a
//!   web or chat host drives.
//!
//! ```rust
//! use shadowmere::config::Config;
//! use shadowmere::game::StdRandom;
//! use shadowmere::session::SessionManager;
//!
//! let mut sessions = SessionManager::new(&Config::default());
//! let mut rng = StdRandom::seeded(1);
//! let id = sessions.open().unwrap();
//! let reply = sessions.handle(&id, "START Aria", &mut rng).unwrap();
//! assert!(reply.contains("Welcome, Aria!"));
//! ```

pub mod commands;
pub mod console;
pub mod manager;
pub mod render;
pub mod state;

use thiserror::Error;

pub use commands::{parse_command, Command};
pub use console::ConsoleShell;
pub use manager::SessionManager;
pub use state::{GameSession, SessionPhase};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Unknown session: {0}")]
    UnknownSession(String),

    #[error("Session limit reached ({max} active)")]
    CapacityReached { max: usize },
}
