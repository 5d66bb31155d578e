//! # Shadowmere - a turn-based text adventure
//!
//! A small fantasy quest: explore the Village of Elderbrook, the Whispering
//! Forest, the Crystal Cave and the Dragon's Lair, buy gear, win the Crystal
//! Sword from the Giant Bat and slay the Dragon of Shadowmere.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shadowmere::config::Config;
//! use shadowmere::game::StdRandom;
//! use shadowmere::session::ConsoleShell;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await.unwrap_or_default();
//!     let stdin = std::io::stdin();
//!     let mut rng = StdRandom::from_entropy();
//!     let shell = ConsoleShell::new(stdin.lock(), std::io::stdout(), config.game);
//!     shell.run(None, &mut rng)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - rules: stat model, combat, encounters, shop
//! - [`session`] - console shell and the keyed per-session command shell
//! - [`config`] - TOML configuration
//! - [`validation`] - player name cleanup and log escaping
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ ConsoleShell / SessionManager│ ← input, rendering, per-game state
//! └──────────────────────────────┘
//!                │
//! ┌──────────────────────────────┐
//! │ explore / begin_combat /     │ ← stateless rules
//! │ resolve_turn / purchase      │
//! └──────────────────────────────┘
//!                │
//! ┌──────────────────────────────┐
//! │ Player + RandomSource        │ ← owned state, injected dice
//! └──────────────────────────────┘
//! ```

pub mod config;
pub mod game;
pub mod session;
pub mod validation;
