//! # Game Core
//!
//! The rules of the Realm of Shadowmere: the player stat model, combat
//! resolution, location encounters and the village shop.
//!
//! The core is stateless between calls. Every operation takes the state it
//! works on (`&Player`, `&mut CombatInstance`) and a [`RandomSource`] when it
//! needs dice, so any number of independent games can run side by side.
//!
//! ```rust
//! use shadowmere::game::{self, LocationId, StdRandom, TurnAction};
//!
//! let mut rng = StdRandom::seeded(7);
//! let mut player = game::start_game("Aria");
//! let result = game::explore(&mut player, LocationId::Cave, &mut rng).unwrap();
//! if let Some(enemy) = result.fight {
//!     let mut combat = game::begin_combat(&player, enemy).unwrap();
//!     while !combat.is_over() {
//!         game::resolve_turn(&mut player, &mut combat, TurnAction::Attack, &mut rng).unwrap();
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`player`] - stat model and inventory
//! - [`combat`] - combat state machine
//! - [`encounter`] - location encounter dispatch
//! - [`shop`] - purchases
//! - [`items`] - item use outside combat
//! - [`catalog`] - fixed locations, enemies and shop items
//! - [`rng`] - injectable random sources

pub mod catalog;
pub mod combat;
pub mod encounter;
pub mod errors;
pub mod items;
pub mod player;
pub mod rng;
pub mod shop;

pub use catalog::{EnemyId, EnemyTemplate, LocationId, ShopItem, ShopItemId};
pub use combat::{begin_combat, resolve_turn, CombatEvent, CombatInstance, CombatState, TurnAction, TurnReport};
pub use encounter::{explore, EncounterEvent, EncounterResult};
pub use errors::GameError;
pub use items::{use_item, ItemUse};
pub use player::Player;
pub use rng::{Draw, RandomSource, ScriptedRandom, StdRandom};
pub use shop::{purchase, Purchase};

/// New adventurer with default stats.
pub fn start_game(name: impl Into<String>) -> Player {
    let player = Player::new(name);
    log::debug!("new game for {}", crate::validation::escape_log(&player.name));
    player
}
