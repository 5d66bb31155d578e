//! Player stat model.
//!
//! Plain data plus small mutators. All mutators keep `health <= max_health`
//! and never let gold go negative; the failing ones leave the player as it
//! was.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::catalog::{LocationId, CRYSTAL_SWORD, RUSTY_DAGGER};
use super::errors::GameError;

pub const STARTING_HEALTH: u32 = 100;
pub const STARTING_ATTACK: u32 = 10;
pub const STARTING_DEFENSE: u32 = 5;
pub const STARTING_GOLD: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    health: u32,
    max_health: u32,
    attack: u32,
    defense: u32,
    gold: u32,
    inventory: Vec<String>,
    locations_visited: BTreeSet<LocationId>,
    dragon_defeated: bool,
}

impl Player {
    /// Fresh adventurer with the default stat line and a Rusty Dagger.
    pub fn new(name: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            health: STARTING_HEALTH,
            max_health: STARTING_HEALTH,
            attack: STARTING_ATTACK,
            defense: STARTING_DEFENSE,
            gold: STARTING_GOLD,
            inventory: vec![RUSTY_DAGGER.to_string()],
            locations_visited: BTreeSet::new(),
            dragon_defeated: false,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }
    pub fn max_health(&self) -> u32 {
        self.max_health
    }
    pub fn attack(&self) -> u32 {
        self.attack
    }
    pub fn defense(&self) -> u32 {
        self.defense
    }
    pub fn gold(&self) -> u32 {
        self.gold
    }
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }
    pub fn locations_visited(&self) -> &BTreeSet<LocationId> {
        &self.locations_visited
    }
    pub fn dragon_defeated(&self) -> bool {
        self.dragon_defeated
    }

    /// Health 0 is terminal.
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    pub fn is_at_full_health(&self) -> bool {
        self.health >= self.max_health
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|i| i == name)
    }

    pub fn item_count(&self, name: &str) -> usize {
        self.inventory.iter().filter(|i| *i == name).count()
    }

    pub fn has_crystal_sword(&self) -> bool {
        self.has_item(CRYSTAL_SWORD)
    }

    /// Subtract `amount` from health, stopping at zero.
    pub fn apply_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Subtract `amount` from health but never go below `floor`.
    ///
    /// A player already under the floor is lifted to it, capped at max
    /// health. Returns the resulting health.
    pub fn apply_floored_damage(&mut self, amount: u32, floor: u32) -> u32 {
        self.health = self
            .health
            .saturating_sub(amount)
            .max(floor)
            .min(self.max_health);
        self.health
    }

    /// Heal up to `amount`; returns what was actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.health - before
    }

    pub fn grant_item(&mut self, name: impl Into<String>) {
        self.inventory.push(name.into());
    }

    /// Remove exactly one occurrence of `name`.
    pub fn consume_item(&mut self, name: &str) -> Result<(), GameError> {
        let pos = self
            .inventory
            .iter()
            .position(|i| i == name)
            .ok_or_else(|| GameError::ItemNotFound(name.to_string()))?;
        self.inventory.remove(pos);
        Ok(())
    }

    pub fn spend_gold(&mut self, amount: u32) -> Result<(), GameError> {
        if self.gold < amount {
            return Err(GameError::InsufficientFunds {
                needed: amount,
                available: self.gold,
            });
        }
        self.gold -= amount;
        Ok(())
    }

    pub fn grant_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    pub fn increase_attack(&mut self, delta: u32) {
        self.attack = self.attack.saturating_add(delta);
    }

    pub fn increase_defense(&mut self, delta: u32) {
        self.defense = self.defense.saturating_add(delta);
    }

    /// Raise max health and heal by the same delta.
    pub fn increase_max_health(&mut self, delta: u32) {
        self.max_health = self.max_health.saturating_add(delta);
        self.heal(delta);
    }

    /// Record a visit; returns true on the first one.
    pub fn visit(&mut self, location: LocationId) -> bool {
        self.locations_visited.insert(location)
    }

    pub fn has_visited(&self, location: LocationId) -> bool {
        self.locations_visited.contains(&location)
    }

    pub fn mark_dragon_defeated(&mut self) {
        self.dragon_defeated = true;
    }
}
