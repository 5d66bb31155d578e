//! Using inventory items outside of combat.

use super::catalog::HEALTH_POTION;
use super::combat::POTION_HEAL;
use super::errors::GameError;
use super::player::Player;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUse {
    pub item: String,
    pub healed: u32,
}

/// Names of inventory entries that [`use_item`] accepts, one per copy.
pub fn usable_items(player: &Player) -> Vec<&str> {
    player
        .inventory()
        .iter()
        .map(String::as_str)
        .filter(|name| *name == HEALTH_POTION)
        .collect()
}

/// Use one copy of `name`. Only Health Potions have an effect; drinking
/// one at full health is refused so it is not wasted.
pub fn use_item(player: &mut Player, name: &str) -> Result<ItemUse, GameError> {
    let name = canonical_name(player, name)
        .ok_or_else(|| GameError::ItemNotFound(name.trim().to_string()))?;
    if name != HEALTH_POTION {
        return Err(GameError::ItemNotUsable(name));
    }
    if player.is_at_full_health() {
        return Err(GameError::HealthAlreadyFull);
    }
    player.consume_item(&name)?;
    let healed = player.heal(POTION_HEAL);
    Ok(ItemUse { item: name, healed })
}

// Case-insensitive lookup so shells can pass user input straight through;
// "potion" is accepted as shorthand for the Health Potion.
fn canonical_name(player: &Player, raw: &str) -> Option<String> {
    let wanted = raw.trim().to_lowercase();
    let wanted = if wanted == "potion" {
        HEALTH_POTION.to_lowercase()
    } else {
        wanted
    };
    player
        .inventory()
        .iter()
        .find(|i| i.to_lowercase() == wanted)
        .cloned()
}
