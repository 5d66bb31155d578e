use thiserror::Error;

/// Errors returned by the game core.
///
/// Every variant is recoverable: the operation that produced it left the
/// player and combat state untouched, and the shell decides how to word it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Purchase attempted without enough gold.
    #[error("insufficient funds: need {needed} gold, have {available}")]
    InsufficientFunds { needed: u32, available: u32 },

    /// Consuming an item that is not in the inventory.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// Drinking a potion in combat with none left.
    #[error("no health potion available")]
    NoPotionAvailable,

    /// Unrecognized shop item identifier.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// Unrecognized enemy identifier.
    #[error("unknown enemy: {0}")]
    UnknownEnemy(String),

    /// Unrecognized location identifier.
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// Using a healing item at full health.
    #[error("health is already full")]
    HealthAlreadyFull,

    /// The item exists but has no use effect (equipment, keepsakes).
    #[error("item cannot be used: {0}")]
    ItemNotUsable(String),

    /// A fight gated on an item the player does not carry.
    #[error("{enemy} cannot be fought without the {item}")]
    RequiredItemMissing { enemy: &'static str, item: &'static str },

    /// A one-time fight that has already been won.
    #[error("{0} has already been defeated")]
    EnemyAlreadyDefeated(&'static str),

    /// A turn was issued against a finished combat.
    #[error("combat is already over")]
    CombatOver,

    /// The player has fallen and can no longer act.
    #[error("the player has been defeated")]
    PlayerDefeated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_funds_mentions_amounts() {
        let err = GameError::InsufficientFunds {
            needed: 40,
            available: 12,
        };
        let text = err.to_string();
        assert!(text.contains("40"));
        assert!(text.contains("12"));
    }

    #[test]
    fn required_item_display() {
        let err = GameError::RequiredItemMissing {
            enemy: "Dragon of Shadowmere",
            item: "Crystal Sword",
        };
        assert_eq!(
            err.to_string(),
            "Dragon of Shadowmere cannot be fought without the Crystal Sword"
        );
    }
}
