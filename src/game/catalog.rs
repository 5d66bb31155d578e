//! Fixed catalogs: locations, enemy templates and shop items.
//!
//! Identifiers parse from the short ids the shells use (`forest`, `bat`,
//! `amulet`) and from the full display names, case-insensitively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::GameError;

pub const RUSTY_DAGGER: &str = "Rusty Dagger";
pub const HEALTH_POTION: &str = "Health Potion";
pub const IRON_SWORD: &str = "Iron Sword";
pub const LEATHER_SHIELD: &str = "Leather Shield";
pub const MAGIC_AMULET: &str = "Magic Amulet";
pub const CRYSTAL_SWORD: &str = "Crystal Sword";

/// Attack bonus granted together with the Crystal Sword.
pub const CRYSTAL_SWORD_ATTACK: u32 = 15;

fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace('\u{2019}', "'")
}

// ── Locations ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationId {
    Village,
    Forest,
    Cave,
    Dragon,
}

pub struct Location {
    pub id: LocationId,
    pub name: &'static str,
    pub description: &'static str,
}

impl LocationId {
    pub const ALL: [LocationId; 4] = [
        LocationId::Village,
        LocationId::Forest,
        LocationId::Cave,
        LocationId::Dragon,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LocationId::Village => "village",
            LocationId::Forest => "forest",
            LocationId::Cave => "cave",
            LocationId::Dragon => "dragon",
        }
    }

    pub fn info(self) -> Location {
        match self {
            LocationId::Village => Location {
                id: self,
                name: "Village of Elderbrook",
                description: "A peaceful village with cobblestone streets and friendly townsfolk. A tavern and shop stand nearby.",
            },
            LocationId::Forest => Location {
                id: self,
                name: "Whispering Forest",
                description: "A dark, mysterious forest where the trees seem to whisper ancient secrets. Danger lurks within.",
            },
            LocationId::Cave => Location {
                id: self,
                name: "Crystal Cave",
                description: "A cave filled with glowing crystals that illuminate the darkness. Strange creatures dwell here.",
            },
            LocationId::Dragon => Location {
                id: self,
                name: "Dragon's Lair",
                description: "The dreaded lair of the Dragon of Shadowmere. Only the bravest adventurers dare enter.",
            },
        }
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

impl FromStr for LocationId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "village" | "elderbrook" | "village of elderbrook" => Ok(LocationId::Village),
            "forest" | "whispering forest" => Ok(LocationId::Forest),
            "cave" | "crystal cave" => Ok(LocationId::Cave),
            "dragon" | "lair" | "dragon's lair" => Ok(LocationId::Dragon),
            _ => Err(GameError::UnknownLocation(s.trim().to_string())),
        }
    }
}

// ── Enemies ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyId {
    Goblin,
    Wolf,
    #[serde(rename = "bat")]
    GiantBat,
    Dragon,
}

/// Extra payoff applied when a fight against this enemy is won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VictoryReward {
    None,
    /// Grants the Crystal Sword and its attack bonus, once.
    CrystalSword,
    /// Marks the dragon as defeated for good.
    DragonSlain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyTemplate {
    pub id: EnemyId,
    pub name: &'static str,
    pub health: u32,
    pub attack: u32,
    pub gold_reward: u32,
    pub victory_reward: VictoryReward,
}

impl EnemyId {
    pub const ALL: [EnemyId; 4] = [
        EnemyId::Goblin,
        EnemyId::Wolf,
        EnemyId::GiantBat,
        EnemyId::Dragon,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EnemyId::Goblin => "goblin",
            EnemyId::Wolf => "wolf",
            EnemyId::GiantBat => "bat",
            EnemyId::Dragon => "dragon",
        }
    }

    pub fn template(self) -> EnemyTemplate {
        match self {
            EnemyId::Goblin => EnemyTemplate {
                id: self,
                name: "Goblin",
                health: 30,
                attack: 8,
                gold_reward: 10,
                victory_reward: VictoryReward::None,
            },
            EnemyId::Wolf => EnemyTemplate {
                id: self,
                name: "Wolf",
                health: 25,
                attack: 10,
                gold_reward: 8,
                victory_reward: VictoryReward::None,
            },
            EnemyId::GiantBat => EnemyTemplate {
                id: self,
                name: "Giant Bat",
                health: 35,
                attack: 12,
                gold_reward: 15,
                victory_reward: VictoryReward::CrystalSword,
            },
            EnemyId::Dragon => EnemyTemplate {
                id: self,
                name: "Dragon of Shadowmere",
                health: 100,
                attack: 20,
                gold_reward: 100,
                victory_reward: VictoryReward::DragonSlain,
            },
        }
    }
}

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template().name)
    }
}

impl FromStr for EnemyId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "goblin" => Ok(EnemyId::Goblin),
            "wolf" => Ok(EnemyId::Wolf),
            "bat" | "giant bat" => Ok(EnemyId::GiantBat),
            "dragon" | "dragon of shadowmere" => Ok(EnemyId::Dragon),
            _ => Err(GameError::UnknownEnemy(s.trim().to_string())),
        }
    }
}

// ── Shop items ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopItemId {
    Potion,
    Sword,
    Shield,
    Amulet,
}

/// Stat deltas applied when an item is bought.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemEffect {
    pub attack: u32,
    pub defense: u32,
    /// Raises max health and heals by the same amount.
    pub max_health: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopItem {
    pub id: ShopItemId,
    pub name: &'static str,
    pub price: u32,
    pub effect: ItemEffect,
    pub summary: &'static str,
}

impl ShopItemId {
    pub const ALL: [ShopItemId; 4] = [
        ShopItemId::Potion,
        ShopItemId::Sword,
        ShopItemId::Shield,
        ShopItemId::Amulet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShopItemId::Potion => "potion",
            ShopItemId::Sword => "sword",
            ShopItemId::Shield => "shield",
            ShopItemId::Amulet => "amulet",
        }
    }

    pub fn item(self) -> ShopItem {
        match self {
            ShopItemId::Potion => ShopItem {
                id: self,
                name: HEALTH_POTION,
                price: 15,
                effect: ItemEffect::default(),
                summary: "Restores 30 health",
            },
            ShopItemId::Sword => ShopItem {
                id: self,
                name: IRON_SWORD,
                price: 25,
                effect: ItemEffect {
                    attack: 5,
                    ..ItemEffect::default()
                },
                summary: "Increases attack by 5",
            },
            ShopItemId::Shield => ShopItem {
                id: self,
                name: LEATHER_SHIELD,
                price: 20,
                effect: ItemEffect {
                    defense: 3,
                    ..ItemEffect::default()
                },
                summary: "Increases defense by 3",
            },
            ShopItemId::Amulet => ShopItem {
                id: self,
                name: MAGIC_AMULET,
                price: 40,
                effect: ItemEffect {
                    max_health: 20,
                    ..ItemEffect::default()
                },
                summary: "Increases max health by 20",
            },
        }
    }
}

impl fmt::Display for ShopItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.item().name)
    }
}

impl FromStr for ShopItemId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "potion" | "health potion" => Ok(ShopItemId::Potion),
            "sword" | "iron sword" => Ok(ShopItemId::Sword),
            "shield" | "leather shield" => Ok(ShopItemId::Shield),
            "amulet" | "magic amulet" => Ok(ShopItemId::Amulet),
            _ => Err(GameError::UnknownItem(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_ids_and_names() {
        assert_eq!("Forest".parse::<LocationId>().unwrap(), LocationId::Forest);
        assert_eq!(
            "Dragon\u{2019}s Lair".parse::<LocationId>().unwrap(),
            LocationId::Dragon
        );
        assert_eq!("giant bat".parse::<EnemyId>().unwrap(), EnemyId::GiantBat);
        assert_eq!(" AMULET ".parse::<ShopItemId>().unwrap(), ShopItemId::Amulet);
    }

    #[test]
    fn unknown_ids_map_to_typed_errors() {
        assert_eq!(
            "swamp".parse::<LocationId>(),
            Err(GameError::UnknownLocation("swamp".into()))
        );
        assert_eq!(
            "troll".parse::<EnemyId>(),
            Err(GameError::UnknownEnemy("troll".into()))
        );
        assert_eq!(
            "bow".parse::<ShopItemId>(),
            Err(GameError::UnknownItem("bow".into()))
        );
    }

    #[test]
    fn ids_round_trip_through_as_str() {
        for id in LocationId::ALL {
            assert_eq!(id.as_str().parse::<LocationId>().unwrap(), id);
        }
        for id in EnemyId::ALL {
            assert_eq!(id.as_str().parse::<EnemyId>().unwrap(), id);
        }
        for id in ShopItemId::ALL {
            assert_eq!(id.as_str().parse::<ShopItemId>().unwrap(), id);
        }
    }

    #[test]
    fn only_bat_and_dragon_carry_rewards() {
        assert_eq!(EnemyId::Goblin.template().victory_reward, VictoryReward::None);
        assert_eq!(EnemyId::Wolf.template().victory_reward, VictoryReward::None);
        assert_eq!(
            EnemyId::GiantBat.template().victory_reward,
            VictoryReward::CrystalSword
        );
        assert_eq!(
            EnemyId::Dragon.template().victory_reward,
            VictoryReward::DragonSlain
        );
    }
}
