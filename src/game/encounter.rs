//! Location encounter dispatch.
//!
//! [`explore`] picks what happens at a location, applies any immediate
//! payoff (gold, healing, the dragon's repel damage) and names the fight to
//! start, if any. It never runs combat turns itself.

use log::{debug, info};
use std::fmt;

use super::catalog::{EnemyId, LocationId};
use super::errors::GameError;
use super::player::Player;
use super::rng::RandomSource;

/// Gold range handed out by a grateful villager on the first visit.
pub const VILLAGE_GIFT: (u32, u32) = (5, 15);
pub const FAIRY_HEAL: u32 = 20;
pub const FOREST_TREASURE: (u32, u32) = (10, 25);
/// Damage dealt by the dragon to an adventurer without the Crystal Sword.
pub const DRAGON_REPEL_DAMAGE: u32 = 40;
/// Health never drops below this when repelled by the dragon.
pub const DRAGON_REPEL_FLOOR: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ForestOutcome {
    Goblin,
    Fairy,
    Wolf,
    Treasure,
}

const FOREST_TABLE: [ForestOutcome; 4] = [
    ForestOutcome::Goblin,
    ForestOutcome::Fairy,
    ForestOutcome::Wolf,
    ForestOutcome::Treasure,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterEvent {
    SageAdvice { first_visit: bool },
    VillagerGift { gold: u32 },
    ForestVenture,
    FairyHeal { healed: u32 },
    TreasureFound { gold: u32 },
    Ambush(EnemyId),
    CaveExplored,
    CavePeaceful,
    DragonAlreadySlain,
    DragonAwakens,
    DragonRepels { damage: u32, health: u32 },
    SwordGlows,
}

impl fmt::Display for EncounterEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            EncounterEvent::SageAdvice { first_visit: true } => f.write_str(
                "The villagers greet you warmly. An old sage approaches you... \
                 \"Brave adventurer, to defeat the dragon you must first find the Crystal Sword \
                 hidden in the Crystal Cave. Without it, the dragon's scales cannot be pierced!\"",
            ),
            EncounterEvent::SageAdvice { first_visit: false } => f.write_str(
                "The peaceful village continues its daily routines. The old sage nods at you \
                 knowingly. \"Remember - the Crystal Sword is your key to victory!\"",
            ),
            EncounterEvent::VillagerGift { gold } => {
                write!(f, "A grateful villager gives you {} gold coins!", gold)
            }
            EncounterEvent::ForestVenture => f.write_str(
                "You venture deep into the forest. The trees seem to whisper ancient secrets...",
            ),
            EncounterEvent::FairyHeal { healed } => write!(
                f,
                "A friendly forest fairy sprinkles healing dust on you. You recovered {} health!",
                healed
            ),
            EncounterEvent::TreasureFound { gold } => write!(
                f,
                "You found a hidden treasure chest containing {} gold!",
                gold
            ),
            EncounterEvent::Ambush(EnemyId::Goblin) => {
                f.write_str("A wild Goblin leaps from the bushes!")
            }
            EncounterEvent::Ambush(EnemyId::Wolf) => f.write_str("A fierce Wolf blocks your path!"),
            EncounterEvent::Ambush(EnemyId::GiantBat) => f.write_str(
                "A Giant Bat swoops down from the darkness! You must defeat it to reach the legendary Crystal Sword!",
            ),
            EncounterEvent::Ambush(EnemyId::Dragon) => f.write_str(
                "The dragon recognizes the legendary blade and roars in fury!",
            ),
            EncounterEvent::CaveExplored => {
                f.write_str("The crystals illuminate your path as you explore the cave...")
            }
            EncounterEvent::CavePeaceful => f.write_str(
                "You've already claimed the Crystal Sword from this cave. The cave feels peaceful now.",
            ),
            EncounterEvent::DragonAlreadySlain => {
                f.write_str("The dragon has been defeated. Peace has returned to the lair.")
            }
            EncounterEvent::DragonAwakens => f.write_str(
                "THE DRAGON OF SHADOWMERE AWAKENS! Its massive form fills the cavern, scales glittering like obsidian.",
            ),
            EncounterEvent::DragonRepels { damage, health } => write!(
                f,
                "You don't have the Crystal Sword! Your attacks bounce harmlessly off the dragon's scales. \
                 You barely escape with your life! You took {} damage fleeing! Current health: {}",
                damage, health
            ),
            EncounterEvent::SwordGlows => f.write_str("Your Crystal Sword glows with ancient power!"),
        }
    }
}

/// What happened at a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterResult {
    pub location: LocationId,
    pub first_visit: bool,
    pub events: Vec<EncounterEvent>,
    /// Fight the shell should start with `begin_combat`.
    pub fight: Option<EnemyId>,
}

impl EncounterResult {
    pub fn narrative(&self) -> Vec<String> {
        self.events.iter().map(|e| e.to_string()).collect()
    }
}

/// Visit `location` and resolve its encounter.
pub fn explore(
    player: &mut Player,
    location: LocationId,
    rng: &mut dyn RandomSource,
) -> Result<EncounterResult, GameError> {
    if player.is_defeated() {
        return Err(GameError::PlayerDefeated);
    }
    let first_visit = player.visit(location);
    debug!(
        "{} explores {} (first visit: {})",
        player.name,
        location.as_str(),
        first_visit
    );

    let mut events = Vec::new();
    let mut fight = None;
    match location {
        LocationId::Village => {
            events.push(EncounterEvent::SageAdvice { first_visit });
            if first_visit {
                let gold = rng.roll(VILLAGE_GIFT.0, VILLAGE_GIFT.1);
                player.grant_gold(gold);
                events.push(EncounterEvent::VillagerGift { gold });
            }
        }
        LocationId::Forest => {
            events.push(EncounterEvent::ForestVenture);
            match FOREST_TABLE[rng.pick(FOREST_TABLE.len())] {
                ForestOutcome::Goblin => {
                    events.push(EncounterEvent::Ambush(EnemyId::Goblin));
                    fight = Some(EnemyId::Goblin);
                }
                ForestOutcome::Wolf => {
                    events.push(EncounterEvent::Ambush(EnemyId::Wolf));
                    fight = Some(EnemyId::Wolf);
                }
                ForestOutcome::Fairy => {
                    let healed = player.heal(FAIRY_HEAL);
                    events.push(EncounterEvent::FairyHeal { healed });
                }
                ForestOutcome::Treasure => {
                    let gold = rng.roll(FOREST_TREASURE.0, FOREST_TREASURE.1);
                    player.grant_gold(gold);
                    events.push(EncounterEvent::TreasureFound { gold });
                }
            }
        }
        LocationId::Cave => {
            events.push(EncounterEvent::CaveExplored);
            if player.has_crystal_sword() {
                events.push(EncounterEvent::CavePeaceful);
            } else {
                events.push(EncounterEvent::Ambush(EnemyId::GiantBat));
                fight = Some(EnemyId::GiantBat);
            }
        }
        LocationId::Dragon => {
            if player.dragon_defeated() {
                events.push(EncounterEvent::DragonAlreadySlain);
            } else if !player.has_crystal_sword() {
                events.push(EncounterEvent::DragonAwakens);
                let health =
                    player.apply_floored_damage(DRAGON_REPEL_DAMAGE, DRAGON_REPEL_FLOOR);
                info!("{} was repelled by the dragon (health {})", player.name, health);
                events.push(EncounterEvent::DragonRepels {
                    damage: DRAGON_REPEL_DAMAGE,
                    health,
                });
            } else {
                events.push(EncounterEvent::DragonAwakens);
                events.push(EncounterEvent::SwordGlows);
                events.push(EncounterEvent::Ambush(EnemyId::Dragon));
                fight = Some(EnemyId::Dragon);
            }
        }
    }

    Ok(EncounterResult {
        location,
        first_visit,
        events,
        fight,
    })
}
