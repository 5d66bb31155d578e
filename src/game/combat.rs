//! Turn-based combat resolution.
//!
//! A [`CombatInstance`] is a small state machine: it starts `InProgress` and
//! each call to [`resolve_turn`] applies one player action, then (unless the
//! fight already ended) one enemy counter-attack. Input acquisition is the
//! shell's job; the resolver is re-invoked with the next action.
//!
//! Turn order:
//! - `Flee`: a unit draw above 0.3 escapes at once; otherwise the enemy
//!   still attacks.
//! - `UseHealthPotion`: consumes one potion and heals 30, then the enemy
//!   attacks. Without a potion the turn is rejected and nothing happens.
//! - `Attack`: damage in `[atk-3, atk+5]`. A kill ends the fight before the
//!   enemy acts.
//! - Counter-attack: `[enemy_atk-2, enemy_atk+3]` minus defense, at least 1.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::catalog::{
    EnemyId, VictoryReward, CRYSTAL_SWORD, CRYSTAL_SWORD_ATTACK, HEALTH_POTION,
};
use super::errors::GameError;
use super::player::Player;
use super::rng::RandomSource;

/// Unit draws at or below this fail to escape.
pub const FLEE_THRESHOLD: f64 = 0.3;
/// Health restored by a potion.
pub const POTION_HEAL: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatState {
    InProgress,
    Victory,
    Defeat,
    Fled,
}

impl CombatState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, CombatState::InProgress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    Attack,
    UseHealthPotion,
    Flee,
}

/// State of one ongoing fight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatInstance {
    pub enemy: EnemyId,
    pub enemy_name: String,
    pub enemy_health: u32,
    pub enemy_attack: u32,
    pub gold_reward: u32,
    pub state: CombatState,
    /// Resolved turns, rejected potion turns excluded.
    pub turns: u32,
}

impl CombatInstance {
    fn from_template(enemy: EnemyId) -> Self {
        let t = enemy.template();
        CombatInstance {
            enemy,
            enemy_name: t.name.to_string(),
            enemy_health: t.health,
            enemy_attack: t.attack,
            gold_reward: t.gold_reward,
            state: CombatState::InProgress,
            turns: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }
}

/// Something that happened during a turn, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatEvent {
    PlayerStrike { damage: u32, enemy_health: u32 },
    PotionDrunk { healed: u32 },
    EscapeFailed,
    Escaped,
    EnemyStrike { damage: u32, player_health: u32 },
    EnemyDefeated { gold: u32 },
    CrystalSwordClaimed { attack_bonus: u32 },
    DragonSlain,
    PlayerDefeated,
}

impl CombatEvent {
    pub fn describe(&self, enemy: &str) -> String {
        match *self {
            CombatEvent::PlayerStrike { damage, .. } => {
                format!("You strike the {} for {} damage!", enemy, damage)
            }
            CombatEvent::PotionDrunk { healed } => {
                format!("You drink a Health Potion and recover {} health!", healed)
            }
            CombatEvent::EscapeFailed => "You failed to escape!".to_string(),
            CombatEvent::Escaped => "You successfully flee from battle!".to_string(),
            CombatEvent::EnemyStrike { damage, .. } => {
                format!("The {} attacks you for {} damage!", enemy, damage)
            }
            CombatEvent::EnemyDefeated { gold } => {
                format!("You defeated the {}! You earned {} gold!", enemy, gold)
            }
            CombatEvent::CrystalSwordClaimed { attack_bonus } => format!(
                "With the bat defeated, you pull the legendary CRYSTAL SWORD from its crystal! Attack +{}.",
                attack_bonus
            ),
            CombatEvent::DragonSlain => {
                "VICTORY! The Dragon of Shadowmere has been defeated! You are the hero of the realm!"
                    .to_string()
            }
            CombatEvent::PlayerDefeated => "You have been defeated! GAME OVER".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub action: TurnAction,
    pub events: Vec<CombatEvent>,
    pub state: CombatState,
}

/// Start a fight against `enemy`.
///
/// The dragon is gated: it needs the Crystal Sword and can only be slain
/// once.
pub fn begin_combat(player: &Player, enemy: EnemyId) -> Result<CombatInstance, GameError> {
    if player.is_defeated() {
        return Err(GameError::PlayerDefeated);
    }
    let template = enemy.template();
    if template.victory_reward == VictoryReward::DragonSlain {
        if player.dragon_defeated() {
            return Err(GameError::EnemyAlreadyDefeated(template.name));
        }
        if !player.has_crystal_sword() {
            return Err(GameError::RequiredItemMissing {
                enemy: template.name,
                item: CRYSTAL_SWORD,
            });
        }
    }
    debug!("combat begins: {} vs {}", player.name, template.name);
    Ok(CombatInstance::from_template(enemy))
}

/// Apply one turn action.
pub fn resolve_turn(
    player: &mut Player,
    combat: &mut CombatInstance,
    action: TurnAction,
    rng: &mut dyn RandomSource,
) -> Result<TurnReport, GameError> {
    if combat.is_over() {
        return Err(GameError::CombatOver);
    }
    if player.is_defeated() {
        return Err(GameError::PlayerDefeated);
    }

    let mut events = Vec::new();
    match action {
        TurnAction::Flee => {
            let r = rng.unit();
            debug!("flee draw {:.4} vs {}", r, FLEE_THRESHOLD);
            if r > FLEE_THRESHOLD {
                events.push(CombatEvent::Escaped);
                return Ok(finish_turn(combat, action, events, CombatState::Fled));
            }
            events.push(CombatEvent::EscapeFailed);
        }
        TurnAction::UseHealthPotion => {
            player
                .consume_item(HEALTH_POTION)
                .map_err(|_| GameError::NoPotionAvailable)?;
            let healed = player.heal(POTION_HEAL);
            events.push(CombatEvent::PotionDrunk { healed });
        }
        TurnAction::Attack => {
            let atk = player.attack();
            let damage = rng.roll(atk.saturating_sub(3), atk + 5);
            combat.enemy_health = combat.enemy_health.saturating_sub(damage);
            debug!(
                "player hits {} for {} ({} left)",
                combat.enemy_name, damage, combat.enemy_health
            );
            events.push(CombatEvent::PlayerStrike {
                damage,
                enemy_health: combat.enemy_health,
            });
            if combat.enemy_health == 0 {
                claim_victory(player, combat, &mut events);
                return Ok(finish_turn(combat, action, events, CombatState::Victory));
            }
        }
    }

    let roll = rng.roll(combat.enemy_attack.saturating_sub(2), combat.enemy_attack + 3);
    let damage = roll.saturating_sub(player.defense()).max(1);
    player.apply_damage(damage);
    debug!(
        "{} hits {} for {} (roll {}, {} left)",
        combat.enemy_name,
        player.name,
        damage,
        roll,
        player.health()
    );
    events.push(CombatEvent::EnemyStrike {
        damage,
        player_health: player.health(),
    });

    if player.is_defeated() {
        info!("{} was defeated by the {}", player.name, combat.enemy_name);
        events.push(CombatEvent::PlayerDefeated);
        return Ok(finish_turn(combat, action, events, CombatState::Defeat));
    }
    Ok(finish_turn(combat, action, events, CombatState::InProgress))
}

fn finish_turn(
    combat: &mut CombatInstance,
    action: TurnAction,
    events: Vec<CombatEvent>,
    state: CombatState,
) -> TurnReport {
    combat.turns += 1;
    combat.state = state;
    TurnReport {
        action,
        events,
        state,
    }
}

fn claim_victory(player: &mut Player, combat: &CombatInstance, events: &mut Vec<CombatEvent>) {
    player.grant_gold(combat.gold_reward);
    events.push(CombatEvent::EnemyDefeated {
        gold: combat.gold_reward,
    });
    info!(
        "{} defeated the {} (+{} gold)",
        player.name, combat.enemy_name, combat.gold_reward
    );
    match combat.enemy.template().victory_reward {
        VictoryReward::None => {}
        VictoryReward::CrystalSword => {
            if !player.has_crystal_sword() {
                player.grant_item(CRYSTAL_SWORD);
                player.increase_attack(CRYSTAL_SWORD_ATTACK);
                events.push(CombatEvent::CrystalSwordClaimed {
                    attack_bonus: CRYSTAL_SWORD_ATTACK,
                });
                info!("{} claimed the Crystal Sword", player.name);
            }
        }
        VictoryReward::DragonSlain => {
            player.mark_dragon_defeated();
            events.push(CombatEvent::DragonSlain);
            info!("{} slew the Dragon of Shadowmere", player.name);
        }
    }
}
