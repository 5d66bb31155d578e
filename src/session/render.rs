//! Plain-text rendering shared by the session and console shells.

use crate::game::catalog::LocationId;
use crate::game::combat::{CombatInstance, CombatState, TurnReport};
use crate::game::encounter::EncounterResult;
use crate::game::errors::GameError;
use crate::game::player::Player;
use crate::game::shop;

pub const TITLE: &str = "WELCOME TO THE REALM OF SHADOWMERE";

pub fn intro_text() -> &'static str {
    "In the land of Shadowmere, a fearsome dragon threatens the kingdom.\n\
     You are a brave adventurer chosen to defeat this ancient evil.\n\
     Explore the land, gather items, and prepare for the ultimate battle!"
}

pub fn help_text() -> &'static str {
    "Commands:\n\
     START <name> - begin a quest\n\
     GO <village|forest|cave|dragon> - explore\n\
     A attack | P potion | F flee (in battle)\n\
     SHOP - list wares | BUY <potion|sword|shield|amulet>\n\
     USE <item> - use an item | S status | RESET | ? help"
}

/// One-line stat summary.
pub fn status_line(p: &Player) -> String {
    format!(
        "{} HP {}/{} ATK {} DEF {} Gold {}",
        p.name,
        p.health(),
        p.max_health(),
        p.attack(),
        p.defense(),
        p.gold()
    )
}

pub fn inventory_line(p: &Player) -> String {
    if p.inventory().is_empty() {
        "Inventory: Empty".to_string()
    } else {
        format!("Inventory: {}", p.inventory().join(", "))
    }
}

pub fn quest_status(p: &Player) -> &'static str {
    if p.dragon_defeated() {
        "COMPLETED - Dragon Defeated!"
    } else {
        "Incomplete - The dragon still lives..."
    }
}

/// Multi-line status sheet.
pub fn full_status(p: &Player) -> String {
    let visited = if p.locations_visited().is_empty() {
        "None yet".to_string()
    } else {
        p.locations_visited()
            .iter()
            .map(|l| l.info().name)
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "--- {}'s Status ---\nHealth: {}/{}\nAttack: {} | Defense: {}\nGold: {}\n{}\nQuest: {}\nVisited: {}",
        p.name,
        p.health(),
        p.max_health(),
        p.attack(),
        p.defense(),
        p.gold(),
        inventory_line(p),
        quest_status(p),
        visited
    )
}

pub fn location_header(id: LocationId) -> String {
    let info = id.info();
    format!("[{}] {}", info.name, info.description)
}

pub fn encounter(result: &EncounterResult) -> String {
    let mut lines = vec![location_header(result.location)];
    lines.extend(result.narrative());
    lines.join("\n")
}

pub fn combat_prompt(c: &CombatInstance, p: &Player) -> String {
    format!(
        "--- Battle with {} ---\nYour Health: {} | {} Health: {}",
        c.enemy_name,
        p.health(),
        c.enemy_name,
        c.enemy_health
    )
}

pub fn turn(report: &TurnReport, enemy: &str) -> String {
    report
        .events
        .iter()
        .map(|e| e.describe(enemy))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn combat_closing(state: CombatState) -> Option<&'static str> {
    match state {
        CombatState::Victory => Some("The battle is won."),
        CombatState::Fled => Some("You return to safer ground."),
        CombatState::Defeat | CombatState::InProgress => None,
    }
}

pub fn shop_listing(gold: u32) -> String {
    let mut out = format!("--- Welcome to the Village Shop ---\nYour gold: {}", gold);
    for item in shop::catalog() {
        out.push_str(&format!(
            "\n{} ({}) - {} gold ({})",
            item.name,
            item.id.as_str(),
            item.price,
            item.summary
        ));
    }
    out
}

/// Player-facing wording for a rejected operation.
pub fn error_message(err: &GameError) -> String {
    match err {
        GameError::InsufficientFunds { needed, available } => format!(
            "You don't have enough gold! (need {}, have {})",
            needed, available
        ),
        GameError::ItemNotFound(name) => format!("You don't have a {}.", name),
        GameError::NoPotionAvailable => "You don't have any Health Potions!".to_string(),
        GameError::UnknownItem(name) => format!("The shop doesn't sell '{}'.", name),
        GameError::UnknownEnemy(name) => format!("There is no such foe as '{}'.", name),
        GameError::UnknownLocation(name) => format!("There is no place called '{}'.", name),
        GameError::HealthAlreadyFull => "Your health is already full!".to_string(),
        GameError::ItemNotUsable(name) => format!("The {} can't be used like that.", name),
        GameError::RequiredItemMissing { .. }
        | GameError::EnemyAlreadyDefeated(_)
        | GameError::CombatOver
        | GameError::PlayerDefeated => err.to_string(),
    }
}
