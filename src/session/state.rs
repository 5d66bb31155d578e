//! One player's game inside the session shell.
//!
//! A [`GameSession`] owns the player and the current combat (if any) and
//! turns one text command into one rendered reply. It is the per-request
//! shape of the game: a host looks the session up by id, calls
//! [`GameSession::handle`], and sends back the string.

use chrono::{DateTime, Utc};
use log::debug;

use super::commands::{parse_command, Command};
use super::render;
use crate::config::GameConfig;
use crate::game::catalog::LocationId;
use crate::game::combat::{self, CombatInstance, CombatState, TurnAction};
use crate::game::encounter;
use crate::game::player::Player;
use crate::game::rng::RandomSource;
use crate::game::{items, shop};
use crate::validation::{escape_log, normalize_player_name};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No quest yet; waiting for START.
    AwaitingName,
    Exploring,
    InCombat,
    /// The player has fallen; only RESET (or HELP) does anything.
    Fallen,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    pub id: String,
    player: Option<Player>,
    combat: Option<CombatInstance>,
    rules: GameConfig,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl GameSession {
    pub fn new(id: impl Into<String>, rules: GameConfig) -> Self {
        let now = Utc::now();
        GameSession {
            id: id.into(),
            player: None,
            combat: None,
            rules,
            created_at: now,
            last_activity: now,
        }
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn combat(&self) -> Option<&CombatInstance> {
        self.combat.as_ref()
    }

    pub fn phase(&self) -> SessionPhase {
        match (&self.player, &self.combat) {
            (None, _) => SessionPhase::AwaitingName,
            (Some(p), _) if p.is_defeated() => SessionPhase::Fallen,
            (Some(_), Some(c)) if !c.is_over() => SessionPhase::InCombat,
            _ => SessionPhase::Exploring,
        }
    }

    pub fn is_idle_since(&self, cutoff: DateTime<Utc>) -> bool {
        self.last_activity < cutoff
    }

    /// Apply one raw command and return the reply text.
    pub fn handle(&mut self, input: &str, rng: &mut dyn RandomSource) -> String {
        self.last_activity = Utc::now();
        let cmd = parse_command(input);
        debug!(
            "session {} cmd={:?} phase={:?}",
            self.id,
            escape_log(input),
            self.phase()
        );

        match cmd {
            Command::Help => return render::help_text().to_string(),
            Command::Reset => {
                self.player = None;
                self.combat = None;
                return "Game reset. START <name> to begin a new quest.".to_string();
            }
            _ => {}
        }

        match self.phase() {
            SessionPhase::AwaitingName => self.handle_awaiting(cmd),
            SessionPhase::Fallen => {
                "You have been defeated! GAME OVER. RESET to begin a new quest.".to_string()
            }
            SessionPhase::InCombat => self.handle_combat(cmd, rng),
            SessionPhase::Exploring => self.handle_exploring(cmd, rng),
        }
    }

    fn handle_awaiting(&mut self, cmd: Command) -> String {
        match cmd {
            Command::Start(raw) => {
                let name = normalize_player_name(
                    &raw,
                    &self.rules.default_player_name,
                    self.rules.max_name_length,
                );
                let player = crate::game::start_game(name);
                let reply = format!(
                    "{}\n{}\nWelcome, {}! Your quest begins in the Village of Elderbrook.\n{}",
                    render::TITLE,
                    render::intro_text(),
                    player.name,
                    render::status_line(&player)
                );
                self.player = Some(player);
                self.combat = None;
                reply
            }
            _ => "Enter START <name> to begin your quest.".to_string(),
        }
    }

    fn handle_exploring(&mut self, cmd: Command, rng: &mut dyn RandomSource) -> String {
        let Some(player) = self.player.as_mut() else {
            return "Enter START <name> to begin your quest.".to_string();
        };
        match cmd {
            Command::Go(raw) => {
                let location = match raw.parse::<LocationId>() {
                    Ok(l) => l,
                    Err(e) => return render::error_message(&e),
                };
                let result = match encounter::explore(player, location, rng) {
                    Ok(r) => r,
                    Err(e) => return render::error_message(&e),
                };
                let mut out = render::encounter(&result);
                if let Some(enemy) = result.fight {
                    match combat::begin_combat(player, enemy) {
                        Ok(c) => {
                            out.push('\n');
                            out.push_str(&render::combat_prompt(&c, player));
                            out.push_str("\nA=attack P=potion F=flee");
                            self.combat = Some(c);
                        }
                        Err(e) => {
                            out.push('\n');
                            out.push_str(&render::error_message(&e));
                        }
                    }
                } else {
                    self.combat = None;
                }
                out.push('\n');
                out.push_str(&render::status_line(player));
                out
            }
            Command::Shop => render::shop_listing(player.gold()),
            Command::Buy(raw) => match shop::purchase_by_name(player, &raw) {
                Ok(receipt) => format!(
                    "Purchased {}! Gold left: {}",
                    receipt.item.name, receipt.gold_left
                ),
                Err(e) => render::error_message(&e),
            },
            Command::Use(raw) => match items::use_item(player, &raw) {
                Ok(used) => format!(
                    "You use the {} and recover {} health!\n{}",
                    used.item,
                    used.healed,
                    render::status_line(player)
                ),
                Err(e) => render::error_message(&e),
            },
            Command::Potion => match items::use_item(player, "potion") {
                Ok(used) => format!(
                    "You drink a Health Potion and recover {} health!\n{}",
                    used.healed,
                    render::status_line(player)
                ),
                Err(e) => render::error_message(&e),
            },
            Command::Status => render::full_status(player),
            Command::Attack | Command::Flee => "There is nothing to fight here.".to_string(),
            Command::Start(_) => "A quest is already underway. RESET to start over.".to_string(),
            Command::Unknown(_) | Command::Help | Command::Reset => {
                "Unknown command. Send ? for help.".to_string()
            }
        }
    }

    fn handle_combat(&mut self, cmd: Command, rng: &mut dyn RandomSource) -> String {
        let (Some(player), Some(fight)) = (self.player.as_mut(), self.combat.as_mut()) else {
            return "There is nothing to fight here.".to_string();
        };
        let action = match cmd {
            Command::Attack => TurnAction::Attack,
            Command::Potion => TurnAction::UseHealthPotion,
            Command::Use(ref raw) if raw.to_lowercase().contains("potion") => {
                TurnAction::UseHealthPotion
            }
            Command::Flee => TurnAction::Flee,
            Command::Status => {
                return format!(
                    "{}\n{}",
                    render::full_status(player),
                    render::combat_prompt(fight, player)
                )
            }
            _ => {
                return format!(
                    "You are in battle with the {}! A=attack P=potion F=flee",
                    fight.enemy_name
                )
            }
        };

        let report = match combat::resolve_turn(player, fight, action, rng) {
            Ok(r) => r,
            Err(e) => return render::error_message(&e),
        };
        let mut out = render::turn(&report, &fight.enemy_name);
        match report.state {
            CombatState::InProgress => {
                out.push('\n');
                out.push_str(&render::combat_prompt(fight, player));
                out.push_str("\nA=attack P=potion F=flee");
            }
            CombatState::Defeat => {
                out.push_str("\nRESET to begin a new quest.");
                self.combat = None;
            }
            CombatState::Victory | CombatState::Fled => {
                if let Some(closing) = render::combat_closing(report.state) {
                    out.push('\n');
                    out.push_str(closing);
                }
                out.push('\n');
                out.push_str(&render::status_line(player));
                self.combat = None;
            }
        }
        out
    }
}
