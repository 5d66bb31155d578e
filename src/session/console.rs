//! Menu-driven console game.
//!
//! Generic over the reader and writer so the binary hands it stdin/stdout
//! and tests hand it a `Cursor` and a `Vec<u8>`. Every prompt re-asks until
//! it gets one of the listed choices; end of input ends the game as if the
//! player had quit.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use super::render;
use crate::config::GameConfig;
use crate::game::catalog::LocationId;
use crate::game::combat::{self, CombatEvent, CombatInstance, CombatState, TurnAction};
use crate::game::errors::GameError;
use crate::game::player::Player;
use crate::game::rng::RandomSource;
use crate::game::{encounter, items, shop};
use crate::validation::{escape_log, normalize_player_name};

const SEPARATOR: &str = "============================================================";

pub struct ConsoleShell<R, W> {
    input: R,
    output: W,
    rules: GameConfig,
    active: bool,
}

impl<R: BufRead, W: Write> ConsoleShell<R, W> {
    pub fn new(input: R, output: W, rules: GameConfig) -> Self {
        ConsoleShell {
            input,
            output,
            rules,
            active: true,
        }
    }

    /// Play one game to the end and return the final player.
    ///
    /// `preset_name` skips the name prompt (the binary's `--name`).
    pub fn run(
        mut self,
        preset_name: Option<String>,
        rng: &mut dyn RandomSource,
    ) -> io::Result<Player> {
        writeln!(self.output, "{}", SEPARATOR)?;
        writeln!(self.output, "{}", render::TITLE)?;
        writeln!(self.output, "A Fantasy-Style Text Adventure Game")?;
        writeln!(self.output, "{}", SEPARATOR)?;
        writeln!(self.output, "{}\n", render::intro_text())?;

        let raw = match preset_name {
            Some(n) => n,
            None => {
                write!(self.output, "Enter your adventurer's name: ")?;
                self.output.flush()?;
                self.read_line()?.unwrap_or_default()
            }
        };
        let name = normalize_player_name(
            &raw,
            &self.rules.default_player_name,
            self.rules.max_name_length,
        );
        let mut player = crate::game::start_game(name);
        writeln!(
            self.output,
            "\nWelcome, {}! Your quest begins in the Village of Elderbrook.",
            player.name
        )?;
        writeln!(
            self.output,
            "You start with a Rusty Dagger and {} gold coins.",
            player.gold()
        )?;

        while self.active && !player.is_defeated() {
            writeln!(self.output, "\n--- What would you like to do? ---")?;
            writeln!(self.output, "1. Explore a location")?;
            writeln!(self.output, "2. Check status")?;
            writeln!(self.output, "3. Visit shop")?;
            writeln!(self.output, "4. Use item")?;
            writeln!(self.output, "5. Quit game")?;
            let Some(choice) = self.choose("Enter your choice (1-5): ", &["1", "2", "3", "4", "5"])?
            else {
                break;
            };
            match choice.as_str() {
                "1" => self.explore_menu(&mut player, rng)?,
                "2" => writeln!(self.output, "\n{}", render::full_status(&player))?,
                "3" => self.shop_menu(&mut player)?,
                "4" => self.item_menu(&mut player)?,
                _ => {
                    let confirm =
                        self.choose("Are you sure you want to quit? (yes/no): ", &["yes", "no"])?;
                    if confirm.as_deref() != Some("no") {
                        self.active = false;
                    }
                }
            }
        }

        self.end_game(&player)?;
        Ok(player)
    }

    fn explore_menu(&mut self, player: &mut Player, rng: &mut dyn RandomSource) -> io::Result<()> {
        writeln!(self.output, "\n--- Available Locations ---")?;
        let mut valid: Vec<String> = Vec::new();
        for (i, loc) in LocationId::ALL.iter().enumerate() {
            let marker = if player.has_visited(*loc) {
                " (Visited)"
            } else {
                ""
            };
            writeln!(self.output, "{}. {}{}", i + 1, loc.info().name, marker)?;
            valid.push((i + 1).to_string());
        }
        let back = (LocationId::ALL.len() + 1).to_string();
        writeln!(self.output, "{}. Go back", back)?;
        valid.push(back.clone());

        let refs: Vec<&str> = valid.iter().map(String::as_str).collect();
        let Some(choice) = self.choose("Where would you like to go? ", &refs)? else {
            return Ok(());
        };
        if choice == back {
            return Ok(());
        }
        let location = match choice.parse::<usize>() {
            Ok(n) if n >= 1 && n <= LocationId::ALL.len() => LocationId::ALL[n - 1],
            _ => return Ok(()),
        };

        writeln!(self.output, "\n{}", SEPARATOR)?;
        let result = match encounter::explore(player, location, rng) {
            Ok(r) => r,
            Err(e) => return writeln!(self.output, "{}", render::error_message(&e)),
        };
        writeln!(self.output, "{}", render::encounter(&result))?;

        if let Some(enemy) = result.fight {
            match combat::begin_combat(player, enemy) {
                Ok(fight) => self.fight(player, fight, rng)?,
                Err(e) => writeln!(self.output, "{}", render::error_message(&e))?,
            }
        }
        Ok(())
    }

    fn fight(
        &mut self,
        player: &mut Player,
        mut fight: CombatInstance,
        rng: &mut dyn RandomSource,
    ) -> io::Result<()> {
        writeln!(self.output, "\n--- Battle with {} ---", fight.enemy_name)?;
        writeln!(self.output, "{} Health: {}", fight.enemy_name, fight.enemy_health)?;

        while !fight.is_over() {
            writeln!(
                self.output,
                "\nYour Health: {} | {} Health: {}",
                player.health(),
                fight.enemy_name,
                fight.enemy_health
            )?;
            writeln!(self.output, "1. Attack")?;
            writeln!(self.output, "2. Use Health Potion")?;
            writeln!(self.output, "3. Flee")?;
            let Some(choice) = self.choose("Choose your action: ", &["1", "2", "3"])? else {
                debug!("input ended mid-battle with {}", fight.enemy_name);
                self.active = false;
                return Ok(());
            };
            let action = match choice.as_str() {
                "1" => TurnAction::Attack,
                "2" => TurnAction::UseHealthPotion,
                _ => TurnAction::Flee,
            };
            let report = match combat::resolve_turn(player, &mut fight, action, rng) {
                Ok(r) => r,
                Err(GameError::NoPotionAvailable) => {
                    writeln!(self.output, "{}", render::error_message(&GameError::NoPotionAvailable))?;
                    continue;
                }
                Err(e) => {
                    writeln!(self.output, "{}", render::error_message(&e))?;
                    return Ok(());
                }
            };
            writeln!(self.output, "{}", render::turn(&report, &fight.enemy_name))?;

            if report.state == CombatState::Victory
                && report.events.contains(&CombatEvent::DragonSlain)
            {
                writeln!(self.output, "\n*** CONGRATULATIONS! YOU HAVE COMPLETED THE QUEST! ***")?;
                let more =
                    self.choose("\nWould you like to continue exploring? (yes/no): ", &["yes", "no"])?;
                if more.as_deref() != Some("yes") {
                    self.active = false;
                }
            }
        }
        Ok(())
    }

    fn shop_menu(&mut self, player: &mut Player) -> io::Result<()> {
        writeln!(self.output, "\n--- Welcome to the Village Shop ---")?;
        writeln!(self.output, "Your gold: {}\n", player.gold())?;
        let wares = shop::catalog();
        let mut valid: Vec<String> = Vec::new();
        for (i, item) in wares.iter().enumerate() {
            writeln!(
                self.output,
                "{}. {} - {} gold ({})",
                i + 1,
                item.name,
                item.price,
                item.summary
            )?;
            valid.push((i + 1).to_string());
        }
        let leave = (wares.len() + 1).to_string();
        writeln!(self.output, "{}. Leave shop", leave)?;
        valid.push(leave.clone());

        let refs: Vec<&str> = valid.iter().map(String::as_str).collect();
        let Some(choice) = self.choose("What would you like to buy? ", &refs)? else {
            return Ok(());
        };
        if choice == leave {
            return writeln!(self.output, "Thanks for visiting!");
        }
        let Some(item) = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| wares.get(i))
        else {
            return Ok(());
        };
        match shop::purchase(player, item.id) {
            Ok(p) => writeln!(self.output, "You purchased {}!", p.item.name),
            Err(e) => writeln!(self.output, "{}", render::error_message(&e)),
        }
    }

    fn item_menu(&mut self, player: &mut Player) -> io::Result<()> {
        if player.inventory().is_empty() {
            return writeln!(self.output, "\nYour inventory is empty!");
        }
        writeln!(self.output, "\n--- Your Inventory ---")?;
        let usable: Vec<String> = items::usable_items(player)
            .into_iter()
            .map(str::to_string)
            .collect();
        if usable.is_empty() {
            writeln!(self.output, "You have no usable items.")?;
            return writeln!(self.output, "{}", render::inventory_line(player));
        }
        let mut valid: Vec<String> = Vec::new();
        for (i, name) in usable.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, name)?;
            valid.push((i + 1).to_string());
        }
        let cancel = (usable.len() + 1).to_string();
        writeln!(self.output, "{}. Cancel", cancel)?;
        valid.push(cancel.clone());

        let refs: Vec<&str> = valid.iter().map(String::as_str).collect();
        let Some(choice) = self.choose("Which item would you like to use? ", &refs)? else {
            return Ok(());
        };
        if choice == cancel {
            return Ok(());
        }
        let Some(name) = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| usable.get(i))
        else {
            return Ok(());
        };
        match items::use_item(player, name) {
            Ok(used) => writeln!(
                self.output,
                "You drink a {} and recover {} health!",
                used.item, used.healed
            ),
            Err(e) => writeln!(self.output, "{}", render::error_message(&e)),
        }
    }

    fn end_game(&mut self, player: &Player) -> io::Result<()> {
        info!(
            "console game over for {} (dragon defeated: {})",
            escape_log(&player.name),
            player.dragon_defeated()
        );
        writeln!(self.output, "\n{}", SEPARATOR)?;
        writeln!(self.output, "Thank you for playing THE REALM OF SHADOWMERE!")?;
        writeln!(self.output, "\n--- Final Stats ---")?;
        writeln!(self.output, "{}", render::full_status(player))?;
        writeln!(self.output, "{}", SEPARATOR)?;
        self.output.flush()
    }

    /// Prompt until one of `valid` is entered; `None` at end of input.
    fn choose(&mut self, prompt: &str, valid: &[&str]) -> io::Result<Option<String>> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(None);
            };
            let answer = line.trim().to_lowercase();
            if valid.contains(&answer.as_str()) {
                return Ok(Some(answer));
            }
            writeln!(
                self.output,
                "Invalid choice. Please enter one of: {}",
                valid.join(", ")
            )?;
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }
}
