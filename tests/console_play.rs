use std::io::Cursor;

use shadowmere::config::GameConfig;
use shadowmere::game::{Player, RandomSource, ScriptedRandom};
use shadowmere::session::ConsoleShell;

fn play(script: &str, name: Option<&str>, rng: &mut dyn RandomSource) -> (Player, String) {
    let mut out = Vec::new();
    let shell = ConsoleShell::new(Cursor::new(script.to_string()), &mut out, GameConfig::default());
    let player = shell.run(name.map(str::to_string), rng).unwrap();
    (player, String::from_utf8(out).unwrap())
}

#[test]
fn dragon_lair_without_sword_from_the_console() {
    let mut rng = ScriptedRandom::default();
    // explore -> Dragon's Lair, explore again -> go back, quit
    let (player, out) = play("Aria\n1\n4\n1\n5\n5\nyes\n", None, &mut rng);

    assert_eq!(player.health(), 60);
    assert!(!player.dragon_defeated());
    assert!(out.contains("You took 40 damage fleeing! Current health: 60"));
    assert!(out.contains("4. Dragon's Lair (Visited)"));
    assert!(out.contains("Quest: Incomplete - The dragon still lives..."));
}

#[test]
fn preset_name_skips_the_prompt() {
    let mut rng = ScriptedRandom::default();
    let (player, out) = play("5\nyes\n", Some("  Sir   Brave "), &mut rng);
    assert_eq!(player.name, "Sir Brave");
    assert!(!out.contains("Enter your adventurer's name"));
}

#[test]
fn cave_battle_claims_the_crystal_sword() {
    let mut rng = ScriptedRandom::default();
    // explore -> cave, five attacks, check status, quit
    let (player, out) = play("Aria\n1\n3\n1\n1\n1\n1\n1\n2\n5\nyes\n", None, &mut rng);

    assert!(player.has_crystal_sword());
    assert_eq!(player.attack(), 25);
    assert_eq!(player.gold(), 35);
    assert!(out.contains("--- Battle with Giant Bat ---"));
    assert!(out.contains("legendary CRYSTAL SWORD"));
}

#[test]
fn slaying_the_dragon_asks_to_continue() {
    let mut rng = ScriptedRandom::default();
    // cave: five attacks; lair: five attacks; decline to continue
    let script = "Aria\n1\n3\n1\n1\n1\n1\n1\n1\n4\n1\n1\n1\n1\n1\nno\n";
    let (player, out) = play(script, None, &mut rng);

    assert!(player.dragon_defeated());
    assert!(out.contains("CONGRATULATIONS! YOU HAVE COMPLETED THE QUEST!"));
    assert!(out.contains("Would you like to continue exploring?"));
    assert!(out.contains("Quest: COMPLETED - Dragon Defeated!"));
    assert!(!out.contains("Are you sure you want to quit?"));
}

#[test]
fn potion_choice_without_potion_keeps_the_turn() {
    let mut rng = ScriptedRandom::default();
    // explore -> cave, try a potion, then run out of input mid-fight
    let (player, out) = play("Aria\n1\n3\n2\n", None, &mut rng);
    assert!(out.contains("You don't have any Health Potions!"));
    assert_eq!(player.health(), 100);
    assert!(out.contains("Thank you for playing"));
}
