use shadowmere::game::{
    self, begin_combat, explore, resolve_turn, CombatState, EncounterEvent, EnemyId, GameError,
    LocationId, Player, ScriptedRandom, ShopItemId, TurnAction,
};

fn win(player: &mut Player, enemy: EnemyId, rng: &mut ScriptedRandom) -> CombatState {
    let mut fight = begin_combat(player, enemy).unwrap();
    while !fight.is_over() {
        resolve_turn(player, &mut fight, TurnAction::Attack, rng).unwrap();
    }
    fight.state
}

#[test]
fn dragon_without_sword_is_a_forced_retreat() {
    let mut player = game::start_game("Aria");
    let mut rng = ScriptedRandom::default();

    let result = explore(&mut player, LocationId::Dragon, &mut rng).unwrap();
    assert_eq!(player.health(), 60);
    assert!(!player.dragon_defeated());
    assert!(result.fight.is_none());
    assert!(result.events.contains(&EncounterEvent::DragonRepels {
        damage: 40,
        health: 60
    }));
    assert!(player.has_visited(LocationId::Dragon));
    assert_eq!(
        begin_combat(&player, EnemyId::Dragon).unwrap_err(),
        GameError::RequiredItemMissing {
            enemy: "Dragon of Shadowmere",
            item: "Crystal Sword"
        }
    );
}

#[test]
fn dragon_repel_never_drops_below_ten() {
    let mut player = game::start_game("Aria");
    let mut rng = ScriptedRandom::default();
    for expected in [60, 20, 10, 10] {
        explore(&mut player, LocationId::Dragon, &mut rng).unwrap();
        assert_eq!(player.health(), expected);
    }

    let mut weak = game::start_game("Weak");
    weak.apply_damage(95);
    explore(&mut weak, LocationId::Dragon, &mut rng).unwrap();
    assert_eq!(weak.health(), 10);
}

#[test]
fn full_quest_bat_then_dragon() {
    let mut player = game::start_game("Aria");
    let mut rng = ScriptedRandom::default();

    let cave = explore(&mut player, LocationId::Cave, &mut rng).unwrap();
    assert_eq!(cave.fight, Some(EnemyId::GiantBat));
    assert_eq!(win(&mut player, EnemyId::GiantBat, &mut rng), CombatState::Victory);
    assert!(player.has_crystal_sword());
    assert_eq!(player.attack(), 25);
    // five swings at 7, four bat hits of 10 - 5
    assert_eq!(player.health(), 80);
    assert_eq!(player.gold(), 35);

    let lair = explore(&mut player, LocationId::Dragon, &mut rng).unwrap();
    assert_eq!(lair.fight, Some(EnemyId::Dragon));
    assert!(lair.events.contains(&EncounterEvent::SwordGlows));
    assert_eq!(win(&mut player, EnemyId::Dragon, &mut rng), CombatState::Victory);
    assert!(player.dragon_defeated());
    // five swings at 22, four dragon hits of 18 - 5
    assert_eq!(player.health(), 28);
    assert_eq!(player.gold(), 135);

    let again = explore(&mut player, LocationId::Dragon, &mut rng).unwrap();
    assert!(again.fight.is_none());
    assert_eq!(again.events, vec![EncounterEvent::DragonAlreadySlain]);
    assert_eq!(
        begin_combat(&player, EnemyId::Dragon).unwrap_err(),
        GameError::EnemyAlreadyDefeated("Dragon of Shadowmere")
    );
}

#[test]
fn crystal_sword_is_never_duplicated() {
    let mut player = game::start_game("Aria");
    let mut rng = ScriptedRandom::default();
    win(&mut player, EnemyId::GiantBat, &mut rng);
    win(&mut player, EnemyId::GiantBat, &mut rng);

    assert_eq!(player.item_count("Crystal Sword"), 1);
    assert_eq!(player.attack(), 25);
    assert_eq!(player.gold(), 50);

    let cave = explore(&mut player, LocationId::Cave, &mut rng).unwrap();
    assert!(cave.fight.is_none());
    assert!(cave.events.contains(&EncounterEvent::CavePeaceful));
}

#[test]
fn exact_gold_purchase_leaves_zero() {
    let mut player = game::start_game("Aria");
    player.grant_gold(20);
    let receipt = game::purchase(&mut player, ShopItemId::Amulet).unwrap();
    assert_eq!(receipt.gold_left, 0);
    assert_eq!(player.max_health(), 120);
    assert_eq!(player.health(), 120);
    assert!(player.has_item("Magic Amulet"));
}

#[test]
fn one_gold_short_changes_nothing() {
    let mut player = game::start_game("Aria");
    player.grant_gold(19);
    let before = player.clone();
    let err = game::purchase(&mut player, ShopItemId::Amulet).unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientFunds {
            needed: 40,
            available: 39
        }
    );
    assert_eq!(player, before);
}

#[test]
fn gear_raises_stats() {
    let mut player = game::start_game("Aria");
    player.grant_gold(25);
    game::purchase(&mut player, ShopItemId::Sword).unwrap();
    game::purchase(&mut player, ShopItemId::Shield).unwrap();
    assert_eq!(player.attack(), 15);
    assert_eq!(player.defense(), 8);
    assert_eq!(player.gold(), 0);
    assert_eq!(
        player.inventory(),
        &["Rusty Dagger", "Iron Sword", "Leather Shield"]
    );
}

#[test]
fn village_gift_comes_once() {
    let mut player = game::start_game("Aria");
    let mut rng = ScriptedRandom::ints([9, 9]);

    let first = explore(&mut player, LocationId::Village, &mut rng).unwrap();
    assert!(first.first_visit);
    assert!(first.events.contains(&EncounterEvent::VillagerGift { gold: 9 }));
    assert_eq!(player.gold(), 29);

    let second = explore(&mut player, LocationId::Village, &mut rng).unwrap();
    assert!(!second.first_visit);
    assert_eq!(
        second.events,
        vec![EncounterEvent::SageAdvice { first_visit: false }]
    );
    assert_eq!(player.gold(), 29);
    assert_eq!(rng.remaining(), 1);
}

#[test]
fn forest_outcomes_follow_the_table() {
    let mut rng = ScriptedRandom::ints([0, 1, 2, 3, 25]);
    let mut player = game::start_game("Aria");
    player.apply_damage(5);

    let goblin = explore(&mut player, LocationId::Forest, &mut rng).unwrap();
    assert_eq!(goblin.fight, Some(EnemyId::Goblin));

    let fairy = explore(&mut player, LocationId::Forest, &mut rng).unwrap();
    assert!(fairy.events.contains(&EncounterEvent::FairyHeal { healed: 5 }));
    assert_eq!(player.health(), 100);

    let wolf = explore(&mut player, LocationId::Forest, &mut rng).unwrap();
    assert_eq!(wolf.fight, Some(EnemyId::Wolf));

    let chest = explore(&mut player, LocationId::Forest, &mut rng).unwrap();
    assert!(chest.events.contains(&EncounterEvent::TreasureFound { gold: 25 }));
    assert_eq!(player.gold(), 45);
}

#[test]
fn potions_used_outside_combat() {
    let mut player = game::start_game("Aria");
    game::purchase(&mut player, ShopItemId::Potion).unwrap();

    assert_eq!(
        game::use_item(&mut player, "potion").unwrap_err(),
        GameError::HealthAlreadyFull
    );
    assert_eq!(player.item_count("Health Potion"), 1);

    player.apply_damage(10);
    let used = game::use_item(&mut player, "health potion").unwrap();
    assert_eq!(used.healed, 10);
    assert_eq!(player.item_count("Health Potion"), 0);

    assert!(matches!(
        game::use_item(&mut player, "Rusty Dagger"),
        Err(GameError::ItemNotUsable(_))
    ));
    assert!(matches!(
        game::use_item(&mut player, "potion"),
        Err(GameError::ItemNotFound(_))
    ));
}
