use shadowmere::config::Config;
use shadowmere::game::ScriptedRandom;
use shadowmere::session::{SessionError, SessionManager, SessionPhase};

fn attack_until(mgr: &mut SessionManager, id: &str, marker: &str) -> String {
    let mut rng = ScriptedRandom::default();
    for _ in 0..20 {
        let reply = mgr.handle(id, "A", &mut rng).unwrap();
        if reply.contains(marker) {
            return reply;
        }
    }
    panic!("never saw {:?}", marker);
}

#[test]
fn session_plays_the_whole_quest() {
    let mut mgr = SessionManager::new(&Config::default());
    let id = mgr.open().unwrap();
    let mut rng = ScriptedRandom::default();

    let reply = mgr.handle(&id, "START Aria", &mut rng).unwrap();
    assert!(reply.contains("Welcome, Aria!"), "{}", reply);

    let reply = mgr.handle(&id, "GO cave", &mut rng).unwrap();
    assert!(reply.contains("Battle with Giant Bat"), "{}", reply);
    assert_eq!(mgr.get(&id).unwrap().phase(), SessionPhase::InCombat);

    let reply = attack_until(&mut mgr, &id, "CRYSTAL SWORD");
    assert!(reply.contains("You defeated the Giant Bat! You earned 15 gold!"));
    assert_eq!(mgr.get(&id).unwrap().phase(), SessionPhase::Exploring);

    mgr.handle(&id, "go dragon", &mut rng).unwrap();
    assert_eq!(mgr.get(&id).unwrap().phase(), SessionPhase::InCombat);
    attack_until(&mut mgr, &id, "VICTORY!");

    let status = mgr.handle(&id, "s", &mut rng).unwrap();
    assert!(status.contains("Quest: COMPLETED - Dragon Defeated!"), "{}", status);
    assert!(status.contains("Crystal Sword"));
}

#[test]
fn sessions_do_not_share_state() {
    let mut mgr = SessionManager::new(&Config::default());
    let a = mgr.open().unwrap();
    let b = mgr.open().unwrap();
    assert_ne!(a, b);
    let mut rng = ScriptedRandom::default();

    mgr.handle(&a, "start Aria", &mut rng).unwrap();
    mgr.handle(&b, "start Bran", &mut rng).unwrap();
    mgr.handle(&a, "buy shield", &mut rng).unwrap();

    let pa = mgr.get(&a).unwrap().player().unwrap();
    let pb = mgr.get(&b).unwrap().player().unwrap();
    assert_eq!(pa.defense(), 8);
    assert_eq!(pb.defense(), 5);
    assert_eq!(pb.gold(), 20);
}

#[test]
fn defeat_locks_the_game_until_reset() {
    let mut mgr = SessionManager::new(&Config::default());
    let id = mgr.open().unwrap();
    let mut rng = ScriptedRandom::default();
    mgr.handle(&id, "start Unlucky", &mut rng).unwrap();
    mgr.handle(&id, "go cave", &mut rng).unwrap();

    // escape draws of 0.0 always fail
    let mut last = String::new();
    for _ in 0..20 {
        last = mgr.handle(&id, "F", &mut rng).unwrap();
    }
    assert!(last.contains("GAME OVER"), "{}", last);
    assert_eq!(mgr.get(&id).unwrap().phase(), SessionPhase::Fallen);

    let reply = mgr.handle(&id, "go forest", &mut rng).unwrap();
    assert!(reply.contains("RESET"));
    let reply = mgr.handle(&id, "?", &mut rng).unwrap();
    assert!(reply.starts_with("Commands:"));

    mgr.handle(&id, "reset", &mut rng).unwrap();
    assert_eq!(mgr.get(&id).unwrap().phase(), SessionPhase::AwaitingName);
    let reply = mgr.handle(&id, "start Again", &mut rng).unwrap();
    assert!(reply.contains("Welcome, Again!"));
}

#[test]
fn guidance_instead_of_actions_out_of_place() {
    let mut mgr = SessionManager::new(&Config::default());
    let id = mgr.open().unwrap();
    let mut rng = ScriptedRandom::default();
    mgr.handle(&id, "start Aria", &mut rng).unwrap();

    let reply = mgr.handle(&id, "a", &mut rng).unwrap();
    assert_eq!(reply, "There is nothing to fight here.");
    let reply = mgr.handle(&id, "start Other", &mut rng).unwrap();
    assert!(reply.contains("already underway"));
    let reply = mgr.handle(&id, "go dragon", &mut rng).unwrap();
    assert!(reply.contains("Current health: 60"), "{}", reply);
    assert_eq!(mgr.get(&id).unwrap().phase(), SessionPhase::Exploring);
    let reply = mgr.handle(&id, "go moon", &mut rng).unwrap();
    assert_eq!(reply, "There is no place called 'moon'.");
    let reply = mgr.handle(&id, "potion", &mut rng).unwrap();
    assert_eq!(reply, "You don't have a potion.");

    mgr.handle(&id, "go cave", &mut rng).unwrap();
    let reply = mgr.handle(&id, "shop", &mut rng).unwrap();
    assert!(reply.contains("in battle with the Giant Bat"));
    let reply = mgr.handle(&id, "p", &mut rng).unwrap();
    assert_eq!(reply, "You don't have any Health Potions!");
    assert_eq!(mgr.get(&id).unwrap().combat().unwrap().turns, 0);
}

#[test]
fn closed_sessions_are_gone() {
    let mut cfg = Config::default();
    cfg.sessions.max_sessions = 1;
    let mut mgr = SessionManager::new(&cfg);
    let id = mgr.open().unwrap();
    assert_eq!(mgr.open(), Err(SessionError::CapacityReached { max: 1 }));

    mgr.close(&id).unwrap();
    let mut rng = ScriptedRandom::default();
    assert_eq!(
        mgr.handle(&id, "s", &mut rng),
        Err(SessionError::UnknownSession(id.clone()))
    );
    assert!(mgr.open().is_ok());
}
