//! Terse text command parsing for the session shell.
//!
//! Accepts single letters, full words and a few two-word forms; the verb is
//! case-insensitive while arguments keep their case (player names).

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start(String),
    Go(String),
    Attack,
    Potion,
    Flee,
    Shop,
    Buy(String),
    Use(String),
    Status,
    Reset,
    Help,
    Unknown(String),
}

pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Command::Help;
    }
    if trimmed.chars().all(|c| c == '?' || c == '\u{FF1F}' || c.is_whitespace()) {
        return Command::Help;
    }

    let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((v, r)) => (v, r.trim()),
        None => (trimmed, ""),
    };
    let verb = verb.to_uppercase();

    match verb.as_str() {
        "START" | "NEW" | "BEGIN" => Command::Start(rest.to_string()),
        "GO" | "EXPLORE" | "VISIT" | "TRAVEL" => {
            if rest.is_empty() {
                Command::Unknown(trimmed.to_string())
            } else {
                Command::Go(rest.to_string())
            }
        }
        "A" | "ATTACK" | "FIGHT" | "HIT" if rest.is_empty() => Command::Attack,
        "P" | "POTION" | "DRINK" | "HEAL" if rest.is_empty() => Command::Potion,
        "F" | "FLEE" | "RUN" | "ESCAPE" if rest.is_empty() => Command::Flee,
        "SHOP" | "STORE" if rest.is_empty() => Command::Shop,
        "BUY" | "PURCHASE" if !rest.is_empty() => Command::Buy(rest.to_string()),
        "USE" | "DRINK" if !rest.is_empty() => Command::Use(rest.to_string()),
        "S" | "STATUS" | "STATS" | "I" | "INV" if rest.is_empty() => Command::Status,
        "RESET" | "RESTART" if rest.is_empty() => Command::Reset,
        "H" | "HELP" => Command::Help,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
