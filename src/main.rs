//! Binary entrypoint for the Shadowmere CLI.
//!
//! Commands:
//! - `play [--name <name>]` - play the console adventure on stdin/stdout
//! - `init` - write a starter `config.toml`
//! - `catalog` - print locations, enemies and shop wares
//!
//! See the library crate docs for module-level details: `shadowmere::`.
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};

use shadowmere::config::Config;
use shadowmere::game::catalog::{EnemyId, LocationId};
use shadowmere::game::{shop, StdRandom};
use shadowmere::session::ConsoleShell;

#[derive(Parser)]
#[command(name = "shadowmere")]
#[command(about = "A turn-based text adventure in the Realm of Shadowmere")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the console adventure
    Play {
        /// Adventurer name (skips the name prompt)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Write a default configuration file
    Init,
    /// List locations, enemies and shop items
    Catalog,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init writes the config, everything else reads it (missing file is fine)
    let (config, load_error) = match cli.command {
        Commands::Init => (None, None),
        _ => match Config::load(&cli.config).await {
            Ok(c) => (Some(c), None),
            Err(e) => (None, Some(e)),
        },
    };
    init_logging(&config, cli.verbose);
    if let Some(e) = load_error {
        warn!("{} (using defaults)", e);
    }
    let config = config.unwrap_or_default();

    match cli.command {
        Commands::Play { name } => {
            info!("Starting Shadowmere v{}", env!("CARGO_PKG_VERSION"));
            let rules = config.game.clone();
            let player = tokio::task::spawn_blocking(move || {
                let stdin = std::io::stdin();
                let mut rng = StdRandom::from_entropy();
                ConsoleShell::new(stdin.lock(), std::io::stdout(), rules).run(name, &mut rng)
            })
            .await
            .map_err(|e| anyhow!("Console game task failed: {}", e))??;
            info!(
                "Game finished (dragon defeated: {})",
                player.dragon_defeated()
            );
        }
        Commands::Init => {
            info!("Initializing new Shadowmere configuration");
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::Catalog => print_catalog(),
    }

    Ok(())
}

fn print_catalog() {
    println!("Locations:");
    for id in LocationId::ALL {
        let loc = id.info();
        println!("  {:<8} {} - {}", id.as_str(), loc.name, loc.description);
    }
    println!("\nEnemies:");
    for id in EnemyId::ALL {
        let t = id.template();
        println!(
            "  {:<20} HP {:>3}  ATK {:>2}  Gold {:>3}",
            t.name, t.health, t.attack, t.gold_reward
        );
    }
    println!("\nShop:");
    for item in shop::catalog() {
        println!(
            "  {:<8} {:<16} {:>3} gold  {}",
            item.id.as_str(),
            item.name,
            item.price,
            item.summary
        );
    }
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match (verbosity, config) {
        (0, Some(cfg)) => cfg.logging.level_filter(),
        (0, None) => log::LevelFilter::Info,
        (1, _) => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let file = config
        .as_ref()
        .and_then(|c| c.logging.file.clone())
        .and_then(|path| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });

    if let Some(f) = file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // Only echo to the console when a person is watching
        let is_tty = atty::is(atty::Stream::Stdout);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
