//! Warband - Entry Point
//!
//! Interactive shell around the simulation core. It musters the
//! requested armies, then reads commands from stdin and renders the
//! results. All printing happens here; the library stays silent.

use std::io::{self, Write};
use std::path::Path;

use clap::Parser;

use warband::army::Civilization;
use warband::core::error::Result;
use warband::session::Session;

#[derive(Parser)]
#[command(name = "warband", about = "Turn-based battles between historical civilizations")]
struct Cli {
    /// Civilizations to muster at startup
    #[arg(long, value_delimiter = ',', default_value = "chinese,english,byzantine")]
    armies: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warband=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut session = Session::new();
    for name in &cli.armies {
        match name.parse::<Civilization>() {
            Ok(civ) => session.muster(civ.name(), civ),
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        }
    }

    println!("\n=== WARBAND ===");
    println!("Turn-based battles between historical civilizations");
    println!();
    println!("Commands:");
    println!("  status / s                 - Show all armies");
    println!("  units <army>               - List an army's units");
    println!("  train <army> <idx>         - Train one unit");
    println!("  transform <army> <idx>     - Transform one unit up the ladder");
    println!("  battle <attacker> <enemy>  - Resolve a battle");
    println!("  history [army]             - Show battle history");
    println!("  save <path> / load <path>  - Persist or restore the session");
    println!("  quit / q                   - Exit");
    println!();

    loop {
        display_status(&session);

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }
        if input == "status" || input == "s" {
            continue; // status is printed every turn anyway
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        let result = run_command(&mut session, &parts);
        if let Err(err) = result {
            println!("Error: {}", err);
        }
    }

    Ok(())
}

fn run_command(session: &mut Session, parts: &[&str]) -> Result<()> {
    match parts {
        ["units", owner] => {
            let army = session.army(owner)?;
            for (i, unit) in army.units.iter().enumerate() {
                println!(
                    "  [{}] {} strength {} age {}",
                    i, unit.kind, unit.strength, unit.age
                );
            }
        }
        ["train", owner, index] => {
            let Ok(index) = index.parse::<usize>() else {
                println!("Usage: train <army> <index>");
                return Ok(());
            };
            let report = session.train(owner, index)?;
            println!(
                "Trained {} #{} to strength {} (-{} gold)",
                report.kind, index, report.strength, report.gold_spent
            );
        }
        ["transform", owner, index] => {
            let Ok(index) = index.parse::<usize>() else {
                println!("Usage: transform <army> <index>");
                return Ok(());
            };
            let report = session.transform(owner, index)?;
            println!(
                "Transformed {} #{} into {} (-{} gold)",
                report.from, index, report.to, report.gold_spent
            );
        }
        ["battle", attacker, defender] => {
            let outcome = session.battle(attacker, defender)?;
            println!(
                "{} vs {}: {} ({} vs {})",
                outcome.attacker,
                outcome.defender,
                outcome.result,
                outcome.attacker_strength,
                outcome.defender_strength
            );
            for unit in &outcome.attacker_losses {
                println!("  {} lost a {} (strength {})", outcome.attacker, unit.kind, unit.strength);
            }
            for unit in &outcome.defender_losses {
                println!("  {} lost a {} (strength {})", outcome.defender, unit.kind, unit.strength);
            }
        }
        ["history"] => {
            if session.history().is_empty() {
                println!("No battles recorded");
            }
            for outcome in session.history().outcomes() {
                println!(
                    "{} vs {}: {} ({} vs {})",
                    outcome.attacker,
                    outcome.defender,
                    outcome.result,
                    outcome.attacker_strength,
                    outcome.defender_strength
                );
            }
        }
        ["history", owner] => {
            session.army(owner)?; // surface ArmyNotFound for typos
            println!("{}", session.history().report_for(owner));
        }
        ["save", path] => {
            session.save(Path::new(path))?;
            println!("Session saved to {}", path);
        }
        ["load", path] => {
            *session = Session::load(Path::new(path))?;
            println!("Session loaded from {}", path);
        }
        _ => {
            println!("Unrecognized command");
        }
    }
    Ok(())
}

fn display_status(session: &Session) {
    println!();
    for name in session.army_names() {
        if let Ok(army) = session.army(name) {
            println!(
                "{:<10} {:>3} units  strength {:>4}  gold {:>5}",
                army.owner,
                army.units.len(),
                army.total_strength(),
                army.gold
            );
        }
    }
}
