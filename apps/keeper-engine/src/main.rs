//! Keeper Engine Binary
//!
//! Evaluates one team's keeper worksheet and prints the result as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin keeper-engine -- worksheet.json
//! cargo run --bin keeper-engine -- worksheet.json --move p-42 up
//! ```
//!
//! # Environment Variables
//!
//! ## Optional
//! - `KEEPER_CONFIG`: Path to the league YAML (default: league.yaml)
//! - `RUST_LOG`: Log filter (overrides `observability.logging.level`)

use std::sync::Arc;

use anyhow::{Context, bail};
use chrono::Utc;
use keeper_engine::config::{LoggingConfig, load_config};
use keeper_engine::{
    EvaluateRosterUseCase, InMemoryFeeLedger, PlayerId, PriorityMove, RosterWorksheetDto,
};
use tracing_subscriber::EnvFilter;

/// Parsed command line.
struct Cli {
    worksheet_path: String,
    priority_move: Option<(PlayerId, PriorityMove)>,
}

fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config_path = std::env::var("KEEPER_CONFIG").ok();
    let config = load_config(config_path.as_deref()).context("Failed to load league config")?;
    init_tracing(&config.observability.logging);

    let cli = parse_args(std::env::args().skip(1))?;

    tracing::info!(
        league = %config.league.id,
        rounds = config.league.round_count.rounds(),
        worksheet = %cli.worksheet_path,
        "Starting keeper engine"
    );

    let raw = std::fs::read_to_string(&cli.worksheet_path)
        .with_context(|| format!("Failed to read worksheet '{}'", cli.worksheet_path))?;
    let mut worksheet: RosterWorksheetDto =
        serde_json::from_str(&raw).context("Failed to parse worksheet JSON")?;

    let ledger = Arc::new(InMemoryFeeLedger::new());
    if let Some(locked) = worksheet.locked_fees {
        ledger.record_locked(
            worksheet.team_id.clone(),
            worksheet.season_id.clone(),
            locked,
        );
    }

    let use_case = EvaluateRosterUseCase::new(ledger, config.league);
    let now = Utc::now();
    let evaluation = match cli.priority_move {
        Some((player_id, direction)) => {
            use_case.move_priority(&mut worksheet, &player_id, direction, now)?
        }
        None => use_case.execute(&worksheet, now)?,
    };

    let json = serde_json::to_string_pretty(&evaluation).context("Failed to encode evaluation")?;
    println!("{json}");

    if !evaluation.submittable {
        tracing::warn!("Worksheet has blocking issues and cannot be submitted");
    }
    Ok(())
}

/// Parse `<worksheet.json> [--move <player-id> <up|down>]`.
fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Cli> {
    let Some(worksheet_path) = args.next() else {
        bail!("usage: keeper-engine <worksheet.json> [--move <player-id> <up|down>]");
    };

    let priority_move = match args.next().as_deref() {
        None => None,
        Some("--move") => {
            let player = args.next().context("--move needs a player id")?;
            let direction = match args.next().as_deref() {
                Some("up") => PriorityMove::Up,
                Some("down") => PriorityMove::Down,
                other => bail!("--move direction must be 'up' or 'down', got {other:?}"),
            };
            Some((PlayerId::new(player), direction))
        }
        Some(other) => bail!("unexpected argument '{other}'"),
    };

    Ok(Cli {
        worksheet_path,
        priority_move,
    })
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_err() {
        load_dotenv_from_ancestors();
    }
}

/// Initialize the tracing subscriber.
///
/// Logs go to stderr so stdout carries only the evaluation JSON.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("keeper_engine={}", logging.level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.format == "compact" {
        builder.compact().init();
    } else {
        builder.init();
    }
}

fn load_dotenv_from_ancestors() {
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}
