//! Tactic - unified CLI
//!
//! Terminal tic-tac-toe with a minimax opponent.

use anyhow::{Context, Result};
use clap::Parser;
use tactic::cli::{Cli, Command, ConfigArgs};
use tactic::{logging, simulate, tui};
use tactic_core::{Board, Player};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play { config } => run_play(&config),
        Command::Simulate {
            config,
            games,
            opponent_seed,
            json,
        } => run_simulate(&config, games, opponent_seed, json),
        Command::Evaluate { board, config } => run_evaluate(&board, &config),
    }
}

/// Run the terminal UI
fn run_play(args: &ConfigArgs) -> Result<()> {
    let config = args.resolve()?;
    logging::init_file(config.log_file())?;

    info!(mode = %config.mode(), difficulty = %config.ai().search_mode(), "Starting tactic");
    tui::run(&config)
}

/// Run headless games and print the tally
#[instrument(skip(args))]
fn run_simulate(args: &ConfigArgs, games: u32, opponent_seed: u64, json: bool) -> Result<()> {
    logging::init_stderr();
    let config = args.resolve()?;

    let report = simulate(config.ai(), *config.first_player(), games, opponent_seed)
        .context("Simulation failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

/// Print the minimax evaluation of a board
#[instrument(skip(args))]
fn run_evaluate(board: &str, args: &ConfigArgs) -> Result<()> {
    logging::init_stderr();
    let config = args.resolve()?;

    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;
    println!("{}\n", board);

    let outcome = board.outcome();
    if outcome.is_over() {
        println!("Position is decided: {}", outcome);
        return Ok(());
    }

    let mut engine = config.ai().engine();
    let eval = engine.evaluate(&board);
    let verdict = match eval.value() {
        1 => format!("{} wins with best play", Player::One.symbol()),
        -1 => format!("{} wins with best play", Player::Two.symbol()),
        _ => "Draw with best play".to_string(),
    };
    println!("Minimax value: {} ({})", eval.value(), verdict);
    if let Some(best) = eval.best_move() {
        println!("Best move for {}: {}", engine.identity().symbol(), best);
    }
    println!("Positions searched: {}", eval.nodes());

    let chosen = engine.select_move(&board)?;
    println!("{} AI would play: {}", engine.mode().label(), chosen);
    Ok(())
}
