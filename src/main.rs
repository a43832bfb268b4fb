use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tictac::{
    Console, LinePrompt, analyze_best_move, analyze_status,
    cli::{Cli, Command},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command.clone().unwrap_or(Command::Menu) {
        Command::Menu => {
            info!("starting menu");
            console(&cli)?.run_menu()?;
        }
        Command::Play {
            mode,
            difficulty,
            computer_first,
        } => {
            let config = cli.game_config(mode, difficulty, computer_first);
            console(&cli)?.play(config)?;
        }
        Command::BestMove { board, json } => {
            let report = analyze_best_move(&board)?;
            print_report(&report, json)?;
        }
        Command::Status { board, json } => {
            let report = analyze_status(&board);
            print_report(&report, json)?;
        }
    }

    Ok(())
}

fn console(cli: &Cli) -> Result<Console<LinePrompt, io::Stdout>> {
    Ok(Console::new(LinePrompt::new()?, io::stdout())
        .with_clear_screen(!cli.no_clear)
        .with_seed(cli.seed))
}

fn print_report<T>(report: &T, json: bool) -> Result<()>
where
    T: serde::Serialize + std::fmt::Display,
{
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, report)?;
        writeln!(out)?;
    } else {
        write!(out, "{report}")?;
    }
    Ok(())
}
