use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "habitcycle", version, about = "Monthly habit tracker")]
struct Cli {
    /// Act on a stored month (e.g. 2025-5) instead of the current one
    #[arg(long, global = true, value_name = "KEY")]
    month: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habit management in the active month
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Daily completion marks
    Day {
        #[command(subcommand)]
        action: commands::day::DayAction,
    },
    /// Monthly cycles
    Month {
        #[command(subcommand)]
        action: commands::month::MonthAction,
    },
    /// Progress summaries
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Light/dark preference
    Theme {
        #[command(subcommand)]
        action: commands::theme::ThemeAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("HABITCYCLE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let month = cli.month.as_deref();
    let result = match cli.command {
        Commands::Habit { action } => commands::habit::run(action, month),
        Commands::Day { action } => commands::day::run(action, month),
        Commands::Month { action } => commands::month::run(action, month),
        Commands::Stats { action } => commands::stats::run(action, month),
        Commands::Theme { action } => commands::theme::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "habitcycle", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
