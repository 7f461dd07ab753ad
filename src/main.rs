use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use colored::Colorize;

use focustrack::cli::args::{Cli, Commands};
use focustrack::cli::commands;
use focustrack::config::{Config, Paths};
use focustrack::features::focus::SessionStore;
use focustrack::storage::Database;
use focustrack::{logging, tui};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    // Completions need neither config nor data
    if let Commands::Completions { shell } = command {
        print!("{}", commands::completions(shell)?);
        return Ok(());
    }

    let paths = Paths::resolve(cli.data_dir)?;
    let config = Config::load_from_path(&paths.config_file)?;
    // Plain `config` only reads; the data dir stays untouched
    if !matches!(command, Commands::Config { init: false }) {
        paths.ensure_dirs()?;
    }
    logging::init(&paths);
    let format = cli.output.unwrap_or(config.general.default_output);

    if let Commands::Config { init } = command {
        println!("{}", commands::config(&paths, &config, init, format)?);
        return Ok(());
    }

    let db = Database::open_at(&paths.database)
        .with_context(|| format!("opening session store in {}", paths.root.display()))?;
    let store = SessionStore::new(&db);
    let today = Local::now().date_naive();

    let output = match command {
        Commands::Tui => {
            tui::run(&config, &db)?;
            String::new()
        }
        Commands::Report => commands::report(&store, today, &config.report.palette, format)?,
        Commands::History { limit } => commands::history(&store, limit, format)?,
        Commands::Seed { force } => commands::seed(&store, today, force, format)?,
        Commands::Clear { force } => commands::clear(&store, force, format)?,
        Commands::Config { .. } | Commands::Completions { .. } => String::new(),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
