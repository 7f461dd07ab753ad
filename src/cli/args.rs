use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "focustrack")]
#[command(about = "A focus timer with distraction tracking and reports")]
#[command(long_about = "focustrack - A focus timer for the terminal

Pick a category and a duration, start the countdown, and stay on the
terminal until it runs out. Switching away from the terminal window while
the timer runs pauses it and counts a distraction. Completed sessions are
stored locally and summarised in a weekly report.

QUICK START:
  focustrack                Open the timer (same as `focustrack tui`)
  focustrack report         Show today's and total focus time
  focustrack history        List stored sessions
  focustrack seed           Load sample sessions to try the report

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  focustrack <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output, or 'json' for
    /// machine-readable output suitable for scripting. Defaults to
    /// `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Data directory holding config, sessions and logs
    ///
    /// Defaults to ~/.focustrack
    #[arg(long, global = true, env = "FOCUSTRACK_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive focus timer
    ///
    /// Two tabs: the timer and the report. Press ? inside for key bindings.
    /// Leaving the terminal window while the timer runs counts as a
    /// distraction and pauses the countdown.
    Tui,

    /// Show the focus report
    ///
    /// Today's and total focus time, distractions, the last seven days and
    /// sessions per category.
    ///
    /// # Examples
    ///
    ///   focustrack report
    ///   focustrack report -o json
    Report,

    /// List stored sessions, newest first
    ///
    /// # Examples
    ///
    ///   focustrack history
    ///   focustrack history --limit 5
    History {
        /// Maximum number of sessions to show
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Load sample sessions for today and yesterday
    ///
    /// Refuses to overwrite existing sessions unless --force is given.
    Seed {
        /// Replace existing sessions
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Delete every stored session
    Clear {
        /// Confirm the deletion
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        init: bool,
    },

    /// Generate shell completions
    ///
    /// Example: focustrack completions bash > ~/.bash_completion.d/focustrack
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
