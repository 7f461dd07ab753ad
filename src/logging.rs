//! Log setup.
//!
//! Logs go to `focustrack.log` in the data directory so they never draw over
//! the TUI. `RUST_LOG` overrides the default level.

use std::fs::OpenOptions;

use env_logger::{Builder, Env, Target};

use crate::config::Paths;

const DEFAULT_FILTER: &str = "focustrack=info";

/// Initialise the global logger.
///
/// Never creates the data directory. When it does not exist yet, or the
/// log file cannot be opened, logs go to stderr instead. Calling this more
/// than once is harmless; later calls are ignored.
pub fn init(paths: &Paths) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));

    let dir_exists = paths.root.is_dir();
    let file = dir_exists
        .then(|| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&paths.log_file)
        })
        .and_then(Result::ok);

    let to_file = file.is_some();
    if let Some(file) = file {
        builder.target(Target::Pipe(Box::new(file)));
    }

    if builder.try_init().is_ok() {
        if to_file {
            log::debug!("logging to {}", paths.log_file.display());
        } else if dir_exists {
            log::warn!(
                "could not open {}; logging to stderr",
                paths.log_file.display()
            );
        }
    }
}
