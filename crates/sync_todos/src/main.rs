use anyhow::Result;
use clap::{Arg, Command};

use sync_todos::{sync_todos, SyncConfig};

fn main() -> Result<()> {
    let matches = Command::new("sync_todos")
        .version("0.1.0")
        .about("Aggregates uncompleted markdown todos into one file and syncs completions back to their source files")
        .arg(
            Arg::new("directory")
                .long("directory")
                .num_args(1)
                .default_value("")
                .help("Directory of markdown files (prefixed directly onto file names, so include a trailing separator)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .get_matches();

    let config = SyncConfig {
        directory: matches.get_one::<String>("directory").unwrap().clone(),
        verbose: *matches.get_one::<bool>("verbose").unwrap(),
    };

    sync_todos(&config)
}
