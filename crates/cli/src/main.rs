//! spanlog CLI.
//!
//! Two modes:
//! - **Shell mode**: `spanlog [flags] COMMAND` - single command, exit
//! - **Pipe mode**: `cat commands.jsonl | spanlog` - one JSON command per line

mod commands;
mod format;
mod parse;
mod pipe;

use std::io::IsTerminal;
use std::process;

use spanlog::{Config, Spanlog};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_output, OutputMode};
use parse::matches_to_command;

const DEFAULT_DATA_DIR: &str = ".spanlog";

fn main() {
    let mut cli = build_cli();
    let matches = cli.get_matches_mut();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    init_logging(matches.get_count("verbose"), &config.log.level);

    let log = match open_collector(&matches, config) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let exit_code = if matches.subcommand().is_some() {
        run_shell_mode(&matches, &log, output_mode)
    } else if std::io::stdin().is_terminal() {
        let _ = cli.print_help();
        2
    } else {
        pipe::run_pipe(log.executor(), output_mode)
    };

    if let Err(e) = log.close() {
        eprintln!("Failed to flush: {}", e);
        process::exit(1);
    }
    process::exit(exit_code);
}

/// Log to stderr. `RUST_LOG` wins over `-v`, which wins over the config file.
fn init_logging(verbosity: u8, configured: &str) {
    let level = match verbosity {
        0 => configured,
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(matches: &clap::ArgMatches) -> Result<Config, String> {
    match matches.get_one::<String>("config") {
        Some(path) => Config::from_file(path).map_err(|e| e.to_string()),
        None => Ok(Config::default()),
    }
}

fn open_collector(matches: &clap::ArgMatches, mut config: Config) -> Result<Spanlog, String> {
    if matches.get_flag("ephemeral") {
        return Spanlog::builder()
            .config(config)
            .ephemeral()
            .map_err(|e| format!("Failed to open collector: {}", e));
    }

    if let Some(dir) = matches.get_one::<String>("db") {
        config.data_dir = Some(dir.into());
    } else if config.data_dir.is_none() {
        config.data_dir = Some(DEFAULT_DATA_DIR.into());
    }

    Spanlog::from_config(config).map_err(|e| format!("Failed to open collector: {}", e))
}

fn run_shell_mode(matches: &clap::ArgMatches, log: &Spanlog, mode: OutputMode) -> i32 {
    let command = match matches_to_command(matches) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("(error) {}", e);
            return 1;
        }
    };

    match log.executor().execute(command) {
        Ok(output) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            0
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            1
        }
    }
}
