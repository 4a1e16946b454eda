//! Command-line interface entry point for `helium`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use helium::config::Config;
use logger::{enable_debug, enable_verbose, info, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();
    let config_path = Config::resolve_path(args.config.as_deref());

    // Load configuration if present; fall back to defaults so logging flags
    // still work before `helium init` has been run.
    let mut config = if config_path.exists() {
        match Config::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    } else {
        Config::from_defaults()
    };
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // Determine effective runtime log level: CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| parse_level(&config.logging.level))
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    // Verbose: enable if CLI flag OR config has verbose=true
    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // Initialize file logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    // Handle subcommands
    match args.command {
        Command::Report { .. } => {
            // Overrides were already applied above.
            commands::report::run(&config_path, &config);
        }
        Command::Init { force } => {
            commands::init::run(&config_path, force);
        }
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &config_path, &mut config, &defaults);
        }
    }
}

fn parse_level(val: &str) -> Option<Level> {
    match val.to_ascii_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        _ => None,
    }
}
