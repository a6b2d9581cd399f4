//! Binary entry point: arguments, configuration, logging, then the pipeline

use clap::Parser;
use std::io::Write;

use super::cli::{load_config, Args, Settings};
use super::pipeline;
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::init_logging;
use crate::core::version;

/// Initialize and run the application
pub fn startup() {
    let args = Args::parse();

    let file_config = match load_config(args.config_file.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let settings = match Settings::resolve(&args, file_config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error in configuration: {}", e);
            std::process::exit(1);
        }
    };

    let use_color = settings.use_color();
    if !use_color {
        colored::control::set_override(false);
    }

    let log_file = settings
        .log_file
        .as_ref()
        .map(|path| path.to_string_lossy().into_owned());
    if let Err(e) = init_logging(
        settings.log_level.as_deref(),
        settings.log_format.as_deref(),
        log_file.as_deref(),
        use_color,
    ) {
        eprintln!("Error initialising logging: {}", e);
        std::process::exit(1);
    }

    log::info!(
        "strqueue {} starting (git {})",
        version::package_version(),
        version::git_hash()
    );
    log::debug!("Effective settings: {:?}", settings);

    let values = if args.values.is_empty() {
        match pipeline::read_lines(std::io::stdin().lock()) {
            Ok(lines) => lines,
            Err(e) => {
                log::error!("FATAL: Could not read standard input: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        args.values
    };

    let output = match pipeline::run(&settings, &values) {
        Ok(output) => output,
        Err(e) => {
            log_error_with_context(&e, "Queue processing failed");
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in &output {
        if let Err(e) = writeln!(out, "{}", line) {
            // Downstream reader went away (e.g. piped into `head`)
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                log::error!("FATAL: Could not write output: {}", e);
                std::process::exit(1);
            }
            return;
        }
    }
}
