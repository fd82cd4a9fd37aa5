use std::path::{Path, PathBuf};
use std::process;
use log::info;

use logocrop::cli::build_cli;
use logocrop::commands::{resolve_config, CommandFactory, LogocropCommandFactory};
use logocrop::errors::ExtractError;
use logocrop::utils::logger::Logger;

/// Sibling of the run log that receives `log` crate records
fn global_log_path(log_file: &Path) -> PathBuf {
    let stem = log_file.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("logocrop");
    log_file.with_file_name(format!("{}-global.log", stem))
}

/// Print the single failure line on stdout and exit non-zero
fn report_failure(e: &ExtractError) -> ! {
    info!("Command execution failed: {}", e);
    match e {
        ExtractError::SourceNotFound(path) => {
            println!("Error: Source file not found: {}", path.display());
        },
        other => println!("Error processing image: {}", other),
    }
    process::exit(1);
}

fn main() {
    let matches = build_cli().get_matches();

    let config = match resolve_config(&matches) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    let logger = match Logger::new(&config.log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger(global_log_path(&config.log_file), matches.get_flag("verbose")) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = LogocropCommandFactory::new();

    let command_result = factory.create_command(&matches, config, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                report_failure(&e);
            }
        },
        Err(e) => report_failure(&e),
    };
}
