//! authscan binary.
//!
//! Entry point for the `authscan` command-line tool.

use std::process::ExitCode;

use authscan_cli::exit::{codes, exit_code};
use authscan_cli::{execute_analyze, Cli, StderrLogger, Verbosity};
use authscan_core::TableFormatter;
use authscan_fs::RealFilesystem;
use clap::Parser;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version are not errors.
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(codes::INVALID_ARGS);
        }
    };

    let logger = StderrLogger::new(Verbosity::from_count(cli.verbose));
    let fs = RealFilesystem;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match execute_analyze(&cli, &fs, &logger, TableFormatter::detect(), &mut out) {
        Ok(_) => ExitCode::from(codes::SUCCESS),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}
