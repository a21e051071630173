//! `simulate <npages> <nframes> <rand|fifo|lru> <nrefs> <ll|ml|hl>`

use std::process::ExitCode;

use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;

use virtmem::cli::{fault_line, Cli};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if matches!(
                e.kind(),
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
            ) {
                e.exit();
            }
            // Usage errors go to stderr; any failure exits with 1.
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match cli.run() {
        Ok(report) => {
            println!("{}", fault_line(report.faults));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
