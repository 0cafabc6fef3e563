//! WordLift CLI entry point.

use std::env;
use std::io;
use std::process::ExitCode;

use wordlift_runtime::cli::help_text;
use wordlift_runtime::{init_logging, parse_args};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(env::args().skip(1))?;

    if config.show_help {
        println!("{}", help_text());
        return Ok(());
    }

    if config.show_version {
        println!("wordlift {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.verbose);

    let site = config.load_site()?;
    config.filter_inputs(
        &site,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    Ok(())
}
