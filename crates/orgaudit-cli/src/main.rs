use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use orgaudit_cli::logging::init_tracing;
use orgaudit_cli::{run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run(&cli, &mut out).and_then(|()| Ok(out.flush()?));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
