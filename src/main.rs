mod cli;
mod config;
mod convert;
mod logging;
mod solve_cmd;

use std::process;

use clap::Parser;

use crate::cli::{Cli, USAGE};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // A missing matrix file is reported as usage, with a zero exit status.
    let Some(file) = cli.solve.file.clone() else {
        println!("{USAGE}");
        process::exit(0);
    };

    if let Err(e) = solve_cmd::run(&file, cli.solve) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
