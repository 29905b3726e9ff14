// SPDX-License-Identifier: MIT
//
// wb: command-line front end for the Website Builder color system.
//
//   wb-color  → hex / RGB / HSL conversion
//   wb-theme  → wave-derived palettes, palette analysis, WordPress transform
//   wb-tokens → design tokens, injection, configuration
//
// Each subcommand renders its result to stdout (CSS, JSON or Markdown).
// Diagnostics go to stderr through tracing, filtered by WB_LOG.

mod cli;
mod error;
mod logging;

use std::process;

use clap::Parser;
use tracing::error;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli::execute(&cli) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    }
}
