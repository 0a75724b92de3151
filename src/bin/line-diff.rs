// SPDX-License-Identifier: MIT

use clap::Parser;

use line_diff::*;
use utils::Result;

/// Print the hunks that turn OLD into NEW, one per line
#[derive(Parser, Debug)]
struct Args {
    old: std::path::PathBuf,
    new: std::path::PathBuf,

    #[clap(flatten)]
    diff_options: diff::DiffOptions,

    #[clap(flatten)]
    cli_options: cli::Options,
}

fn do_main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let old = utils::read_text(&args.old)?;
    let new = utils::read_text(&args.new)?;

    let items = diff::diff_text_with(&old, &new, &args.diff_options);

    let mut cli = cli::Cli::new(args.cli_options);
    for item in &items {
        cli.print_item(item)?;
    }

    Ok(())
}

fn main() {
    if let Err(err) = do_main() {
        println!("{}", err);
        std::process::exit(1);
    }
}
