/*
Check the color balance of a set of sequencing indexes
    + read comma separated indexes from files or the command line
    + count red and green laser triggers at every cycle
    + report the counts and whether every cycle triggers a laser

Arguments
    paths to index files, or literal index lists
    delimiter and output location of the report
    strict mode to fail on dark cycles
*/

mod utils;
use std::io::BufWriter;
use std::process::ExitCode;
use anyhow::Result;
use clap::Parser;
use log::debug;
use utils::get_args::Cli;
use utils::run::{open_output, run};

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    debug!("Parsing commandline arguments");
    let mut writer = BufWriter::new(open_output(&cli)?);
    let summary = run(&cli, &mut writer)?;
    Ok(summary.exit_code(cli.strict))
}
