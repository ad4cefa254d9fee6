/*
    Check every input in turn
        an input that fails to load is logged and skipped
        each index set gets one report block, labelled when there are several
        the exit status reflects rejected inputs, and dark cycles in strict mode
*/

use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;
use anyhow::{Context, Result};
use check_indexes::ColorBalanceCalculator;
use log::{debug, error, info, warn};
use super::get_args::Cli;
use super::report::write_report;

/// Tally of one invocation over all inputs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub checked: usize,
    pub rejected: usize,
    pub unbalanced: usize,
}

impl RunSummary {
    pub fn failed(&self, strict: bool) -> bool {
        self.rejected > 0 || (strict && self.unbalanced > 0)
    }

    pub fn exit_code(&self, strict: bool) -> ExitCode {
        if self.failed(strict) {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

/// Report destination: the `--output` file, or stdout.
pub fn open_output(cli: &Cli) -> Result<Box<dyn Write>> {
    match &cli.output {
        Some(path) => {
            info!("Writing report to {:?}", path);
            let file = File::create(path).with_context(|| format!("could not create {:?}", path))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

pub fn run<W: Write>(cli: &Cli, writer: &mut W) -> Result<RunSummary> {
    let sources = cli.sources();
    let labelled = sources.len() > 1;
    let mut summary = RunSummary {
        checked: sources.len(),
        ..RunSummary::default()
    };
    for source in &sources {
        debug!("Processing {}", source);
        let indexes = match source.load() {
            Ok(indexes) => indexes,
            Err(err) => {
                error!("{}", err);
                summary.rejected += 1;
                continue;
            }
        };
        let mut calculator = ColorBalanceCalculator::from_index_set(indexes);
        let report = calculator.compute_and_validate();
        if labelled {
            writeln!(writer, "# {}", source)?;
        }
        write_report(writer, report, &cli.delimiter)?;
        if !report.valid {
            warn!("{}: dark cycles {:?}", source, report.table.dark_cycles());
            summary.unbalanced += 1;
        }
    }
    writer.flush()?;
    info!("{} index sets checked, {} rejected, {} with dark cycles",
          summary.checked, summary.rejected, summary.unbalanced);
    Ok(summary)
}
