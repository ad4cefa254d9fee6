use clap::Parser;
use std::path::PathBuf;
use super::sources::Source;

const DEFAULT_INFILE: &str = "indexes.txt";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File holding comma separated indexes, e.g. GTCAGTCA,AGTAGTAC. Default: "indexes.txt"
    #[arg(short='i', long="infile", action=clap::ArgAction::Append)]
    pub infile: Vec<PathBuf>,
    /// Comma separated indexes passed directly on the command line
    #[arg(short='x', long="indexes", action=clap::ArgAction::Append)]
    pub indexes: Vec<String>,
    /// Specify delimiter to separate cycle, red and green counts. Default: " | "
    #[arg(short='d', long="delimiter", value_parser=validate_delimiter, default_value_t=String::from(" | "))]
    pub delimiter: String,
    /// Write the report to this file instead of stdout
    #[arg(short='o', long="output")]
    pub output: Option<PathBuf>,
    /// Exit with a non-zero status when any index set has a dark cycle
    #[arg(long="strict")]
    pub strict: bool,
}

impl Cli {
    /// Files first, then literal index lists, each in command line order.
    pub fn sources(&self) -> Vec<Source> {
        if self.infile.is_empty() && self.indexes.is_empty() {
            return vec![Source::File(PathBuf::from(DEFAULT_INFILE))];
        }
        self.infile.iter().cloned().map(Source::File)
            .chain(self.indexes.iter().cloned().map(Source::Literal))
            .collect()
    }
}

fn validate_delimiter(input_str: &str) -> Result<String, String> {
    if input_str.is_empty() {
        Err(String::from("Delimiter must not be empty"))
    } else {
        Ok(input_str.to_string())
    }
}
