// SPDX-License-Identifier: Apache-2.0

//! Denormalizes a block design file into `path = value` lines.

use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use log::debug;
use xbdflat::{Flattener, Options, ParseError, ValueQuotes};

const PROGRAM: &str = "parse_xbd";

#[derive(Parser, Debug)]
#[command(name = PROGRAM, version, about = "Flattens a block design file into dotted key/value pairs")]
struct Cli {
    /// Block design file to flatten
    filename: PathBuf,

    /// Keep the surrounding quotes on quoted values
    #[arg(long)]
    keep_quotes: bool,

    /// Truncate keys and values longer than this many bytes
    #[arg(long, value_name = "BYTES")]
    max_token_len: Option<usize>,
}

impl Cli {
    fn options(&self) -> Options {
        let value_quotes = if self.keep_quotes {
            ValueQuotes::Keep
        } else {
            ValueQuotes::Strip
        };
        Options::default()
            .with_value_quotes(value_quotes)
            .with_max_token_len(self.max_token_len)
    }
}

#[derive(Debug)]
enum CliError {
    FileNotFound(PathBuf),
    FileRead(PathBuf, io::Error),
    Parse(ParseError),
    Output(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "Can't open {}", path.display()),
            CliError::FileRead(path, e) => write!(f, "failed to read {}: {}", path.display(), e),
            CliError::Parse(e) => write!(f, "{e}"),
            CliError::Output(e) => write!(f, "failed to write output: {e}"),
        }
    }
}

impl From<ParseError> for CliError {
    fn from(err: ParseError) -> Self {
        CliError::Parse(err)
    }
}

fn read_input(path: &Path) -> Result<String, CliError> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CliError::FileNotFound(path.to_path_buf()),
        _ => CliError::FileRead(path.to_path_buf(), e),
    })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn execute(cli: &Cli) -> Result<(), CliError> {
    let text = read_input(&cli.filename)?;

    // Collect first so that nothing is printed for a document that fails to parse
    let pairs = Flattener::with_options(&text, cli.options()).collect::<Result<Vec<_>, _>>()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for pair in &pairs {
        writeln!(out, "{pair}").map_err(CliError::Output)?;
    }
    out.flush().map_err(CliError::Output)
}

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    if let Err(e) = execute(&cli) {
        eprintln!("{PROGRAM}: {e}");
        process::exit(1);
    }
}
