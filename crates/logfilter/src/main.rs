mod cli;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;

use cli::Cli;
use logfilter_core::{sort_records, LineParser, PrivateRanges, Record};

/// Counts reported once all input has been consumed.
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    accepted: usize,
    rejected: usize,
    by_reason: BTreeMap<&'static str, usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let ansi = io::stderr().is_terminal();
    tracing::subscriber::set_global_default(log_subscriber(io::stderr, ansi))
        .context("failed to install logger")?;

    let parser = LineParser::new(cli.delimiter, PrivateRanges::rfc1918());
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let input = open_input(cli.file.as_deref())?;
    let summary = run(input, &mut out, &parser, &cli.order_by)?;
    out.flush().context("failed to write output")?;

    info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        by_reason = ?summary.by_reason,
        "done"
    );
    Ok(())
}

/// Colour codes are only emitted when `ansi` is set.
fn log_subscriber<W>(writer: W, ansi: bool) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_ansi(ansi)
        .finish()
}

/// Open `path`, or standard input when no path is given.
fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            info!("reading from stdin");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}

/// Read every line, keep the accepted records, sort them by `order_by` and
/// write one block per record to `out`.
fn run<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    parser: &LineParser,
    order_by: &str,
) -> Result<Summary> {
    let mut summary = Summary::default();
    let mut records: Vec<Record> = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", idx + 1))?;
        match parser.parse(&line) {
            Ok(rec) => records.push(rec),
            Err(e) => {
                warn!(line = idx + 1, "skipping line: {}", e);
                summary.rejected += 1;
                *summary.by_reason.entry(e.kind()).or_default() += 1;
            }
        }
    }
    summary.accepted = records.len();

    if !sort_records(&mut records, order_by) {
        warn!(key = order_by, "unknown sort key, keeping input order");
    }

    for rec in &records {
        writeln!(out, "{}", rec).context("failed to write output")?;
    }
    Ok(summary)
}
