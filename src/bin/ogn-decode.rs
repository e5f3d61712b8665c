//! ogn-decode: decode OGN APRS lines from a file or standard input and
//! write one JSON object per decoded message to standard output.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use ogn_aprs_parser::{MessageKind, OgnMessage};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Decode OGN APRS lines into JSON.
#[derive(Parser, Debug)]
#[command(name = "ogn-decode", about = "Decode OGN APRS lines into JSON")]
struct Args {
    /// File with one APRS line per line. Reads standard input when absent or `-`.
    input: Option<PathBuf>,

    /// Pretty-print each JSON object.
    #[arg(long)]
    pretty: bool,

    /// Only print messages of this kind.
    #[arg(long, value_enum)]
    only: Option<Kind>,

    /// Exit with an error if any line fails to decode.
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
enum Kind {
    Sender,
    ReceiverBeacon,
    ReceiverStatus,
    Comment,
}

impl From<Kind> for MessageKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Sender => MessageKind::Sender,
            Kind::ReceiverBeacon => MessageKind::ReceiverBeacon,
            Kind::ReceiverStatus => MessageKind::ReceiverStatus,
            Kind::Comment => MessageKind::Comment,
        }
    }
}

#[derive(Default, Debug, PartialEq, Eq)]
struct Stats {
    decoded: usize,
    filtered: usize,
    failed: usize,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays pure JSON (controlled via RUST_LOG).
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let reader: Box<dyn BufRead> = match args.input.as_deref() {
        None => Box::new(io::stdin().lock()),
        Some(path) if path == Path::new("-") => Box::new(io::stdin().lock()),
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stats = decode(reader, &mut out, &args)?;
    out.flush().context("Failed to flush output")?;

    info!(
        decoded = stats.decoded,
        filtered = stats.filtered,
        failed = stats.failed,
        "Finished decoding"
    );

    if args.strict && stats.failed > 0 {
        bail!("{} line(s) failed to decode", stats.failed);
    }

    Ok(())
}

fn decode(reader: impl BufRead, out: &mut impl Write, args: &Args) -> Result<Stats> {
    let mut stats = Stats::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        match ogn_aprs_parser::parse(line) {
            Ok(message) => {
                let wanted = args
                    .only
                    .map_or(true, |kind| MessageKind::from(kind) == message.kind());
                if !wanted {
                    stats.filtered += 1;
                    continue;
                }
                write_message(out, &message, args.pretty)?;
                stats.decoded += 1;
            }
            Err(err) => {
                stats.failed += 1;
                if args.strict {
                    warn!(line = index + 1, error = %err, "Failed to decode line");
                } else {
                    debug!(line = index + 1, error = %err, "Skipping undecodable line");
                }
            }
        }
    }

    Ok(stats)
}

fn write_message(out: &mut impl Write, message: &OgnMessage, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, message)?;
    } else {
        serde_json::to_writer(&mut *out, message)?;
    }
    writeln!(out).context("Failed to write output")?;
    Ok(())
}
