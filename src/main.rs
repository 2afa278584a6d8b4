use dynamic_data::loader::{ColumnarLoader, LoaderConfig};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use tracing::{info, warn};

const USAGE: &str = "usage: dynamic_data [--config FILE.json] [--symbol SYMBOL] [FEED.csv]";

/// Reads a delimited feed from a file or stdin and prints one JSON object per
/// row with every reserved and dynamic field.
fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let mut config = LoaderConfig::default();
    let mut symbol = None;
    let mut path = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let file = args.next().ok_or(USAGE)?;
                config = LoaderConfig::from_json(&std::fs::read_to_string(file)?)?;
            }
            "--symbol" => symbol = Some(args.next().ok_or(USAGE)?),
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ => path = Some(arg),
        }
    }
    if let Some(symbol) = symbol {
        config = config.with_symbol(symbol);
    }

    let reader: Box<dyn BufRead> = match &path {
        Some(p) => Box::new(BufReader::new(File::open(p)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut loader = ColumnarLoader::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let (mut loaded, mut skipped) = (0usize, 0usize);

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if loader.columns().is_empty() {
            loader.read_header(&line)?;
            continue;
        }
        match loader.read_row(&line) {
            Ok(data) => {
                let row: serde_json::Map<String, serde_json::Value> = data
                    .fields()
                    .map(|(name, value)| (name.to_string(), serde_json::Value::from(value)))
                    .collect();
                writeln!(out, "{}", serde_json::Value::Object(row))?;
                loaded += 1;
            }
            Err(e) => {
                warn!(line = line_no + 1, error = %e, "skipping row");
                skipped += 1;
            }
        }
    }

    info!(loaded, skipped, "feed done");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dynamic_data=info")),
        )
        .with_writer(io::stderr)
        .init();
}
