//! catalogue-card-scraper - print a catalogue card from a catalog record

use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use catalogue_card_scraper::encoding::decode_page;
use catalogue_card_scraper::fetch::{CatalogClient, FetchConfig, DEFAULT_BASE_URL};
use catalogue_card_scraper::{dom, extract_record, CatalogRecord, Options};

#[derive(Parser)]
#[command(name = "catalogue-card-scraper")]
#[command(version, about = "Print a catalogue card from a library catalog's MARC view", long_about = None)]
#[command(after_help = "EXAMPLES:
    catalogue-card-scraper 19858379                     Fetch and print record 19858379
    catalogue-card-scraper 19858379 --json              Print the card as JSON
    catalogue-card-scraper 19858379 -f saved.html       Read a saved librarian view")]
struct Cli {
    /// Catalog control number of the record
    #[arg(value_name = "CONTROL_NUMBER")]
    control_number: String,

    /// Read the librarian view from a file instead of fetching it
    #[arg(short, long, value_name = "PATH")]
    file: Option<std::path::PathBuf>,

    /// Catalog root URL
    #[arg(long, env = "CATALOG_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "CATALOG_TIMEOUT_SECS", default_value_t = 30)]
    timeout: u64,

    /// Print the card as JSON
    #[arg(long)]
    json: bool,

    /// Log progress to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let options = Options::default();
    let record = match &cli.file {
        Some(path) => read_record(path, &cli.control_number, &options)?,
        None => {
            let client = CatalogClient::new(FetchConfig {
                base_url: cli.base_url.clone(),
                timeout: Duration::from_secs(cli.timeout),
                ..FetchConfig::default()
            })?;
            client.fetch_record(&cli.control_number, &options)?
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_card(&record);
    }
    Ok(())
}

fn read_record(path: &Path, control_number: &str, options: &Options) -> Result<CatalogRecord, Box<dyn Error>> {
    let bytes = fs::read(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read saved page");
    let doc = dom::parse(&decode_page(&bytes, None));
    Ok(CatalogRecord {
        control_number: Some(control_number.to_string()),
        fields: extract_record(&doc, options)?,
    })
}

/// Print the card: the call-number line `a<control number>`, then one line per field.
fn print_card(record: &CatalogRecord) {
    if let Some(control_number) = &record.control_number {
        println!("a{control_number}");
    }
    for line in record.lines() {
        println!("{line}");
    }
}
