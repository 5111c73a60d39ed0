//! amz-bestpick - pick the best products from one Amazon search page
//!
//! A Rust implementation with TLS fingerprint emulation for reliable scraping.

use amz_bestpick::commands::pick::{is_search_url, PickCommand};
use amz_bestpick::config::{Config, OutputFormat};
use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "amz-bestpick",
    version,
    about = "Pick the cheapest, highest-rated, and soonest-arriving products from an Amazon search page",
    long_about = "Fetches a single Amazon search-results page and reports three winners: \
                  the cheapest product, the highest-rated product, and the product with \
                  the earliest estimated delivery."
)]
struct Cli {
    /// Amazon search URL (https://www.amazon.com/s?...). Prompted for when omitted.
    url: Option<String>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, env = "AMZ_PROXY")]
    proxy: Option<String>,

    /// Delay before the request in milliseconds
    #[arg(long, env = "AMZ_DELAY")]
    delay: Option<u64>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (table, json, markdown)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(delay) = cli.delay {
        config.delay_ms = delay;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }

    let url = match cli.url {
        Some(url) => {
            anyhow::ensure!(
                is_search_url(&url),
                "Please provide a valid Amazon search URL (https://www.amazon.com/s?...)"
            );
            url
        }
        None => match prompt_for_url()? {
            Some(url) => url,
            None => {
                println!("Exiting program.");
                return Ok(());
            }
        },
    };

    let cmd = PickCommand::new(config);
    let output = cmd.execute(&url).await?;
    println!("{}", output);

    Ok(())
}

/// Prompts for a search URL until one is valid. Returns `None` on `x`/`X`
/// or end of input.
fn prompt_for_url() -> Result<Option<String>> {
    let stdin = io::stdin();
    let mut prompt = "Enter the Amazon search URL: ";

    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("x") {
            return Ok(None);
        }
        if is_search_url(input) {
            return Ok(Some(input.to_string()));
        }

        prompt = "Please enter a valid Amazon Search URL and try again. Or press 'X' to quit: ";
    }
}
