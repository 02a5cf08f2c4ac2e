//! mercari-search - Fetch a search result page from mercari.jp
//!
//! Each flag maps one-to-one onto a field of the search condition.

use anyhow::Result;
use clap::Parser;
use mercari_search::commands::SearchCommand;
use mercari_search::config::{Config, OutputFormat};
use mercari_search::SearchCondition;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mercari-search",
    version,
    about = "Fetch a search result from mercari.jp",
    long_about = "Fetches one mercari.jp search result page and prints the name, price, sale status and links of every listed item."
)]
struct Cli {
    /// Page number
    #[arg(short, long, default_value_t = 0)]
    page: u32,

    /// Search keyword
    #[arg(short, long, default_value = "")]
    keyword: String,

    /// Minimum price
    #[arg(long, visible_alias = "min", default_value_t = 0)]
    price_min: u32,

    /// Maximum price
    #[arg(long, visible_alias = "max", default_value_t = 0)]
    price_max: u32,

    /// Category root number
    #[arg(long, default_value_t = 0)]
    category_root: u32,

    /// Category child number
    #[arg(long, default_value_t = 0)]
    category_child: u32,

    /// Brand name keyword
    #[arg(long, default_value = "")]
    brand_name: String,

    /// Brand id number
    #[arg(long, default_value_t = 0)]
    brand_id: u32,

    /// Search in desc order
    #[arg(long)]
    desc: bool,

    /// Fetch only on-sale items
    #[arg(long)]
    on_sale: bool,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, env = "MERCARI_PROXY")]
    proxy: Option<String>,

    /// Request timeout in seconds (MERCARI_TIMEOUT is read by the config layer)
    #[arg(long)]
    timeout: Option<u64>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn condition(&self) -> SearchCondition {
        SearchCondition {
            keyword: self.keyword.clone(),
            brand_id: self.brand_id,
            brand_name: self.brand_name.clone(),
            category_root: self.category_root,
            category_child: self.category_child,
            price_min: self.price_min,
            price_max: self.price_max,
            page: self.page,
            sort_desc: self.desc,
            on_sale: self.on_sale,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for results
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(proxy) = cli.proxy.clone() {
        config.proxy = Some(proxy);
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }

    let condition = cli.condition();
    let output = SearchCommand::new(config).execute(&condition).await?;
    println!("{}", output);

    Ok(())
}
