//! Console viewer: fetch one page and print its stripped text to stdout.

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::Parser;

use graze::fetch::{build_client, fetch_body};
use graze::{stripped, BrowserConfig, ParsedUrl};

/// CLI flags
#[derive(Parser)]
#[command(name = "graze-dump", version, about = "Fetch a page and print its text")]
struct Cli {
    /// Page to fetch, as scheme://host[:port]/path
    url: String,

    /// User agent to present to the server
    #[arg(long)]
    user_agent: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let user_agent = cli
        .user_agent
        .unwrap_or_else(|| BrowserConfig::default().user_agent);
    let url: ParsedUrl = cli.url.parse()?;
    let client = build_client()?;
    let body = fetch_body(&client, &url, &user_agent)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for ch in stripped(&body) {
        write!(out, "{}", ch)?;
    }
    out.flush()?;
    Ok(())
}
