//! Windowed viewer: load a page and serve visible-glyph frames to a drawing
//! shell over the line-delimited JSON protocol, scrolling on its commands.

use anyhow::Result;
use clap::Parser;

use graze::{Browser, BrowserConfig, ProcessShell, StdioShell};

/// CLI flags
#[derive(Parser)]
#[command(name = "graze", version, about = "Serve page frames to a drawing shell")]
struct Cli {
    /// Page to open, as scheme://host[:port]/path
    url: String,

    /// Renderer command to spawn; it speaks the JSON frame protocol on its
    /// stdio. Without this flag the protocol runs on this process's own
    /// stdin/stdout.
    #[arg(long)]
    shell: Option<String>,

    /// Page width in pixels
    #[arg(long, default_value_t = 800)]
    width: i32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 600)]
    height: i32,

    /// Horizontal advance per character
    #[arg(long, default_value_t = 13)]
    hstep: i32,

    /// Vertical advance per line
    #[arg(long, default_value_t = 18)]
    vstep: i32,

    /// Pixels moved per scroll command
    #[arg(long, default_value_t = 100)]
    scroll_step: i32,

    /// User agent to present to the server
    #[arg(long)]
    user_agent: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = BrowserConfig {
        width: cli.width,
        height: cli.height,
        hstep: cli.hstep,
        vstep: cli.vstep,
        scroll_step: cli.scroll_step,
        ..BrowserConfig::default()
    };
    if let Some(user_agent) = cli.user_agent {
        config.user_agent = user_agent;
    }

    let mut browser = Browser::new(config)?;
    match cli.shell {
        Some(command) => {
            let mut shell = ProcessShell::spawn(&command)?;
            browser.run(&mut shell, &cli.url)?;
        }
        None => {
            let mut shell = StdioShell::new();
            browser.run(&mut shell, &cli.url)?;
        }
    }
    Ok(())
}
