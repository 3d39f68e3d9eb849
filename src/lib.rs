//! Graze
//!
//! A tiny text-mode browsing engine: fetch a page over HTTP(S), strip its
//! markup with a naive tag scanner, lay the remaining characters on a
//! fixed-pitch grid, and project the visible slice for a scroll offset.
//! Drawing stays outside the crate; a [`Shell`] exchanges JSON frames and
//! scroll events with whatever owns the pixels.
//!
//! # Example
//!
//! The text pipeline works without a network:
//!
//! ```
//! use graze::{layout, strip, BrowserConfig};
//!
//! let config = BrowserConfig::default();
//! let text = strip("<p>hi</p>");
//! let glyphs = layout(&text, config.page_metrics());
//! assert_eq!(glyphs[0].ch, 'h');
//! assert_eq!((glyphs[0].x, glyphs[0].y), (13, 18));
//! ```
//!
//! A full session fetches, then serves frames until the shell hangs up:
//!
//! ```no_run
//! use graze::{Browser, BrowserConfig, StdioShell};
//!
//! # fn main() -> graze::Result<()> {
//! let mut browser = Browser::new(BrowserConfig::default())?;
//! let mut shell = StdioShell::new();
//! browser.run(&mut shell, "http://example.org/index.html")?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod browser;
pub mod fetch;
pub mod lex;
pub mod rendering;
pub mod shell;
pub mod url;

pub use browser::Browser;
pub use lex::{strip, stripped};
pub use rendering::{
    layout, visible, DeviceGlyph, DisplayList, GlyphPlacement, PageMetrics, ScrollDirection,
};
pub use shell::{MemoryShell, ProcessShell, RenderFrame, Shell, ShellEvent, StdioShell};
pub use url::ParsedUrl;

/// Session configuration.
///
/// The defaults match the classic toy-browser values: an 800x600 page with
/// a 13px character advance, 18px line advance and 100px scroll step.
///
/// # Examples
///
/// ```
/// let cfg = graze::BrowserConfig::default();
/// assert_eq!(cfg.width, 800);
/// assert!(cfg.user_agent.starts_with("graze/"));
/// ```
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Page width in pixels; the wrap margin derives from it.
    pub width: i32,
    /// Viewport height in pixels.
    pub height: i32,
    /// Horizontal advance per character.
    pub hstep: i32,
    /// Vertical advance per line.
    pub vstep: i32,
    /// Pixels moved per scroll command.
    pub scroll_step: i32,
    /// User agent string to send with requests.
    pub user_agent: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            hstep: 13,
            vstep: 18,
            scroll_step: 100,
            user_agent: concat!("graze/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl BrowserConfig {
    /// The fixed-pitch grid this configuration lays text out on.
    pub fn page_metrics(&self) -> PageMetrics {
        PageMetrics {
            width: self.width,
            hstep: self.hstep,
            vstep: self.vstep,
        }
    }
}
