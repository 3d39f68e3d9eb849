//! Browsing session state.
//!
//! A [`Browser`] owns the pipeline from URL to device glyphs: fetch the
//! body, strip markup, lay the text out once, then project the visible
//! slice for whatever scroll offset the session is at. Loading is the only
//! expensive step; scrolling just re-projects the cached display list.

use log::{debug, info};
use reqwest::blocking::Client;

use crate::error::Result;
use crate::fetch::{build_client, fetch_body};
use crate::lex::strip;
use crate::rendering::{layout, DisplayList, ScrollDirection, ViewportState};
use crate::shell::{RenderFrame, Shell, ShellEvent};
use crate::url::ParsedUrl;
use crate::BrowserConfig;

/// A single-document browsing session.
pub struct Browser {
    config: BrowserConfig,
    client: Client,
    text: String,
    display_list: DisplayList,
    viewport: ViewportState,
}

impl Browser {
    pub fn new(config: BrowserConfig) -> Result<Self> {
        let client = build_client()?;
        Ok(Self {
            config,
            client,
            text: String::new(),
            display_list: DisplayList::new(),
            viewport: ViewportState::new(),
        })
    }

    /// Fetch `raw_url`, strip its markup and lay it out as the current
    /// document. Scroll resets to the top. On failure the previous document
    /// stays in place and the error is returned to the caller.
    pub fn load(&mut self, raw_url: &str) -> Result<()> {
        let url: ParsedUrl = raw_url.parse()?;
        info!("loading {}", url);
        let body = fetch_body(&self.client, &url, &self.config.user_agent)?;
        self.set_document(strip(&body));
        Ok(())
    }

    /// Like [`load`](Self::load), but a failure becomes the document: the
    /// error text is laid out and shown in place of the page.
    pub fn load_or_error_page(&mut self, raw_url: &str) {
        if let Err(e) = self.load(raw_url) {
            info!("showing error page for {}: {}", raw_url, e);
            self.set_document(format!("Error: {}", e));
        }
    }

    fn set_document(&mut self, text: String) {
        self.display_list = layout(&text, self.config.page_metrics());
        debug!("laid out {} glyphs", self.display_list.len());
        self.text = text;
        self.viewport = ViewportState::new();
    }

    /// Move the viewport by one configured scroll step and return the new
    /// offset.
    pub fn scroll_by(&mut self, direction: ScrollDirection) -> i32 {
        self.viewport.scroll_by(direction, self.config.scroll_step)
    }

    /// Project the frame for the current scroll offset.
    pub fn frame(&self) -> RenderFrame {
        let glyphs = crate::rendering::visible(
            &self.display_list,
            self.viewport.scroll(),
            self.config.height,
            self.config.vstep,
        )
        .collect();
        RenderFrame {
            scroll: self.viewport.scroll(),
            glyphs,
        }
    }

    /// Load `raw_url` (falling back to an error page) and serve frames to
    /// `shell` until it closes or hangs up. Scroll events re-project and
    /// re-present; shell I/O failures end the session with an error.
    pub fn run(&mut self, shell: &mut impl Shell, raw_url: &str) -> Result<()> {
        self.load_or_error_page(raw_url);
        shell.present(&self.frame())?;
        loop {
            match shell.next_event()? {
                Some(ShellEvent::Scroll { direction }) => {
                    self.scroll_by(direction);
                    shell.present(&self.frame())?;
                }
                Some(ShellEvent::Close) | None => {
                    info!("shell closed, ending session");
                    return Ok(());
                }
            }
        }
    }

    /// The stripped text of the current document.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The laid-out glyph placements of the current document.
    pub fn display_list(&self) -> &DisplayList {
        &self.display_list
    }

    /// The current scroll offset in page coordinates.
    pub fn scroll(&self) -> i32 {
        self.viewport.scroll()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MemoryShell;

    fn browser() -> Browser {
        Browser::new(BrowserConfig::default()).unwrap()
    }

    #[test]
    fn unparseable_url_becomes_an_error_page() {
        let mut b = browser();
        b.load_or_error_page("ftp://example.org/readme");
        assert!(b.text().starts_with("Error: Unsupported scheme"));
        assert!(!b.display_list().is_empty());
        assert_eq!(b.scroll(), 0);
    }

    #[test]
    fn failed_load_keeps_previous_document() {
        let mut b = browser();
        b.set_document("old page".to_string());
        assert!(b.load("ftp://example.org/").is_err());
        assert_eq!(b.text(), "old page");
    }

    #[test]
    fn scroll_steps_follow_config() {
        let mut b = browser();
        b.set_document("x".repeat(5000));
        assert_eq!(b.scroll_by(ScrollDirection::Down), 100);
        assert_eq!(b.scroll_by(ScrollDirection::Down), 200);
        assert_eq!(b.scroll_by(ScrollDirection::Up), 100);
        assert_eq!(b.scroll_by(ScrollDirection::Up), 0);
        assert_eq!(b.scroll_by(ScrollDirection::Up), 0);
    }

    #[test]
    fn frame_carries_scroll_and_projected_glyphs() {
        let mut b = browser();
        b.set_document("hello".to_string());
        let frame = b.frame();
        assert_eq!(frame.scroll, 0);
        assert_eq!(frame.glyphs.len(), 5);
        assert_eq!(frame.glyphs[0].x, 13);
        assert_eq!(frame.glyphs[0].y, 18);
        assert_eq!(frame.glyphs[0].ch, 'h');
    }

    #[test]
    fn frame_projects_device_coordinates_after_scrolling() {
        let mut b = browser();
        b.set_document("x".repeat(5000));
        b.scroll_by(ScrollDirection::Down);
        let frame = b.frame();
        assert_eq!(frame.scroll, 100);
        assert!(frame.glyphs.iter().all(|g| g.y <= b.config.height));
        let page_rows: Vec<i32> = b
            .display_list()
            .iter()
            .filter(|g| g.y + b.config.vstep >= 100 && g.y <= 100 + b.config.height)
            .map(|g| g.y - 100)
            .collect();
        assert_eq!(frame.glyphs.len(), page_rows.len());
    }

    #[test]
    fn run_presents_one_frame_per_trigger() {
        let mut shell = MemoryShell::scripted([
            ShellEvent::Scroll {
                direction: ScrollDirection::Down,
            },
            ShellEvent::Scroll {
                direction: ScrollDirection::Down,
            },
            ShellEvent::Scroll {
                direction: ScrollDirection::Up,
            },
            ShellEvent::Close,
        ]);
        let mut b = browser();
        b.run(&mut shell, "ftp://unreachable.invalid/").unwrap();
        let scrolls: Vec<i32> = shell.frames().iter().map(|f| f.scroll).collect();
        assert_eq!(scrolls, vec![0, 100, 200, 100]);
    }

    #[test]
    fn run_ends_cleanly_when_script_runs_out() {
        let mut shell = MemoryShell::scripted([ShellEvent::Scroll {
            direction: ScrollDirection::Down,
        }]);
        let mut b = browser();
        b.run(&mut shell, "ftp://unreachable.invalid/").unwrap();
        assert_eq!(shell.frames().len(), 2);
    }

    #[test]
    fn error_pages_scroll_like_any_document() {
        let mut b = browser();
        b.load_or_error_page("ftp://example.org/");
        assert_eq!(b.scroll_by(ScrollDirection::Down), 100);
    }
}
