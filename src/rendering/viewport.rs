//! Viewport scroll state and the visible-set projection.

use serde::{Deserialize, Serialize};

use super::layout::DisplayList;

/// Direction of a scroll command, as delivered by a shell.
///
/// Serialized lowercase (`"up"` / `"down"`) to match the shell wire
/// protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Scroll offset for one loaded document.
///
/// Only the lower bound is enforced. There is deliberately no clamp against
/// content height: scrolling past the end is allowed and projects an empty
/// visible set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportState {
    scroll: i32,
}

impl ViewportState {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }

    /// Current scroll offset in pixels, always >= 0.
    pub fn scroll(&self) -> i32 {
        self.scroll
    }

    /// Apply one scroll command and return the new offset.
    ///
    /// `Down` adds `step`; `Up` subtracts it, clamped at zero.
    pub fn scroll_by(&mut self, direction: ScrollDirection, step: i32) -> i32 {
        match direction {
            ScrollDirection::Down => self.scroll += step,
            ScrollDirection::Up => self.scroll = (self.scroll - step).max(0),
        }
        self.scroll
    }
}

/// One glyph mapped into device coordinates.
///
/// `y` can be negative when the glyph's row straddles the viewport top edge;
/// clipping partial rows is the drawing side's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceGlyph {
    pub x: i32,
    pub y: i32,
    pub ch: char,
}

/// Project the subset of `display_list` visible at `scroll` into device
/// coordinates.
///
/// A placement is visible iff its row bottom reaches the viewport top
/// (`y + vstep >= scroll`) and its own top has not passed the viewport
/// bottom (`y <= scroll + viewport_height`). Both bounds are inclusive.
/// Device coordinates are `(x, y - scroll)`.
pub fn visible(
    display_list: &DisplayList,
    scroll: i32,
    viewport_height: i32,
    vstep: i32,
) -> impl Iterator<Item = DeviceGlyph> + '_ {
    display_list
        .iter()
        .filter(move |glyph| glyph.y + vstep >= scroll && glyph.y <= scroll + viewport_height)
        .map(move |glyph| DeviceGlyph {
            x: glyph.x,
            y: glyph.y - scroll,
            ch: glyph.ch,
        })
}
