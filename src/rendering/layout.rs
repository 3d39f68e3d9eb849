//! Fixed-pitch text layout.

/// Grid geometry for one laid-out page: overall width plus the fixed
/// horizontal and vertical advances of the monospace grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMetrics {
    pub width: i32,
    pub hstep: i32,
    pub vstep: i32,
}

/// One positioned character on the virtual page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphPlacement {
    pub x: i32,
    pub y: i32,
    pub ch: char,
}

/// Ordered glyph placements for an entire document, recomputed wholesale on
/// every load.
pub type DisplayList = Vec<GlyphPlacement>;

/// Lay `text` onto the page grid.
///
/// The cursor starts at `(hstep, vstep)`. Each character is placed, then the
/// cursor advances by `hstep`, then the line wraps once `x > width - hstep`.
/// Because the wrap check runs after the advance, the rightmost column is
/// placed before the cursor drops down. Wrapping is per-character with no
/// word-boundary awareness, and a literal `\n` occupies a cell like any
/// other character.
pub fn layout(text: &str, page: PageMetrics) -> DisplayList {
    let mut display_list = Vec::with_capacity(text.len());
    let mut x = page.hstep;
    let mut y = page.vstep;
    for ch in text.chars() {
        display_list.push(GlyphPlacement { x, y, ch });
        x += page.hstep;
        if x > page.width - page.hstep {
            y += page.vstep;
            x = page.hstep;
        }
    }
    display_list
}

/// Bottom edge of the laid-out content: the last line's `y` plus one
/// `vstep`, or 0 for an empty list. Informational only: scrolling is never
/// clamped against it.
pub fn content_height(display_list: &DisplayList, vstep: i32) -> i32 {
    display_list.last().map_or(0, |glyph| glyph.y + vstep)
}
