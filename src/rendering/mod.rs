//! Text layout and viewport projection.
//!
//! [`layout`] turns stripped plain text into a display list of positioned
//! glyphs on a fixed monospace grid; [`viewport`] selects the subset visible
//! at a given scroll offset and maps it into device coordinates. Both halves
//! are pure: the display list is recomputed wholesale on every load, and a
//! re-render is just a fresh projection of it.

pub mod layout;
pub mod viewport;

pub use layout::{content_height, layout, DisplayList, GlyphPlacement, PageMetrics};
pub use viewport::{visible, DeviceGlyph, ScrollDirection, ViewportState};
