//! Markup stripping.
//!
//! A single left-to-right scan that drops `<...>` spans and emits everything
//! else untouched. This is intentionally not an HTML tokenizer: quoted
//! attribute values, entities, comments, and CDATA get no special treatment,
//! an unclosed `<` swallows the rest of the document, and a bare `>` in text
//! is consumed by the state flip rather than emitted. These quirks are part
//! of the output contract and are pinned by tests.

/// Scanner state: emitting text, or consuming a tag span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Text,
    InTag,
}

/// Streaming iterator over the plain-text characters of an HTML body.
///
/// Construct with [`stripped`]. Total over any input; never fails.
#[derive(Debug, Clone)]
pub struct Stripped<'a> {
    chars: std::str::Chars<'a>,
    state: LexState,
}

impl Iterator for Stripped<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        for ch in self.chars.by_ref() {
            match ch {
                '<' => self.state = LexState::InTag,
                '>' => self.state = LexState::Text,
                ch if self.state == LexState::Text => return Some(ch),
                _ => {}
            }
        }
        None
    }
}

/// Stream the plain text of `body` one character at a time.
///
/// The console viewer writes this straight to stdout; [`strip`] collects the
/// same characters into a `String` for layout.
pub fn stripped(body: &str) -> Stripped<'_> {
    Stripped {
        chars: body.chars(),
        state: LexState::Text,
    }
}

/// Remove all `<...>` tag spans from `body`.
pub fn strip(body: &str) -> String {
    stripped(body).collect()
}
