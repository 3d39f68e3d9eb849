//! The renderer shell boundary.
//!
//! Drawing and key handling live outside this crate. A [`Shell`] receives
//! one [`RenderFrame`] per render trigger and hands back [`ShellEvent`]s;
//! the concrete implementations here bridge that exchange over
//! line-delimited JSON, one object per line:
//!
//! ```text
//! viewer -> shell   {"scroll":100,"glyphs":[{"x":13,"y":18,"ch":"a"},...]}
//! shell -> viewer   {"event":"scroll","direction":"down"}
//! shell -> viewer   {"event":"scroll","direction":"up"}
//! shell -> viewer   {"event":"close"}
//! ```
//!
//! The shell owns clipping (device `y` may be negative for a row straddling
//! the viewport top), physical drawing, and the translation of key presses
//! into `up`/`down` commands. Malformed event lines are skipped with a
//! warning; a closed pipe ends the session cleanly.

use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rendering::{DeviceGlyph, ScrollDirection};

/// The visible glyph set plus the scroll offset it was projected at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub scroll: i32,
    pub glyphs: Vec<DeviceGlyph>,
}

/// An event reported by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum ShellEvent {
    /// A scroll command, already translated from whatever key or gesture
    /// the shell saw.
    Scroll { direction: ScrollDirection },
    /// The shell is going away; the session should end.
    Close,
}

/// One side of the render/event exchange.
pub trait Shell {
    /// Present one frame to the drawing side.
    fn present(&mut self, frame: &RenderFrame) -> Result<()>;

    /// Block until the next event. `Ok(None)` means the shell is gone
    /// (closed pipe or end of script) and the session should end.
    fn next_event(&mut self) -> Result<Option<ShellEvent>>;
}

fn write_frame(mut writer: impl Write, frame: &RenderFrame) -> Result<()> {
    let line = serde_json::to_string(frame)
        .map_err(|e| Error::Shell(format!("failed to encode frame: {}", e)))?;
    writeln!(writer, "{}", line)
        .and_then(|()| writer.flush())
        .map_err(|e| Error::Shell(format!("failed to write frame: {}", e)))
}

fn read_event(reader: &mut impl BufRead) -> Result<Option<ShellEvent>> {
    let mut line = String::new();
    loop {
        line.clear();
        let n = reader
            .read_line(&mut line)
            .map_err(|e| Error::Shell(format!("failed to read event: {}", e)))?;
        if n == 0 {
            return Ok(None);
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match serde_json::from_str::<ShellEvent>(trimmed) {
            Ok(event) => return Ok(Some(event)),
            Err(e) => warn!("ignoring malformed shell event {:?}: {}", trimmed, e),
        }
    }
}

/// Shell adapter that speaks the wire protocol on this process's own
/// stdin/stdout, so any outer program (or a pipe-wielding human) can drive
/// the viewer.
pub struct StdioShell {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdioShell {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdioShell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell for StdioShell {
    fn present(&mut self, frame: &RenderFrame) -> Result<()> {
        write_frame(self.stdout.lock(), frame)
    }

    fn next_event(&mut self) -> Result<Option<ShellEvent>> {
        read_event(&mut self.stdin.lock())
    }
}

/// Shell adapter that spawns an external renderer command and bridges the
/// wire protocol to its piped stdio. The child is killed and reaped when
/// the adapter is dropped.
pub struct ProcessShell {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl ProcessShell {
    /// Spawn `command` (program plus whitespace-separated arguments).
    pub fn spawn(command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| Error::Shell("empty shell command".to_string()))?;
        let mut child = Command::new(program)
            .args(parts)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| Error::Shell(format!("failed to spawn {:?}: {}", command, e)))?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::Shell("shell process has no stdin".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| Error::Shell("shell process has no stdout".to_string()))?;
        Ok(Self {
            child,
            stdin,
            stdout: BufReader::new(stdout),
        })
    }
}

impl Shell for ProcessShell {
    fn present(&mut self, frame: &RenderFrame) -> Result<()> {
        write_frame(&mut self.stdin, frame)
    }

    fn next_event(&mut self) -> Result<Option<ShellEvent>> {
        read_event(&mut self.stdout)
    }
}

impl Drop for ProcessShell {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// In-memory shell for tests: records every presented frame and replays a
/// scripted event queue, then reports EOF.
#[derive(Debug, Clone, Default)]
pub struct MemoryShell {
    frames: Vec<RenderFrame>,
    events: VecDeque<ShellEvent>,
}

impl MemoryShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// A shell that will deliver `events` in order and then hang up.
    pub fn scripted(events: impl IntoIterator<Item = ShellEvent>) -> Self {
        Self {
            frames: Vec::new(),
            events: events.into_iter().collect(),
        }
    }

    /// Every frame presented so far, oldest first.
    pub fn frames(&self) -> &[RenderFrame] {
        &self.frames
    }
}

impl Shell for MemoryShell {
    fn present(&mut self, frame: &RenderFrame) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn next_event(&mut self) -> Result<Option<ShellEvent>> {
        Ok(self.events.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_frame() -> RenderFrame {
        RenderFrame {
            scroll: 100,
            glyphs: vec![DeviceGlyph {
                x: 13,
                y: 18,
                ch: 'a',
            }],
        }
    }

    #[test]
    fn frame_wire_shape_is_stable() {
        let encoded = serde_json::to_string(&sample_frame()).unwrap();
        assert_eq!(
            encoded,
            r#"{"scroll":100,"glyphs":[{"x":13,"y":18,"ch":"a"}]}"#
        );
    }

    #[test]
    fn frame_round_trips_through_json() {
        let frame = sample_frame();
        let encoded = serde_json::to_string(&frame).unwrap();
        let decoded: RenderFrame = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, frame);
    }

    #[test]
    fn events_parse_from_wire_lines() {
        let down: ShellEvent =
            serde_json::from_str(r#"{"event":"scroll","direction":"down"}"#).unwrap();
        assert_eq!(
            down,
            ShellEvent::Scroll {
                direction: ScrollDirection::Down
            }
        );
        let up: ShellEvent =
            serde_json::from_str(r#"{"event":"scroll","direction":"up"}"#).unwrap();
        assert_eq!(
            up,
            ShellEvent::Scroll {
                direction: ScrollDirection::Up
            }
        );
        let close: ShellEvent = serde_json::from_str(r#"{"event":"close"}"#).unwrap();
        assert_eq!(close, ShellEvent::Close);
    }

    #[test]
    fn events_serialize_lowercase() {
        let line = serde_json::to_string(&ShellEvent::Scroll {
            direction: ScrollDirection::Up,
        })
        .unwrap();
        assert_eq!(line, r#"{"event":"scroll","direction":"up"}"#);
    }

    #[test]
    fn write_frame_emits_one_line() {
        let mut buf = Vec::new();
        write_frame(&mut buf, &sample_frame()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);
        let decoded: RenderFrame = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(decoded, sample_frame());
    }

    #[test]
    fn read_event_skips_garbage_and_blank_lines() {
        let input = b"\nnot json\n{\"event\":\"scroll\",\"direction\":\"down\"}\n";
        let mut reader = Cursor::new(&input[..]);
        let event = read_event(&mut reader).unwrap();
        assert_eq!(
            event,
            Some(ShellEvent::Scroll {
                direction: ScrollDirection::Down
            })
        );
    }

    #[test]
    fn read_event_reports_eof_as_none() {
        let mut reader = Cursor::new(&b""[..]);
        assert_eq!(read_event(&mut reader).unwrap(), None);
    }

    #[test]
    fn memory_shell_records_and_replays() {
        let mut shell = MemoryShell::scripted([
            ShellEvent::Scroll {
                direction: ScrollDirection::Down,
            },
            ShellEvent::Close,
        ]);
        shell.present(&sample_frame()).unwrap();
        assert_eq!(shell.frames().len(), 1);
        assert!(matches!(
            shell.next_event().unwrap(),
            Some(ShellEvent::Scroll { .. })
        ));
        assert_eq!(shell.next_event().unwrap(), Some(ShellEvent::Close));
        assert_eq!(shell.next_event().unwrap(), None);
    }
}
