//! Deterministic frame digests.
//!
//! The wire encoding of a frame is the observable output of the whole
//! text pipeline, so these tests pin it down by hashing the canonical
//! JSON of projected frames.

use std::fs;
use std::path::PathBuf;

use graze::{layout, strip, visible, BrowserConfig, RenderFrame};
use sha2::{Digest, Sha256};

fn page() -> String {
    format!(
        "<html><body><h1>Digest page</h1>{}</body></html>",
        "<p>The quick brown fox jumps over the lazy dog.</p>".repeat(40)
    )
}

fn frame_at(scroll: i32) -> RenderFrame {
    let config = BrowserConfig::default();
    let text = strip(&page());
    let display_list = layout(&text, config.page_metrics());
    RenderFrame {
        scroll,
        glyphs: visible(&display_list, scroll, config.height, config.vstep).collect(),
    }
}

fn digest(frame: &RenderFrame) -> String {
    let canonical = serde_json::to_string(frame).expect("frame serializes");
    hex::encode(Sha256::digest(canonical.as_bytes()))
}

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/frames");
    p.push(name);
    p
}

#[test]
fn digests_are_deterministic() {
    assert_eq!(digest(&frame_at(0)), digest(&frame_at(0)));
    assert_eq!(digest(&frame_at(300)), digest(&frame_at(300)));
}

#[test]
fn digests_track_scroll_state() {
    let top = digest(&frame_at(0));
    let scrolled = digest(&frame_at(100));
    assert_ne!(top, scrolled);
}

#[test]
fn golden_frame_digest_matches_fixture() {
    let actual = digest(&frame_at(0));

    let expected_path = golden_path("top.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/frames").ok();
        fs::write(&expected_path, &actual).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let expected = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(actual, expected.trim());
}
