//! Acceptance tests for autoplay selection at the TUI level
//!
//! The unit suites cover the exposure pipeline in isolation; these tests
//! drive the whole stack (keys → scroll → layout → snapshot → coordinator
//! → render) and assert on the playing banner and status line.
//!
//! Test scenarios:
//! 1. First frame selects the topmost fully visible video
//! 2. Scrolling the playing video partially out hands playback over
//! 3. Scrolling so no video is fully visible stops playback
//! 4. The countdown banner ticks down with time and parks at "Playing"
//! 5. Feeds without videos never play anything

use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;
use std::time::Duration;

// ===== Test Fixtures =====

/// v1 sits at the top of lane 0 (rows 0-8), v2 below it (rows 10-18).
/// At a 20-row feed pane both start fully visible; one row of scroll cuts
/// v1 while v2 stays whole until offset 10.
const FEED_FIXTURE: &str = r#"{
    "all": [
        {"type": "video", "id": "v1", "url": "https://cdn.example.com/v1.mp4", "caption": "skate clip"},
        {"type": "text", "id": "t1", "body": "hello world"},
        {"type": "image", "id": "i1", "url": "https://picsum.photos/seed/i1/400", "caption": "sunset"},
        {"type": "video", "id": "v2", "url": "https://cdn.example.com/v2.mp4", "caption": "cat video"},
        {"type": "product", "id": "p1", "image_url": "https://picsum.photos/seed/p1/400", "name": "Enamel Mug", "price": 18.0},
        {"type": "text", "id": "t2", "body": "short note"},
        {"type": "image", "id": "i2", "url": "https://picsum.photos/seed/i2/400", "caption": "forest"},
        {"type": "product", "id": "p2", "image_url": "https://picsum.photos/seed/p2/400", "name": "Field Notes", "price": 9.5}
    ],
    "videos": [], "users": [], "images": [], "products": []
}"#;

const NO_VIDEO_FIXTURE: &str = r#"{
    "all": [
        {"type": "text", "id": "t1", "body": "hello world"},
        {"type": "image", "id": "i1", "url": "https://picsum.photos/seed/i1/400", "caption": "sunset"},
        {"type": "product", "id": "p1", "image_url": "https://picsum.photos/seed/p1/400", "name": "Enamel Mug", "price": 18.0}
    ],
    "videos": [], "users": [], "images": [], "products": []
}"#;

fn harness() -> AcceptanceTestHarness {
    AcceptanceTestHarness::from_fixture_json(FEED_FIXTURE).expect("Should load fixture")
}

// ===== Selection =====

#[test]
fn first_frame_plays_the_topmost_fully_visible_video() {
    // GIVEN: Fresh feed
    let mut harness = harness();

    // WHEN: The first frame renders
    let output = harness.render_to_string();

    // THEN: v1 plays; both the card banner and the status line say so
    assert_eq!(harness.state().playing().map(|id| id.as_str()), Some("v1"));
    assert!(output.contains("▶ Playing"), "banner expected: {output}");
    assert!(output.contains("▶ v1"), "status indicator expected: {output}");

    // AND: The non-playing video shows the idle affordance
    assert!(output.contains("▷ Video"), "idle banner expected: {output}");
}

#[test]
fn scrolling_the_playing_video_out_hands_playback_over() {
    // GIVEN: v1 playing at the top
    let mut harness = harness();
    harness.render_to_string();
    assert_eq!(harness.state().playing().map(|id| id.as_str()), Some("v1"));

    // WHEN: One row of scroll cuts v1's top border off screen
    harness.send_key(KeyCode::Char('j'));
    harness.render_to_string();

    // THEN: v2, still fully visible, takes over
    assert_eq!(harness.state().playing().map(|id| id.as_str()), Some("v2"));

    // WHEN: Scrolling back restores v1 to full visibility
    harness.send_key(KeyCode::Char('k'));
    harness.render_to_string();

    // THEN: The topmost video wins again
    assert_eq!(harness.state().playing().map(|id| id.as_str()), Some("v1"));
}

#[test]
fn playback_stops_when_no_video_is_fully_visible() {
    // GIVEN: v1 playing at the top
    let mut harness = harness();
    harness.render_to_string();

    // WHEN: User jumps to the bottom, where both videos are cut off
    harness.send_key_with_mods(KeyCode::Char('G'), crossterm::event::KeyModifiers::SHIFT);
    let output = harness.render_to_string();

    // THEN: Nothing plays
    assert!(harness.state().playing().is_none());
    assert!(!output.contains("▶ Playing"), "no banner expected: {output}");
}

#[test]
fn steady_scroll_position_does_not_restart_playback() {
    // GIVEN: v1 playing with two seconds of countdown spent
    let mut harness = harness();
    harness.render_to_string();
    harness.advance(Duration::from_secs(2));
    let mid_countdown = harness.render_to_string();
    assert!(mid_countdown.contains("▶ Playing · 3s"));

    // WHEN: More frames render with no scroll movement
    harness.render_to_string();
    let repeated = harness.render_to_string();

    // THEN: The countdown did not restart (same remaining seconds)
    assert!(
        repeated.contains("▶ Playing · 3s"),
        "re-observing an unchanged layout must not restart the countdown: {repeated}"
    );
}

// ===== Countdown =====

#[test]
fn the_countdown_banner_ticks_down_with_time() {
    // GIVEN: v1 starts playing with the default 5 s countdown
    let mut harness = harness();
    let start = harness.render_to_string();
    assert!(start.contains("▶ Playing · 5s"), "fresh countdown: {start}");

    // WHEN: Two seconds pass
    harness.advance(Duration::from_secs(2));
    let later = harness.render_to_string();

    // THEN: The banner shows the remaining time
    assert!(later.contains("▶ Playing · 3s"), "ticked countdown: {later}");
}

#[test]
fn an_elapsed_countdown_parks_at_playing() {
    // GIVEN: v1 playing
    let mut harness = harness();
    harness.render_to_string();

    // WHEN: The whole countdown elapses
    harness.advance(Duration::from_secs(6));
    let output = harness.render_to_string();

    // THEN: The banner stays on "Playing" without a seconds counter
    assert!(output.contains("▶ Playing"), "banner expected: {output}");
    assert!(
        !output.contains("▶ Playing ·"),
        "elapsed countdown must drop the counter: {output}"
    );
}

#[test]
fn a_playback_handover_restarts_the_countdown() {
    // GIVEN: v1 playing with most of its countdown spent
    let mut harness = harness();
    harness.render_to_string();
    harness.advance(Duration::from_secs(4));
    assert!(harness.render_to_string().contains("▶ Playing · 1s"));

    // WHEN: Scroll hands playback to v2
    harness.send_key(KeyCode::Char('j'));
    let output = harness.render_to_string();

    // THEN: The new playback starts a fresh countdown
    assert_eq!(harness.state().playing().map(|id| id.as_str()), Some("v2"));
    assert!(
        output.contains("▶ Playing · 5s"),
        "handover must restart the countdown: {output}"
    );
}

// ===== No Candidates =====

#[test]
fn feeds_without_videos_never_play_anything() {
    // GIVEN: A feed of text, image, and product cards only
    let mut harness =
        AcceptanceTestHarness::from_fixture_json(NO_VIDEO_FIXTURE).expect("Should load fixture");

    // WHEN: Frames render and time passes
    let output = harness.render_to_string();
    harness.advance(Duration::from_secs(3));
    harness.render_to_string();

    // THEN: Nothing ever plays
    assert!(harness.state().playing().is_none());
    assert!(!output.contains("▶ Playing"));
}
