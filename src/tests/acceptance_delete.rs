//! Acceptance tests for delete-with-confirmation
//!
//! Clicking a card opens a confirmation dialog; 'y'/Enter deletes the card,
//! 'n'/Esc cancels. Deleting a template also removes it from the
//! repository, so it stays gone across refreshes.
//!
//! Test scenarios:
//! 1. Clicking a card opens the dialog for that card
//! 2. 'y' and Enter confirm; the card leaves the feed and a notice shows
//! 3. 'n' and Esc cancel without deleting
//! 4. Other keys are captured while the dialog is open
//! 5. Deleting the playing video hands playback to the next candidate
//! 6. Deleted templates stay gone after a refresh

use crate::test_harness::AcceptanceTestHarness;
use crate::view_state::RowOffset;
use crossterm::event::KeyCode;
use std::time::Duration;

// ===== Test Fixtures =====

/// Same eight-card layout as the scroll suite; at 80x24 the topmost video
/// card v1 occupies lane 0 rows 0-8 (screen rows 3-11).
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

fn harness() -> AcceptanceTestHarness {
    AcceptanceTestHarness::from_fixture_json(FEED_FIXTURE).expect("Should load fixture")
}

// ===== Opening the Dialog =====

#[test]
fn clicking_a_card_opens_the_confirmation_dialog() {
    // GIVEN: Feed on screen
    let mut harness = harness();

    // WHEN: User clicks inside the topmost card (v1)
    harness.click_at(1, 4);

    // THEN: The dialog is open for v1
    assert_eq!(
        harness.state().pending_delete().map(|id| id.as_str()),
        Some("v1")
    );
    let output = harness.render_to_string();
    assert!(output.contains("Confirm delete"), "dialog expected: {output}");
    assert!(output.contains("Delete 'v1'?"), "dialog names the card: {output}");
}

#[test]
fn clicking_a_lane_gutter_opens_nothing() {
    // GIVEN: Feed in double-column mode (lanes are 39 wide, gutter at x=39)
    let mut harness = harness();

    // WHEN: User clicks the gutter column between the lanes
    harness.click_at(39, 4);

    // THEN: No dialog opens
    assert!(harness.state().pending_delete().is_none());
}

#[test]
fn clicking_the_spacing_row_between_cards_opens_nothing() {
    // GIVEN: Feed on screen; lane 0 has a blank row at content row 9
    // (between v1 and v2), which is screen row 12
    let mut harness = harness();

    // WHEN: User clicks the spacing row
    harness.click_at(1, 12);

    // THEN: No dialog opens
    assert!(harness.state().pending_delete().is_none());
}

// ===== Confirm =====

#[test]
fn confirming_with_y_removes_the_card_and_shows_a_notice() {
    // GIVEN: Dialog open for v1
    let mut harness = harness();
    harness.click_at(1, 4);

    // WHEN: User presses 'y'
    harness.send_key(KeyCode::Char('y'));

    // THEN: The dialog is closed, the card is gone, and a notice shows
    assert!(harness.state().pending_delete().is_none());
    assert_eq!(harness.state().cards().len(), 7);
    assert!(harness
        .state()
        .cards()
        .iter()
        .all(|card| card.id().as_str() != "v1"));
    let output = harness.render_to_string();
    assert!(output.contains("Deleted v1"), "notice expected: {output}");
}

#[test]
fn enter_also_confirms() {
    // GIVEN: Dialog open for v1
    let mut harness = harness();
    harness.click_at(1, 4);

    // WHEN: User presses Enter
    harness.send_key(KeyCode::Enter);

    // THEN: The card is gone
    assert_eq!(harness.state().cards().len(), 7);
}

#[test]
fn deleting_the_playing_video_hands_playback_to_the_next_candidate() {
    // GIVEN: v1 playing (topmost fully visible video)
    let mut harness = harness();
    harness.render_to_string();
    assert_eq!(harness.state().playing().map(|id| id.as_str()), Some("v1"));

    // WHEN: User deletes v1
    harness.click_at(1, 4);
    harness.send_key(KeyCode::Char('y'));

    // THEN: Playback clears immediately (eviction), and the reflowed feed
    // promotes the next fully visible video on the following frame
    assert!(harness.state().playing().is_none());
    harness.render_to_string();
    assert_eq!(harness.state().playing().map(|id| id.as_str()), Some("v2"));
}

#[test]
fn deleted_templates_stay_gone_after_a_refresh() {
    // GIVEN: v1 deleted
    let mut harness = harness();
    harness.click_at(1, 4);
    harness.send_key(KeyCode::Char('y'));
    assert_eq!(harness.state().cards().len(), 7);

    // WHEN: User refreshes and the fetch completes
    harness.send_key(KeyCode::Char('r'));
    harness.advance(Duration::from_millis(1100));

    // THEN: Page one reloads without the deleted template
    assert_eq!(harness.state().cards().len(), 7);
    assert!(harness
        .state()
        .cards()
        .iter()
        .all(|card| card.id().as_str() != "v1"));
}

// ===== Cancel =====

#[test]
fn cancelling_with_n_keeps_the_card() {
    // GIVEN: Dialog open for v1
    let mut harness = harness();
    harness.click_at(1, 4);

    // WHEN: User presses 'n'
    harness.send_key(KeyCode::Char('n'));

    // THEN: The dialog closes and nothing was deleted
    assert!(harness.state().pending_delete().is_none());
    assert_eq!(harness.state().cards().len(), 8);
    let output = harness.render_to_string();
    assert!(!output.contains("Confirm delete"));
}

#[test]
fn esc_also_cancels() {
    // GIVEN: Dialog open for v1
    let mut harness = harness();
    harness.click_at(1, 4);

    // WHEN: User presses Esc
    harness.send_key(KeyCode::Esc);

    // THEN: Nothing was deleted
    assert!(harness.state().pending_delete().is_none());
    assert_eq!(harness.state().cards().len(), 8);
}

// ===== Dialog Key Capture =====

#[test]
fn the_dialog_captures_scroll_and_tab_keys() {
    // GIVEN: Dialog open for v1
    let mut harness = harness();
    harness.click_at(1, 4);

    // WHEN: User presses scroll and tab keys
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Char('2'));

    // THEN: Neither acted; the dialog is still open
    assert_eq!(harness.state().scroll, RowOffset::new(0));
    assert_eq!(harness.state().tab, crate::model::FeedTab::All);
    assert!(harness.state().pending_delete().is_some());
}

#[test]
fn mouse_clicks_are_swallowed_while_the_dialog_is_open() {
    // GIVEN: Dialog open for v1
    let mut harness = harness();
    harness.click_at(1, 4);

    // WHEN: User clicks another card (i1, lane 1 top rows) and a tab label
    harness.click_at(41, 8);
    harness.click_at(10, 1);

    // THEN: The dialog still targets v1 and the tab did not change
    assert_eq!(
        harness.state().pending_delete().map(|id| id.as_str()),
        Some("v1")
    );
    assert_eq!(harness.state().tab, crate::model::FeedTab::All);
}
