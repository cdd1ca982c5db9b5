//! Integration tests for frame message dispatch
//!
//! These tests verify:
//! - Hit testing against screen coordinates
//! - Maximized windows never resize or drag
//! - Button-down drag ordering
//! - Non-client size calculation restoring the window rectangle

use chromeless::hit_test::codes;
use chromeless::{classify, FrameProc, Message, Outcome, PanelProc, Point, Rect, Size};
use chromeless_integration_tests::{restored_host, MockHost};
use mockall::Sequence;
use proptest::prelude::*;

const ORIGIN: Point = Point::new(200, 150);
const SIZE: Size = Size::new(640, 480);
const BORDER: i32 = 8;

fn maximized_host() -> MockHost {
    let mut host = MockHost::new();
    host.expect_is_maximized().return_const(true);
    host.expect_screen_to_client().never();
    host.expect_release_capture().never();
    host.expect_send_caption_button_down().never();
    host
}

#[test]
fn test_hit_test_regions() {
    let mut host = restored_host(ORIGIN, SIZE, BORDER);
    let proc = FrameProc::default();

    let cases = [
        (Point::new(201, 151), codes::HT_TOPLEFT),
        (Point::new(520, 151), codes::HT_TOP),
        (Point::new(838, 151), codes::HT_TOPRIGHT),
        (Point::new(201, 400), codes::HT_LEFT),
        (Point::new(520, 400), codes::HT_CLIENT),
        (Point::new(838, 400), codes::HT_RIGHT),
        (Point::new(201, 628), codes::HT_BOTTOMLEFT),
        (Point::new(520, 628), codes::HT_BOTTOM),
        (Point::new(838, 628), codes::HT_BOTTOMRIGHT),
    ];

    for (screen, expected) in cases {
        let outcome = proc.handle(&mut host, Message::NcHitTest(screen));
        assert_eq!(outcome, Outcome::Handled(expected as isize), "at {:?}", screen);
    }
}

#[test]
fn test_maximized_hit_test_is_client() {
    let mut host = maximized_host();
    let outcome = FrameProc::default().handle(&mut host, Message::NcHitTest(ORIGIN));
    assert_eq!(outcome, Outcome::Handled(codes::HT_CLIENT as isize));
}

#[test]
fn test_button_down_releases_capture_before_drag() {
    let mut host = MockHost::new();
    let mut seq = Sequence::new();
    host.expect_is_maximized().return_const(false);
    host.expect_release_capture()
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    host.expect_send_caption_button_down()
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());

    let outcome = FrameProc::default().handle(&mut host, Message::LButtonDown);
    assert_eq!(outcome, Outcome::Handled(0));
}

#[test]
fn test_button_down_while_maximized_never_drags() {
    let mut host = maximized_host();
    let outcome = FrameProc::default().handle(&mut host, Message::LButtonDown);
    assert_eq!(outcome, Outcome::Default);
}

#[test]
fn test_calc_size_runs_default_then_restores() {
    let mut host = MockHost::new();
    host.expect_default_calc_size()
        .times(1)
        .returning(|rect: &mut Rect| {
            rect.left += 8;
            rect.top += 31;
            rect.right -= 8;
            rect.bottom -= 8;
        });

    let mut rect = Rect::new(200, 150, 840, 630);
    let outcome = FrameProc::default().handle(&mut host, Message::NcCalcSize(&mut rect));

    assert_eq!(outcome, Outcome::Handled(0));
    assert_eq!(rect, Rect::new(200, 150, 840, 630));
}

#[test]
fn test_unhandled_messages_go_to_default() {
    let mut host = MockHost::new();
    assert_eq!(FrameProc::default().handle(&mut host, Message::Other), Outcome::Default);
}

#[test]
fn test_panel_passes_hit_test_through() {
    let outcome = PanelProc.handle(Message::NcHitTest(Point::new(520, 400)));
    assert_eq!(outcome, Outcome::Handled(codes::HT_TRANSPARENT as isize));
}

proptest! {
    #[test]
    fn prop_calc_size_is_identity(
        left in -4000i32..4000,
        top in -4000i32..4000,
        width in 0i32..4000,
        height in 0i32..4000,
        inset in 0i32..40,
    ) {
        let mut host = MockHost::new();
        host.expect_default_calc_size()
            .returning(move |rect: &mut Rect| {
                rect.left += inset;
                rect.bottom -= inset;
            });

        let original = Rect::new(left, top, left + width, top + height);
        let mut rect = original;
        FrameProc::default().handle(&mut host, Message::NcCalcSize(&mut rect));
        prop_assert_eq!(rect, original);
    }

    #[test]
    fn prop_maximized_is_always_client(x in any::<i16>(), y in any::<i16>()) {
        let mut host = maximized_host();
        let outcome = FrameProc::default()
            .handle(&mut host, Message::NcHitTest(Point::new(x as i32, y as i32)));
        prop_assert_eq!(outcome, Outcome::Handled(codes::HT_CLIENT as isize));
    }

    #[test]
    fn prop_restored_hit_test_matches_classifier(
        x in 0i32..2000,
        y in 0i32..1500,
        width in 1i32..2000,
        height in 1i32..1500,
        border in 0i32..32,
    ) {
        let size = Size::new(width, height);
        let mut host = restored_host(ORIGIN, size, border);
        let screen = Point::new(ORIGIN.x + x, ORIGIN.y + y);

        let outcome = FrameProc::default().handle(&mut host, Message::NcHitTest(screen));
        let expected = classify(Point::new(x, y), size, border).hit_code();
        prop_assert_eq!(outcome, Outcome::Handled(expected as isize));
    }
}
