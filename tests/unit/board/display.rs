use super::*;
use crate::animation::ease::Ease;
use crate::board::config::Alignment;

fn fps() -> Fps {
    Fps::new(60, 1).unwrap()
}

fn slot_total(board: &Board) -> usize {
    (0..board.line_count())
        .map(|i| board.slots(i).unwrap().len())
        .sum()
}

#[test]
fn demo_board_settles_on_its_text() {
    let mut board = Board::new(&BoardConfig::demo()).unwrap();
    assert_eq!(board.ticker().live_timelines(), 40);
    assert!(!board.is_settled());
    assert_eq!(board.render_text(), vec![" ".repeat(10); 4].join("\n"));

    let frames = board.run_until_settled(fps(), 2_000).unwrap();
    assert!(frames > 0 && frames < 2_000);
    assert!(board.is_settled());
    assert_eq!(
        board.render_text(),
        ["babe      ", " new craft", "     of ui", "   dropped"].join("\n")
    );
    // The committed symbol keeps the unknown glyph even though a blank is shown.
    assert_eq!(board.displayed_text(0).unwrap(), "babe!     ");
}

#[test]
fn set_text_flips_only_that_line() {
    let mut board = Board::new(&BoardConfig {
        lines: vec![LineConfig::new("abc").with_length(4); 2],
        seed: 11,
    })
    .unwrap();
    board.run_until_settled(fps(), 2_000).unwrap();
    let drives_before = board.ticker().stats().drives_started;

    board.set_text(1, "cab").unwrap();
    // Slot 3 stays blank, so only three transitions are scheduled.
    assert_eq!(board.ticker().stats().drives_started, drives_before + 3);
    board.run_until_settled(fps(), 2_000).unwrap();
    assert_eq!(board.render_text(), "abc \ncab ");

    assert!(matches!(
        board.set_text(5, "x"),
        Err(FlapError::Validation(_))
    ));
}

#[test]
fn apply_resizes_and_rebuilds() {
    let mut board = Board::new(&BoardConfig {
        lines: vec![
            LineConfig::new("hello").with_length(6),
            LineConfig::new("bye").with_length(3),
        ],
        seed: 1,
    })
    .unwrap();
    board.run_until_settled(fps(), 2_000).unwrap();

    let next = BoardConfig {
        lines: vec![LineConfig::new("123")
            .with_length(4)
            .with_characters("0123456789")
            .with_alignment(Alignment::Right)],
        seed: 1,
    };
    board.apply(&next).unwrap();
    assert_eq!(board.line_count(), 1);
    assert_eq!(slot_total(&board), 4);
    assert_eq!(board.ticker().live_timelines(), 4);
    assert_eq!(board.ticker().live_scrubbers(), 4);

    board.run_until_settled(fps(), 2_000).unwrap();
    assert_eq!(board.render_text(), " 123");
    assert_eq!(board.config().lines, next.lines);
}

#[test]
fn advance_tracks_time_and_snapshots() {
    let mut board = Board::new(&BoardConfig {
        lines: vec![LineConfig::new("z").with_length(1)],
        seed: 3,
    })
    .unwrap();
    board.advance(0.25).unwrap();
    board.advance(f64::NAN).unwrap();
    assert_eq!(board.elapsed_secs(), 0.25);

    board.run_until_settled(fps(), 2_000).unwrap();
    let frame = board.snapshot(FrameIndex(7));
    assert_eq!(frame.frame, FrameIndex(7));
    assert!(frame.settled);
    assert_eq!(frame.to_text(), "z");
    assert_eq!(frame.lines[0].slots[0].displayed, 'z');
    assert_eq!(frame.lines[0].slots[0].progress, 1.0);
}

#[test]
fn line_ease_reaches_its_slots() {
    let mut board = Board::new(&BoardConfig {
        lines: vec![LineConfig::new("ab").with_length(2).with_ease(Ease::Linear)],
        seed: 2,
    })
    .unwrap();
    assert!(board.slots(0).unwrap().iter().all(|s| s.ease() == Ease::Linear));

    let mut next = board.config();
    next.lines[0].ease = Ease::OutQuad;
    board.apply(&next).unwrap();
    assert!(board.slots(0).unwrap().iter().all(|s| s.ease() == Ease::OutQuad));
    board.run_until_settled(fps(), 2_000).unwrap();
    assert_eq!(board.render_text(), "ab");
}

#[test]
fn one_broken_slot_does_not_starve_the_others() {
    let mut board = Board::new(&BoardConfig {
        lines: vec![LineConfig::new("z").with_length(1); 2],
        seed: 4,
    })
    .unwrap();
    board.lines[0].slots[0].unmount();

    let mut failures = 0;
    for _ in 0..600 {
        if board.advance(1.0 / 60.0).is_err() {
            failures += 1;
        }
    }
    assert_eq!(failures, 600);
    assert!(board.is_settled());
    assert_eq!(board.lines[1].slots[0].visible_symbol(), 'z');
    assert!(matches!(
        board.advance(0.0),
        Err(FlapError::ResourceUnavailable(_))
    ));
}
