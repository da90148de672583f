use super::*;

fn spec(repeat: u32) -> TimelineSpec {
    TimelineSpec {
        unit_duration: 1.0,
        repeat,
    }
}

#[test]
fn sample_reports_end_of_unit_on_exact_boundaries() {
    let s = spec(2);
    assert_eq!(s.total_duration(), 3.0);

    let start = TimelineSample::at(&s, 0.0);
    assert_eq!((start.iteration, start.progress), (0, 0.0));

    let mid = TimelineSample::at(&s, 1.25);
    assert_eq!(mid.iteration, 1);
    assert!((mid.progress - 0.25).abs() < 1e-12);

    let boundary = TimelineSample::at(&s, 2.0);
    assert_eq!((boundary.iteration, boundary.progress), (1, 1.0));

    let end = TimelineSample::at(&s, 99.0);
    assert_eq!((end.iteration, end.progress), (2, 1.0));
    assert_eq!(end.total_time, 3.0);
}

#[test]
fn wrap_position_parks_multiples_at_the_end() {
    assert_eq!(wrap_position(0.0, 3.0), 0.0);
    assert_eq!(wrap_position(3.0, 3.0), 3.0);
    assert_eq!(wrap_position(6.0, 3.0), 3.0);
    assert_eq!(wrap_position(5.0, 3.0), 2.0);
    assert!((wrap_position(4.5, 3.0) - 1.5).abs() < 1e-12);
}

#[test]
fn create_rejects_bad_unit_duration() {
    let mut t = Ticker::new();
    let err = t
        .create_timeline(TimelineSpec {
            unit_duration: 0.0,
            repeat: 1,
        })
        .unwrap_err();
    assert!(matches!(err, FlapError::Animation(_)));
    assert_eq!(t.live_timelines(), 0);
}

#[test]
fn seek_queues_repeat_event_only_on_unit_change() {
    let mut t = Ticker::new();
    let tl = t.create_timeline(spec(3)).unwrap();
    t.seek_timeline(tl, 0.5).unwrap();
    assert!(t.drain_events().is_empty());

    t.seek_timeline(tl, 2.5).unwrap();
    assert_eq!(
        t.drain_events(),
        vec![RepeatEvent {
            timeline: tl,
            iteration: 2
        }]
    );

    t.seek_timeline(tl, 2.75).unwrap();
    assert!(t.drain_events().is_empty());
}

#[test]
fn scrubber_seek_wraps_onto_timeline() {
    let mut t = Ticker::new();
    let tl = t.create_timeline(spec(2)).unwrap();
    let sc = t.create_scrubber(tl).unwrap();

    t.seek_scrubber(sc, 3.0).unwrap();
    let s = t.timeline_sample(tl).unwrap();
    assert_eq!((s.iteration, s.progress), (2, 1.0));

    t.seek_scrubber(sc, 5.0).unwrap();
    let s = t.timeline_sample(tl).unwrap();
    assert_eq!((s.iteration, s.progress), (1, 1.0));
}

#[test]
fn drive_lands_exactly_on_target() {
    let mut t = Ticker::new();
    let tl = t.create_timeline(spec(3)).unwrap();
    let sc = t.create_scrubber(tl).unwrap();
    t.seek_scrubber(sc, 4.0).unwrap();

    let target = t.scrub_by(sc, 3.0, 0.1, Ease::OutQuad).unwrap();
    assert_eq!(target, 7.0);
    assert!(t.is_scrubbing(sc).unwrap());
    assert!(!t.is_idle());

    t.tick(0.05);
    let mid = t.scrubber_position(sc).unwrap();
    assert!(mid > 4.0 && mid < 7.0);

    t.tick(0.05);
    assert_eq!(t.scrubber_position(sc).unwrap(), 7.0);
    assert!(!t.is_scrubbing(sc).unwrap());
    assert!(t.is_idle());
}

#[test]
fn overlapping_drives_redirect_from_live_position() {
    let mut t = Ticker::new();
    let tl = t.create_timeline(spec(3)).unwrap();
    let sc = t.create_scrubber(tl).unwrap();
    t.seek_scrubber(sc, 4.0).unwrap();

    t.scrub_by(sc, 3.0, 1.0, Ease::Linear).unwrap();
    t.tick(0.5);
    let live = t.scrubber_position(sc).unwrap();
    assert!((live - 5.5).abs() < 1e-9);

    let target = t.scrub_by(sc, 2.0, 1.0, Ease::Linear).unwrap();
    assert_eq!(target, 9.0);
    assert_eq!(t.scrubber_position(sc).unwrap(), live);

    t.tick(2.0);
    assert_eq!(t.scrubber_position(sc).unwrap(), 9.0);
}

#[test]
fn zero_duration_drive_applies_instantly() {
    let mut t = Ticker::new();
    let tl = t.create_timeline(spec(1)).unwrap();
    let sc = t.create_scrubber(tl).unwrap();
    t.scrub_by(sc, 1.5, 0.0, Ease::OutQuad).unwrap();
    assert_eq!(t.scrubber_position(sc).unwrap(), 1.5);
    assert!(t.is_idle());
    assert!(t.scrub_by(sc, -1.0, 0.1, Ease::Linear).is_err());
}

#[test]
fn killing_timeline_kills_bound_scrubbers_and_events() {
    let mut t = Ticker::new();
    let tl = t.create_timeline(spec(3)).unwrap();
    let sc = t.create_scrubber(tl).unwrap();
    t.seek_scrubber(sc, 2.5).unwrap();

    assert!(t.kill_timeline(tl));
    assert!(!t.kill_timeline(tl));
    assert!(!t.is_scrubber_alive(sc));
    assert!(t.drain_events().is_empty());
    assert!(matches!(
        t.scrub_by(sc, 1.0, 0.1, Ease::Linear),
        Err(FlapError::Animation(_))
    ));

    let stats = t.stats();
    assert_eq!(stats.timelines_killed, 1);
    assert_eq!(stats.scrubbers_killed, 1);
}

#[test]
fn playing_resources_advance_with_tick() {
    let mut t = Ticker::new();
    let tl = t.create_timeline(spec(1)).unwrap();
    t.set_timeline_playback(tl, Playback::Playing).unwrap();
    t.tick(1.5);
    let s = t.timeline_sample(tl).unwrap();
    assert_eq!(s.iteration, 1);
    t.tick(5.0);
    // Completes and pauses at the end.
    assert_eq!(t.timeline_sample(tl).unwrap().total_time, 2.0);
    assert!(t.is_idle());

    let tl2 = t.create_timeline(spec(1)).unwrap();
    let sc = t.create_scrubber(tl2).unwrap();
    t.set_scrubber_playback(sc, Playback::Playing).unwrap();
    t.tick(2.5);
    assert_eq!(t.scrubber_position(sc).unwrap(), 2.5);
    assert!((t.timeline_sample(tl2).unwrap().total_time - 0.5).abs() < 1e-12);
    t.set_scrubber_playback(sc, Playback::Paused).unwrap();
    assert!(t.is_idle());
}

#[test]
fn undrained_events_collapse_to_one_per_timeline() {
    let mut t = Ticker::new();
    let a = t.create_timeline(spec(9)).unwrap();
    let b = t.create_timeline(spec(9)).unwrap();

    for step in 1..=500u32 {
        t.seek_timeline(a, f64::from(step % 10) + 0.5).unwrap();
        if step == 3 {
            t.seek_timeline(b, 4.5).unwrap();
        }
    }
    // 500 % 10 == 0, so `a` ends in its first unit.
    assert_eq!(
        t.drain_events(),
        vec![
            RepeatEvent {
                timeline: a,
                iteration: 0
            },
            RepeatEvent {
                timeline: b,
                iteration: 4
            },
        ]
    );
}

#[test]
fn redirect_extends_the_pending_target_not_the_live_position() {
    let mut t = Ticker::new();
    let tl = t.create_timeline(spec(9)).unwrap();
    let sc = t.create_scrubber(tl).unwrap();

    t.scrub_by(sc, 4.0, 1.0, Ease::Linear).unwrap();
    t.tick(0.25);
    assert!((t.scrubber_position(sc).unwrap() - 1.0).abs() < 1e-12);

    // Live position is 1.0, but the new drive ends past the pending 4.0.
    assert_eq!(t.scrub_by(sc, 2.0, 1.0, Ease::Linear).unwrap(), 6.0);
    t.tick(2.0);
    assert_eq!(t.scrubber_position(sc).unwrap(), 6.0);
}
