//! Minimal frame-driven animation runtime.
//!
//! The [`Ticker`] owns every animation resource in an arena and hands out typed ids. Nothing
//! advances on its own: the owner calls [`Ticker::tick`] once per frame and then drains the
//! queued [`RepeatEvent`]s.
//!
//! Two resource kinds exist:
//!
//! - **Timelines**: a repeating program of `repeat + 1` equal units. Their position is a total
//!   time in `[0, total_duration]`; whenever the current unit (iteration) changes a repeat
//!   event is queued.
//! - **Scrubbers**: an endlessly repeating driver whose position maps onto one timeline's total
//!   time (wrapped into `(0, total_duration]`). Scrubbers can be pushed forward with an eased
//!   drive via [`Ticker::scrub_by`].
//!
//! Both kinds are created paused. Flip engines only ever move by seeks and drives; setting
//! [`Playback::Playing`] lets a resource run freely with the clock instead (a timeline stops at
//! its end, a scrubber keeps looping).
//!
//! At most one event per timeline is pending: a later iteration change replaces the queued one
//! in place. Bindings only care about the latest iteration, so the queue stays bounded by the
//! number of live timelines even if nobody drains it.

use std::collections::BTreeMap;

use crate::animation::ease::Ease;
use crate::foundation::error::{FlapError, FlapResult};

/// Handle to a timeline owned by a [`Ticker`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimelineId(pub u64);

/// Handle to a scrubber owned by a [`Ticker`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ScrubberId(pub u64);

/// Whether a resource advances on its own during [`Ticker::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Playback {
    /// Only explicit seeks and drives move the resource.
    #[default]
    Paused,
    /// Advances by the frame delta on every tick.
    Playing,
}

/// Shape of a repeating timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineSpec {
    /// Length of one repeat unit, in time units.
    pub unit_duration: f64,
    /// Number of extra repeats after the first unit.
    pub repeat: u32,
}

impl TimelineSpec {
    /// Duration of the whole program: `unit_duration * (repeat + 1)`.
    pub fn total_duration(&self) -> f64 {
        self.unit_duration * (f64::from(self.repeat) + 1.0)
    }
}

/// Position of a timeline expressed as a repeat unit plus progress within it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineSample {
    /// Zero-based repeat unit.
    pub iteration: u32,
    /// Progress through the unit in `[0, 1]`.
    pub progress: f64,
    /// Total time the sample was taken at.
    pub total_time: f64,
}

impl TimelineSample {
    /// Sample `spec` at `total_time`.
    ///
    /// An exact unit boundary (other than zero) reports the end of the preceding unit, so a
    /// timeline parked at `total_duration` is at the end of its last iteration.
    pub fn at(spec: &TimelineSpec, total_time: f64) -> Self {
        let total = spec.total_duration();
        let t = total_time.clamp(0.0, total);
        if t <= 0.0 {
            return Self {
                iteration: 0,
                progress: 0.0,
                total_time: 0.0,
            };
        }

        let q = t / spec.unit_duration;
        let whole = q.floor();
        let (iteration, progress) = if q == whole {
            (whole - 1.0, 1.0)
        } else {
            (whole, q - whole)
        };

        Self {
            iteration: (iteration.max(0.0) as u32).min(spec.repeat),
            progress,
            total_time: t,
        }
    }
}

/// Queued when a timeline moves into a different repeat unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepeatEvent {
    /// Timeline that changed unit.
    pub timeline: TimelineId,
    /// Unit the timeline is now in.
    pub iteration: u32,
}

/// Counters describing what a ticker has done since creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickerStats {
    /// Timelines created.
    pub timelines_created: u64,
    /// Timelines killed.
    pub timelines_killed: u64,
    /// Scrubbers created.
    pub scrubbers_created: u64,
    /// Scrubbers killed.
    pub scrubbers_killed: u64,
    /// Calls to [`Ticker::scrub_by`] that were accepted.
    pub drives_started: u64,
}

#[derive(Clone, Debug)]
struct TimelineState {
    spec: TimelineSpec,
    total_time: f64,
    iteration: u32,
    playback: Playback,
}

#[derive(Clone, Copy, Debug)]
struct Drive {
    from: f64,
    to: f64,
    duration: f64,
    elapsed: f64,
    ease: Ease,
}

impl Drive {
    fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f64 {
        if self.is_done() {
            return self.to;
        }
        self.ease
            .lerp(self.from, self.to, self.elapsed / self.duration)
    }
}

#[derive(Clone, Debug)]
struct ScrubberState {
    timeline: TimelineId,
    duration: f64,
    position: f64,
    playback: Playback,
    drive: Option<Drive>,
}

impl ScrubberState {
    fn target(&self) -> f64 {
        self.drive.map_or(self.position, |d| d.to)
    }
}

/// Arena and clock for timelines and scrubbers.
#[derive(Debug, Default)]
pub struct Ticker {
    next_id: u64,
    timelines: BTreeMap<TimelineId, TimelineState>,
    scrubbers: BTreeMap<ScrubberId, ScrubberState>,
    events: Vec<RepeatEvent>,
    stats: TickerStats,
}

impl Ticker {
    /// Create an empty ticker.
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Create a paused timeline positioned at zero.
    pub fn create_timeline(&mut self, spec: TimelineSpec) -> FlapResult<TimelineId> {
        if !spec.unit_duration.is_finite() || spec.unit_duration <= 0.0 {
            return Err(FlapError::animation(
                "timeline unit duration must be finite and > 0",
            ));
        }
        let id = TimelineId(self.alloc_id());
        self.timelines.insert(
            id,
            TimelineState {
                spec,
                total_time: 0.0,
                iteration: 0,
                playback: Playback::Paused,
            },
        );
        self.stats.timelines_created += 1;
        Ok(id)
    }

    /// Create a paused, endlessly repeating scrubber over `timeline`.
    ///
    /// One scrubber repeat spans the timeline's total duration. The scrubber starts at zero and
    /// does not touch the timeline until it is seeked or driven.
    pub fn create_scrubber(&mut self, timeline: TimelineId) -> FlapResult<ScrubberId> {
        let duration = self
            .timelines
            .get(&timeline)
            .ok_or_else(|| dead_timeline(timeline))?
            .spec
            .total_duration();
        let id = ScrubberId(self.alloc_id());
        self.scrubbers.insert(
            id,
            ScrubberState {
                timeline,
                duration,
                position: 0.0,
                playback: Playback::Paused,
                drive: None,
            },
        );
        self.stats.scrubbers_created += 1;
        Ok(id)
    }

    /// Whether `id` still refers to a live timeline.
    pub fn is_timeline_alive(&self, id: TimelineId) -> bool {
        self.timelines.contains_key(&id)
    }

    /// Whether `id` still refers to a live scrubber.
    pub fn is_scrubber_alive(&self, id: ScrubberId) -> bool {
        self.scrubbers.contains_key(&id)
    }

    /// Number of live timelines.
    pub fn live_timelines(&self) -> usize {
        self.timelines.len()
    }

    /// Number of live scrubbers.
    pub fn live_scrubbers(&self) -> usize {
        self.scrubbers.len()
    }

    /// Lifetime counters.
    pub fn stats(&self) -> TickerStats {
        self.stats
    }

    /// Kill a timeline, every scrubber bound to it and its queued events.
    ///
    /// Returns `false` if the timeline was already dead.
    pub fn kill_timeline(&mut self, id: TimelineId) -> bool {
        if self.timelines.remove(&id).is_none() {
            return false;
        }
        let before = self.scrubbers.len();
        self.scrubbers.retain(|_, s| s.timeline != id);
        self.stats.scrubbers_killed += (before - self.scrubbers.len()) as u64;
        self.stats.timelines_killed += 1;
        self.events.retain(|e| e.timeline != id);
        true
    }

    /// Kill a scrubber and any drive in flight on it.
    ///
    /// Returns `false` if the scrubber was already dead.
    pub fn kill_scrubber(&mut self, id: ScrubberId) -> bool {
        if self.scrubbers.remove(&id).is_none() {
            return false;
        }
        self.stats.scrubbers_killed += 1;
        true
    }

    /// Pause or play a timeline.
    pub fn set_timeline_playback(&mut self, id: TimelineId, playback: Playback) -> FlapResult<()> {
        let tl = self
            .timelines
            .get_mut(&id)
            .ok_or_else(|| dead_timeline(id))?;
        tl.playback = playback;
        Ok(())
    }

    /// Pause or play a scrubber. A drive in flight takes precedence over free play.
    pub fn set_scrubber_playback(&mut self, id: ScrubberId, playback: Playback) -> FlapResult<()> {
        let s = self
            .scrubbers
            .get_mut(&id)
            .ok_or_else(|| dead_scrubber(id))?;
        s.playback = playback;
        Ok(())
    }

    /// Current position of a timeline.
    pub fn timeline_sample(&self, id: TimelineId) -> FlapResult<TimelineSample> {
        let tl = self.timelines.get(&id).ok_or_else(|| dead_timeline(id))?;
        Ok(TimelineSample::at(&tl.spec, tl.total_time))
    }

    /// Shape of a timeline.
    pub fn timeline_spec(&self, id: TimelineId) -> FlapResult<TimelineSpec> {
        Ok(self.timelines.get(&id).ok_or_else(|| dead_timeline(id))?.spec)
    }

    /// Jump a timeline to `total_time` (clamped to its duration).
    pub fn seek_timeline(&mut self, id: TimelineId, total_time: f64) -> FlapResult<()> {
        let tl = self
            .timelines
            .get_mut(&id)
            .ok_or_else(|| dead_timeline(id))?;
        apply_timeline_time(id, tl, total_time, &mut self.events);
        Ok(())
    }

    /// Live position of a scrubber.
    pub fn scrubber_position(&self, id: ScrubberId) -> FlapResult<f64> {
        Ok(self
            .scrubbers
            .get(&id)
            .ok_or_else(|| dead_scrubber(id))?
            .position)
    }

    /// Position the scrubber will rest at once its drive (if any) completes.
    pub fn scrubber_target(&self, id: ScrubberId) -> FlapResult<f64> {
        Ok(self
            .scrubbers
            .get(&id)
            .ok_or_else(|| dead_scrubber(id))?
            .target())
    }

    /// Whether a drive is in flight on the scrubber.
    pub fn is_scrubbing(&self, id: ScrubberId) -> FlapResult<bool> {
        Ok(self
            .scrubbers
            .get(&id)
            .ok_or_else(|| dead_scrubber(id))?
            .drive
            .is_some())
    }

    /// Jump a scrubber to `position` and apply it to its timeline immediately.
    ///
    /// Cancels any drive in flight.
    pub fn seek_scrubber(&mut self, id: ScrubberId, position: f64) -> FlapResult<()> {
        let s = self
            .scrubbers
            .get_mut(&id)
            .ok_or_else(|| dead_scrubber(id))?;
        s.drive = None;
        s.position = position.max(0.0);
        sync_scrubber(s, &mut self.timelines, &mut self.events);
        Ok(())
    }

    /// Drive a scrubber forward by `delta` over `duration_secs` with `ease`.
    ///
    /// The drive starts from the live position but ends `delta` past the *pending* target, not
    /// past the live position. A drive issued while another is in flight therefore redirects it
    /// without losing distance, and the target never moves backwards. With no drive in flight
    /// the two are the same.
    /// A non-positive duration applies the move instantly. Returns the new target.
    pub fn scrub_by(
        &mut self,
        id: ScrubberId,
        delta: f64,
        duration_secs: f64,
        ease: Ease,
    ) -> FlapResult<f64> {
        if !delta.is_finite() || delta < 0.0 {
            return Err(FlapError::animation(
                "scrub delta must be finite and >= 0",
            ));
        }
        let s = self
            .scrubbers
            .get_mut(&id)
            .ok_or_else(|| dead_scrubber(id))?;

        let from = s.position;
        let to = s.target() + delta;
        self.stats.drives_started += 1;

        if duration_secs.is_finite() && duration_secs > 0.0 {
            s.drive = Some(Drive {
                from,
                to,
                duration: duration_secs,
                elapsed: 0.0,
                ease,
            });
        } else {
            s.drive = None;
            s.position = to;
            sync_scrubber(s, &mut self.timelines, &mut self.events);
        }
        Ok(to)
    }

    /// `true` when no drive is in flight and nothing is playing.
    pub fn is_idle(&self) -> bool {
        self.scrubbers
            .values()
            .all(|s| s.drive.is_none() && s.playback == Playback::Paused)
            && self
                .timelines
                .values()
                .all(|t| t.playback == Playback::Paused)
    }

    /// Advance every playing resource and in-flight drive by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        for (&id, tl) in self.timelines.iter_mut() {
            if tl.playback != Playback::Playing {
                continue;
            }
            let t = tl.total_time + dt;
            apply_timeline_time(id, tl, t, &mut self.events);
            if tl.total_time >= tl.spec.total_duration() {
                tl.playback = Playback::Paused;
            }
        }

        for s in self.scrubbers.values_mut() {
            let next = if let Some(mut drive) = s.drive {
                drive.elapsed += dt;
                s.drive = if drive.is_done() { None } else { Some(drive) };
                drive.value()
            } else if s.playback == Playback::Playing {
                s.position + dt
            } else {
                continue;
            };
            s.position = next;
            sync_scrubber(s, &mut self.timelines, &mut self.events);
        }
    }

    /// Take the pending repeat events, one per timeline, ordered by first emission.
    pub fn drain_events(&mut self) -> Vec<RepeatEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Map an unbounded scrubber position onto `(0, duration]`; zero stays zero.
pub fn wrap_position(position: f64, duration: f64) -> f64 {
    if duration <= 0.0 || position <= 0.0 {
        return 0.0;
    }
    let r = position % duration;
    if r == 0.0 { duration } else { r }
}

fn apply_timeline_time(
    id: TimelineId,
    tl: &mut TimelineState,
    total_time: f64,
    events: &mut Vec<RepeatEvent>,
) {
    tl.total_time = total_time.clamp(0.0, tl.spec.total_duration());
    let sample = TimelineSample::at(&tl.spec, tl.total_time);
    if sample.iteration != tl.iteration {
        tl.iteration = sample.iteration;
        match events.iter_mut().find(|e| e.timeline == id) {
            Some(pending) => pending.iteration = sample.iteration,
            None => events.push(RepeatEvent {
                timeline: id,
                iteration: sample.iteration,
            }),
        }
    }
}

fn sync_scrubber(
    s: &ScrubberState,
    timelines: &mut BTreeMap<TimelineId, TimelineState>,
    events: &mut Vec<RepeatEvent>,
) {
    if let Some(tl) = timelines.get_mut(&s.timeline) {
        let t = wrap_position(s.position, s.duration);
        apply_timeline_time(s.timeline, tl, t, events);
    }
}

fn dead_timeline(id: TimelineId) -> FlapError {
    FlapError::animation(format!("timeline {} is not alive", id.0))
}

fn dead_scrubber(id: ScrubberId) -> FlapError {
    FlapError::animation(format!("scrubber {} is not alive", id.0))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ticker.rs"]
mod tests;
