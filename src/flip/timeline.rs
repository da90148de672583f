//! Flip timeline construction.
//!
//! A flip timeline is one paused, repeating ticker timeline in which every repeat unit is a
//! single flip from `alphabet[i]` to `alphabet[i + 1]`. It is never played directly; a paused
//! scrubber maps an unbounded position onto it, so "advance N steps" is just "move the scrubber
//! by N".

use crate::animation::ticker::{
    RepeatEvent, ScrubberId, Ticker, TimelineId, TimelineSample, TimelineSpec,
};
use crate::flip::alphabet::Alphabet;
use crate::flip::surface::{MountedSurfaces, SurfaceMount};
use crate::foundation::error::{FlapError, FlapResult};

/// Duration of one flip in timeline time units.
pub const FLIP_UNIT: f64 = 1.0;

/// Tracks which adjacent alphabet pair is printed on the flaps.
///
/// State `i` means the fold flaps show `alphabet[i]` and the unfold flaps show
/// `alphabet[i + 1]` (both wrapping). It only moves on repeat events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PairBinding {
    state: u32,
}

impl PairBinding {
    /// Binding at pair zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pair index.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Move to `iteration` and print the matching pair on the flaps.
    pub fn on_repeat(
        &mut self,
        iteration: u32,
        alphabet: &Alphabet,
        surfaces: &mut MountedSurfaces<'_>,
    ) {
        self.state = iteration;
        let i = iteration as usize;
        surfaces.bind_pair(alphabet.get_wrapped(i), alphabet.get_wrapped(i + 1));
    }
}

/// Live resources behind one slot: a flip timeline, its scrubber and the pair binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlipEngine {
    timeline: TimelineId,
    scrubber: ScrubberId,
    binding: PairBinding,
}

impl FlipEngine {
    /// Timeline handle.
    pub fn timeline(&self) -> TimelineId {
        self.timeline
    }

    /// Scrubber handle.
    pub fn scrubber(&self) -> ScrubberId {
        self.scrubber
    }

    /// Pair currently printed on the flaps.
    pub fn binding(&self) -> PairBinding {
        self.binding
    }

    /// Whether both resources are still alive in `ticker`.
    pub fn is_alive(&self, ticker: &Ticker) -> bool {
        ticker.is_timeline_alive(self.timeline) && ticker.is_scrubber_alive(self.scrubber)
    }

    /// Current timeline position.
    pub fn sample(&self, ticker: &Ticker) -> FlapResult<TimelineSample> {
        ticker.timeline_sample(self.timeline)
    }

    /// Apply a repeat event if it belongs to this engine's timeline.
    ///
    /// Returns `false` for events from other timelines.
    pub fn handle_repeat(
        &mut self,
        event: &RepeatEvent,
        alphabet: &Alphabet,
        surfaces: &mut SurfaceMount,
    ) -> FlapResult<bool> {
        if event.timeline != self.timeline {
            return Ok(false);
        }
        let mut s = surfaces.require()?;
        self.binding.on_repeat(event.iteration, alphabet, &mut s);
        Ok(true)
    }

    /// Kill the scrubber and then the timeline.
    pub fn kill(self, ticker: &mut Ticker) {
        ticker.kill_scrubber(self.scrubber);
        ticker.kill_timeline(self.timeline);
        tracing::debug!(timeline = self.timeline.0, "killed flip engine");
    }
}

/// Build the flip timeline and scrubber for `alphabet` over the mounted flaps.
///
/// Fails with [`FlapError::ResourceUnavailable`] before touching the ticker if any flap is
/// missing. On success the scrubber is parked at the end of the first full pass, which
/// displays the trailing blank. The caller must kill any previous engine first.
#[tracing::instrument(skip_all, fields(symbols = alphabet.len()))]
pub fn build_flip_timeline(
    ticker: &mut Ticker,
    alphabet: &Alphabet,
    surfaces: &mut SurfaceMount,
) -> FlapResult<FlipEngine> {
    let mut s = surfaces.require()?;
    let repeat = u32::try_from(alphabet.len().saturating_sub(2))
        .map_err(|_| FlapError::validation("alphabet is too long"))?;

    s.clear_props();
    let mut binding = PairBinding::new();
    binding.on_repeat(0, alphabet, &mut s);

    let timeline = ticker.create_timeline(TimelineSpec {
        unit_duration: FLIP_UNIT,
        repeat,
    })?;

    match park_scrubber(ticker, timeline) {
        Ok((scrubber, sample)) => {
            binding.on_repeat(sample.iteration, alphabet, &mut s);
            s.pose(sample.progress);
            tracing::debug!(
                timeline = timeline.0,
                scrubber = scrubber.0,
                repeat,
                "built flip timeline"
            );
            Ok(FlipEngine {
                timeline,
                scrubber,
                binding,
            })
        }
        Err(err) => {
            ticker.kill_timeline(timeline);
            Err(err)
        }
    }
}

fn park_scrubber(
    ticker: &mut Ticker,
    timeline: TimelineId,
) -> FlapResult<(ScrubberId, TimelineSample)> {
    let scrubber = ticker.create_scrubber(timeline)?;
    let total = ticker.timeline_spec(timeline)?.total_duration();
    ticker.seek_scrubber(scrubber, total)?;
    Ok((scrubber, ticker.timeline_sample(timeline)?))
}

#[cfg(test)]
#[path = "../../tests/unit/flip/timeline.rs"]
mod tests;
