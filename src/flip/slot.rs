use crate::animation::ease::Ease;
use crate::animation::rng::RandomSource;
use crate::animation::ticker::{RepeatEvent, Ticker};
use crate::flip::alphabet::Alphabet;
use crate::flip::scheduler::{TRANSITION_EASE, request};
use crate::flip::surface::{SurfaceMount, SurfaceRole};
use crate::flip::timeline::{FlipEngine, build_flip_timeline};
use crate::foundation::core::{BLANK, Symbol};
use crate::foundation::error::{FlapError, FlapResult};

/// One animated character position.
///
/// A slot exclusively owns its alphabet, its flip engine (timeline + scrubber in the shared
/// [`Ticker`]) and its four flaps. The engine is replaced, never shared: the previous one is
/// killed before a new one is built.
#[derive(Debug)]
pub struct Slot {
    alphabet: Alphabet,
    engine: Option<FlipEngine>,
    displayed: Symbol,
    stagger: u32,
    ease: Ease,
    surfaces: SurfaceMount,
    progress: f64,
}

impl Slot {
    /// An unmounted slot with no engine. It displays a blank and ignores requests until
    /// [`Slot::set_alphabet`] succeeds.
    pub fn new(characters: &str, stagger: u32) -> Self {
        Self {
            alphabet: Alphabet::build(characters),
            engine: None,
            displayed: BLANK,
            stagger,
            ease: TRANSITION_EASE,
            surfaces: SurfaceMount::default(),
            progress: 1.0,
        }
    }

    /// Attach all four flaps.
    pub fn mount(&mut self) {
        self.surfaces.mount_all();
    }

    /// Detach the flaps but keep the engine. Repeat dispatch and syncing fail with
    /// [`FlapError::ResourceUnavailable`] until [`Slot::mount`] is called again.
    pub fn unmount(&mut self) {
        self.surfaces.unmount_all();
    }

    /// The flaps, for rendering.
    pub fn surfaces(&self) -> &SurfaceMount {
        &self.surfaces
    }

    /// Current alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Live engine handles, if built.
    pub fn engine(&self) -> Option<&FlipEngine> {
        self.engine.as_ref()
    }

    /// The symbol the slot has committed to showing (the target of the last transition).
    pub fn displayed(&self) -> Symbol {
        self.displayed
    }

    /// Extra full passes added to every transition.
    pub fn stagger(&self) -> u32 {
        self.stagger
    }

    /// Change the stagger used by later transitions.
    pub fn set_stagger(&mut self, stagger: u32) {
        self.stagger = stagger;
    }

    /// Curve later transitions follow.
    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Change the curve used by later transitions.
    pub fn set_ease(&mut self, ease: Ease) {
        self.ease = ease;
    }

    /// Whether the engine is built and alive.
    pub fn is_ready(&self, ticker: &Ticker) -> bool {
        self.engine.as_ref().is_some_and(|e| e.is_alive(ticker))
    }

    /// Progress through the flip currently on the flaps.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Replace the alphabet and rebuild the engine.
    ///
    /// The old engine is killed first and the displayed symbol resets to blank. If the flaps
    /// are not mounted the slot is left without an engine and the error is returned.
    #[tracing::instrument(skip(self, ticker))]
    pub fn set_alphabet(&mut self, ticker: &mut Ticker, characters: &str) -> FlapResult<()> {
        self.alphabet = Alphabet::build(characters);
        self.rebuild(ticker)
    }

    /// Kill the current engine (if any) and build a fresh one for the current alphabet.
    pub fn rebuild(&mut self, ticker: &mut Ticker) -> FlapResult<()> {
        if let Some(old) = self.engine.take() {
            old.kill(ticker);
        }
        self.displayed = BLANK;
        self.progress = 1.0;

        let engine = build_flip_timeline(ticker, &self.alphabet, &mut self.surfaces)?;
        self.progress = engine.sample(ticker)?.progress;
        self.engine = Some(engine);
        Ok(())
    }

    /// Request that the slot flip to `target`.
    ///
    /// Requests made before the engine is ready are dropped.
    pub fn set_character(
        &mut self,
        ticker: &mut Ticker,
        rng: &mut dyn RandomSource,
        target: Symbol,
    ) -> FlapResult<()> {
        match request(
            ticker,
            rng,
            &self.alphabet,
            self.engine.as_ref(),
            self.displayed,
            target,
            self.stagger,
            self.ease,
        ) {
            Ok(shown) => {
                self.displayed = shown;
                Ok(())
            }
            Err(FlapError::EngineNotReady) => {
                tracing::trace!(?target, "slot not ready; request ignored");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Forward a repeat event to the engine. Returns whether the slot owned it.
    pub fn on_repeat(&mut self, event: &RepeatEvent) -> FlapResult<bool> {
        match self.engine.as_mut() {
            Some(engine) => engine.handle_repeat(event, &self.alphabet, &mut self.surfaces),
            None => Ok(false),
        }
    }

    /// Pose the flaps for the timeline's current position.
    pub fn sync_surfaces(&mut self, ticker: &Ticker) -> FlapResult<()> {
        let Some(engine) = self.engine.as_ref() else {
            return Ok(());
        };
        let sample = engine.sample(ticker)?;
        self.progress = sample.progress;
        self.surfaces.require()?.pose(sample.progress);
        Ok(())
    }

    /// The glyph a viewer sees right now.
    ///
    /// Before the halfway point of a flip the outgoing glyph still covers the top half; after
    /// it the incoming glyph does.
    pub fn visible_symbol(&self) -> Symbol {
        if self.engine.is_none() {
            return BLANK;
        }
        let role = if self.progress < 0.5 {
            SurfaceRole::FoldTop
        } else {
            SurfaceRole::UnfoldTop
        };
        self.surfaces.get(role).map_or(BLANK, |s| s.symbol)
    }

    /// Whether no transition is in flight.
    pub fn is_settled(&self, ticker: &Ticker) -> bool {
        match self.engine.as_ref() {
            Some(e) => !ticker.is_scrubbing(e.scrubber()).unwrap_or(false),
            None => true,
        }
    }

    /// Kill the engine and detach the flaps.
    pub fn teardown(&mut self, ticker: &mut Ticker) {
        if let Some(engine) = self.engine.take() {
            engine.kill(ticker);
        }
        self.surfaces.unmount_all();
        self.displayed = BLANK;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/flip/slot.rs"]
mod tests;
