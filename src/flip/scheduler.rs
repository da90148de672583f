//! Transition planning and scheduling.
//!
//! A transition always moves forward through the alphabet cycle. Stagger adds whole extra
//! passes for effect; it never changes where the slot lands.

use crate::animation::ease::Ease;
use crate::animation::rng::{RandomSource, random_range};
use crate::animation::ticker::Ticker;
use crate::flip::alphabet::Alphabet;
use crate::flip::timeline::FlipEngine;
use crate::foundation::core::Symbol;
use crate::foundation::error::{FlapError, FlapResult};

/// Lower bound of the randomized seconds-per-step factor.
pub const STEP_SECS_MIN: f64 = 0.02;
/// Upper bound of the randomized seconds-per-step factor.
pub const STEP_SECS_MAX: f64 = 0.06;
/// Curve transitions use when a line does not pick one.
pub const TRANSITION_EASE: Ease = Ease::OutQuad;

/// Index arithmetic for one transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TransitionPlan {
    /// Cycle position of the current symbol.
    pub current_index: usize,
    /// Cycle position the slot will land on.
    pub desired_index: usize,
    /// Forward steps from `current_index` to `desired_index`.
    pub shift: usize,
    /// Extra steps added by stagger (whole passes).
    pub padding: usize,
}

impl TransitionPlan {
    /// Total steps the scrubber moves.
    pub fn delta(&self) -> usize {
        self.shift + self.padding
    }
}

/// Plan the forward path from `current` to `target`.
///
/// Unknown targets resolve to index 0 (the leading blank). An unknown current symbol (left
/// behind by such a fallback) is treated the same way, since that is where the slot landed.
pub fn plan_transition(
    alphabet: &Alphabet,
    current: Symbol,
    target: Symbol,
    stagger_units: u32,
) -> TransitionPlan {
    let current_index = alphabet.index_of(current).unwrap_or(0);
    let desired_index = alphabet.index_of(target).unwrap_or(0);
    let cycle = alphabet.cycle_len();

    let shift = if current_index > desired_index {
        (cycle - current_index) + desired_index
    } else {
        desired_index - current_index
    };
    let padding = if current_index == desired_index {
        0
    } else {
        stagger_units as usize * cycle
    };

    TransitionPlan {
        current_index,
        desired_index,
        shift,
        padding,
    }
}

/// Seconds a transition of `delta` steps takes for a per-step factor drawn from `rng`.
pub fn transition_duration(rng: &mut dyn RandomSource, delta: usize) -> f64 {
    delta as f64 * random_range(rng, STEP_SECS_MIN, STEP_SECS_MAX)
}

/// Request a transition from `current` to `target` and return the new displayed symbol.
///
/// Equal symbols are a no-op. A missing or dead engine yields [`FlapError::EngineNotReady`]
/// and schedules nothing. Otherwise the scrubber is driven forward by the planned delta along
/// `ease`, relative to its pending target.
#[allow(clippy::too_many_arguments)]
pub fn request(
    ticker: &mut Ticker,
    rng: &mut dyn RandomSource,
    alphabet: &Alphabet,
    engine: Option<&FlipEngine>,
    current: Symbol,
    target: Symbol,
    stagger_units: u32,
    ease: Ease,
) -> FlapResult<Symbol> {
    if target == current {
        tracing::trace!(?target, "transition is a no-op");
        return Ok(current);
    }
    let engine = match engine {
        Some(e) if e.is_alive(ticker) => e,
        _ => return Err(FlapError::EngineNotReady),
    };

    let plan = plan_transition(alphabet, current, target, stagger_units);
    let delta = plan.delta();
    if delta > 0 {
        let secs = transition_duration(rng, delta);
        let to = ticker.scrub_by(engine.scrubber(), delta as f64, secs, ease)?;
        tracing::debug!(
            ?current,
            ?target,
            shift = plan.shift,
            padding = plan.padding,
            ?ease,
            secs,
            to,
            "scheduled transition"
        );
    }
    Ok(target)
}

#[cfg(test)]
#[path = "../../tests/unit/flip/scheduler.rs"]
mod tests;
