//! flapboard is a split-flap ("departure board") character display engine.
//!
//! Every slot on the board flips from glyph to glyph by cycling forward through its alphabet.
//! The interesting part is the per-slot flip engine:
//!
//! 1. **Alphabet**: `characters -> [blank, c0, .., cN-1, blank]`, a cycle of `len - 1` steps.
//! 2. **Flip timeline**: one paused, repeating timeline with one unit per adjacent pair, plus a
//!    scrubber that maps an unbounded position onto it. Repeat events rebind the flaps.
//! 3. **Scheduler**: shortest forward path to the target, optional stagger passes, and an
//!    eased drive of the scrubber over a randomized duration.
//! 4. **Slot**: owns the above, killing and rebuilding the engine whenever the alphabet changes.
//!
//! A [`Board`] lays out lines of text into slots and advances everything with a shared
//! [`Ticker`]. Nothing moves until the owner calls [`Board::advance`] (or [`Ticker::tick`]),
//! so simulations are deterministic for a given seed and frame rate.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod board;
mod flip;
mod foundation;

pub use crate::animation::ease::Ease;
pub use crate::animation::rng::{RandomSource, Rng64, random_range};
pub use crate::animation::ticker::{
    Playback, RepeatEvent, ScrubberId, Ticker, TickerStats, TimelineId, TimelineSample,
    TimelineSpec, wrap_position,
};
pub use crate::board::config::{
    Alignment, BoardConfig, DEFAULT_CHARACTERS, DEFAULT_LINE_LENGTH, LineConfig, MAX_LINE_LENGTH,
};
pub use crate::board::display::Board;
pub use crate::board::frame::{BoardFrame, LineFrame, SlotFrame};
pub use crate::board::layout::layout_line;
pub use crate::flip::alphabet::Alphabet;
pub use crate::flip::scheduler::{
    STEP_SECS_MAX, STEP_SECS_MIN, TRANSITION_EASE, TransitionPlan, plan_transition, request,
    transition_duration,
};
pub use crate::flip::slot::Slot;
pub use crate::flip::surface::{MountedSurfaces, Surface, SurfaceMount, SurfaceRole};
pub use crate::flip::timeline::{FLIP_UNIT, FlipEngine, PairBinding, build_flip_timeline};
pub use crate::foundation::core::{BLANK, Fps, FrameIndex, Symbol};
pub use crate::foundation::error::{FlapError, FlapResult};
