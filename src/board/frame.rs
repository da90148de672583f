use crate::foundation::core::{FrameIndex, Symbol};

/// Snapshot of one slot.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SlotFrame {
    /// Symbol the slot has committed to.
    pub displayed: Symbol,
    /// Symbol a viewer currently sees.
    pub visible: Symbol,
    /// Progress through the flip on the flaps, in `[0, 1]`.
    pub progress: f64,
}

/// Snapshot of one line.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LineFrame {
    /// Visible symbols as a string.
    pub text: String,
    /// Per-slot detail.
    pub slots: Vec<SlotFrame>,
}

/// Snapshot of the whole board at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BoardFrame {
    /// Frame counter supplied by the caller.
    pub frame: FrameIndex,
    /// Simulated seconds since the board was created.
    pub time_secs: f64,
    /// Lines, top to bottom.
    pub lines: Vec<LineFrame>,
    /// Whether no transition is in flight.
    pub settled: bool,
}

impl BoardFrame {
    /// Visible text, one row per line.
    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
