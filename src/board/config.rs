use crate::animation::ease::Ease;
use crate::flip::scheduler::TRANSITION_EASE;
use crate::foundation::error::{FlapError, FlapResult};

/// Characters a line cycles through when none are configured.
pub const DEFAULT_CHARACTERS: &str = "abcdefghijklmnopqrstuvwxyz";
/// Slots per line when no length is configured.
pub const DEFAULT_LINE_LENGTH: usize = 10;
/// Upper bound on slots per line.
pub const MAX_LINE_LENGTH: usize = 256;

/// Which side of a line text sticks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Text starts at the first slot; blanks pad the end.
    #[default]
    Left,
    /// Text ends at the last slot; blanks pad the start.
    Right,
}

/// One line of the board.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct LineConfig {
    /// Text to show. Lower-cased before layout.
    pub text: String,
    /// Alphabet every slot of the line cycles through.
    pub characters: String,
    /// Extra full passes each transition makes (stagger).
    pub pad_amount: u32,
    /// Padding side.
    pub alignment: Alignment,
    /// Number of slots.
    pub length: usize,
    /// Curve each transition follows.
    pub ease: Ease,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            characters: DEFAULT_CHARACTERS.to_owned(),
            pad_amount: 0,
            alignment: Alignment::Left,
            length: DEFAULT_LINE_LENGTH,
            ease: TRANSITION_EASE,
        }
    }
}

impl LineConfig {
    /// A default line showing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the stagger.
    pub fn with_pad_amount(mut self, pad_amount: u32) -> Self {
        self.pad_amount = pad_amount;
        self
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the number of slots.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Set the transition curve.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Set the alphabet.
    pub fn with_characters(mut self, characters: impl Into<String>) -> Self {
        self.characters = characters.into();
        self
    }

    /// Check structural invariants.
    pub fn validate(&self) -> FlapResult<()> {
        if self.length == 0 {
            return Err(FlapError::validation("line length must be > 0"));
        }
        if self.length > MAX_LINE_LENGTH {
            return Err(FlapError::validation(format!(
                "line length must be <= {MAX_LINE_LENGTH}, got {}",
                self.length
            )));
        }
        Ok(())
    }
}

/// A whole board: its lines and the seed for transition timing.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BoardConfig {
    /// Lines, top to bottom.
    #[serde(default)]
    pub lines: Vec<LineConfig>,
    /// Seed for the randomized per-step transition timing.
    #[serde(default)]
    pub seed: u64,
}

impl BoardConfig {
    /// Check every line.
    pub fn validate(&self) -> FlapResult<()> {
        for (i, line) in self.lines.iter().enumerate() {
            match line.validate() {
                Ok(()) => {}
                Err(FlapError::Validation(msg)) => {
                    return Err(FlapError::validation(format!("line {i}: {msg}")));
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> FlapResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// The four-line showcase board.
    pub fn demo() -> Self {
        Self {
            lines: vec![
                LineConfig::new("Babe!").with_pad_amount(1),
                LineConfig::new("new craft")
                    .with_pad_amount(2)
                    .with_alignment(Alignment::Right),
                LineConfig::new("of ui")
                    .with_pad_amount(3)
                    .with_alignment(Alignment::Right),
                LineConfig::new("dropped")
                    .with_pad_amount(4)
                    .with_alignment(Alignment::Right),
            ],
            seed: 0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/board/config.rs"]
mod tests;
