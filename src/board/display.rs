//! The board: lines of slots sharing one ticker and one random source.

use crate::animation::rng::Rng64;
use crate::animation::ticker::Ticker;
use crate::board::config::{BoardConfig, LineConfig};
use crate::board::frame::{BoardFrame, LineFrame, SlotFrame};
use crate::board::layout::layout_line;
use crate::flip::slot::Slot;
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{FlapError, FlapResult};

#[derive(Debug)]
struct Line {
    config: LineConfig,
    slots: Vec<Slot>,
}

impl Line {
    fn new(config: &LineConfig) -> Self {
        Self {
            config: config.clone(),
            slots: Vec::new(),
        }
    }

    fn apply(
        &mut self,
        config: &LineConfig,
        ticker: &mut Ticker,
        rng: &mut Rng64,
    ) -> FlapResult<()> {
        while self.slots.len() > config.length {
            if let Some(mut slot) = self.slots.pop() {
                slot.teardown(ticker);
            }
        }
        while self.slots.len() < config.length {
            let mut slot = Slot::new(&config.characters, config.pad_amount);
            slot.mount();
            self.slots.push(slot);
        }

        for slot in &mut self.slots {
            if !slot.is_ready(ticker) || slot.alphabet().characters() != config.characters {
                slot.set_alphabet(ticker, &config.characters)?;
            }
            slot.set_stagger(config.pad_amount);
            slot.set_ease(config.ease);
        }

        let targets = layout_line(&config.text, config.length, config.alignment);
        for (slot, &target) in self.slots.iter_mut().zip(&targets) {
            slot.set_character(ticker, rng, target)?;
        }

        self.config = config.clone();
        Ok(())
    }

    fn teardown(&mut self, ticker: &mut Ticker) {
        for slot in &mut self.slots {
            slot.teardown(ticker);
        }
        self.slots.clear();
    }

    fn frame(&self) -> LineFrame {
        let slots: Vec<SlotFrame> = self
            .slots
            .iter()
            .map(|s| SlotFrame {
                displayed: s.displayed(),
                visible: s.visible_symbol(),
                progress: s.progress(),
            })
            .collect();
        LineFrame {
            text: slots.iter().map(|s| s.visible).collect(),
            slots,
        }
    }
}

/// A split-flap board.
///
/// Construction and [`Board::apply`] only schedule transitions; nothing moves until
/// [`Board::advance`] is called with a frame delta.
#[derive(Debug)]
pub struct Board {
    ticker: Ticker,
    rng: Rng64,
    seed: u64,
    lines: Vec<Line>,
    elapsed_secs: f64,
}

impl Board {
    /// Build a board and schedule every line's initial text.
    pub fn new(config: &BoardConfig) -> FlapResult<Self> {
        let mut board = Self {
            ticker: Ticker::new(),
            rng: Rng64::new(config.seed),
            seed: config.seed,
            lines: Vec::new(),
            elapsed_secs: 0.0,
        };
        board.apply(config)?;
        Ok(board)
    }

    /// Reconcile the board with `config`.
    ///
    /// Removed lines and slots are torn down, new ones are mounted and built, lines whose
    /// alphabet changed are rebuilt (resetting to blank) and every slot is asked to flip to its
    /// laid-out target. The seed only takes effect at construction.
    #[tracing::instrument(skip_all, fields(lines = config.lines.len()))]
    pub fn apply(&mut self, config: &BoardConfig) -> FlapResult<()> {
        config.validate()?;

        while self.lines.len() > config.lines.len() {
            if let Some(mut line) = self.lines.pop() {
                line.teardown(&mut self.ticker);
            }
        }
        for (i, line_config) in config.lines.iter().enumerate() {
            if i == self.lines.len() {
                self.lines.push(Line::new(line_config));
            }
            self.lines[i].apply(line_config, &mut self.ticker, &mut self.rng)?;
        }
        Ok(())
    }

    /// Change the text of one line.
    pub fn set_text(&mut self, line: usize, text: &str) -> FlapResult<()> {
        let count = self.lines.len();
        let Some(l) = self.lines.get_mut(line) else {
            return Err(FlapError::validation(format!(
                "line {line} is out of range ({count} lines)"
            )));
        };
        let mut config = l.config.clone();
        config.text = text.to_owned();
        l.apply(&config, &mut self.ticker, &mut self.rng)
    }

    /// The configuration the board currently reflects.
    pub fn config(&self) -> BoardConfig {
        BoardConfig {
            lines: self.lines.iter().map(|l| l.config.clone()).collect(),
            seed: self.seed,
        }
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Every repeat event is delivered and every slot synced even if one slot fails; the first
    /// error is returned afterwards.
    pub fn advance(&mut self, dt: f64) -> FlapResult<()> {
        self.ticker.tick(dt);
        if dt.is_finite() {
            self.elapsed_secs += dt.max(0.0);
        }

        let mut first_err = None;
        for event in self.ticker.drain_events() {
            'dispatch: for line in &mut self.lines {
                for slot in &mut line.slots {
                    match slot.on_repeat(&event) {
                        Ok(true) => break 'dispatch,
                        Ok(false) => {}
                        Err(err) => {
                            tracing::warn!(
                                timeline = event.timeline.0,
                                %err,
                                "repeat dispatch failed"
                            );
                            first_err.get_or_insert(err);
                            break 'dispatch;
                        }
                    }
                }
            }
        }
        for line in &mut self.lines {
            for slot in &mut line.slots {
                if let Err(err) = slot.sync_surfaces(&self.ticker) {
                    first_err.get_or_insert(err);
                }
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    /// Advance frame by frame until nothing is in flight or `max_frames` have run.
    ///
    /// Returns the number of frames advanced.
    pub fn run_until_settled(&mut self, fps: Fps, max_frames: u64) -> FlapResult<u64> {
        let dt = fps.frame_duration_secs();
        let mut frames = 0;
        while frames < max_frames && !self.is_settled() {
            self.advance(dt)?;
            frames += 1;
        }
        Ok(frames)
    }

    /// Whether every transition has landed.
    pub fn is_settled(&self) -> bool {
        self.ticker.is_idle()
    }

    /// Simulated seconds elapsed.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Slots of one line.
    pub fn slots(&self, line: usize) -> Option<&[Slot]> {
        self.lines.get(line).map(|l| l.slots.as_slice())
    }

    /// Symbols the slots of `line` have committed to.
    pub fn displayed_text(&self, line: usize) -> Option<String> {
        self.slots(line)
            .map(|slots| slots.iter().map(Slot::displayed).collect())
    }

    /// Visible text, one row per line.
    pub fn render_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.frame().text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Serializable snapshot labelled with `frame`.
    pub fn snapshot(&self, frame: FrameIndex) -> BoardFrame {
        BoardFrame {
            frame,
            time_secs: self.elapsed_secs,
            lines: self.lines.iter().map(Line::frame).collect(),
            settled: self.is_settled(),
        }
    }

    /// The runtime behind the board.
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }
}

#[cfg(test)]
#[path = "../../tests/unit/board/display.rs"]
mod tests;
