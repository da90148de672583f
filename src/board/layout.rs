use crate::board::config::Alignment;
use crate::foundation::core::{BLANK, Symbol};

/// Per-slot targets for `text` on a line of `length` slots.
///
/// Text is lower-cased, padded with blanks on the side opposite `alignment`, then cut to the
/// first `length` symbols (so over-long text keeps its head regardless of alignment).
pub fn layout_line(text: &str, length: usize, alignment: Alignment) -> Vec<Symbol> {
    let lowered: Vec<Symbol> = text.to_lowercase().chars().collect();
    let pad = length.saturating_sub(lowered.len());
    let blanks = std::iter::repeat_n(BLANK, pad);

    let mut out: Vec<Symbol> = match alignment {
        Alignment::Left => lowered.into_iter().chain(blanks).collect(),
        Alignment::Right => blanks.chain(lowered).collect(),
    };
    out.truncate(length);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/board/layout.rs"]
mod tests;
