use crate::foundation::core::{BLANK, Symbol};

/// Ordered, blank-bounded cycle of symbols a slot can display.
///
/// Built as `[BLANK, c0, .., cN-1, BLANK]`. The trailing blank is the visual twin of the leading
/// one, so a full pass through the cycle is `len() - 1` steps. Duplicate symbols are kept; lookups
/// resolve to the first occurrence.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Alphabet {
    symbols: Vec<Symbol>,
}

impl Alphabet {
    /// Wrap `characters` with leading and trailing blanks.
    pub fn build(characters: &str) -> Self {
        let mut symbols = Vec::with_capacity(characters.chars().count() + 2);
        symbols.push(BLANK);
        symbols.extend(characters.chars());
        symbols.push(BLANK);
        Self { symbols }
    }

    /// Number of symbols including both sentinels. Always `>= 2`.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Never true: an alphabet always holds its two sentinels.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Steps in one full pass of the cycle.
    pub fn cycle_len(&self) -> usize {
        self.symbols.len() - 1
    }

    /// All symbols in cycle order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Symbol at `index`, wrapping around the full sequence.
    pub fn get_wrapped(&self, index: usize) -> Symbol {
        self.symbols[index % self.symbols.len()]
    }

    /// First index holding `symbol`.
    pub fn index_of(&self, symbol: Symbol) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    /// The configured characters without the sentinels.
    pub fn characters(&self) -> String {
        self.symbols[1..self.symbols.len() - 1].iter().collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/flip/alphabet.rs"]
mod tests;
