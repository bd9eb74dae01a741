/// Produces the scramble shown before each solve. The session only stores and
/// displays the string; it never parses it.
pub trait ScrambleSource {
    fn next_scramble(&mut self) -> String;
}

pub const DEFAULT_SCRAMBLE: &str = "R U R' U'";

/// Stand-in that hands out the same text every time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderScramble {
    text: String,
}

impl PlaceholderScramble {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Default for PlaceholderScramble {
    fn default() -> Self {
        Self::new(DEFAULT_SCRAMBLE)
    }
}

impl ScrambleSource for PlaceholderScramble {
    fn next_scramble(&mut self) -> String {
        self.text.clone()
    }
}
