use std::collections::HashMap;

/// Named text slots on the display surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Slot {
    Timer,
    Scramble,
    Best,
    Worst,
    Mean,
    Median,
}

impl Slot {
    pub const STATS: [Slot; 4] = [Slot::Best, Slot::Worst, Slot::Mean, Slot::Median];
}

/// Abstract sink the timer and session write into. Rendering lives elsewhere.
pub trait DisplaySurface {
    fn set_text(&mut self, slot: Slot, text: &str);
    fn append_row(&mut self, columns: &[String]);
}

/// In-memory surface that the terminal UI reads from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    texts: HashMap<Slot, String>,
    rows: Vec<Vec<String>>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, slot: Slot) -> Option<&str> {
        self.texts.get(&slot).map(String::as_str)
    }

    /// Slot text, or a dash when nothing was written yet
    pub fn text_or_dash(&self, slot: Slot) -> &str {
        self.text(slot).unwrap_or("-")
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

impl DisplaySurface for Board {
    fn set_text(&mut self, slot: Slot, text: &str) {
        self.texts.insert(slot, text.to_string());
    }

    fn append_row(&mut self, columns: &[String]) {
        self.rows.push(columns.to_vec());
    }
}
