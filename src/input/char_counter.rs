//! Advisory character counter for the message field

/// Color tier of the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterTier {
    #[default]
    Normal,
    /// More than 70% of the limit used
    Warning,
    /// More than 90% of the limit used
    Danger,
}

/// Tracks `length/max` for the message field. It never truncates input;
/// the limit is enforced by validation at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCounter {
    length: usize,
    max_length: usize,
}

impl CharCounter {
    pub fn new(max_length: usize) -> Self {
        Self {
            length: 0,
            max_length,
        }
    }

    /// Recount from the field's raw value
    pub fn update(&mut self, value: &str) {
        self.length = value.chars().count();
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn text(&self) -> String {
        format!("{}/{} characters", self.length(), self.max_length())
    }

    pub fn tier(&self) -> CounterTier {
        // length > 90% of max, in integers
        if self.length * 10 > self.max_length * 9 {
            CounterTier::Danger
        } else if self.length * 10 > self.max_length * 7 {
            CounterTier::Warning
        } else {
            CounterTier::Normal
        }
    }
}
