//! Store configuration.

/// Configuration for constructing a store.
#[derive(Debug, Clone)]
pub struct Config {
    /// Initial capacity of the committed map. Pre-sizing only; the map
    /// grows past this freely.
    pub initial_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial capacity of the committed map.
    #[must_use]
    pub const fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
