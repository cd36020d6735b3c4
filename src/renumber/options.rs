//! Renumbering options and configuration.

/// Prompt shown when order-disturbing lines are found.
pub const DEFAULT_PROMPT: &str = "Some pages seem badly numbered. continue?";

/// Initial value of the order scan, below any realistic page number.
pub const DEFAULT_ORDER_FLOOR: i64 = -100_000;

/// Options for renumbering a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenumberOptions {
    /// Question passed to the confirmation strategy
    pub prompt: String,

    /// Starting point of the order scan
    pub order_floor: i64,
}

impl RenumberOptions {
    /// Create new renumber options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the confirmation prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set the starting point of the order scan.
    pub fn with_order_floor(mut self, floor: i64) -> Self {
        self.order_floor = floor;
        self
    }
}

impl Default for RenumberOptions {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            order_floor: DEFAULT_ORDER_FLOOR,
        }
    }
}
