//! Confirmation strategies for the order-violation gate.

/// Decides whether renumbering goes on after order-disturbing lines were found.
///
/// `details` holds the rendered offending lines, one per line; `prompt` is
/// the question to ask. Returning `false` cancels the whole operation.
pub trait Confirm {
    /// Ask for a continue/abort decision.
    fn confirm(&mut self, details: &str, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str, &str) -> bool,
{
    fn confirm(&mut self, details: &str, prompt: &str) -> bool {
        self(details, prompt)
    }
}

/// Always continue without asking.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysContinue;

impl Confirm for AlwaysContinue {
    fn confirm(&mut self, _details: &str, _prompt: &str) -> bool {
        true
    }
}

/// Always abort when asked.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysAbort;

impl Confirm for AlwaysAbort {
    fn confirm(&mut self, _details: &str, _prompt: &str) -> bool {
        false
    }
}
