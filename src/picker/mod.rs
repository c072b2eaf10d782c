pub mod mock;
pub mod random;

pub use random::{RandomPicker, SeededPicker};

/// Chooses which template to use from a list of `len` candidates.
/// Could be a thread RNG, a seeded RNG, or a test script.
pub trait TemplatePicker: Send + Sync {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}
