use std::sync::atomic::{AtomicUsize, Ordering};

use super::TemplatePicker;

/// A scripted picker for tests. Returns pre-defined indices in order,
/// cycling when the script runs out. Indices are reduced modulo `len`.
#[derive(Debug)]
pub struct ScriptedPicker {
    script: Vec<usize>,
    index: AtomicUsize,
}

impl ScriptedPicker {
    pub fn new(script: Vec<usize>) -> Self {
        Self {
            script,
            index: AtomicUsize::new(0),
        }
    }

    /// Always pick the same index.
    pub fn fixed(index: usize) -> Self {
        Self::new(vec![index])
    }

    /// How many picks have been made.
    pub fn calls(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }
}

impl TemplatePicker for ScriptedPicker {
    fn pick(&self, len: usize) -> usize {
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        if self.script.is_empty() {
            return 0;
        }
        self.script[i % self.script.len()] % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_script_and_cycles() {
        let picker = ScriptedPicker::new(vec![2, 0, 1]);
        let picks: Vec<usize> = (0..5).map(|_| picker.pick(3)).collect();
        assert_eq!(picks, vec![2, 0, 1, 2, 0]);
        assert_eq!(picker.calls(), 5);
    }

    #[test]
    fn wraps_large_indices() {
        assert_eq!(ScriptedPicker::fixed(7).pick(3), 1);
    }

    #[test]
    fn empty_script_picks_first() {
        assert_eq!(ScriptedPicker::new(Vec::new()).pick(4), 0);
    }
}
