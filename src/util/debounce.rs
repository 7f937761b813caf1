//! Generation counter for debounced, superseding requests.
//!
//! DESIGN
//! ======
//! The user picker fires a search per keystroke after a short delay. Each
//! keystroke takes a new generation; when a delayed task wakes up (or a
//! response lands) it checks whether its generation is still current and
//! drops its work otherwise. The timer itself lives at the call site
//! (`gloo_timers::future::sleep` under hydrate); this core is pure so it
//! tests natively.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::Cell;

/// Monotonic generation counter. Cloneable handles share the counter.
#[derive(Clone, Debug, Default)]
pub struct Generations {
    current: std::rc::Rc<Cell<u64>>,
}

impl Generations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, superseding all earlier ones.
    pub fn next(&self) -> u64 {
        let next = self.current.get() + 1;
        self.current.set(next);
        next
    }

    /// Whether `generation` is still the latest one.
    pub fn is_current(&self, generation: u64) -> bool {
        self.current.get() == generation
    }
}
