// generation counters
//
// a deferred mutation (a timer that fades a card in, removes an overlay, restores a form)
// is stamped with the generation that was current when it was scheduled.  any newer user
// action advances the counter, and applying a stamped mutation from an older generation is
// a no-op.  this is how a second filter click invalidates the first one's pending timers
// without having to cancel them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationCounter {
    current: Generation,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Generation {
        self.current
    }

    // invalidates everything stamped so far
    pub fn advance(&mut self) -> Generation {
        self.current = Generation(self.current.0.wrapping_add(1));
        self.current
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.current == generation
    }
}

// a mutation to apply after `delay_ms`, valid only while `generation` is current
#[derive(Clone, Debug, PartialEq)]
pub struct Scheduled<T> {
    pub delay_ms: u32,
    pub generation: Generation,
    pub action: T,
}

impl<T> Scheduled<T> {
    pub fn new(delay_ms: u32, generation: Generation, action: T) -> Self {
        Scheduled {
            delay_ms,
            generation,
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_invalidates_older_generations() {
        let mut counter = GenerationCounter::new();
        let first = counter.advance();
        assert!(counter.is_current(first));

        let second = counter.advance();
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
        assert!(second > first);
    }
}
