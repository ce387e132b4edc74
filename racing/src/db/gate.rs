//! Once-only initialization gate for store seeding.

use parking_lot::{Condvar, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeedState {
    Unseeded,
    Seeding,
    Seeded,
}

/// Blocking barrier around one-time store seeding.
///
/// Exactly one caller is admitted to run the seed; callers arriving
/// while it runs block until the outcome is known. A failed run returns
/// the gate to `Unseeded` so a later call may retry, rather than
/// latching the attempt regardless of outcome.
pub(super) struct SeedGate {
    state: Mutex<SeedState>,
    settled: Condvar,
}

impl SeedGate {
    pub(super) fn new() -> Self {
        Self {
            state: Mutex::new(SeedState::Unseeded),
            settled: Condvar::new(),
        }
    }

    /// Returns `true` if the caller must run the seed. Blocks while
    /// another caller is seeding; returns `false` once seeded.
    pub(super) fn begin(&self) -> bool {
        let mut state = self.state.lock();
        loop {
            match *state {
                SeedState::Unseeded => {
                    *state = SeedState::Seeding;
                    return true;
                }
                SeedState::Seeding => self.settled.wait(&mut state),
                SeedState::Seeded => return false,
            }
        }
    }

    /// Records the outcome of a run started with [`SeedGate::begin`].
    pub(super) fn finish(&self, succeeded: bool) {
        let mut state = self.state.lock();
        debug_assert_eq!(*state, SeedState::Seeding);
        *state = if succeeded {
            SeedState::Seeded
        } else {
            SeedState::Unseeded
        };
        drop(state);
        self.settled.notify_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn only_one_caller_is_admitted() {
        let gate = Arc::new(SeedGate::new());
        let admitted = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let gate = Arc::clone(&gate);
                let admitted = Arc::clone(&admitted);
                thread::spawn(move || {
                    if gate.begin() {
                        admitted.fetch_add(1, Ordering::SeqCst);
                        gate.finish(true);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(admitted.load(Ordering::SeqCst), 1);
        assert!(!gate.begin());
    }

    #[test]
    fn failed_run_reopens_the_gate() {
        let gate = SeedGate::new();

        assert!(gate.begin());
        gate.finish(false);

        assert!(gate.begin(), "a failed seed must allow a retry");
        gate.finish(true);

        assert!(!gate.begin());
    }
}
