//! Ownership of pending timer callbacks.
//!
//! Animated components schedule many one-shot callbacks. A [`TimerScope`]
//! holds every pending handle under a key, so that dropping the scope when
//! the component unmounts cancels all of them at once, and a [`Liveness`]
//! flag lets callbacks that are already running notice the unmount.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared flag flipped to `false` when the owning component goes away
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn kill(&self) {
        self.0.set(false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// A handle whose drop (or explicit cancel) stops the scheduled work.
///
/// Timer handles from the browser layer cancel on drop, so the blanket
/// behaviour of `cancel` is just dropping the value.
pub trait Cancel {
    fn cancel(self);
}

/// Keyed set of pending handles, cancelled together
#[derive(Debug)]
pub struct TimerScope<H: Cancel> {
    liveness: Liveness,
    pending: HashMap<u32, H>,
}

impl<H: Cancel> TimerScope<H> {
    pub fn new() -> Self {
        Self {
            liveness: Liveness::new(),
            pending: HashMap::new(),
        }
    }

    /// Liveness shared with callbacks scheduled by this scope
    pub fn liveness(&self) -> Liveness {
        self.liveness.clone()
    }

    pub fn is_alive(&self) -> bool {
        self.liveness.is_alive()
    }

    /// Keep `handle` pending under `key`, cancelling whatever was there
    pub fn track(&mut self, key: u32, handle: H) {
        if !self.is_alive() {
            handle.cancel();
            return;
        }
        if let Some(previous) = self.pending.insert(key, handle) {
            previous.cancel();
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Cancel every pending handle and mark the scope dead
    pub fn cancel_all(&mut self) {
        self.liveness.kill();
        for (_, handle) in self.pending.drain() {
            handle.cancel();
        }
    }
}

impl<H: Cancel> Default for TimerScope<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Cancel> Drop for TimerScope<H> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records which keys were cancelled
    struct Recorder {
        id: u32,
        log: Rc<RefCell<Vec<u32>>>,
    }

    impl Cancel for Recorder {
        fn cancel(self) {
            self.log.borrow_mut().push(self.id);
        }
    }

    fn recorder(id: u32, log: &Rc<RefCell<Vec<u32>>>) -> Recorder {
        Recorder {
            id,
            log: log.clone(),
        }
    }

    #[test]
    fn test_drop_cancels_everything_pending() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let liveness;
        {
            let mut scope = TimerScope::new();
            liveness = scope.liveness();
            scope.track(1, recorder(10, &log));
            scope.track(2, recorder(20, &log));
            assert_eq!(scope.len(), 2);
            assert!(liveness.is_alive());
        }

        let mut cancelled = log.borrow().clone();
        cancelled.sort();
        assert_eq!(cancelled, vec![10, 20]);
        assert!(!liveness.is_alive());
    }

    #[test]
    fn test_tracking_same_key_replaces_previous() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scope = TimerScope::new();
        scope.track(1, recorder(10, &log));
        scope.track(1, recorder(11, &log));

        assert_eq!(*log.borrow(), vec![10]);
        assert_eq!(scope.len(), 1);
    }

    #[test]
    fn test_dead_scope_rejects_new_work() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scope = TimerScope::new();
        scope.cancel_all();
        scope.track(3, recorder(30, &log));

        assert!(scope.is_empty());
        assert_eq!(*log.borrow(), vec![30]);
    }
}
