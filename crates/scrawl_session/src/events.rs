//! Session change notification
//!
//! The session replaces framework reactivity with an explicit mutable
//! collection plus change deltas: every mutation that alters observable
//! state emits a `SessionEvent` to registered observers.

use scrawl_paint::Point;

/// Change delta emitted after a session mutation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionEvent {
    /// A new active stroke was seeded at `at`.
    StrokeStarted { at: Point },
    /// The active stroke was committed as entry `index`.
    StrokeCommitted { index: usize, point_count: usize },
    /// The active stroke was discarded without committing.
    StrokeCancelled,
    /// The most recent committed stroke was removed.
    StrokeUndone { remaining: usize },
    /// All strokes were removed.
    Cleared,
    /// The drawing surface changed size.
    Resized { width: u32, height: u32 },
}

/// Observer callback for session change deltas.
pub type SessionObserver = Box<dyn Fn(&SessionEvent) + Send + Sync>;

/// Registered observers for one session.
#[derive(Default)]
pub struct ObserverSet {
    observers: Vec<SessionObserver>,
}

impl ObserverSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(&SessionEvent) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn notify(&self, event: &SessionEvent) {
        for observer in &self.observers {
            observer(event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_notify_reaches_all_observers() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut set = ObserverSet::new();
        for _ in 0..3 {
            let counter = counter.clone();
            set.subscribe(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }

        set.notify(&SessionEvent::Cleared);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }
}
