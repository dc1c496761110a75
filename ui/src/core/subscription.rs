//! Scoped acquisition for observers and listeners.

use std::fmt;

/// Guard that owns a registration (DOM observer, window listener, ...) and
/// tears it down exactly once, either on [`cancel`](Self::cancel) or on drop.
pub struct ScopedSubscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl ScopedSubscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// A guard with nothing to release (targets without the underlying API).
    pub fn inert() -> Self {
        Self { teardown: None }
    }

    pub fn is_active(&self) -> bool {
        self.teardown.is_some()
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for ScopedSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ScopedSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedSubscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn teardown_runs_once_on_drop() {
        let calls = Rc::new(Cell::new(0));
        {
            let calls = calls.clone();
            let _guard = ScopedSubscription::new(move || calls.set(calls.get() + 1));
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn cancel_does_not_double_release() {
        let calls = Rc::new(Cell::new(0));
        let guard = {
            let calls = calls.clone();
            ScopedSubscription::new(move || calls.set(calls.get() + 1))
        };
        guard.cancel();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn teardown_runs_on_early_return() {
        fn acquire_then_bail(calls: Rc<Cell<u32>>) -> Result<(), &'static str> {
            let _guard = ScopedSubscription::new(move || calls.set(calls.get() + 1));
            Err("bail")
        }

        let calls = Rc::new(Cell::new(0));
        assert!(acquire_then_bail(calls.clone()).is_err());
        assert_eq!(calls.get(), 1);
    }
}
