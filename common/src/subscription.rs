//! Scoped registration of long-lived listeners.
//!
//! A component that installs a global listener when it mounts keeps the
//! returned [`Subscription`] in its state. Dropping the subscription (on
//! unmount, or by calling [`Subscription::release`]) runs the teardown closure
//! exactly once, so handlers never outlive the component and never pile up
//! across re-renders.

use std::fmt;

pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wraps the closure that undoes a registration.
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// Runs the teardown now instead of at scope end.
    pub fn release(mut self) {
        self.run_teardown();
    }

    fn run_teardown(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_teardown();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.teardown.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeMap;
    use std::rc::Rc;

    /// Minimal stand-in for a document that dispatches pointer events.
    #[derive(Default)]
    struct FakeDocument {
        next_id: Cell<u32>,
        listeners: RefCell<BTreeMap<u32, Box<dyn Fn()>>>,
    }

    impl FakeDocument {
        fn listen(self: &Rc<Self>, handler: impl Fn() + 'static) -> Subscription {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().insert(id, Box::new(handler));
            let doc = Rc::clone(self);
            Subscription::new(move || {
                doc.listeners.borrow_mut().remove(&id);
            })
        }

        fn dispatch(&self) {
            for handler in self.listeners.borrow().values() {
                handler();
            }
        }

        fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    #[test]
    fn teardown_runs_once_on_drop() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));
        assert_eq!(calls.get(), 0);
        drop(subscription);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn explicit_release_does_not_run_twice() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        Subscription::new(move || counter.set(counter.get() + 1)).release();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn no_handler_runs_after_teardown() {
        let doc = Rc::new(FakeDocument::default());
        let hits = Rc::new(Cell::new(0));

        let counter = Rc::clone(&hits);
        let mounted = doc.listen(move || counter.set(counter.get() + 1));
        doc.dispatch();
        assert_eq!(hits.get(), 1);

        drop(mounted);
        assert_eq!(doc.listener_count(), 0);
        doc.dispatch();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn remounting_does_not_accumulate_listeners() {
        let doc = Rc::new(FakeDocument::default());
        let mut slot: Option<Subscription> = None;
        for _ in 0..3 {
            slot.take();
            slot = Some(doc.listen(|| {}));
            assert_eq!(doc.listener_count(), 1);
        }
        drop(slot);
        assert_eq!(doc.listener_count(), 0);
    }
}
