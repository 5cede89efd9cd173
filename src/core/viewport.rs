//! Scroll source for a mounted page.
//!
//! A listener stays registered exactly as long as the [`ScrollSubscription`]
//! returned by [`Viewport::subscribe`] is alive. Everything here is
//! single-threaded: listeners run synchronously inside [`Viewport::scroll_to`],
//! and may subscribe or drop subscriptions while they run. Changes made during
//! a dispatch take effect from the next scroll.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn(f64)>;

#[derive(Default)]
pub struct Viewport {
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
    offset: Cell<f64>,
}

impl Viewport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn subscribe(self: &Rc<Self>, listener: impl Fn(f64) + 'static) -> ScrollSubscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        tracing::debug!("Scroll listener {} registered", id);

        ScrollSubscription {
            viewport: Rc::downgrade(self),
            id,
        }
    }

    /// Moves the viewport and notifies every registered listener.
    pub fn scroll_to(&self, offset: f64) {
        self.offset.set(offset);
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(offset);
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset.get()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn unsubscribe(&self, id: u64) {
        self.listeners.borrow_mut().retain(|(existing, _)| *existing != id);
        tracing::debug!("Scroll listener {} removed", id);
    }
}

/// Deregisters its listener when dropped.
#[must_use = "dropping the subscription removes the listener immediately"]
pub struct ScrollSubscription {
    viewport: Weak<Viewport>,
    id: u64,
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(viewport) = self.viewport.upgrade() {
            viewport.unsubscribe(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_receives_offsets_until_dropped() {
        let viewport = Viewport::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let subscription = viewport.subscribe(move |offset| sink.borrow_mut().push(offset));
        viewport.scroll_to(12.0);
        viewport.scroll_to(80.0);
        drop(subscription);
        viewport.scroll_to(5.0);

        assert_eq!(*seen.borrow(), vec![12.0, 80.0]);
        assert_eq!(viewport.listener_count(), 0);
        assert_eq!(viewport.offset(), 5.0);
    }

    #[test]
    fn test_dropping_one_subscription_keeps_others() {
        let viewport = Viewport::new();
        let first = viewport.subscribe(|_| {});
        let second = viewport.subscribe(|_| {});
        assert_eq!(viewport.listener_count(), 2);

        drop(first);
        assert_eq!(viewport.listener_count(), 1);
        drop(second);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn test_listener_can_drop_its_own_subscription() {
        let viewport = Viewport::new();
        let calls = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<ScrollSubscription>>> = Rc::new(RefCell::new(None));

        let counter = Rc::clone(&calls);
        let own = Rc::clone(&slot);
        let subscription = viewport.subscribe(move |_| {
            counter.set(counter.get() + 1);
            own.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(subscription);

        viewport.scroll_to(80.0);
        viewport.scroll_to(10.0);

        assert_eq!(calls.get(), 1);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn test_listener_can_subscribe_during_dispatch() {
        let viewport = Viewport::new();
        let late_calls = Rc::new(Cell::new(0));
        let held = Rc::new(RefCell::new(Vec::new()));

        let source = Rc::downgrade(&viewport);
        let counter = Rc::clone(&late_calls);
        let sink = Rc::clone(&held);
        let _first = viewport.subscribe(move |_| {
            if let Some(viewport) = source.upgrade() {
                let counter = Rc::clone(&counter);
                let late = viewport.subscribe(move |_| counter.set(counter.get() + 1));
                sink.borrow_mut().push(late);
            }
        });

        viewport.scroll_to(60.0);
        assert_eq!(late_calls.get(), 0);
        assert_eq!(viewport.listener_count(), 2);

        viewport.scroll_to(70.0);
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn test_subscription_outliving_viewport_is_harmless() {
        let viewport = Viewport::new();
        let subscription = viewport.subscribe(|_| {});
        drop(viewport);
        drop(subscription);
    }
}
