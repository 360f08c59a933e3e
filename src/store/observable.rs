// SPDX-License-Identifier: MPL-2.0
//! Observable single-value cell with synchronous subscriber delivery.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<RefCell<dyn FnMut(&Rc<T>)>>;

struct Inner<T> {
    value: RefCell<Rc<T>>,
    subscribers: RefCell<Vec<(u64, Callback<T>)>>,
    next_id: Cell<u64>,
    /// Snapshots waiting to be delivered, oldest first.
    pending: RefCell<VecDeque<Rc<T>>>,
    delivering: Cell<bool>,
}

/// A shared, observable snapshot of type `T`.
///
/// Cloning the handle shares the same value and subscribers. Values are
/// never mutated in place: every change installs a new `Rc<T>`, so a
/// snapshot held by a reader stays valid and `Rc::ptr_eq` detects changes.
pub struct Observable<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(Rc::new(value)),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                pending: RefCell::new(VecDeque::new()),
                delivering: Cell::new(false),
            }),
        }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn get(&self) -> Rc<T> {
        Rc::clone(&self.inner.value.borrow())
    }

    /// Registers `callback`, calls it with the current value, then again
    /// after every change until unsubscribed.
    pub fn subscribe(&self, callback: impl FnMut(&Rc<T>) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let callback: Callback<T> = Rc::new(RefCell::new(callback));
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::clone(&callback)));

        let current = self.get();
        if let Ok(mut f) = callback.try_borrow_mut() {
            f(&current);
        }

        let weak: Weak<Inner<T>> = Rc::downgrade(&self.inner);
        Subscription {
            detach: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }

    /// Replaces the value and notifies every subscriber in registration order.
    ///
    /// A `set` made by a subscriber while a change is being delivered is
    /// queued: every subscriber sees the current change before the next one.
    pub fn set(&self, value: T) {
        let snapshot = Rc::new(value);
        *self.inner.value.borrow_mut() = Rc::clone(&snapshot);
        self.inner.pending.borrow_mut().push_back(snapshot);
        if !self.inner.delivering.get() {
            self.drain();
        }
    }

    /// Computes the next value from the current one and installs it.
    ///
    /// Returning `None` leaves the value untouched and notifies no one.
    pub fn update(&self, f: impl FnOnce(&T) -> Option<T>) -> bool {
        let current = self.get();
        match f(&current) {
            Some(next) => {
                self.set(next);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    fn drain(&self) {
        let _guard = DeliveryGuard::enter(&self.inner.delivering);
        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            match next {
                Some(snapshot) => self.notify(&snapshot),
                None => break,
            }
        }
    }

    fn notify(&self, snapshot: &Rc<T>) {
        // Work on a copy of the list so callbacks may subscribe or
        // unsubscribe while being notified.
        let subscribers: Vec<Callback<T>> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        for callback in subscribers {
            match callback.try_borrow_mut() {
                Ok(mut f) => f(snapshot),
                Err(_) => {
                    tracing::warn!("subscriber is already running; skipping nested delivery");
                }
            }
        }
    }
}

/// Marks delivery in progress; cleared on drop, also when a callback panics.
struct DeliveryGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> DeliveryGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for DeliveryGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.inner.value.borrow())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish()
    }
}

/// Handle returned by `subscribe`.
///
/// Dropping it keeps the subscription alive; call
/// [`unsubscribe`](Self::unsubscribe) to stop receiving values.
#[must_use = "keep the handle to be able to unsubscribe"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.detach.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_delivers_current_value_immediately() {
        let cell = Observable::new(3);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = cell.subscribe(move |v| sink.borrow_mut().push(**v));
        assert_eq!(*seen.borrow(), vec![3]);
    }

    #[test]
    fn changes_are_delivered_in_order() {
        let cell = Observable::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = cell.subscribe(move |v| sink.borrow_mut().push(**v));

        cell.set(1);
        cell.update(|v| Some(v + 10));
        assert_eq!(*seen.borrow(), vec![0, 1, 11]);
    }

    #[test]
    fn update_returning_none_is_silent() {
        let cell = Observable::new(String::from("a"));
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let _sub = cell.subscribe(move |_| counter.set(counter.get() + 1));

        assert!(!cell.update(|_| None));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn old_snapshots_survive_updates() {
        let cell = Observable::new(vec![1, 2]);
        let before = cell.get();
        cell.update(|v| {
            let mut next = v.clone();
            next.push(3);
            Some(next)
        });
        assert_eq!(*before, vec![1, 2]);
        assert_eq!(*cell.get(), vec![1, 2, 3]);
        assert!(!Rc::ptr_eq(&before, &cell.get()));
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let cell = Observable::new(0);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let sub = cell.subscribe(move |_| counter.set(counter.get() + 1));

        cell.set(1);
        sub.unsubscribe();
        cell.set(2);

        assert_eq!(calls.get(), 2);
        assert_eq!(cell.subscriber_count(), 0);
    }

    #[test]
    fn nested_change_from_callback_does_not_panic() {
        let cell = Observable::new(0);
        let handle = cell.clone();
        let _sub = cell.subscribe(move |v| {
            if **v == 1 {
                handle.set(2);
            }
        });

        cell.set(1);
        assert_eq!(*cell.get(), 2);
    }

    #[test]
    fn nested_change_reaches_later_subscribers_in_order() {
        let cell = Observable::new(0);
        let handle = cell.clone();
        let _first = cell.subscribe(move |v| {
            if **v == 1 {
                handle.set(2);
            }
        });

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _second = cell.subscribe(move |v| sink.borrow_mut().push(**v));

        cell.set(1);
        assert_eq!(*cell.get(), 2);
        assert_eq!(*seen.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn unsubscribe_after_drop_of_cell_is_harmless() {
        let cell = Observable::new(0);
        let sub = cell.subscribe(|_| {});
        drop(cell);
        sub.unsubscribe();
    }
}
