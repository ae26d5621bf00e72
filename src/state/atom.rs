//! Subscribable single-value cells.
//!
//! DESIGN
//! ======
//! An `Atom` is a shared handle: cloning it yields another handle onto the
//! same value, so a layer can own its cells while views and adapters hold
//! handles. Writes notify subscribers synchronously, after the new value is
//! stored. Everything here is single-threaded (`Rc`/`RefCell`), matching the
//! UI thread it runs on.

#[cfg(test)]
#[path = "atom_test.rs"]
mod atom_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Subscriber<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: RefCell<T>,
    subscribers: Rc<RefCell<Vec<Subscriber<T>>>>,
}

/// A reactive cell holding one value of type `T`.
pub struct Atom<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Atom<T> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<T: Default + 'static> Default for Atom<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Atom<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Atom").field(&*self.inner.value.borrow()).finish()
    }
}

impl<T: 'static> Atom<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                subscribers: Rc::new(RefCell::new(Vec::new())),
            }),
        }
    }

    /// Read the current value through a closure without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Replace the value without notifying.
    ///
    /// Callers writing several cells as one unit store every value first and
    /// then call [`Atom::notify`] on each, so no observer sees a partial write.
    pub fn set_silent(&self, value: T) {
        *self.inner.value.borrow_mut() = value;
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// Whether two handles point at the same cell.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone + 'static> Atom<T> {
    /// Clone the current value out of the cell.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Replace the value and notify subscribers.
    pub fn set(&self, value: T) {
        self.set_silent(value);
        self.notify();
    }

    /// Mutate the value in place and notify subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.value.borrow_mut());
        self.notify();
    }

    /// Run every subscriber against the current value.
    pub fn notify(&self) {
        // Snapshot so subscribers may (un)subscribe while being notified.
        let subscribers = self.inner.subscribers.borrow().clone();
        if subscribers.is_empty() {
            return;
        }
        // Observers get a copy so they are free to write back into cells.
        let value = self.get();
        for subscriber in subscribers {
            (subscriber)(&value);
        }
    }

    /// Register `f` to run after every write. Dropping the returned guard
    /// unsubscribes.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> Subscription {
        let subscriber: Subscriber<T> = Rc::new(f);
        self.inner.subscribers.borrow_mut().push(Rc::clone(&subscriber));

        let subscribers = Rc::downgrade(&self.inner.subscribers);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(subscribers) = subscribers.upgrade() {
                    subscribers
                        .borrow_mut()
                        .retain(|item| !Rc::ptr_eq(item, &subscriber));
                }
            })),
        }
    }
}

/// Guard returned by [`Atom::subscribe`].
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Keep the subscription alive for the rest of the program.
    pub fn forget(mut self) {
        self.release = None;
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.release.is_some()).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}
