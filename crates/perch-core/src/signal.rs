use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::reactive::{self, SignalId};
use crate::runtime::request_frame;

pub type SubId = usize;

/// Observable value cell. Cloning yields another handle to the same cell.
///
/// Every write requests a new frame, notifies subscribers and re-runs
/// observers that read the signal.
pub struct Signal<T: 'static>(Rc<Inner<T>>);

struct Inner<T> {
    id: SignalId,
    value: RefCell<T>,
    subs: RefCell<Vec<(SubId, Rc<dyn Fn(&T)>)>>,
    next_sub: Cell<SubId>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(Inner {
            id: reactive::next_signal_id(),
            value: RefCell::new(value),
            subs: RefCell::new(Vec::new()),
            next_sub: Cell::new(0),
        }))
    }

    pub fn id(&self) -> SignalId {
        self.0.id
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        reactive::register_signal_read(self.0.id);
        self.0.value.borrow().clone()
    }

    /// Reads without registering a dependency.
    pub fn get_untracked(&self) -> T
    where
        T: Clone,
    {
        self.0.value.borrow().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        reactive::register_signal_read(self.0.id);
        f(&self.0.value.borrow())
    }

    pub fn set(&self, v: T) {
        *self.0.value.borrow_mut() = v;
        self.notify();
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        f(&mut self.0.value.borrow_mut());
        self.notify();
    }

    /// Writes only when the value differs; returns whether it did.
    pub fn set_if_changed(&self, v: T) -> bool
    where
        T: PartialEq,
    {
        if *self.0.value.borrow() == v {
            return false;
        }
        self.set(v);
        true
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let id = self.0.next_sub.get();
        self.0.next_sub.set(id + 1);
        self.0.subs.borrow_mut().push((id, Rc::new(f)));
        id
    }

    pub fn unsubscribe(&self, id: SubId) {
        self.0.subs.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    fn notify(&self) {
        request_frame();
        let subs: Vec<Rc<dyn Fn(&T)>> = self.0.subs.borrow().iter().map(|(_, s)| s.clone()).collect();
        if !subs.is_empty() {
            let v = self.0.value.borrow();
            for s in &subs {
                s(&v);
            }
        }
        reactive::signal_changed(self.0.id);
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Signal").field(&self.0.value.borrow()).finish()
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
