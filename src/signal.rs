//! Single-threaded observer lists used for change and error notifications.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;

type Slot<T> = Box<dyn FnMut(&T)>;

pub struct Signal<T> {
    slots: RefCell<Vec<Slot<T>>>,
    emitting: Cell<bool>,
    // Values emitted by a slot while an emission is running.
    queued: RefCell<VecDeque<T>>,
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(Vec::new()),
            emitting: Cell::new(false),
            queued: RefCell::new(VecDeque::new()),
        }
    }

    pub fn connect(&self, slot: impl FnMut(&T) + 'static) {
        self.slots.borrow_mut().push(Box::new(slot));
    }

    fn dispatch(&self, value: &T) {
        let mut active = std::mem::take(&mut *self.slots.borrow_mut());
        for slot in active.iter_mut() {
            slot(value);
        }
        let mut slots = self.slots.borrow_mut();
        active.append(&mut slots);
        *slots = active;
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Signal<T> {
    /// Calls every connected slot in connection order.
    ///
    /// Slots may connect further slots while being called; those only see
    /// later emissions. A value emitted from inside a slot is delivered to
    /// every slot once the current emission has finished.
    pub fn emit(&self, value: &T) {
        if self.emitting.get() {
            self.queued.borrow_mut().push_back(value.clone());
            return;
        }
        self.emitting.set(true);
        self.dispatch(value);
        loop {
            let next = self.queued.borrow_mut().pop_front();
            match next {
                Some(value) => self.dispatch(&value),
                None => break,
            }
        }
        self.emitting.set(false);
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal").field("slots", &self.len()).finish()
    }
}
