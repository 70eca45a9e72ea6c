use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Subscriber<T> = Box<dyn Fn(&T)>;

/// A shared value that pushes every change to its subscribers.
///
/// Clones share the same value and subscriber list.
pub struct Signal<T: 'static + Clone> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Subscriber<T>>>>,
}

impl<T: 'static + Clone> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<T: 'static + Clone> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    pub fn update<F: FnOnce(&T) -> T>(&self, f: F) {
        let new_value = f(&self.value.borrow());
        self.set(new_value);
    }

    /// Run `f` with the current value now and after every change.
    pub fn subscribe<F: Fn(&T) + 'static>(&self, f: F) {
        f(&self.get());
        self.subscribers.borrow_mut().push(Box::new(f));
    }

    fn notify(&self) {
        // Subscribers may read or write this signal again.
        let value = self.get();

        for subscriber in self.subscribers.borrow().iter() {
            subscriber(&value);
        }
    }
}

impl<T: 'static + Clone + PartialEq> Signal<T> {
    /// Store `new_value` and notify only if it differs from the current value.
    ///
    /// Returns whether subscribers were notified.
    pub fn set_if_changed(&self, new_value: T) -> bool {
        if *self.value.borrow() == new_value {
            return false;
        }

        self.set(new_value);
        true
    }
}

impl<T: Clone + fmt::Debug + 'static> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("value", &*self.value.borrow())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}
