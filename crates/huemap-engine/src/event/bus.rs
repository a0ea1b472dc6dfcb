use std::fmt;
use std::rc::Rc;

/// A notification about `subject`.
#[derive(Debug)]
pub struct Event<'a, S> {
    pub subject: &'a S,
}

impl<'a, S> Event<'a, S> {
    #[inline]
    pub fn new(subject: &'a S) -> Self {
        Self { subject }
    }
}

/// Receives events published on an [`EventBus`].
pub trait Observer<S> {
    fn on_event(&self, event: &Event<'_, S>);
}

impl<S, F> Observer<S> for F
where
    F: Fn(&Event<'_, S>),
{
    fn on_event(&self, event: &Event<'_, S>) {
        self(event)
    }
}

/// Ordered observer registry.
///
/// - `attach` does not deduplicate; an observer attached twice is called
///   twice.
/// - `detach` removes the first entry that is the same `Rc` allocation.
/// - `notify` calls observers in attachment order.
///
/// Registry mutation during delivery is not supported. `notify` borrows the
/// bus shared and `attach`/`detach` borrow it exclusively, so safe code
/// cannot do it directly. Delivery iterates a snapshot taken at the start of
/// `notify`, so a bus behind a `RefCell` still sees a consistent list.
pub struct EventBus<S> {
    observers: Vec<Rc<dyn Observer<S>>>,
}

impl<S> Default for EventBus<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> EventBus<S> {
    pub fn new() -> Self {
        Self { observers: Vec::new() }
    }

    pub fn attach(&mut self, observer: Rc<dyn Observer<S>>) {
        self.observers.push(observer);
    }

    /// Returns `true` when an entry was removed.
    pub fn detach(&mut self, observer: &Rc<dyn Observer<S>>) -> bool {
        match self.observers.iter().position(|o| Rc::ptr_eq(o, observer)) {
            Some(at) => {
                self.observers.remove(at);
                true
            }
            None => false,
        }
    }

    pub fn notify(&self, subject: &S) {
        let snapshot = self.observers.clone();
        let event = Event::new(subject);
        log::trace!("event bus: notifying {} observer(s)", snapshot.len());
        for observer in &snapshot {
            observer.on_event(&event);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<S> fmt::Debug for EventBus<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus").field("observers", &self.observers.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    type Log = Rc<RefCell<Vec<String>>>;

    fn recorder(log: &Log, tag: &'static str) -> Rc<dyn Observer<i32>> {
        let log = Rc::clone(log);
        Rc::new(move |e: &Event<'_, i32>| log.borrow_mut().push(format!("{}:{}", tag, e.subject)))
    }

    #[test]
    fn notify_in_attachment_order() {
        let log: Log = Rc::default();
        let mut bus = EventBus::new();
        bus.attach(recorder(&log, "a"));
        bus.attach(recorder(&log, "b"));
        bus.notify(&7);
        assert_eq!(*log.borrow(), vec!["a:7", "b:7"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let log: Log = Rc::default();
        let mut bus = EventBus::new();
        let a = recorder(&log, "a");
        bus.attach(Rc::clone(&a));
        bus.attach(Rc::clone(&a));
        bus.notify(&1);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn detach_removes_first_match_only() {
        let log: Log = Rc::default();
        let mut bus = EventBus::new();
        let a = recorder(&log, "a");
        let b = recorder(&log, "b");
        bus.attach(Rc::clone(&a));
        bus.attach(Rc::clone(&b));
        bus.attach(Rc::clone(&a));

        assert!(bus.detach(&a));
        assert_eq!(bus.len(), 2);
        bus.notify(&0);
        assert_eq!(*log.borrow(), vec!["b:0", "a:0"]);
    }

    #[test]
    fn detach_unknown_is_false() {
        let log: Log = Rc::default();
        let mut bus = EventBus::new();
        bus.attach(recorder(&log, "a"));
        assert!(!bus.detach(&recorder(&log, "a")));
        assert_eq!(bus.len(), 1);
    }

    #[test]
    fn empty_bus_notify_is_fine() {
        let bus: EventBus<i32> = EventBus::default();
        assert!(bus.is_empty());
        bus.notify(&3);
    }
}
