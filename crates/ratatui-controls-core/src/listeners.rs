//! Window-scoped listener registrations.
//!
//! Controls that need events outside their own area (a drag leaving the track, key presses
//! while a handle is focused) hold a [`Subscription`]. The registry only counts live
//! registrations; dropping a subscription releases it, so every exit path (including dropping
//! the control mid-drag) detaches its listeners.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerMove,
    PointerUp,
    KeyDown,
    FocusOut,
}

impl ListenerKind {
    fn index(self) -> usize {
        match self {
            ListenerKind::PointerMove => 0,
            ListenerKind::PointerUp => 1,
            ListenerKind::KeyDown => 2,
            ListenerKind::FocusOut => 3,
        }
    }
}

/// Shared registry of window listeners. Cloning shares the same counters.
#[derive(Clone, Debug, Default)]
pub struct WindowListeners {
    counts: Rc<RefCell<[usize; 4]>>,
}

impl WindowListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, kinds: &[ListenerKind]) -> Subscription {
        let mut counts = self.counts.borrow_mut();
        for kind in kinds {
            counts[kind.index()] += 1;
        }
        Subscription {
            registry: self.clone(),
            kinds: kinds.to_vec(),
        }
    }

    /// Number of live registrations of `kind` across every subscriber.
    pub fn active(&self, kind: ListenerKind) -> usize {
        self.counts.borrow()[kind.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.borrow().iter().sum()
    }

    fn release(&self, kinds: &[ListenerKind]) {
        let mut counts = self.counts.borrow_mut();
        for kind in kinds {
            let slot = &mut counts[kind.index()];
            *slot = slot.saturating_sub(1);
        }
    }
}

/// A live registration. Released on drop.
#[derive(Debug)]
pub struct Subscription {
    registry: WindowListeners,
    kinds: Vec<ListenerKind>,
}

impl Subscription {
    pub fn listens_to(&self, kind: ListenerKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn kinds(&self) -> &[ListenerKind] {
        &self.kinds
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.registry.release(&self.kinds);
    }
}
