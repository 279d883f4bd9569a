//! Change notification for collaborators (views, controllers) watching a board.

use std::fmt;
use std::rc::{Rc, Weak};

use crate::types::{Color, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The turn passed to the given color.
    TurnChanged(Color),
    GameOver(Outcome),
}

/// Receives board events synchronously.
///
/// Callbacks must not re-enter the board that emitted the event.
pub trait Observer {
    fn notify(&self, event: &GameEvent);
}

/// Subscribers of one board. Holds weak references only; the board does not
/// keep its observers alive, and dropped observers are pruned on the next emit.
#[derive(Default)]
pub(crate) struct Observers {
    subscribers: Vec<Weak<dyn Observer>>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<O: Observer + 'static>(&mut self, observer: &Rc<O>) {
        let weak = Rc::downgrade(observer);
        let weak: Weak<dyn Observer> = weak;
        self.subscribers.push(weak);
    }

    /// Delivers `event` to live subscribers in registration order.
    pub fn emit(&mut self, event: &GameEvent) {
        self.subscribers.retain(|weak| match weak.upgrade() {
            Some(observer) => {
                observer.notify(event);
                true
            }
            None => false,
        });
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
