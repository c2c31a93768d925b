//! Change notification.
//!
//! Listeners are told *that* the game changed, never *what* changed; they
//! re-read whatever they display through the query interface. Notification
//! is synchronous and in registration order, once per committed mutation.
//!
//! Listeners receive no handle to the model, so they cannot mutate it while
//! being notified.

use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};

/// Observer of a game model.
///
/// Any `FnMut()` closure is a listener.
pub trait GameModelListener {
    /// Called after every committed change to the game state.
    fn game_state_changed(&mut self);
}

impl<F: FnMut()> GameModelListener for F {
    fn game_state_changed(&mut self) {
        self()
    }
}

/// Handle for removing a registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

/// Listeners in registration order.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<(ListenerId, Box<dyn GameModelListener>)>,
    next_id: u32,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It will be called after listeners registered
    /// before it.
    pub fn add(&mut self, listener: impl GameModelListener + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregister a listener. Returns false if it was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Call every listener once.
    pub fn notify_all(&mut self) {
        trace!("notifying {} listeners", self.listeners.len());
        for (_, listener) in &mut self.listeners {
            listener.game_state_changed();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
