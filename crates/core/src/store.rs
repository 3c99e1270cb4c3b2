//! Store module - owns the current state and fans out changes
//!
//! The store is the only place state changes: `dispatch` runs [`reduce`]
//! and then calls every subscriber with the new state, in the order they
//! subscribed. There is no global store; whoever needs one owns one.

use crate::action::Action;
use crate::reducer::reduce;
use crate::types::GameState;

/// Handle returned by [`Store::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&GameState) + Send>;

pub struct Store {
    state: GameState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Store {
    /// Create a store holding `initial`, or the default state
    pub fn new(initial: Option<GameState>) -> Self {
        Self {
            state: initial.unwrap_or_default(),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply `action` and notify subscribers. Returns the new state.
    pub fn dispatch(&mut self, action: Action) -> &GameState {
        tracing::debug!(action = action.type_name(), "dispatch");

        let prev = std::mem::take(&mut self.state);
        self.state = reduce(Some(prev), &action);

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
        &self.state
    }

    /// Decode and dispatch a JSON action.
    ///
    /// Unknown action types and malformed input leave the state untouched
    /// and notify nobody.
    pub fn dispatch_json(&mut self, json: &str) -> &GameState {
        match Action::from_json(json) {
            Ok(Some(action)) => self.dispatch(action),
            Ok(None) => {
                tracing::debug!("ignoring unknown action type");
                &self.state
            }
            Err(e) => {
                tracing::warn!(error = %e, "malformed action");
                &self.state
            }
        }
    }

    /// Register a callback run after every dispatch
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&GameState) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a subscriber. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}
