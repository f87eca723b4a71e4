use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::identity::{Event, EventId, UserId};

/// A user and the events it is involved in.
///
/// Adapters wrap this type with their own account data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    name: String,
    email: String,
    #[serde(default)]
    events: HashSet<EventId>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        User {
            name: name.into(),
            email: email.into(),
            events: HashSet::new(),
        }
    }

    pub fn id(&self) -> UserId {
        UserId::new(self.email.as_str())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn events(&self) -> &HashSet<EventId> {
        &self.events
    }

    pub fn has_event(&self, event: &impl Event) -> bool {
        self.events.contains(&event.id())
    }

    /// Link `event` to this user. Linking twice is a no-op.
    pub fn add_event(&mut self, event: &impl Event) -> &mut Self {
        let id = event.id();
        if !self.events.contains(&id) {
            tracing::debug!(user = %self.email, event = %id, "linked event to user");
            self.events.insert(id);
        }
        self
    }

    /// Unlink `event` from this user. Unlinking an absent event is a no-op.
    pub fn remove_event(&mut self, event: &impl Event) -> &mut Self {
        let id = event.id();
        if self.events.remove(&id) {
            tracing::debug!(user = %self.email, event = %id, "unlinked event from user");
        }
        self
    }
}
