//! Identity of the entities the core links together.
//!
//! The core never owns events or calendars. Adapters keep their own
//! representation and expose a stable key through the `Event` and `Calendar`
//! traits; users, participations and permissions only store those keys.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                $name(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                $name::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                $name(id)
            }
        }
    };
}

string_id!(
    /// Adapter-defined key of an event (e.g. an iCalendar UID).
    EventId
);

string_id!(
    /// Adapter-defined key of a calendar.
    CalendarId
);

string_id!(
    /// Key of a user. Users are identified by their email address.
    UserId
);

/// An event provided by an adapter.
pub trait Event {
    fn id(&self) -> EventId;
}

/// A calendar provided by an adapter.
pub trait Calendar {
    fn id(&self) -> CalendarId;
}

impl Event for EventId {
    fn id(&self) -> EventId {
        self.clone()
    }
}

impl Calendar for CalendarId {
    fn id(&self) -> CalendarId {
        self.clone()
    }
}

impl<T: Event + ?Sized> Event for &T {
    fn id(&self) -> EventId {
        (**self).id()
    }
}

impl<T: Calendar + ?Sized> Calendar for &T {
    fn id(&self) -> CalendarId {
        (**self).id()
    }
}
