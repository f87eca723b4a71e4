//! Core domain model for calendart.
//!
//! This crate provides the types shared by every calendar adapter:
//! - `User`, and the set of events it is linked to
//! - `Participation`: a user's invitation, response and role on one event
//! - `Permission`: a user's capability mask on one calendar
//! - `MemoryRepository`: an in-memory owner and index for both join entities
//!
//! Adapters plug their own events and calendars in through the `Event` and
//! `Calendar` traits.

pub mod capability;
pub mod config;
pub mod error;
pub mod identity;
pub mod participation;
pub mod permission;
pub mod repository;
pub mod role;
pub mod status;
pub mod user;

pub use capability::{Capability, CapabilityNames};
pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use identity::{Calendar, CalendarId, Event, EventId, UserId};
pub use participation::Participation;
pub use permission::Permission;
pub use repository::MemoryRepository;
pub use role::Role;
pub use status::Status;
pub use user::User;
