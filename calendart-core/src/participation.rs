//! A user's participation in an event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::identity::{Event, EventId, UserId};
use crate::role::Role;
use crate::status::Status;
use crate::user::User;

/// Invitation, response and role of one user on one event.
///
/// The event and user never change once the participation exists. Creating a
/// participation links the event to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participation {
    event: EventId,
    user: UserId,
    role: Role,
    invited_at: DateTime<Utc>,
    answered_at: Option<DateTime<Utc>>,
    status: Status,
}

impl Participation {
    /// Invite `user` to `event` as a tentative participant.
    pub fn new(event: &impl Event, user: &mut User) -> Self {
        Self::with_role_and_status(event, user, Role::default(), Status::default())
    }

    pub fn with_role_and_status(
        event: &impl Event,
        user: &mut User,
        role: Role,
        status: Status,
    ) -> Self {
        let participation = Participation {
            event: event.id(),
            user: user.id(),
            role,
            invited_at: Utc::now(),
            answered_at: None,
            status,
        };

        user.add_event(event);

        tracing::debug!(
            user = %participation.user,
            event = %participation.event,
            role = participation.role.bits(),
            status = %participation.status,
            "created participation"
        );
        participation
    }

    pub fn event(&self) -> &EventId {
        &self.event
    }

    pub fn user(&self) -> &UserId {
        &self.user
    }

    pub fn invited_at(&self) -> DateTime<Utc> {
        self.invited_at
    }

    /// None until the user answers the invitation.
    pub fn answered_at(&self) -> Option<DateTime<Utc>> {
        self.answered_at
    }

    pub fn has_answered(&self) -> bool {
        self.answered_at.is_some()
    }

    /// Record that the user answered now. Leaves the status untouched.
    pub fn mark_answered(&mut self) -> &mut Self {
        self.set_answered_at(Utc::now())
    }

    pub fn set_answered_at(&mut self, date: DateTime<Utc>) -> &mut Self {
        self.answered_at = Some(date);
        self
    }

    /// Set the status and record the answer time in one step.
    pub fn respond(&mut self, status: Status) -> &mut Self {
        self.set_status(status).mark_answered()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn set_role(&mut self, role: Role) -> &mut Self {
        self.role = role;
        self
    }

    pub fn is_manager(&self) -> bool {
        self.role.contains(Role::MANAGER)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_status(&mut self, status: Status) -> &mut Self {
        if self.status != status {
            tracing::debug!(
                user = %self.user,
                event = %self.event,
                from = %self.status,
                to = %status,
                "participation status changed"
            );
        }
        self.status = status;
        self
    }

    /// Set the status from its numeric code.
    ///
    /// Fails with `InvalidStatus` for codes other than -1, 0 and 1; the
    /// current status is kept in that case.
    pub fn set_status_code(&mut self, code: i64) -> CoreResult<&mut Self> {
        let status = Status::from_code(code)?;
        Ok(self.set_status(status))
    }

    pub fn available_statuses() -> [Status; 3] {
        Status::ALL
    }
}
