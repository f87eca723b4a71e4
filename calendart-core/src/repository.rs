//! In-memory owner of participations and permissions.
//!
//! Users only keep the keys of their events, so role and status live here.
//! Adapters that persist entities elsewhere can use this as a working set
//! and flush it to their backend.

use crate::capability::Capability;
use crate::identity::{Calendar, CalendarId, Event, EventId, UserId};
use crate::participation::Participation;
use crate::permission::Permission;
use crate::role::Role;
use crate::status::Status;
use crate::user::User;

#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    participations: Vec<Participation>,
    permissions: Vec<Permission>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // PARTICIPATIONS:

    /// Create a participation and take ownership of it.
    ///
    /// A user may hold several participations on the same event (e.g. with
    /// different roles); each call adds a new one.
    pub fn invite(
        &mut self,
        event: &impl Event,
        user: &mut User,
        role: Role,
        status: Status,
    ) -> &mut Participation {
        let index = self.participations.len();
        self.participations.push(Participation::with_role_and_status(
            event, user, role, status,
        ));
        &mut self.participations[index]
    }

    pub fn participations(&self) -> &[Participation] {
        &self.participations
    }

    pub fn participations_of<'a>(
        &'a self,
        user: &'a UserId,
    ) -> impl Iterator<Item = &'a Participation> {
        self.participations.iter().filter(move |p| p.user() == user)
    }

    pub fn participants_of<'a>(
        &'a self,
        event: &'a EventId,
    ) -> impl Iterator<Item = &'a Participation> {
        self.participations.iter().filter(move |p| p.event() == event)
    }

    /// First participation of `user` on `event`.
    pub fn participation(&self, user: &UserId, event: &EventId) -> Option<&Participation> {
        self.participations
            .iter()
            .find(|p| p.user() == user && p.event() == event)
    }

    pub fn participation_mut(
        &mut self,
        user: &UserId,
        event: &EventId,
    ) -> Option<&mut Participation> {
        self.participations
            .iter_mut()
            .find(|p| p.user() == user && p.event() == event)
    }

    /// Remove every participation of `user` on `event`.
    ///
    /// The event stays linked to the user; callers unlink it with
    /// `User::remove_event` if they need to.
    pub fn withdraw(&mut self, user: &UserId, event: &EventId) -> Vec<Participation> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.participations)
            .into_iter()
            .partition(|p| p.user() == user && p.event() == event);
        self.participations = kept;

        tracing::debug!(
            user = %user,
            event = %event,
            removed = removed.len(),
            "withdrew participations"
        );
        removed
    }

    // PERMISSIONS:

    /// Grant `mask` to `user` on `calendar`.
    ///
    /// There is at most one permission per user and calendar: sharing again
    /// adds `mask` to the existing permission.
    pub fn share(
        &mut self,
        calendar: &impl Calendar,
        user: &User,
        mask: Capability,
    ) -> &mut Permission {
        let calendar_id = calendar.id();
        let user_id = user.id();

        let index = match self
            .permissions
            .iter()
            .position(|p| p.user() == &user_id && p.calendar() == &calendar_id)
        {
            Some(index) => {
                self.permissions[index].grant(mask);
                index
            }
            None => {
                self.permissions.push(Permission::new(calendar, user, mask));
                self.permissions.len() - 1
            }
        };

        &mut self.permissions[index]
    }

    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }

    pub fn permission(&self, user: &UserId, calendar: &CalendarId) -> Option<&Permission> {
        self.permissions
            .iter()
            .find(|p| p.user() == user && p.calendar() == calendar)
    }

    pub fn permission_mut(
        &mut self,
        user: &UserId,
        calendar: &CalendarId,
    ) -> Option<&mut Permission> {
        self.permissions
            .iter_mut()
            .find(|p| p.user() == user && p.calendar() == calendar)
    }

    pub fn permissions_on<'a>(
        &'a self,
        calendar: &'a CalendarId,
    ) -> impl Iterator<Item = &'a Permission> {
        self.permissions
            .iter()
            .filter(move |p| p.calendar() == calendar)
    }

    pub fn unshare(&mut self, user: &UserId, calendar: &CalendarId) -> Option<Permission> {
        let index = self
            .permissions
            .iter()
            .position(|p| p.user() == user && p.calendar() == calendar)?;

        tracing::debug!(user = %user, calendar = %calendar, "removed permission");
        Some(self.permissions.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invite_links_event_and_indexes_participation() {
        let standup = EventId::new("standup");
        let mut alice = User::new("Alice", "alice@example.com");
        let mut bob = User::new("Bob", "bob@example.com");

        let mut repo = MemoryRepository::new();
        repo.invite(&standup, &mut alice, Role::MANAGER, Status::Accepted);
        repo.invite(&standup, &mut bob, Role::PARTICIPANT, Status::Tentative);

        assert!(alice.has_event(&standup));
        assert!(bob.has_event(&standup));
        assert_eq!(repo.participants_of(&standup).count(), 2);

        let alice_on_standup = repo.participation(&alice.id(), &standup).unwrap();
        assert!(alice_on_standup.is_manager());
        assert_eq!(alice_on_standup.status(), Status::Accepted);
    }

    #[test]
    fn test_multiple_roles_on_same_event_are_kept() {
        let standup = EventId::new("standup");
        let mut alice = User::new("Alice", "alice@example.com");

        let mut repo = MemoryRepository::new();
        repo.invite(&standup, &mut alice, Role::PARTICIPANT, Status::Tentative);
        repo.invite(&standup, &mut alice, Role::MANAGER, Status::Accepted);

        assert_eq!(alice.events().len(), 1);

        let roles: Vec<Role> = repo.participations_of(&alice.id()).map(|p| p.role()).collect();
        assert_eq!(roles, vec![Role::PARTICIPANT, Role::MANAGER]);
    }

    #[test]
    fn test_participation_mut_updates_in_place() {
        let standup = EventId::new("standup");
        let mut alice = User::new("Alice", "alice@example.com");

        let mut repo = MemoryRepository::new();
        repo.invite(&standup, &mut alice, Role::default(), Status::default());

        repo.participation_mut(&alice.id(), &standup)
            .unwrap()
            .respond(Status::Declined);

        let participation = repo.participation(&alice.id(), &standup).unwrap();
        assert_eq!(participation.status(), Status::Declined);
        assert!(participation.has_answered());
    }

    #[test]
    fn test_withdraw_does_not_cascade_to_user() {
        let standup = EventId::new("standup");
        let retro = EventId::new("retro");
        let mut alice = User::new("Alice", "alice@example.com");

        let mut repo = MemoryRepository::new();
        repo.invite(&standup, &mut alice, Role::default(), Status::default());
        repo.invite(&retro, &mut alice, Role::default(), Status::default());

        let removed = repo.withdraw(&alice.id(), &standup);

        assert_eq!(removed.len(), 1);
        assert!(repo.participation(&alice.id(), &standup).is_none());
        assert!(repo.participation(&alice.id(), &retro).is_some());
        assert!(alice.has_event(&standup));
    }

    #[test]
    fn test_share_merges_into_existing_permission() {
        let work = CalendarId::new("work");
        let alice = User::new("Alice", "alice@example.com");

        let mut repo = MemoryRepository::new();
        repo.share(&work, &alice, Capability::READ);
        repo.share(&work, &alice, Capability::WRITE);

        assert_eq!(repo.permissions().len(), 1);
        let permission = repo.permission(&alice.id(), &work).unwrap();
        assert_eq!(permission.mask(), Capability::READ | Capability::WRITE);
    }

    #[test]
    fn test_permissions_on_calendar_and_unshare() {
        let work = CalendarId::new("work");
        let home = CalendarId::new("home");
        let alice = User::new("Alice", "alice@example.com");
        let bob = User::new("Bob", "bob@example.com");

        let mut repo = MemoryRepository::new();
        repo.share(&work, &alice, Capability::READ);
        repo.share(&work, &bob, Capability::WRITE);
        repo.share(&home, &alice, Capability::READ | Capability::WRITE);

        assert_eq!(repo.permissions_on(&work).count(), 2);

        repo.permission_mut(&bob.id(), &work)
            .unwrap()
            .revoke(Capability::WRITE);
        assert_eq!(
            repo.permission(&bob.id(), &work).unwrap().mask(),
            Capability::NOPE
        );

        let removed = repo.unshare(&alice.id(), &work).unwrap();
        assert_eq!(removed.mask(), Capability::READ);
        assert!(repo.unshare(&alice.id(), &work).is_none());
        assert_eq!(repo.permissions_on(&work).count(), 1);
        assert!(repo.permission(&alice.id(), &home).is_some());
    }
}
