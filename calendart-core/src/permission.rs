//! A user's permission on a calendar.

use serde::{Deserialize, Serialize};

use crate::capability::Capability;
use crate::error::CoreResult;
use crate::identity::{Calendar, CalendarId, UserId};
use crate::user::User;

/// Capability mask granted to one user on one calendar.
///
/// The mask is never validated: bits beyond `READ` and `WRITE` are kept so
/// adapters can define their own capabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    user: UserId,
    calendar: CalendarId,
    mask: Capability,
}

impl Permission {
    pub fn new(calendar: &impl Calendar, user: &User, mask: Capability) -> Self {
        Permission {
            user: user.id(),
            calendar: calendar.id(),
            mask,
        }
    }

    pub fn user(&self) -> &UserId {
        &self.user
    }

    pub fn calendar(&self) -> &CalendarId {
        &self.calendar
    }

    pub fn mask(&self) -> Capability {
        self.mask
    }

    pub fn grant(&mut self, flag: Capability) -> &mut Self {
        self.mask.insert(flag);
        tracing::debug!(
            user = %self.user,
            calendar = %self.calendar,
            flag = flag.bits(),
            mask = self.mask.bits(),
            "granted capability"
        );
        self
    }

    pub fn revoke(&mut self, flag: Capability) -> &mut Self {
        self.mask.remove(flag);
        tracing::debug!(
            user = %self.user,
            calendar = %self.calendar,
            flag = flag.bits(),
            mask = self.mask.bits(),
            "revoked capability"
        );
        self
    }

    /// True when every bit of `flag` is set. An empty flag is never granted.
    pub fn is_granted(&self, flag: Capability) -> bool {
        !flag.is_empty() && self.mask.contains(flag)
    }

    pub fn grant_named(&mut self, name: &str) -> CoreResult<&mut Self> {
        let flag = Capability::lookup(name)?;
        Ok(self.grant(flag))
    }

    pub fn revoke_named(&mut self, name: &str) -> CoreResult<&mut Self> {
        let flag = Capability::lookup(name)?;
        Ok(self.revoke(flag))
    }

    pub fn is_granted_named(&self, name: &str) -> CoreResult<bool> {
        Ok(self.is_granted(Capability::lookup(name)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::CapabilityNames;
    use crate::error::CoreError;

    fn permission(mask: Capability) -> Permission {
        let user = User::new("Alice", "alice@example.com");
        Permission::new(&CalendarId::new("work"), &user, mask)
    }

    #[test]
    fn test_new_permission_keeps_keys_and_mask() {
        let p = permission(Capability::READ);

        assert_eq!(p.user(), &UserId::from("alice@example.com"));
        assert_eq!(p.calendar(), &CalendarId::from("work"));
        assert_eq!(p.mask(), Capability::READ);
    }

    #[test]
    fn test_grant_and_revoke_roundtrip() {
        let mut p = permission(Capability::NOPE);

        p.grant(Capability::READ).grant(Capability::WRITE);
        assert_eq!(p.mask().bits(), 0b11);

        p.revoke(Capability::READ);
        assert_eq!(p.mask().bits(), 0b10);
        assert!(p.is_granted(Capability::WRITE));
        assert!(!p.is_granted(Capability::READ));
    }

    #[test]
    fn test_is_granted_requires_all_bits() {
        let p = permission(Capability::READ);

        assert!(!p.is_granted(Capability::READ | Capability::WRITE));
        assert!(!p.is_granted(Capability::NOPE));
    }

    #[test]
    fn test_named_grant_matches_literal_grant() {
        let mut by_name = permission(Capability::NOPE);
        let mut by_bits = permission(Capability::NOPE);

        by_name.grant_named("read").unwrap();
        by_bits.grant(Capability::from_mask(0b01));

        assert_eq!(by_name.mask(), by_bits.mask());
    }

    #[test]
    fn test_named_operations_ignore_case() {
        let mut p = permission(Capability::NOPE);

        p.grant_named("READ").unwrap().grant_named("Write").unwrap();
        assert!(p.is_granted_named("write").unwrap());

        p.revoke_named("wRiTe").unwrap();
        assert!(!p.is_granted_named("WRITE").unwrap());
        assert!(p.is_granted_named("read").unwrap());
    }

    #[test]
    fn test_unknown_name_leaves_mask_untouched() {
        let mut p = permission(Capability::READ);

        let err = p.grant_named("admin").unwrap_err();
        assert!(matches!(err, CoreError::UnknownCapability(_)));
        assert_eq!(p.mask(), Capability::READ);
    }

    #[test]
    fn test_adapter_bits_are_kept() {
        let mut names = CapabilityNames::new();
        names.register("share", Capability::from_mask(0b100)).unwrap();

        let mut p = permission(Capability::READ);
        p.grant(names.resolve("share").unwrap());

        assert_eq!(p.mask().bits(), 0b101);
        assert!(p.is_granted(Capability::from_mask(0b100)));

        p.revoke(Capability::READ);
        assert_eq!(p.mask().bits(), 0b100);

        p.revoke(Capability::from_mask(0b100));
        assert_eq!(p.mask(), Capability::NOPE);
    }
}
