use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Roles a user holds on an event.
    ///
    /// Roles combine: a manager who also attends holds
    /// `PARTICIPANT | MANAGER`. Bits outside the named ones are kept as-is
    /// so adapters can define their own roles.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Role: u32 {
        const PARTICIPANT = 0b01;
        const MANAGER     = 0b10;
    }
}

impl Role {
    /// Builds a role from a raw mask without validating it.
    pub fn from_mask(mask: u32) -> Self {
        Self::from_bits_retain(mask)
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::PARTICIPANT
    }
}
