//! Capabilities a user can hold on a calendar.
//!
//! Built-in capabilities are `READ` and `WRITE`. Adapters extend the bit space
//! by registering extra names in a [`CapabilityNames`] table, either in code or
//! through the `[capabilities]` section of the configuration file.

use std::collections::BTreeMap;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};

bitflags! {
    /// Capability mask granted to a user on a calendar.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Capability: u32 {
        /// View the calendar
        const READ  = 0b01;
        /// Edit the calendar
        const WRITE = 0b10;
    }
}

impl Capability {
    /// No rights at all.
    pub const NOPE: Self = Self::empty();

    /// Builds a capability from a raw mask without validating it.
    pub fn from_mask(mask: u32) -> Self {
        Self::from_bits_retain(mask)
    }

    /// Resolve a built-in capability name, ignoring case.
    pub fn lookup(name: &str) -> CoreResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "nope" => Ok(Self::NOPE),
            "read" => Ok(Self::READ),
            "write" => Ok(Self::WRITE),
            _ => Err(CoreError::UnknownCapability(name.to_string())),
        }
    }
}

impl Default for Capability {
    fn default() -> Self {
        Self::NOPE
    }
}

const BUILTINS: [(&str, Capability); 3] = [
    ("nope", Capability::NOPE),
    ("read", Capability::READ),
    ("write", Capability::WRITE),
];

/// Name table for built-in and adapter-defined capabilities.
#[derive(Debug, Clone, Default)]
pub struct CapabilityNames {
    extra: BTreeMap<String, Capability>,
}

impl CapabilityNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding the built-ins plus every capability declared in `config`.
    pub fn from_config(config: &CoreConfig) -> CoreResult<Self> {
        let mut names = Self::new();
        for (name, mask) in &config.capabilities {
            names.register(name, Capability::from_mask(*mask))?;
        }
        Ok(names)
    }

    /// Register an adapter-defined capability under `name`.
    pub fn register(&mut self, name: &str, capability: Capability) -> CoreResult<&mut Self> {
        let key = name.trim().to_ascii_lowercase();

        if key.is_empty() {
            return Err(CoreError::Config("Capability name cannot be empty".into()));
        }
        if BUILTINS.iter().any(|(builtin, _)| *builtin == key) {
            return Err(CoreError::Config(format!(
                "Capability '{}' is built in and cannot be redefined",
                key
            )));
        }
        if capability.is_empty() {
            return Err(CoreError::Config(format!(
                "Capability '{}' must set at least one bit",
                key
            )));
        }

        tracing::debug!(name = %key, bits = capability.bits(), "registered capability");
        self.extra.insert(key, capability);
        Ok(self)
    }

    /// Resolve `name`, ignoring case. Built-ins win over registered names.
    pub fn resolve(&self, name: &str) -> CoreResult<Capability> {
        Capability::lookup(name).or_else(|err| {
            self.extra
                .get(&name.trim().to_ascii_lowercase())
                .copied()
                .ok_or(err)
        })
    }

    /// All known names with their bits, built-ins first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Capability)> {
        BUILTINS
            .into_iter()
            .chain(self.extra.iter().map(|(name, c)| (name.as_str(), *c)))
    }
}
