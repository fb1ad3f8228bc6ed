//! Sequential identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Store-assigned identifier of an entity.
///
/// Identifiers start at 1 and are handed out in increasing order by the
/// owning store; they are never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    /// The first identifier a store hands out.
    pub const FIRST: EntityId = EntityId(1);

    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier following this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<EntityId> for u64 {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

impl FromStr for EntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("EntityId: {e}")))?;
        if raw == 0 {
            return Err(DomainError::invalid_id("EntityId: identifiers start at 1"));
        }
        Ok(Self(raw))
    }
}

/// Declare a typed identifier wrapping [`EntityId`].
///
/// Each domain module gets its own id type so that a product id cannot be
/// passed where a customer id is expected.
#[macro_export]
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub $crate::EntityId);

        impl $name {
            pub const fn new(id: $crate::EntityId) -> Self {
                Self(id)
            }

            pub const fn from_raw(raw: u64) -> Self {
                Self($crate::EntityId::from_raw(raw))
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$crate::EntityId> for $name {
            fn from(value: $crate::EntityId) -> Self {
                Self(value)
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<$crate::EntityId>().map(Self)
            }
        }
    };
}
