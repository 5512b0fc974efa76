//! ID types for fantasy football entities.

use crate::error::{Result, SwcError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = SwcError;

            fn from_str(s: &str) -> Result<Self> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

entity_id!(
    /// Type-safe wrapper for player IDs.
    ///
    /// Keeps player IDs from being mixed up with the other entity IDs, which
    /// share the same integer space in the source data.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use swc_ffl::PlayerId;
    ///
    /// let player_id = PlayerId::new(2009);
    /// assert_eq!(player_id.as_i64(), 2009);
    /// assert_eq!(player_id.to_string(), "2009");
    /// ```
    PlayerId
);

entity_id!(
    /// Type-safe wrapper for fantasy team IDs
    TeamId
);

entity_id!(
    /// Type-safe wrapper for league IDs
    LeagueId
);

entity_id!(
    /// Type-safe wrapper for weekly performance IDs
    PerformanceId
);
