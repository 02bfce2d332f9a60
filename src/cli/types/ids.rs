//! ID types for FPL Nexus entities.

use crate::error::{NexusError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
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

        impl FromStr for $name {
            type Err = NexusError;

            fn from_str(s: &str) -> Result<Self> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(NexusError::validation(stringify!($name), "must not be empty"));
                }
                Ok(Self(trimmed.to_string()))
            }
        }
    };
}

string_id!(
    /// Type-safe wrapper for league IDs (`l1`, `l1724140800000`, ...).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpl_nexus::LeagueId;
    ///
    /// let league_id: LeagueId = "l4".parse().unwrap();
    /// assert_eq!(league_id.as_str(), "l4");
    /// assert_eq!(league_id.to_string(), "l4");
    /// ```
    LeagueId
);

string_id!(
    /// Type-safe wrapper for user IDs. League members are keyed by the same ID.
    UserId
);

string_id!(TransactionId);
string_id!(AnnouncementId);
string_id!(HelpArticleId);
string_id!(BackupId);
string_id!(AlertId);
string_id!(PlayerId);
