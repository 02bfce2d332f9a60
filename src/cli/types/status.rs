//! Enumerated statuses, roles and categories shared by the models and the CLI.
//!
//! Each enum serializes to the exact text the platform uses (`"Payouts Approved"`,
//! `"entry_fee"`, ...) and parses case-insensitively from that text or a short alias,
//! so the same values work in JSON state files and on the command line.

use crate::error::{NexusError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $text:literal $(| $alias:literal)*,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = NexusError;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
                $(
                    if wanted == $text.to_lowercase().replace(['-', ' '], "_")
                        $(|| wanted == $alias)*
                    {
                        return Ok($name::$variant);
                    }
                )+
                Err(NexusError::InvalidValue {
                    kind: $kind.to_string(),
                    value: s.to_string(),
                })
            }
        }
    };
}

text_enum!(
    /// Lifecycle of a league as seen from the admin console.
    LeagueStatus, "league status" {
        Open => "Open",
        Ongoing => "Ongoing" | "live",
        Completed => "Completed" | "closed",
        PayoutsApproved => "Payouts Approved" | "approved" | "paid",
    }
);

text_enum!(
    UserRole, "user role" {
        Admin => "Admin",
        Moderator => "Moderator" | "mod",
        User => "User",
    }
);

text_enum!(
    UserStatus, "user status" {
        Active => "Active",
        Banned => "Banned",
    }
);

text_enum!(
    /// Kind of money movement. Deposits and winnings carry positive amounts,
    /// withdrawals and entry fees negative ones.
    TransactionType, "transaction type" {
        Deposit => "deposit",
        Withdrawal => "withdrawal",
        EntryFee => "entry_fee" | "fee",
        Winnings => "winnings",
    }
);

text_enum!(
    TransactionStatus, "transaction status" {
        Completed => "Completed",
        Pending => "Pending",
        Failed => "Failed",
    }
);

text_enum!(
    AnnouncementStatus, "announcement status" {
        Published => "Published",
        Draft => "Draft",
    }
);

text_enum!(
    AlertLevel, "alert level" {
        High => "High",
        Medium => "Medium",
        Low => "Low",
    }
);

text_enum!(
    TrendPeriod, "trend period" {
        Dau => "DAU",
        Wau => "WAU",
        Mau => "MAU",
    }
);

text_enum!(
    PlayerPosition, "player position" {
        Goalkeeper => "GK",
        Defender => "DEF",
        Midfielder => "MID",
        Forward => "FWD",
    }
);

impl TransactionType {
    /// Sign an amount according to the type's convention.
    pub fn signed(&self, magnitude: f64) -> f64 {
        match self {
            TransactionType::Deposit | TransactionType::Winnings => magnitude.abs(),
            TransactionType::Withdrawal | TransactionType::EntryFee => -magnitude.abs(),
        }
    }
}
