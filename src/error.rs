//! Error types for the FPL Nexus service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NexusError>;

#[derive(Error, Debug)]
pub enum NexusError {
    #[error("League not found.")]
    LeagueNotFound { league_id: String },

    #[error("League is full.")]
    LeagueFull { league_id: String },

    #[error("Already in this league.")]
    AlreadyMember { league_id: String },

    #[error("Insufficient funds: need Ksh {required}, wallet holds Ksh {available}.")]
    InsufficientFunds { required: f64, available: f64 },

    #[error("Cannot move league {league_id} from {from} to {to}.")]
    InvalidStatusTransition {
        league_id: String,
        from: String,
        to: String,
    },

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },

    #[error("Announcement not found: {id}")]
    AnnouncementNotFound { id: String },

    #[error("Help article not found: {id}")]
    HelpArticleNotFound { id: String },

    #[error("Backup not found: {id}")]
    BackupNotFound { id: String },

    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Unrecognized {kind}: {value:?}")]
    InvalidValue { kind: String, value: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl NexusError {
    pub(crate) fn validation(field: &str, message: impl Into<String>) -> Self {
        NexusError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Domain failures a caller can show to the user and carry on from.
    ///
    /// I/O, JSON and configuration errors come from the process environment
    /// rather than from a façade rule, so they are reported as unrecoverable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            NexusError::Json(_)
                | NexusError::Io(_)
                | NexusError::InvalidNumber(_)
                | NexusError::Config { .. }
        )
    }
}

#[cfg(test)]
mod tests;
