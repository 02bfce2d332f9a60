//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod nexus_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let nexus_error = NexusError::from(json_error);

        match nexus_error {
            NexusError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let nexus_error = NexusError::from(io_error);

        match nexus_error {
            NexusError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u64>().unwrap_err();
        let nexus_error = NexusError::from(parse_error);

        match nexus_error {
            NexusError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_join_failure_messages_match_user_facing_text() {
        let not_found = NexusError::LeagueNotFound {
            league_id: "l99".to_string(),
        };
        let full = NexusError::LeagueFull {
            league_id: "l1".to_string(),
        };
        let member = NexusError::AlreadyMember {
            league_id: "l4".to_string(),
        };

        assert_eq!(not_found.to_string(), "League not found.");
        assert_eq!(full.to_string(), "League is full.");
        assert_eq!(member.to_string(), "Already in this league.");
    }

    #[test]
    fn test_validation_error_display() {
        let error = NexusError::validation("name", "must not be empty");
        assert_eq!(error.to_string(), "Invalid name: must not be empty");
    }

    #[test]
    fn test_insufficient_funds_display() {
        let error = NexusError::InsufficientFunds {
            required: 500.0,
            available: 120.0,
        };
        let message = error.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("120"));
    }

    #[test]
    fn test_invalid_value_display() {
        let error = NexusError::InvalidValue {
            kind: "league status".to_string(),
            value: "Paused".to_string(),
        };
        assert_eq!(error.to_string(), "Unrecognized league status: \"Paused\"");
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(NexusError::LeagueFull {
            league_id: "l1".to_string()
        }
        .is_recoverable());
        assert!(NexusError::validation("title", "required").is_recoverable());

        let io_error = NexusError::from(io::Error::new(io::ErrorKind::Other, "disk"));
        assert!(!io_error.is_recoverable());
        assert!(!NexusError::Config {
            message: "bad".to_string()
        }
        .is_recoverable());
    }

    #[test]
    fn test_error_debug_format() {
        let error = NexusError::BackupNotFound {
            id: "bkp9".to_string(),
        };
        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("BackupNotFound"));
        assert!(debug_string.contains("bkp9"));
    }
}

#[test]
fn test_result_type_alias() {
    fn returns_result() -> Result<i32> {
        Ok(42)
    }

    fn returns_error() -> Result<i32> {
        Err(NexusError::UserNotFound {
            user_id: "au99".to_string(),
        })
    }

    assert_eq!(returns_result().unwrap(), 42);
    assert!(returns_error().is_err());
}
