//! Search filters for the admin console lists.
//!
//! Each filter field is optional; unset fields match everything. Text search
//! is a case-insensitive substring match.
//!
//! # Examples
//!
//! ```rust
//! use fpl_nexus::core::filters::UserQuery;
//! use fpl_nexus::cli::types::UserStatus;
//!
//! let query = UserQuery::default()
//!     .status(Some(UserStatus::Banned))
//!     .search(Some("smith".to_string()));
//! assert!(!query.is_empty());
//! ```

use crate::cli::types::{TransactionStatus, TransactionType, UserRole, UserStatus};
use crate::models::{AdminTransaction, AdminUser};

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filter for the admin user list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserQuery {
    pub status: Option<UserStatus>,
    pub role: Option<UserRole>,
    /// Matched against name and email.
    pub search: Option<String>,
}

impl UserQuery {
    pub fn status(mut self, status: Option<UserStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn role(mut self, role: Option<UserRole>) -> Self {
        self.role = role;
        self
    }

    pub fn search(mut self, term: Option<String>) -> Self {
        self.search = term.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.role.is_none() && self.search.is_none()
    }

    pub fn matches(&self, user: &AdminUser) -> bool {
        if let Some(status) = self.status {
            if user.status != status {
                return false;
            }
        }
        if let Some(role) = self.role {
            if user.role != role {
                return false;
            }
        }
        match &self.search {
            Some(term) => contains_ci(&user.name, term) || contains_ci(&user.email, term),
            None => true,
        }
    }
}

/// Filter for the platform ledger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionQuery {
    pub status: Option<TransactionStatus>,
    pub kind: Option<TransactionType>,
    /// Matched against the user's name and the description.
    pub search: Option<String>,
}

impl TransactionQuery {
    pub fn status(mut self, status: Option<TransactionStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn kind(mut self, kind: Option<TransactionType>) -> Self {
        self.kind = kind;
        self
    }

    pub fn search(mut self, term: Option<String>) -> Self {
        self.search = term.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.kind.is_none() && self.search.is_none()
    }

    pub fn matches(&self, entry: &AdminTransaction) -> bool {
        if let Some(status) = self.status {
            if entry.transaction.status != status {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if entry.transaction.kind != kind {
                return false;
            }
        }
        match &self.search {
            Some(term) => {
                contains_ci(&entry.user.name, term) || contains_ci(&entry.transaction.description, term)
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{TransactionId, UserId};
    use crate::models::{Transaction, UserRef};
    use chrono::{TimeZone, Utc};

    fn user(name: &str, email: &str, role: UserRole, status: UserStatus) -> AdminUser {
        AdminUser {
            id: UserId::new(name.to_lowercase()),
            name: name.to_string(),
            email: email.to_string(),
            avatar_url: String::new(),
            role,
            status,
            joined_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn entry(user: &str, description: &str, kind: TransactionType, status: TransactionStatus) -> AdminTransaction {
        AdminTransaction {
            transaction: Transaction {
                id: TransactionId::new("at1"),
                date: Utc.with_ymd_and_hms(2024, 8, 1, 0, 0, 0).unwrap(),
                description: description.to_string(),
                amount: kind.signed(100.0),
                kind,
                status,
            },
            user: UserRef {
                id: UserId::new("au1"),
                name: user.to_string(),
                avatar_url: String::new(),
            },
        }
    }

    #[test]
    fn test_empty_user_query_matches_everything() {
        let query = UserQuery::default();
        assert!(query.is_empty());
        assert!(query.matches(&user("Jane Doe", "jane@x.com", UserRole::Moderator, UserStatus::Active)));
    }

    #[test]
    fn test_user_query_combines_fields() {
        let banned_smith = user("John Smith", "john.smith@email.com", UserRole::User, UserStatus::Banned);
        let active_smith = user("Anna Smith", "anna@email.com", UserRole::User, UserStatus::Active);

        let query = UserQuery::default()
            .status(Some(UserStatus::Banned))
            .search(Some("SMITH".to_string()));

        assert!(query.matches(&banned_smith));
        assert!(!query.matches(&active_smith));
    }

    #[test]
    fn test_user_query_searches_email() {
        let jane = user("Jane Doe", "jane.doe@email.com", UserRole::Moderator, UserStatus::Active);
        let query = UserQuery::default().search(Some("doe@".to_string()));
        assert!(query.matches(&jane));

        let by_role = UserQuery::default().role(Some(UserRole::Admin));
        assert!(!by_role.matches(&jane));
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let query = UserQuery::default().search(Some("   ".to_string()));
        assert!(query.search.is_none());
        assert!(query.is_empty());
    }

    #[test]
    fn test_transaction_query_filters() {
        let fee = entry("Emily White", "League Entry: Elite", TransactionType::EntryFee, TransactionStatus::Completed);
        let failed = entry("Laura Grey", "Deposit via Card", TransactionType::Deposit, TransactionStatus::Failed);

        let fees = TransactionQuery::default().kind(Some(TransactionType::EntryFee));
        assert!(fees.matches(&fee));
        assert!(!fees.matches(&failed));

        let failures = TransactionQuery::default().status(Some(TransactionStatus::Failed));
        assert!(failures.matches(&failed));

        let by_user = TransactionQuery::default().search(Some("laura".to_string()));
        assert!(by_user.matches(&failed));
        assert!(!by_user.matches(&fee));

        let by_description = TransactionQuery::default().search(Some("elite".to_string()));
        assert!(by_description.matches(&fee));
    }
}
