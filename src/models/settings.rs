//! System settings singleton.

use crate::cli::types::BackupId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Third-party credentials used by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeys {
    pub fpl: String,
    pub stripe_public: String,
    pub stripe_secret: String,
    pub mpesa_key: String,
    pub mpesa_secret: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingSettings {
    pub app_name: String,
    pub primary_color: String,
    pub secondary_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    pub id: BackupId,
    pub timestamp: DateTime<Utc>,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettingsData {
    pub api_keys: ApiKeys,
    pub branding: BrandingSettings,
    pub backups: Vec<Backup>,
}

/// Sections to replace. Each supplied section overwrites the stored one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub api_keys: Option<ApiKeys>,
    pub branding: Option<BrandingSettings>,
}

/// True for `#RRGGBB` hex colours.
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
