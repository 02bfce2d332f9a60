//! Analytics, system settings and backups.

use super::FantasyService;
use crate::cli::types::BackupId;
use crate::error::{NexusError, Result};
use crate::models::{is_hex_color, AnalyticsData, Backup, BrandingSettings, SettingsUpdate, SystemSettingsData};
use chrono::Utc;
use rand::Rng;
use tracing::info;

/// Number of leagues listed in the analytics top-leagues table.
pub const TOP_LEAGUE_COUNT: usize = 5;

/// Simulated backups are between this size and one megabyte more.
const BACKUP_BASE_SIZE_MB: f64 = 15.0;

fn validate_branding(branding: &BrandingSettings) -> Result<()> {
    if branding.app_name.trim().is_empty() {
        return Err(NexusError::validation("app name", "must not be empty"));
    }
    for (field, value) in [
        ("primary color", &branding.primary_color),
        ("secondary color", &branding.secondary_color),
    ] {
        if !is_hex_color(value) {
            return Err(NexusError::validation(field, format!("{:?} is not a #RRGGBB colour", value)));
        }
    }
    Ok(())
}

impl FantasyService {
    /// Reporting snapshot. Top leagues reflect current prize pools.
    pub async fn analytics(&self) -> AnalyticsData {
        self.read(|store| AnalyticsData {
            top_leagues: store.top_leagues(TOP_LEAGUE_COUNT),
            ..store.analytics.clone()
        })
        .await
    }

    pub async fn system_settings(&self) -> SystemSettingsData {
        self.read(|store| store.settings.clone()).await
    }

    /// Replace the supplied settings sections. Backups are managed separately.
    pub async fn update_system_settings(&self, update: SettingsUpdate) -> Result<SystemSettingsData> {
        if update.api_keys.is_none() && update.branding.is_none() {
            return Err(NexusError::validation("settings", "nothing to update"));
        }
        if let Some(branding) = &update.branding {
            validate_branding(branding)?;
        }

        self.write(|store| {
            if let Some(api_keys) = update.api_keys {
                store.settings.api_keys = api_keys;
                info!("replaced API keys");
            }
            if let Some(branding) = update.branding {
                info!(app_name = %branding.app_name, "updated branding");
                store.settings.branding = branding;
            }
            Ok(store.settings.clone())
        })
        .await
    }

    /// Take a new backup and list it first.
    pub async fn create_backup(&self) -> Backup {
        let size_mb = BACKUP_BASE_SIZE_MB + self.rng().gen::<f64>();

        self.write(|store| {
            let now = Utc::now();
            let backup = Backup {
                id: BackupId::new(store.issue_id("bkp", now)),
                timestamp: now,
                size: format!("{:.1} MB", size_mb),
            };
            store.settings.backups.insert(0, backup.clone());
            info!(id = %backup.id, size = %backup.size, "created backup");
            backup
        })
        .await
    }

    pub async fn delete_backup(&self, id: &BackupId) -> Result<()> {
        self.write(|store| {
            let index = store
                .settings
                .backups
                .iter()
                .position(|b| &b.id == id)
                .ok_or_else(|| NexusError::BackupNotFound { id: id.to_string() })?;
            store.settings.backups.remove(index);
            info!(id = %id, "deleted backup");
            Ok(())
        })
        .await
    }
}
