//! `fpl-nexus system ...` handlers.

use super::common::{ksh, timed, CommandContext};
use crate::cli::SystemCmd;
use crate::models::{AnalyticsData, Backup, SettingsUpdate, SystemSettingsData};
use crate::Result;

fn analytics_lines(data: &AnalyticsData) -> Vec<String> {
    let mut lines = vec!["User trends:".to_string()];
    for point in &data.user_trends {
        lines.push(format!("  {:<4} {}", point.period, point.value));
    }

    lines.push("Retention:".to_string());
    for cohort in &data.retention_cohorts {
        let weeks: Vec<String> = cohort
            .weekly_retention
            .iter()
            .map(|w| w.map(|v| format!("{:.1}%", v)).unwrap_or_else(|| "-".to_string()))
            .collect();
        lines.push(format!(
            "  {:<18} {:>5} new  {}",
            cohort.cohort,
            cohort.new_users,
            weeks.join(" ")
        ));
    }

    lines.push("Top leagues:".to_string());
    for league in &data.top_leagues {
        lines.push(format!(
            "  {:<28} {:>3} players  {}",
            league.name,
            league.participants,
            ksh(league.prize_pool)
        ));
    }

    lines.push("Top players:".to_string());
    for player in &data.top_players {
        lines.push(format!("  {:<20} {}", player.name, ksh(player.total_winnings)));
    }
    lines
}

fn mask(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    format!("{}…", visible)
}

fn backup_line(backup: &Backup) -> String {
    format!(
        "{:<18} {}  {}",
        backup.id.as_str(),
        backup.timestamp.format("%Y-%m-%d %H:%M"),
        backup.size
    )
}

fn settings_lines(settings: &SystemSettingsData) -> Vec<String> {
    let keys = &settings.api_keys;
    let branding = &settings.branding;
    let mut lines = vec![
        format!(
            "Branding: {} ({} / {})",
            branding.app_name, branding.primary_color, branding.secondary_color
        ),
        format!(
            "API keys: fpl {}  stripe {} / {}  mpesa {} / {}",
            mask(&keys.fpl),
            mask(&keys.stripe_public),
            mask(&keys.stripe_secret),
            mask(&keys.mpesa_key),
            mask(&keys.mpesa_secret)
        ),
        "Backups:".to_string(),
    ];
    lines.extend(settings.backups.iter().map(|b| format!("  {}", backup_line(b))));
    lines
}

pub async fn handle_system(ctx: &CommandContext, cmd: SystemCmd) -> Result<()> {
    let service = &ctx.service;

    match cmd {
        SystemCmd::Analytics => {
            let data = timed("analytics", service.analytics()).await;
            ctx.emit(&data, analytics_lines)
        }

        SystemCmd::Settings => {
            let settings = timed("system_settings", service.system_settings()).await;
            ctx.emit(&settings, settings_lines)
        }

        SystemCmd::SetBranding {
            app_name,
            primary,
            secondary,
        } => {
            let mut branding = timed("system_settings", service.system_settings()).await.branding;
            if let Some(app_name) = app_name {
                branding.app_name = app_name;
            }
            if let Some(primary) = primary {
                branding.primary_color = primary;
            }
            if let Some(secondary) = secondary {
                branding.secondary_color = secondary;
            }
            let update = SettingsUpdate {
                branding: Some(branding),
                ..SettingsUpdate::default()
            };
            let settings = timed("update_system_settings", service.update_system_settings(update)).await?;
            ctx.persist().await?;
            ctx.emit(&settings, settings_lines)
        }

        SystemCmd::SetApiKeys {
            fpl,
            stripe_public,
            stripe_secret,
            mpesa_key,
            mpesa_secret,
        } => {
            let mut keys = timed("system_settings", service.system_settings()).await.api_keys;
            for (slot, value) in [
                (&mut keys.fpl, fpl),
                (&mut keys.stripe_public, stripe_public),
                (&mut keys.stripe_secret, stripe_secret),
                (&mut keys.mpesa_key, mpesa_key),
                (&mut keys.mpesa_secret, mpesa_secret),
            ] {
                if let Some(value) = value {
                    *slot = value;
                }
            }
            let update = SettingsUpdate {
                api_keys: Some(keys),
                ..SettingsUpdate::default()
            };
            let settings = timed("update_system_settings", service.update_system_settings(update)).await?;
            ctx.persist().await?;
            ctx.emit(&settings, settings_lines)
        }

        SystemCmd::Backup => {
            let backup = timed("create_backup", service.create_backup()).await;
            ctx.persist().await?;
            ctx.emit(&backup, |b| vec![format!("Created backup {}", backup_line(b))])
        }

        SystemCmd::DeleteBackup { id } => {
            timed("delete_backup", service.delete_backup(&id)).await?;
            ctx.persist().await?;
            ctx.emit(&id, |id| vec![format!("Deleted backup {}.", id)])
        }
    }
}
