//! `fpl-nexus content ...` handlers.

use super::common::{timed, CommandContext};
use crate::cli::ContentCmd;
use crate::models::{Announcement, AnnouncementDraft, HelpArticle, HelpArticleDraft, HomepageContent};
use crate::Result;

fn homepage_lines(content: &HomepageContent) -> Vec<String> {
    vec![
        content.hero_title.clone(),
        content.hero_subtitle.clone(),
        format!("Banner: {}", content.banner_image_url),
    ]
}

fn announcement_line(a: &Announcement) -> String {
    format!(
        "{:<16} {}  {:<9} {}",
        a.id.as_str(),
        a.date.format("%Y-%m-%d"),
        a.status,
        a.title
    )
}

fn help_line(a: &HelpArticle) -> String {
    format!(
        "{:<16} [{}] {} (updated {})",
        a.id.as_str(),
        a.category,
        a.question,
        a.last_updated.format("%Y-%m-%d")
    )
}

pub async fn handle_content(ctx: &CommandContext, cmd: ContentCmd) -> Result<()> {
    let service = &ctx.service;

    match cmd {
        ContentCmd::Homepage => {
            let content = timed("homepage_content", service.homepage_content()).await;
            ctx.emit(&content, homepage_lines)
        }

        ContentCmd::UpdateHomepage {
            title,
            subtitle,
            banner_url,
        } => {
            let mut content = timed("homepage_content", service.homepage_content()).await;
            if let Some(title) = title {
                content.hero_title = title;
            }
            if let Some(subtitle) = subtitle {
                content.hero_subtitle = subtitle;
            }
            if let Some(banner_url) = banner_url {
                content.banner_image_url = banner_url;
            }
            let saved = timed("update_homepage_content", service.update_homepage_content(content)).await?;
            ctx.persist().await?;
            ctx.emit(&saved, homepage_lines)
        }

        ContentCmd::Announcements => {
            let announcements = timed("announcements", service.announcements()).await;
            ctx.emit(announcements.as_slice(), |all| all.iter().map(announcement_line).collect())
        }

        ContentCmd::SaveAnnouncement {
            id,
            title,
            content,
            status,
        } => {
            let draft = AnnouncementDraft {
                id,
                title,
                content,
                status,
            };
            let saved = timed("save_announcement", service.save_announcement(draft)).await?;
            ctx.persist().await?;
            ctx.emit(&saved, |a| vec![announcement_line(a)])
        }

        ContentCmd::DeleteAnnouncement { id } => {
            timed("delete_announcement", service.delete_announcement(&id)).await?;
            ctx.persist().await?;
            ctx.emit(&id, |id| vec![format!("Deleted announcement {}.", id)])
        }

        ContentCmd::Help => {
            let articles = timed("help_articles", service.help_articles()).await;
            ctx.emit(articles.as_slice(), |all| all.iter().map(help_line).collect())
        }

        ContentCmd::SaveHelp {
            id,
            question,
            answer,
            category,
        } => {
            let draft = HelpArticleDraft {
                id,
                question,
                answer,
                category,
            };
            let saved = timed("save_help_article", service.save_help_article(draft)).await?;
            ctx.persist().await?;
            ctx.emit(&saved, |a| vec![help_line(a), format!("  {}", a.answer)])
        }

        ContentCmd::DeleteHelp { id } => {
            timed("delete_help_article", service.delete_help_article(&id)).await?;
            ctx.persist().await?;
            ctx.emit(&id, |id| vec![format!("Deleted help article {}.", id)])
        }
    }
}
