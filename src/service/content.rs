//! CMS operations: homepage hero, announcements and help articles.
//!
//! Saves are upserts. A draft whose ID matches a stored record updates it in
//! place; any other draft creates a record at the front of the list, keeping
//! the supplied ID if there is one.

use super::FantasyService;
use crate::cli::types::{AnnouncementId, HelpArticleId};
use crate::error::{NexusError, Result};
use crate::models::{Announcement, AnnouncementDraft, HelpArticle, HelpArticleDraft, HomepageContent};
use chrono::Utc;
use tracing::info;

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NexusError::validation(field, "must not be empty"));
    }
    Ok(())
}

impl FantasyService {
    pub async fn homepage_content(&self) -> HomepageContent {
        self.read(|store| store.homepage.clone()).await
    }

    pub async fn update_homepage_content(&self, content: HomepageContent) -> Result<HomepageContent> {
        require("hero title", &content.hero_title)?;

        self.write(|store| {
            store.homepage = content;
            info!("updated homepage content");
            Ok(store.homepage.clone())
        })
        .await
    }

    /// Announcements, newest first.
    pub async fn announcements(&self) -> Vec<Announcement> {
        self.read(|store| store.announcements.clone()).await
    }

    /// Create or update an announcement. Updates keep the original date.
    pub async fn save_announcement(&self, draft: AnnouncementDraft) -> Result<Announcement> {
        require("title", &draft.title)?;

        self.write(|store| {
            let existing = draft
                .id
                .as_ref()
                .and_then(|id| store.announcements.iter_mut().find(|a| &a.id == id));

            if let Some(announcement) = existing {
                announcement.title = draft.title;
                announcement.content = draft.content;
                announcement.status = draft.status;
                info!(id = %announcement.id, "updated announcement");
                return Ok(announcement.clone());
            }

            let now = Utc::now();
            let id = match draft.id {
                Some(id) => id,
                None => AnnouncementId::new(store.issue_id("an", now)),
            };
            let announcement = Announcement {
                id,
                title: draft.title,
                content: draft.content,
                date: now,
                status: draft.status,
            };
            info!(id = %announcement.id, status = %announcement.status, "created announcement");
            store.announcements.insert(0, announcement.clone());
            Ok(announcement)
        })
        .await
    }

    pub async fn delete_announcement(&self, id: &AnnouncementId) -> Result<()> {
        self.write(|store| {
            let index = store
                .announcements
                .iter()
                .position(|a| &a.id == id)
                .ok_or_else(|| NexusError::AnnouncementNotFound { id: id.to_string() })?;
            store.announcements.remove(index);
            info!(id = %id, "deleted announcement");
            Ok(())
        })
        .await
    }

    pub async fn help_articles(&self) -> Vec<HelpArticle> {
        self.read(|store| store.help_articles.clone()).await
    }

    /// Create or update a help article, stamping it with the current time.
    pub async fn save_help_article(&self, draft: HelpArticleDraft) -> Result<HelpArticle> {
        require("question", &draft.question)?;
        require("answer", &draft.answer)?;

        self.write(|store| {
            let now = Utc::now();
            let existing = draft
                .id
                .as_ref()
                .and_then(|id| store.help_articles.iter_mut().find(|a| &a.id == id));

            if let Some(article) = existing {
                article.question = draft.question;
                article.answer = draft.answer;
                article.category = draft.category;
                article.last_updated = now;
                info!(id = %article.id, "updated help article");
                return Ok(article.clone());
            }

            let id = match draft.id {
                Some(id) => id,
                None => HelpArticleId::new(store.issue_id("ha", now)),
            };
            let article = HelpArticle {
                id,
                question: draft.question,
                answer: draft.answer,
                category: draft.category,
                last_updated: now,
            };
            info!(id = %article.id, category = %article.category, "created help article");
            store.help_articles.insert(0, article.clone());
            Ok(article)
        })
        .await
    }

    pub async fn delete_help_article(&self, id: &HelpArticleId) -> Result<()> {
        self.write(|store| {
            let index = store
                .help_articles
                .iter()
                .position(|a| &a.id == id)
                .ok_or_else(|| NexusError::HelpArticleNotFound { id: id.to_string() })?;
            store.help_articles.remove(index);
            info!(id = %id, "deleted help article");
            Ok(())
        })
        .await
    }
}
