//! CMS content: homepage hero, announcements and help-center articles.

use crate::cli::types::{AnnouncementId, AnnouncementStatus, HelpArticleId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub banner_image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: AnnouncementId,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub status: AnnouncementStatus,
}

/// Announcement as submitted by an editor. With an `id` it updates, without one it creates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementDraft {
    #[serde(default)]
    pub id: Option<AnnouncementId>,
    pub title: String,
    pub content: String,
    pub status: AnnouncementStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpArticle {
    pub id: HelpArticleId,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpArticleDraft {
    #[serde(default)]
    pub id: Option<HelpArticleId>,
    pub question: String,
    pub answer: String,
    pub category: String,
}
