use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PreviewError, PreviewResult};
use crate::persona::Persona;
use crate::store::{LocalStore, CONTENT_LIBRARY_KEY};
use crate::{stable_hash64, truncate_preview, ContentKind};

const PREVIEW_CHARS: usize = 100;
pub const MAX_ITEMS: usize = 200;

/// A saved piece of content, stored in the shape the web client used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub persona_id: String,
    pub persona_name: String,
    pub content: String,
    pub preview: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContentItem {
    pub title: String,
    pub kind: ContentKind,
    pub content: String,
}

impl NewContentItem {
    pub fn into_item(self, persona: &Persona, created_at: DateTime<Utc>) -> PreviewResult<ContentItem> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(PreviewError::MissingTitle);
        }
        let content = self.content.trim().to_string();
        if content.is_empty() {
            return Err(PreviewError::MissingContent);
        }

        let id = format!(
            "item_{:x}",
            stable_hash64(&format!("{}:{}:{}", title, persona.id, created_at.to_rfc3339()))
        );
        let preview = truncate_preview(&content, PREVIEW_CHARS);

        Ok(ContentItem {
            id,
            title,
            kind: self.kind,
            persona_id: persona.id.clone(),
            persona_name: persona.name.clone(),
            content,
            preview,
            created_at,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct LibraryFilter {
    pub kind: Option<ContentKind>,
    pub query: Option<String>,
}

impl LibraryFilter {
    pub fn matches(&self, item: &ContentItem) -> bool {
        if let Some(kind) = self.kind {
            if item.kind != kind {
                return false;
            }
        }
        let query = match self.query.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => query.to_lowercase(),
            _ => return true,
        };
        item.title.to_lowercase().contains(&query)
            || item.content.to_lowercase().contains(&query)
            || item.persona_name.to_lowercase().contains(&query)
    }
}

/// Content library persisted under the library key of the local store.
pub struct ContentLibrary<'a> {
    store: &'a LocalStore,
}

impl<'a> ContentLibrary<'a> {
    pub fn new(store: &'a LocalStore) -> Self {
        Self { store }
    }

    /// Newest first; an unreadable library reads as empty.
    pub async fn list(&self) -> Vec<ContentItem> {
        self.store
            .get_json::<Vec<ContentItem>>(CONTENT_LIBRARY_KEY)
            .await
            .unwrap_or_default()
    }

    pub async fn search(&self, filter: &LibraryFilter) -> Vec<ContentItem> {
        self.list()
            .await
            .into_iter()
            .filter(|item| filter.matches(item))
            .collect()
    }

    pub async fn get(&self, item_id: &str) -> Option<ContentItem> {
        self.list().await.into_iter().find(|item| item.id == item_id)
    }

    /// Saves `item` at the front. Beyond `MAX_ITEMS` the oldest entries are
    /// dropped.
    pub async fn add(&self, item: ContentItem) -> Result<ContentItem, String> {
        let dropped = self
            .store
            .update_json(CONTENT_LIBRARY_KEY, |items: &mut Vec<ContentItem>| {
                items.retain(|existing| existing.id != item.id);
                items.insert(0, item.clone());
                let dropped = items.len().saturating_sub(MAX_ITEMS);
                items.truncate(MAX_ITEMS);
                dropped
            })
            .await?;
        if dropped > 0 {
            tracing::info!(dropped, "library full, dropped oldest items");
        }
        tracing::info!(item = %item.id, title = %item.title, "saved library item");
        Ok(item)
    }

    pub async fn delete(&self, item_id: &str) -> Result<bool, String> {
        let removed = self
            .store
            .update_json(CONTENT_LIBRARY_KEY, |items: &mut Vec<ContentItem>| {
                let before = items.len();
                items.retain(|item| item.id != item_id);
                items.len() != before
            })
            .await?;
        if removed {
            tracing::info!(item = %item_id, "removed library item");
        }
        Ok(removed)
    }
}
