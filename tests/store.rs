use chrono::{TimeZone, Utc};
use persona_playback::library::{ContentLibrary, LibraryFilter, NewContentItem, MAX_ITEMS};
use persona_playback::persona::{
    clear_selected_persona, find_persona, load_selected_persona, parse_selected_persona,
    resolve_persona, save_selected_persona, SelectedPersona,
};
use persona_playback::store::{LocalStore, CONTENT_LIBRARY_KEY, SELECTED_PERSONA_KEY};
use persona_playback::{ContentKind, PreviewError};
use std::sync::Arc;
use tempfile::TempDir;

async fn fresh_store(dir: &TempDir) -> LocalStore {
    LocalStore::load(dir.path().join("state").join("playback.json")).await
}

fn new_item(title: &str, kind: ContentKind, content: &str) -> NewContentItem {
    NewContentItem {
        title: title.to_string(),
        kind,
        content: content.to_string(),
    }
}

#[tokio::test]
async fn values_survive_a_reload() {
    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir).await;
    store.set_raw("greeting", "\"hello\"".to_string()).await.unwrap();

    let reloaded = LocalStore::load(store.path().to_path_buf()).await;
    assert_eq!(reloaded.get_json::<String>("greeting").await.as_deref(), Some("hello"));
}

#[tokio::test]
async fn corrupt_state_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("playback.json");
    std::fs::write(&path, "{not json").unwrap();

    let store = LocalStore::load(path).await;
    assert!(store.get_raw(CONTENT_LIBRARY_KEY).await.is_none());
    assert!(ContentLibrary::new(&store).list().await.is_empty());
}

#[tokio::test]
async fn malformed_selection_reads_as_absent() {
    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir).await;
    store
        .set_raw(SELECTED_PERSONA_KEY, "{\"id\": 7".to_string())
        .await
        .unwrap();

    assert!(load_selected_persona(&store).await.is_none());
    assert_eq!(
        resolve_persona(&store, None).await.unwrap_err(),
        PreviewError::MissingPersona
    );
}

#[test]
fn selection_keeps_unknown_fields() {
    let raw = r#"{"id":"pd3","name":"Creative Designer","pinned":true,"color":"teal"}"#;
    let selected = parse_selected_persona(raw).unwrap();

    assert_eq!(selected.id, "pd3");
    assert_eq!(selected.extra.get("pinned"), Some(&serde_json::Value::Bool(true)));

    let encoded = serde_json::to_value(&selected).unwrap();
    assert_eq!(encoded["color"], "teal");
    assert!(parse_selected_persona(r#"{"name":"no id"}"#).is_none());
}

#[tokio::test]
async fn resolve_prefers_explicit_id_over_stored_selection() {
    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir).await;
    let stored = SelectedPersona::from_persona(&find_persona("2").unwrap());
    save_selected_persona(&store, &stored).await.unwrap();

    assert_eq!(resolve_persona(&store, None).await.unwrap().id, "2");
    assert_eq!(resolve_persona(&store, Some("pd5")).await.unwrap().id, "pd5");
    assert_eq!(
        resolve_persona(&store, Some("ghost")).await.unwrap_err(),
        PreviewError::UnknownPersona("ghost".to_string())
    );

    assert!(clear_selected_persona(&store).await.unwrap());
    assert!(!clear_selected_persona(&store).await.unwrap());
}

#[tokio::test]
async fn partial_selection_falls_back_to_catalog() {
    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir).await;
    store
        .set_raw(
            SELECTED_PERSONA_KEY,
            r#"{"id":"6","name":"Retired Explorer"}"#.to_string(),
        )
        .await
        .unwrap();

    let persona = resolve_persona(&store, None).await.unwrap();
    assert_eq!(persona.engagement, 58);
}

#[tokio::test]
async fn library_lists_newest_first_and_deletes() {
    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir).await;
    let library = ContentLibrary::new(&store);
    let persona = find_persona("1").unwrap();

    let first = new_item("Launch post", ContentKind::Text, "We shipped it.")
        .into_item(&persona, Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap())
        .unwrap();
    let second = new_item("Teaser clip", ContentKind::Video, "Thirty seconds of launch.")
        .into_item(&persona, Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap())
        .unwrap();
    library.add(first.clone()).await.unwrap();
    library.add(second.clone()).await.unwrap();

    let titles: Vec<String> = library.list().await.into_iter().map(|i| i.title).collect();
    assert_eq!(titles, vec!["Teaser clip", "Launch post"]);
    assert_eq!(library.get(&first.id).await, Some(first.clone()));

    assert!(library.delete(&first.id).await.unwrap());
    assert!(!library.delete(&first.id).await.unwrap());
    assert_eq!(library.list().await, vec![second]);
}

#[tokio::test]
async fn library_search_filters_by_kind_and_text() {
    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir).await;
    let library = ContentLibrary::new(&store);
    let persona = find_persona("pd6").unwrap();
    let at = Utc.with_ymd_and_hms(2026, 5, 10, 12, 0, 0).unwrap();

    for (title, kind, content) in [
        ("Spring promo", ContentKind::Image, "Flowers and discounts"),
        ("Podcast intro", ContentKind::Audio, "Welcome back to the show"),
        ("Promo thread", ContentKind::Text, "Spring deals all week"),
    ] {
        library
            .add(new_item(title, kind, content).into_item(&persona, at).unwrap())
            .await
            .unwrap();
    }

    let spring = library
        .search(&LibraryFilter {
            kind: None,
            query: Some("SPRING".to_string()),
        })
        .await;
    assert_eq!(spring.len(), 2);

    let audio = library
        .search(&LibraryFilter {
            kind: Some(ContentKind::Audio),
            query: None,
        })
        .await;
    assert_eq!(audio.len(), 1);
    assert_eq!(audio[0].persona_name, "Social Media Influencer");
}

#[test]
fn new_items_validate_and_truncate_preview() {
    let persona = find_persona("4").unwrap();
    let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

    let err = new_item("  ", ContentKind::Text, "body")
        .into_item(&persona, at)
        .unwrap_err();
    assert_eq!(err, PreviewError::MissingTitle);

    let err = new_item("Title", ContentKind::Text, "")
        .into_item(&persona, at)
        .unwrap_err();
    assert_eq!(err, PreviewError::MissingContent);

    let long = "x".repeat(150);
    let item = new_item("Title", ContentKind::Text, &long)
        .into_item(&persona, at)
        .unwrap();
    assert!(item.id.starts_with("item_"));
    assert!(item.preview.ends_with("..."));
    assert_eq!(item.preview.chars().count(), 103);

    let encoded = serde_json::to_value(&item).unwrap();
    assert_eq!(encoded["type"], "text");
    assert_eq!(encoded["personaId"], "4");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_adds_keep_every_item() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(fresh_store(&dir).await);
    let persona = find_persona("2").unwrap();
    let base = Utc.with_ymd_and_hms(2026, 6, 1, 8, 0, 0).unwrap();

    let mut handles = Vec::new();
    for index in 0..40i64 {
        let store = store.clone();
        let item = new_item(&format!("Draft {}", index), ContentKind::Text, "Same body text")
            .into_item(&persona, base + chrono::Duration::minutes(index))
            .unwrap();
        handles.push(tokio::spawn(async move {
            ContentLibrary::new(&store).add(item).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(ContentLibrary::new(&store).list().await.len(), 40);
    let reloaded = LocalStore::load(store.path().to_path_buf()).await;
    assert_eq!(ContentLibrary::new(&reloaded).list().await.len(), 40);
}

#[tokio::test]
async fn library_drops_oldest_items_past_capacity() {
    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir).await;
    let library = ContentLibrary::new(&store);
    let persona = find_persona("pd1").unwrap();
    let base = Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap();

    for index in 0..(MAX_ITEMS as i64 + 3) {
        let item = new_item(&format!("Note {}", index), ContentKind::Text, "body")
            .into_item(&persona, base + chrono::Duration::seconds(index))
            .unwrap();
        library.add(item).await.unwrap();
    }

    let items = library.list().await;
    assert_eq!(items.len(), MAX_ITEMS);
    assert_eq!(items[0].title, format!("Note {}", MAX_ITEMS + 2));
    assert_eq!(items[MAX_ITEMS - 1].title, "Note 3");
}
