use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{PreviewError, PreviewResult};
use crate::persona::{find_persona, Persona};
use crate::store::{LocalStore, SELECTED_PERSONA_KEY};

/// The persisted form of the selected persona: `id` and `name` are required,
/// anything else written alongside them is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedPersona {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SelectedPersona {
    pub fn from_persona(persona: &Persona) -> Self {
        let mut extra = match serde_json::to_value(persona) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        extra.remove("id");
        extra.remove("name");
        Self {
            id: persona.id.clone(),
            name: persona.name.clone(),
            extra,
        }
    }

    /// Rebuilds the full persona when every field survived storage.
    pub fn to_persona(&self) -> Option<Persona> {
        let mut map = self.extra.clone();
        map.insert("id".to_string(), Value::String(self.id.clone()));
        map.insert("name".to_string(), Value::String(self.name.clone()));
        serde_json::from_value(Value::Object(map)).ok()
    }
}

pub fn parse_selected_persona(raw: &str) -> Option<SelectedPersona> {
    match serde_json::from_str(raw) {
        Ok(selected) => Some(selected),
        Err(err) => {
            tracing::warn!(error = %err, "failed to parse selected persona");
            None
        }
    }
}

pub async fn load_selected_persona(store: &LocalStore) -> Option<SelectedPersona> {
    store.get_json(SELECTED_PERSONA_KEY).await
}

pub async fn save_selected_persona(
    store: &LocalStore,
    selected: &SelectedPersona,
) -> Result<(), String> {
    store.set_json(SELECTED_PERSONA_KEY, selected).await?;
    tracing::info!(persona = %selected.id, "saved selected persona");
    Ok(())
}

pub async fn clear_selected_persona(store: &LocalStore) -> Result<bool, String> {
    store.remove(SELECTED_PERSONA_KEY).await
}

/// Picks the persona for an operation: an explicit id wins, otherwise the
/// stored selection is used.
pub async fn resolve_persona(
    store: &LocalStore,
    persona_id: Option<&str>,
) -> PreviewResult<Persona> {
    if let Some(id) = persona_id.map(str::trim).filter(|id| !id.is_empty()) {
        return find_persona(id).ok_or_else(|| PreviewError::UnknownPersona(id.to_string()));
    }

    let selected = load_selected_persona(store)
        .await
        .ok_or(PreviewError::MissingPersona)?;
    selected
        .to_persona()
        .or_else(|| find_persona(&selected.id))
        .ok_or(PreviewError::UnknownPersona(selected.id))
}
